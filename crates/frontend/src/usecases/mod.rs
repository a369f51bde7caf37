pub mod u501_security_search;
