pub mod forms;
pub mod http;
