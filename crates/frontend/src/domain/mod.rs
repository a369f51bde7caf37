pub mod a001_account;
pub mod a002_transaction;
pub mod a003_security;
pub mod a004_trade_entry;
pub mod a005_trade_exit;
