pub mod bank_client;
pub mod dto;
pub mod error;
pub use bank_client::{BankClient, DATE_FORMAT};
pub use error::{Error, LedgerError};
