use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use thiserror::Error as ThisError;

use super::dto::Message;

#[derive(Debug)]
pub struct Error {
    pub code: StatusCode,
    pub body: Json<Message>,
}

impl Error {
    pub fn new(code: StatusCode, message: &str) -> Self {
        Self {
            code,
            body: Json(Message::new(message)),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        (self.code, self.body).into_response()
    }
}

impl From<(StatusCode, &str)> for Error {
    fn from((code, msg): (StatusCode, &str)) -> Self {
        Self::new(code, msg)
    }
}

/// Failures raised by [`Ledger`][crate::ledger::Ledger] operations
#[derive(Debug, ThisError)]
pub enum LedgerError {
    #[error("Name and Salary are required.")]
    MissingNameOrSalary,

    #[error("Client already exists.")]
    DuplicateClient,

    #[error("Account not found")]
    AccountNotFound,

    #[error("Client not found")]
    ClientNotFound,

    #[error("Sender or receiver account not found")]
    TransferPartyNotFound,

    #[error("Insufficient balance for {0}")]
    InsufficientBalance(&'static str),

    #[error("creation_date must be formatted as YYYY-MM-DD HH:MM:SS")]
    InvalidCreationDate,

    #[error("No clients found")]
    NoClients,

    #[error("Failed to write client snapshot: {0}")]
    Snapshot(#[from] csv::Error),
}

impl From<LedgerError> for Error {
    fn from(error: LedgerError) -> Self {
        let code = match error {
            LedgerError::AccountNotFound
            | LedgerError::ClientNotFound
            | LedgerError::TransferPartyNotFound
            | LedgerError::NoClients => StatusCode::NOT_FOUND,
            LedgerError::MissingNameOrSalary
            | LedgerError::DuplicateClient
            | LedgerError::InsufficientBalance(_)
            | LedgerError::InvalidCreationDate => StatusCode::BAD_REQUEST,
            LedgerError::Snapshot(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::new(code, &error.to_string())
    }
}
