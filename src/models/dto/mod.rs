pub mod bank_client;
pub mod message;
pub use bank_client::*;
pub use message::Message;

use utoipa::OpenApi;
#[derive(OpenApi)]
#[openapi(
    components(
        schemas(
            Message,
            CreateAccount,
            DeleteAccount,
            DepositAccount,
            WithdrawAccount,
            TransferAccount,
            crate::models::BankClient,
        ),
    )
)]
/// Captures OpenAPI schemas and canned responses defined in the DTO module
pub struct OpenApiSchemas;
