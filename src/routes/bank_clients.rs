use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use utoipa::OpenApi;
use uuid::Uuid;

use crate::{
    models::{
        dto::{
            ClientIdQuery, CreateAccount, CreationDateQuery, DeleteAccount, DepositAccount,
            Message, TransferAccount, WithdrawAccount,
        },
        BankClient, Error,
    },
    AppState,
};

/// Defines the OpenAPI spec for bank client endpoints
#[derive(OpenApi)]
#[openapi(paths(
    create_account_handler,
    delete_account_handler,
    deposit_handler,
    withdraw_handler,
    transfer_handler,
    retrieve_by_id_handler,
    retrieve_by_salary_handler,
    retrieve_by_balance_handler,
    retrieve_by_creation_date_handler,
    retrieve_highest_salary_handler,
))]
pub struct BankClientsApi;

/// Used to group bank client endpoints together in the OpenAPI documentation
pub const BANK_CLIENTS_API_GROUP: &str = "BANK_CLIENTS";

/// Salary/balance cutoff for the fixed-threshold retrieval endpoints
const REPORT_THRESHOLD: f64 = 50.0;

/// Builds a router for bank client routes
pub fn bank_client_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/createAccount", post(create_account_handler))
        .route("/deleteAccount", post(delete_account_handler))
        .route("/deposit", post(deposit_handler))
        .route("/withdraw", post(withdraw_handler))
        .route("/transfer", post(transfer_handler))
        .route("/RetrieveByID", get(retrieve_by_id_handler))
        .route("/RetrieveBySalary", get(retrieve_by_salary_handler))
        .route("/RetrieveByBalance", get(retrieve_by_balance_handler))
        .route("/RetrieveByCreationDate", get(retrieve_by_creation_date_handler))
        .route(
            "/RetrieveTheClientWithTheHighestSalary",
            get(retrieve_highest_salary_handler),
        )
}

/// Create account handler function
#[utoipa::path(
    post,
    path = "/api/BankClients/createAccount",
    tag = BANK_CLIENTS_API_GROUP,
    request_body = CreateAccount,
    responses(
        (status = 200, description = "Account successfully created", body = BankClient),
        (status = 400, description = "Client already exists, or name/salary missing"),
    )
)]
pub async fn create_account_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateAccount>,
) -> Result<Json<BankClient>, Error> {
    let client = state.ledger.create_account(&body.name, body.salary)?;
    Ok(Json(client))
}

/// Delete account handler function
#[utoipa::path(
    post,
    path = "/api/BankClients/deleteAccount",
    tag = BANK_CLIENTS_API_GROUP,
    request_body = DeleteAccount,
    responses(
        (status = 200, description = "Account deleted", body = Message),
        (status = 404, description = "Account not found"),
    )
)]
pub async fn delete_account_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<DeleteAccount>,
) -> Result<Json<Message>, Error> {
    state.ledger.delete_account(body.id)?;
    Ok(Json(Message::new("Account deleted successfully")))
}

/// Deposit handler function
#[utoipa::path(
    post,
    path = "/api/BankClients/deposit",
    tag = BANK_CLIENTS_API_GROUP,
    request_body = DepositAccount,
    responses(
        (status = 200, description = "Amount deposited", body = Message),
        (status = 404, description = "Account not found"),
    )
)]
pub async fn deposit_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<DepositAccount>,
) -> Result<Json<Message>, Error> {
    let balance = state.ledger.deposit(body.id, body.deposit_amount)?;
    Ok(Json(Message::new(&format!(
        "Deposited {} successfully. New balance: {}",
        body.deposit_amount, balance
    ))))
}

/// Withdraw handler function
#[utoipa::path(
    post,
    path = "/api/BankClients/withdraw",
    tag = BANK_CLIENTS_API_GROUP,
    request_body = WithdrawAccount,
    responses(
        (status = 200, description = "Amount withdrawn", body = Message),
        (status = 400, description = "Insufficient balance for withdrawal"),
        (status = 404, description = "Account not found"),
    )
)]
pub async fn withdraw_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<WithdrawAccount>,
) -> Result<Json<Message>, Error> {
    let balance = state.ledger.withdraw(body.id, body.withdraw_amount)?;
    Ok(Json(Message::new(&format!(
        "Withdrew {} successfully. New balance: {}",
        body.withdraw_amount, balance
    ))))
}

/// Transfer handler function
#[utoipa::path(
    post,
    path = "/api/BankClients/transfer",
    tag = BANK_CLIENTS_API_GROUP,
    request_body = TransferAccount,
    responses(
        (status = 200, description = "Amount transferred", body = Message),
        (status = 400, description = "Insufficient balance for transfer"),
        (status = 404, description = "Sender or receiver account not found"),
    )
)]
pub async fn transfer_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<TransferAccount>,
) -> Result<Json<Message>, Error> {
    let (sender, receiver) =
        state
            .ledger
            .transfer(body.sender_id, body.receiver_id, body.transfer_amount)?;
    Ok(Json(Message::new(&format!(
        "Transferred {} from {} to {}",
        body.transfer_amount, sender, receiver
    ))))
}

/// Retrieve by id handler function
#[utoipa::path(
    get,
    path = "/api/BankClients/RetrieveByID",
    tag = BANK_CLIENTS_API_GROUP,
    params(
        ("clientId" = String, Query, description = "Client ID")
    ),
    responses(
        (status = 200, description = "Client found", body = BankClient),
        (status = 404, description = "Client not found"),
    )
)]
pub async fn retrieve_by_id_handler(
    State(state): State<Arc<AppState>>,
    axum::extract::Query(query): axum::extract::Query<ClientIdQuery>,
) -> Result<Json<BankClient>, Error> {
    // A string that does not parse as a UUID cannot name a live client
    let client_id = Uuid::parse_str(&query.client_id)
        .map_err(|_| Error::new(StatusCode::NOT_FOUND, "Client not found"))?;
    let client = state.ledger.get_by_id(client_id)?;
    Ok(Json(client))
}

/// Retrieve by salary handler function
#[utoipa::path(
    get,
    path = "/api/BankClients/RetrieveBySalary",
    tag = BANK_CLIENTS_API_GROUP,
    responses(
        (status = 200, description = "Clients with salary above 50", body = Vec<BankClient>),
    )
)]
pub async fn retrieve_by_salary_handler(
    State(state): State<Arc<AppState>>,
) -> Json<Vec<BankClient>> {
    Json(state.ledger.clients_with_salary_above(REPORT_THRESHOLD))
}

/// Retrieve by balance handler function
#[utoipa::path(
    get,
    path = "/api/BankClients/RetrieveByBalance",
    tag = BANK_CLIENTS_API_GROUP,
    responses(
        (status = 200, description = "Clients with balance above 50", body = Vec<BankClient>),
    )
)]
pub async fn retrieve_by_balance_handler(
    State(state): State<Arc<AppState>>,
) -> Json<Vec<BankClient>> {
    Json(state.ledger.clients_with_balance_above(REPORT_THRESHOLD))
}

/// Retrieve by creation date handler function
#[utoipa::path(
    get,
    path = "/api/BankClients/RetrieveByCreationDate",
    tag = BANK_CLIENTS_API_GROUP,
    params(
        ("creation_date" = String, Query, description = "Cutoff timestamp, YYYY-MM-DD HH:MM:SS")
    ),
    responses(
        (status = 200, description = "Clients created after the given timestamp", body = Vec<BankClient>),
        (status = 400, description = "Unparsable timestamp"),
    )
)]
pub async fn retrieve_by_creation_date_handler(
    State(state): State<Arc<AppState>>,
    axum::extract::Query(query): axum::extract::Query<CreationDateQuery>,
) -> Result<Json<Vec<BankClient>>, Error> {
    let clients = state.ledger.clients_created_after(&query.creation_date)?;
    Ok(Json(clients))
}

/// Retrieve highest salary handler function
#[utoipa::path(
    get,
    path = "/api/BankClients/RetrieveTheClientWithTheHighestSalary",
    tag = BANK_CLIENTS_API_GROUP,
    responses(
        (status = 200, description = "Client with the highest salary", body = BankClient),
        (status = 404, description = "No clients found"),
    )
)]
pub async fn retrieve_highest_salary_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<BankClient>, Error> {
    let client = state.ledger.highest_salary_client()?;
    Ok(Json(client))
}
