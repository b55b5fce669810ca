use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAccount {
    #[serde(rename = "Name")]
    pub name: String,
    pub salary: f64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct DeleteAccount {
    #[serde(rename = "Id")]
    pub id: Uuid,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct DepositAccount {
    #[serde(rename = "Id")]
    pub id: Uuid,
    #[serde(rename = "depositAmount")]
    pub deposit_amount: f64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct WithdrawAccount {
    #[serde(rename = "Id")]
    pub id: Uuid,
    #[serde(rename = "withdrawAmount")]
    pub withdraw_amount: f64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct TransferAccount {
    #[serde(rename = "senderId")]
    pub sender_id: Uuid,
    #[serde(rename = "receiverId")]
    pub receiver_id: Uuid,
    #[serde(rename = "transferAmount")]
    pub transfer_amount: f64,
}

/// Query parameters for the retrieve-by-id endpoint. The id arrives as a raw
/// string; anything that is not a well-formed UUID cannot name a live client.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ClientIdQuery {
    #[serde(rename = "clientId")]
    pub client_id: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreationDateQuery {
    pub creation_date: String,
}
