use chrono::Local;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Render format for creation timestamps, local time, no timezone marker
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Deserialize, Serialize, Clone, ToSchema)]
pub struct BankClient {
    #[serde(rename = "Id")]
    pub id: Uuid,
    #[serde(rename = "Name")]
    pub name: String,
    pub salary: f64,
    pub balance: f64,
    #[serde(rename = "creationDate")]
    pub creation_date: String,
}

impl BankClient {
    /// Builds a fresh client record; the opening balance equals the declared salary
    pub fn new(name: &str, salary: f64) -> Self {
        BankClient {
            id: Uuid::new_v4(),
            name: name.to_string(),
            salary,
            balance: salary,
            creation_date: Local::now().format(DATE_FORMAT).to_string(),
        }
    }
}
