pub mod app_state;
pub mod config;
pub mod ledger;
pub mod models;
pub mod routes;
pub use app_state::AppState;
pub use config::Config;
