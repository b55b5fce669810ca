use dotenv::dotenv;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    /// Path the client snapshot is rewritten to after every mutation
    pub csv_path: String,
}

impl Config {
    pub fn init() -> Config {
        dotenv().ok();
        let csv_path =
            env::var("CLIENTS_CSV_PATH").unwrap_or_else(|_| "clients.csv".to_string());
        Config { csv_path }
    }
}
