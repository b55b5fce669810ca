use crate::config::Config;
use crate::ledger::Ledger;

pub struct AppState {
    pub ledger: Ledger,
    pub config: Config,
}
