//! Infrastructure layer - File storage and configuration

pub mod codec;
pub mod config;
pub mod store;

pub use config::Config;
pub use store::{FileLedgerStore, LedgerRepository, DEFAULT_LEDGER_FILE};
