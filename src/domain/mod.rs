//! Domain layer - Ledger records and search criteria

pub mod filter;
pub mod record;

pub use filter::SearchFilter;
pub use record::{format_amount, parse_amount, Balance, Record, RecordFields, EXPENSE, INCOME};
