//! tally - Personal finance ledger
//!
//! Records income and expense entries in a plain text file and answers
//! balance and search queries over them.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::LedgerError;
