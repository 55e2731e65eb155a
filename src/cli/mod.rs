//! CLI layer - Command-line interface

pub mod commands;
pub mod input;
pub mod output;
pub mod shell;

pub use commands::{Cli, Commands};
pub use output::{format_balance, format_record_list};
pub use shell::Shell;
