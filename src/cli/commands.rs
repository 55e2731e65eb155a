//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tally")]
#[command(about = "Personal income and expense ledger", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Ledger file (default: `file` from tally.toml, else records.txt)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Show debug diagnostics on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the ledger file if it does not exist
    Init,

    /// Append a record
    Add {
        /// Date (YYYY-MM-DD)
        date: String,

        /// Category (Income or Expense)
        category: String,

        /// Amount
        #[arg(allow_hyphen_values = true)]
        amount: String,

        /// Free-text description
        #[arg(default_value = "")]
        description: String,
    },

    /// Show balance, total incomes and total expenses
    Balance,

    /// Show every record
    List,

    /// Find records matching all given criteria
    Search {
        /// Exact category
        #[arg(short, long)]
        category: Option<String>,

        /// Earliest date, inclusive (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// Latest date, inclusive (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,

        /// Smallest amount, inclusive
        #[arg(long, allow_hyphen_values = true)]
        min: Option<String>,

        /// Largest amount, inclusive
        #[arg(long, allow_hyphen_values = true)]
        max: Option<String>,
    },

    /// Replace the first record containing the given fields
    Edit {
        /// Date of the record to edit
        #[arg(long)]
        date: String,

        /// Category of the record to edit
        #[arg(long)]
        category: String,

        /// Amount of the record to edit
        #[arg(long, allow_hyphen_values = true)]
        amount: String,

        /// Description of the record to edit
        #[arg(long, default_value = "")]
        description: String,

        /// New date (default: unchanged)
        #[arg(long)]
        new_date: Option<String>,

        /// New category (default: unchanged)
        #[arg(long)]
        new_category: Option<String>,

        /// New amount (default: unchanged)
        #[arg(long, allow_hyphen_values = true)]
        new_amount: Option<String>,

        /// New description (default: unchanged)
        #[arg(long)]
        new_description: Option<String>,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Interactive menu (default when no command is given)
    Shell,
}
