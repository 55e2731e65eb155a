//! Output formatting utilities

use crate::domain::{Balance, RecordFields};

/// Format balance totals with two decimals
pub fn format_balance(balance: &Balance) -> String {
    format!(
        "Current balance: {:.2}\nIncomes: {:.2}\nExpenses: {:.2}\n",
        balance.balance, balance.incomes, balance.expenses
    )
}

/// Format records one per line as field mappings
pub fn format_record_list(records: &[RecordFields]) -> String {
    if records.is_empty() {
        return "Nothing found.".to_string();
    }

    let mut output = String::new();
    for record in records {
        output.push_str(&format!("{}\n", record));
    }
    output
}
