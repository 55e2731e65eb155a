//! Line-oriented ledger file format
//!
//! Each record is stored as a block of four labeled lines followed by a
//! blank separator line:
//!
//! ```text
//! Date: 2025-01-17
//! Category: Expense
//! Amount: 12.5
//! Description: lunch
//!
//! ```
//!
//! Everything that knows about this layout lives here so the store can stay
//! independent of it.

use crate::domain::record::{
    parse_amount, Record, RecordFields, AMOUNT_FIELD, CATEGORY_FIELD, DATE_FIELD,
    DESCRIPTION_FIELD,
};
use tracing::warn;

/// Separator between a label and its value
pub const SEPARATOR: &str = ": ";

/// Encode a record as one block, including the trailing blank line
pub fn encode(record: &Record) -> String {
    format!(
        "{DATE_FIELD}{SEPARATOR}{}\n\
         {CATEGORY_FIELD}{SEPARATOR}{}\n\
         {AMOUNT_FIELD}{SEPARATOR}{}\n\
         {DESCRIPTION_FIELD}{SEPARATOR}{}\n\n",
        record.date,
        record.category,
        record.amount_text(),
        record.description
    )
}

/// Split a `Label: value` line into trimmed label and value
pub fn parse_line(line: &str) -> Option<(&str, &str)> {
    line.split_once(SEPARATOR)
        .map(|(label, value)| (label.trim(), value.trim()))
}

/// Decode every block in the file, in file order.
///
/// A blank line terminates a block; the last block is accepted without one.
/// Runs of blank lines never produce empty blocks.
pub fn decode(content: &str) -> Vec<RecordFields> {
    let mut blocks = Vec::new();
    let mut current = RecordFields::new();

    for (index, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
            continue;
        }

        match parse_line(line) {
            Some((label, value)) => current.insert(label, value),
            None => warn!(line_number = index + 1, "skipping line without a label: {:?}", line),
        }
    }

    if !current.is_empty() {
        blocks.push(current);
    }

    blocks
}

/// A category line together with the amount read from the line after it
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryAmount<'a> {
    /// 1-based line number of the category line
    pub line_number: usize,
    pub category: &'a str,
    /// `None` when the following line is missing or not a number
    pub amount: Option<f64>,
}

/// Scan for category lines and pair each with the amount on the next line
pub fn category_amounts(content: &str) -> Vec<CategoryAmount<'_>> {
    let lines: Vec<&str> = content.lines().collect();

    lines
        .iter()
        .copied()
        .enumerate()
        .filter_map(|(index, line)| {
            let (label, category) = parse_line(line)?;
            if label != CATEGORY_FIELD {
                return None;
            }
            let amount = lines
                .get(index + 1)
                .and_then(|next| parse_line(next))
                .and_then(|(_, value)| parse_amount(value));
            Some(CategoryAmount {
                line_number: index + 1,
                category,
                amount,
            })
        })
        .collect()
}

/// Replace the first block loosely matching `old` with `new`.
///
/// A block matches when its date, category, amount and description lines
/// each contain the corresponding field of `old` as a substring. The four
/// matched lines are replaced by `new` plus a blank line; every other line,
/// including the matched block's own separator, is copied through unchanged.
/// Returns `None` when no block matches.
pub fn replace_first(content: &str, old: &Record, new: &Record) -> Option<String> {
    let lines: Vec<&str> = content.split_inclusive('\n').collect();
    let old_amount = old.amount_text();

    let start = lines.windows(4).position(|block| {
        block[0].contains(old.date.as_str())
            && block[1].contains(old.category.as_str())
            && block[2].contains(old_amount.as_str())
            && block[3].contains(old.description.as_str())
    })?;

    let mut output = String::with_capacity(content.len());
    for line in &lines[..start] {
        output.push_str(line);
    }
    output.push_str(&encode(new));
    for line in &lines[start + 4..] {
        output.push_str(line);
    }

    Some(output)
}
