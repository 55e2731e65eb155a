//! Parsing of user-typed amounts and dates

use crate::domain::parse_amount;
use crate::error::{LedgerError, Result};
use chrono::NaiveDate;

/// Parse a required amount
pub fn parse_amount_input(input: &str) -> Result<f64> {
    parse_amount(input).ok_or_else(|| LedgerError::InvalidAmount(input.trim().to_string()))
}

/// Parse an amount; blank input means no value
pub fn parse_optional_amount(input: &str) -> Result<Option<f64>> {
    if input.trim().is_empty() {
        return Ok(None);
    }
    parse_amount_input(input).map(Some)
}

/// Parse a YYYY-MM-DD date; blank input means no value
pub fn parse_optional_date(input: &str) -> Result<Option<NaiveDate>> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| LedgerError::InvalidDate(input.to_string()))
}
