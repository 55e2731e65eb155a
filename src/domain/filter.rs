//! Search criteria over stored records

use crate::domain::record::RecordFields;
use chrono::NaiveDate;

/// Optional criteria for a record search.
///
/// A record passes when every supplied criterion matches. Ranges are
/// inclusive on both ends.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilter {
    /// Exact category match; an empty string counts as not supplied
    pub category: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub min_amount: Option<f64>,
    pub max_amount: Option<f64>,
}

impl SearchFilter {
    pub fn new() -> Self {
        SearchFilter::default()
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn dates(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    pub fn amounts(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min_amount = min;
        self.max_amount = max;
        self
    }

    /// True when no criterion is supplied
    pub fn is_empty(&self) -> bool {
        self.active_category().is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
            && self.min_amount.is_none()
            && self.max_amount.is_none()
    }

    fn active_category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }

    /// Check a stored record against every supplied criterion.
    ///
    /// A missing date never excludes a record, but an unparsable one fails an
    /// active date criterion. A missing or unparsable amount fails an active
    /// amount criterion.
    pub fn matches(&self, fields: &RecordFields) -> bool {
        if let Some(category) = self.active_category() {
            if fields.category() != Some(category) {
                return false;
            }
        }

        if self.start_date.is_some() || self.end_date.is_some() {
            if let Some(raw) = fields.date() {
                let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") else {
                    return false;
                };
                if self.start_date.is_some_and(|start| date < start) {
                    return false;
                }
                if self.end_date.is_some_and(|end| date > end) {
                    return false;
                }
            }
        }

        if self.min_amount.is_some() || self.max_amount.is_some() {
            let Some(amount) = fields.amount() else {
                return false;
            };
            if self.min_amount.is_some_and(|min| amount < min) {
                return false;
            }
            if self.max_amount.is_some_and(|max| amount > max) {
                return false;
            }
        }

        true
    }
}
