//! Ledger records and the field mappings read back from storage

use std::fmt;

/// Category value counted as income by the balance
pub const INCOME: &str = "Income";
/// Category value counted as expense by the balance
pub const EXPENSE: &str = "Expense";

/// Field names, in the order a record is written
pub const DATE_FIELD: &str = "Date";
pub const CATEGORY_FIELD: &str = "Category";
pub const AMOUNT_FIELD: &str = "Amount";
pub const DESCRIPTION_FIELD: &str = "Description";

/// A single ledger entry.
///
/// Nothing is validated: the date is kept as entered, the category is free
/// text and the amount may carry any sign.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub date: String,
    pub category: String,
    pub amount: f64,
    pub description: String,
}

impl Record {
    pub fn new(
        date: impl Into<String>,
        category: impl Into<String>,
        amount: f64,
        description: impl Into<String>,
    ) -> Self {
        Record {
            date: date.into(),
            category: category.into(),
            amount,
            description: description.into(),
        }
    }

    /// Amount as it is written to the ledger file
    pub fn amount_text(&self) -> String {
        format_amount(self.amount)
    }
}

/// Render an amount in its natural decimal form.
///
/// Integral values keep one fractional digit (`15.0`) so that ledgers written
/// by earlier versions of the file format stay byte-compatible.
pub fn format_amount(amount: f64) -> String {
    if amount.is_finite() && amount.fract() == 0.0 && amount.abs() < 1e16 {
        format!("{:.1}", amount)
    } else {
        format!("{}", amount)
    }
}

/// Parse a stored or typed amount, ignoring surrounding whitespace
pub fn parse_amount(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok()
}

/// Totals over every income and expense record
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Balance {
    pub balance: f64,
    pub incomes: f64,
    pub expenses: f64,
}

impl Balance {
    pub fn new(incomes: f64, expenses: f64) -> Self {
        Balance {
            balance: incomes - expenses,
            incomes,
            expenses,
        }
    }
}

/// Label/value pairs captured from one stored block, in file order.
///
/// Values are kept as text; a later line with the same label replaces the
/// earlier value in place.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecordFields {
    fields: Vec<(String, String)>,
}

impl RecordFields {
    pub fn new() -> Self {
        RecordFields::default()
    }

    pub fn insert(&mut self, label: impl Into<String>, value: impl Into<String>) {
        let label = label.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(l, _)| *l == label) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((label, value)),
        }
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_str())
    }

    pub fn date(&self) -> Option<&str> {
        self.get(DATE_FIELD)
    }

    pub fn category(&self) -> Option<&str> {
        self.get(CATEGORY_FIELD)
    }

    pub fn description(&self) -> Option<&str> {
        self.get(DESCRIPTION_FIELD)
    }

    /// Parsed amount; `None` when the field is missing or not a number
    pub fn amount(&self) -> Option<f64> {
        self.get(AMOUNT_FIELD).and_then(parse_amount)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(l, v)| (l.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn clear(&mut self) {
        self.fields.clear();
    }

    /// Convert back into a record when all four fields are present
    pub fn to_record(&self) -> Option<Record> {
        Some(Record::new(
            self.date()?,
            self.category()?,
            self.amount()?,
            self.description()?,
        ))
    }
}

impl From<&Record> for RecordFields {
    fn from(record: &Record) -> Self {
        let mut fields = RecordFields::new();
        fields.insert(DATE_FIELD, record.date.as_str());
        fields.insert(CATEGORY_FIELD, record.category.as_str());
        fields.insert(AMOUNT_FIELD, record.amount_text());
        fields.insert(DESCRIPTION_FIELD, record.description.as_str());
        fields
    }
}

impl fmt::Display for RecordFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (label, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?}: {:?}", label, value)?;
        }
        write!(f, "}}")
    }
}
