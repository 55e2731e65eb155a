//! Flat-file ledger store
//!
//! Every operation opens the backing file, does its work and releases the
//! handle before returning. Nothing is locked: callers must not run two
//! operations on the same file at once, from threads or from processes.

use crate::domain::{Balance, Record, RecordFields, SearchFilter, EXPENSE, INCOME};
use crate::error::Result;
use crate::infrastructure::codec;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, error, warn};

/// Default backing file name
pub const DEFAULT_LEDGER_FILE: &str = "records.txt";

/// Abstract store for ledger operations
pub trait LedgerRepository {
    /// Make sure the backing storage exists
    fn initialize(&self) -> Result<()>;

    /// Append a record
    fn add_record(&self, record: &Record) -> Result<()>;

    /// Total incomes and expenses over all records
    fn get_balance(&self) -> Result<Balance>;

    /// All stored records, in append order
    fn list_records(&self) -> Result<Vec<RecordFields>>;

    /// Records passing every supplied criterion, in append order
    fn search_records(&self, filter: &SearchFilter) -> Result<Vec<RecordFields>>;

    /// Replace the first record matching `old` with `new`.
    ///
    /// Returns false when nothing matched or the rewrite failed.
    fn edit_record(&self, old: &Record, new: &Record) -> bool;
}

/// Ledger kept in a single text file
#[derive(Debug, Clone)]
pub struct FileLedgerStore {
    pub path: PathBuf,
}

impl FileLedgerStore {
    /// Create a store for the given file without touching the disk
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileLedgerStore { path: path.into() }
    }

    /// Create a store and make sure its file exists
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let store = FileLedgerStore::new(path);
        store.initialize()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<String> {
        Ok(fs::read_to_string(&self.path)?)
    }

    fn rewrite(&self, old: &Record, new: &Record) -> Result<bool> {
        let content = self.read()?;

        let Some(updated) = codec::replace_first(&content, old, new) else {
            return Ok(false);
        };

        // Whole-file rewrite; a failure part way through can leave the file truncated
        fs::write(&self.path, updated)?;
        Ok(true)
    }
}

impl LedgerRepository for FileLedgerStore {
    fn initialize(&self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::File::create(&self.path)?;
        debug!(path = %self.path.display(), "created ledger file");
        Ok(())
    }

    fn add_record(&self, record: &Record) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(codec::encode(record).as_bytes())?;
        debug!(date = %record.date, category = %record.category, "appended record");
        Ok(())
    }

    fn get_balance(&self) -> Result<Balance> {
        let content = self.read()?;
        let mut incomes = 0.0;
        let mut expenses = 0.0;

        for entry in codec::category_amounts(&content) {
            let total = match entry.category {
                INCOME => &mut incomes,
                EXPENSE => &mut expenses,
                _ => continue,
            };
            match entry.amount {
                Some(amount) => *total += amount,
                None => warn!(
                    line_number = entry.line_number,
                    category = entry.category,
                    "cannot read amount for record, skipping"
                ),
            }
        }

        Ok(Balance::new(incomes, expenses))
    }

    fn list_records(&self) -> Result<Vec<RecordFields>> {
        Ok(codec::decode(&self.read()?))
    }

    fn search_records(&self, filter: &SearchFilter) -> Result<Vec<RecordFields>> {
        let mut records = self.list_records()?;
        records.retain(|fields| filter.matches(fields));
        debug!(matches = records.len(), "search finished");
        Ok(records)
    }

    fn edit_record(&self, old: &Record, new: &Record) -> bool {
        match self.rewrite(old, new) {
            Ok(edited) => edited,
            Err(e) => {
                error!(path = %self.path.display(), "failed to edit record: {}", e);
                false
            }
        }
    }
}
