//! Initialize ledger use case

use crate::error::Result;
use crate::infrastructure::{FileLedgerStore, LedgerRepository};
use std::path::{Path, PathBuf};

/// Create the ledger file if it does not exist yet and return its path.
pub fn init(path: &Path) -> Result<PathBuf> {
    let existed = path.exists();

    let store = FileLedgerStore::new(path);
    store.initialize()?;

    if existed {
        println!("Using existing ledger at {}", path.display());
    } else {
        println!("Initialized ledger at {}", path.display());
    }

    Ok(store.path)
}
