//! # Sales Ledger
//!
//! One append-only JSON array of sales per calendar day.
//!
//! ## Layout
//! ```text
//! data/ventas/
//! ├── ventas_2024-05-01.json   [ record, record, ... ]
//! ├── ventas_2024-05-02.json
//! └── ...
//! ```
//!
//! A record's position in its day's array is its identity. Appending
//! rewrites the whole day file; nothing is ever removed.

use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use cafeteria_core::{DailySummary, Money, SalesRecord, LEDGER_DATE_FORMAT};

use super::{read_json, write_json};
use crate::error::StoreResult;

/// Repository for the daily sales files.
#[derive(Debug, Clone)]
pub struct SalesLedger {
    dir: PathBuf,
}

impl SalesLedger {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        SalesLedger { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File holding the sales for `day`.
    pub fn path_for(&self, day: NaiveDate) -> PathBuf {
        self.dir
            .join(format!("ventas_{}.json", day.format(LEDGER_DATE_FORMAT)))
    }

    /// Appends a record to `day`'s file.
    ///
    /// An unreadable or corrupt day file is treated as empty and gets
    /// overwritten with just the new record.
    pub fn append(&self, day: NaiveDate, record: &SalesRecord) -> StoreResult<()> {
        let mut records = self.query(day);
        records.push(record.clone());

        write_json(&self.path_for(day), &records)?;
        info!(
            date = %day,
            total = %record.total,
            count = records.len(),
            "Sale recorded"
        );
        Ok(())
    }

    /// Appends a record under the date of its own timestamp.
    pub fn record(&self, record: &SalesRecord) -> StoreResult<()> {
        self.append(record.date(), record)
    }

    /// All records for `day`, in the order they were appended.
    ///
    /// Never fails: a missing day is empty, and a file that cannot be read
    /// or parsed is logged and treated as empty.
    pub fn query(&self, day: NaiveDate) -> Vec<SalesRecord> {
        let path = self.path_for(day);
        match read_json::<Vec<SalesRecord>>(&path) {
            Ok(Some(records)) => {
                debug!(date = %day, count = records.len(), "Ledger day loaded");
                records
            }
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(date = %day, error = %e, "Ignoring unreadable ledger file");
                Vec::new()
            }
        }
    }

    pub fn daily_total(&self, day: NaiveDate) -> Money {
        self.query(day).iter().map(|r| r.total).sum()
    }

    pub fn daily_count(&self, day: NaiveDate) -> usize {
        self.query(day).len()
    }

    /// Count and total for `day` from a single read.
    pub fn daily_summary(&self, day: NaiveDate) -> DailySummary {
        DailySummary::from_records(day, &self.query(day))
    }
}
