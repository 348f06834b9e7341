//! File-backed JSONL store
//!
//! Layout: `<data_dir>/<collection>/*.jsonl`, one JSON record per line.
//! Reads take a shared lock per file, appends take an exclusive lock, so a
//! reader never observes a half-written line.

use fs2::FileExt;
use rayon::prelude::*;
use serde::Serialize;
use std::fs::{self, File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use super::records::{validate_amount, validate_date, StoreRecord};
use super::LedgerStore;
use crate::types::{
    BudgetAllocation, LedgerEntry, MonthwiseError, Result, SalaryRecord, SavingsGoal, UserProfile,
};

/// File appended to by writes within each collection directory
const APPEND_FILE: &str = "records.jsonl";

pub struct JsonlStore {
    data_dir: PathBuf,
}

impl JsonlStore {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn collection_dir(&self, collection: &str) -> PathBuf {
        self.data_dir.join(collection)
    }

    /// All JSONL files of a collection, in path order
    fn collect_files(&self, collection: &str) -> Result<Vec<PathBuf>> {
        let dir = glob::Pattern::escape(&self.collection_dir(collection).to_string_lossy());
        let pattern = format!("{}/**/*.jsonl", dir);

        let paths = glob::glob(&pattern).map_err(|e| {
            MonthwiseError::Store(format!("invalid file pattern '{}': {}", pattern, e))
        })?;
        paths
            .map(|entry| entry.map_err(|e| MonthwiseError::Io(e.into_error())))
            .collect()
    }

    /// Parse one file under a shared lock. Bad lines are skipped.
    fn read_file<R: StoreRecord>(path: &Path) -> Result<Vec<R>> {
        let file = File::open(path)?;
        file.lock_shared().map_err(|e| {
            MonthwiseError::Store(format!("failed to lock {}: {}", path.display(), e))
        })?;

        let mut content = Vec::new();
        let read = std::io::BufReader::new(&file).read_to_end(&mut content);
        let _ = file.unlock();
        read?;

        let mut records = Vec::new();
        for (idx, line) in content.split_mut(|b| *b == b'\n').enumerate() {
            let len = line.len();
            let line = if line.last() == Some(&b'\r') {
                &mut line[..len - 1]
            } else {
                line
            };
            if line.iter().all(|b| b.is_ascii_whitespace()) {
                continue;
            }
            match R::from_line(line) {
                Ok(record) => records.push(record),
                Err(e) => {
                    tracing::warn!(
                        file = %path.display(),
                        line = idx + 1,
                        error = %e,
                        "skipping {} record",
                        R::COLLECTION
                    );
                }
            }
        }
        Ok(records)
    }

    /// Load a user's records from every file of the collection in parallel
    fn load<R: StoreRecord>(&self, user_id: &str) -> Result<Vec<R>> {
        let files = self.collect_files(R::COLLECTION)?;
        let per_file: Vec<Vec<R>> = files
            .par_iter()
            .map(|f| Self::read_file::<R>(f))
            .collect::<Result<_>>()?;

        let records: Vec<R> = per_file
            .into_iter()
            .flatten()
            .filter(|r| r.owner() == user_id)
            .collect();

        tracing::debug!(
            collection = R::COLLECTION,
            files = files.len(),
            records = records.len(),
            "loaded records"
        );
        Ok(records)
    }

    /// Append one record under an exclusive lock
    fn append<T: Serialize>(&self, collection: &str, record: &T) -> Result<()> {
        let dir = self.collection_dir(collection);
        fs::create_dir_all(&dir)?;

        let mut line = serde_json::to_string(record)
            .map_err(|e| MonthwiseError::Store(format!("serialization failed: {}", e)))?;
        line.push('\n');

        let path = dir.join(APPEND_FILE);
        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        file.lock_exclusive().map_err(|e| {
            MonthwiseError::Store(format!("failed to acquire write lock: {}", e))
        })?;

        let written = file.write_all(line.as_bytes()).and_then(|_| file.sync_all());
        let _ = file.unlock();
        written?;

        tracing::info!(collection, file = %path.display(), "appended record");
        Ok(())
    }

    /// Validate and store a ledger entry
    pub fn add_entry(&self, entry: &LedgerEntry) -> Result<()> {
        validate_amount(entry.amount)?;
        validate_date(&entry.date)?;
        if entry.user_id.trim().is_empty() {
            return Err(MonthwiseError::InvalidInput("missing user_id".into()));
        }
        self.append(LedgerEntry::COLLECTION, entry)
    }

    pub fn add_salary(&self, salary: &SalaryRecord) -> Result<()> {
        validate_amount(salary.amount)?;
        self.append(SalaryRecord::COLLECTION, salary)
    }

    pub fn add_allocation(&self, allocation: &BudgetAllocation) -> Result<()> {
        for amount in allocation.categories.values() {
            validate_amount(*amount)?;
        }
        self.append(BudgetAllocation::COLLECTION, allocation)
    }

    pub fn add_goal(&self, goal: &SavingsGoal) -> Result<()> {
        validate_amount(goal.target_amount)?;
        validate_amount(goal.current_amount)?;
        self.append(SavingsGoal::COLLECTION, goal)
    }
}

impl LedgerStore for JsonlStore {
    fn entries(&self, user_id: &str) -> Result<Vec<LedgerEntry>> {
        self.load(user_id)
    }

    fn salaries(&self, user_id: &str) -> Result<Vec<SalaryRecord>> {
        self.load(user_id)
    }

    fn allocations(&self, user_id: &str) -> Result<Vec<BudgetAllocation>> {
        self.load(user_id)
    }

    fn goals(&self, user_id: &str) -> Result<Vec<SavingsGoal>> {
        self.load(user_id)
    }

    fn user_name(&self, user_id: &str) -> Result<Option<String>> {
        Ok(self
            .load::<UserProfile>(user_id)?
            .into_iter()
            .next()
            .map(|u| u.name))
    }
}
