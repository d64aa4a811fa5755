//! Multi-file accumulation into one result table.

use anyhow::{Context, Result};
use log::debug;
use rekon_core::TransactionTable;
use std::fs;
use std::path::Path;

use crate::parsers::va_bca::parse_va_bca_text;

/// Feeds report files through the line parser in the order they are
/// supplied and concatenates their record runs. The per-file SUB-COMP
/// context never leaks between files, and rows are never reordered or
/// deduplicated.
#[derive(Debug, Default)]
pub struct BatchConverter {
    table: TransactionTable,
    files_processed: usize,
}

impl BatchConverter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse one file's text and append its records. Returns the number
    /// of rows the file contributed; on error the table is unchanged.
    pub fn ingest_text(&mut self, file_name: &str, text: &str) -> Result<usize> {
        let records = parse_va_bca_text(text, file_name)?;
        let count = records.len();
        debug!("{}: {} transaction row(s)", file_name, count);
        self.table.append(records);
        self.files_processed += 1;
        Ok(count)
    }

    /// Read a file from disk (whole file, UTF-8) and ingest it. Read and
    /// decode failures are this file's error only; the batch stays usable.
    pub fn ingest_path(&mut self, path: &Path) -> Result<usize> {
        let text =
            fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        self.ingest_text(&file_name, &text)
    }

    /// Files ingested successfully so far.
    pub fn files_processed(&self) -> usize {
        self.files_processed
    }

    pub fn finish(self) -> TransactionTable {
        self.table
    }
}
