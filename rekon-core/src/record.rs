//! The normalized transaction row extracted from a VA-BCA rekening koran export.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Column header of the exported table, in output order.
pub const TABLE_COLUMNS: [&str; 7] = [
    "DATE",
    "TIME",
    "NO.VA",
    "REMARK",
    "CREDIT",
    "SUBCOMPANY",
    "ASAL_FILE",
];

/// One virtual-account credit mutation, tagged with its grouping context
/// and originating file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaTransaction {
    pub date: NaiveDate,
    pub time: NaiveTime,
    /// Virtual-account number, at least 8 consecutive digits.
    pub va_number: String,
    /// Payer name plus the cleaned free-text tail of the row.
    pub remark: String,
    pub credit: f64,
    /// Value of the last SUB-COMP header seen above this row in the same
    /// file; `None` when no header preceded it.
    pub sub_company: Option<String>,
    pub source_file: String,
}

impl VaTransaction {
    /// Date cell as `DD/MM/YYYY`.
    pub fn date_cell(&self) -> String {
        self.date.format("%d/%m/%Y").to_string()
    }

    /// Time cell as `HH:MM:SS`.
    pub fn time_cell(&self) -> String {
        self.time.format("%H:%M:%S").to_string()
    }

    /// Sub-company cell; empty when no header preceded the row.
    pub fn sub_company_cell(&self) -> &str {
        self.sub_company.as_deref().unwrap_or("")
    }
}
