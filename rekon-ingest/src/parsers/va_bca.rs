//! VA-BCA rekening koran text parser.
//!
//! Expected report lines after export to text:
//!   REKENING : 8812000100            SUB-COMP 12
//!   1   88123456789     JOHN DOE        IDR 1,500.00   01/02/24  10:15:30  REF001  PYMT-9 TRF
//!
//! A SUB-COMP header scopes every transaction row below it until the next
//! header. Everything that is neither a header nor a full transaction row
//! (titles, column headers, separators, blank lines) is ignored.

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use thiserror::Error;

use rekon_core::VaTransaction;

/// A line matched the transaction row shape but one of its fields would
/// not convert. Fatal for the file being parsed; never produced by plain
/// noise lines.
#[derive(Debug, Error)]
pub enum FieldError {
    #[error("invalid credit amount {value:?}")]
    Amount {
        value: String,
        source: std::num::ParseFloatError,
    },
    #[error("invalid transaction date {value:?}")]
    Date {
        value: String,
        source: chrono::ParseError,
    },
    #[error("invalid transaction time {value:?}")]
    Time {
        value: String,
        source: chrono::ParseError,
    },
}

/// Three-way classification of one report line.
#[derive(Debug, Clone, PartialEq)]
pub enum LineKind {
    /// SUB-COMP header; carries the digit run that scopes following rows.
    SubCompany(String),
    /// Full transaction row.
    Transaction(TxnRow),
    /// Report chrome: titles, column headers, separators, blank lines.
    Ignored,
}

/// Typed fields extracted from one matched transaction row, before the
/// rolling sub-company context and the file name are attached.
#[derive(Debug, Clone, PartialEq)]
pub struct TxnRow {
    pub va_number: String,
    pub remark: String,
    pub credit: f64,
    pub date: NaiveDate,
    pub time: NaiveTime,
}

impl TxnRow {
    pub fn into_record(self, sub_company: Option<String>, source_file: &str) -> VaTransaction {
        VaTransaction {
            date: self.date,
            time: self.time,
            va_number: self.va_number,
            remark: self.remark,
            credit: self.credit,
            sub_company,
            source_file: source_file.to_string(),
        }
    }
}

pub struct VaBcaParser {
    marker_re: Regex,
    row_re: Regex,
    digits_re: Regex,
    spaces_re: Regex,
}

impl VaBcaParser {
    pub fn new() -> Result<Self> {
        // Row shape: row number, VA digits (>=8), name (1-24 chars,
        // non-greedy), IDR literal, amount, DD/MM/YY, HH:MM:SS, one
        // reference token, optional free-text tail. The tail and its
        // leading whitespace are jointly optional so that lines with
        // nothing after the reference token still match.
        let row_re = Regex::new(concat!(
            r"^\s*\d+\s+",
            r"(?P<va>\d{8,})\s+",
            r"(?P<name>.{1,24}?)\s+",
            r"IDR\s+",
            r"(?P<credit>[\d.,]+)\s+",
            r"(?P<date>\d{2}/\d{2}/\d{2})\s+",
            r"(?P<time>\d{2}:\d{2}:\d{2})\s+",
            r"\S+",
            r"(?:\s+(?P<tail>.*\S))?",
            r"\s*$",
        ))?;

        Ok(Self {
            marker_re: Regex::new(r"SUB-COMP\s+(?P<id>\d+)")?,
            row_re,
            digits_re: Regex::new(r"\d")?,
            spaces_re: Regex::new(r"\s+")?,
        })
    }

    /// Classify one line. Marker detection wins over the row match, so a
    /// header line is never also read as a transaction.
    pub fn classify(&self, line: &str) -> Result<LineKind, FieldError> {
        if let Some(caps) = self.marker_re.captures(line) {
            return Ok(LineKind::SubCompany(caps["id"].to_string()));
        }

        let Some(caps) = self.row_re.captures(line) else {
            return Ok(LineKind::Ignored);
        };

        let credit_raw = &caps["credit"];
        let credit = normalize_amount(credit_raw).map_err(|source| FieldError::Amount {
            value: credit_raw.to_string(),
            source,
        })?;

        let date_raw = &caps["date"];
        let date = parse_report_date(date_raw).map_err(|source| FieldError::Date {
            value: date_raw.to_string(),
            source,
        })?;

        let time_raw = &caps["time"];
        let time =
            NaiveTime::parse_from_str(time_raw, "%H:%M:%S").map_err(|source| FieldError::Time {
                value: time_raw.to_string(),
                source,
            })?;

        let name = caps["name"].trim_end();
        let tail = caps.name("tail").map(|m| m.as_str()).unwrap_or("");

        Ok(LineKind::Transaction(TxnRow {
            va_number: caps["va"].trim().to_string(),
            remark: self.clean_remark(name, tail),
            credit,
            date,
            time,
        }))
    }

    /// Build the remark column: digits are deleted from the tail, dashes
    /// become spaces, whitespace runs collapse to one space, then name
    /// and cleaned tail join with a single space. Empty inputs contribute
    /// nothing.
    pub fn clean_remark(&self, name: &str, tail: &str) -> String {
        let no_digits = self.digits_re.replace_all(tail, "");
        let dashless = no_digits.replace('-', " ");
        let collapsed = self.spaces_re.replace_all(&dashless, " ");
        format!("{} {}", name, collapsed.trim()).trim().to_string()
    }
}

/// Strip `,` thousands separators and parse the rest as a fractional
/// number. `,` is always treated as a thousands separator; comma-decimal
/// inputs come out wrong by the same fixed rule rather than erroring.
pub fn normalize_amount(raw: &str) -> Result<f64, std::num::ParseFloatError> {
    raw.replace(',', "").parse::<f64>()
}

/// Parse a report date token. Two-digit years go through chrono's `%y`
/// century inference; a four-digit year parses as-is, so feeding an
/// already-normalized date back through is a no-op.
pub fn parse_report_date(raw: &str) -> Result<NaiveDate, chrono::ParseError> {
    let fmt = match raw.rsplit('/').next() {
        Some(year) if year.len() == 4 => "%d/%m/%Y",
        _ => "%d/%m/%y",
    };
    NaiveDate::parse_from_str(raw, fmt)
}

/// Parse one report file's text into transaction records, carrying the
/// rolling SUB-COMP context forward. The context starts unset for every
/// file and is never inherited across files.
pub fn parse_va_bca_text(text: &str, file_name: &str) -> Result<Vec<VaTransaction>> {
    let parser = VaBcaParser::new()?;
    let mut sub_company: Option<String> = None;
    let mut records = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let kind = parser
            .classify(line)
            .with_context(|| format!("{}:{}", file_name, idx + 1))?;
        match kind {
            LineKind::SubCompany(id) => sub_company = Some(id),
            LineKind::Transaction(row) => {
                records.push(row.into_record(sub_company.clone(), file_name))
            }
            LineKind::Ignored => {}
        }
    }

    Ok(records)
}
