//! Table sinks: single-sheet XLSX workbook and CSV.

use anyhow::{Context, Result};
use rekon_core::{TABLE_COLUMNS, TransactionTable};
use rust_xlsxwriter::Workbook;
use std::fs;
use std::path::Path;

/// Default name of the downloadable workbook.
pub const DEFAULT_WORKBOOK_NAME: &str = "rekening_koran_all.xlsx";

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Xlsx,
    Csv,
}

/// Render the table as a single-sheet workbook in memory. Credit cells
/// are numeric; everything else is text. An empty table still gets the
/// full header row.
pub fn xlsx_bytes(table: &TransactionTable, sheet_name: &str) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(sheet_name).context("set sheet name")?;

    for (col, header) in TABLE_COLUMNS.iter().enumerate() {
        sheet.write(0, col as u16, *header)?;
    }

    for (idx, rec) in table.records().iter().enumerate() {
        let row = (idx + 1) as u32;
        sheet.write(row, 0, rec.date_cell())?;
        sheet.write(row, 1, rec.time_cell())?;
        sheet.write(row, 2, rec.va_number.as_str())?;
        sheet.write(row, 3, rec.remark.as_str())?;
        sheet.write(row, 4, rec.credit)?;
        sheet.write(row, 5, rec.sub_company_cell())?;
        sheet.write(row, 6, rec.source_file.as_str())?;
    }

    let bytes = workbook.save_to_buffer().context("render workbook")?;
    Ok(bytes)
}

pub fn write_xlsx(table: &TransactionTable, sheet_name: &str, path: &Path) -> Result<()> {
    let bytes = xlsx_bytes(table, sheet_name)?;
    fs::write(path, bytes).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

pub fn write_csv(table: &TransactionTable, path: &Path) -> Result<()> {
    let mut wtr =
        csv::Writer::from_path(path).with_context(|| format!("create {}", path.display()))?;
    wtr.write_record(TABLE_COLUMNS)?;
    for rec in table.records() {
        wtr.write_record(&[
            rec.date_cell(),
            rec.time_cell(),
            rec.va_number.clone(),
            rec.remark.clone(),
            rec.credit.to_string(),
            rec.sub_company_cell().to_string(),
            rec.source_file.clone(),
        ])?;
    }
    wtr.flush().context("flush csv")?;
    Ok(())
}
