//! rekon: convert VA-BCA rekening koran text exports into one spreadsheet.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::warn;
use rekon_core::{ConvertSession, TransactionTable};
use rekon_ingest::BatchConverter;
use std::path::{Path, PathBuf};

mod config;
mod export;

use export::ExportFormat;

#[derive(Parser, Debug)]
#[command(
    name = "rekon",
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("REKON_BUILD_SHA"), ")"),
    about = "Rekening koran TXT to spreadsheet converter"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert report text files and write the merged table
    Convert {
        /// Report text files, processed in the given order
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output path (default: rekening_koran_all.xlsx in the working directory)
        #[arg(long, short)]
        out: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = ExportFormat::Xlsx)]
        format: ExportFormat,

        /// Preview row limit (overrides the configured default)
        #[arg(long)]
        preview: Option<usize>,

        /// Abort the whole run on the first failing file
        #[arg(long)]
        strict: bool,
    },

    /// Parse and preview without writing an output file
    Preview {
        /// Report text files, processed in the given order
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Preview row limit
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },

    /// Write a default config to ~/.rekon/config.toml
    Init,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Convert {
            files,
            out,
            format,
            preview,
            strict,
        } => convert(&files, out, format, preview, strict),
        Command::Preview { files, limit } => preview_only(&files, limit),
        Command::Init => config::init_config(),
    }
}

/// Run every file through the batch converter. A failing file is logged
/// and skipped unless `strict` aborts the whole run.
fn assemble(files: &[PathBuf], strict: bool) -> Result<(TransactionTable, usize)> {
    let mut batch = BatchConverter::new();
    for path in files {
        match batch.ingest_path(path) {
            Ok(_) => {}
            Err(e) if strict => return Err(e),
            Err(e) => warn!("skipping {}: {:#}", path.display(), e),
        }
    }
    let files_ok = batch.files_processed();
    Ok((batch.finish(), files_ok))
}

fn convert(
    files: &[PathBuf],
    out: Option<PathBuf>,
    format: ExportFormat,
    preview: Option<usize>,
    strict: bool,
) -> Result<()> {
    let cfg = config::load_config()?;
    let strict = strict || cfg.convert.strict;

    let (table, files_ok) = assemble(files, strict)?;

    let mut session = ConvertSession::new();
    session.set_result(table);
    let table = session.result().context("no conversion result")?;

    println!(
        "Processed {} file(s). Total {} transactions.",
        files_ok,
        table.len()
    );
    print_preview(table, preview.unwrap_or(cfg.output.preview_rows));

    let out_path = out.unwrap_or_else(|| match format {
        ExportFormat::Xlsx => PathBuf::from(&cfg.output.file_name),
        ExportFormat::Csv => Path::new(&cfg.output.file_name).with_extension("csv"),
    });
    match format {
        ExportFormat::Xlsx => export::write_xlsx(table, &cfg.output.sheet_name, &out_path)?,
        ExportFormat::Csv => export::write_csv(table, &out_path)?,
    }

    println!("\nWrote {}", out_path.display());
    Ok(())
}

fn preview_only(files: &[PathBuf], limit: usize) -> Result<()> {
    let (table, files_ok) = assemble(files, false)?;
    println!(
        "Processed {} file(s). Total {} transactions.",
        files_ok,
        table.len()
    );
    print_preview(&table, limit);
    Ok(())
}

fn print_preview(table: &TransactionTable, limit: usize) {
    if table.is_empty() {
        println!("(no transaction lines matched)");
        return;
    }

    println!();
    println!(
        "{:<10} {:<8} {:<14} {:<36} {:>14} {:<10} {}",
        "DATE", "TIME", "NO.VA", "REMARK", "CREDIT", "SUBCOMPANY", "ASAL_FILE"
    );
    for rec in table.head(limit) {
        println!(
            "{:<10} {:<8} {:<14} {:<36} {:>14.2} {:<10} {}",
            rec.date_cell(),
            rec.time_cell(),
            rec.va_number,
            rec.remark,
            rec.credit,
            rec.sub_company_cell(),
            rec.source_file
        );
    }
    if table.len() > limit {
        println!("... and {} more row(s)", table.len() - limit);
    }
}
