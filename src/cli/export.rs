//! CLI commands for data export
//!
//! Writes monthly cards, transactions or the full ledger to a file or to
//! standard output.

use chrono::Local;
use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::config::settings::Settings;
use crate::error::{LedgerError, LedgerResult};
use crate::export::{csv, json, yaml};
use crate::services::OverviewService;
use crate::storage::Storage;

use super::overview::OverviewArgs;

/// What to export
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportTarget {
    /// Monthly overview cards
    Cards,
    /// All transactions
    Transactions,
    /// Transactions and budgets with metadata
    Full,
}

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    Json,
    Yaml,
    /// CSV (cards and transactions only)
    Csv,
}

/// Export options
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// What to export
    #[arg(value_enum)]
    pub target: ExportTarget,

    /// Export format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ExportFormat,

    /// Output file path (standard output when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub window: OverviewArgs,
}

fn open_output(output: Option<&PathBuf>) -> LedgerResult<Box<dyn Write>> {
    match output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                LedgerError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}

/// Handle the export command
pub fn handle_export_command(
    storage: &Storage,
    settings: &Settings,
    args: ExportArgs,
) -> LedgerResult<()> {
    if matches!((args.target, args.format), (ExportTarget::Full, ExportFormat::Csv)) {
        return Err(LedgerError::Export(
            "CSV cannot hold a full export. Use json or yaml".into(),
        ));
    }
    let mut writer = open_output(args.output.as_ref())?;

    match (args.target, args.format) {
        (ExportTarget::Cards, format) => {
            let reference = args.window.reference_date()?;
            let cards = OverviewService::new(storage, settings)
                .window(args.window.window(settings)?)
                .load_monthly_cards(&reference)?;
            match format {
                ExportFormat::Json => json::export_cards_json(&cards, &mut writer)?,
                ExportFormat::Yaml => yaml::export_cards_yaml(&cards, &mut writer)?,
                ExportFormat::Csv => csv::export_cards_csv(&cards, &mut writer)?,
            }
        }
        (ExportTarget::Transactions, format) => {
            let transactions = storage.transactions.get_all()?;
            match format {
                ExportFormat::Json => json::export_transactions_json(&transactions, &mut writer)?,
                ExportFormat::Yaml => yaml::export_transactions_yaml(&transactions, &mut writer)?,
                ExportFormat::Csv => csv::export_transactions_csv(&transactions, &mut writer)?,
            }
        }
        (ExportTarget::Full, ExportFormat::Yaml) => yaml::export_full_yaml(storage, &mut writer)?,
        (ExportTarget::Full, _) => json::export_full_json(storage, &mut writer, true)?,
    }

    writer
        .flush()
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    if let Some(path) = &args.output {
        eprintln!(
            "Exported {:?} at {} to {}",
            args.target,
            Local::now().format("%Y-%m-%d %H:%M"),
            path.display()
        );
    }
    Ok(())
}
