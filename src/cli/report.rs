//! CLI commands for the monthly summary and the dashboard

use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::config::settings::Settings;
use crate::display::currency::CurrencyFormat;
use crate::error::{FinanceError, FinanceResult};
use crate::models::MonthPeriod;
use crate::reports::{Dashboard, ResumeReport};
use crate::storage::Storage;

/// Output format for the summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

/// Arguments for `resume`
#[derive(Args, Debug)]
pub struct ResumeArgs {
    /// Month to summarize (YYYY-MM), defaults to the current month
    #[arg(short, long)]
    pub month: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle the monthly summary command
pub fn handle_resume_command(
    storage: &Storage,
    settings: &Settings,
    args: ResumeArgs,
) -> FinanceResult<()> {
    let period = match args.month {
        Some(month) => month
            .parse::<MonthPeriod>()
            .map_err(|e| FinanceError::Validation(e.to_string()))?,
        None => MonthPeriod::current(),
    };

    let report = ResumeReport::generate(
        storage,
        period,
        CurrencyFormat::for_locale(settings.locale),
    )?;

    match args.output {
        Some(path) => {
            let file = File::create(&path).map_err(|e| {
                FinanceError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            write_report(&report, args.format, BufWriter::new(file))?;
            println!("Summary exported to: {}", path.display());
        }
        None => write_report(&report, args.format, io::stdout().lock())?,
    }

    Ok(())
}

fn write_report<W: Write>(
    report: &ResumeReport,
    format: OutputFormat,
    mut writer: W,
) -> FinanceResult<()> {
    match format {
        OutputFormat::Table => {
            writer.write_all(report.format_terminal().as_bytes())?;
        }
        OutputFormat::Csv => report.export_csv(&mut writer)?,
        OutputFormat::Json => {
            report.export_json(&mut writer)?;
            writeln!(writer)?;
        }
    }
    writer.flush()?;
    Ok(())
}

/// Handle the dashboard command
pub fn handle_dashboard_command(storage: &Storage, settings: &Settings) -> FinanceResult<()> {
    let dashboard = Dashboard::generate(
        storage,
        &CurrencyFormat::for_locale(settings.locale),
        &settings.date_format,
    )?;
    print!("{}", dashboard.format_terminal());
    Ok(())
}
