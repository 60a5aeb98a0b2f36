use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use gofinances::cli::{
    handle_category_command, handle_dashboard_command, handle_resume_command,
    handle_transaction_command, CategoryCommands, ResumeArgs, TransactionCommands,
};
use gofinances::config::{FinancePaths, Locale, Settings, ThemeName};
use gofinances::storage::Storage;

#[derive(Parser)]
#[command(
    name = "gofinances",
    version,
    about = "Track income and expenses from the terminal",
    long_about = "gofinances records income and outcome transactions, shows a \
                  dashboard with totals and history, and summarizes each \
                  month's expenses by category."
)]
struct Cli {
    /// Log level (overridden by RUST_LOG)
    #[arg(long, global = true, default_value_t = LevelFilter::WARN)]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Expenses of a month by category
    #[command(alias = "summary")]
    Resume(ResumeArgs),

    /// Income, outcome and balance with the transaction history
    Dashboard,

    /// Category commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Show or change configuration
    Config {
        /// Set the locale used for currency (pt-BR or en-US)
        #[arg(long)]
        locale: Option<Locale>,
        /// Set the TUI theme (dark or light)
        #[arg(long)]
        theme: Option<ThemeName>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = FinancePaths::new()?;
    let tui_mode = matches!(cli.command, None | Some(Commands::Tui));
    if tui_mode {
        paths.ensure_directories()?;
        init_file_logger(cli.log_level, &paths.log_file())?;
    } else {
        init_logger(cli.log_level);
    }
    debug!(base_dir = %paths.base_dir().display(), "resolved paths");

    let mut settings = Settings::load_or_create(&paths)?;
    let storage = Storage::open(&paths)
        .with_context(|| format!("Failed to open storage in {}", paths.data_dir().display()))?;

    match cli.command {
        None | Some(Commands::Tui) => {
            gofinances::tui::run_tui(&storage, &settings)?;
        }
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Resume(args)) => {
            handle_resume_command(&storage, &settings, args)?;
        }
        Some(Commands::Dashboard) => {
            handle_dashboard_command(&storage, &settings)?;
        }
        Some(Commands::Category(cmd)) => {
            handle_category_command(cmd)?;
        }
        Some(Commands::Config { locale, theme }) => {
            if locale.is_some() || theme.is_some() {
                if let Some(locale) = locale {
                    settings.locale = locale;
                }
                if let Some(theme) = theme {
                    settings.theme = theme;
                }
                settings.save(&paths)?;
                println!("Settings saved.");
                println!();
            }

            println!("gofinances Configuration");
            println!("========================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Storage file:    {}", paths.storage_file().display());
            println!("Log file:        {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Locale:        {}", settings.locale);
            println!("  Theme:         {}", settings.theme);
            println!("  Date format:   {}", settings.date_format);
        }
    }

    Ok(())
}

fn env_filter(level: LevelFilter) -> EnvFilter {
    match std::env::var("RUST_LOG").ok() {
        // RUST_LOG exists; use it.
        Some(_) => EnvFilter::from_default_env(),
        None => EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), level)),
    }
}

/// Initializes the tracing subscriber for CLI commands.
fn init_logger(level: LevelFilter) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_writer(std::io::stderr)
        .init();
}

/// Initializes the tracing subscriber for the TUI, which owns the terminal.
fn init_file_logger(level: LevelFilter, path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
