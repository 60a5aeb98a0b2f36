//! Transaction CLI commands

use clap::{Subcommand, ValueEnum};

use crate::config::settings::Settings;
use crate::display::currency::CurrencyFormat;
use crate::display::transaction::format_history_table;
use crate::error::{FinanceError, FinanceResult};
use crate::models::TransactionType;
use crate::reports::dashboard::history_entry;
use crate::services::{RegisterInput, TransactionService};
use crate::storage::Storage;

/// Transaction direction as typed on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TypeArg {
    /// Money coming in
    Income,
    /// Money going out
    Outcome,
}

impl From<TypeArg> for TransactionType {
    fn from(arg: TypeArg) -> Self {
        match arg {
            TypeArg::Income => TransactionType::Positive,
            TypeArg::Outcome => TransactionType::Negative,
        }
    }
}

/// Transaction subcommands
#[derive(Subcommand, Debug)]
pub enum TransactionCommands {
    /// Register a new transaction
    Add {
        /// What the transaction was for
        name: String,
        /// Amount (e.g., "59.90" or "59,90")
        amount: String,
        /// Income or outcome
        #[arg(short = 't', long = "type", value_enum)]
        kind: TypeArg,
        /// Category key or name (see `category list`)
        #[arg(short, long)]
        category: String,
    },
    /// List transactions
    List {
        /// Only show the most recent N transactions
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Delete every stored transaction
    Clear {
        /// Required to confirm the deletion
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TransactionCommands,
) -> FinanceResult<()> {
    let service = TransactionService::new(storage);
    let currency = CurrencyFormat::for_locale(settings.locale);

    match cmd {
        TransactionCommands::Add {
            name,
            amount,
            kind,
            category,
        } => {
            let txn = service.register(RegisterInput {
                name,
                amount,
                kind: Some(kind.into()),
                category: Some(category),
            })?;

            let entry = history_entry(&txn, &currency, &settings.date_format);
            println!(
                "Registered {} '{}' {} ({})",
                txn.kind.label().to_lowercase(),
                entry.name,
                entry.amount_formatted,
                entry.category_name
            );
            println!("  ID: {}", txn.id);
        }
        TransactionCommands::List { limit } => {
            let entries: Vec<_> = service
                .list(limit)?
                .iter()
                .map(|t| history_entry(t, &currency, &settings.date_format))
                .collect();
            print!("{}", format_history_table(&entries));
        }
        TransactionCommands::Clear { force } => {
            if !force {
                return Err(FinanceError::Validation(
                    "This deletes every transaction. Re-run with --force to confirm".into(),
                ));
            }
            let removed = service.clear()?;
            println!("Removed {} transaction(s).", removed);
        }
    }

    Ok(())
}
