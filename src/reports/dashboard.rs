//! Dashboard highlights and history list
//!
//! The highlight cards (income, expenses, balance) and the formatted
//! transaction history shown on the dashboard.

use chrono::{DateTime, Datelike, Utc};
use std::fmt::Write;

use crate::config::settings::DEFAULT_DATE_FORMAT;
use crate::display::currency::CurrencyFormat;
use crate::error::{FinanceError, FinanceResult};
use crate::models::{Money, MonthPeriod, Transaction, TransactionType};
use crate::storage::Storage;

/// One highlight card
#[derive(Debug, Clone, PartialEq)]
pub struct HighlightCard {
    pub amount: Money,
    pub amount_formatted: String,
    /// e.g. `Last entry on April 13`
    pub last_transaction: String,
}

/// The three dashboard cards
#[derive(Debug, Clone, PartialEq)]
pub struct Highlights {
    pub entries: HighlightCard,
    pub expenses: HighlightCard,
    pub total: HighlightCard,
}

/// A transaction formatted for the history list
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub id: String,
    pub kind: TransactionType,
    pub name: String,
    /// Expenses are prefixed with `- `
    pub amount_formatted: String,
    pub category_key: String,
    pub category_name: String,
    pub category_icon: String,
    pub date_formatted: String,
}

/// Everything the dashboard shows
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub highlights: Highlights,
    pub history: Vec<HistoryEntry>,
}

impl Dashboard {
    /// Build the dashboard from a transaction list
    pub fn from_transactions(
        transactions: &[Transaction],
        currency: &CurrencyFormat,
        date_format: &str,
    ) -> FinanceResult<Self> {
        Ok(Self {
            highlights: highlights(transactions, currency)?,
            history: transactions
                .iter()
                .map(|t| history_entry(t, currency, date_format))
                .collect(),
        })
    }

    /// Read the stored transactions and build the dashboard
    pub fn generate(
        storage: &Storage,
        currency: &CurrencyFormat,
        date_format: &str,
    ) -> FinanceResult<Self> {
        let transactions = storage.transactions.get_all()?;
        Self::from_transactions(&transactions, currency, date_format)
    }

    /// Format the dashboard for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();
        let cards = [
            ("Income", &self.highlights.entries),
            ("Outcome", &self.highlights.expenses),
            ("Total", &self.highlights.total),
        ];

        for (title, card) in cards {
            output.push_str(&format!(
                "{:<8} {:>18}  {}\n",
                title, card.amount_formatted, card.last_transaction
            ));
        }

        output.push('\n');
        output.push_str("Listing\n");
        output.push_str(&"-".repeat(72));
        output.push('\n');

        if self.history.is_empty() {
            output.push_str("No transactions yet.\n");
            return output;
        }

        for entry in &self.history {
            output.push_str(&format!(
                "{:<24} {:>18}  {:<10} {}\n",
                crate::display::report::truncate(&entry.name, 24),
                entry.amount_formatted,
                entry.category_name,
                entry.date_formatted
            ));
        }

        output
    }
}

/// Compute the highlight cards
pub fn highlights(
    transactions: &[Transaction],
    currency: &CurrencyFormat,
) -> FinanceResult<Highlights> {
    let too_large = || FinanceError::Validation("Transaction totals are too large".into());

    let entries_total = kind_total(transactions, TransactionType::Positive).ok_or_else(too_large)?;
    let expenses_total =
        kind_total(transactions, TransactionType::Negative).ok_or_else(too_large)?;
    let total = entries_total
        .checked_sub(expenses_total)
        .ok_or_else(too_large)?;

    let last_entry = last_transaction_date(transactions, TransactionType::Positive);
    let last_expense = last_transaction_date(transactions, TransactionType::Negative);
    let last_any = last_entry.max(last_expense);

    Ok(Highlights {
        entries: HighlightCard {
            amount: entries_total,
            amount_formatted: currency.format(entries_total),
            last_transaction: match last_entry {
                Some(date) => format!("Last entry on {}", day_and_month(&date)),
                None => "No transactions".to_string(),
            },
        },
        expenses: HighlightCard {
            amount: expenses_total,
            amount_formatted: currency.format(expenses_total),
            last_transaction: match last_expense {
                Some(date) => format!("Last outcome on {}", day_and_month(&date)),
                None => "No transactions".to_string(),
            },
        },
        total: HighlightCard {
            amount: total,
            amount_formatted: currency.format(total),
            last_transaction: match last_any {
                Some(date) => format!("01 to {}", day_and_month(&date)),
                None => "No transactions".to_string(),
            },
        },
    })
}

fn kind_total(transactions: &[Transaction], kind: TransactionType) -> Option<Money> {
    Money::checked_sum(
        transactions
            .iter()
            .filter(|t| t.kind == kind)
            .map(|t| t.amount.abs()),
    )
}

/// Latest date among transactions of one type
pub fn last_transaction_date(
    transactions: &[Transaction],
    kind: TransactionType,
) -> Option<DateTime<Utc>> {
    transactions
        .iter()
        .filter(|t| t.kind == kind)
        .map(|t| t.date)
        .max()
}

fn day_and_month(date: &DateTime<Utc>) -> String {
    let period = MonthPeriod::of_date(date.date_naive());
    format!("{} {}", period.month_name(), date.day())
}

/// Format one transaction for the history list
pub fn history_entry(
    transaction: &Transaction,
    currency: &CurrencyFormat,
    date_format: &str,
) -> HistoryEntry {
    let formatted = currency.format(transaction.amount.abs());
    let amount_formatted = match transaction.kind {
        TransactionType::Positive => formatted,
        TransactionType::Negative => format!("- {}", formatted),
    };

    let (category_name, category_icon) = match transaction.category_info() {
        Some(category) => (category.name.to_string(), category.icon.to_string()),
        None => (transaction.category.clone(), String::new()),
    };

    HistoryEntry {
        id: transaction.id.to_string(),
        kind: transaction.kind,
        name: transaction.name.clone(),
        amount_formatted,
        category_key: transaction.category.clone(),
        category_name,
        category_icon,
        date_formatted: format_date(&transaction.date, date_format),
    }
}

/// Render a date, falling back to the default format if `date_format` is unusable
fn format_date(date: &DateTime<Utc>, date_format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(date_format)).is_err() {
        out.clear();
        // The default format is always valid
        let _ = write!(out, "{}", date.format(DEFAULT_DATE_FORMAT));
    }
    out
}
