//! Monthly summary by category
//!
//! Groups one month's expenses by category and works out each category's
//! share of that month's spending.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;
use tracing::debug;

use crate::display::currency::CurrencyFormat;
use crate::display::report::format_bar;
use crate::error::{FinanceError, FinanceResult};
use crate::models::{Category, Money, MonthPeriod, Transaction};
use crate::storage::Storage;

/// One category's spending in the selected month
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotal {
    pub key: String,
    pub color: String,
    pub name: String,
    #[serde(serialize_with = "serialize_units")]
    pub total: Money,
    pub total_formatted: String,
    /// Rounded share of the month's spending, e.g. `"42%"`
    pub percent: String,
}

fn serialize_units<S: serde::Serializer>(value: &Money, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(value.as_f64())
}

impl CategoryTotal {
    /// Percent as a number (the string without its `%`)
    pub fn percent_value(&self) -> u32 {
        self.percent.trim_end_matches('%').parse().unwrap_or(0)
    }
}

/// Round `part / whole * 100` to the nearest integer, halves away from zero
///
/// Both values must be positive.
fn rounded_percent(part: Money, whole: Money) -> u32 {
    let part = part.cents() as i128;
    let whole = whole.cents() as i128;
    ((part * 200 + whole) / (whole * 2)) as u32
}

/// Sum of the month's expenses
pub fn month_expense_total(
    transactions: &[Transaction],
    period: MonthPeriod,
) -> FinanceResult<Money> {
    sum_expenses(month_expenses(transactions, period))
}

fn sum_expenses<'a>(expenses: impl IntoIterator<Item = &'a Transaction>) -> FinanceResult<Money> {
    Money::checked_sum(expenses.into_iter().map(|t| t.amount.abs()))
        .ok_or_else(|| FinanceError::Validation("Expense total is too large".into()))
}

fn month_expenses(
    transactions: &[Transaction],
    period: MonthPeriod,
) -> impl Iterator<Item = &Transaction> {
    transactions
        .iter()
        .filter(move |t| t.is_expense() && period.contains(&t.date))
}

/// Break a month's expenses down by category
///
/// Returns one entry per category with spending that month, in canonical
/// category order. A month without expenses yields an empty list.
pub fn summarize_month(
    transactions: &[Transaction],
    period: MonthPeriod,
    currency: &CurrencyFormat,
) -> FinanceResult<Vec<CategoryTotal>> {
    let expenses: Vec<&Transaction> = month_expenses(transactions, period).collect();
    let expense_total = sum_expenses(expenses.iter().copied())?;

    if !expense_total.is_positive() {
        debug!(%period, "no expenses in month");
        return Ok(Vec::new());
    }

    let mut totals = Vec::new();
    for category in Category::all() {
        let category_sum = sum_expenses(
            expenses
                .iter()
                .copied()
                .filter(|t| t.category == category.key),
        )?;

        if !category_sum.is_positive() {
            continue;
        }

        totals.push(CategoryTotal {
            key: category.key.to_string(),
            color: category.color.to_string(),
            name: category.name.to_string(),
            total: category_sum,
            total_formatted: currency.format(category_sum),
            percent: format!("{}%", rounded_percent(category_sum, expense_total)),
        });
    }
    Ok(totals)
}

/// The monthly summary as shown on the summary screen
#[derive(Debug, Clone)]
pub struct ResumeReport {
    pub period: MonthPeriod,
    pub categories: Vec<CategoryTotal>,
    /// All of the month's expenses, including unknown categories
    pub total_expenses: Money,
    pub generated_at: DateTime<Utc>,
    currency: CurrencyFormat,
}

impl ResumeReport {
    /// Build the report from a transaction list
    pub fn from_transactions(
        transactions: &[Transaction],
        period: MonthPeriod,
        currency: CurrencyFormat,
    ) -> FinanceResult<Self> {
        Ok(Self {
            period,
            categories: summarize_month(transactions, period, &currency)?,
            total_expenses: month_expense_total(transactions, period)?,
            generated_at: Utc::now(),
            currency,
        })
    }

    /// Read the stored transactions and build the report
    pub fn generate(
        storage: &Storage,
        period: MonthPeriod,
        currency: CurrencyFormat,
    ) -> FinanceResult<Self> {
        let transactions = storage.transactions.get_all()?;
        Self::from_transactions(&transactions, period, currency)
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Summary by category: {}\n", self.period.label()));
        output.push_str(&"=".repeat(64));
        output.push('\n');

        if self.categories.is_empty() {
            output.push_str("No expenses this month.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<12} {:>16} {:>6}  {}\n",
            "Category", "Amount", "%", "Share"
        ));
        output.push_str(&"-".repeat(64));
        output.push('\n');

        for category in &self.categories {
            output.push_str(&format!(
                "{:<12} {:>16} {:>6}  {}\n",
                category.name,
                category.total_formatted,
                category.percent,
                format_bar(category.percent_value() as f64, 100.0, 24)
            ));
        }

        output.push_str(&"-".repeat(64));
        output.push('\n');
        output.push_str(&format!(
            "{:<12} {:>16}\n",
            "Total",
            self.currency.format(self.total_expenses)
        ));

        output
    }

    /// Export the categories as CSV
    pub fn export_csv<W: Write>(&self, writer: W) -> FinanceResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(["month", "key", "name", "color", "total", "total_formatted", "percent"])?;

        for category in &self.categories {
            csv_writer.write_record([
                self.period.to_string(),
                category.key.clone(),
                category.name.clone(),
                category.color.clone(),
                category.total.to_decimal_string(),
                category.total_formatted.clone(),
                category.percent.clone(),
            ])?;
        }

        csv_writer
            .flush()
            .map_err(|e| FinanceError::Export(e.to_string()))?;
        Ok(())
    }

    /// Export the categories as a JSON array
    pub fn export_json<W: Write>(&self, writer: W) -> FinanceResult<()> {
        serde_json::to_writer_pretty(writer, &self.categories)
            .map_err(|e| FinanceError::Export(e.to_string()))
    }
}
