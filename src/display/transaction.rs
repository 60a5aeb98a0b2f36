//! Transaction and category tables for the CLI

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Category;
use crate::reports::HistoryEntry;

#[derive(Tabled)]
struct HistoryRow<'a> {
    #[tabled(rename = "Date")]
    date: &'a str,
    #[tabled(rename = "Name")]
    name: &'a str,
    #[tabled(rename = "Amount")]
    amount: &'a str,
    #[tabled(rename = "Category")]
    category: &'a str,
    #[tabled(rename = "ID")]
    id: &'a str,
}

/// Format the history list as a table
pub fn format_history_table(entries: &[HistoryEntry]) -> String {
    if entries.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows: Vec<HistoryRow> = entries
        .iter()
        .map(|e| HistoryRow {
            date: &e.date_formatted,
            name: &e.name,
            amount: &e.amount_formatted,
            category: &e.category_name,
            id: &e.id,
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Key")]
    key: &'static str,
    #[tabled(rename = "Name")]
    name: &'static str,
    #[tabled(rename = "Icon")]
    icon: &'static str,
    #[tabled(rename = "Color")]
    color: &'static str,
}

/// Format the category catalogue as a table
pub fn format_category_table(categories: &[Category]) -> String {
    let rows: Vec<CategoryRow> = categories
        .iter()
        .map(|c| CategoryRow {
            key: c.key,
            name: c.name,
            icon: c.icon,
            color: c.color,
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}
