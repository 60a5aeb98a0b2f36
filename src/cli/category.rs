//! Category CLI commands

use clap::Subcommand;

use crate::display::transaction::format_category_table;
use crate::error::FinanceResult;
use crate::models::Category;

/// Category subcommands
#[derive(Subcommand, Debug)]
pub enum CategoryCommands {
    /// List the available categories
    List,
}

pub fn handle_category_command(cmd: CategoryCommands) -> FinanceResult<()> {
    match cmd {
        CategoryCommands::List => print!("{}", format_category_table(Category::all())),
    }
    Ok(())
}
