use crate::cli::commands::open_shop;
use crate::cli::parser::ExpenseCommands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use crate::utils::formatting::format_currency;
use crate::utils::table::Table;

pub fn handle(cmd: &ExpenseCommands, cfg: &Config) -> AppResult<()> {
    let mut shop = open_shop(cfg)?;
    let is_owner = shop.session.require()?.is_owner();

    match cmd {
        ExpenseCommands::List => {
            let items = shop.expenses.list();
            if items.is_empty() {
                info("No expenses recorded.");
                return Ok(());
            }

            let mut table = Table::new(&["ID", "DESCRIPTION", "AMOUNT"]);
            for e in items {
                table.add_row(vec![
                    e.id.to_string(),
                    e.description.clone(),
                    format_currency(&cfg.currency_symbol, e.amount),
                ]);
            }
            print!("{}", table.render(&cfg.separator_char));
        }

        ExpenseCommands::Add {
            description,
            amount,
        } => {
            if !is_owner {
                return Err(AppError::PermissionDenied(
                    "only the owner can add expenses".into(),
                ));
            }

            let value = amount.trim().parse::<f64>().unwrap_or(f64::NAN);
            match shop.add_expense(description, value)? {
                Some(e) => success(format!(
                    "Expense {} added: {} ({})",
                    e.id,
                    e.description,
                    format_currency(&cfg.currency_symbol, e.amount)
                )),
                None => warning("Expense ignored: it needs a description and a positive amount."),
            }
        }

        ExpenseCommands::Del { id } => {
            if !is_owner {
                return Err(AppError::PermissionDenied(
                    "only the owner can remove expenses".into(),
                ));
            }

            if shop.remove_expense(*id)? {
                success(format!("Expense {} removed.", id));
            } else {
                info(format!("No expense with id {}; nothing removed.", id));
            }
        }
    }

    Ok(())
}
