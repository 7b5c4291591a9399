use crate::cli::commands::open_shop;
use crate::cli::parser::TxCommands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{NewTransaction, TransactionStatus};
use crate::ui::messages::{info, success, warning};
use crate::utils::colors::{RESET, color_for_status};
use crate::utils::date::{fmt_optional, parse_date, today};
use crate::utils::formatting::{format_currency, truncate};
use crate::utils::table::Table;
use chrono::NaiveDate;

fn parse_opt_date(raw: Option<&String>) -> AppResult<Option<NaiveDate>> {
    match raw.map(|s| s.trim()) {
        None | Some("") => Ok(None),
        Some(s) => parse_date(s)
            .map(Some)
            .ok_or_else(|| AppError::InvalidDate(s.to_string())),
    }
}

pub fn handle(cmd: &TxCommands, cfg: &Config) -> AppResult<()> {
    let mut shop = open_shop(cfg)?;
    shop.session.require()?;

    match cmd {
        TxCommands::List => {
            let txs = shop.transactions.list();
            if txs.is_empty() {
                info("No transactions recorded.");
                return Ok(());
            }

            let mut table = Table::new(&[
                "ID", "CUSTOMER", "PHONE", "DAMAGE", "COST", "ENTRY", "PICKUP", "STATUS",
            ]);
            for tx in txs {
                table.add_row(vec![
                    tx.id.clone(),
                    truncate(&tx.customer_name, 24),
                    tx.customer_phone.clone(),
                    truncate(shop.damage_name(&tx.damage_id), 30),
                    format_currency(&cfg.currency_symbol, tx.cost),
                    fmt_optional(Some(tx.entry_date)),
                    fmt_optional(tx.pickup_date),
                    tx.status.label().to_string(),
                ]);
            }
            print!("{}", table.render(&cfg.separator_char));
        }

        TxCommands::Add {
            name,
            phone,
            damage,
            entry,
            pickup,
        } => {
            let damage_id = match damage {
                Some(id) => id.clone(),
                None => shop
                    .damages
                    .list()
                    .first()
                    .map(|d| d.id.clone())
                    .unwrap_or_default(),
            };

            let entry_date = parse_opt_date(entry.as_ref())?.unwrap_or_else(today);
            let pickup_date = parse_opt_date(pickup.as_ref())?;

            let added = shop.add_transaction(NewTransaction {
                customer_name: name.clone(),
                customer_phone: phone.clone(),
                damage_id: damage_id.clone(),
                entry_date,
                pickup_date,
            })?;

            match added {
                Some(tx) => success(format!(
                    "Transaction {} added for {} ({})",
                    tx.id,
                    tx.customer_name,
                    format_currency(&cfg.currency_symbol, tx.cost)
                )),
                None => return Err(AppError::UnknownDamageReference(damage_id)),
            }
        }

        TxCommands::Status { id, status } => {
            let st = TransactionStatus::from_code(status)
                .ok_or_else(|| AppError::InvalidStatus(status.clone()))?;

            if shop.set_status(id, st)? {
                success(format!(
                    "Transaction {} is now '{}{}{}'",
                    id,
                    color_for_status(st),
                    st.label(),
                    RESET
                ));
            } else {
                warning(format!("No transaction with id '{}'", id));
            }
        }

        TxCommands::Pickup { id, date } => {
            let d = parse_opt_date(date.as_ref())?;

            if shop.set_pickup_date(id, d)? {
                success(format!("Pickup date of {} set to {}", id, fmt_optional(d)));
            } else {
                warning(format!("No transaction with id '{}'", id));
            }
        }
    }

    Ok(())
}
