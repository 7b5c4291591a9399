use crate::cli::commands::open_shop;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{field, header};
use crate::utils::colors::{RESET, color_for_amount};
use crate::utils::formatting::format_currency;

const LABEL_W: usize = 22;

/// Print the financial summary.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let shop = open_shop(cfg)?;
    shop.session.require()?;

    let report = shop.report();
    let money = |v: f64| format_currency(&cfg.currency_symbol, v);

    header("Laporan Keuangan");
    field("Total transactions", report.total_transactions, LABEL_W);
    field("Total revenue", money(report.total_revenue), LABEL_W);
    field("Total expenses", money(report.total_expenses), LABEL_W);
    field(
        "Net profit",
        format!(
            "{}{}{}",
            color_for_amount(report.net_profit),
            money(report.net_profit),
            RESET
        ),
        LABEL_W,
    );

    let most_common = match report.most_common_damage_id() {
        Some(id) => format!(
            "{} ({}x)",
            shop.damage_name(id),
            report.most_common_count()
        ),
        None => "-".to_string(),
    };
    field("Most common damage", most_common, LABEL_W);

    if !report.frequency.is_empty() {
        println!();
        for (id, n) in report.frequency.iter() {
            println!("  {:>3}x  {}", n, shop.damage_name(id));
        }
    }

    Ok(())
}
