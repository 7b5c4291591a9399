use crate::errors::AppResult;
use crate::store::log::{LogRow, load_log};
use crate::store::pool::DbPool;
use crate::utils::formatting::truncate;
use ansi_term::Colour;
use regex::Regex;
use std::sync::LazyLock;

const OP_MAX: usize = 60;

static ANSI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("ANSI pattern is valid"));

fn strip_ansi(s: &str) -> String {
    ANSI.replace_all(s, "").into_owned()
}

/// ANSI colour for each audit operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "edit" => Colour::Yellow,
        "login" | "logout" => Colour::Cyan,
        "login_failed" => Colour::RGB(255, 153, 51),
        "migration_applied" => Colour::Purple,
        "init" => Colour::Blue,
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let lines: Vec<(String, String, String)> =
            entries.iter().map(Self::format_row).collect();

        let id_w = lines.iter().map(|(id, _, _)| id.len()).max().unwrap_or(1);
        let head_w = lines
            .iter()
            .map(|(_, head, _)| strip_ansi(head).chars().count())
            .max()
            .unwrap_or(10)
            .min(OP_MAX);

        println!("📜 Internal log:\n");

        for (id, head, message) in lines {
            let padding = " ".repeat(head_w.saturating_sub(strip_ansi(&head).chars().count()));
            println!("{:>id_w$}: {}{} => {}", id, head, padding, message, id_w = id_w);
        }

        Ok(())
    }

    /// `(id, "date | op (target)", message)` with only the operation coloured.
    fn format_row(row: &LogRow) -> (String, String, String) {
        let date = chrono::DateTime::parse_from_rfc3339(&row.date)
            .map(|dt| dt.format("%FT%T%:z").to_string())
            .unwrap_or_else(|_| row.date.clone());

        let op_target = if row.target.is_empty() {
            row.operation.clone()
        } else {
            format!("{} ({})", row.operation, row.target)
        };

        let visible = truncate(&op_target, OP_MAX);
        let color = color_for_operation(&row.operation);
        let colored = match visible.split_once(' ') {
            Some((op, rest)) => format!("{} {}", color.paint(op), rest),
            None => color.paint(visible.as_str()).to_string(),
        };

        (row.id.to_string(), format!("{} | {}", date, colored), row.message.clone())
    }
}
