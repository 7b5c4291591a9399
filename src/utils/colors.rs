/// ANSI color helper utilities for terminal output.
use crate::models::TransactionStatus;

pub const RESET: &str = "\x1b[0m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";

/// Pending → yellow, completed → blue, picked up → green.
pub fn color_for_status(status: TransactionStatus) -> &'static str {
    match status {
        TransactionStatus::Pending => YELLOW,
        TransactionStatus::Completed => BLUE,
        TransactionStatus::PickedUp => GREEN,
    }
}

/// Profit color:
/// \>0 → green
/// \<0 → red
/// 0 → reset
pub fn color_for_amount(value: f64) -> &'static str {
    if value > 0.0 {
        GREEN
    } else if value < 0.0 {
        RED
    } else {
        RESET
    }
}
