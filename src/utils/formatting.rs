//! Formatting utilities used for CLI and export outputs.

/// Indonesian Rupiah, no decimals: `Rp 1.550.000`, `-Rp 3.950.000`.
///
/// Rounding happens here only; stored amounts keep their full value.
pub fn format_rupiah(amount: f64) -> String {
    format_currency("Rp", amount)
}

/// Same layout as [`format_rupiah`] with a configurable symbol.
pub fn format_currency(symbol: &str, amount: f64) -> String {
    if !amount.is_finite() {
        return format!("{} -", symbol);
    }

    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());

    format!("{}{} {}", sign, symbol, group_thousands(&digits, '.'))
}

fn group_thousands(digits: &str, sep: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(c);
    }
    out
}

/// Cut `s` to `max` visible characters, ending with `...` when shortened.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut cut: String = s.chars().take(max.saturating_sub(3)).collect();
    cut.push_str("...");
    cut
}
