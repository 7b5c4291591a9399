//! Fresh identifiers derived from the wall clock.

use chrono::Utc;
use std::collections::BTreeSet;

pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// `prefix<epoch-millis>`, bumped past any value `is_taken` reports.
pub fn fresh_token<F>(prefix: &str, mut is_taken: F) -> String
where
    F: FnMut(&str) -> bool,
{
    let mut millis = now_millis();
    loop {
        let candidate = format!("{prefix}{millis}");
        if !is_taken(&candidate) {
            return candidate;
        }
        millis += 1;
    }
}

/// Epoch-millis number strictly greater than every existing one.
///
/// When the largest id is already `i64::MAX` the smallest unused positive
/// number is returned instead.
pub fn fresh_number<I>(existing: I) -> i64
where
    I: IntoIterator<Item = i64>,
{
    let taken: BTreeSet<i64> = existing.into_iter().collect();
    let now = now_millis();

    match taken.last() {
        Some(&max) if max >= now => max
            .checked_add(1)
            .unwrap_or_else(|| smallest_unused(&taken)),
        _ => now,
    }
}

fn smallest_unused(taken: &BTreeSet<i64>) -> i64 {
    let mut candidate = 1;
    for &id in taken.range(1..) {
        if id != candidate {
            break;
        }
        candidate += 1;
    }
    candidate
}
