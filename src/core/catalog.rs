//! Category list and search filter over the damage catalog.

use crate::models::Damage;

/// Sentinel category that disables category filtering.
pub const CATEGORY_ALL: &str = "all";

/// `"all"` followed by each distinct category in first-seen order.
pub fn categories_of(damages: &[Damage]) -> Vec<String> {
    let mut out = vec![CATEGORY_ALL.to_string()];
    for d in damages {
        if !out.iter().any(|c| c == &d.category) {
            out.push(d.category.clone());
        }
    }
    out
}

/// Damages in `category` (or any, for `"all"`) whose name or category
/// contains `search`, ignoring case. An empty search matches everything.
pub fn filter_damages<'a>(damages: &'a [Damage], search: &str, category: &str) -> Vec<&'a Damage> {
    let needle = search.to_lowercase();

    damages
        .iter()
        .filter(|d| category == CATEGORY_ALL || d.category == category)
        .filter(|d| {
            d.name.to_lowercase().contains(&needle) || d.category.to_lowercase().contains(&needle)
        })
        .collect()
}
