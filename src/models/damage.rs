use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static LEADING_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+(?:\.\d+)?|\.\d+)(?:[eE][+-]?\d+)?")
        .expect("number pattern is valid")
});

/// A known damage with its repair guide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Damage {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    #[serde(rename = "videoUrl")]
    pub video_embed_url: String,
    pub steps: Vec<String>,
    pub estimated_cost: f64,
}

/// Fields supplied when adding a damage; the id is generated and the
/// video URL is normalized by the repository.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewDamage {
    pub name: String,
    pub category: String,
    pub description: String,
    pub video_url: String,
    pub steps: Vec<String>,
    pub estimated_cost: f64,
}

/// Split multi-line step text, one step per line, dropping blank lines.
pub fn parse_steps(text: &str) -> Vec<String> {
    text.split('\n')
        .filter(|s| !s.trim().is_empty())
        .map(|s| s.trim_end_matches('\r').to_string())
        .collect()
}

/// Lenient cost parsing for form input: the leading number is kept
/// (`"150000abc"` is 150000) and anything without one, or not finite,
/// becomes 0.
pub fn parse_cost(text: &str) -> f64 {
    let Some(m) = LEADING_NUMBER.find(text.trim_start()) else {
        return 0.0;
    };

    match m.as_str().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}
