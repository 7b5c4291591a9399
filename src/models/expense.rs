use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub description: String,
    pub amount: f64,
}

impl Expense {
    pub fn new(id: i64, description: &str, amount: f64) -> Self {
        Self {
            id,
            description: description.to_string(),
            amount,
        }
    }
}
