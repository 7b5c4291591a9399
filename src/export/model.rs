use crate::core::transactions::resolve_damage_name;
use crate::models::{Damage, Expense, Transaction};
use crate::utils::date::DATE_FMT;
use serde::Serialize;

/// Flat transaction row, with the damage name resolved.
#[derive(Debug, Serialize)]
pub struct TransactionExport {
    pub id: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub damage_id: String,
    pub damage_name: String,
    pub cost: f64,
    pub entry_date: String,
    pub pickup_date: String,
    pub status: String,
}

impl TransactionExport {
    pub fn from_transaction(tx: &Transaction, damages: &[Damage]) -> Self {
        Self {
            id: tx.id.clone(),
            customer_name: tx.customer_name.clone(),
            customer_phone: tx.customer_phone.clone(),
            damage_id: tx.damage_id.clone(),
            damage_name: resolve_damage_name(&tx.damage_id, damages).to_string(),
            cost: tx.cost,
            entry_date: tx.entry_date.format(DATE_FMT).to_string(),
            pickup_date: tx
                .pickup_date
                .map(|d| d.format(DATE_FMT).to_string())
                .unwrap_or_default(),
            status: tx.status.label().to_string(),
        }
    }
}

/// Damage row; CSV has no nested lists so steps are joined with ` | `.
#[derive(Debug, Serialize)]
pub struct DamageExport {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub video_url: String,
    pub steps: String,
    pub estimated_cost: f64,
}

impl From<&Damage> for DamageExport {
    fn from(d: &Damage) -> Self {
        Self {
            id: d.id.clone(),
            name: d.name.clone(),
            category: d.category.clone(),
            description: d.description.clone(),
            video_url: d.video_embed_url.clone(),
            steps: d.steps.join(" | "),
            estimated_cost: d.estimated_cost,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ExpenseExport {
    pub id: i64,
    pub description: String,
    pub amount: f64,
}

impl From<&Expense> for ExpenseExport {
    fn from(e: &Expense) -> Self {
        Self {
            id: e.id,
            description: e.description.clone(),
            amount: e.amount,
        }
    }
}
