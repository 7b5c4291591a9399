//! Financial summary over the current transactions and expenses.
//!
//! Everything here is recomputed from the slices passed in; nothing is
//! cached between calls.

use crate::models::{Damage, Expense, Transaction};
use std::collections::HashMap;

pub fn total_revenue(transactions: &[Transaction]) -> f64 {
    transactions.iter().map(|t| t.cost).sum()
}

pub fn total_expenses(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|e| e.amount).sum()
}

/// Transactions per damage id, keyed in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DamageFrequency {
    order: Vec<String>,
    counts: HashMap<String, usize>,
}

impl DamageFrequency {
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let mut freq = Self::default();
        for tx in transactions {
            match freq.counts.get_mut(&tx.damage_id) {
                Some(n) => *n += 1,
                None => {
                    freq.order.push(tx.damage_id.clone());
                    freq.counts.insert(tx.damage_id.clone(), 1);
                }
            }
        }
        freq
    }

    pub fn count(&self, damage_id: &str) -> usize {
        self.counts.get(damage_id).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// `(damage_id, count)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.order
            .iter()
            .map(|id| (id.as_str(), self.counts.get(id).copied().unwrap_or(0)))
    }

    /// Highest count; ties go to the id seen first.
    pub fn most_common(&self) -> Option<(&str, usize)> {
        let mut best: Option<(&str, usize)> = None;
        for (id, n) in self.iter() {
            match best {
                Some((_, top)) if n <= top => {}
                _ => best = Some((id, n)),
            }
        }
        best
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FinancialReport {
    pub total_transactions: usize,
    pub total_revenue: f64,
    pub total_expenses: f64,
    pub net_profit: f64,
    pub frequency: DamageFrequency,
}

impl FinancialReport {
    pub fn compute(transactions: &[Transaction], expenses: &[Expense]) -> Self {
        let total_revenue = total_revenue(transactions);
        let total_expenses = total_expenses(expenses);

        Self {
            total_transactions: transactions.len(),
            total_revenue,
            total_expenses,
            net_profit: total_revenue - total_expenses,
            frequency: DamageFrequency::from_transactions(transactions),
        }
    }

    /// `None` when there are no transactions.
    pub fn most_common_damage_id(&self) -> Option<&str> {
        self.frequency.most_common().map(|(id, _)| id)
    }

    pub fn most_common_count(&self) -> usize {
        self.frequency.most_common().map(|(_, n)| n).unwrap_or(0)
    }

    /// The most common damage record; `None` also when its id is dangling.
    pub fn most_common_damage<'a>(&self, damages: &'a [Damage]) -> Option<&'a Damage> {
        let id = self.most_common_damage_id()?;
        damages.iter().find(|d| d.id == id)
    }
}
