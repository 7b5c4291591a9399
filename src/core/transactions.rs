use crate::core::ids::fresh_token;
use crate::core::notify::{Change, Notifier};
use crate::core::seed;
use crate::errors::AppResult;
use crate::models::{Damage, NewTransaction, Transaction, TransactionStatus};
use crate::store::{KEY_TRANSACTIONS, KeyValueStore, load_json, save_json};
use chrono::NaiveDate;

/// Label used when a transaction points at a damage that no longer exists.
pub const UNKNOWN_DAMAGE: &str = "Unknown";

/// Customer repair orders, newest first.
#[derive(Debug, Default)]
pub struct TransactionRepository {
    items: Vec<Transaction>,
    notifier: Notifier,
}

impl TransactionRepository {
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let items = load_json::<Vec<Transaction>>(store, KEY_TRANSACTIONS)
            .unwrap_or_else(seed::transactions);
        Self::from_items(items)
    }

    pub fn from_items(items: Vec<Transaction>) -> Self {
        Self {
            items,
            notifier: Notifier::default(),
        }
    }

    pub fn list(&self) -> &[Transaction] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&Transaction> {
        self.items.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Record a new pending order priced from the referenced damage.
    ///
    /// When `damage_id` is not in `damages` nothing is created and
    /// `Ok(None)` is returned.
    pub fn add(
        &mut self,
        store: &mut dyn KeyValueStore,
        damages: &[Damage],
        new: NewTransaction,
    ) -> AppResult<Option<&Transaction>> {
        let Some(damage) = damages.iter().find(|d| d.id == new.damage_id) else {
            return Ok(None);
        };

        let id = fresh_token("trx", |candidate| self.get(candidate).is_some());

        let tx = Transaction {
            id,
            customer_name: new.customer_name,
            customer_phone: new.customer_phone,
            damage_id: new.damage_id,
            cost: damage.estimated_cost,
            entry_date: new.entry_date,
            pickup_date: new.pickup_date,
            status: TransactionStatus::Pending,
        };

        let mut next = Vec::with_capacity(self.items.len() + 1);
        next.push(tx);
        next.extend(self.items.iter().cloned());

        save_json(store, KEY_TRANSACTIONS, &next)?;
        store.audit(
            "add",
            "transactions",
            &format!("{} for {} ({})", next[0].id, next[0].customer_name, damage.name),
        );

        self.items = next;
        self.notifier.emit(Change::Transactions);
        Ok(self.items.first())
    }

    /// Returns `Ok(false)` when no transaction has this id.
    pub fn set_status(
        &mut self,
        store: &mut dyn KeyValueStore,
        id: &str,
        status: TransactionStatus,
    ) -> AppResult<bool> {
        self.update(store, id, |tx| tx.status = status, || {
            format!("{} status -> {}", id, status.label())
        })
    }

    /// `None` clears the pickup date. Returns `Ok(false)` for an unknown id.
    pub fn set_pickup_date(
        &mut self,
        store: &mut dyn KeyValueStore,
        id: &str,
        date: Option<NaiveDate>,
    ) -> AppResult<bool> {
        self.update(store, id, |tx| tx.pickup_date = date, || {
            format!(
                "{} pickup -> {}",
                id,
                crate::utils::date::fmt_optional(date)
            )
        })
    }

    fn update<F, M>(
        &mut self,
        store: &mut dyn KeyValueStore,
        id: &str,
        apply: F,
        message: M,
    ) -> AppResult<bool>
    where
        F: FnOnce(&mut Transaction),
        M: FnOnce() -> String,
    {
        let Some(pos) = self.items.iter().position(|t| t.id == id) else {
            return Ok(false);
        };

        let mut next = self.items.clone();
        apply(&mut next[pos]);

        save_json(store, KEY_TRANSACTIONS, &next)?;
        store.audit("edit", "transactions", &message());

        self.items = next;
        self.notifier.emit(Change::Transactions);
        Ok(true)
    }

    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(Change) + 'static,
    {
        self.notifier.subscribe(listener);
    }
}

/// Name of the referenced damage, or [`UNKNOWN_DAMAGE`] for a dangling id.
pub fn resolve_damage_name<'a>(damage_id: &str, damages: &'a [Damage]) -> &'a str {
    damages
        .iter()
        .find(|d| d.id == damage_id)
        .map(|d| d.name.as_str())
        .unwrap_or(UNKNOWN_DAMAGE)
}
