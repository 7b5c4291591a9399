use crate::core::ids::fresh_number;
use crate::core::notify::{Change, Notifier};
use crate::core::seed;
use crate::errors::AppResult;
use crate::models::Expense;
use crate::store::{KEY_EXPENSES, KeyValueStore, load_json, save_json};

/// Shop running costs, in the order they were entered.
#[derive(Debug, Default)]
pub struct ExpenseRepository {
    items: Vec<Expense>,
    notifier: Notifier,
}

impl ExpenseRepository {
    /// Persisted expenses, or the two placeholder rows when none are stored.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let items = load_json::<Vec<Expense>>(store, KEY_EXPENSES).unwrap_or_else(seed::expenses);
        Self::from_items(items)
    }

    pub fn from_items(items: Vec<Expense>) -> Self {
        Self {
            items,
            notifier: Notifier::default(),
        }
    }

    pub fn list(&self) -> &[Expense] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append an expense. An empty description or an amount that is not a
    /// positive finite number is ignored and yields `Ok(None)`.
    pub fn add(
        &mut self,
        store: &mut dyn KeyValueStore,
        description: &str,
        amount: f64,
    ) -> AppResult<Option<&Expense>> {
        if description.is_empty() || !amount.is_finite() || amount <= 0.0 {
            return Ok(None);
        }

        let id = fresh_number(self.items.iter().map(|e| e.id));

        let mut next = self.items.clone();
        next.push(Expense::new(id, description, amount));

        save_json(store, KEY_EXPENSES, &next)?;
        store.audit("add", "expenses", &format!("{} ({})", description, id));

        self.items = next;
        self.notifier.emit(Change::Expenses);
        Ok(self.items.last())
    }

    /// Returns `Ok(false)` when no expense has this id.
    pub fn remove(&mut self, store: &mut dyn KeyValueStore, id: i64) -> AppResult<bool> {
        if !self.items.iter().any(|e| e.id == id) {
            return Ok(false);
        }

        let next: Vec<Expense> = self.items.iter().filter(|e| e.id != id).cloned().collect();

        save_json(store, KEY_EXPENSES, &next)?;
        store.audit("del", "expenses", &format!("Removed expense {}", id));

        self.items = next;
        self.notifier.emit(Change::Expenses);
        Ok(true)
    }

    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(Change) + 'static,
    {
        self.notifier.subscribe(listener);
    }
}
