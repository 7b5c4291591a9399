//! The shop state for one process: a store plus everything loaded from it.

use crate::core::catalog::{categories_of, filter_damages};
use crate::core::damages::DamageRepository;
use crate::core::expenses::ExpenseRepository;
use crate::core::report::FinancialReport;
use crate::core::session::SessionGate;
use crate::core::transactions::{TransactionRepository, resolve_damage_name};
use crate::core::users::UserDirectory;
use crate::errors::AppResult;
use crate::models::{Damage, Expense, NewDamage, NewTransaction, Transaction, TransactionStatus};
use crate::store::KeyValueStore;
use chrono::NaiveDate;

/// Built once at startup and handed to whoever needs it by reference.
#[derive(Debug)]
pub struct Shop<S: KeyValueStore> {
    pub store: S,
    pub users: UserDirectory,
    pub session: SessionGate,
    pub damages: DamageRepository,
    pub transactions: TransactionRepository,
    pub expenses: ExpenseRepository,
}

impl<S: KeyValueStore> Shop<S> {
    pub fn open(store: S) -> Self {
        Self::with_users(store, UserDirectory::seeded())
    }

    pub fn with_users(store: S, users: UserDirectory) -> Self {
        let session = SessionGate::restore(&store);
        let damages = DamageRepository::load(&store);
        let transactions = TransactionRepository::load(&store);
        let expenses = ExpenseRepository::load(&store);

        Self {
            store,
            users,
            session,
            damages,
            transactions,
            expenses,
        }
    }

    // ---------------------------
    // Session
    // ---------------------------

    pub fn login(&mut self, username: &str, password: &str) -> AppResult<bool> {
        self.session
            .login(&mut self.store, &self.users, username, password)
    }

    pub fn logout(&mut self) -> AppResult<()> {
        self.session.logout(&mut self.store)
    }

    // ---------------------------
    // Mutations
    // ---------------------------

    pub fn add_damage(&mut self, new: NewDamage) -> AppResult<&Damage> {
        self.damages.add(&mut self.store, new)
    }

    pub fn add_transaction(&mut self, new: NewTransaction) -> AppResult<Option<&Transaction>> {
        self.transactions
            .add(&mut self.store, self.damages.list(), new)
    }

    pub fn set_status(&mut self, id: &str, status: TransactionStatus) -> AppResult<bool> {
        self.transactions.set_status(&mut self.store, id, status)
    }

    pub fn set_pickup_date(&mut self, id: &str, date: Option<NaiveDate>) -> AppResult<bool> {
        self.transactions
            .set_pickup_date(&mut self.store, id, date)
    }

    pub fn add_expense(&mut self, description: &str, amount: f64) -> AppResult<Option<&Expense>> {
        self.expenses.add(&mut self.store, description, amount)
    }

    pub fn remove_expense(&mut self, id: i64) -> AppResult<bool> {
        self.expenses.remove(&mut self.store, id)
    }

    // ---------------------------
    // Derived views
    // ---------------------------

    pub fn categories(&self) -> Vec<String> {
        categories_of(self.damages.list())
    }

    pub fn search_damages(&self, search: &str, category: &str) -> Vec<&Damage> {
        filter_damages(self.damages.list(), search, category)
    }

    pub fn damage_name(&self, damage_id: &str) -> &str {
        resolve_damage_name(damage_id, self.damages.list())
    }

    pub fn report(&self) -> FinancialReport {
        FinancialReport::compute(self.transactions.list(), self.expenses.list())
    }
}
