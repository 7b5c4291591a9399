//! Durable key-value storage for the shop state.
//!
//! Every collection lives under its own key as a JSON document. The SQLite
//! file is opened once per process and migrated on open.

pub mod kv;
pub mod log;
pub mod migrate;
pub mod pool;

pub use kv::{KeyValueStore, MemoryStore, SqliteStore, load_json, save_json};

/// Session principal key.
pub const KEY_SESSION: &str = "currentUser";
/// Transaction collection key.
pub const KEY_TRANSACTIONS: &str = "transactions";
/// Damage catalog key.
pub const KEY_DAMAGES: &str = "damages";
/// Expense collection key.
pub const KEY_EXPENSES: &str = "expenses";
