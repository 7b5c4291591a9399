pub mod damage;
pub mod expense;
pub mod transaction;
pub mod user;

pub use damage::{Damage, NewDamage};
pub use expense::Expense;
pub use transaction::{NewTransaction, Transaction, TransactionStatus};
pub use user::{Principal, Role, User};
