//! Shop domain: repositories, session gate and derived views.

pub mod catalog;
pub mod damages;
pub mod embed;
pub mod expenses;
pub mod ids;
pub mod log;
pub mod notify;
pub mod report;
pub mod seed;
pub mod session;
pub mod shop;
pub mod transactions;
pub mod users;

pub use shop::Shop;
