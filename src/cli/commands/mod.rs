pub mod config;
pub mod damage;
pub mod expense;
pub mod export;
pub mod init;
pub mod log;
pub mod report;
pub mod session;
pub mod tx;

use crate::config::Config;
use crate::core::Shop;
use crate::errors::AppResult;
use crate::store::SqliteStore;

/// Open the configured database and load the shop state from it.
pub(crate) fn open_shop(cfg: &Config) -> AppResult<Shop<SqliteStore>> {
    let store = SqliteStore::open(&cfg.database_path())?;
    Ok(Shop::open(store))
}
