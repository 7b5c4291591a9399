use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::{KeyValueStore, SqliteStore};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database and its schema
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.as_deref(), cli.test)?;

    println!("⚙️  Initializing repairdesk…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", &db_path);

    let mut store = SqliteStore::open(&db_path)?;
    store.audit(
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &db_path),
    );

    println!("✅ Database initialized at {}", &db_path);
    println!("🎉 repairdesk initialization completed!");
    Ok(())
}
