use crate::cli::commands::open_shop;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};

/// `login`, `logout` and `whoami`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let mut shop = open_shop(cfg)?;

    match cmd {
        Commands::Login { username, password } => {
            if shop.login(username, password)? {
                let p = shop.session.require()?;
                success(format!("Logged in as {} ({})", p.username, p.role.label()));
            } else {
                return Err(AppError::InvalidCredentials);
            }
        }
        Commands::Logout => {
            let was_logged_in = shop.session.is_logged_in();
            shop.logout()?;
            if was_logged_in {
                success("Logged out.");
            } else {
                info("No active session.");
            }
        }
        Commands::Whoami => match shop.session.principal() {
            Some(p) => println!("{} (id {}, {})", p.username, p.id, p.role.label()),
            None => info("Not logged in."),
        },
        _ => {}
    }

    Ok(())
}
