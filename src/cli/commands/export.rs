use crate::cli::commands::open_shop;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        what,
        force,
    } = cmd
    {
        let shop = open_shop(cfg)?;
        shop.session.require()?;
        ExportLogic::export(&shop, *format, *what, file, *force)?;
    }
    Ok(())
}
