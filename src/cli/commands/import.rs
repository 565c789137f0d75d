use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::import::ImportLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Import orders from a JSON file into the local store.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        let imported = ImportLogic::apply(&mut pool, file)?;

        success(format!("Imported {} orders from {}", imported, file));
    }

    Ok(())
}
