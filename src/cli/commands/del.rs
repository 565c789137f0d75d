use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { order_id } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        DeleteLogic::apply(&mut pool, order_id)?;
    }

    Ok(())
}
