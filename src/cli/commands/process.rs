use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::process::ProcessLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date;

/// Compute working-day summaries for an enterprise and date.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Process { enterprise, date: day } = cmd {
        //
        // 1. Resolve enterprise (flag wins over config default)
        //
        let enterprise_id = match enterprise {
            Some(e) => e.clone(),
            None if !cfg.default_enterprise.trim().is_empty() => cfg.default_enterprise.clone(),
            None => return Err(AppError::MissingEnterprise),
        };

        //
        // 2. Resolve date (default: yesterday, the batch runs over the
        //    previous calendar day)
        //
        let target_date = match day {
            Some(d) => date::parse_date(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?,
            None => date::yesterday(),
        };

        //
        // 3. Open DB and run the batch
        //
        let mut pool = DbPool::new(&cfg.database)?;

        let report = ProcessLogic::run(&mut pool, &enterprise_id, target_date)?;

        success(format!(
            "Working day {}: {} drivers processed, {} failed ({} orders)",
            target_date, report.drivers_processed, report.drivers_failed, report.orders_seen
        ));
    }

    Ok(())
}
