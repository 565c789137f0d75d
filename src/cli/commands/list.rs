use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::load_working_days;
use crate::errors::AppResult;
use crate::export::range::parse_range;
use crate::models::working_day::DriverWorkingDay;
use crate::utils::table::Table;
use chrono::{NaiveDate, NaiveDateTime};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        period,
        driver,
        details,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        let bounds: Option<(NaiveDate, NaiveDate)> = match period {
            None => None,
            Some(p) if p.eq_ignore_ascii_case("all") => None,
            Some(p) => Some(parse_range(p)?),
        };

        let records = load_working_days(&mut pool, bounds, driver.as_deref())?;

        if records.is_empty() {
            println!("No working days found.");
            return Ok(());
        }

        print_summaries(&records);

        if *details {
            for record in &records {
                print_details(record, &cfg.separator_char);
            }
        }
    }

    Ok(())
}

fn print_summaries(records: &[DriverWorkingDay]) {
    let mut table = Table::new(&[
        "DRIVER",
        "DATE",
        "MODE",
        "ORDERS",
        "WORK",
        "PRODUCTIVE",
        "UNPRODUCTIVE",
        "ON-HOLD",
        "INTRA-DAY",
    ]);

    for record in records {
        for (mode, breakdown) in [
            ("realized", &record.working_day.realized),
            ("foreseen", &record.working_day.foreseen),
        ] {
            table.add_row(vec![
                record.driver.clone(),
                record.date.format("%Y-%m-%d").to_string(),
                mode.to_string(),
                record.orders.len().to_string(),
                breakdown.summary.work_time.clone(),
                breakdown.summary.productive_time.clone(),
                breakdown.summary.unproductive_time.clone(),
                breakdown.summary.on_hold_time.clone(),
                breakdown.summary.intra_day.clone(),
            ]);
        }
    }

    println!("{}", table.render());
}

fn fmt_anchor(ts: Option<NaiveDateTime>) -> String {
    ts.map(|t| t.format("%H:%M").to_string())
        .unwrap_or_else(|| "--:--".to_string())
}

fn print_details(record: &DriverWorkingDay, separator: &str) {
    println!("{}", separator.repeat(72));
    println!("{} — {} (realized breakdown)\n", record.driver, record.date);

    let mut table = Table::new(&[
        "ORDER",
        "START",
        "FIRST POINT",
        "LAST POINT",
        "END",
        "UNPROD-IN",
        "PRODUCTIVE",
        "UNPROD-OUT",
        "WORK",
        "ON-HOLD",
        "INTRA-DAY",
    ]);

    for detail in &record.working_day.realized.details {
        table.add_row(vec![
            detail.id.clone(),
            fmt_anchor(detail.start_at),
            fmt_anchor(detail.first_point_at),
            fmt_anchor(detail.last_point_at),
            fmt_anchor(detail.end_at),
            detail.unproductive_time_init.clone(),
            detail.productive_time.clone(),
            detail.unproductive_time_end.clone(),
            detail.work_time.clone(),
            detail.on_hold_time.clone(),
            detail.intra_day.clone(),
        ]);
    }

    println!("{}", table.render());
}
