use crate::ui::messages::success;
use rusqlite::{Connection, Error, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn orders_has_deleted_column(conn: &Connection) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('orders')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == "deleted" {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the `orders` and `waypoints` tables with the modern schema.
fn create_order_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS orders (
            id                          TEXT PRIMARY KEY,
            enterprise                  TEXT NOT NULL,
            driver                      TEXT NOT NULL,
            scheduled_at                TEXT NOT NULL,
            start_time                  TEXT,
            end_time                    TEXT,
            start_at                    TEXT,
            end_at                      TEXT,
            started_improdutive_time_at TEXT,
            started_travel_at           TEXT,
            completed_at                TEXT,
            delivered_at                TEXT,
            deleted                     INTEGER NOT NULL DEFAULT 0,
            created_at                  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS waypoints (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            order_id     TEXT NOT NULL REFERENCES orders(id) ON DELETE CASCADE,
            seq          INTEGER NOT NULL,
            scheduled_at TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_orders_enterprise_scheduled
            ON orders(enterprise, scheduled_at);
        CREATE INDEX IF NOT EXISTS idx_orders_driver ON orders(driver);
        CREATE INDEX IF NOT EXISTS idx_waypoints_order_seq ON waypoints(order_id, seq);
        "#,
    )?;
    Ok(())
}

/// Create the `working_days` table: one computed record per driver per day
/// per enterprise, upserted on reprocess.
fn create_working_days_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS working_days (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            driver     TEXT NOT NULL,
            date       TEXT NOT NULL,
            enterprise TEXT NOT NULL,
            document   TEXT NOT NULL,
            created_at TEXT NOT NULL,
            UNIQUE(driver, date, enterprise)
        );

        CREATE INDEX IF NOT EXISTS idx_working_days_date ON working_days(date);
        "#,
    )?;
    Ok(())
}

/// Add the soft-delete flag to `orders` tables created before it existed.
fn migrate_add_deleted_flag(conn: &Connection) -> Result<(), Error> {
    let version = "20250512_0003_add_deleted_flag";

    // 1) Skip if already applied
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    if chk.query_row([version], |_| Ok(())).optional()?.is_some() {
        return Ok(());
    }

    if orders_has_deleted_column(conn)? {
        return Ok(());
    }

    // 2) Run the migration
    conn.execute(
        "ALTER TABLE orders ADD COLUMN deleted INTEGER NOT NULL DEFAULT 0;",
        [],
    )
    .map_err(|e| {
        Error::SqliteFailure(
            rusqlite::ffi::Error::new(1),
            Some(format!("Failed to add 'deleted' column: {}", e)),
        )
    })?;

    // 3) Mark as applied
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Added deleted flag to orders')",
        [version],
    )?;

    success(format!(
        "Migration applied: {} → added 'deleted' to orders table",
        version
    ));

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Ensure order tables exist
    if !table_exists(conn, "orders")? {
        create_order_tables(conn)?;
        success("Created orders and waypoints tables.");
    } else {
        conn.execute_batch(
            r#"
            CREATE INDEX IF NOT EXISTS idx_orders_enterprise_scheduled
                ON orders(enterprise, scheduled_at);
            CREATE INDEX IF NOT EXISTS idx_orders_driver ON orders(driver);
            "#,
        )?;

        migrate_add_deleted_flag(conn)?;
    }

    // 3) Ensure working_days table exists
    if !table_exists(conn, "working_days")? {
        create_working_days_table(conn)?;
        success("Created working_days table.");
    }

    Ok(())
}
