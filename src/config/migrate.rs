//! Configuration-file migrations: fill in keys added after the config file
//! was first written, without touching user-set values.

use crate::ui::messages::success;
use rusqlite::{Connection, Error, OptionalExtension};
use serde_yaml::Value;
use std::fs;

const EXPECTED_KEYS: [&str; 3] = ["database", "default_enterprise", "separator_char"];

/// Report config keys the current file is missing.
pub fn missing_keys() -> Vec<String> {
    let conf_file = super::Config::config_file();

    let content = match fs::read_to_string(&conf_file) {
        Ok(c) => c,
        Err(_) => return EXPECTED_KEYS.iter().map(|k| k.to_string()).collect(),
    };

    let yaml: Value = match serde_yaml::from_str(&content) {
        Ok(y) => y,
        Err(_) => return EXPECTED_KEYS.iter().map(|k| k.to_string()).collect(),
    };

    let Some(map) = yaml.as_mapping() else {
        return EXPECTED_KEYS.iter().map(|k| k.to_string()).collect();
    };

    EXPECTED_KEYS
        .iter()
        .filter(|k| !map.contains_key(&Value::String(k.to_string())))
        .map(|k| k.to_string())
        .collect()
}

/// Migration that adds the `default_enterprise` parameter to the YAML
/// config, if missing, and marks the migration as applied in the `log`
/// table.
pub fn migrate_add_default_enterprise(conn: &Connection) -> Result<(), Error> {
    let version = "20250601_0004_add_default_enterprise";

    // Check if already applied
    let mut chk = conn.prepare(
        "SELECT 1 FROM log WHERE operation = 'migration_applied' AND target = ?1 LIMIT 1",
    )?;
    if chk.query_row([version], |_| Ok(())).optional()?.is_some() {
        return Ok(()); // already applied
    }

    let conf_file = super::Config::config_file();

    if conf_file.exists() {
        let content = fs::read_to_string(&conf_file).map_err(|e| {
            Error::SqliteFailure(
                rusqlite::ffi::Error::new(1),
                Some(format!("Failed to read config {:?}: {}", conf_file, e)),
            )
        })?;

        if let Ok(mut yaml) = serde_yaml::from_str::<Value>(&content)
            && let Some(map) = yaml.as_mapping_mut()
        {
            let key = Value::String("default_enterprise".to_string());

            if !map.contains_key(&key) {
                map.insert(key, Value::String(String::new()));

                let serialized = serde_yaml::to_string(&yaml).map_err(|e| {
                    Error::SqliteFailure(
                        rusqlite::ffi::Error::new(1),
                        Some(format!(
                            "Failed to serialize updated config {:?}: {}",
                            conf_file, e
                        )),
                    )
                })?;

                fs::write(&conf_file, serialized).map_err(|e| {
                    Error::SqliteFailure(
                        rusqlite::ffi::Error::new(1),
                        Some(format!(
                            "Failed to write updated config {:?}: {}",
                            conf_file, e
                        )),
                    )
                })?;
            }
        }

        conn.execute(
            "INSERT INTO log (date, operation, target, message)
             VALUES (datetime('now'), 'migration_applied', ?1, 'Added default_enterprise parameter to config')",
            [version],
        )?;

        success(format!(
            "Migration applied: {} — added default_enterprise parameter to config.",
            version
        ));
    }

    Ok(())
}
