//! Store connection configuration.
//!
//! Read once at process start from `~/.foodbridge/config.json`. Every field
//! has a default, so a missing file means "defaults" rather than an error —
//! the store path falls back to `~/.foodbridge/foodbridge.db`.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::DbError;

/// Connection settings for the entity store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    /// Absolute path of the SQLite database file. `None` means the default
    /// location under the home directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_path: Option<PathBuf>,

    /// Enforce foreign keys at the store (`PRAGMA foreign_keys = ON`). The
    /// core never duplicates referential checks; with enforcement off, the
    /// store accepts dangling references. Default on.
    #[serde(default = "default_true")]
    pub enforce_foreign_keys: bool,
}

fn default_true() -> bool {
    true
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            db_path: None,
            enforce_foreign_keys: true,
        }
    }
}

impl StoreConfig {
    /// Load from `~/.foodbridge/config.json`, or defaults when absent.
    pub fn load() -> Result<Self, String> {
        let home = dirs::home_dir().ok_or("Could not find home directory")?;
        let config_path = home.join(".foodbridge").join("config.json");

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|e| format!("Failed to read config: {}", e))?;
        serde_json::from_str(&content).map_err(|e| format!("Failed to parse config: {}", e))
    }

    /// Resolve the database path, defaulting to `~/.foodbridge/foodbridge.db`.
    pub fn resolve_db_path(&self) -> Result<PathBuf, DbError> {
        if let Some(ref path) = self.db_path {
            return Ok(path.clone());
        }
        let home = dirs::home_dir().ok_or(DbError::HomeDirNotFound)?;
        Ok(home.join(".foodbridge").join("foodbridge.db"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert!(config.db_path.is_none());
        assert!(config.enforce_foreign_keys);
    }

    #[test]
    fn test_parse_partial_config() {
        let config: StoreConfig =
            serde_json::from_str(r#"{ "dbPath": "/tmp/test.db" }"#).expect("parse");
        assert_eq!(config.db_path, Some(PathBuf::from("/tmp/test.db")));
        assert!(config.enforce_foreign_keys, "unset fields take defaults");
    }

    #[test]
    fn test_explicit_path_wins() {
        let config = StoreConfig {
            db_path: Some(PathBuf::from("/tmp/explicit.db")),
            ..Default::default()
        };
        assert_eq!(
            config.resolve_db_path().expect("resolve"),
            PathBuf::from("/tmp/explicit.db")
        );
    }
}
