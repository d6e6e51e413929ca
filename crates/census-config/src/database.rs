//! Entity store configuration.

use serde::{Deserialize, Serialize};

fn default_path() -> String {
    String::from("census.db")
}

/// Default busy timeout for file-backed connections, in milliseconds.
const fn default_busy_timeout_ms() -> u64 {
    5000
}

/// How `create` resolves an existing row for a 1:1 detail table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UpsertStrategy {
    /// Single `INSERT .. ON CONFLICT DO UPDATE` statement.
    #[default]
    Native,
    /// Insert; on a uniqueness conflict roll back and update the existing row
    /// in a second transaction.
    Fallback,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Path to the libSQL database file, or `:memory:`.
    #[serde(default = "default_path")]
    pub path: String,

    /// How long a connection waits on a locked database file.
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,

    #[serde(default)]
    pub upsert_strategy: UpsertStrategy,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            busy_timeout_ms: default_busy_timeout_ms(),
            upsert_strategy: UpsertStrategy::default(),
        }
    }
}

impl DatabaseConfig {
    /// Whether the configured store lives only in memory.
    #[must_use]
    pub fn is_in_memory(&self) -> bool {
        self.path == ":memory:"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = DatabaseConfig::default();
        assert_eq!(config.path, "census.db");
        assert_eq!(config.busy_timeout_ms, 5000);
        assert_eq!(config.upsert_strategy, UpsertStrategy::Native);
        assert!(!config.is_in_memory());
    }

    #[test]
    fn memory_path_detected() {
        let config = DatabaseConfig {
            path: ":memory:".into(),
            ..Default::default()
        };
        assert!(config.is_in_memory());
    }
}
