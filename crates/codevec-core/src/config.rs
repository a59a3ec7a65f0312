//! Configuration for the tokenization pipeline.
//!
//! Load order: `codevec.toml` → environment variables → defaults.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level codevec configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    pub pool: PoolConfig,
}

/// Parser worker pool configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    /// Number of long-lived parser workers. Bounds specialized-path
    /// concurrency; rows are assigned to slots by `row_index % workers`.
    pub workers: usize,
    /// Per-row parse timeout in milliseconds. A row exceeding it is failed
    /// and its worker slot recycled; other rows are unaffected.
    pub row_timeout_ms: u64,
    /// How many times a row is retried after its worker died before the row
    /// is surfaced as failed.
    pub max_restarts: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            workers: 4,
            row_timeout_ms: 5_000,
            max_restarts: 2,
        }
    }
}

/// Helper to parse an env var and apply it to a config field.
fn env_override<T: std::str::FromStr>(var: &str, target: &mut T) {
    if let Ok(v) = std::env::var(var)
        && let Ok(n) = v.parse()
    {
        *target = n;
    }
}

impl TokenizerConfig {
    /// Load config from `codevec.toml` in the project root, with env var
    /// overrides. Falls back to defaults if no config file exists.
    pub fn load(project_root: &Path) -> Result<Self> {
        let config_path = project_root.join("codevec.toml");

        let mut config: Self = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content)?
        } else {
            Self::default()
        };

        // Environment variable overrides
        env_override("CODEVEC_POOL_WORKERS", &mut config.pool.workers);
        env_override("CODEVEC_ROW_TIMEOUT_MS", &mut config.pool.row_timeout_ms);
        env_override("CODEVEC_MAX_RESTARTS", &mut config.pool.max_restarts);

        if config.pool.workers == 0 {
            anyhow::bail!("pool.workers must be at least 1");
        }
        if config.pool.row_timeout_ms == 0 {
            anyhow::bail!("pool.row_timeout_ms must be positive");
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TokenizerConfig::default();
        assert_eq!(config.pool.workers, 4);
        assert_eq!(config.pool.row_timeout_ms, 5_000);
        assert_eq!(config.pool.max_restarts, 2);
    }

    #[test]
    fn test_config_from_toml() {
        let toml_str = r#"
[pool]
workers = 8
row_timeout_ms = 250
"#;
        let config: TokenizerConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.pool.workers, 8);
        assert_eq!(config.pool.row_timeout_ms, 250);
        // Defaults for unspecified fields
        assert_eq!(config.pool.max_restarts, 2);
    }

    #[test]
    fn test_config_load_nonexistent() {
        let config = TokenizerConfig::load(Path::new("/nonexistent/path")).unwrap();
        assert_eq!(config.pool.workers, 4);
    }

    #[test]
    fn test_config_rejects_zero_workers() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(
            tmp.path().join("codevec.toml"),
            r#"
[pool]
workers = 0
"#,
        )
        .unwrap();

        assert!(TokenizerConfig::load(tmp.path()).is_err());
    }
}
