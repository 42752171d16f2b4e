//! Configuration file handling for the hotel explorer.
//!
//! Every field has a default, so a config file only needs the values it
//! wants to change. Command-line flags are applied on top afterwards.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::types::Route;

/// Upper bound for the simulated search latency
pub const MAX_SEARCH_DELAY_MS: u64 = 10_000;

/// Explorer configuration that can be saved/loaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExplorerConfig {
    /// Hotel catalog file; the built-in demo catalog is used when unset
    pub catalog_path: Option<PathBuf>,
    /// Where the local session is kept
    pub session_path: PathBuf,
    /// User name recorded on sign-in
    pub user: String,
    /// Simulated latency for catalog lookups
    pub search_delay_ms: u64,
    /// Route shown after logout
    pub login_route: Route,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            session_path: std::env::temp_dir().join("hotel-explorer-session.json"),
            user: std::env::var("USER")
                .ok()
                .filter(|u| !u.trim().is_empty())
                .unwrap_or_else(|| "guest".to_string()),
            search_delay_ms: 250,
            login_route: Route::Login,
        }
    }
}

impl ExplorerConfig {
    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize configuration to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write configuration to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read configuration from {:?}", path.as_ref()))?;

        let config: Self =
            serde_json::from_str(&content).context("Failed to parse configuration JSON")?;

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.user.trim().is_empty() {
            anyhow::bail!("User name must not be empty");
        }

        if self.session_path.as_os_str().is_empty() {
            anyhow::bail!("Session path must be specified");
        }

        if self.search_delay_ms > MAX_SEARCH_DELAY_MS {
            anyhow::bail!(
                "Search delay must be at most {} ms (got {})",
                MAX_SEARCH_DELAY_MS,
                self.search_delay_ms
            );
        }

        if self.login_route == Route::Dashboard {
            anyhow::bail!("Login route must differ from the dashboard route");
        }

        if let Some(catalog) = &self.catalog_path {
            if !catalog.exists() {
                anyhow::bail!("Catalog file {:?} does not exist", catalog);
            }
        }

        Ok(())
    }

    pub fn search_delay(&self) -> Duration {
        Duration::from_millis(self.search_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config_is_valid() {
        let config = ExplorerConfig::default();
        assert!(config.catalog_path.is_none());
        assert_eq!(config.login_route, Route::Login);
        config.validate().unwrap();
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"searchDelayMs": 0, "user": "ada"}}"#).unwrap();
        file.flush().unwrap();

        let config = ExplorerConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.search_delay_ms, 0);
        assert_eq!(config.user, "ada");
        assert_eq!(config.login_route, Route::Login);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let file = NamedTempFile::new().unwrap();
        let config = ExplorerConfig {
            user: "grace".to_string(),
            search_delay_ms: 40,
            ..Default::default()
        };
        config.save_to_file(file.path()).unwrap();

        let loaded = ExplorerConfig::load_from_file(file.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_route_uses_path_names() {
        let json = serde_json::to_string(&ExplorerConfig::default()).unwrap();
        assert!(json.contains(r#""loginRoute":"/login""#));
    }

    #[test]
    fn test_validate_rejects_excessive_delay() {
        let config = ExplorerConfig {
            search_delay_ms: MAX_SEARCH_DELAY_MS + 1,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_missing_catalog() {
        let config = ExplorerConfig {
            catalog_path: Some(PathBuf::from("/nonexistent/catalog.json")),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_load_invalid_json_fails() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        file.flush().unwrap();
        assert!(ExplorerConfig::load_from_file(file.path()).is_err());
    }
}
