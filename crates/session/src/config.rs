//! Session configuration
//!
//! Loaded from an optional TOML file, then overridden from the environment.

use crate::{Result, SessionError};
use label_template::{ContactDetails, DEFAULT_BACKGROUND_URL};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default generative model
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Default Gemini REST endpoint
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Environment variables consulted for the API key, in order
pub const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

const APP_DIR: &str = "plylabel";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SessionConfig {
    /// Gemini API key; unset disables PDF analysis
    pub api_key: Option<String>,
    pub model: String,
    pub endpoint: String,
    pub timeout_secs: u64,
    /// Directory of the file store; defaults to the platform data dir
    pub store_dir: Option<PathBuf>,
    pub contact: ContactDetails,
    pub background_url: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: 60,
            store_dir: None,
            contact: ContactDetails::default(),
            background_url: DEFAULT_BACKGROUND_URL.to_string(),
        }
    }
}

impl SessionConfig {
    /// Load configuration
    ///
    /// A missing file yields defaults; a malformed file is an error. The API
    /// key is then taken from `GEMINI_API_KEY` or `API_KEY` when set.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) if path.exists() => Self::from_file(path)?,
            Some(path) => {
                debug!(path = %path.display(), "config file not found, using defaults");
                Self::default()
            }
            None => Self::default(),
        };

        config.apply_env(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// Parse a TOML config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| SessionError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| SessionError::Config(e.to_string()))
    }

    /// Override the API key from environment lookups
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = API_KEY_VARS
            .iter()
            .filter_map(|name| lookup(name))
            .find(|value| !value.trim().is_empty())
        {
            self.api_key = Some(key);
        }
    }

    /// Directory for persisted records
    pub fn store_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.store_dir {
            return Ok(dir.clone());
        }
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| SessionError::Config("Could not find data directory".to_string()))
    }

    /// Default config file location
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.contact.phone, "Tel.: 54 411 19 16");
    }

    #[test]
    fn test_partial_toml() {
        let config = SessionConfig::from_toml(
            r#"
            model = "gemini-2.0-flash"
            store_dir = "/tmp/plylabel"

            [contact]
            company = "Test Timber"
            address = "1 Mill Road"
            phone = "Tel.: 000"
            "#,
        )
        .unwrap();

        assert_eq!(config.model, "gemini-2.0-flash");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.store_dir().unwrap(), PathBuf::from("/tmp/plylabel"));
        assert_eq!(config.contact.company, "Test Timber");
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(
            SessionConfig::from_toml("timeout_secs = \"soon\""),
            Err(SessionError::Config(_))
        ));
    }

    #[test]
    fn test_env_override_order() {
        let mut config = SessionConfig::default();
        config.apply_env(|name| match name {
            "GEMINI_API_KEY" => Some("  ".to_string()),
            "API_KEY" => Some("fallback".to_string()),
            _ => None,
        });
        assert_eq!(config.api_key.as_deref(), Some("fallback"));

        config.apply_env(|name| (name == "GEMINI_API_KEY").then(|| "primary".to_string()));
        assert_eq!(config.api_key.as_deref(), Some("primary"));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = SessionConfig::load(Some(Path::new("/nonexistent/plylabel.toml"))).unwrap();
        assert_eq!(config.model, DEFAULT_MODEL);
    }
}
