//! Configuration types for the guide.
//!
//! Defines the declared view set, the storage key and the document the
//! router starts on. Everything has a default so an empty `{}` is valid.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::address::Address;
use crate::progress::LearningPath;
use crate::router::{Router, DEFAULT_STORAGE_KEY};
use crate::store::KeyValueStore;
use crate::view::{builtin_specs, ViewError, ViewId, ViewRegistry, ViewSpec};

/// File name of the config inside the state directory.
pub const CONFIG_FILE: &str = "config.json";

/// Main configuration for the guide.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuideConfig {
    /// Store key holding the last durable view id.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// View shown when nothing has been saved yet.
    #[serde(default = "default_home_view")]
    pub home_view: String,

    /// Path of the document the views live in.
    #[serde(default = "default_document_path")]
    pub document_path: String,

    /// Declared views, in navigation order.
    #[serde(default = "builtin_specs")]
    pub views: Vec<ViewSpec>,

    /// Tutorial shown on the tutorial view.
    #[serde(default = "default_tutorial")]
    pub tutorial: String,

    /// Learning-path checklist.
    #[serde(default = "LearningPath::builtin")]
    pub learning_path: LearningPath,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.into()
}

fn default_home_view() -> String {
    ViewId::HOME.into()
}

fn default_document_path() -> String {
    "index.html".into()
}

fn default_tutorial() -> String {
    "led".into()
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            home_view: default_home_view(),
            document_path: default_document_path(),
            views: builtin_specs(),
            tutorial: default_tutorial(),
            learning_path: LearningPath::builtin(),
        }
    }
}

impl GuideConfig {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        serde_json::from_str(&content).map_err(ConfigError::Parse)
    }

    /// Load from `path` when it exists, defaults otherwise.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::Io)?;
        }
        std::fs::write(path, content).map_err(ConfigError::Io)
    }

    /// Address of the document with no fragment.
    pub fn document(&self) -> Address {
        Address::new(self.document_path.clone(), None)
    }

    pub fn registry(&self) -> Result<ViewRegistry, ConfigError> {
        Ok(ViewRegistry::new(self.views.clone())?)
    }

    /// Router over the configured views, not yet loaded.
    pub fn router<S: KeyValueStore>(&self, store: S) -> Result<Router<S>, ConfigError> {
        Ok(Router::new(self.registry()?, store, self.document())
            .with_storage_key(self.storage_key.clone())
            .with_home(self.home_view.clone()))
    }
}

/// Errors that can occur when working with configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error reading or writing config.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing config JSON.
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// Error serializing config to JSON.
    #[error("Serialize error: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Declared views are inconsistent.
    #[error("Invalid views: {0}")]
    Views(#[from] ViewError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = GuideConfig::default();
        assert_eq!(config.storage_key, "arduino-last-page");
        assert_eq!(config.home_view, "home");
        assert_eq!(config.document_path, "index.html");
        assert!(config.views.iter().any(|v| v.id.is_fallback()));
    }

    #[test]
    fn test_empty_object_uses_defaults() {
        let config: GuideConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.storage_key, "arduino-last-page");
        assert_eq!(config.views.len(), builtin_specs().len());
        assert_eq!(config.tutorial, "led");
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join(CONFIG_FILE);

        let mut config = GuideConfig::default();
        config.storage_key = "custom-key".into();
        config.save(&path).unwrap();

        let loaded = GuideConfig::load(&path).unwrap();
        assert_eq!(loaded.storage_key, "custom-key");
        assert_eq!(loaded.views, config.views);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let temp = TempDir::new().unwrap();
        let config = GuideConfig::load_or_default(&temp.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config.home_view, "home");
    }

    #[test]
    fn test_load_invalid_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            GuideConfig::load(&path),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_router_requires_fallback_view() {
        let config = GuideConfig {
            views: vec![ViewSpec::new("home", "Home", "")],
            ..GuideConfig::default()
        };
        assert!(matches!(
            config.router(MemoryStore::new()),
            Err(ConfigError::Views(ViewError::MissingFallback))
        ));
    }

    #[test]
    fn test_router_uses_configured_key() {
        let config = GuideConfig {
            storage_key: "last".into(),
            ..GuideConfig::default()
        };
        let mut router = config.router(MemoryStore::new()).unwrap();
        router.load(config.document());
        assert_eq!(router.storage_key(), "last");
        assert_eq!(router.stored_selection().as_deref(), Some("home"));
    }
}
