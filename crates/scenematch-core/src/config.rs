use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::SceneError;
use crate::exceptions::SceneExceptions;
use crate::scene::{ExtraSearchType, ReleaseFilter};

const DEFAULT_CONFIG: &str = include_str!("../../../config/default.toml");

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub filters: FilterConfig,
    #[serde(default)]
    pub exceptions: ExceptionsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// `""` for plain queries, otherwise an [`ExtraSearchType`] name.
    pub extra_search_type: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub extra_patterns: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExceptionsConfig {
    pub use_builtin: bool,
    /// Extra exceptions file; empty means none.
    pub file: String,
}

impl Default for ExceptionsConfig {
    fn default() -> Self {
        Self {
            use_builtin: true,
            file: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory for rolling log files; empty disables file logging.
    pub directory: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            directory: String::new(),
        }
    }
}

impl AppConfig {
    /// Load config: the user file if it exists, otherwise built-in defaults.
    pub fn load() -> Result<Self, SceneError> {
        let user_path = Self::config_path();
        if user_path.exists() {
            Self::load_from(&user_path)
        } else {
            toml::from_str(DEFAULT_CONFIG).map_err(|e| SceneError::Config(e.to_string()))
        }
    }

    /// Load config from an explicit path. Missing keys take their defaults.
    pub fn load_from(path: &Path) -> Result<Self, SceneError> {
        let content = std::fs::read_to_string(path)?;
        let config: AppConfig =
            toml::from_str(&content).map_err(|e| SceneError::Config(e.to_string()))?;
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Save current config to the user config file.
    pub fn save(&self) -> Result<(), SceneError> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SceneError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| SceneError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// The configured provider quirk, if any.
    pub fn extra_search_type(&self) -> Result<Option<ExtraSearchType>, SceneError> {
        match self.search.extra_search_type.trim() {
            "" => Ok(None),
            name => name.parse().map(Some),
        }
    }

    /// Built-in release filters plus the configured extra patterns.
    pub fn release_filter(&self) -> Result<ReleaseFilter, SceneError> {
        ReleaseFilter::with_extra_patterns(&self.filters.extra_patterns)
    }

    /// The scene exceptions table: the built-in one (unless disabled) with
    /// the user file merged over it.
    pub fn scene_exceptions(&self) -> Result<SceneExceptions, SceneError> {
        let mut table = if self.exceptions.use_builtin {
            SceneExceptions::embedded()?
        } else {
            SceneExceptions::new()
        };
        let file = self.exceptions.file.trim();
        if !file.is_empty() {
            table.extend(SceneExceptions::load(Path::new(file))?);
        }
        Ok(table)
    }

    /// Path to user config file (XDG on Linux, AppData on Windows).
    pub fn config_path() -> PathBuf {
        Self::project_dirs()
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    /// Path to the database file.
    pub fn db_path() -> PathBuf {
        Self::project_dirs()
            .map(|d| d.data_dir().join("scenematch.db"))
            .unwrap_or_else(|| PathBuf::from("scenematch.db"))
    }

    /// Ensure the data directory exists and return the DB path.
    pub fn ensure_db_path() -> Result<PathBuf, SceneError> {
        let path = Self::db_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(path)
    }

    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("", "", "scenematch")
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("built-in default config is valid TOML")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = AppConfig::default();
        assert_eq!(config.search.extra_search_type, "");
        assert!(config.filters.extra_patterns.is_empty());
        assert!(config.exceptions.use_builtin);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.extra_search_type().unwrap(), None);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: AppConfig = toml::from_str("[search]\nextra_search_type = \"nzbmatrix\"\n").unwrap();
        assert_eq!(config.extra_search_type().unwrap(), Some(ExtraSearchType::NzbMatrix));
        assert!(config.exceptions.use_builtin);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_unknown_search_type_is_config_error() {
        let mut config = AppConfig::default();
        config.search.extra_search_type = "newzbin".into();
        assert!(matches!(config.extra_search_type(), Err(SceneError::Config(_))));
    }

    #[test]
    fn test_release_filter_includes_extra_patterns() {
        let mut config = AppConfig::default();
        config.filters.extra_patterns = vec!["hardcoded".into()];
        let filter = config.release_filter().unwrap();
        assert_eq!(filter.rejection("720p.HARDCODED"), Some("hardcoded"));
    }

    #[test]
    fn test_scene_exceptions_merge_user_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("exceptions.txt");
        std::fs::write(&path, "71256: Daily Show\n").unwrap();

        let mut config = AppConfig::default();
        config.exceptions.file = path.to_string_lossy().into_owned();
        let table = config.scene_exceptions().unwrap();
        assert_eq!(
            table.names_for(71256),
            &["The Daily Show".to_string(), "Daily Show".to_string()]
        );

        config.exceptions.use_builtin = false;
        let table = config.scene_exceptions().unwrap();
        assert_eq!(table.names_for(71256), &["Daily Show".to_string()]);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = AppConfig::default();
        config.logging.level = "debug".into();
        config.filters.extra_patterns = vec!["hc".into()];
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded.logging.level, "debug");
        assert_eq!(loaded.filters.extra_patterns, vec!["hc".to_string()]);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[search\n").unwrap();
        assert!(matches!(AppConfig::load_from(&path), Err(SceneError::Config(_))));
    }
}
