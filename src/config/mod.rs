use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod credentials;

pub use credentials::ProductionCredentials;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_source_server")]
    pub source_server: String,
    #[serde(default = "default_source_database")]
    pub source_database: String,
    #[serde(default)]
    pub export_file: Option<String>,
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,
}

fn default_source_server() -> String {
    "FOXXSQLPROD".to_string()
}
fn default_source_database() -> String {
    "XLCServices1".to_string()
}
fn default_sample_size() -> usize {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            source_server: default_source_server(),
            source_database: default_source_database(),
            export_file: None,
            sample_size: default_sample_size(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        let base = if cfg!(target_os = "windows") {
            dirs::config_dir()
        } else {
            dirs::home_dir()
        }
        .unwrap_or_else(|| PathBuf::from("."));

        if cfg!(target_os = "windows") {
            base.join("bsttsync")
        } else {
            base.join(".bsttsync")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("bsttsync.conf")
    }

    /// Return the default path of the SQLite analytical store
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("bsttsync.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Create the config directory, write the config file (unless `is_test`)
    /// and return the configuration that was set up.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();

        let db_path = match custom_db {
            Some(name) if Path::new(name).is_absolute() => PathBuf::from(name),
            Some(name) => dir.join(name),
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Self::load()?
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            fs::write(Self::config_file(), config.to_yaml()?)?;
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        Ok(config)
    }

    /// Credentials from the environment, with this config's server/database
    /// as fallback.
    pub fn credentials(&self) -> AppResult<ProductionCredentials> {
        ProductionCredentials::from_env(&self.source_server, &self.source_database)
    }
}
