use crate::errors::{AppError, AppResult};
use crate::utils::date::DateBasis;
use crate::utils::path::resolve;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// State database (session flag and internal log).
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_total_floors")]
    pub total_floors: u32,
    #[serde(default = "default_floor")]
    pub default_floor: u32,
    /// Calendar used when a date filter truncates timestamps.
    #[serde(default)]
    pub date_basis: DateBasis,
    #[serde(default = "default_access_password")]
    pub access_password: String,
    /// Items per kind listed under "Recent items" on the dashboard.
    #[serde(default = "default_recent_items")]
    pub recent_items: usize,
    /// Optional YAML dataset replacing the built-in records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset: Option<String>,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_total_floors() -> u32 {
    6
}
fn default_floor() -> u32 {
    1
}
fn default_access_password() -> String {
    "galactic2025".to_string()
}
fn default_recent_items() -> usize {
    3
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            total_floors: default_total_floors(),
            default_floor: default_floor(),
            date_basis: DateBasis::default(),
            access_password: default_access_password(),
            recent_items: default_recent_items(),
            dataset: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("hospitrack")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".hospitrack")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("hospitrack.conf")
    }

    /// Return the full path of the state database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("hospitrack.sqlite")
    }

    /// Dataset file, relative paths taken from the config directory.
    pub fn dataset_path(&self) -> Option<PathBuf> {
        self.dataset
            .as_deref()
            .map(|d| resolve(d, &Self::config_dir()))
    }

    /// `--db` value: relative paths live in the config directory.
    pub fn resolve_database(raw: &str) -> String {
        resolve(raw, &Self::config_dir())
            .to_string_lossy()
            .to_string()
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

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Problems that would make the dashboard misbehave; empty when valid.
    pub fn check(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if self.total_floors == 0 {
            problems.push("total_floors must be at least 1".to_string());
        }
        if self.default_floor == 0 || self.default_floor > self.total_floors {
            problems.push(format!(
                "default_floor {} is outside floors 1-{}",
                self.default_floor, self.total_floors
            ));
        }
        if self.access_password.trim().is_empty() {
            problems.push("access_password is empty: nobody can log in".to_string());
        }
        if self.database.trim().is_empty() {
            problems.push("database path is empty".to_string());
        }
        if let Some(path) = self.dataset_path()
            && !path.is_file()
        {
            problems.push(format!("dataset file {} does not exist", path.display()));
        }

        problems
    }

    /// Initialize the configuration directory and file.
    /// Returns the configuration that was written (or would have been, in
    /// test mode).
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<Config> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let database = match custom_db {
            Some(name) => Self::resolve_database(&name),
            None => default_database(),
        };

        let config = Config {
            database,
            ..Config::default()
        };

        if !is_test {
            config.save_to(&Self::config_file())?;
        }

        Ok(config)
    }
}
