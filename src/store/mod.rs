//! In-memory record store.
//!
//! Records are loaded once per process, either from the built-in demo dataset
//! or from a YAML dataset file, and are never mutated afterwards.

pub mod mock;
pub mod validate;

use crate::errors::{AppError, AppResult};
use crate::models::{Alert, Asset, HistoryEntry, Patient, TimeLogEntry};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordStore {
    #[serde(default)]
    pub assets: Vec<Asset>,
    #[serde(default)]
    pub patients: Vec<Patient>,
    #[serde(default)]
    pub alerts: Vec<Alert>,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
    #[serde(default)]
    pub time_logs: Vec<TimeLogEntry>,
}

impl RecordStore {
    /// The demo dataset of the dashboard.
    pub fn builtin() -> Self {
        Self {
            assets: mock::assets(),
            patients: mock::patients(),
            alerts: mock::alerts(),
            history: mock::history(),
            time_logs: mock::time_logs(),
        }
    }

    /// Parse and validate a YAML dataset.
    pub fn from_yaml_str(content: &str, total_floors: u32) -> AppResult<Self> {
        let store: RecordStore = serde_yaml::from_str(content)?;
        validate::validate(&store, total_floors)?;
        Ok(store)
    }

    pub fn from_yaml_file(path: &Path, total_floors: u32) -> AppResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("cannot read dataset {}: {e}", path.display()))
        })?;
        Self::from_yaml_str(&content, total_floors)
    }

    /// Dataset file when configured, built-in data otherwise.
    pub fn load(dataset: Option<&Path>, total_floors: u32) -> AppResult<Self> {
        match dataset {
            Some(path) => Self::from_yaml_file(path, total_floors),
            None => {
                let store = Self::builtin();
                validate::validate(&store, total_floors)?;
                Ok(store)
            }
        }
    }

    pub fn find_asset(&self, id: &str) -> Option<&Asset> {
        self.assets.iter().find(|a| a.id == id)
    }

    pub fn find_patient(&self, id: &str) -> Option<&Patient> {
        self.patients.iter().find(|p| p.id == id)
    }
}
