use crate::error::{AgriMitraError, Result};
use serde::Deserialize;
use std::path::Path;

/// Geographic reference data: states and their districts.
///
/// Loaded once from a JSON data file at startup and never reloaded. Name
/// matching is exact; the dashboard submits values picked from the same
/// file, so no normalization is applied.
#[derive(Debug)]
pub struct GeoIndex {
    states: Vec<StateEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StateEntry {
    pub state: String,
    pub districts: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct GeoFile {
    states: Vec<StateEntry>,
}

impl GeoIndex {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AgriMitraError::Config(format!(
                "Failed to read geo data file {}: {}",
                path.display(),
                e
            ))
        })?;

        let file: GeoFile = serde_json::from_str(&raw)?;
        if file.states.is_empty() {
            return Err(AgriMitraError::InvalidData(format!(
                "Geo data file {} contains no states",
                path.display()
            )));
        }

        Ok(Self {
            states: file.states,
        })
    }

    pub fn state(&self, name: &str) -> Option<&StateEntry> {
        self.states.iter().find(|s| s.state == name)
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn district_count(&self) -> usize {
        self.states.iter().map(|s| s.districts.len()).sum()
    }
}

impl StateEntry {
    pub fn has_district(&self, district: &str) -> bool {
        self.districts.iter().any(|d| d == district)
    }
}
