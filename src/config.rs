//! Dataset configuration.
//! The column contract for the indicator CSV, overridable from a JSON file.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Wide-format climate/economy indicator table, one row per country.
pub const DEFAULT_DATA_URL: &str = "https://raw.githubusercontent.com/TallMessiWu/climate_change_data_analysis/main/data/cleaned_and_ready/wide_data.csv";

/// Which columns mean what in the dataset.
///
/// The two raw columns are the scatter axes and keep their natural scale;
/// every other numeric column is z-scored. `dropped_columns` are artifacts
/// of the dataset export, removed before normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    pub url: String,
    pub identifier_column: String,
    pub group_column: String,
    pub raw_x_column: String,
    pub raw_y_column: String,
    pub dropped_columns: Vec<String>,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATA_URL.to_string(),
            identifier_column: "Country_name".to_string(),
            group_column: "Income_group".to_string(),
            raw_x_column: "Energy use per capita (kilograms of oil equivalent)".to_string(),
            raw_y_column: "CO2 emissions per capita (metric tons)".to_string(),
            dropped_columns: vec!["color".to_string()],
        }
    }
}

impl DatasetConfig {
    /// Load the config file named by `CLIMASCOPE_CONFIG` (default
    /// `climascope.json` in the working directory), falling back to the
    /// built-in dataset contract when absent or malformed.
    pub fn load() -> Self {
        let path =
            std::env::var("CLIMASCOPE_CONFIG").unwrap_or_else(|_| "climascope.json".to_string());
        Self::from_file(Path::new(&path)).unwrap_or_default()
    }

    fn from_file(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }
        let parsed = std::fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|text| serde_json::from_str(&text).map_err(|e| e.to_string()));
        match parsed {
            Ok(config) => {
                log::info!("using dataset config from {}", path.display());
                Some(config)
            }
            Err(e) => {
                log::warn!("ignoring config {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Is this one of the two scatter-axis columns kept on its raw scale?
    pub fn is_raw(&self, column: &str) -> bool {
        column == self.raw_x_column || column == self.raw_y_column
    }

    /// Is this the identifier or group-label column?
    pub fn is_identity(&self, column: &str) -> bool {
        column == self.identifier_column || column == self.group_column
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_contract() {
        let config = DatasetConfig::default();
        assert!(config.is_raw("CO2 emissions per capita (metric tons)"));
        assert!(config.is_raw("Energy use per capita (kilograms of oil equivalent)"));
        assert!(!config.is_raw("GDP (current US$)"));
        assert!(config.is_identity("Country_name"));
        assert!(config.is_identity("Income_group"));
        assert!(config.dropped_columns.contains(&"color".to_string()));
    }

    #[test]
    fn test_json_roundtrip() {
        let config = DatasetConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: DatasetConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let back: DatasetConfig = serde_json::from_str(r#"{"url": "file.csv"}"#).unwrap();
        assert_eq!(back.url, "file.csv");
        assert_eq!(back.identifier_column, "Country_name");
    }
}
