use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::data::loader::DEFAULT_DATA_FILE;
use crate::data::synthetic::SyntheticConfig;
use crate::error::ConfigError;

/// Optional JSON config file looked up in the working directory.
pub const CONFIG_FILE: &str = "crop_dashboard.json";

pub const ENV_DATA_PATH: &str = "CROP_DASHBOARD_DATA";
pub const ENV_RECORDS: &str = "CROP_DASHBOARD_RECORDS";
pub const ENV_SEED: &str = "CROP_DASHBOARD_SEED";

// ---------------------------------------------------------------------------
// Dashboard configuration
// ---------------------------------------------------------------------------

/// Startup settings. Everything has a default, so an absent config file and
/// an empty environment give the stock behaviour.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// CSV dataset to load.
    pub data_path: PathBuf,
    /// Fallback generator settings.
    pub synthetic: SyntheticConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_FILE),
            synthetic: SyntheticConfig::default(),
        }
    }
}

impl DashboardConfig {
    /// Read [`CONFIG_FILE`] if present, then apply environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file(Path::new(CONFIG_FILE))?.unwrap_or_default();
        config.apply_env(|var| std::env::var(var).ok())?;
        Ok(config)
    }

    /// Parse a JSON config file; `Ok(None)` if it does not exist.
    pub fn from_file(path: &Path) -> Result<Option<Self>, ConfigError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        serde_json::from_str(&text)
            .map(Some)
            .map_err(|source| ConfigError::Json {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Apply overrides from a variable lookup (normally `std::env::var`).
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<(), ConfigError> {
        if let Some(path) = lookup(ENV_DATA_PATH) {
            self.data_path = PathBuf::from(path);
        }
        if let Some(value) = lookup(ENV_RECORDS) {
            self.synthetic.records = parse_env(ENV_RECORDS, value)?;
        }
        if let Some(value) = lookup(ENV_SEED) {
            self.synthetic.seed = Some(parse_env(ENV_SEED, value)?);
        }
        Ok(())
    }
}

fn parse_env<T>(var: &'static str, value: String) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::InvalidEnv {
        var,
        reason: e.to_string(),
        value,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k: &str| map.get(k).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.data_path, PathBuf::from("crop_production.csv"));
        assert_eq!(config.synthetic.records, 1000);
        assert_eq!(config.synthetic.seed, None);
    }

    #[test]
    fn test_env_overrides() {
        let mut config = DashboardConfig::default();
        config
            .apply_env(lookup(&[
                (ENV_DATA_PATH, "/data/crops.csv"),
                (ENV_RECORDS, "250"),
                (ENV_SEED, " 42 "),
            ]))
            .unwrap();

        assert_eq!(config.data_path, PathBuf::from("/data/crops.csv"));
        assert_eq!(config.synthetic.records, 250);
        assert_eq!(config.synthetic.seed, Some(42));
    }

    #[test]
    fn test_invalid_env_value() {
        let mut config = DashboardConfig::default();
        let err = config
            .apply_env(lookup(&[(ENV_SEED, "forty-two")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv { var: ENV_SEED, .. }));
    }

    #[test]
    fn test_partial_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, r#"{ "synthetic": { "seed": 7 } }"#).unwrap();

        let config = DashboardConfig::from_file(&path).unwrap().unwrap();
        assert_eq!(config.data_path, PathBuf::from(DEFAULT_DATA_FILE));
        assert_eq!(config.synthetic.records, 1000);
        assert_eq!(config.synthetic.seed, Some(7));
    }

    #[test]
    fn test_missing_and_broken_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        assert!(DashboardConfig::from_file(&path).unwrap().is_none());

        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            DashboardConfig::from_file(&path),
            Err(ConfigError::Json { .. })
        ));
    }
}
