use std::path::Path;

use crate::ai::Difficulty;
use crate::error::ConfigError;

/// Engine configuration, loadable from TOML.
///
/// `rng_seed` pins the random components of the Easy and Medium policies;
/// leave it unset for OS entropy.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub difficulty: Difficulty,
    pub rng_seed: Option<u64>,
}

impl EngineConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: EngineConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!(
                "Warning: config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.difficulty, Difficulty::Easy);
        assert_eq!(config.rng_seed, None);
    }

    #[test]
    fn test_parse_full_config() {
        let config: EngineConfig =
            toml::from_str("difficulty = \"hard\"\nrng_seed = 42").unwrap();
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.rng_seed, Some(42));
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let config: EngineConfig = toml::from_str("difficulty = \"medium\"").unwrap();
        assert_eq!(config.difficulty, Difficulty::Medium);
        assert_eq!(config.rng_seed, None);
    }

    #[test]
    fn test_invalid_difficulty_rejected() {
        assert!(toml::from_str::<EngineConfig>("difficulty = \"brutal\"").is_err());
    }

    #[test]
    fn test_load_or_default_on_missing_file() {
        let path = PathBuf::from("definitely-not-a-real-config.toml");
        let config = EngineConfig::load_or_default(&path).unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_load_round_trip() {
        let path = std::env::temp_dir().join(format!(
            "tictactoe-engine-config-{}.toml",
            std::process::id()
        ));
        let config = EngineConfig {
            difficulty: Difficulty::Medium,
            rng_seed: Some(7),
        };
        std::fs::write(&path, toml::to_string(&config).unwrap()).unwrap();
        let loaded = EngineConfig::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded, config);
    }
}
