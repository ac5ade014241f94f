use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

/// Loads a YAML config from `path`, falling back to `T::default()` when the
/// file does not exist.
pub fn load_yaml_config<T>(path: &Path) -> Result<T, String>
where
    T: Clone + Default + DeserializeOwned + Serialize + Validate,
{
    if !path.exists() {
        return Ok(T::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;
    let config: T = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("Failed to parse config {}: {}", path.display(), e))?;

    config
        .validate()
        .map_err(|e| format!("Config validation error: {}", e))?;

    Ok(config)
}

pub fn save_yaml_config<T>(path: &Path, config: &T) -> Result<(), String>
where
    T: Serialize + Validate,
{
    config
        .validate()
        .map_err(|e| format!("Config validation error: {}", e))?;

    let content = serde_yaml_ng::to_string(config)
        .map_err(|e| format!("Failed to serialize config: {}", e))?;

    std::fs::write(path, content)
        .map_err(|e| format!("Failed to write config {}: {}", path.display(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct TestConfig {
        value: u32,
    }

    impl Default for TestConfig {
        fn default() -> Self {
            Self { value: 7 }
        }
    }

    impl Validate for TestConfig {
        fn validate(&self) -> Result<(), String> {
            if self.value == 0 {
                return Err("value must be positive".to_string());
            }
            Ok(())
        }
    }

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("tictactoe_config_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let path = temp_path("missing.yaml");
        let config: TestConfig = load_yaml_config(&path).unwrap();
        assert_eq!(config, TestConfig::default());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let path = temp_path("round_trip.yaml");
        let config = TestConfig { value: 42 };

        save_yaml_config(&path, &config).unwrap();
        let loaded: TestConfig = load_yaml_config(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let path = temp_path("invalid.yaml");
        std::fs::write(&path, "value: 0\n").unwrap();

        let result: Result<TestConfig, String> = load_yaml_config(&path);
        std::fs::remove_file(&path).unwrap();

        assert!(result.unwrap_err().contains("validation"));
    }
}
