//! Configuration management

use crate::domain::{ImageRef, Mood};
use crate::error::{JournalError, Result};
use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming a config file
pub const CONFIG_ENV: &str = "GROWTH_JOURNAL_CONFIG";

/// Longest challenge window accepted, about ten years
pub const MAX_CHALLENGE_WINDOW_DAYS: i64 = 3650;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Mood given to moments submitted without one
    pub default_mood: u8,
    /// Days until a challenge is due
    pub challenge_window_days: i64,
    pub moment_placeholder_image: String,
    pub value_placeholder_image: String,
    /// Seed catalog replacing the built-in one, relative to the config file
    pub catalog: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_mood: 3,
            challenge_window_days: 7,
            moment_placeholder_image: "/placeholder.svg?height=200&width=200".to_string(),
            value_placeholder_image: "/placeholder.svg?height=400&width=600".to_string(),
            catalog: None,
        }
    }
}

impl Config {
    /// Load config from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                JournalError::ConfigNotFound(path.to_path_buf())
            } else {
                JournalError::Io(e)
            }
        })?;

        let mut config: Config = toml::from_str(&contents)
            .map_err(|e| JournalError::Config(format!("Failed to parse {}: {}", path.display(), e)))?;

        if let Some(catalog) = config.catalog.take() {
            let resolved = match path.parent() {
                Some(dir) if catalog.is_relative() => dir.join(catalog),
                _ => catalog,
            };
            config.catalog = Some(resolved);
        }

        config.validate()?;
        Ok(config)
    }

    /// Resolve the config: explicit path first, then GROWTH_JOURNAL_CONFIG,
    /// then built-in defaults
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }

        if let Ok(path) = std::env::var(CONFIG_ENV) {
            if !path.trim().is_empty() {
                return Self::load_from_file(Path::new(&path));
            }
        }

        Ok(Config::default())
    }

    pub fn validate(&self) -> Result<()> {
        Mood::new(self.default_mood).map_err(|_| {
            JournalError::Config(format!(
                "default_mood must be between 1 and 5, got {}",
                self.default_mood
            ))
        })?;

        if !(1..=MAX_CHALLENGE_WINDOW_DAYS).contains(&self.challenge_window_days) {
            return Err(JournalError::Config(format!(
                "challenge_window_days must be between 1 and {}, got {}",
                MAX_CHALLENGE_WINDOW_DAYS, self.challenge_window_days
            )));
        }

        Ok(())
    }

    pub fn default_mood(&self) -> Mood {
        Mood::new(self.default_mood).unwrap_or_default()
    }

    pub fn challenge_window(&self) -> Duration {
        Duration::days(self.challenge_window_days)
    }

    pub fn moment_placeholder(&self) -> ImageRef {
        ImageRef::new(self.moment_placeholder_image.clone())
    }

    pub fn value_placeholder(&self) -> ImageRef {
        ImageRef::new(self.value_placeholder_image.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.default_mood().score(), 3);
        assert_eq!(config.challenge_window(), Duration::days(7));
        assert!(config.catalog.is_none());
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("journal.toml");
        fs::write(&path, "default_mood = 5\n").unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.default_mood, 5);
        assert_eq!(config.challenge_window_days, 7);
    }

    #[test]
    fn test_catalog_resolved_relative_to_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("journal.toml");
        fs::write(&path, "catalog = \"seed.toml\"\n").unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.catalog, Some(temp.path().join("seed.toml")));
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = Config::load_from_file(&temp.path().join("missing.toml"));
        match result.unwrap_err() {
            JournalError::ConfigNotFound(_) => {}
            other => panic!("Expected ConfigNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_out_of_range_mood_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("journal.toml");
        fs::write(&path, "default_mood = 9\n").unwrap();

        match Config::load_from_file(&path).unwrap_err() {
            JournalError::Config(msg) => assert!(msg.contains("default_mood")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_challenge_window_bounds() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("journal.toml");

        for days in ["0", "3651", "1000000000", "9223372036854775807"] {
            fs::write(&path, format!("challenge_window_days = {}\n", days)).unwrap();
            match Config::load_from_file(&path).unwrap_err() {
                JournalError::Config(msg) => assert!(msg.contains("challenge_window_days")),
                other => panic!("Expected Config error for {}, got {:?}", days, other),
            }
        }

        let widest = Config {
            challenge_window_days: MAX_CHALLENGE_WINDOW_DAYS,
            ..Config::default()
        };
        assert!(widest.validate().is_ok());
        assert_eq!(widest.challenge_window(), Duration::days(3650));
    }

    #[test]
    fn test_invalid_toml_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("journal.toml");
        fs::write(&path, "default_mood = [").unwrap();

        assert!(matches!(
            Config::load_from_file(&path),
            Err(JournalError::Config(_))
        ));
    }

    #[test]
    fn test_discover_prefers_explicit_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("journal.toml");
        fs::write(&path, "challenge_window_days = 14\n").unwrap();

        let config = Config::discover(Some(&path)).unwrap();
        assert_eq!(config.challenge_window(), Duration::days(14));
    }
}
