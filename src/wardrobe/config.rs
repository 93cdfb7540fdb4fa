use crate::error::{Result, WardrobeError};
use crate::pagination::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for wardrobe, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WardrobeConfig {
    /// Outfits shown per page when generating
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for WardrobeConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl WardrobeConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(WardrobeError::Io)?;
        let config: WardrobeConfig =
            serde_json::from_str(&content).map_err(WardrobeError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(WardrobeError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(WardrobeError::Serialization)?;
        fs::write(config_path, content).map_err(WardrobeError::Io)?;
        Ok(())
    }

    /// Page size, never below one.
    pub fn page_size(&self) -> usize {
        self.page_size.max(1)
    }

    /// Current value of a config key, formatted for display.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "page-size" => Some(self.page_size().to_string()),
            _ => None,
        }
    }

    /// Sets a config key from its string form.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "page-size" => match value.trim().parse::<usize>() {
                Ok(size) if size > 0 => {
                    self.page_size = size;
                    Ok(())
                }
                _ => Err(format!(
                    "page-size must be a positive integer, got '{}'",
                    value
                )),
            },
            other => Err(format!("Unknown config key: {}", other)),
        }
    }

    pub fn keys() -> &'static [&'static str] {
        &["page-size"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = WardrobeConfig::default();
        assert_eq!(config.page_size, 5);
    }

    #[test]
    fn test_set_page_size() {
        let mut config = WardrobeConfig::default();
        config.set("page-size", " 12 ").unwrap();
        assert_eq!(config.page_size(), 12);
        assert!(config.set("page-size", "0").is_err());
        assert!(config.set("page-size", "lots").is_err());
        assert_eq!(config.get("page-size").as_deref(), Some("12"));
    }

    #[test]
    fn test_unknown_key() {
        let mut config = WardrobeConfig::default();
        assert!(config.get("colour").is_none());
        assert!(config.set("colour", "red").is_err());
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        let config = WardrobeConfig::load(temp.path().join("nothing-here")).unwrap();
        assert_eq!(config, WardrobeConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();

        let mut config = WardrobeConfig::default();
        config.set("page-size", "8").unwrap();
        config.save(temp.path()).unwrap();

        let loaded = WardrobeConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.page_size, 8);
    }

    #[test]
    fn test_missing_key_uses_default() {
        let parsed: WardrobeConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.page_size, 5);
    }
}
