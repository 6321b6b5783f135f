use std::path::PathBuf;

use anyhow::{bail, Result};
use serde::Deserialize;

/// Application configuration loaded from a TOML file or defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Path whose filesystem is reported as disk usage.
    #[serde(default = "default_disk_mount")]
    pub disk_mount: PathBuf,
}

fn default_disk_mount() -> PathBuf {
    PathBuf::from("/")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            disk_mount: default_disk_mount(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::de::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make every request fail.
    pub fn validate(&self) -> Result<()> {
        // Mount points are absolute; a relative path never matches one.
        if !self.disk_mount.is_absolute() {
            bail!(
                "disk_mount must be an absolute path, got {}",
                self.disk_mount.display()
            );
        }
        Ok(())
    }
}
