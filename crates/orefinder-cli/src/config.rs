//! CLI configuration.
//!
//! Wraps the finder parameters with output defaults. Configuration can be
//! loaded from and saved to a TOML file.

use orefinder_common::VersionTag;
use orefinder_worldgen::FinderConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Configuration file name.
const CONFIG_FILE: &str = "orefinder.toml";

/// CLI configuration parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Indent JSON output
    pub pretty: bool,
    /// Version used when `--version` is not given
    pub default_version: VersionTag,
    /// Finder parameters
    pub finder: FinderConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            pretty: false,
            default_version: VersionTag::LATEST,
            finder: FinderConfig::default(),
        }
    }
}

impl CliConfig {
    /// Load configuration from the default file location.
    /// Returns default config if file doesn't exist.
    pub fn load() -> Self {
        Self::load_from(Self::config_path())
    }

    /// Load configuration from a specific path.
    /// Returns default config if file doesn't exist or is invalid.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();

        if !path.exists() {
            info!("Config file not found, using defaults");
            return Self::default();
        }

        let mut config: Self = match fs::File::open(path) {
            Ok(mut file) => {
                let mut contents = String::new();
                if let Err(e) = file.read_to_string(&mut contents) {
                    warn!("Failed to read config file: {e}");
                    return Self::default();
                }

                match toml::from_str(&contents) {
                    Ok(config) => {
                        info!("Loaded config from {}", path.display());
                        config
                    },
                    Err(e) => {
                        warn!("Failed to parse config file: {e}");
                        return Self::default();
                    },
                }
            },
            Err(e) => {
                warn!("Failed to open config file: {e}");
                return Self::default();
            },
        };
        config.validate();
        config
    }

    /// Save configuration to a specific path.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut file = fs::File::create(path)?;
        file.write_all(self.to_toml()?.as_bytes())?;

        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Pretty TOML form of the configuration.
    pub fn to_toml(&self) -> io::Result<String> {
        toml::to_string_pretty(self).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Default configuration file path: the platform config directory, or
    /// the current directory when there is none.
    pub fn config_path() -> PathBuf {
        dirs::config_dir().map_or_else(
            || PathBuf::from(CONFIG_FILE),
            |dir| dir.join("orefinder").join(CONFIG_FILE),
        )
    }

    /// Validate and clamp configuration values to sensible ranges.
    pub fn validate(&mut self) {
        self.finder.validate();
    }
}
