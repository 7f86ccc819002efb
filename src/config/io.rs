//! Config file location, loading, and saving.

use std::path::{Path, PathBuf};

use log::{info, warn};

use super::Config;

/// Errors from reading or writing the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("parse error in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Base directory for per-user config on this platform.
#[cfg(target_os = "windows")]
fn platform_base() -> Option<PathBuf> {
    env_dir("APPDATA")
}

/// Base directory for per-user config on this platform.
#[cfg(not(target_os = "windows"))]
fn platform_base() -> Option<PathBuf> {
    env_dir("XDG_CONFIG_HOME").or_else(|| env_dir("HOME").map(|home| home.join(".config")))
}

/// Non-empty directory named by an environment variable.
fn env_dir(var: &str) -> Option<PathBuf> {
    std::env::var_os(var)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Return the platform-specific configuration directory for `hexfont`.
///
/// Falls back to `./hexfont` when no base directory is set.
pub fn config_dir() -> PathBuf {
    platform_base()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("hexfont")
}

/// Return the path to the config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

impl Config {
    /// Load config from the default path. Returns defaults if the file
    /// doesn't exist or can't be parsed.
    pub fn load() -> Self {
        Self::load_from(&config_path())
    }

    /// Load config from `path`, falling back to defaults.
    pub fn load_from(path: &Path) -> Self {
        match Self::try_load_from(path) {
            Ok(cfg) => {
                info!("config: loaded from {}", path.display());
                cfg
            }
            Err(ConfigError::Read { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                Self::default()
            }
            Err(e) => {
                warn!("config: {e}");
                Self::default()
            }
        }
    }

    /// Try to load config, returning the error on failure.
    ///
    /// Unlike `load_from()`, this preserves the distinction between "file
    /// missing" and "parse error" so callers can keep the previous config.
    pub fn try_load_from(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;
        toml::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_owned(),
            source,
        })
    }

    /// Save config to `path`. Creates the parent directory if needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).map_err(|source| ConfigError::Write {
                path: dir.to_owned(),
                source,
            })?;
        }
        let data = toml::to_string_pretty(self)?;
        std::fs::write(path, data).map_err(|source| ConfigError::Write {
            path: path.to_owned(),
            source,
        })?;
        info!("config: saved to {}", path.display());
        Ok(())
    }
}
