//! TOML config file loading for the client.
//!
//! The file is optional.  A missing file yields [`ClientConfig::default`], so
//! a first run with everything on the command line needs no setup.  Fields
//! absent from the file take their serde defaults.
//!
//! ```toml
//! host = "ledwall.local"
//! token = "my sixteen bytes"
//! leds = 150
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::domain::config::ClientConfig;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be serialized to TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Loads a [`ClientConfig`] from `path`, returning the defaults if the file
/// does not exist.
///
/// # Errors
///
/// Returns [`ConfigFileError::Io`] for file-system errors other than "not
/// found", and [`ConfigFileError::Parse`] if the TOML is malformed.
pub fn load_config(path: &Path) -> Result<ClientConfig, ConfigFileError> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            let cfg: ClientConfig = toml::from_str(&content)?;
            debug!("loaded config from {}", path.display());
            Ok(cfg)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("no config at {}; using defaults", path.display());
            Ok(ClientConfig::default())
        }
        Err(source) => Err(ConfigFileError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Writes `config` to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Returns [`ConfigFileError::Io`] for file-system failures or
/// [`ConfigFileError::Serialize`] if serialization fails.
pub fn save_config(path: &Path, config: &ClientConfig) -> Result<(), ConfigFileError> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|source| ConfigFileError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content).map_err(|source| ConfigFileError::Io {
        path: path.to_path_buf(),
        source,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&dir.path().join("absent.toml")).expect("load");
        assert_eq!(cfg, ClientConfig::default());
    }

    #[test]
    fn test_load_reads_fields_from_file() {
        // Arrange
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("vaporlight.toml");
        std::fs::write(&path, "host = \"10.0.0.7\"\nspeed = 9\ntoken = \"abc\"\n").unwrap();

        // Act
        let cfg = load_config(&path).expect("load");

        // Assert
        assert_eq!(cfg.host, "10.0.0.7");
        assert_eq!(cfg.speed, 9);
        assert_eq!(cfg.token.as_deref(), Some("abc"));
        assert_eq!(cfg.port, 7534);
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "port = \"not a number\"").unwrap();

        assert!(matches!(load_config(&path), Err(ConfigFileError::Parse(_))));
    }

    #[test]
    fn test_directory_path_is_io_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(matches!(load_config(dir.path()), Err(ConfigFileError::Io { .. })));
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("vaporlight.toml");
        let cfg = ClientConfig {
            host: "ledwall.local".to_string(),
            token: Some("secret".to_string()),
            leds: 300,
            ..ClientConfig::default()
        };

        save_config(&path, &cfg).expect("save");

        assert_eq!(load_config(&path).expect("load"), cfg);
    }
}
