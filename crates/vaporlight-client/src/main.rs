//! Vaporlight rainbow demo entry point.
//!
//! Connects to a Vaporlight server, authenticates, and runs a rotating
//! rainbow across the configured number of LEDs until interrupted or until
//! the connection fails.
//!
//! # Usage
//!
//! ```text
//! vaporlight-rainbow [OPTIONS] --token <TOKEN>
//!
//! Options:
//!   -c, --config <FILE>       TOML config file (optional)
//!       --host <HOST>         Server hostname or IP [default: localhost]
//!   -p, --port <PORT>         Server TCP port [default: 7534]
//!   -t, --token <TOKEN>       Authentication token (first 16 bytes used)
//!   -l, --leds <LEDS>         Number of LEDs [default: 5]
//!   -s, --speed <SPEED>       Animation speed 1..=10 [default: 5]
//!       --save-config <FILE>  Validate and write the merged configuration, then exit
//! ```
//!
//! # Precedence
//!
//! Command line and `VAPORLIGHT_*` environment variables win over the config
//! file, which wins over the built-in defaults.
//!
//! | Variable            | Default     |
//! |---------------------|-------------|
//! | `VAPORLIGHT_CONFIG` | (none)      |
//! | `VAPORLIGHT_HOST`   | `localhost` |
//! | `VAPORLIGHT_PORT`   | `7534`      |
//! | `VAPORLIGHT_TOKEN`  | (none)      |
//! | `VAPORLIGHT_LEDS`   | `5`         |
//! | `VAPORLIGHT_SPEED`  | `5`         |

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use vaporlight_client::infrastructure::config_file::{load_config, save_config};
use vaporlight_client::{run, ClientConfig, Rainbow};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Rotating rainbow demo for Vaporlight LED servers.
#[derive(Debug, Parser)]
#[command(name = "vaporlight-rainbow", version)]
struct Cli {
    /// TOML config file providing defaults for every option below.
    #[arg(short, long, env = "VAPORLIGHT_CONFIG")]
    config: Option<PathBuf>,

    /// Hostname or IP address of the Vaporlight server.
    #[arg(long, env = "VAPORLIGHT_HOST")]
    host: Option<String>,

    /// TCP port of the Vaporlight server.
    #[arg(short, long, env = "VAPORLIGHT_PORT")]
    port: Option<u16>,

    /// Authentication token.  Shorter tokens are zero-padded, longer ones
    /// truncated to 16 bytes.
    #[arg(short, long, env = "VAPORLIGHT_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Number of LEDs to animate.
    #[arg(short, long, env = "VAPORLIGHT_LEDS")]
    leds: Option<u16>,

    /// Animation speed between 1 and 10.
    #[arg(short, long, env = "VAPORLIGHT_SPEED")]
    speed: Option<u8>,

    /// Validate the merged configuration, write it to this file and exit
    /// without connecting.
    #[arg(long, value_name = "FILE")]
    save_config: Option<PathBuf>,
}

impl Cli {
    /// Builds the effective [`ClientConfig`]: defaults, then file, then flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or parsed.
    fn into_client_config(self) -> anyhow::Result<(ClientConfig, Option<PathBuf>)> {
        let mut cfg = match &self.config {
            Some(path) => load_config(path)
                .with_context(|| format!("loading config file {}", path.display()))?,
            None => ClientConfig::default(),
        };

        if let Some(host) = self.host {
            cfg.host = host;
        }
        if let Some(port) = self.port {
            cfg.port = port;
        }
        if let Some(token) = self.token {
            cfg.token = Some(token);
        }
        if let Some(leds) = self.leds {
            cfg.leds = leds;
        }
        if let Some(speed) = self.speed {
            cfg.speed = speed;
        }
        Ok((cfg, self.save_config))
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> ExitCode {
    // Structured logging; level is overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> anyhow::Result<()> {
    let (config, save_to) = Cli::parse().into_client_config()?;

    if let Some(path) = save_to {
        save_checked(&path, &config)?;
        info!("configuration written to {}", path.display());
        return Ok(());
    }

    run(&config, &mut Rainbow::new()).context("rainbow animation stopped")?;
    Ok(())
}

/// Writes `config` to `path` only if a later run would accept it.
fn save_checked(path: &Path, config: &ClientConfig) -> anyhow::Result<()> {
    config
        .validate()
        .context("refusing to save an invalid configuration")?;
    save_config(path, config).with_context(|| format!("writing config file {}", path.display()))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use vaporlight_client::ConfigError;

    fn parse(args: &[&str]) -> ClientConfig {
        let cli = Cli::try_parse_from(args).expect("valid arguments");
        cli.into_client_config().expect("merge").0
    }

    #[test]
    fn test_flags_override_defaults() {
        let cfg = parse(&["vaporlight-rainbow", "--host", "leds.local", "-p", "9000", "-t", "abc", "-s", "7"]);
        assert_eq!(cfg.host, "leds.local");
        assert_eq!(cfg.port, 9000);
        assert_eq!(cfg.token.as_deref(), Some("abc"));
        assert_eq!(cfg.speed, 7);
        assert_eq!(cfg.leds, ClientConfig::default().leds);
    }

    #[test]
    fn test_save_rejects_out_of_range_speed() {
        // Arrange
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("vaporlight.toml");
        let cfg = ClientConfig {
            token: Some("abc".to_string()),
            speed: 0,
            ..ClientConfig::default()
        };

        // Act
        let err = save_checked(&path, &cfg).unwrap_err();

        // Assert
        assert_eq!(err.downcast_ref::<ConfigError>(), Some(&ConfigError::SpeedOutOfRange(0)));
        assert!(!path.exists());
    }

    #[test]
    fn test_save_rejects_missing_token() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vaporlight.toml");

        assert!(save_checked(&path, &ClientConfig::default()).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_save_writes_valid_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vaporlight.toml");
        let cfg = ClientConfig {
            token: Some("abc".to_string()),
            speed: 3,
            ..ClientConfig::default()
        };

        save_checked(&path, &cfg).unwrap();

        let loaded = load_config(&path).unwrap();
        assert_eq!(loaded.speed, 3);
        assert_eq!(loaded.token.as_deref(), Some("abc"));
    }
}
