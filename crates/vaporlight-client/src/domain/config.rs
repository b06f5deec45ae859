//! Client configuration types.
//!
//! [`ClientConfig`] is the single source of truth for all run-time settings.
//! It is assembled by the binary from built-in defaults, an optional TOML
//! file, and the command line, then handed to [`crate::run`] or
//! [`crate::Controller::connect_with`].  Nothing in the library reads
//! process-wide state such as environment variables.
//!
//! # Raw versus validated
//!
//! `ClientConfig` holds what the user typed, so it can be serialized back to
//! TOML unchanged.  [`ClientConfig::validate`] turns it into a
//! [`ValidatedConfig`] with a typed [`Token`] and [`Speed`].  Validation runs
//! before any connection attempt, so a bad speed never reaches the network.
//!
//! # Token
//!
//! There is deliberately no default token.  The old client tools shipped
//! with the public placeholder [`Token::PLACEHOLDER`]; accepting it silently
//! would authenticate every unconfigured client with a known secret.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use vaporlight_core::Token;

/// Errors found while validating a [`ClientConfig`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Animation speed outside `1..=10`.
    #[error("animation speed {0} is not in range {min}..={max}", min = Speed::MIN, max = Speed::MAX)]
    SpeedOutOfRange(u8),

    /// No token was supplied, or it was empty.
    #[error("no authentication token configured (use --token or VAPORLIGHT_TOKEN)")]
    MissingToken,
}

// ── Speed ─────────────────────────────────────────────────────────────────────

/// Animation speed in `1..=10`; higher is faster.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use vaporlight_client::Speed;
///
/// let speed = Speed::new(5).unwrap();
/// assert_eq!(speed.frame_interval(), Duration::from_millis(288));
/// assert!(Speed::new(11).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Speed(u8);

impl Speed {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    /// # Errors
    ///
    /// Returns [`ConfigError::SpeedOutOfRange`] for 0 or anything above 10.
    pub fn new(value: u8) -> Result<Self, ConfigError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ConfigError::SpeedOutOfRange(value))
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// Pause between animation frames: `8 × (11 − speed)²` milliseconds.
    ///
    /// Speed 1 gives 800 ms, speed 10 gives 8 ms.
    pub fn frame_interval(self) -> Duration {
        let steps = u64::from(11 - self.0);
        Duration::from_millis(8 * steps * steps)
    }
}

impl TryFrom<u8> for Speed {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Speed::new(value)
    }
}

impl Default for Speed {
    fn default() -> Self {
        Self(default_speed())
    }
}

// ── Config schema ─────────────────────────────────────────────────────────────

/// User-facing client settings, as read from TOML or the command line.
///
/// ```toml
/// host = "ledwall.local"
/// port = 7534
/// token = "my sixteen bytes"
/// leds = 150
/// speed = 7
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientConfig {
    /// Hostname or IP address of the Vaporlight server.
    #[serde(default = "default_host")]
    pub host: String,
    /// TCP port of the Vaporlight server.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Authentication token; at most 16 bytes are used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Number of LEDs the animation drives.
    #[serde(default = "default_leds")]
    pub leds: u16,
    /// Animation speed, `1..=10`.
    #[serde(default = "default_speed")]
    pub speed: u8,
}

/// A [`ClientConfig`] that passed validation.
///
/// `Debug` is safe to log: [`Token`] redacts itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedConfig {
    pub host: String,
    pub port: u16,
    pub token: Token,
    pub leds: u16,
    pub speed: Speed,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_host() -> String {
    "localhost".to_string()
}
fn default_port() -> u16 {
    7534
}
fn default_leds() -> u16 {
    5
}
fn default_speed() -> u8 {
    5
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            token: None,
            leds: default_leds(),
            speed: default_speed(),
        }
    }
}

impl ClientConfig {
    /// Checks every field and builds the typed configuration.
    ///
    /// The speed is checked first so that a bad speed is reported even when
    /// the token is also missing.
    ///
    /// # Errors
    ///
    /// [`ConfigError::SpeedOutOfRange`] or [`ConfigError::MissingToken`].
    pub fn validate(&self) -> Result<ValidatedConfig, ConfigError> {
        let speed = Speed::new(self.speed)?;
        let token = match self.token.as_deref() {
            Some(t) if !t.is_empty() => Token::from_str_lossy(t),
            _ => return Err(ConfigError::MissingToken),
        };

        Ok(ValidatedConfig {
            host: self.host.clone(),
            port: self.port,
            token,
            leds: self.leds,
            speed,
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
