//! The standard client sequence: validate, connect, authenticate, animate.

use thiserror::Error;
use tracing::{info, warn};

use crate::application::animation::Animation;
use crate::domain::config::{ClientConfig, ConfigError};
use crate::infrastructure::controller::{Controller, ControllerError};

/// Errors from [`run`].
#[derive(Debug, Error)]
pub enum RunError {
    /// The configuration was rejected; no connection was attempted.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// Connecting, authenticating or animating failed.
    #[error(transparent)]
    Controller(#[from] ControllerError),
}

/// Connects to the configured server and hands the session to `animation`.
///
/// The configuration is validated before any socket is opened.  The
/// connection is closed when the animation returns, whether it succeeded or
/// not.
///
/// # Errors
///
/// [`RunError::Config`] for a bad speed or missing token,
/// [`RunError::Controller`] for anything that goes wrong on the connection.
pub fn run<A: Animation>(config: &ClientConfig, animation: &mut A) -> Result<(), RunError> {
    let config = config.validate()?;
    info!(
        host = %config.host,
        port = config.port,
        leds = config.leds,
        speed = config.speed.get(),
        "configuration accepted"
    );

    let mut controller = Controller::connect_with(&config)?;
    let result = controller
        .authenticate()
        .and_then(|()| animation.animate(&mut controller, config.leds, config.speed));

    if let Err(e) = controller.close() {
        warn!("error while closing connection: {e}");
    }
    result.map_err(RunError::from)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
