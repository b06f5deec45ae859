//! vaporlight-client library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! # What does vaporlight-client do? (for beginners)
//!
//! A Vaporlight server owns a strip or matrix of LEDs and listens on a TCP
//! port (7534 by default).  This crate is the *client* side:
//!
//! 1. Connects to the server over TCP.
//! 2. Presents a 16-byte token with an Authenticate command.
//! 3. Stages colour updates for individual LEDs (`SetPixel8` / `SetPixel16`).
//! 4. Sends a Strobe so every staged update becomes visible at the same time.
//!
//! The protocol is fire-and-forget: the server never answers, and a
//! successful write only means the local TCP stack accepted the bytes.
//!
//! ```text
//! main()
//!  └─ ClientConfig  (defaults ← config file ← CLI/env)
//!  └─ run()
//!       ├─ validate      -- speed and token checked before any socket is opened
//!       ├─ Controller::connect_with
//!       ├─ Controller::authenticate
//!       └─ Animation::animate (Rainbow)
//! ```

/// Application layer: the animation contract and the run sequence.
pub mod application;

/// Domain layer: run-time configuration and animation speed.
pub mod domain;

/// Infrastructure layer: the TCP controller and the config file loader.
pub mod infrastructure;

pub use application::animation::{wheel, Animation, Rainbow};
pub use application::run::{run, RunError};
pub use domain::config::{ClientConfig, ConfigError, Speed, ValidatedConfig};
pub use infrastructure::controller::{Controller, ControllerError, SessionState};
