//! Application layer: what to do with a connected controller.

/// The animation contract and the reference rainbow animation.
pub mod animation;

/// Validate, connect, authenticate, animate.
pub mod run;
