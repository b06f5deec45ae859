//! Domain value types for Vaporlight.
//!
//! Nothing in here performs I/O.  The types describe *what* a client wants a
//! LED to look like; [`crate::protocol`] decides how that becomes bytes.

/// 8-bit and 16-bit RGBA colours.
pub mod color;

/// The 16-bit LED address.
pub mod led;
