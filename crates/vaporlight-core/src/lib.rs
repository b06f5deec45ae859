//! # vaporlight-core
//!
//! Shared library for the Vaporlight LED controller containing the wire
//! encoder, the authentication token, and the colour value types.
//!
//! This crate is used by every Vaporlight client.  It has zero dependencies
//! on OS APIs or network sockets: turning a logical operation into bytes is
//! a pure function, and writing those bytes somewhere is the caller's job.
//!
//! # Architecture overview (for beginners)
//!
//! A Vaporlight server drives an array of individually addressable LEDs.
//! Clients open a TCP stream to it and send a sequence of tiny binary
//! commands.  Nothing is ever sent back.
//!
//! - **`protocol`** – How bytes travel over the network.  Every command is a
//!   single opcode byte followed by a fixed-size payload, so a receiver knows
//!   how many bytes to read from the opcode alone.
//!
//! - **`domain`** – Plain value types with no I/O: 8-bit and 16-bit RGBA
//!   colours and the 16-bit LED address.
//!
//! ```text
//!  authenticate   02 <16 token bytes>
//!  set pixel 8    01 <idx hi> <idx lo> R G B A
//!  set pixel 16   03 <idx hi> <idx lo> RR GG BB AA   (each channel 2 bytes)
//!  strobe         FF
//! ```

pub mod domain;
pub mod protocol;

// Re-export the most-used types at the crate root so callers can write
// `vaporlight_core::Token` instead of `vaporlight_core::protocol::token::Token`.
pub use domain::color::{Color, Rgba16, Rgba8, WireColor};
pub use domain::led::LedIndex;
pub use protocol::command::{
    encode_authenticate, encode_set_pixel16, encode_set_pixel8, encode_strobe, Command,
};
pub use protocol::opcode::{Opcode, ProtocolError};
pub use protocol::token::{Token, TOKEN_LEN};
