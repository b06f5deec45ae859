//! Opcode table for the Vaporlight wire protocol.
//!
//! There is no length prefix on the wire.  The first byte of every command
//! selects its variant, and the variant fixes how many payload bytes follow.
//! A receiver reads one byte, looks up [`Opcode::payload_len`], then reads
//! exactly that many more bytes before the next opcode.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::protocol::token::TOKEN_LEN;

/// Errors raised when interpreting raw protocol bytes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProtocolError {
    /// The leading byte is not an opcode the protocol defines.
    #[error("unknown opcode: 0x{0:02X}")]
    UnknownOpcode(u8),
}

/// All opcodes defined by the protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Opcode {
    /// Set one LED from four 8-bit channels.
    SetPixel8 = 0x01,
    /// Present the 16-byte session token.
    Authenticate = 0x02,
    /// Set one LED from four 16-bit channels.
    SetPixel16 = 0x03,
    /// Commit every staged pixel update at once.
    Strobe = 0xFF,
}

impl Opcode {
    /// Number of bytes that follow the opcode byte on the wire.
    pub const fn payload_len(self) -> usize {
        match self {
            Opcode::SetPixel8 => 2 + 4,
            Opcode::Authenticate => TOKEN_LEN,
            Opcode::SetPixel16 => 2 + 4 * 2,
            Opcode::Strobe => 0,
        }
    }

    /// Total command length including the opcode byte.
    pub const fn command_len(self) -> usize {
        1 + self.payload_len()
    }
}

impl TryFrom<u8> for Opcode {
    type Error = ProtocolError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x01 => Ok(Opcode::SetPixel8),
            0x02 => Ok(Opcode::Authenticate),
            0x03 => Ok(Opcode::SetPixel16),
            0xFF => Ok(Opcode::Strobe),
            other => Err(ProtocolError::UnknownOpcode(other)),
        }
    }
}

impl From<Opcode> for u8 {
    fn from(op: Opcode) -> Self {
        op as u8
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_lengths_match_wire_table() {
        assert_eq!(Opcode::Authenticate.command_len(), 17);
        assert_eq!(Opcode::SetPixel8.command_len(), 7);
        assert_eq!(Opcode::SetPixel16.command_len(), 11);
        assert_eq!(Opcode::Strobe.command_len(), 1);
    }

    #[test]
    fn test_try_from_recognises_every_opcode() {
        for op in [
            Opcode::SetPixel8,
            Opcode::Authenticate,
            Opcode::SetPixel16,
            Opcode::Strobe,
        ] {
            assert_eq!(Opcode::try_from(u8::from(op)), Ok(op));
        }
    }

    #[test]
    fn test_try_from_rejects_unknown_byte() {
        assert_eq!(Opcode::try_from(0x00u8), Err(ProtocolError::UnknownOpcode(0x00)));
        assert_eq!(Opcode::try_from(0x04u8), Err(ProtocolError::UnknownOpcode(0x04)));
    }

    #[test]
    fn test_unknown_opcode_error_message_is_hex() {
        let err = ProtocolError::UnknownOpcode(0x7E);
        assert_eq!(err.to_string(), "unknown opcode: 0x7E");
    }
}
