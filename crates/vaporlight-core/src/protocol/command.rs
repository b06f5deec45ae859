//! Command encoder for the Vaporlight wire protocol.
//!
//! Wire format (one message per command, no framing beyond the opcode):
//! ```text
//! Authenticate  [0x02][token:16]                                  17 bytes
//! SetPixel8     [0x01][index:2][r:1][g:1][b:1][a:1]                7 bytes
//! SetPixel16    [0x03][index:2][r:2][g:2][b:2][a:2]               11 bytes
//! Strobe        [0xFF]                                             1 byte
//! ```
//! All multi-byte integers are big-endian.  Encoding is total: every value
//! of every input type has exactly one encoding, so nothing here can fail.

use crate::domain::color::{Color, Rgba16, Rgba8, WireColor};
use crate::domain::led::LedIndex;
use crate::protocol::opcode::Opcode;
use crate::protocol::token::Token;

/// One protocol message, ready to encode.
///
/// Commands are built, encoded, written, and dropped.  An `Authenticate`
/// command prints as `Authenticate(Token(<redacted>))`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Authenticate(Token),
    SetPixel8 { index: LedIndex, color: Rgba8 },
    SetPixel16 { index: LedIndex, color: Rgba16 },
    Strobe,
}

impl Command {
    /// Builds the pixel command matching the colour's precision.
    pub fn set_pixel(index: impl Into<LedIndex>, color: Color) -> Self {
        let index = index.into();
        match color.to_wire() {
            WireColor::Eight(color) => Command::SetPixel8 { index, color },
            WireColor::Sixteen(color) => Command::SetPixel16 { index, color },
        }
    }

    pub const fn opcode(&self) -> Opcode {
        match self {
            Command::Authenticate(_) => Opcode::Authenticate,
            Command::SetPixel8 { .. } => Opcode::SetPixel8,
            Command::SetPixel16 { .. } => Opcode::SetPixel16,
            Command::Strobe => Opcode::Strobe,
        }
    }

    /// Number of bytes [`Command::encode`] produces.
    pub const fn encoded_len(&self) -> usize {
        self.opcode().command_len()
    }

    /// Encodes the command into a fresh byte vector.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vaporlight_core::{Command, LedIndex, Rgba8};
    ///
    /// let cmd = Command::SetPixel8 { index: LedIndex::new(3), color: Rgba8::rgb(10, 20, 30) };
    /// assert_eq!(cmd.encode(), vec![0x01, 0x00, 0x03, 0x0A, 0x14, 0x1E, 0xFF]);
    /// ```
    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.encoded_len());
        self.encode_into(&mut buf);
        buf
    }

    /// Appends the encoded command to `buf`.
    pub fn encode_into(&self, buf: &mut Vec<u8>) {
        buf.push(self.opcode().into());
        match self {
            Command::Authenticate(token) => buf.extend_from_slice(token.as_bytes()),
            Command::SetPixel8 { index, color } => {
                buf.extend_from_slice(&index.to_be_bytes());
                buf.extend_from_slice(&color.to_array());
            }
            Command::SetPixel16 { index, color } => {
                buf.extend_from_slice(&index.to_be_bytes());
                for channel in color.to_array() {
                    buf.extend_from_slice(&channel.to_be_bytes());
                }
            }
            Command::Strobe => {} // opcode only
        }
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Encodes an Authenticate command: `0x02` followed by the 16 token bytes.
pub fn encode_authenticate(token: &Token) -> Vec<u8> {
    Command::Authenticate(*token).encode()
}

/// Encodes an 8-bit SetPixel command.
///
/// Only the low 16 bits of `index` are used.
pub fn encode_set_pixel8(index: impl Into<LedIndex>, rgba: impl Into<Rgba8>) -> Vec<u8> {
    Command::SetPixel8 {
        index: index.into(),
        color: rgba.into(),
    }
    .encode()
}

/// Encodes a 16-bit SetPixel command.
///
/// Only the low 16 bits of `index` are used.
pub fn encode_set_pixel16(index: impl Into<LedIndex>, rgba: impl Into<Rgba16>) -> Vec<u8> {
    Command::SetPixel16 {
        index: index.into(),
        color: rgba.into(),
    }
    .encode()
}

/// Encodes a Strobe command: the single byte `0xFF`.
pub fn encode_strobe() -> Vec<u8> {
    Command::Strobe.encode()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::token::TOKEN_LEN;

    // ── Authenticate ──────────────────────────────────────────────────────────

    #[test]
    fn test_authenticate_is_opcode_then_token() {
        // Arrange
        let token = Token::from_str_lossy("sixteen letters.");

        // Act
        let bytes = encode_authenticate(&token);

        // Assert
        assert_eq!(bytes.len(), 17);
        assert_eq!(bytes[0], 0x02);
        assert_eq!(&bytes[1..], b"sixteen letters.");
    }

    #[test]
    fn test_authenticate_with_padded_token_carries_zero_bytes() {
        let bytes = encode_authenticate(&Token::from_str_lossy("abc"));
        assert_eq!(bytes.len(), 1 + TOKEN_LEN);
        assert_eq!(&bytes[1..4], b"abc");
        assert!(bytes[4..].iter().all(|&b| b == 0));
    }

    // ── SetPixel8 ─────────────────────────────────────────────────────────────

    #[test]
    fn test_set_pixel8_layout() {
        let bytes = encode_set_pixel8(0x1234u16, [0xAAu8, 0xBB, 0xCC, 0xDD]);
        assert_eq!(bytes, vec![0x01, 0x12, 0x34, 0xAA, 0xBB, 0xCC, 0xDD]);
    }

    #[test]
    fn test_set_pixel8_rgb_shorthand_is_opaque() {
        let bytes = encode_set_pixel8(3u16, [10u8, 20, 30]);
        assert_eq!(bytes, vec![0x01, 0x00, 0x03, 0x0A, 0x14, 0x1E, 0xFF]);
    }

    #[test]
    fn test_set_pixel8_masks_wide_index() {
        let bytes = encode_set_pixel8(0x0001_0203u32, Rgba8::BLACK);
        assert_eq!(&bytes[1..3], &[0x02, 0x03]);
    }

    #[test]
    fn test_set_pixel8_extreme_indices() {
        assert_eq!(&encode_set_pixel8(0u16, Rgba8::BLACK)[1..3], &[0x00, 0x00]);
        assert_eq!(&encode_set_pixel8(u16::MAX, Rgba8::BLACK)[1..3], &[0xFF, 0xFF]);
    }

    // ── SetPixel16 ────────────────────────────────────────────────────────────

    #[test]
    fn test_set_pixel16_layout() {
        let bytes = encode_set_pixel16(0x0102u16, [0x1122u16, 0x3344, 0x5566, 0x7788]);
        assert_eq!(
            bytes,
            vec![0x03, 0x01, 0x02, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88]
        );
    }

    #[test]
    fn test_set_pixel16_rgb_shorthand_is_opaque() {
        let bytes = encode_set_pixel16(0u16, [0u16, 0, 0]);
        assert_eq!(&bytes[9..], &[0xFF, 0xFF]);
    }

    // ── Strobe ────────────────────────────────────────────────────────────────

    #[test]
    fn test_strobe_is_single_ff_byte() {
        assert_eq!(encode_strobe(), vec![0xFF]);
    }

    // ── Command helpers ───────────────────────────────────────────────────────

    #[test]
    fn test_encoded_len_matches_encode_output() {
        let commands = [
            Command::Authenticate(Token::from_str_lossy("t")),
            Command::set_pixel(1u16, Color::Rgb8 { r: 1, g: 2, b: 3 }),
            Command::set_pixel(1u16, Color::Rgb16 { r: 1, g: 2, b: 3 }),
            Command::Strobe,
        ];
        for cmd in commands {
            assert_eq!(cmd.encode().len(), cmd.encoded_len(), "{:?}", cmd.opcode());
        }
    }

    #[test]
    fn test_set_pixel_picks_width_from_color() {
        assert_eq!(
            Command::set_pixel(7u16, Color::Rgba16 { r: 1, g: 2, b: 3, a: 4 }).opcode(),
            Opcode::SetPixel16
        );
        assert_eq!(
            Command::set_pixel(7u16, Color::Rgba8 { r: 1, g: 2, b: 3, a: 4 }).opcode(),
            Opcode::SetPixel8
        );
    }

    #[test]
    fn test_encode_into_appends_without_clearing() {
        let mut buf = vec![0xEE];
        Command::Strobe.encode_into(&mut buf);
        Command::Strobe.encode_into(&mut buf);
        assert_eq!(buf, vec![0xEE, 0xFF, 0xFF]);
    }
}
