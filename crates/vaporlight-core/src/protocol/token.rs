//! The 16-byte session token presented by the Authenticate command.
//!
//! # Why fixed length? (for beginners)
//!
//! The Authenticate command has no length field: the server reads exactly
//! [`TOKEN_LEN`] bytes after the opcode.  A token built from a human-typed
//! string therefore has to be forced to that size.  Shorter strings are
//! padded with zero bytes; longer strings are cut after the sixteenth byte.
//!
//! # Secrecy
//!
//! The token is a shared secret.  Neither [`Debug`] nor [`Display`] prints
//! its bytes, so a token can be placed in a struct that is logged without
//! leaking it.

use std::fmt;

use tracing::debug;

/// Length of a token on the wire, in bytes.
pub const TOKEN_LEN: usize = 16;

/// An immutable 16-byte authentication credential.
///
/// # Examples
///
/// ```rust
/// use vaporlight_core::Token;
///
/// let token = Token::from_str_lossy("abc");
/// assert_eq!(&token.as_bytes()[..4], &[0x61, 0x62, 0x63, 0x00]);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token([u8; TOKEN_LEN]);

impl Token {
    /// The example token shipped with the reference client tools.
    ///
    /// It is public knowledge and must never be used as a default; it exists
    /// so documentation and tests can refer to it by name.
    pub const PLACEHOLDER: &'static str = "sixteen letters.";

    /// Wraps sixteen raw bytes verbatim.
    pub const fn from_bytes(bytes: [u8; TOKEN_LEN]) -> Self {
        Self(bytes)
    }

    /// Builds a token from the UTF-8 bytes of `s`.
    ///
    /// Strings shorter than 16 bytes are zero-padded; longer strings are
    /// truncated to the first 16 bytes.  Truncation is byte-wise and may cut
    /// a multi-byte character in half, which is harmless because the token is
    /// never decoded as text.
    pub fn from_str_lossy(s: &str) -> Self {
        let src = s.as_bytes();
        let n = src.len().min(TOKEN_LEN);
        if src.len() != TOKEN_LEN {
            debug!(
                supplied = src.len(),
                "token string is not {TOKEN_LEN} bytes; {}",
                if src.len() < TOKEN_LEN { "zero-padding" } else { "truncating" }
            );
        }

        let mut bytes = [0u8; TOKEN_LEN];
        bytes[..n].copy_from_slice(&src[..n]);
        Self(bytes)
    }

    /// The sixteen bytes that go on the wire.
    pub const fn as_bytes(&self) -> &[u8; TOKEN_LEN] {
        &self.0
    }
}

impl From<&str> for Token {
    fn from(s: &str) -> Self {
        Token::from_str_lossy(s)
    }
}

impl From<[u8; TOKEN_LEN]> for Token {
    fn from(bytes: [u8; TOKEN_LEN]) -> Self {
        Token::from_bytes(bytes)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(<redacted>)")
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_string_is_zero_padded() {
        // Arrange / Act
        let token = Token::from_str_lossy("abc");

        // Assert
        assert_eq!(
            token.as_bytes(),
            &[0x61, 0x62, 0x63, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]
        );
    }

    #[test]
    fn test_empty_string_is_all_zero() {
        assert_eq!(Token::from_str_lossy("").as_bytes(), &[0u8; TOKEN_LEN]);
    }

    #[test]
    fn test_exact_length_string_is_copied_verbatim() {
        let token = Token::from_str_lossy(Token::PLACEHOLDER);
        assert_eq!(token.as_bytes(), b"sixteen letters.");
    }

    #[test]
    fn test_long_string_is_truncated_to_sixteen_bytes() {
        let token = Token::from_str_lossy("0123456789abcdefXYZ");
        assert_eq!(token.as_bytes(), b"0123456789abcdef");
    }

    #[test]
    fn test_multibyte_string_is_truncated_bytewise() {
        // 8 two-byte characters fill the token exactly; the ninth is dropped.
        let token = Token::from_str_lossy("ééééééééé");
        assert_eq!(token.as_bytes().len(), TOKEN_LEN);
        assert_eq!(&token.as_bytes()[..2], "é".as_bytes());
        assert_eq!(&token.as_bytes()[14..], "é".as_bytes());
    }

    #[test]
    fn test_from_str_matches_from_str_lossy() {
        assert_eq!(Token::from("secret"), Token::from_str_lossy("secret"));
    }

    #[test]
    fn test_debug_and_display_redact_secret() {
        let token = Token::from_str_lossy("hunter2");
        assert!(!format!("{token:?}").contains("hunter2"));
        assert!(!format!("{token}").contains("hunter2"));
    }
}
