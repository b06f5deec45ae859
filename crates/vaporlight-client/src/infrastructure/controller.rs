//! The Vaporlight controller: one owned connection plus the session token.
//!
//! Every public send method does exactly one encode and one `write_all` of
//! the complete command, in the order the caller invokes them.  There is no
//! buffering, no queue and no background thread, so the bytes on the wire
//! are the concatenation of the calls that returned `Ok`.
//!
//! # Session states (for beginners)
//!
//! ```text
//!                 authenticate()             close()
//!  Unauthenticated ─────────────▶ Authenticated ─────────▶ Closed
//!         │                                                 ▲
//!         └──────────────────── close() ────────────────────┘
//! ```
//!
//! - `Unauthenticated`: only [`Controller::authenticate`] and
//!   [`Controller::close`] are accepted.  Pixel and strobe calls fail with
//!   [`ControllerError::NotAuthenticated`] and write nothing.
//! - `Authenticated`: every operation is accepted.
//! - `Closed`: the transport has been dropped.  Every send fails with
//!   [`ControllerError::Closed`]; `close` itself is a no-op.
//!
//! The server never replies, so "authenticated" only means the token was
//! handed to the transport.  Whether the server accepted it is unknowable.

use std::io::{self, Write};
use std::net::TcpStream;

use thiserror::Error;
use tracing::{debug, info, trace, warn};
use vaporlight_core::{Color, Command, LedIndex, Rgba16, Rgba8, Token};

use crate::domain::config::ValidatedConfig;

/// Errors returned by [`Controller`] operations.
#[derive(Debug, Error)]
pub enum ControllerError {
    /// The TCP connection to the server could not be established.
    #[error("failed to connect to vaporlight server at {addr}: {source}")]
    Connect {
        addr: String,
        #[source]
        source: io::Error,
    },

    /// A command was issued after [`Controller::close`].
    #[error("connection is closed")]
    Closed,

    /// A pixel or strobe command was issued before [`Controller::authenticate`].
    #[error("session is not authenticated; call authenticate() first")]
    NotAuthenticated,

    /// The transport rejected a write.  Not retried.
    #[error("transport write failed: {0}")]
    Write(#[source] io::Error),
}

/// Where a [`Controller`] is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Unauthenticated,
    Authenticated,
    Closed,
}

/// Client for one Vaporlight server connection.
///
/// Generic over the transport so tests and non-TCP links (for example a
/// serial port) can stand in for the socket.  The controller exclusively owns
/// its transport and drops it on [`Controller::close`] or when the controller
/// itself is dropped.
///
/// # Examples
///
/// ```rust
/// use vaporlight_client::Controller;
/// use vaporlight_core::Token;
///
/// let mut con = Controller::new(Vec::new(), Token::from_str_lossy("abc"));
/// con.authenticate().unwrap();
/// con.set_rgb8(3u16, [10, 20, 30]).unwrap();
/// con.strobe().unwrap();
///
/// let wire = con.get_ref().unwrap();
/// assert_eq!(&wire[17..], &[0x01, 0x00, 0x03, 0x0A, 0x14, 0x1E, 0xFF, 0xFF]);
/// ```
pub struct Controller<W: Write = TcpStream> {
    /// `None` once closed.
    writer: Option<W>,
    token: Token,
    authenticated: bool,
}

impl Controller<TcpStream> {
    /// Opens a TCP connection to `host:port`.
    ///
    /// This is the only operation that can block for an unbounded time
    /// (DNS resolution, TCP handshake).  No command is sent; call
    /// [`Controller::authenticate`] next.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError::Connect`] if resolution or every connect
    /// attempt fails.
    pub fn connect(token: Token, host: &str, port: u16) -> Result<Self, ControllerError> {
        let addr = display_addr(host, port);
        info!("connecting to vaporlight server at {addr}");

        let stream = TcpStream::connect((host, port))
            .map_err(|source| ControllerError::Connect { addr: addr.clone(), source })?;

        // Commands are a handful of bytes each; without this a strobe can sit
        // in the kernel waiting for an ACK of the previous segment.
        if let Err(e) = stream.set_nodelay(true) {
            warn!("could not disable Nagle's algorithm on {addr}: {e}");
        }

        info!("connected to {addr}");
        Ok(Self::new(stream, token))
    }

    /// Opens a connection using the host, port and token of `config`.
    ///
    /// # Errors
    ///
    /// See [`Controller::connect`].
    pub fn connect_with(config: &ValidatedConfig) -> Result<Self, ControllerError> {
        Self::connect(config.token, &config.host, config.port)
    }
}

impl<W: Write> Controller<W> {
    /// Wraps an already open transport.  The session starts unauthenticated.
    pub fn new(writer: W, token: Token) -> Self {
        Self {
            writer: Some(writer),
            token,
            authenticated: false,
        }
    }

    pub fn state(&self) -> SessionState {
        match (&self.writer, self.authenticated) {
            (None, _) => SessionState::Closed,
            (Some(_), false) => SessionState::Unauthenticated,
            (Some(_), true) => SessionState::Authenticated,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.state() == SessionState::Authenticated
    }

    pub fn is_closed(&self) -> bool {
        self.writer.is_none()
    }

    pub fn token(&self) -> &Token {
        &self.token
    }

    /// The underlying transport, or `None` after close.
    pub fn get_ref(&self) -> Option<&W> {
        self.writer.as_ref()
    }

    /// Consumes the controller and hands back the transport without closing it.
    pub fn into_inner(mut self) -> Option<W> {
        self.writer.take()
    }

    // ── Session ───────────────────────────────────────────────────────────────

    /// Sends the Authenticate command with the bound token.
    ///
    /// Calling it again while authenticated sends the token again.
    ///
    /// # Errors
    ///
    /// [`ControllerError::Closed`] after close, [`ControllerError::Write`] if
    /// the transport fails.  On error the session is unauthenticated, even if
    /// an earlier authenticate succeeded, since part of the token may be on
    /// the wire.
    pub fn authenticate(&mut self) -> Result<(), ControllerError> {
        info!("authenticating");
        self.authenticated = false;
        self.send(Command::Authenticate(self.token))?;
        self.authenticated = true;
        Ok(())
    }

    /// Flushes and releases the transport.
    ///
    /// Idempotent: closing an already closed controller returns `Ok(())`
    /// without touching anything.  The transport is released even when the
    /// final flush fails.
    ///
    /// # Errors
    ///
    /// [`ControllerError::Write`] if the final flush fails.
    pub fn close(&mut self) -> Result<(), ControllerError> {
        let Some(mut writer) = self.writer.take() else {
            debug!("close called on an already closed controller");
            return Ok(());
        };
        self.authenticated = false;

        let flushed = writer.flush();
        drop(writer);
        info!("connection closed");
        flushed.map_err(ControllerError::Write)
    }

    // ── Pixel commands ────────────────────────────────────────────────────────

    /// Stages an opaque 8-bit colour (alpha = 255).
    ///
    /// # Errors
    ///
    /// [`ControllerError::NotAuthenticated`], [`ControllerError::Closed`] or
    /// [`ControllerError::Write`].
    pub fn set_rgb8(&mut self, index: impl Into<LedIndex>, rgb: [u8; 3]) -> Result<(), ControllerError> {
        self.set_rgba8(index, Rgba8::from(rgb))
    }

    /// Stages an 8-bit RGBA colour.
    ///
    /// # Errors
    ///
    /// See [`Controller::set_rgb8`].
    pub fn set_rgba8(
        &mut self,
        index: impl Into<LedIndex>,
        rgba: impl Into<Rgba8>,
    ) -> Result<(), ControllerError> {
        self.send_in_session(Command::SetPixel8 {
            index: index.into(),
            color: rgba.into(),
        })
    }

    /// Stages an opaque 16-bit colour (alpha = 65535).
    ///
    /// # Errors
    ///
    /// See [`Controller::set_rgb8`].
    pub fn set_rgb16(&mut self, index: impl Into<LedIndex>, rgb: [u16; 3]) -> Result<(), ControllerError> {
        self.set_rgba16(index, Rgba16::from(rgb))
    }

    /// Stages a 16-bit RGBA colour.
    ///
    /// # Errors
    ///
    /// See [`Controller::set_rgb8`].
    pub fn set_rgba16(
        &mut self,
        index: impl Into<LedIndex>,
        rgba: impl Into<Rgba16>,
    ) -> Result<(), ControllerError> {
        self.send_in_session(Command::SetPixel16 {
            index: index.into(),
            color: rgba.into(),
        })
    }

    /// Stages `color` at the precision the variant names.
    ///
    /// # Errors
    ///
    /// See [`Controller::set_rgb8`].
    pub fn set(&mut self, index: impl Into<LedIndex>, color: Color) -> Result<(), ControllerError> {
        self.send_in_session(Command::set_pixel(index, color))
    }

    /// Stages the same colour on several LEDs, one command each, in order.
    ///
    /// Stops at the first failure; commands before it have already been
    /// written.
    ///
    /// # Errors
    ///
    /// See [`Controller::set_rgb8`].
    pub fn set_many<I>(&mut self, indices: I, color: Color) -> Result<(), ControllerError>
    where
        I: IntoIterator,
        I::Item: Into<LedIndex>,
    {
        for index in indices {
            self.set(index, color)?;
        }
        Ok(())
    }

    /// Commits every staged pixel update at once.
    ///
    /// # Errors
    ///
    /// See [`Controller::set_rgb8`].
    pub fn strobe(&mut self) -> Result<(), ControllerError> {
        self.send_in_session(Command::Strobe)
    }

    // ── Internals ─────────────────────────────────────────────────────────────

    fn send_in_session(&mut self, cmd: Command) -> Result<(), ControllerError> {
        match self.state() {
            SessionState::Closed => Err(ControllerError::Closed),
            SessionState::Unauthenticated => Err(ControllerError::NotAuthenticated),
            SessionState::Authenticated => self.send(cmd),
        }
    }

    fn send(&mut self, cmd: Command) -> Result<(), ControllerError> {
        let writer = self.writer.as_mut().ok_or(ControllerError::Closed)?;
        let bytes = cmd.encode();
        trace!(opcode = ?cmd.opcode(), len = bytes.len(), "sending command");
        writer.write_all(&bytes).map_err(ControllerError::Write)
    }
}

/// `host:port`, with IPv6 literals bracketed.
fn display_addr(host: &str, port: u16) -> String {
    if host.contains(':') && !host.starts_with('[') {
        format!("[{host}]:{port}")
    } else {
        format!("{host}:{port}")
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
