//! Colour value types.
//!
//! The protocol has two pixel commands.  `SetPixel8` carries four 8-bit
//! channels, `SetPixel16` carries four 16-bit channels.  Each has a matching
//! value type here.  The RGB constructors fill alpha with the channel's
//! maximum, which is what the server treats as "fully opaque".

use serde::{Deserialize, Serialize};

/// An RGBA colour with 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const BLACK: Rgba8 = Rgba8::rgb(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque colour: alpha is set to 255.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, u8::MAX)
    }

    /// Channels in wire order (R, G, B, A).
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[u8; 3]> for Rgba8 {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Rgba8::rgb(r, g, b)
    }
}

impl From<[u8; 4]> for Rgba8 {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Rgba8::new(r, g, b, a)
    }
}

/// An RGBA colour with 16 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgba16 {
    pub r: u16,
    pub g: u16,
    pub b: u16,
    pub a: u16,
}

impl Rgba16 {
    pub const fn new(r: u16, g: u16, b: u16, a: u16) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque colour: alpha is set to 65535.
    pub const fn rgb(r: u16, g: u16, b: u16) -> Self {
        Self::new(r, g, b, u16::MAX)
    }

    /// Channels in wire order (R, G, B, A).
    pub const fn to_array(self) -> [u16; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[u16; 3]> for Rgba16 {
    fn from([r, g, b]: [u16; 3]) -> Self {
        Rgba16::rgb(r, g, b)
    }
}

impl From<[u16; 4]> for Rgba16 {
    fn from([r, g, b, a]: [u16; 4]) -> Self {
        Rgba16::new(r, g, b, a)
    }
}

/// A colour together with the precision it should be sent at.
///
/// The RGB variants are shorthands that become the RGBA form with an opaque
/// alpha; they exist so call sites can say what they mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    Rgb8 { r: u8, g: u8, b: u8 },
    Rgba8 { r: u8, g: u8, b: u8, a: u8 },
    Rgb16 { r: u16, g: u16, b: u16 },
    Rgba16 { r: u16, g: u16, b: u16, a: u16 },
}

/// A colour resolved to one of the two wire representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireColor {
    Eight(Rgba8),
    Sixteen(Rgba16),
}

impl Color {
    /// Resolves RGB shorthands and picks the pixel command width.
    pub const fn to_wire(self) -> WireColor {
        match self {
            Color::Rgb8 { r, g, b } => WireColor::Eight(Rgba8::rgb(r, g, b)),
            Color::Rgba8 { r, g, b, a } => WireColor::Eight(Rgba8::new(r, g, b, a)),
            Color::Rgb16 { r, g, b } => WireColor::Sixteen(Rgba16::rgb(r, g, b)),
            Color::Rgba16 { r, g, b, a } => WireColor::Sixteen(Rgba16::new(r, g, b, a)),
        }
    }
}

impl From<Rgba8> for Color {
    fn from(c: Rgba8) -> Self {
        Color::Rgba8 { r: c.r, g: c.g, b: c.b, a: c.a }
    }
}

impl From<Rgba16> for Color {
    fn from(c: Rgba16) -> Self {
        Color::Rgba16 { r: c.r, g: c.g, b: c.b, a: c.a }
    }
}
