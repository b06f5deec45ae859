//! Animations drive a [`Controller`] in a loop.
//!
//! Any type implementing [`Animation`] can be handed to [`crate::run`].  It
//! receives an authenticated controller, the number of LEDs and a [`Speed`],
//! and is expected to keep sending frames until something fails.  How speed
//! maps to timing is entirely the animation's business.
//!
//! # The frame pattern
//!
//! ```text
//! for each LED: set_*(index, colour)     -- staged, not yet visible
//! strobe()                               -- all staged updates appear at once
//! sleep(speed.frame_interval())
//! ```

use std::io::Write;
use std::thread;

use tracing::{debug, info};
use vaporlight_core::{Color, Rgba8};

use crate::domain::config::Speed;
use crate::infrastructure::controller::{Controller, ControllerError};

/// A procedure that drives a controller.
pub trait Animation {
    /// Runs the animation.
    ///
    /// Endless animations only return on error.
    ///
    /// # Errors
    ///
    /// Whatever the controller reports; animations do not retry.
    fn animate<W: Write>(
        &mut self,
        controller: &mut Controller<W>,
        led_count: u16,
        speed: Speed,
    ) -> Result<(), ControllerError>;
}

/// Maps a position on a 256-step colour wheel to an opaque colour.
///
/// The wheel goes red → green → blue → red, with two channels cross-fading
/// in each third and the third channel off.
///
/// ```rust
/// use vaporlight_client::wheel;
/// use vaporlight_core::Rgba8;
///
/// assert_eq!(wheel(0), Rgba8::rgb(0, 255, 0));
/// assert_eq!(wheel(85), Rgba8::rgb(255, 0, 0));
/// assert_eq!(wheel(170), Rgba8::rgb(0, 0, 255));
/// ```
pub fn wheel(pos: u8) -> Rgba8 {
    match pos {
        0..=84 => Rgba8::rgb(pos * 3, 255 - pos * 3, 0),
        85..=169 => {
            let p = pos - 85;
            Rgba8::rgb(255 - p * 3, 0, p * 3)
        }
        _ => {
            let p = pos - 170;
            Rgba8::rgb(0, p * 3, 255 - p * 3)
        }
    }
}

/// A rainbow that rotates along the strip.
///
/// Every LED is first blanked one by one (set black, strobe).  After that,
/// each frame spreads the full colour wheel over all LEDs and shifts it one
/// step further than the previous frame.
#[derive(Debug, Clone, Default)]
pub struct Rainbow {
    frame_limit: Option<u64>,
    offset: u8,
}

impl Rainbow {
    /// An endless rainbow.
    pub fn new() -> Self {
        Self::default()
    }

    /// A rainbow that stops after `frames` frames.
    pub fn with_frame_limit(frames: u64) -> Self {
        Self {
            frame_limit: Some(frames),
            offset: 0,
        }
    }

    /// Wheel position for LED `index` of `led_count` at the current offset.
    fn hue(&self, index: u16, led_count: u16) -> u8 {
        let spread = u32::from(index) * 256 / u32::from(led_count);
        (spread as u8).wrapping_add(self.offset)
    }

    fn blank<W: Write>(controller: &mut Controller<W>, led_count: u16) -> Result<(), ControllerError> {
        for index in 0..led_count {
            controller.set(index, Color::Rgb8 { r: 0, g: 0, b: 0 })?;
            controller.strobe()?;
        }
        Ok(())
    }

    fn frame<W: Write>(&mut self, controller: &mut Controller<W>, led_count: u16) -> Result<(), ControllerError> {
        self.offset = self.offset.wrapping_add(1);
        for index in 0..led_count {
            controller.set_rgba8(index, wheel(self.hue(index, led_count)))?;
        }
        controller.strobe()
    }
}

impl Animation for Rainbow {
    fn animate<W: Write>(
        &mut self,
        controller: &mut Controller<W>,
        led_count: u16,
        speed: Speed,
    ) -> Result<(), ControllerError> {
        let interval = speed.frame_interval();
        info!(led_count, speed = speed.get(), ?interval, "starting rainbow");

        Self::blank(controller, led_count)?;

        let mut frames = 0u64;
        while self.frame_limit.map_or(true, |limit| frames < limit) {
            self.frame(controller, led_count)?;
            frames += 1;
            thread::sleep(interval);
        }

        debug!(frames, "rainbow reached its frame limit");
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
