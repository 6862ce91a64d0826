//! Collaborator traits injected into the dispatch controller.
//!
//! The controller owns all UI state but performs no I/O itself: the
//! display, HID transport, backlight and blocking delays are reached
//! through these traits. Embedded implementations live under `hw/`;
//! host tests inject recording fakes.

use crate::error::Error;

/// Handle to a build-time 1-bpp bitmap resource.
///
/// Two references are the same resource iff their names match; the pixel
/// data is row-padded to whole bytes as `embedded-graphics` expects.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ImageRef {
    pub name: &'static str,
    pub data: &'static [u8],
    pub width: u32,
    pub height: u32,
}

impl PartialEq for ImageRef {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for ImageRef {}

/// RGB color for the backlight fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

pub const WHITE: Rgb = Rgb { r: 255, g: 255, b: 255 };

/// OLED surface: one image slot plus four text regions.
///
/// The sink holds at most one image resource; `show_image` releases the
/// previous one before acquiring the next. Text setters are infallible
/// (regions are in-memory until the panel flush); resource acquisition
/// reports failure so the caller can surface it.
pub trait DisplaySink {
    fn show_image(&mut self, image: ImageRef) -> Result<(), Error>;
    fn release_image(&mut self);

    /// Full-area centered overlay text at the given scale.
    fn show_centered(&mut self, text: &str, scale: u8);
    fn clear_centered(&mut self);

    fn set_title(&mut self, text: &str);
    fn set_footer(&mut self, text: &str);
    fn set_info(&mut self, text: &str);
}

/// Opaque keystroke transport.
///
/// `key_down`/`key_up` assert and release a whole keycode set atomically
/// (one report each, combos never staggered). `send_key` is a
/// press-and-release of a single key; `type_text` emits per-character
/// press/release pairs through the ASCII layout table.
pub trait HidSink {
    fn key_down(&mut self, codes: &[u8]) -> Result<(), Error>;
    fn key_up(&mut self, codes: &[u8]) -> Result<(), Error>;
    fn send_key(&mut self, code: u8) -> Result<(), Error>;
    fn type_text(&mut self, text: &str) -> Result<(), Error>;
}

/// RGB backlight. Effective duty per channel is `channel x level`.
pub trait BacklightSink {
    fn set_brightness(&mut self, level: f32);
    fn fill(&mut self, color: Rgb);
}

/// Blocking delay used by tap-macro steps. Blocks the whole loop by
/// design; events arriving during the wait are dropped, not queued.
pub trait DelayProvider {
    fn delay_ms(&mut self, ms: u32);
}
