//! Hardware layer - RP2040 implementations of the sink traits and the
//! polled event sources. Compiled only into the embedded binary.
//!
//! ## Components
//!
//! - **display**: SSD1306 128x64 OLED over SPI
//! - **encoder**: quadrature rotary encoder + debounced switch
//! - **keys**: 12 direct-GPIO key switches with per-key debounce
//! - **backlight**: RGB backlight on three PWM channels
//! - **usb**: Embassy USB HID boot-protocol keyboard

pub mod backlight;
pub mod debounce;
pub mod display;
pub mod encoder;
pub mod keys;
pub mod usb;

use deckpad::sinks::DelayProvider;
use embassy_time::Duration;

/// Busy-wait delay for tap-macro steps. Blocks the whole loop by
/// design; events arriving during the wait are dropped.
pub struct BlockingDelay;

impl DelayProvider for BlockingDelay {
    fn delay_ms(&mut self, ms: u32) {
        embassy_time::block_for(Duration::from_millis(ms as u64));
    }
}
