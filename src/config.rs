//! Application-wide constants and compile-time configuration.
//!
//! All timing parameters, brightness limits, display geometry and USB
//! identity live here so they can be tuned in one place.

// UI loop

/// Main loop poll interval (ms).
pub const LOOP_TICK_MS: u64 = 10;

/// Boot splash duration (ms).
pub const SPLASH_MS: u64 = 1500;

// Overlay & footer

/// Default lifetime of the timed key/app overlay (ms).
pub const OVERLAY_MS: u64 = 900;

/// Default lifetime of a footer status message (ms).
pub const FOOTER_MS: u64 = 1200;

/// Lifetime of the "<mode> ready" footer shown on mode entry (ms).
pub const MODE_READY_MS: u64 = 1000;

// Backlight

/// Backlight level applied at boot.
pub const INITIAL_BRIGHTNESS: f32 = 0.5;

/// Brightness change per encoder detent while in a mode.
pub const BRIGHTNESS_STEP: f32 = 0.05;

/// Brightness clamp range. The lower bound keeps the keys legible.
pub const BRIGHTNESS_MIN: f32 = 0.05;
pub const BRIGHTNESS_MAX: f32 = 1.0;

// Macro timing

/// How long combo keycodes are held down before release (ms).
pub const COMBO_HOLD_MS: u32 = 20;

/// Settle time after opening the OS launcher before typing (ms).
pub const LAUNCHER_OPEN_MS: u32 = 200;

/// Settle time after typing an app name before sending Enter (ms).
pub const TYPE_SETTLE_MS: u32 = 100;

// Keys

/// Number of physical keys on the pad.
pub const KEY_COUNT: usize = 12;

/// Key and encoder-switch debounce time (ms).
pub const BUTTON_DEBOUNCE_MS: u64 = 10;

// Display

/// OLED panel geometry (pixels).
pub const DISPLAY_WIDTH: u32 = 128;
pub const DISPLAY_HEIGHT: u32 = 64;

// USB

/// USB VID/PID - use the "pid.codes" open-source test VID.
/// Replace with your own allocated VID/PID for production.
pub const USB_VID: u16 = 0x1209;
pub const USB_PID: u16 = 0x0002;

/// USB device strings.
pub const USB_MANUFACTURER: &str = "deckpad";
pub const USB_PRODUCT: &str = "Deckpad Macro Keypad";
pub const USB_SERIAL_NUMBER: &str = "000001";

/// USB HID polling interval (ms). 1 ms = 1000 Hz for lowest latency.
pub const USB_HID_POLL_MS: u8 = 1;
