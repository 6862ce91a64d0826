//! Unified error type for deckpad.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Static configuration is unusable. Fatal, raised before the
    /// event loop starts.
    Config(ConfigError),

    /// Image or display resource could not be acquired. Non-fatal,
    /// surfaced as a footer message.
    Display,

    /// HID transport failure (report channel full or bus error).
    /// Non-fatal, surfaced as a footer message.
    Hid,
}

/// Startup configuration defects. Any of these halts the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// The mode menu has no entries.
    EmptyMenu,
    /// A menu entry has no binding table registered under its name.
    MissingModeTable(&'static str),
    /// A binding table has more entries than physical keys.
    OversizedTable(&'static str),
}

impl Error {
    /// Short status text for the footer region.
    pub fn footer_text(&self) -> &'static str {
        match self {
            Error::Config(_) => "config error",
            Error::Display => "display error",
            Error::Hid => "hid error",
        }
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}
