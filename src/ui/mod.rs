//! UI core - the dispatch state machine and the transient-text timers.
//!
//! The controller reacts to encoder rotation, encoder-switch edges and
//! key events, rendering through the injected display sink.
//!
//! ## Components
//!
//! - **Controller**: two-level state machine (menu carousel / active
//!   mode) plus binding dispatch
//! - **Overlay**: expiry timers for the centered overlay and the footer
//!   status line

pub mod controller;
pub mod overlay;

pub use controller::{Controller, UiState};
pub use overlay::OverlayTimer;
