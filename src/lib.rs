//! Host-testable core library for deckpad.
//!
//! Everything here is pure logic - the menu model, binding tables, HID
//! report state, overlay timers and the dispatch controller - and can
//! be tested on the host (no embedded hardware required) with plain
//! `cargo test`.
//!
//! The embedded binary uses main.rs with #![no_std] and #![no_main]
//! behind the `embedded` feature; hardware implementations of the sink
//! traits live under `src/hw/` and are compiled only into the binary.

#![cfg_attr(not(test), no_std)]

pub mod bindings;
pub mod config;
pub mod error;
pub mod hid;
pub mod keycode;
pub mod keymap;
pub mod menu;
pub mod sinks;
pub mod ui;
