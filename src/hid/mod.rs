//! HID keyboard layer: boot-protocol report state and the ASCII typing
//! layout. Transport-agnostic; the USB writer lives in the hardware
//! layer.

pub mod layout;
pub mod report;

pub use report::{KeyState, KeyboardReport, KEYBOARD_REPORT_SIZE};
