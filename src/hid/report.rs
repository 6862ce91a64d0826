//! USB HID keyboard report (boot protocol compatible).
//!
//! Layout (8 bytes):
//! ```text
//! Byte 0: Modifier keys (bitfield)
//!         Bit 0 = Left Ctrl,  Bit 1 = Left Shift,
//!         Bit 2 = Left Alt,   Bit 3 = Left GUI,
//!         Bit 4 = Right Ctrl, Bit 5 = Right Shift,
//!         Bit 6 = Right Alt,  Bit 7 = Right GUI
//! Byte 1: Reserved (0x00)
//! Byte 2-7: Up to 6 simultaneous key codes (USB HID usage codes)
//! ```
//!
//! [`KeyState`] maintains the currently asserted set between reports, so
//! callers can assert and release whole keycode groups atomically and
//! combos are never staggered across reports.

use crate::keycode;

/// Keyboard report size in bytes.
pub const KEYBOARD_REPORT_SIZE: usize = 8;

/// Standard USB HID boot-protocol keyboard report.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyboardReport {
    /// Modifier key bitfield.
    pub modifier: u8,
    /// Reserved byte (always 0x00 per HID spec).
    pub reserved: u8,
    /// Up to 6 simultaneously pressed key codes.
    pub keycodes: [u8; 6],
}

impl KeyboardReport {
    /// Create an empty (all-keys-released) report.
    pub const fn empty() -> Self {
        Self { modifier: 0, reserved: 0, keycodes: [0; 6] }
    }

    /// Serialise into a byte slice for USB HID transmission.
    /// Returns the number of bytes written (always 8).
    pub fn serialize(&self, buf: &mut [u8]) -> usize {
        if buf.len() < KEYBOARD_REPORT_SIZE {
            return 0;
        }
        buf[0] = self.modifier;
        buf[1] = self.reserved;
        buf[2..8].copy_from_slice(&self.keycodes);
        KEYBOARD_REPORT_SIZE
    }

    /// Returns `true` if no keys are pressed (release event).
    pub fn is_empty(&self) -> bool {
        self.modifier == 0 && self.keycodes.iter().all(|&k| k == 0)
    }
}

/// Currently asserted keys: modifier mask plus up to six rollover slots.
#[derive(Clone, Default, Debug)]
pub struct KeyState {
    modifier: u8,
    pressed: heapless::Vec<u8, 6>,
}

impl KeyState {
    pub const fn new() -> Self {
        Self { modifier: 0, pressed: heapless::Vec::new() }
    }

    /// Assert one usage code. Modifier usages set their bit; regular
    /// usages occupy a rollover slot. A seventh simultaneous key is
    /// dropped, as the boot protocol has nowhere to put it.
    pub fn press(&mut self, code: u8) {
        if keycode::is_modifier(code) {
            self.modifier |= keycode::modifier_bit(code);
        } else if !self.pressed.contains(&code) {
            let _ = self.pressed.push(code);
        }
    }

    /// Release one usage code. Releasing a key that is not asserted is
    /// a no-op, which makes release-without-press harmless.
    pub fn release(&mut self, code: u8) {
        if keycode::is_modifier(code) {
            self.modifier &= !keycode::modifier_bit(code);
        } else if let Some(pos) = self.pressed.iter().position(|&k| k == code) {
            self.pressed.swap_remove(pos);
        }
    }

    pub fn press_all(&mut self, codes: &[u8]) {
        for &code in codes {
            self.press(code);
        }
    }

    pub fn release_all(&mut self, codes: &[u8]) {
        for &code in codes {
            self.release(code);
        }
    }

    pub fn clear(&mut self) {
        self.modifier = 0;
        self.pressed.clear();
    }

    /// Snapshot the current state as a boot-protocol report.
    pub fn report(&self) -> KeyboardReport {
        let mut report = KeyboardReport::empty();
        report.modifier = self.modifier;
        for (slot, &code) in self.pressed.iter().enumerate() {
            report.keycodes[slot] = code;
        }
        report
    }
}
