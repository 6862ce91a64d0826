//! Rotary encoder input.
//!
//! The quadrature pair is polled once per loop iteration and decoded
//! with a Gray-code transition table; four quarter-steps make one
//! detent, matching the feel of the physical knob. The encoder switch
//! is debounced and reported as discrete falling edges only.

use deckpad::config::BUTTON_DEBOUNCE_MS;
use embassy_rp::gpio::{AnyPin, Input, Pull};
use embassy_rp::Peri;
use embassy_time::Duration;

use crate::hw::debounce::Debouncer;

/// Valid Gray-code transitions -> quarter-step direction. Invalid
/// transitions (contact bounce skipping a state) contribute zero.
#[rustfmt::skip]
const QUARTER_STEPS: [i8; 16] = [
     0, -1,  1,  0,
     1,  0,  0, -1,
    -1,  0,  0,  1,
     0,  1, -1,  0,
];

pub struct RotaryEncoder {
    pin_a: Input<'static>,
    pin_b: Input<'static>,
    prev: u8,
    quarters: i32,
}

impl RotaryEncoder {
    pub fn new(pin_a: Peri<'static, AnyPin>, pin_b: Peri<'static, AnyPin>) -> Self {
        let pin_a = Input::new(pin_a, Pull::Up);
        let pin_b = Input::new(pin_b, Pull::Up);
        let prev = (pin_a.is_high() as u8) << 1 | pin_b.is_high() as u8;
        Self { pin_a, pin_b, prev, quarters: 0 }
    }

    /// Sample the pins once. Returns the number of whole detents moved
    /// since the last call that produced one (signed).
    pub fn poll(&mut self) -> i32 {
        let state = (self.pin_a.is_high() as u8) << 1 | self.pin_b.is_high() as u8;
        let index = ((self.prev << 2) | state) as usize;
        self.prev = state;
        self.quarters += QUARTER_STEPS[index] as i32;

        let detents = self.quarters / 4;
        self.quarters -= detents * 4;
        detents
    }
}

pub struct EncoderButton {
    pin: Input<'static>,
    debounce: Debouncer,
}

impl EncoderButton {
    pub fn new(pin: Peri<'static, AnyPin>) -> Self {
        let pin = Input::new(pin, Pull::Up);
        let pressed = pin.is_low();
        Self {
            pin,
            debounce: Debouncer::new(pressed, Duration::from_millis(BUTTON_DEBOUNCE_MS)),
        }
    }

    /// `true` exactly once per debounced press (active-low falling
    /// edge). Releases are consumed silently.
    pub fn poll_fell(&mut self) -> bool {
        matches!(self.debounce.sample(self.pin.is_low()), Some(true))
    }
}
