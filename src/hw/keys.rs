//! The twelve key switches.
//!
//! Each switch has its own GPIO (active-low, internal pull-up) and its
//! own debouncer. The scanner surfaces at most one event per poll so
//! the dispatch loop applies at most one transition per iteration;
//! simultaneous presses drain over consecutive iterations in stable
//! index order.

use deckpad::config::{BUTTON_DEBOUNCE_MS, KEY_COUNT};
use embassy_rp::gpio::{AnyPin, Input, Pull};
use embassy_rp::Peri;
use embassy_time::Duration;

use crate::hw::debounce::Debouncer;

/// One debounced press or release, with the stable key index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyEvent {
    pub index: usize,
    pub pressed: bool,
}

struct Key {
    pin: Input<'static>,
    debounce: Debouncer,
}

pub struct KeyScanner {
    keys: [Key; KEY_COUNT],
    queue: heapless::Deque<KeyEvent, { KEY_COUNT * 2 }>,
}

impl KeyScanner {
    pub fn new(pins: [Peri<'static, AnyPin>; KEY_COUNT]) -> Self {
        let keys = pins.map(|pin| {
            let pin = Input::new(pin, Pull::Up);
            let pressed = pin.is_low();
            Key {
                pin,
                debounce: Debouncer::new(pressed, Duration::from_millis(BUTTON_DEBOUNCE_MS)),
            }
        });
        Self { keys, queue: heapless::Deque::new() }
    }

    /// Scan every switch, queue debounced transitions, and hand out at
    /// most one event.
    pub fn poll(&mut self) -> Option<KeyEvent> {
        for (index, key) in self.keys.iter_mut().enumerate() {
            if let Some(pressed) = key.debounce.sample(key.pin.is_low()) {
                defmt::debug!("key {}: pressed={}", index, pressed);
                // Queue holds a full press+release burst from every key.
                let _ = self.queue.push_back(KeyEvent { index, pressed });
            }
        }
        self.queue.pop_front()
    }
}
