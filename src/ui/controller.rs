//! The input event router and macro dispatch state machine.
//!
//! One controller instance owns the whole UI state: the menu cursor,
//! the active mode, the backlight level, both transient-text timers and
//! the set of outstanding held keys. Raw encoder/button/key events come
//! in; menu navigation, mode transitions, hold/tap execution and
//! display/HID/backlight side effects go out through the injected
//! sinks.
//!
//! Nothing here performs I/O directly and nothing is async: the caller
//! drives `on_*` handlers and `tick` from a single cooperative loop,
//! and every per-event error is converted to a footer message so the
//! loop never stops.

use core::fmt::Write as _;

use crate::bindings::{Action, MacroStep, ModeRegistry};
use crate::config;
use crate::error::Error;
use crate::menu::Menu;
use crate::sinks::{BacklightSink, DelayProvider, DisplaySink, HidSink, WHITE};
use crate::ui::overlay::{best_scale, OverlayTimer};

/// Which level of the two-level UI is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UiState {
    /// Top-level carousel; keys are inert.
    Menu,
    /// A binding table is live; the encoder adjusts brightness.
    InMode(&'static str),
}

pub struct Controller<D, H, B, T> {
    menu: Menu,
    registry: ModeRegistry,
    state: UiState,
    brightness: f32,
    overlay: OverlayTimer,
    footer: OverlayTimer,
    /// Holds that have been sent a key-down and are owed a key-up,
    /// keyed by physical position. Not a press counter: strict
    /// press/release pairing per key is the event source's contract.
    holds: heapless::Vec<(usize, &'static [u8]), { config::KEY_COUNT }>,
    display: D,
    hid: H,
    backlight: B,
    delay: T,
}

impl<D, H, B, T> Controller<D, H, B, T>
where
    D: DisplaySink,
    H: HidSink,
    B: BacklightSink,
    T: DelayProvider,
{
    /// Validates the static configuration; any defect is fatal before
    /// the event loop starts.
    pub fn new(
        menu: Menu,
        registry: ModeRegistry,
        display: D,
        hid: H,
        backlight: B,
        delay: T,
    ) -> Result<Self, Error> {
        registry.validate(menu.entries())?;
        Ok(Self {
            menu,
            registry,
            state: UiState::Menu,
            brightness: config::INITIAL_BRIGHTNESS,
            overlay: OverlayTimer::new(),
            footer: OverlayTimer::new(),
            holds: heapless::Vec::new(),
            display,
            hid,
            backlight,
            delay,
        })
    }

    /// Initial paint: backlight at the boot level, current selection's
    /// image on screen.
    pub fn start(&mut self, now: u64) {
        self.backlight.set_brightness(self.brightness);
        self.backlight.fill(WHITE);
        self.show_menu_entry(now);
    }

    /// Encoder rotation: menu navigation at the top level, brightness
    /// inside a mode.
    pub fn on_encoder_delta(&mut self, delta: i32, now: u64) {
        if delta == 0 {
            return;
        }
        match self.state {
            UiState::Menu => {
                self.menu.select(delta);
                self.show_menu_entry(now);
            }
            UiState::InMode(_) => {
                self.brightness = (self.brightness + delta as f32 * config::BRIGHTNESS_STEP)
                    .clamp(config::BRIGHTNESS_MIN, config::BRIGHTNESS_MAX);
                self.backlight.set_brightness(self.brightness);
                self.backlight.fill(WHITE);
                self.show_brightness_readout();
            }
        }
    }

    /// Encoder switch falling edge: enter the selected mode, or leave
    /// the active one.
    pub fn on_encoder_press(&mut self, now: u64) {
        match self.state {
            UiState::Menu => self.enter_mode(now),
            UiState::InMode(_) => self.exit_mode(now),
        }
    }

    /// One key event. Ignored at the menu level; inside a mode it is
    /// dispatched against the live binding table.
    pub fn on_key(&mut self, index: usize, pressed: bool, now: u64) {
        let mode = match self.state {
            UiState::InMode(mode) => mode,
            UiState::Menu => return,
        };
        let binding = match self.registry.table(mode).and_then(|t| t.bindings.get(index)) {
            Some(binding) => *binding,
            // Bare key position: legal and silent.
            None => return,
        };
        match binding.action {
            Action::Hold(codes) => self.run_hold(index, binding.label, codes, pressed, now),
            Action::Tap(steps) => {
                if pressed {
                    self.run_tap(binding.label, steps, now);
                }
            }
        }
    }

    /// Advance both transient-text timers. Must run once per loop
    /// iteration; starvation delays hiding but never hides early.
    pub fn tick(&mut self, now: u64) {
        if self.overlay.tick(now) {
            self.display.clear_centered();
        }
        if self.footer.tick(now) {
            self.display.set_footer("");
        }
    }

    pub fn state(&self) -> UiState {
        self.state
    }

    pub fn brightness(&self) -> f32 {
        self.brightness
    }

    pub fn selected_index(&self) -> usize {
        self.menu.selected_index()
    }

    fn enter_mode(&mut self, now: u64) {
        let name = self.menu.current().name;
        self.display.release_image();
        self.state = UiState::InMode(name);
        self.display.set_title(name);
        let mut msg: heapless::String<40> = heapless::String::new();
        let _ = write!(msg, "{name} ready");
        self.show_footer(&msg, now, config::MODE_READY_MS);
        self.show_brightness_readout();
    }

    fn exit_mode(&mut self, now: u64) {
        // Outstanding holds are owed their key-up before the binding
        // table goes away.
        while let Some((_, codes)) = self.holds.pop() {
            if let Err(e) = self.hid.key_up(codes) {
                self.report_error(e, now);
            }
        }
        self.overlay.hide();
        self.display.clear_centered();
        self.display.set_title("");
        self.display.set_info("");
        self.state = UiState::Menu;
        self.show_menu_entry(now);
    }

    fn run_hold(
        &mut self,
        index: usize,
        label: &str,
        codes: &'static [u8],
        pressed: bool,
        now: u64,
    ) {
        if pressed {
            self.overlay.show_held();
            self.display.show_centered(label, best_scale(label));
            if let Err(e) = self.hid.key_down(codes) {
                self.report_error(e, now);
            }
            // Owed a key-up even when the down failed on the wire.
            if !self.holds.iter().any(|(i, _)| *i == index) {
                let _ = self.holds.push((index, codes));
            }
        } else {
            // Key-up first, then drop the overlay - release must never
            // leave codes asserted, and release-without-press stays
            // harmless because the report builder ignores absent codes.
            if let Err(e) = self.hid.key_up(codes) {
                self.report_error(e, now);
            }
            if let Some(pos) = self.holds.iter().position(|(i, _)| *i == index) {
                self.holds.swap_remove(pos);
            }
            self.overlay.hide();
            self.display.clear_centered();
        }
    }

    fn run_tap(&mut self, label: &str, steps: &'static [MacroStep], now: u64) {
        self.show_timed_overlay(label, now);
        for step in steps {
            let result = match *step {
                MacroStep::Combo(codes) => self.send_combo(codes),
                MacroStep::SendKey(code) => self.hid.send_key(code),
                MacroStep::Text(text) => self.hid.type_text(text),
                MacroStep::Wait(ms) => {
                    self.delay.delay_ms(ms);
                    Ok(())
                }
                MacroStep::Overlay(text) => {
                    self.show_timed_overlay(text, now);
                    Ok(())
                }
            };
            if let Err(e) = result {
                // Dead transport: do not type half a macro.
                self.report_error(e, now);
                break;
            }
        }
    }

    /// Press the whole set in one report, hold briefly, release in one
    /// report.
    fn send_combo(&mut self, codes: &[u8]) -> Result<(), Error> {
        self.hid.key_down(codes)?;
        self.delay.delay_ms(config::COMBO_HOLD_MS);
        self.hid.key_up(codes)
    }

    fn show_timed_overlay(&mut self, text: &str, now: u64) {
        if self.overlay.show_timed(now, config::OVERLAY_MS) {
            self.display.show_centered(text, best_scale(text));
        }
    }

    fn show_menu_entry(&mut self, now: u64) {
        let image = self.menu.current().image;
        if let Err(e) = self.display.show_image(image) {
            self.report_error(e, now);
        }
        self.display.set_info("");
    }

    fn show_brightness_readout(&mut self) {
        let mut text: heapless::String<24> = heapless::String::new();
        let _ = write!(text, "Brightness: {:.2}", self.brightness);
        self.display.set_info(&text);
    }

    fn show_footer(&mut self, text: &str, now: u64, duration_ms: u64) {
        self.footer.show_timed(now, duration_ms);
        self.display.set_footer(text);
    }

    fn report_error(&mut self, error: Error, now: u64) {
        self.show_footer(error.footer_text(), now, config::FOOTER_MS);
    }
}
