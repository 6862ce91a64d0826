//! Integration tests for deckpad host-testable logic.
//!
//! Drives the dispatch controller against the real shipped keymap with
//! recording fakes standing in for the display, HID transport and
//! backlight.

use std::cell::RefCell;
use std::rc::Rc;

use deckpad::bindings::ModeRegistry;
use deckpad::error::Error;
use deckpad::keycode as kc;
use deckpad::keymap;
use deckpad::menu::Menu;
use deckpad::sinks::{BacklightSink, DelayProvider, DisplaySink, HidSink, ImageRef, Rgb};
use deckpad::ui::{Controller, UiState};

#[derive(Debug, PartialEq, Clone)]
enum HidOp {
    Down(Vec<u8>),
    Up(Vec<u8>),
    Send(u8),
    Text(String),
}

#[derive(Default)]
struct Log {
    image: Option<&'static str>,
    centered: Option<String>,
    title: String,
    footer: String,
    info: String,
    hid: Vec<HidOp>,
    delays: Vec<u32>,
    level: f32,
}

struct Fake(Rc<RefCell<Log>>);

impl DisplaySink for Fake {
    fn show_image(&mut self, image: ImageRef) -> Result<(), Error> {
        self.0.borrow_mut().image = Some(image.name);
        Ok(())
    }

    fn release_image(&mut self) {
        self.0.borrow_mut().image = None;
    }

    fn show_centered(&mut self, text: &str, _scale: u8) {
        self.0.borrow_mut().centered = Some(text.to_string());
    }

    fn clear_centered(&mut self) {
        self.0.borrow_mut().centered = None;
    }

    fn set_title(&mut self, text: &str) {
        self.0.borrow_mut().title = text.to_string();
    }

    fn set_footer(&mut self, text: &str) {
        self.0.borrow_mut().footer = text.to_string();
    }

    fn set_info(&mut self, text: &str) {
        self.0.borrow_mut().info = text.to_string();
    }
}

impl HidSink for Fake {
    fn key_down(&mut self, codes: &[u8]) -> Result<(), Error> {
        self.0.borrow_mut().hid.push(HidOp::Down(codes.to_vec()));
        Ok(())
    }

    fn key_up(&mut self, codes: &[u8]) -> Result<(), Error> {
        self.0.borrow_mut().hid.push(HidOp::Up(codes.to_vec()));
        Ok(())
    }

    fn send_key(&mut self, code: u8) -> Result<(), Error> {
        self.0.borrow_mut().hid.push(HidOp::Send(code));
        Ok(())
    }

    fn type_text(&mut self, text: &str) -> Result<(), Error> {
        self.0.borrow_mut().hid.push(HidOp::Text(text.to_string()));
        Ok(())
    }
}

impl BacklightSink for Fake {
    fn set_brightness(&mut self, level: f32) {
        self.0.borrow_mut().level = level;
    }

    fn fill(&mut self, _color: Rgb) {}
}

impl DelayProvider for Fake {
    fn delay_ms(&mut self, ms: u32) {
        self.0.borrow_mut().delays.push(ms);
    }
}

fn controller() -> (Rc<RefCell<Log>>, Controller<Fake, Fake, Fake, Fake>) {
    let log = Rc::new(RefCell::new(Log::default()));
    let ctl = Controller::new(
        Menu::new(&keymap::MENU).expect("menu must not be empty"),
        ModeRegistry::new(&keymap::MODE_TABLES),
        Fake(log.clone()),
        Fake(log.clone()),
        Fake(log.clone()),
        Fake(log.clone()),
    )
    .expect("shipped configuration must validate");
    (log, ctl)
}

#[test]
fn shipped_configuration_validates() {
    let (log, mut ctl) = controller();
    ctl.start(0);
    assert_eq!(ctl.state(), UiState::Menu);
    assert_eq!(log.borrow().image, Some("10key"));
    assert_eq!(log.borrow().level, 0.5);
}

#[test]
fn tenkey_mode_holds_keypad_digits() {
    let (log, mut ctl) = controller();
    ctl.start(0);
    ctl.on_encoder_press(0);
    assert_eq!(ctl.state(), UiState::InMode("10Key"));
    assert_eq!(log.borrow().title, "10Key");
    assert_eq!(log.borrow().footer, "10Key ready");

    ctl.on_key(0, true, 10);
    assert_eq!(log.borrow().centered.as_deref(), Some("1"));
    ctl.on_key(0, false, 400);
    assert_eq!(log.borrow().centered, None);
    assert_eq!(
        log.borrow().hid,
        [HidOp::Down(vec![kc::KP_1]), HidOp::Up(vec![kc::KP_1])]
    );
}

#[test]
fn apps_launcher_types_the_app_name() {
    let (log, mut ctl) = controller();
    ctl.start(0);
    ctl.on_encoder_delta(1, 0); // Apps
    ctl.on_encoder_press(0);
    assert_eq!(ctl.state(), UiState::InMode("Apps"));

    ctl.on_key(0, true, 0); // Teams
    assert_eq!(
        log.borrow().hid,
        [
            HidOp::Send(kc::LEFT_GUI),
            HidOp::Text("Teams".to_string()),
            HidOp::Send(kc::ENTER),
        ]
    );
    assert_eq!(log.borrow().delays, [200, 100]);
    assert_eq!(log.borrow().centered.as_deref(), Some("Teams"));
}

#[test]
fn explorer_uses_the_direct_shortcut() {
    let (log, mut ctl) = controller();
    ctl.start(0);
    ctl.on_encoder_delta(1, 0);
    ctl.on_encoder_press(0);

    ctl.on_key(8, true, 0);
    assert_eq!(
        log.borrow().hid,
        [
            HidOp::Down(vec![kc::LEFT_GUI, kc::E]),
            HidOp::Up(vec![kc::LEFT_GUI, kc::E]),
        ]
    );
    // The overlay carries the full name, not the short key label.
    assert_eq!(log.borrow().centered.as_deref(), Some("File Explorer"));
}

#[test]
fn cad_chords_press_the_whole_set_at_once() {
    let (log, mut ctl) = controller();
    ctl.start(0);
    ctl.on_encoder_delta(-1, 0); // wrap backwards to CAD
    ctl.on_encoder_press(0);
    assert_eq!(ctl.state(), UiState::InMode("CAD"));

    ctl.on_key(3, true, 0); // Recover = Shift+Cmd+S
    assert_eq!(
        log.borrow().hid,
        [
            HidOp::Down(vec![kc::LEFT_SHIFT, kc::LEFT_GUI, kc::S]),
            HidOp::Up(vec![kc::LEFT_SHIFT, kc::LEFT_GUI, kc::S]),
        ]
    );
}

#[test]
fn carousel_walkthrough_wraps_and_restores() {
    let (log, mut ctl) = controller();
    ctl.start(0);

    let mut seen = Vec::new();
    for _ in 0..5 {
        ctl.on_encoder_delta(1, 0);
        seen.push(log.borrow().image.unwrap());
    }
    assert_eq!(seen, ["apps", "edit", "mac", "cad", "10key"]);

    // Enter and leave a mode; the carousel image comes back.
    ctl.on_encoder_delta(2, 0);
    let before = log.borrow().image;
    ctl.on_encoder_press(0);
    assert_eq!(log.borrow().image, None);
    ctl.on_encoder_press(0);
    assert_eq!(log.borrow().image, before);
    assert_eq!(ctl.state(), UiState::Menu);
}

#[test]
fn editing_mode_exit_releases_held_modifier() {
    let (log, mut ctl) = controller();
    ctl.start(0);
    ctl.on_encoder_delta(2, 0); // Editing
    ctl.on_encoder_press(0);

    ctl.on_key(9, true, 0); // Ctrl held
    ctl.on_encoder_press(10); // back to menu with the key still down
    assert_eq!(
        log.borrow().hid,
        [
            HidOp::Down(vec![kc::LEFT_CTRL]),
            HidOp::Up(vec![kc::LEFT_CTRL]),
        ]
    );
    assert_eq!(log.borrow().centered, None);
}
