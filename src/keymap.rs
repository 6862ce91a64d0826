//! Shipped configuration: the mode menu, per-mode binding tables and
//! the 1-bpp icons. Fixed at build time; there is no runtime remapping.
//!
//! Key positions are numbered left-to-right, top-to-bottom:
//! ```text
//! [ 0  1  2 ]
//! [ 3  4  5 ]
//! [ 6  7  8 ]
//! [ 9 10 11 ]
//! ```

use crate::bindings::MacroStep::{Combo, Overlay, SendKey, Text, Wait};
use crate::bindings::{Action, Binding, ModeTable};
use crate::config::{LAUNCHER_OPEN_MS, TYPE_SETTLE_MS};
use crate::keycode as kc;
use crate::menu::MenuEntry;
use crate::sinks::ImageRef;

/// Start-menu search: tap the Win key, let the search box open, type
/// the app name, confirm. The overlay shows the full app name, which
/// may be longer than the key label.
macro_rules! win_open {
    ($app:literal) => {
        Action::Tap(&[
            Overlay($app),
            SendKey(kc::LEFT_GUI),
            Wait(LAUNCHER_OPEN_MS),
            Text($app),
            Wait(TYPE_SETTLE_MS),
            SendKey(kc::ENTER),
        ])
    };
}

/// Spotlight search, same shape with Cmd+Space.
macro_rules! mac_open {
    ($app:literal) => {
        Action::Tap(&[
            Overlay($app),
            Combo(&[kc::LEFT_GUI, kc::SPACE]),
            Wait(LAUNCHER_OPEN_MS),
            Text($app),
            Wait(TYPE_SETTLE_MS),
            SendKey(kc::ENTER),
        ])
    };
}

/// Cmd / Cmd+Opt style chord, pressed and released as one report pair.
macro_rules! chord {
    ($($key:expr),+) => {
        Action::Tap(&[Combo(&[$($key),+])])
    };
}

// Icons: 16x16, one bit per pixel, two bytes per row, MSB first.

#[rustfmt::skip]
static TENKEY_PIX: [u8; 32] = [
    0x00, 0x00,
    0x6D, 0xB0, 0x6D, 0xB0, 0x6D, 0xB0,
    0x00, 0x00,
    0x6D, 0xB0, 0x6D, 0xB0, 0x6D, 0xB0,
    0x00, 0x00,
    0x6D, 0xB0, 0x6D, 0xB0, 0x6D, 0xB0,
    0x00, 0x00,
    0x6D, 0xB0, 0x6D, 0xB0, 0x6D, 0xB0,
];

#[rustfmt::skip]
static APPS_PIX: [u8; 32] = [
    0xFF, 0xFF,
    0x81, 0x81, 0x81, 0x81, 0x81, 0x81,
    0x81, 0x81, 0x81, 0x81, 0x81, 0x81,
    0xFF, 0xFF, 0xFF, 0xFF,
    0x81, 0x81, 0x81, 0x81, 0x81, 0x81,
    0x81, 0x81, 0x81, 0x81, 0x81, 0x81,
    0xFF, 0xFF,
];

#[rustfmt::skip]
static EDIT_PIX: [u8; 32] = [
    0x00, 0x0C, 0x00, 0x1E, 0x00, 0x3C, 0x00, 0x78,
    0x00, 0xF0, 0x01, 0xE0, 0x03, 0xC0, 0x07, 0x80,
    0x0F, 0x00, 0x1E, 0x00, 0x3C, 0x00, 0x78, 0x00,
    0xF0, 0x00, 0xE0, 0x00, 0xC0, 0x00, 0x80, 0x00,
];

#[rustfmt::skip]
static MAC_PIX: [u8; 32] = [
    0x3C, 0x3C, 0x24, 0x24, 0x24, 0x24, 0x3F, 0xFC,
    0x0C, 0x30, 0x0C, 0x30, 0x0C, 0x30, 0x0C, 0x30,
    0x0C, 0x30, 0x0C, 0x30, 0x0C, 0x30, 0x0C, 0x30,
    0x3F, 0xFC, 0x24, 0x24, 0x24, 0x24, 0x3C, 0x3C,
];

#[rustfmt::skip]
static CAD_PIX: [u8; 32] = [
    0x07, 0xE0, 0x18, 0x18, 0x60, 0x06, 0x40, 0x02,
    0x40, 0x02, 0x40, 0x02, 0x47, 0xE2, 0x44, 0x22,
    0x44, 0x22, 0x47, 0xE2, 0x40, 0x02, 0x40, 0x02,
    0x40, 0x02, 0x60, 0x06, 0x18, 0x18, 0x07, 0xE0,
];

// Boot logo: 32x16.
#[rustfmt::skip]
static LOGO_PIX: [u8; 64] = [
    0x0F, 0xFF, 0xFF, 0xF0,
    0x10, 0x00, 0x00, 0x08,
    0x20, 0x00, 0x00, 0x04,
    0x27, 0x9E, 0x79, 0xE4,
    0x24, 0x10, 0x41, 0x04,
    0x24, 0x10, 0x41, 0x04,
    0x27, 0x90, 0x79, 0xE4,
    0x24, 0x10, 0x49, 0x04,
    0x24, 0x10, 0x45, 0x04,
    0x27, 0x9E, 0x43, 0x04,
    0x20, 0x00, 0x00, 0x04,
    0x20, 0x00, 0x00, 0x04,
    0x20, 0x00, 0x00, 0x04,
    0x20, 0x00, 0x00, 0x04,
    0x10, 0x00, 0x00, 0x08,
    0x0F, 0xFF, 0xFF, 0xF0,
];

pub static LOGO: ImageRef =
    ImageRef { name: "logo", data: &LOGO_PIX, width: 32, height: 16 };

const ICON_TENKEY: ImageRef =
    ImageRef { name: "10key", data: &TENKEY_PIX, width: 16, height: 16 };
const ICON_APPS: ImageRef =
    ImageRef { name: "apps", data: &APPS_PIX, width: 16, height: 16 };
const ICON_EDIT: ImageRef =
    ImageRef { name: "edit", data: &EDIT_PIX, width: 16, height: 16 };
const ICON_MAC: ImageRef =
    ImageRef { name: "mac", data: &MAC_PIX, width: 16, height: 16 };
const ICON_CAD: ImageRef =
    ImageRef { name: "cad", data: &CAD_PIX, width: 16, height: 16 };

/// Menu order is the carousel order.
pub static MENU: [MenuEntry; 5] = [
    MenuEntry { name: "10Key", image: ICON_TENKEY },
    MenuEntry { name: "Apps", image: ICON_APPS },
    MenuEntry { name: "Editing", image: ICON_EDIT },
    MenuEntry { name: "Mac", image: ICON_MAC },
    MenuEntry { name: "CAD", image: ICON_CAD },
];

/// Keypad digits held like real keys, so auto-repeat and chords work.
static TENKEY: [Binding; 12] = [
    Binding { label: "1", action: Action::Hold(&[kc::KP_1]) },
    Binding { label: "2", action: Action::Hold(&[kc::KP_2]) },
    Binding { label: "3", action: Action::Hold(&[kc::KP_3]) },
    Binding { label: "4", action: Action::Hold(&[kc::KP_4]) },
    Binding { label: "5", action: Action::Hold(&[kc::KP_5]) },
    Binding { label: "6", action: Action::Hold(&[kc::KP_6]) },
    Binding { label: "7", action: Action::Hold(&[kc::KP_7]) },
    Binding { label: "8", action: Action::Hold(&[kc::KP_8]) },
    Binding { label: "9", action: Action::Hold(&[kc::KP_9]) },
    Binding { label: "0", action: Action::Hold(&[kc::KP_0]) },
    Binding { label: ".", action: Action::Hold(&[kc::KP_DOT]) },
    Binding { label: "Enter", action: Action::Hold(&[kc::KP_ENTER]) },
];

/// Windows app launcher.
static APPS: [Binding; 12] = [
    Binding { label: "Teams", action: win_open!("Teams") },
    Binding { label: "Slack", action: win_open!("Slack") },
    Binding { label: "Outlook", action: win_open!("Outlook") },
    Binding { label: "Word", action: win_open!("Word") },
    Binding { label: "PowerPoint", action: win_open!("PowerPoint") },
    Binding { label: "Excel", action: win_open!("Excel") },
    Binding { label: "Visio", action: win_open!("Visio") },
    Binding { label: "VS Code", action: win_open!("Visual Studio Code") },
    // File Explorer has a dedicated shortcut; no need to search for it.
    Binding {
        label: "Explorer",
        action: Action::Tap(&[Overlay("File Explorer"), Combo(&[kc::LEFT_GUI, kc::E])]),
    },
    Binding { label: "Chrome", action: win_open!("Chrome") },
    Binding { label: "Brave", action: win_open!("Brave") },
    Binding { label: "Conda", action: win_open!("Anaconda Prompt") },
];

/// Hold cluster for review/editing work. Modifiers appear twice on
/// purpose - one for each hand position.
static EDITING: [Binding; 12] = [
    Binding { label: "Esc", action: Action::Hold(&[kc::ESCAPE]) },
    Binding { label: "F4", action: Action::Hold(&[kc::F4]) },
    Binding { label: "Space", action: Action::Hold(&[kc::SPACE]) },
    Binding { label: "Alt", action: Action::Hold(&[kc::LEFT_ALT]) },
    Binding { label: "F3", action: Action::Hold(&[kc::F3]) },
    Binding { label: "Alt", action: Action::Hold(&[kc::LEFT_ALT]) },
    Binding { label: "Enter", action: Action::Hold(&[kc::ENTER]) },
    Binding { label: "F2", action: Action::Hold(&[kc::F2]) },
    Binding { label: "H", action: Action::Hold(&[kc::H]) },
    Binding { label: "Ctrl", action: Action::Hold(&[kc::LEFT_CTRL]) },
    Binding { label: "F1", action: Action::Hold(&[kc::F1]) },
    Binding { label: "F6", action: Action::Hold(&[kc::F6]) },
];

/// macOS app launcher via Spotlight.
static MAC: [Binding; 12] = [
    Binding { label: "VS Code", action: mac_open!("Visual Studio Code") },
    Binding { label: "Terminal", action: mac_open!("Terminal") },
    Binding { label: "GitHub", action: mac_open!("GitHub Desktop") },
    Binding { label: "Word", action: mac_open!("Microsoft Word") },
    Binding { label: "PowerPoint", action: mac_open!("Microsoft PowerPoint") },
    Binding { label: "Excel", action: mac_open!("Microsoft Excel") },
    Binding { label: "Safari", action: mac_open!("Safari") },
    Binding { label: "Brave", action: mac_open!("Brave") },
    Binding { label: "Chrome", action: mac_open!("Google Chrome") },
    Binding { label: "Bambu", action: mac_open!("Bambu Studio") },
    Binding { label: "Fusion", action: mac_open!("Fusion 360") },
    Binding { label: "iMovie", action: mac_open!("iMovie") },
];

/// Fusion 360 shortcuts - Command is GUI, Option is Alt on HID.
static CAD: [Binding; 12] = [
    Binding { label: "New", action: chord!(kc::LEFT_GUI, kc::N) },
    Binding { label: "Open", action: chord!(kc::LEFT_GUI, kc::O) },
    Binding { label: "Save", action: chord!(kc::LEFT_GUI, kc::S) },
    Binding { label: "Recover", action: chord!(kc::LEFT_SHIFT, kc::LEFT_GUI, kc::S) },
    Binding { label: "Tabs", action: chord!(kc::LEFT_GUI, kc::TAB) },
    Binding { label: "ViewCube", action: chord!(kc::LEFT_ALT, kc::LEFT_GUI, kc::V) },
    Binding { label: "Browser", action: chord!(kc::LEFT_ALT, kc::LEFT_GUI, kc::B) },
    Binding { label: "Comments", action: chord!(kc::LEFT_ALT, kc::LEFT_GUI, kc::A) },
    Binding { label: "TextCmd", action: chord!(kc::LEFT_ALT, kc::LEFT_GUI, kc::C) },
    Binding { label: "NavBar", action: chord!(kc::LEFT_ALT, kc::LEFT_GUI, kc::N) },
    Binding { label: "DataPanel", action: chord!(kc::LEFT_ALT, kc::LEFT_GUI, kc::P) },
    Binding { label: "Reset", action: chord!(kc::LEFT_ALT, kc::LEFT_GUI, kc::R) },
];

pub static MODE_TABLES: [ModeTable; 5] = [
    ModeTable { name: "10Key", bindings: &TENKEY },
    ModeTable { name: "Apps", bindings: &APPS },
    ModeTable { name: "Editing", bindings: &EDITING },
    ModeTable { name: "Mac", bindings: &MAC },
    ModeTable { name: "CAD", bindings: &CAD },
];
