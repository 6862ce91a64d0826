//! Key binding tables.
//!
//! Each mode maps the twelve physical key positions to a label plus an
//! action. The action variant is fixed at table construction and
//! dispatched by pattern match: a `Hold` asserts its keycode set for the
//! physical duration of the press, a `Tap` runs a macro step sequence
//! once on press.

use crate::config::KEY_COUNT;
use crate::error::ConfigError;
use crate::menu::MenuEntry;

/// One step of a tap macro, executed synchronously in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MacroStep {
    /// Press the whole set together, hold briefly, release together.
    Combo(&'static [u8]),
    /// Press and release a single key.
    SendKey(u8),
    /// Type a literal string through the ASCII layout.
    Text(&'static str),
    /// Blocking delay. Not cancellable; the loop stalls by design.
    Wait(u32),
    /// Replace the timed overlay text mid-run (restarts the timer).
    Overlay(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Keycodes asserted while the key is physically depressed.
    Hold(&'static [u8]),
    /// One-shot macro fired on press; releases are ignored.
    Tap(&'static [MacroStep]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Binding {
    pub label: &'static str,
    pub action: Action,
}

/// Bindings for one mode, in physical key order. Positions past the end
/// of the slice are legal and silent.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ModeTable {
    pub name: &'static str,
    pub bindings: &'static [Binding],
}

/// Name → table lookup over the static mode set.
pub struct ModeRegistry {
    tables: &'static [ModeTable],
}

impl ModeRegistry {
    pub fn new(tables: &'static [ModeTable]) -> Self {
        Self { tables }
    }

    pub fn table(&self, name: &str) -> Option<&ModeTable> {
        self.tables.iter().find(|t| t.name == name)
    }

    /// Startup validation: every menu entry needs a table, and no table
    /// may exceed the physical key count.
    pub fn validate(&self, menu: &'static [MenuEntry]) -> Result<(), ConfigError> {
        for entry in menu {
            match self.table(entry.name) {
                None => return Err(ConfigError::MissingModeTable(entry.name)),
                Some(t) if t.bindings.len() > KEY_COUNT => {
                    return Err(ConfigError::OversizedTable(t.name))
                }
                Some(_) => {}
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keycode as kc;
    use crate::sinks::ImageRef;

    const IMG: ImageRef = ImageRef { name: "i", data: &[0u8; 8], width: 8, height: 8 };

    static BINDING: [Binding; 1] = [Binding { label: "x", action: Action::Hold(&[kc::X]) }];
    static TABLES: [ModeTable; 1] = [ModeTable { name: "A", bindings: &BINDING }];
    static MENU_OK: [MenuEntry; 1] = [MenuEntry { name: "A", image: IMG }];
    static MENU_MISSING: [MenuEntry; 2] = [
        MenuEntry { name: "A", image: IMG },
        MenuEntry { name: "B", image: IMG },
    ];

    #[test]
    fn lookup_by_name() {
        let reg = ModeRegistry::new(&TABLES);
        assert!(reg.table("A").is_some());
        assert!(reg.table("nope").is_none());
    }

    #[test]
    fn validate_accepts_complete_registry() {
        let reg = ModeRegistry::new(&TABLES);
        assert_eq!(reg.validate(&MENU_OK), Ok(()));
    }

    #[test]
    fn validate_rejects_missing_table() {
        let reg = ModeRegistry::new(&TABLES);
        assert_eq!(
            reg.validate(&MENU_MISSING),
            Err(ConfigError::MissingModeTable("B"))
        );
    }

    #[test]
    fn validate_rejects_oversized_table() {
        static BIG: [Binding; 13] =
            [Binding { label: "x", action: Action::Hold(&[kc::X]) }; 13];
        static TABLES_BIG: [ModeTable; 1] = [ModeTable { name: "A", bindings: &BIG }];
        let reg = ModeRegistry::new(&TABLES_BIG);
        assert_eq!(
            reg.validate(&MENU_OK),
            Err(ConfigError::OversizedTable("A"))
        );
    }
}
