//! ASCII → HID usage mapping for `type_text` (US layout).

use crate::keycode as kc;

/// Shift bit in the report modifier byte (Left Shift).
const SHIFT: u8 = 0x02;

/// Map one ASCII character to `(modifier bits, usage code)`.
/// Characters outside the table return `None` and are skipped.
pub fn lookup(c: char) -> Option<(u8, u8)> {
    let plain = |code| Some((0u8, code));
    let shifted = |code| Some((SHIFT, code));

    match c {
        'a'..='z' => plain(kc::A + (c as u8 - b'a')),
        'A'..='Z' => shifted(kc::A + (c as u8 - b'A')),
        '1'..='9' => plain(kc::NUM_1 + (c as u8 - b'1')),
        '0' => plain(kc::NUM_0),

        ' ' => plain(kc::SPACE),
        '\n' => plain(kc::ENTER),
        '\t' => plain(kc::TAB),

        '-' => plain(kc::MINUS),
        '=' => plain(kc::EQUAL),
        '[' => plain(kc::LEFT_BRACKET),
        ']' => plain(kc::RIGHT_BRACKET),
        '\\' => plain(kc::BACKSLASH),
        ';' => plain(kc::SEMICOLON),
        '\'' => plain(kc::QUOTE),
        '`' => plain(kc::GRAVE),
        ',' => plain(kc::COMMA),
        '.' => plain(kc::PERIOD),
        '/' => plain(kc::SLASH),

        '!' => shifted(kc::NUM_1),
        '@' => shifted(kc::NUM_2),
        '#' => shifted(kc::NUM_3),
        '$' => shifted(kc::NUM_4),
        '%' => shifted(kc::NUM_5),
        '^' => shifted(kc::NUM_6),
        '&' => shifted(kc::NUM_7),
        '*' => shifted(kc::NUM_8),
        '(' => shifted(kc::NUM_9),
        ')' => shifted(kc::NUM_0),
        '_' => shifted(kc::MINUS),
        '+' => shifted(kc::EQUAL),
        '{' => shifted(kc::LEFT_BRACKET),
        '}' => shifted(kc::RIGHT_BRACKET),
        '|' => shifted(kc::BACKSLASH),
        ':' => shifted(kc::SEMICOLON),
        '"' => shifted(kc::QUOTE),
        '~' => shifted(kc::GRAVE),
        '<' => shifted(kc::COMMA),
        '>' => shifted(kc::PERIOD),
        '?' => shifted(kc::SLASH),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keycode as kc;

    #[test]
    fn letters_and_case() {
        assert_eq!(lookup('a'), Some((0, kc::A)));
        assert_eq!(lookup('z'), Some((0, kc::Z)));
        assert_eq!(lookup('A'), Some((SHIFT, kc::A)));
        assert_eq!(lookup('Q'), Some((SHIFT, kc::Q)));
    }

    #[test]
    fn digits_wrap_at_zero() {
        assert_eq!(lookup('1'), Some((0, kc::NUM_1)));
        assert_eq!(lookup('9'), Some((0, kc::NUM_9)));
        assert_eq!(lookup('0'), Some((0, kc::NUM_0)));
    }

    #[test]
    fn shifted_symbols() {
        assert_eq!(lookup('!'), Some((SHIFT, kc::NUM_1)));
        assert_eq!(lookup(')'), Some((SHIFT, kc::NUM_0)));
        assert_eq!(lookup('?'), Some((SHIFT, kc::SLASH)));
    }

    #[test]
    fn unmapped_characters_are_skipped() {
        assert_eq!(lookup('é'), None);
        assert_eq!(lookup('\r'), None);
    }
}
