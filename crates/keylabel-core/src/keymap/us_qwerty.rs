//! Reference labels for the US ANSI QWERTY layout.
//!
//! Letters are lower-case because that is what a live layout source reports
//! (the unshifted character); the resolver upper-cases every mapped label.
//! `IntlBackslash` does not exist on ANSI boards but is reported by hosts
//! as `"\"` on the ISO variant, so we keep it for completeness.

use super::physical::PhysicalKey;

/// Returns the label printed on `key` under US QWERTY.
pub fn us_qwerty_label(key: PhysicalKey) -> &'static str {
    use PhysicalKey::*;
    match key {
        KeyA => "a",
        KeyB => "b",
        KeyC => "c",
        KeyD => "d",
        KeyE => "e",
        KeyF => "f",
        KeyG => "g",
        KeyH => "h",
        KeyI => "i",
        KeyJ => "j",
        KeyK => "k",
        KeyL => "l",
        KeyM => "m",
        KeyN => "n",
        KeyO => "o",
        KeyP => "p",
        KeyQ => "q",
        KeyR => "r",
        KeyS => "s",
        KeyT => "t",
        KeyU => "u",
        KeyV => "v",
        KeyW => "w",
        KeyX => "x",
        KeyY => "y",
        KeyZ => "z",
        Digit1 => "1",
        Digit2 => "2",
        Digit3 => "3",
        Digit4 => "4",
        Digit5 => "5",
        Digit6 => "6",
        Digit7 => "7",
        Digit8 => "8",
        Digit9 => "9",
        Digit0 => "0",
        Minus => "-",
        Equal => "=",
        BracketLeft => "[",
        BracketRight => "]",
        Backslash => "\\",
        Semicolon => ";",
        Quote => "'",
        Backquote => "`",
        Comma => ",",
        Period => ".",
        Slash => "/",
        IntlBackslash => "\\",
    }
}
