//! Writing-system physical keys (the keys whose printed label depends on the
//! active keyboard layout).
//!
//! Each variant is named after its physical-key identifier, the same string a
//! browser reports in `KeyboardEvent.code` and uses as the key of a keyboard
//! layout map.  The numeric value of each variant is its USB HID Usage ID on
//! the Keyboard/Keypad page (0x07), which is handy when a caller holds raw
//! HID reports rather than identifier strings.
//!
//! # Why only these keys? (for beginners)
//!
//! Keys such as `ArrowDown`, `Enter` or `F1` carry the same label on every
//! layout, so a live layout source never reports them.  Only the
//! "writing system" keys (letters, digits and punctuation) move around between
//! QWERTY, AZERTY, QWERTZ, Dvorak and friends.  A shortcut token that is not
//! one of these is passed through by the resolver as-is.
//!
//! Reference: UI Events KeyboardEvent code Values, section 3.1.1
//! ("Writing System Keys"), and USB HID Usage Tables 1.3, section 10.

/// Broad grouping of a physical-key identifier by its textual prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCategory {
    /// `"Key"` prefix: `KeyA` … `KeyZ`.
    Letter,
    /// `"Digit"` prefix: `Digit0` … `Digit9`.
    Digit,
    /// No prefix: `Minus`, `Equal`, `BracketLeft`, …
    Punctuation,
}

/// A writing-system physical key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum PhysicalKey {
    // Letters (HID 0x04–0x1D)
    KeyA = 0x04,
    KeyB = 0x05,
    KeyC = 0x06,
    KeyD = 0x07,
    KeyE = 0x08,
    KeyF = 0x09,
    KeyG = 0x0A,
    KeyH = 0x0B,
    KeyI = 0x0C,
    KeyJ = 0x0D,
    KeyK = 0x0E,
    KeyL = 0x0F,
    KeyM = 0x10,
    KeyN = 0x11,
    KeyO = 0x12,
    KeyP = 0x13,
    KeyQ = 0x14,
    KeyR = 0x15,
    KeyS = 0x16,
    KeyT = 0x17,
    KeyU = 0x18,
    KeyV = 0x19,
    KeyW = 0x1A,
    KeyX = 0x1B,
    KeyY = 0x1C,
    KeyZ = 0x1D,

    // Digits (HID 0x1E–0x27)
    Digit1 = 0x1E,
    Digit2 = 0x1F,
    Digit3 = 0x20,
    Digit4 = 0x21,
    Digit5 = 0x22,
    Digit6 = 0x23,
    Digit7 = 0x24,
    Digit8 = 0x25,
    Digit9 = 0x26,
    Digit0 = 0x27,

    // Punctuation (HID 0x2D–0x38, 0x64)
    Minus = 0x2D,
    Equal = 0x2E,
    BracketLeft = 0x2F,
    BracketRight = 0x30,
    Backslash = 0x31,
    Semicolon = 0x33,
    Quote = 0x34,
    Backquote = 0x35,
    Comma = 0x36,
    Period = 0x37,
    Slash = 0x38,
    IntlBackslash = 0x64,
}

impl PhysicalKey {
    /// Every writing-system key, letters first, then digits, then punctuation.
    pub const ALL: [PhysicalKey; 48] = {
        use PhysicalKey::*;
        [
            KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI, KeyJ, KeyK, KeyL, KeyM,
            KeyN, KeyO, KeyP, KeyQ, KeyR, KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,
            Digit1, Digit2, Digit3, Digit4, Digit5, Digit6, Digit7, Digit8, Digit9, Digit0,
            Minus, Equal, BracketLeft, BracketRight, Backslash, Semicolon, Quote, Backquote,
            Comma, Period, Slash, IntlBackslash,
        ]
    };

    /// Returns the physical-key identifier string, e.g. `"KeyA"`.
    pub fn code(self) -> &'static str {
        use PhysicalKey::*;
        match self {
            KeyA => "KeyA",
            KeyB => "KeyB",
            KeyC => "KeyC",
            KeyD => "KeyD",
            KeyE => "KeyE",
            KeyF => "KeyF",
            KeyG => "KeyG",
            KeyH => "KeyH",
            KeyI => "KeyI",
            KeyJ => "KeyJ",
            KeyK => "KeyK",
            KeyL => "KeyL",
            KeyM => "KeyM",
            KeyN => "KeyN",
            KeyO => "KeyO",
            KeyP => "KeyP",
            KeyQ => "KeyQ",
            KeyR => "KeyR",
            KeyS => "KeyS",
            KeyT => "KeyT",
            KeyU => "KeyU",
            KeyV => "KeyV",
            KeyW => "KeyW",
            KeyX => "KeyX",
            KeyY => "KeyY",
            KeyZ => "KeyZ",
            Digit1 => "Digit1",
            Digit2 => "Digit2",
            Digit3 => "Digit3",
            Digit4 => "Digit4",
            Digit5 => "Digit5",
            Digit6 => "Digit6",
            Digit7 => "Digit7",
            Digit8 => "Digit8",
            Digit9 => "Digit9",
            Digit0 => "Digit0",
            Minus => "Minus",
            Equal => "Equal",
            BracketLeft => "BracketLeft",
            BracketRight => "BracketRight",
            Backslash => "Backslash",
            Semicolon => "Semicolon",
            Quote => "Quote",
            Backquote => "Backquote",
            Comma => "Comma",
            Period => "Period",
            Slash => "Slash",
            IntlBackslash => "IntlBackslash",
        }
    }

    /// Parses a physical-key identifier.
    ///
    /// Matching is exact and case-sensitive; `"keya"` is not `KeyA`.
    /// Returns `None` for anything that is not a writing-system key.
    pub fn from_code(code: &str) -> Option<Self> {
        // 48 entries; a linear scan is fine for a per-token diagnostic lookup.
        Self::ALL.iter().copied().find(|key| key.code() == code)
    }

    /// Returns the USB HID Usage ID for this key.
    pub fn hid_usage(self) -> u16 {
        self as u16
    }

    /// Returns the prefix category of this key's identifier.
    pub fn category(self) -> KeyCategory {
        match self.hid_usage() {
            0x04..=0x1D => KeyCategory::Letter,
            0x1E..=0x27 => KeyCategory::Digit,
            _ => KeyCategory::Punctuation,
        }
    }
}

impl std::fmt::Display for PhysicalKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
