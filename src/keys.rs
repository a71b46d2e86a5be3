//! Logical key codes and scan codes.
//!
//! A [`KeyCode`] is a key in the backend's keysym space (SDL numbering). It is
//! opaque to this crate: codes are passed through from records to
//! [`Event::KeyChange`](crate::event::Event::KeyChange) without remapping.
//!
//! A [`Scancode`] is a hardware key position. It is only used by the key-state
//! probe to index the backend's live keyboard snapshot.
//!
//! ## Conventions
//! - Printable keys use their lowercase ASCII value (`'a'` = 97, `' '` = 32).
//! - Keys without a character carry [`SCANCODE_MASK`] plus their scan code.

use serde::{Deserialize, Serialize};

/// Bit set on keycodes that are derived directly from a scan code.
pub const SCANCODE_MASK: i32 = 1 << 30;

/// Logical key code in the backend's keysym space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyCode(pub i32);

/// Hardware scan code (key position).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scancode(pub u32);

impl Scancode {
    pub const A: Scancode = Scancode(4);
    pub const N1: Scancode = Scancode(30);
    pub const N0: Scancode = Scancode(39);
    pub const RETURN: Scancode = Scancode(40);
    pub const ESCAPE: Scancode = Scancode(41);
    pub const BACKSPACE: Scancode = Scancode(42);
    pub const TAB: Scancode = Scancode(43);
    pub const SPACE: Scancode = Scancode(44);
    pub const RIGHT: Scancode = Scancode(79);
    pub const LEFT: Scancode = Scancode(80);
    pub const DOWN: Scancode = Scancode(81);
    pub const UP: Scancode = Scancode(82);
}

const fn from_scancode(sc: Scancode) -> KeyCode {
    KeyCode(sc.0 as i32 | SCANCODE_MASK)
}

impl KeyCode {
    pub const UNKNOWN: KeyCode = KeyCode(0);

    pub const LEFT: KeyCode = from_scancode(Scancode::LEFT);
    pub const RIGHT: KeyCode = from_scancode(Scancode::RIGHT);
    pub const UP: KeyCode = from_scancode(Scancode::UP);
    pub const DOWN: KeyCode = from_scancode(Scancode::DOWN);

    pub const SPACE: KeyCode = KeyCode(b' ' as i32);
    pub const ESCAPE: KeyCode = KeyCode(0x1b);
    pub const RETURN: KeyCode = KeyCode(b'\r' as i32);
    pub const BACKSPACE: KeyCode = KeyCode(0x08);
    pub const TAB: KeyCode = KeyCode(b'\t' as i32);

    pub const F: KeyCode = KeyCode(b'f' as i32);
    pub const I: KeyCode = KeyCode(b'i' as i32);
    pub const M: KeyCode = KeyCode(b'm' as i32);
    pub const P: KeyCode = KeyCode(b'p' as i32);
    pub const Q: KeyCode = KeyCode(b'q' as i32);
    pub const T: KeyCode = KeyCode(b't' as i32);

    /// Raw keysym value.
    #[inline]
    pub fn raw(self) -> i32 {
        self.0
    }
}

impl From<i32> for KeyCode {
    fn from(v: i32) -> Self {
        KeyCode(v)
    }
}

/// Default (US layout) translation from a logical key to its scan code.
///
/// Covers letters, digits, the common control keys and every keycode that
/// carries [`SCANCODE_MASK`]. Returns `None` for anything else.
pub fn default_scancode(code: KeyCode) -> Option<Scancode> {
    let raw = code.0;
    if raw > 0 && raw & SCANCODE_MASK != 0 {
        return Some(Scancode((raw & !SCANCODE_MASK) as u32));
    }
    let byte = u8::try_from(raw).ok()?;
    match byte {
        b'a'..=b'z' => Some(Scancode(Scancode::A.0 + u32::from(byte - b'a'))),
        b'1'..=b'9' => Some(Scancode(Scancode::N1.0 + u32::from(byte - b'1'))),
        b'0' => Some(Scancode::N0),
        b'\r' => Some(Scancode::RETURN),
        0x1b => Some(Scancode::ESCAPE),
        0x08 => Some(Scancode::BACKSPACE),
        b'\t' => Some(Scancode::TAB),
        b' ' => Some(Scancode::SPACE),
        _ => None,
    }
}
