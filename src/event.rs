//! Game-facing events and the raw backend records they are built from.
//!
//! Game code only ever sees [`Event`]. Backends produce [`RawEvent`], a
//! backend-neutral copy of the native record, which the
//! [classifier](crate::classify) turns into an `Event`.
//!
//! ## Value conventions
//! - **Coordinates** are window-relative pixels exactly as the backend reports
//!   them. No DPI or logical-size correction happens here.
//! - **Wheel deltas** are signed per-axis ticks, unscaled.
//! - **Sizes** are the new client-area size in pixels, passed through even when
//!   zero or negative.

use serde::{Deserialize, Serialize};

use crate::keys::KeyCode;

/// Backend constant for a pressed mouse button.
pub const BUTTON_PRESSED: u8 = 1;
/// Backend constant for a released mouse button.
pub const BUTTON_RELEASED: u8 = 0;

/// A typed input event.
///
/// Absence of an event is expressed by the acquisition functions returning
/// `Option::None`, never by a variant of this type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Event {
    /// Application shutdown was requested.
    Quit,

    /// A key changed state. Emitted once per physical press or release;
    /// auto-repeat presses are never reported.
    KeyChange { code: KeyCode, down: bool },

    /// A mouse button went down at `(x, y)`.
    ///
    /// `down` mirrors the button state carried by the record.
    MouseClick { x: i32, y: i32, down: bool },

    /// The mouse wheel scrolled by `(x, y)`.
    MouseWheel { x: i32, y: i32 },

    /// The window client area changed size.
    WindowResized { width: i32, height: i32 },

    /// The window became visible and needs a redraw.
    WindowExposed,

    /// A record this layer does not model.
    Unknown,
}

impl Event {
    #[inline]
    pub fn is_quit(&self) -> bool {
        matches!(self, Event::Quit)
    }
}

/// Window sub-event carried by [`RawEvent::Window`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WindowEventId {
    Resized,
    Exposed,
    /// Any other window sub-event (shown, hidden, moved, focus, ...),
    /// identified by the backend's own id.
    Other(u8),
}

/// One native event record, copied out of the backend.
///
/// Only the fields the classifier inspects are kept.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RawEvent {
    Quit,
    KeyDown { keycode: KeyCode, repeat: bool },
    KeyUp { keycode: KeyCode, repeat: bool },
    Window { event: WindowEventId, data1: i32, data2: i32 },
    MouseButtonDown { x: i32, y: i32, state: u8 },
    MouseButtonUp { x: i32, y: i32, state: u8 },
    MouseWheel { x: i32, y: i32 },
    /// A record type this crate has no dedicated shape for.
    Other { type_tag: u32 },
}

impl RawEvent {
    /// `true` for a key-down record flagged as auto-repeat.
    #[inline]
    pub fn is_key_repeat(&self) -> bool {
        matches!(self, RawEvent::KeyDown { repeat: true, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_repeated_key_down_counts_as_repeat() {
        let code = KeyCode::SPACE;
        assert!(RawEvent::KeyDown { keycode: code, repeat: true }.is_key_repeat());
        assert!(!RawEvent::KeyDown { keycode: code, repeat: false }.is_key_repeat());
        assert!(!RawEvent::KeyUp { keycode: code, repeat: true }.is_key_repeat());
        assert!(!RawEvent::Quit.is_key_repeat());
    }

    #[test]
    fn serializes_with_variant_names() {
        let json = serde_json::to_string(&Event::WindowResized { width: 640, height: 480 })
            .unwrap();
        assert_eq!(json, r#"{"WindowResized":{"width":640,"height":480}}"#);

        let json = serde_json::to_string(&Event::KeyChange { code: KeyCode::Q, down: true })
            .unwrap();
        assert_eq!(json, r#"{"KeyChange":{"code":113,"down":true}}"#);

        let back: Event = serde_json::from_str(r#""Quit""#).unwrap();
        assert!(back.is_quit());
    }
}
