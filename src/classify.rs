//! Raw record → [`Event`] classification.
//!
//! Pure and total: every [`RawEvent`] maps to exactly one [`Event`], except
//! key-down records flagged as auto-repeat, which are suppressed (`None`).
//! Callers that need "is the key still held" semantics should use the
//! key-state probe instead of counting repeats.

use crate::event::{Event, RawEvent, WindowEventId, BUTTON_PRESSED};

/// Classify one raw record.
///
/// Returns `None` only for a suppressed key repeat.
pub fn classify(raw: &RawEvent) -> Option<Event> {
    let ev = match *raw {
        RawEvent::Quit => Event::Quit,

        RawEvent::KeyDown { repeat: true, .. } => return None,
        RawEvent::KeyDown { keycode, .. } => Event::KeyChange { code: keycode, down: true },

        // Releases are never flagged as repeats.
        RawEvent::KeyUp { keycode, .. } => Event::KeyChange { code: keycode, down: false },

        RawEvent::Window { event: WindowEventId::Resized, data1, data2 } => {
            Event::WindowResized { width: data1, height: data2 }
        }
        RawEvent::Window { event: WindowEventId::Exposed, .. } => Event::WindowExposed,

        RawEvent::MouseButtonDown { x, y, state } => Event::MouseClick {
            x,
            y,
            down: state == BUTTON_PRESSED,
        },

        RawEvent::MouseWheel { x, y } => Event::MouseWheel { x, y },

        // Button-up is not modeled.
        RawEvent::Window { event: WindowEventId::Other(_), .. }
        | RawEvent::MouseButtonUp { .. }
        | RawEvent::Other { .. } => Event::Unknown,
    };
    Some(ev)
}
