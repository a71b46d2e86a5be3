//! SDL2 backend.
//!
//! The SDL context, window and renderer are created and destroyed by the
//! host application. [`SdlBackend`] holds the [`EventPump`] as proof that the
//! event subsystem is initialized on this thread, and reads the native
//! `SDL_Event` records itself through `sdl2::sys`:
//! - a failed `SDL_WaitEvent` becomes [`BackendError::WaitFailed`] instead of
//!   a panic inside `EventPump::wait_event`;
//! - keysyms are copied out as raw integers, so keys unknown to the `sdl2`
//!   `Keycode` enum still pass through unchanged.
//!
//! Key-state queries use SDL's own keycode → scancode table (which follows
//! the active layout).

use std::os::raw::c_int;
use std::time::Duration;

use sdl2::keyboard::{Keycode as SdlKeycode, Scancode as SdlScancode};
use sdl2::sys;
use sdl2::{EventPump, Sdl};

use crate::backend::EventBackend;
use crate::error::BackendError;
use crate::event::{RawEvent, WindowEventId};
use crate::keys::{KeyCode, Scancode};

const QUIT: u32 = sys::SDL_EventType::SDL_QUIT as u32;
const KEYDOWN: u32 = sys::SDL_EventType::SDL_KEYDOWN as u32;
const KEYUP: u32 = sys::SDL_EventType::SDL_KEYUP as u32;
const WINDOWEVENT: u32 = sys::SDL_EventType::SDL_WINDOWEVENT as u32;
const MOUSEBUTTONDOWN: u32 = sys::SDL_EventType::SDL_MOUSEBUTTONDOWN as u32;
const MOUSEBUTTONUP: u32 = sys::SDL_EventType::SDL_MOUSEBUTTONUP as u32;
const MOUSEWHEEL: u32 = sys::SDL_EventType::SDL_MOUSEWHEEL as u32;

const WINDOW_RESIZED: u8 = sys::SDL_WindowEventID::SDL_WINDOWEVENT_RESIZED as u8;
const WINDOW_EXPOSED: u8 = sys::SDL_WindowEventID::SDL_WINDOWEVENT_EXPOSED as u8;

pub struct SdlBackend {
    pump: EventPump,
}

impl SdlBackend {
    /// Take the event pump from an initialized SDL context.
    ///
    /// SDL allows a single live pump; this fails if one already exists.
    pub fn new(sdl: &Sdl) -> Result<Self, BackendError> {
        let pump = sdl.event_pump().map_err(BackendError::Unavailable)?;
        Ok(Self { pump })
    }

    pub fn from_pump(pump: EventPump) -> Self {
        Self { pump }
    }

    pub fn into_pump(self) -> EventPump {
        self.pump
    }
}

fn blank_event() -> sys::SDL_Event {
    // SAFETY: SDL_Event is a plain C union; all-zero is a valid bit pattern.
    unsafe { std::mem::zeroed() }
}

/// `SDL_WaitEvent` returns 0 on failure.
fn wait_status(rc: c_int) -> Result<(), BackendError> {
    if rc == 0 {
        Err(BackendError::WaitFailed(sdl2::get_error()))
    } else {
        Ok(())
    }
}

fn window_event_id(id: u8) -> WindowEventId {
    match id {
        WINDOW_RESIZED => WindowEventId::Resized,
        WINDOW_EXPOSED => WindowEventId::Exposed,
        other => WindowEventId::Other(other),
    }
}

/// Copy the fields we classify on out of a native SDL event.
pub(crate) fn to_raw(ev: &sys::SDL_Event) -> RawEvent {
    // SAFETY: `type_` is the common initial field of every union member, and
    // each arm reads only the member its type tag selects.
    unsafe {
        match ev.type_ {
            QUIT => RawEvent::Quit,
            KEYDOWN => RawEvent::KeyDown {
                keycode: KeyCode(ev.key.keysym.sym),
                repeat: ev.key.repeat != 0,
            },
            KEYUP => RawEvent::KeyUp {
                keycode: KeyCode(ev.key.keysym.sym),
                repeat: ev.key.repeat != 0,
            },
            WINDOWEVENT => RawEvent::Window {
                event: window_event_id(ev.window.event),
                data1: ev.window.data1,
                data2: ev.window.data2,
            },
            MOUSEBUTTONDOWN => RawEvent::MouseButtonDown {
                x: ev.button.x,
                y: ev.button.y,
                state: ev.button.state,
            },
            MOUSEBUTTONUP => RawEvent::MouseButtonUp {
                x: ev.button.x,
                y: ev.button.y,
                state: ev.button.state,
            },
            MOUSEWHEEL => RawEvent::MouseWheel { x: ev.wheel.x, y: ev.wheel.y },
            other => RawEvent::Other { type_tag: other },
        }
    }
}

impl EventBackend for SdlBackend {
    fn wait_raw(&mut self) -> Result<RawEvent, BackendError> {
        let mut ev = blank_event();
        // SAFETY: the pump guarantees SDL's event subsystem is initialized;
        // SDL fills `ev` when it returns 1.
        wait_status(unsafe { sys::SDL_WaitEvent(&mut ev) })?;
        Ok(to_raw(&ev))
    }

    fn wait_raw_timeout(&mut self, timeout: Duration) -> Result<Option<RawEvent>, BackendError> {
        let ms = c_int::try_from(timeout.as_millis()).unwrap_or(c_int::MAX);
        let mut ev = blank_event();
        // SDL reports timeout and failure alike as 0.
        // SAFETY: as in `wait_raw`.
        let rc = unsafe { sys::SDL_WaitEventTimeout(&mut ev, ms) };
        Ok((rc != 0).then(|| to_raw(&ev)))
    }

    fn poll_raw(&mut self) -> Result<Option<RawEvent>, BackendError> {
        let mut ev = blank_event();
        // SAFETY: as in `wait_raw`.
        let rc = unsafe { sys::SDL_PollEvent(&mut ev) };
        Ok((rc != 0).then(|| to_raw(&ev)))
    }

    fn scancode_from_key(&self, code: KeyCode) -> Option<Scancode> {
        let kc = SdlKeycode::from_i32(code.raw())?;
        SdlScancode::from_keycode(kc).map(|sc| Scancode(sc as u32))
    }

    fn is_scancode_pressed(&self, scancode: Scancode) -> bool {
        let Some(sc) = i32::try_from(scancode.0).ok().and_then(SdlScancode::from_i32) else {
            return false;
        };
        self.pump.keyboard_state().is_scancode_pressed(sc)
    }

    fn name(&self) -> &str {
        "sdl2"
    }
}
