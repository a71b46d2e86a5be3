//! The windowing/input backend seam.
//!
//! An [`EventBackend`] owns the native event queue and keyboard snapshot. It is
//! initialized and torn down elsewhere; this crate only reads from it, always
//! from the thread that owns the window.

use std::time::Duration;

use crate::error::BackendError;
use crate::event::RawEvent;
use crate::keys::{KeyCode, Scancode};

pub trait EventBackend {
    /// Block until a record is available.
    fn wait_raw(&mut self) -> Result<RawEvent, BackendError>;

    /// Block for at most `timeout`. `Ok(None)` means the timeout expired.
    fn wait_raw_timeout(&mut self, timeout: Duration) -> Result<Option<RawEvent>, BackendError>;

    /// Dequeue the next record without blocking. `Ok(None)` means the queue
    /// is empty.
    fn poll_raw(&mut self) -> Result<Option<RawEvent>, BackendError>;

    /// Translate a logical key into a hardware scan code.
    fn scancode_from_key(&self, code: KeyCode) -> Option<Scancode>;

    /// Read the live keyboard snapshot for one scan code.
    fn is_scancode_pressed(&self, scancode: Scancode) -> bool;

    /// Human-readable backend name, used in log lines.
    fn name(&self) -> &str;
}

/// Is `code` held right now, according to the backend's live keyboard state?
///
/// Does not touch the event queue. Keys the backend cannot map to a scan code
/// are reported as not pressed.
pub fn is_key_pressed<B: EventBackend + ?Sized>(backend: &B, code: KeyCode) -> bool {
    match backend.scancode_from_key(code) {
        Some(sc) => backend.is_scancode_pressed(sc),
        None => {
            log::debug!("{}: no scancode for key {:?}", backend.name(), code);
            false
        }
    }
}
