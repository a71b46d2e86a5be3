//! Event acquisition.
//!
//! [`EventSource`] wraps an [`EventBackend`] and hands out classified
//! [`Event`]s in queue order. It offers three acquisition modes plus a
//! once-per-frame drain:
//!
//! | call | blocks | `None` means |
//! |---|---|---|
//! | [`wait_event`](EventSource::wait_event) | until an event arrives | backend failure |
//! | [`wait_event_timeout`](EventSource::wait_event_timeout) | up to the timeout | expiry or failure |
//! | [`poll_event`](EventSource::poll_event) | never | empty queue or failure |
//! | [`drain_for_quit`](EventSource::drain_for_quit) | never | (returns `bool`) |
//!
//! Auto-repeat key presses are skipped inside every mode: the call keeps
//! acquiring and returns the next real event instead.
//!
//! The primary API folds backend failures into `None`. The `try_*` variants
//! return the [`BackendError`] instead, for callers that need to tell an empty
//! queue from a broken backend.
//!
//! # Threading
//! Everything here must run on the thread that owns the window. Waits block
//! that thread; there is no cancellation other than
//! [`wait_event_until`](EventSource::wait_event_until), which waits in short
//! slices and checks a stop condition between them.
//!
//! # Example
//! ```
//! use gamevents::backends::VirtualBackend;
//! use gamevents::{Event, EventSource, KeyCode};
//!
//! let mut backend = VirtualBackend::new("virtual:doc");
//! backend.press_key(KeyCode::SPACE);
//! backend.repeat_key(KeyCode::SPACE);
//! backend.quit();
//!
//! let mut events = EventSource::new(backend);
//! assert_eq!(
//!     events.poll_event(),
//!     Some(Event::KeyChange { code: KeyCode::SPACE, down: true })
//! );
//! assert!(events.is_key_pressed(KeyCode::SPACE));
//! assert!(events.drain_for_quit());
//! assert_eq!(events.poll_event(), None);
//! ```

use std::time::{Duration, Instant};

use crate::backend::{self, EventBackend};
use crate::classify::classify;
use crate::config::SourceConfig;
use crate::error::BackendError;
use crate::event::{Event, RawEvent};
use crate::eventbus::EventBus;
use crate::keys::KeyCode;

pub struct EventSource<B> {
    backend: B,
    config: SourceConfig,
}

impl<B: EventBackend> EventSource<B> {
    pub fn new(backend: B) -> Self {
        Self::with_config(backend, SourceConfig::default())
    }

    pub fn with_config(backend: B, config: SourceConfig) -> Self {
        Self { backend, config }
    }

    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Classify a dequeued record. `None` for a suppressed repeat.
    fn accept(&self, raw: &RawEvent) -> Option<Event> {
        let ev = classify(raw);
        match ev {
            None => log::debug!("{}: suppressed key repeat {:?}", self.backend.name(), raw),
            Some(Event::Unknown) if self.config.log_unknown => {
                log::trace!("{}: unhandled record {:?}", self.backend.name(), raw)
            }
            _ => {}
        }
        ev
    }

    fn collapse<T>(&self, op: &str, res: Result<Option<T>, BackendError>) -> Option<T> {
        res.unwrap_or_else(|err| {
            log::warn!("{}: {} failed, reporting no event: {}", self.backend.name(), op, err);
            None
        })
    }

    /// Block until the next event. Fails only if the backend wait fails.
    pub fn try_wait_event(&mut self) -> Result<Event, BackendError> {
        loop {
            let raw = self.backend.wait_raw()?;
            if let Some(ev) = self.accept(&raw) {
                return Ok(ev);
            }
        }
    }

    /// Block up to `timeout` for the next event. `Ok(None)` on expiry.
    ///
    /// Skipped repeats do not extend the total wait.
    pub fn try_wait_event_timeout(&mut self, timeout: Duration) -> Result<Option<Event>, BackendError> {
        let deadline = Instant::now().checked_add(timeout);
        let mut remaining = timeout;
        loop {
            let Some(raw) = self.backend.wait_raw_timeout(remaining)? else {
                return Ok(None);
            };
            if let Some(ev) = self.accept(&raw) {
                return Ok(Some(ev));
            }
            if let Some(deadline) = deadline {
                remaining = deadline.saturating_duration_since(Instant::now());
            }
        }
    }

    /// Dequeue the next event without blocking. `Ok(None)` if the queue is empty.
    pub fn try_poll_event(&mut self) -> Result<Option<Event>, BackendError> {
        loop {
            let Some(raw) = self.backend.poll_raw()? else {
                return Ok(None);
            };
            if let Some(ev) = self.accept(&raw) {
                return Ok(Some(ev));
            }
        }
    }

    /// Block until the next event. `None` only if the backend wait fails.
    pub fn wait_event(&mut self) -> Option<Event> {
        let res = self.try_wait_event().map(Some);
        self.collapse("wait", res)
    }

    /// Block up to `timeout`. `None` on expiry or backend failure.
    ///
    /// A zero timeout behaves as [`poll_event`](Self::poll_event).
    pub fn wait_event_timeout(&mut self, timeout: Duration) -> Option<Event> {
        let res = self.try_wait_event_timeout(timeout);
        self.collapse("timed wait", res)
    }

    /// Next queued event, or `None` if the queue is empty or the poll fails.
    pub fn poll_event(&mut self) -> Option<Event> {
        let res = self.try_poll_event();
        self.collapse("poll", res)
    }

    /// Wait for the next event in slices of
    /// [`SourceConfig::wait_slice`], returning `None` as soon as `stop`
    /// returns `true` (checked before each slice) or the backend fails.
    pub fn wait_event_until(&mut self, mut stop: impl FnMut() -> bool) -> Option<Event> {
        let slice = self.config.wait_slice();
        while !stop() {
            match self.try_wait_event_timeout(slice) {
                Ok(Some(ev)) => return Some(ev),
                Ok(None) => {}
                Err(err) => return self.collapse("timed wait", Err(err)),
            }
        }
        None
    }

    /// Poll until the queue is empty, discarding everything. Returns `true`
    /// if a [`Event::Quit`] was among the drained events.
    ///
    /// Use [`poll_event`](Self::poll_event) or
    /// [`dispatch_pending`](Self::dispatch_pending) to keep the other events.
    pub fn drain_for_quit(&mut self) -> bool {
        let mut quit = false;
        while let Some(ev) = self.poll_event() {
            if ev.is_quit() {
                quit = true;
            } else {
                log::debug!("{}: drained {:?}", self.backend.name(), ev);
            }
        }
        quit
    }

    /// Like [`drain_for_quit`](Self::drain_for_quit), but emits every drained
    /// event on `bus` (oldest first) instead of discarding it.
    pub fn dispatch_pending(&mut self, bus: &mut EventBus) -> bool {
        let mut quit = false;
        while let Some(ev) = self.poll_event() {
            quit |= ev.is_quit();
            bus.emit(&ev);
        }
        quit
    }

    /// Is `code` held right now? Reads the live keyboard state, not the queue.
    pub fn is_key_pressed(&self, code: KeyCode) -> bool {
        backend::is_key_pressed(&self.backend, code)
    }
}
