//! Scripted in-memory backend.
//!
//! [`VirtualBackend`] holds a FIFO of raw records and a simulated keyboard
//! snapshot. It never blocks: timed waits return immediately (the requested
//! timeouts are recorded for inspection), and an indefinite wait on an empty
//! queue fails with [`BackendError::WouldBlockForever`].

use std::collections::{BTreeSet, VecDeque};
use std::time::Duration;

use crate::backend::EventBackend;
use crate::error::BackendError;
use crate::event::{RawEvent, WindowEventId, BUTTON_PRESSED, BUTTON_RELEASED};
use crate::keys::{default_scancode, KeyCode, Scancode};

#[derive(Default)]
pub struct VirtualBackend {
    name: String,
    queue: VecDeque<RawEvent>,
    held: BTreeSet<Scancode>,
    fail_next: Option<BackendError>,
    timeouts: Vec<Duration>,
}

impl VirtualBackend {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// Inject a raw record at the back of the queue.
    pub fn feed(&mut self, event: RawEvent) {
        self.queue.push_back(event);
    }

    pub fn feed_all(&mut self, events: impl IntoIterator<Item = RawEvent>) {
        self.queue.extend(events);
    }

    pub fn quit(&mut self) {
        self.feed(RawEvent::Quit);
    }

    /// Queue a key-down record and mark the key as held.
    pub fn press_key(&mut self, code: KeyCode) {
        self.feed(RawEvent::KeyDown { keycode: code, repeat: false });
        self.hold_key(code);
    }

    /// Queue an auto-repeat key-down record. The keyboard state is unchanged.
    pub fn repeat_key(&mut self, code: KeyCode) {
        self.feed(RawEvent::KeyDown { keycode: code, repeat: true });
    }

    /// Queue a key-up record and mark the key as released.
    pub fn release_key(&mut self, code: KeyCode) {
        self.feed(RawEvent::KeyUp { keycode: code, repeat: false });
        self.lift_key(code);
    }

    /// Mark a key as held in the keyboard snapshot without queueing anything.
    pub fn hold_key(&mut self, code: KeyCode) {
        if let Some(sc) = default_scancode(code) {
            self.held.insert(sc);
        }
    }

    /// Mark a key as released in the keyboard snapshot without queueing anything.
    pub fn lift_key(&mut self, code: KeyCode) {
        if let Some(sc) = default_scancode(code) {
            self.held.remove(&sc);
        }
    }

    pub fn click(&mut self, x: i32, y: i32) {
        self.feed(RawEvent::MouseButtonDown { x, y, state: BUTTON_PRESSED });
    }

    pub fn unclick(&mut self, x: i32, y: i32) {
        self.feed(RawEvent::MouseButtonUp { x, y, state: BUTTON_RELEASED });
    }

    pub fn scroll(&mut self, x: i32, y: i32) {
        self.feed(RawEvent::MouseWheel { x, y });
    }

    pub fn resize(&mut self, width: i32, height: i32) {
        self.feed(RawEvent::Window { event: WindowEventId::Resized, data1: width, data2: height });
    }

    pub fn expose(&mut self) {
        self.feed(RawEvent::Window { event: WindowEventId::Exposed, data1: 0, data2: 0 });
    }

    /// Make the next wait/poll call fail with `err`.
    pub fn fail_next(&mut self, err: BackendError) {
        self.fail_next = Some(err);
    }

    /// Number of records still queued.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Timeouts passed to [`EventBackend::wait_raw_timeout`], oldest first.
    pub fn timeouts(&self) -> &[Duration] {
        &self.timeouts
    }
}

impl EventBackend for VirtualBackend {
    fn wait_raw(&mut self) -> Result<RawEvent, BackendError> {
        if let Some(err) = self.fail_next.take() {
            return Err(err);
        }
        self.queue.pop_front().ok_or(BackendError::WouldBlockForever)
    }

    fn wait_raw_timeout(&mut self, timeout: Duration) -> Result<Option<RawEvent>, BackendError> {
        self.timeouts.push(timeout);
        if let Some(err) = self.fail_next.take() {
            return Err(err);
        }
        Ok(self.queue.pop_front())
    }

    fn poll_raw(&mut self) -> Result<Option<RawEvent>, BackendError> {
        if let Some(err) = self.fail_next.take() {
            return Err(err);
        }
        Ok(self.queue.pop_front())
    }

    fn scancode_from_key(&self, code: KeyCode) -> Option<Scancode> {
        default_scancode(code)
    }

    fn is_scancode_pressed(&self, scancode: Scancode) -> bool {
        self.held.contains(&scancode)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
