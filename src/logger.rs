use crate::event::Event;
use crate::eventbus::EventListener;

/// A listener that logs every event it receives at `info` level.
#[derive(Default)]
pub struct LogListener;

impl LogListener {
    pub fn new() -> Self {
        LogListener
    }
}

impl EventListener for LogListener {
    fn on_event(&mut self, event: &Event) {
        log::info!("[Input] {:?}", event);
    }
}
