use crate::event::Event;
use std::collections::BTreeMap;

/// Trait for reacting to drained events.
pub trait EventListener {
    fn on_event(&mut self, event: &Event);
}

/// Determines which kinds of events a listener wants to receive.
#[derive(Debug, Clone, Copy)]
pub enum EventFilter {
    All,
    KeysOnly,
    MouseOnly,
    WindowOnly,
    Custom(fn(&Event) -> bool),
}

impl EventFilter {
    pub fn accepts(&self, event: &Event) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::KeysOnly => matches!(event, Event::KeyChange { .. }),
            EventFilter::MouseOnly => {
                matches!(event, Event::MouseClick { .. } | Event::MouseWheel { .. })
            }
            EventFilter::WindowOnly => {
                matches!(event, Event::WindowResized { .. } | Event::WindowExposed)
            }
            EventFilter::Custom(f) => f(event),
        }
    }
}

/// Listener with filter and control flag.
struct ListenerEntry {
    listener: Box<dyn EventListener>,
    enabled: bool,
    filter: EventFilter,
}

/// Fans events out to registered listeners.
///
/// Listeners run in registration order.
#[derive(Default)]
pub struct EventBus {
    next_id: u64,
    listeners: BTreeMap<u64, ListenerEntry>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener and returns its id.
    pub fn add_listener(&mut self, listener: impl EventListener + 'static, filter: EventFilter) -> u64 {
        let id = self.next_id;
        self.listeners.insert(
            id,
            ListenerEntry {
                listener: Box::new(listener),
                enabled: true,
                filter,
            },
        );
        self.next_id += 1;
        id
    }

    /// Enables a previously registered listener.
    pub fn enable(&mut self, id: u64) {
        if let Some(entry) = self.listeners.get_mut(&id) {
            entry.enabled = true;
        }
    }

    /// Disables (mutes) a listener without removing it.
    pub fn disable(&mut self, id: u64) {
        if let Some(entry) = self.listeners.get_mut(&id) {
            entry.enabled = false;
        }
    }

    /// Unregisters a listener entirely.
    pub fn remove_listener(&mut self, id: u64) {
        self.listeners.remove(&id);
    }

    /// Emits one event to all active and matching listeners.
    pub fn emit(&mut self, event: &Event) {
        for entry in self.listeners.values_mut() {
            if entry.enabled && entry.filter.accepts(event) {
                entry.listener.on_event(event);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::KeyCode;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Collect(Rc<RefCell<Vec<Event>>>);

    impl EventListener for Collect {
        fn on_event(&mut self, event: &Event) {
            self.0.borrow_mut().push(*event);
        }
    }

    fn emit_sample(bus: &mut EventBus) {
        for ev in [
            Event::KeyChange { code: KeyCode::P, down: true },
            Event::MouseWheel { x: 0, y: -1 },
            Event::WindowExposed,
            Event::Quit,
        ] {
            bus.emit(&ev);
        }
    }

    #[test]
    fn filters_route_by_kind() {
        let keys = Rc::new(RefCell::new(Vec::new()));
        let mouse = Rc::new(RefCell::new(Vec::new()));
        let window = Rc::new(RefCell::new(Vec::new()));
        let mut bus = EventBus::new();
        bus.add_listener(Collect(keys.clone()), EventFilter::KeysOnly);
        bus.add_listener(Collect(mouse.clone()), EventFilter::MouseOnly);
        bus.add_listener(Collect(window.clone()), EventFilter::WindowOnly);

        emit_sample(&mut bus);

        assert_eq!(*keys.borrow(), vec![Event::KeyChange { code: KeyCode::P, down: true }]);
        assert_eq!(*mouse.borrow(), vec![Event::MouseWheel { x: 0, y: -1 }]);
        assert_eq!(*window.borrow(), vec![Event::WindowExposed]);
    }

    #[test]
    fn custom_filter() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut bus = EventBus::new();
        bus.add_listener(Collect(seen.clone()), EventFilter::Custom(Event::is_quit));
        emit_sample(&mut bus);
        assert_eq!(*seen.borrow(), vec![Event::Quit]);
    }

    #[test]
    fn disabled_and_removed_listeners_are_skipped() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut bus = EventBus::new();
        let id = bus.add_listener(Collect(seen.clone()), EventFilter::All);

        bus.disable(id);
        bus.emit(&Event::Quit);
        assert!(seen.borrow().is_empty());

        bus.enable(id);
        bus.emit(&Event::Quit);
        assert_eq!(seen.borrow().len(), 1);

        bus.remove_listener(id);
        bus.emit(&Event::Quit);
        assert_eq!(seen.borrow().len(), 1);
    }
}
