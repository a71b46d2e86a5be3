use gamevents::backends::VirtualBackend;
use gamevents::{Event, EventBus, EventFilter, EventSource, KeyCode, LogListener};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Create a virtual backend and script a few frames of input
    let mut backend = VirtualBackend::new("virtual:demo");
    backend.resize(800, 600);
    backend.press_key(KeyCode::SPACE);
    backend.repeat_key(KeyCode::SPACE);
    backend.click(120, 80);
    backend.scroll(0, -1);

    let mut events = EventSource::new(backend);

    // Poll the backend and print the classified events
    while let Some(ev) = events.poll_event() {
        match ev {
            Event::KeyChange { code, down } => println!("key {:?} down={}", code, down),
            Event::MouseClick { x, y, down } => println!("click at ({}, {}) down={}", x, y, down),
            Event::MouseWheel { x, y } => println!("wheel ({}, {})", x, y),
            Event::WindowResized { width, height } => println!("resized to {}x{}", width, height),
            Event::WindowExposed => println!("exposed"),
            Event::Quit => println!("quit"),
            Event::Unknown => println!("unknown"),
        }
    }
    println!("space held: {}", events.is_key_pressed(KeyCode::SPACE));

    // Next frame: fan everything out to a logging listener
    let mut bus = EventBus::new();
    bus.add_listener(LogListener::new(), EventFilter::All);
    events.backend_mut().release_key(KeyCode::SPACE);
    events.backend_mut().quit();
    if events.dispatch_pending(&mut bus) {
        println!("quit requested");
    }
}
