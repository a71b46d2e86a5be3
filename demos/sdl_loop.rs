use std::time::Duration;

use gamevents::backends::sdl::SdlBackend;
use gamevents::{Event, EventSource, KeyCode};

fn main() -> Result<(), String> {
    env_logger::init();

    let sdl = sdl2::init()?;
    let video = sdl.video()?;
    let _window = video
        .window("gamevents", 640, 480)
        .resizable()
        .build()
        .map_err(|e| e.to_string())?;

    let backend = SdlBackend::new(&sdl).map_err(|e| e.to_string())?;
    let mut events = EventSource::new(backend);

    loop {
        match events.wait_event_timeout(Duration::from_millis(16)) {
            Some(Event::Quit) | Some(Event::KeyChange { code: KeyCode::ESCAPE, down: true }) => {
                break
            }
            Some(ev) => println!("{:?}", ev),
            None => {}
        }
        if events.is_key_pressed(KeyCode::SPACE) {
            println!("space held");
        }
    }
    Ok(())
}
