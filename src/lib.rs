//! gamevents — typed input events for small 2D games.
//!
//! Turns a windowing backend's raw event stream into a closed [`Event`] type
//! for a render loop: blocking, timed and non-blocking acquisition, a
//! once-per-frame quit drain, key-repeat suppression, and a live
//! "is this key held" query.
//!
//! Window, renderer and backend initialization are the host's business; an
//! already-initialized backend is handed to [`EventSource::new`].

pub mod backend;
pub mod backends;
pub mod classify;
pub mod config;
pub mod error;
pub mod event;
pub mod eventbus;
pub mod keys;
pub mod logger;
pub mod source;

pub use backend::{is_key_pressed, EventBackend};
pub use classify::classify;
pub use config::SourceConfig;
pub use error::{BackendError, ConfigError};
pub use event::*;
pub use eventbus::*;
pub use keys::{KeyCode, Scancode};
pub use logger::LogListener;
pub use source::EventSource;
