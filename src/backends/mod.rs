//! Event backends for `gamevents`.
//!
//! Implementations of [`EventBackend`](crate::backend::EventBackend).
//!
//! # Feature flags
//! - **`sdl`** — enables the SDL2 backend ([`sdl::SdlBackend`]). Requires the
//!   native SDL2 library at link time.
//!
//! The [`virtual_input`] backend is always available and is what the test
//! suite runs against.

pub mod virtual_input;

#[cfg(feature = "sdl")]
#[cfg_attr(docsrs, doc(cfg(feature = "sdl")))]
pub mod sdl;

pub use virtual_input::VirtualBackend;
