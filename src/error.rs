//! Error types.
//!
//! The primary acquisition API of [`EventSource`](crate::source::EventSource)
//! folds backend failures into `None`. These types surface through the
//! `try_*` variants and through configuration loading.

use thiserror::Error;

/// A failure reported by an [`EventBackend`](crate::backend::EventBackend).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    /// The blocking or timed wait call reported failure.
    #[error("backend wait failed: {0}")]
    WaitFailed(String),

    /// The non-blocking poll call reported failure.
    #[error("backend poll failed: {0}")]
    PollFailed(String),

    /// The backend could not hand out its event queue.
    #[error("event backend unavailable: {0}")]
    Unavailable(String),

    /// An indefinite wait was requested but nothing can ever arrive
    /// (e.g. a scripted backend with an exhausted queue).
    #[error("indefinite wait on a backend that can never produce another event")]
    WouldBlockForever,
}

/// A failure while loading a [`SourceConfig`](crate::config::SourceConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}
