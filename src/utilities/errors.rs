//! Error types for crosslight.

use thiserror::Error;

/// Errors surfaced by the traffic light actor.
///
/// Everything else the light does is infallible by construction: the
/// phase set is closed, the queue is unbounded, and no I/O can fail.
#[derive(Debug, Error)]
pub enum TrafficLightError {
    /// A blocking accessor was interrupted because the light was stopped.
    #[error("traffic light has been stopped")]
    Stopped,

    /// The supplied cycle configuration is unusable.
    #[error("invalid light configuration: {message}")]
    InvalidConfig { message: String },
}
