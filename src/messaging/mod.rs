//! Thread-safe message passing between the cycling thread and callers.

pub mod queue;

pub use queue::{MessageQueue, RecvError};
