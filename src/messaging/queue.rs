//! Blocking FIFO message queue.
//!
//! The handoff primitive between a traffic light's cycling thread and
//! the threads blocked waiting for a phase. Producers never block;
//! consumers suspend on a condition variable until a message (or
//! shutdown) arrives.
//!
//! The queue is unbounded. Phase transitions are produced once every
//! few seconds and consumers are expected to keep pace, so there is
//! nothing for backpressure to protect.

use std::collections::VecDeque;

use parking_lot::{Condvar, Mutex};
use thiserror::Error;

/// Error returned by [`MessageQueue::recv`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecvError {
    /// The queue was closed and all remaining messages were drained.
    #[error("message queue is closed")]
    Closed,
}

/// Queue contents, only ever touched with the mutex held.
#[derive(Debug)]
struct QueueState<T> {
    messages: VecDeque<T>,
    closed: bool,
}

/// Unbounded FIFO channel with blocking receive.
///
/// Messages are delivered in send order, each to exactly one receiver.
/// Which of several concurrently blocked receivers gets the next
/// message is up to the condition variable's wake order.
#[derive(Debug)]
pub struct MessageQueue<T> {
    state: Mutex<QueueState<T>>,
    /// Signalled when the queue becomes non-empty or is closed.
    available: Condvar,
}

impl<T> Default for MessageQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MessageQueue<T> {
    /// Create a new empty, open queue.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(QueueState {
                messages: VecDeque::new(),
                closed: false,
            }),
            available: Condvar::new(),
        }
    }

    /// Append a message to the tail of the queue and wake one waiting
    /// receiver. Never blocks.
    ///
    /// Messages sent after [`MessageQueue::close`] are discarded; the
    /// only producer doing that is one racing its own shutdown.
    pub fn send(&self, msg: T) {
        let mut state = self.state.lock();
        if state.closed {
            log::warn!("discarding message sent to a closed queue");
            return;
        }
        state.messages.push_back(msg);
        drop(state);
        self.available.notify_one();
    }

    /// Block until a message is available and return it.
    ///
    /// Messages are moved out in FIFO order. Once the queue has been
    /// closed and drained this returns [`RecvError::Closed`]; until
    /// then an empty queue blocks indefinitely, there is no timeout.
    pub fn recv(&self) -> Result<T, RecvError> {
        let mut state = self.state.lock();
        loop {
            // Re-checked after every wake, so a spurious one just
            // parks the thread again.
            if let Some(msg) = state.messages.pop_front() {
                return Ok(msg);
            }
            if state.closed {
                return Err(RecvError::Closed);
            }
            self.available.wait(&mut state);
        }
    }

    /// Close the queue and wake every blocked receiver.
    ///
    /// Receivers drain any messages still queued before observing
    /// [`RecvError::Closed`]. Closing twice is a no-op.
    pub fn close(&self) {
        let mut state = self.state.lock();
        state.closed = true;
        drop(state);
        self.available.notify_all();
    }

    /// Whether [`MessageQueue::close`] has been called.
    pub fn is_closed(&self) -> bool {
        self.state.lock().closed
    }

    /// Number of messages currently queued.
    pub fn len(&self) -> usize {
        self.state.lock().messages.len()
    }

    /// Check if no messages are queued.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
