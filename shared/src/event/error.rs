use thiserror::Error;

use crate::constants::MAX_EVENT_COUNT;

/// Errors that can occur while allocating event ids
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventIdError {
    /// The reliable counter has handed out every id available to this session
    #[error("Reliable event counter exhausted at {current} (max {max})", max = MAX_EVENT_COUNT)]
    CounterExhausted { current: i32 },

    /// Attempted to allocate from a counter that doesn't hold a reliable or invalid id
    #[error("Can't allocate reliable event ids from a counter holding {current}")]
    NotACounter { current: i32 },
}
