//! Traffic simulation that stands in for the physical vehicle sensors.

mod queue;

pub use queue::{CarQueue, QueueError, DEFAULT_DIRECTION_LIMIT, DEFAULT_QUEUE_CAPACITY};
