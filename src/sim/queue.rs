//! A bounded FIFO of cars waiting at the intersection.

use crate::intersection::{Direction, Phase, SensorSnapshot};
use log::{debug, warn};
use serde::Serialize;
use std::collections::VecDeque;
use thiserror::Error;

/// Cars the queue holds before refusing new arrivals.
pub const DEFAULT_QUEUE_CAPACITY: usize = 10;

/// Cars that may wait in a single direction at once.
pub const DEFAULT_DIRECTION_LIMIT: usize = 2;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueueError {
    #[error("Queue is full ({capacity} cars)")]
    Full { capacity: usize },

    #[error("Direction {direction} is full (max {limit} cars)")]
    DirectionFull { direction: Direction, limit: usize },
}

/// Waiting cars in arrival order.
///
/// Only the car at the head may leave, so a blocked head holds up every
/// car behind it.
#[derive(Clone, Debug, Serialize)]
pub struct CarQueue {
    capacity: usize,
    direction_limit: usize,
    cars: VecDeque<Direction>,
    counts: [usize; 5],
}

impl CarQueue {
    pub fn new() -> Self {
        Self::with_limits(DEFAULT_QUEUE_CAPACITY, DEFAULT_DIRECTION_LIMIT)
    }

    pub fn with_limits(capacity: usize, direction_limit: usize) -> Self {
        Self {
            capacity,
            direction_limit,
            cars: VecDeque::with_capacity(capacity.min(DEFAULT_QUEUE_CAPACITY)),
            counts: [0; 5],
        }
    }

    /// Add a car at the tail.
    ///
    /// The per-direction limit is checked before the overall capacity.
    pub fn enqueue(&mut self, direction: Direction) -> Result<(), QueueError> {
        if self.count(direction) >= self.direction_limit {
            let err = QueueError::DirectionFull {
                direction,
                limit: self.direction_limit,
            };
            warn!("Cannot add car: {}", err);
            return Err(err);
        }
        if self.is_full() {
            let err = QueueError::Full {
                capacity: self.capacity,
            };
            warn!("Cannot add car: {}", err);
            return Err(err);
        }

        self.cars.push_back(direction);
        self.counts[direction.index()] += 1;
        debug!("car added: {} (total: {} cars)", direction, self.len());
        Ok(())
    }

    /// Release the head car if `phase` lets its direction proceed.
    pub fn try_pass(&mut self, phase: Phase) -> Option<Direction> {
        let head = *self.cars.front()?;
        if !phase.permits(head) {
            return None;
        }

        self.cars.pop_front();
        self.counts[head.index()] -= 1;
        debug!("car passed: {}", head);
        Some(head)
    }

    /// Sensor view of the queue: a direction reads as detected while at
    /// least one of its cars is waiting.
    pub fn snapshot(&self) -> SensorSnapshot {
        Direction::ALL
            .into_iter()
            .fold(SensorSnapshot::clear(), |snapshot, direction| {
                snapshot.with(direction, self.count(direction) > 0)
            })
    }

    pub fn count(&self, direction: Direction) -> usize {
        self.counts[direction.index()]
    }

    pub fn front(&self) -> Option<Direction> {
        self.cars.front().copied()
    }

    pub fn len(&self) -> usize {
        self.cars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.cars.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Waiting cars, head first.
    pub fn iter(&self) -> impl Iterator<Item = Direction> + '_ {
        self.cars.iter().copied()
    }
}

impl Default for CarQueue {
    fn default() -> Self {
        Self::new()
    }
}
