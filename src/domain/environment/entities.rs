pub use super::value_objects::{Humidity, Temperature};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Number of readings kept on screen.
pub const WINDOW_CAPACITY: usize = 60;

/// Domain entity - a single synthetic environment sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub temperature: Temperature,
    pub humidity: Humidity,
    /// Locale time-of-day label captured when the sample was generated.
    pub timestamp: String,
}

impl Reading {
    pub fn new(temperature: Temperature, humidity: Humidity, timestamp: impl Into<String>) -> Self {
        Self { temperature, humidity, timestamp: timestamp.into() }
    }
}

/// Domain entity - bounded FIFO of the most recent readings, oldest first
#[derive(Debug, Clone, PartialEq)]
pub struct ReadingWindow {
    readings: VecDeque<Reading>,
    capacity: usize,
}

impl Default for ReadingWindow {
    fn default() -> Self {
        Self::new(WINDOW_CAPACITY)
    }
}

impl ReadingWindow {
    /// A zero capacity is bumped to 1 so the latest reading is always visible.
    /// Storage grows with the readings, not with `capacity`.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self { readings: VecDeque::with_capacity(capacity.min(WINDOW_CAPACITY) + 1), capacity }
    }

    /// Push `reading` at the back and return the evicted oldest reading, if any.
    pub fn append(&mut self, reading: Reading) -> Option<Reading> {
        self.readings.push_back(reading);
        if self.readings.len() > self.capacity { self.readings.pop_front() } else { None }
    }

    pub fn with_appended(mut self, reading: Reading) -> Self {
        self.append(reading);
        self
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.readings.len() == self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn latest(&self) -> Option<&Reading> {
        self.readings.back()
    }

    pub fn oldest(&self) -> Option<&Reading> {
        self.readings.front()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Reading> + ExactSizeIterator {
        self.readings.iter()
    }
}

impl<'a> IntoIterator for &'a ReadingWindow {
    type Item = &'a Reading;
    type IntoIter = std::collections::vec_deque::Iter<'a, Reading>;

    fn into_iter(self) -> Self::IntoIter {
        self.readings.iter()
    }
}
