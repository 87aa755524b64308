//! Identifier and clock collaborators
//!
//! The engine needs two things from its host: a source of unique opaque
//! identifiers and the current time. Both are traits so tests can supply
//! deterministic versions. Plain closures implement either trait.

use chrono::{DateTime, Duration, Utc};
use std::cell::Cell;
use uuid::Uuid;

/// Source of identifiers unique for the lifetime of the process
pub trait IdProvider {
    fn next_id(&mut self) -> String;
}

impl<F> IdProvider for F
where
    F: FnMut() -> String,
{
    fn next_id(&mut self) -> String {
        self()
    }
}

/// Random UUID v4 identifiers
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdProvider;

impl IdProvider for UuidIdProvider {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Predictable identifiers: `{prefix}-1`, `{prefix}-2`, ...
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new("id")
    }
}

impl IdProvider for SequentialIds {
    fn next_id(&mut self) -> String {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

/// Source of the current time
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

impl<F> Clock for F
where
    F: Fn() -> DateTime<Utc>,
{
    fn now(&self) -> DateTime<Utc> {
        self()
    }
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock stopped at one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// A clock that advances by a fixed interval every time it is read
#[derive(Debug, Clone)]
pub struct TickingClock {
    start: DateTime<Utc>,
    interval: Duration,
    reads: Cell<i32>,
}

impl TickingClock {
    pub fn new(start: DateTime<Utc>, interval: Duration) -> Self {
        Self {
            start,
            interval,
            reads: Cell::new(0),
        }
    }
}

impl Clock for TickingClock {
    fn now(&self) -> DateTime<Utc> {
        let reads = self.reads.get();
        self.reads.set(reads + 1);
        self.start + self.interval * reads
    }
}
