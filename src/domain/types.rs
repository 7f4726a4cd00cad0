/// Identifier types used throughout the domain layer
///
/// This module defines the HabitId newtype and the sequential allocator
/// that hands out fresh ids for new habits.

use std::fmt;

/// Unique identifier for a habit
///
/// This is a wrapper around the persisted integer id to provide type safety -
/// you can't accidentally pass a menu choice or a loop counter where a
/// habit id is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HabitId(pub u64);

impl HabitId {
    /// Numeric value as it appears in the data file
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for HabitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u64> for HabitId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Sequential id allocator owned by the store
///
/// Ids start at 1 and only move forward, so every id handed out in a process
/// run is strictly greater than the previous one and deleted ids are never
/// reused. After loading persisted habits the allocator is advanced past the
/// highest id found on disk.
#[derive(Debug)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    /// Create an allocator whose first id will be 1
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Hand out the next id and advance the counter
    pub fn allocate(&mut self) -> HabitId {
        let id = HabitId(self.next);
        self.next += 1;
        id
    }

    /// Ensure future allocations land strictly after the given id
    ///
    /// Called once per habit loaded from disk so freshly created habits never
    /// collide with persisted ones.
    pub fn reserve_through(&mut self, id: HabitId) {
        if id.0 >= self.next {
            self.next = id.0 + 1;
        }
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
