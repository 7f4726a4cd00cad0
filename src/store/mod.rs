/// In-memory habit store with persist-on-mutation semantics
///
/// The store owns the full set of habits keyed by id, the id allocator, and
/// the storage backend. Every mutation rewrites the backing file from the
/// current in-memory state; a failed rewrite is reported to the error channel
/// and the mutation stands in memory.

use std::collections::BTreeMap;

use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::domain::{Habit, HabitId, IdAllocator, StreakEvent};
use crate::storage::HabitStorage;

/// Errors that can occur during store operations
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Habit not found: {0}")]
    HabitNotFound(HabitId),
}

/// Keyed collection of habits backed by whole-file persistence
///
/// Iteration order is ascending by id, which is also the display order of the
/// listings.
pub struct HabitStore<S: HabitStorage> {
    habits: BTreeMap<HabitId, Habit>,
    ids: IdAllocator,
    storage: S,
}

impl<S: HabitStorage> HabitStore<S> {
    /// Load the persisted habits and build the store around them
    ///
    /// An absent data file means an empty store. Any other load failure is
    /// reported and the store starts empty as well; neither case is fatal.
    /// Loaded habits keep their stored ids, and the allocator resumes past
    /// the highest of them.
    pub fn open(storage: S) -> Self {
        let loaded = match storage.load_all() {
            Ok(habits) => habits,
            Err(err) => {
                warn!("Unable to load habits, starting empty: {}", err);
                Vec::new()
            }
        };

        let mut habits = BTreeMap::new();
        let mut ids = IdAllocator::new();
        for habit in loaded {
            ids.reserve_through(habit.id);
            habits.insert(habit.id, habit);
        }

        info!("Store opened with {} existing habits", habits.len());
        Self {
            habits,
            ids,
            storage,
        }
    }

    /// Create a habit and persist the updated record set
    ///
    /// Always succeeds. Names are not deduplicated; identity is by id only.
    pub fn add_habit(&mut self, name: impl Into<String>, target_streak: u32) -> HabitId {
        let habit = Habit::new(self.ids.allocate(), name, target_streak);
        let id = habit.id;
        debug!("Created habit '{}' with id {}", habit.name, id);
        self.habits.insert(id, habit);
        self.persist();
        id
    }

    /// Record one unit of progress on the given habit and persist
    ///
    /// An unknown id performs no persistence, avoiding a needless rewrite.
    pub fn mark_progress(&mut self, id: HabitId) -> Result<StreakEvent, StoreError> {
        let habit = self
            .habits
            .get_mut(&id)
            .ok_or(StoreError::HabitNotFound(id))?;
        let event = habit.mark_progress();
        self.persist();
        Ok(event)
    }

    /// Remove the given habit and persist
    ///
    /// Removed ids are never reassigned. An unknown id performs no
    /// persistence.
    pub fn delete_habit(&mut self, id: HabitId) -> Result<(), StoreError> {
        if self.habits.remove(&id).is_none() {
            return Err(StoreError::HabitNotFound(id));
        }
        self.persist();
        Ok(())
    }

    /// Human-readable listing of every habit's full state
    pub fn view_habits(&self) -> String {
        if self.habits.is_empty() {
            return "No habits to display.".to_string();
        }
        let blocks: Vec<String> = self.habits.values().map(|habit| habit.to_string()).collect();
        blocks.join("\n\n")
    }

    /// Progress-focused listing of every habit
    ///
    /// Despite the name this covers all recorded progress; there is no
    /// time-based filtering.
    pub fn weekly_summary(&self) -> String {
        if self.habits.is_empty() {
            return "No habits to summarize.".to_string();
        }
        let mut out = String::from("Weekly Progress Summary:");
        for habit in self.habits.values() {
            out.push_str(&format!(
                "\nHabit: {}\nTotal Progress: {}\nCurrent Streak: {}\n-----------------------------",
                habit.name, habit.total_progress, habit.current_streak
            ));
        }
        out
    }

    /// Look up a habit by id
    pub fn get(&self, id: HabitId) -> Option<&Habit> {
        self.habits.get(&id)
    }

    /// Number of habits currently in the store
    pub fn len(&self) -> usize {
        self.habits.len()
    }

    /// Whether the store holds no habits
    pub fn is_empty(&self) -> bool {
        self.habits.is_empty()
    }

    /// Rewrite the backing file from the current in-memory state
    ///
    /// A failed write is reported and abandoned; the file stays as it was
    /// until the next successful save, with no rollback of in-memory state.
    fn persist(&self) {
        if let Err(err) = self.storage.save_all(self.habits.values()) {
            error!("Unable to save habits: {}", err);
        }
    }
}
