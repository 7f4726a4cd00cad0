/// Habit entity and the streak progression rules
///
/// This module defines the core Habit struct that represents one habit the
/// user wants to track, along with the mark-progress transition that drives
/// its counters.

use std::fmt;

use crate::domain::HabitId;

/// Outcome of marking progress on a habit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakEvent {
    /// The streak advanced without reaching the target
    Advanced,
    /// The streak reached the target and was reset to zero
    CycleCompleted,
}

/// A habit represents something the user wants to do regularly
///
/// Each habit carries a target streak length chosen at creation and two
/// counters: the current consecutive streak, and a lifetime total that is
/// never reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Habit {
    /// Unique identifier, assigned by the store and never reused
    pub id: HabitId,
    /// Display name; free-form text, may contain spaces. Must not contain a
    /// newline, which is the serialization field separator
    pub name: String,
    /// Streak length the user is aiming for; immutable after creation
    pub target_streak: u32,
    /// Consecutive progress marks since creation or the last completed cycle
    pub current_streak: u32,
    /// Lifetime count of progress marks, unaffected by streak resets
    pub total_progress: u32,
}

impl Habit {
    /// Create a new habit with zeroed counters
    ///
    /// The target is taken as given; a zero target is accepted and simply
    /// never triggers the reset-on-equal rule.
    pub fn new(id: HabitId, name: impl Into<String>, target_streak: u32) -> Self {
        Self {
            id,
            name: name.into(),
            target_streak,
            current_streak: 0,
            total_progress: 0,
        }
    }

    /// Rebuild a habit from persisted counters (used when loading records)
    pub fn from_existing(
        id: HabitId,
        name: String,
        target_streak: u32,
        current_streak: u32,
        total_progress: u32,
    ) -> Self {
        Self {
            id,
            name,
            target_streak,
            current_streak,
            total_progress,
        }
    }

    /// Record one unit of progress
    ///
    /// Both counters increment. When the current streak lands exactly on the
    /// target it resets to zero and the completed cycle is reported so the
    /// caller can congratulate the user.
    pub fn mark_progress(&mut self) -> StreakEvent {
        self.current_streak += 1;
        self.total_progress += 1;
        if self.current_streak == self.target_streak {
            self.current_streak = 0;
            StreakEvent::CycleCompleted
        } else {
            StreakEvent::Advanced
        }
    }
}

impl fmt::Display for Habit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Habit ID: {}", self.id)?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Target Streak: {}", self.target_streak)?;
        writeln!(f, "Current Streak: {}", self.current_streak)?;
        write!(f, "Total Progress: {}", self.total_progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_habit_has_zeroed_counters() {
        let habit = Habit::new(HabitId(1), "Morning Run", 5);
        assert_eq!(habit.id, HabitId(1));
        assert_eq!(habit.name, "Morning Run");
        assert_eq!(habit.target_streak, 5);
        assert_eq!(habit.current_streak, 0);
        assert_eq!(habit.total_progress, 0);
    }

    #[test]
    fn test_mark_progress_advances_both_counters() {
        let mut habit = Habit::new(HabitId(1), "Read", 3);
        assert_eq!(habit.mark_progress(), StreakEvent::Advanced);
        assert_eq!(habit.current_streak, 1);
        assert_eq!(habit.total_progress, 1);
    }

    #[test]
    fn test_streak_resets_when_target_reached() {
        let mut habit = Habit::new(HabitId(1), "Exercise", 3);
        assert_eq!(habit.mark_progress(), StreakEvent::Advanced);
        assert_eq!(habit.mark_progress(), StreakEvent::Advanced);
        assert_eq!(habit.mark_progress(), StreakEvent::CycleCompleted);
        assert_eq!(habit.current_streak, 0);
        assert_eq!(habit.total_progress, 3);
    }

    #[test]
    fn test_completion_fires_once_per_target_multiple() {
        let mut habit = Habit::new(HabitId(1), "Meditate", 3);
        let mut completions = 0;
        for _ in 0..9 {
            if habit.mark_progress() == StreakEvent::CycleCompleted {
                completions += 1;
            }
        }
        assert_eq!(completions, 3);
        assert_eq!(habit.current_streak, 0);
        assert_eq!(habit.total_progress, 9);
    }

    #[test]
    fn test_total_progress_survives_resets() {
        let mut habit = Habit::new(HabitId(1), "Stretch", 2);
        for _ in 0..5 {
            habit.mark_progress();
        }
        assert_eq!(habit.total_progress, 5);
        assert_eq!(habit.current_streak, 1);
        assert!(habit.total_progress >= habit.current_streak);
    }

    #[test]
    fn test_target_of_one_completes_every_mark() {
        let mut habit = Habit::new(HabitId(1), "Floss", 1);
        assert_eq!(habit.mark_progress(), StreakEvent::CycleCompleted);
        assert_eq!(habit.mark_progress(), StreakEvent::CycleCompleted);
        assert_eq!(habit.current_streak, 0);
        assert_eq!(habit.total_progress, 2);
    }

    #[test]
    fn test_zero_target_never_completes() {
        // The reset rule is exact equality after an increment, so a zero
        // target leaves the streak counting up forever.
        let mut habit = Habit::new(HabitId(1), "Oddball", 0);
        for _ in 0..4 {
            assert_eq!(habit.mark_progress(), StreakEvent::Advanced);
        }
        assert_eq!(habit.current_streak, 4);
        assert_eq!(habit.total_progress, 4);
    }

    #[test]
    fn test_display_lists_all_five_fields() {
        let habit = Habit::from_existing(HabitId(2), "Read for 30min".to_string(), 7, 4, 11);
        let text = habit.to_string();
        assert_eq!(
            text,
            "Habit ID: 2\nName: Read for 30min\nTarget Streak: 7\nCurrent Streak: 4\nTotal Progress: 11"
        );
    }
}
