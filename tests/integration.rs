/// End-to-end tests driving the habit tracker the way the binary does
use std::io::Cursor;
use std::path::Path;

use habit_tracker::{FlatFileStorage, HabitId, HabitStore, Shell, StreakEvent};
use tempfile::tempdir;

fn open_store(path: &Path) -> HabitStore<FlatFileStorage> {
    HabitStore::open(FlatFileStorage::new(path))
}

/// Run one scripted console session against the given data file
fn run_session(path: &Path, script: &str) -> String {
    let store = open_store(path);
    let mut output = Vec::new();
    let mut shell = Shell::new(store, Cursor::new(script), &mut output);
    shell.run().expect("shell session failed");
    drop(shell);
    String::from_utf8(output).expect("shell output was not UTF-8")
}

#[test]
fn test_exercise_scenario_through_the_store() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("habits.data");
    let mut store = open_store(&path);

    // Create habit "Exercise" with target 3
    let id = store.add_habit("Exercise", 3);
    assert_eq!(id, HabitId(1));
    let habit = store.get(id).unwrap();
    assert_eq!(habit.current_streak, 0);
    assert_eq!(habit.total_progress, 0);

    // Mark progress three times; the third mark completes the cycle
    assert_eq!(store.mark_progress(id).unwrap(), StreakEvent::Advanced);
    assert_eq!(store.mark_progress(id).unwrap(), StreakEvent::Advanced);
    assert_eq!(store.mark_progress(id).unwrap(), StreakEvent::CycleCompleted);

    let habit = store.get(id).unwrap();
    assert_eq!(habit.current_streak, 0);
    assert_eq!(habit.total_progress, 3);

    // Delete it; the store and the file both end up empty
    store.delete_habit(id).unwrap();
    assert!(store.is_empty());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
}

#[test]
fn test_round_trip_preserves_every_field() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("habits.data");

    let mut store = open_store(&path);
    let run = store.add_habit("Morning Run", 3);
    let read = store.add_habit("Read for 30min", 7);
    store.mark_progress(run).unwrap();
    store.mark_progress(run).unwrap();
    store.mark_progress(read).unwrap();
    let expected: Vec<_> = [run, read]
        .iter()
        .map(|id| store.get(*id).unwrap().clone())
        .collect();
    drop(store);

    let reopened = open_store(&path);
    assert_eq!(reopened.len(), 2);
    for habit in &expected {
        assert_eq!(reopened.get(habit.id), Some(habit));
    }
}

#[test]
fn test_ids_continue_across_runs() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("habits.data");

    let mut store = open_store(&path);
    store.add_habit("Run", 3);
    store.add_habit("Read", 5);
    drop(store);

    let mut reopened = open_store(&path);
    let next = reopened.add_habit("Meditate", 2);
    assert_eq!(next, HabitId(3));
}

#[test]
fn test_console_session_persists_across_restarts() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("habits.data");

    // First session: add a habit and mark it once
    let output = run_session(&path, "1\nExercise\n3\n2\n1\n6\n");
    assert!(output.contains("Habit added successfully!"));
    assert!(output.contains("Exiting..."));

    // Second session: the habit is still there with its progress
    let output = run_session(&path, "3\n6\n");
    assert!(output.contains("Habit ID: 1"));
    assert!(output.contains("Name: Exercise"));
    assert!(output.contains("Current Streak: 1"));
    assert!(output.contains("Total Progress: 1"));
}

#[test]
fn test_console_session_completes_a_streak() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("habits.data");

    let output = run_session(&path, "1\nExercise\n3\n2\n1\n2\n1\n2\n1\n3\n6\n");

    assert!(output.contains("Congratulations! You completed the streak for habit: Exercise!"));
    assert!(output.contains("Current Streak: 0"));
    assert!(output.contains("Total Progress: 3"));
}

#[test]
fn test_fresh_data_file_starts_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("habits.data");

    let output = run_session(&path, "3\n5\n6\n");

    assert!(output.contains("No habits to display."));
    assert!(output.contains("No habits to summarize."));
}
