/// Interactive menu shell for the habit tracker
///
/// This module implements the read-eval loop that:
/// 1. Presents the numbered menu on the output stream
/// 2. Reads one choice per iteration from the input stream
/// 3. Dispatches to the store and prints the result
///
/// Input and output are generic so tests can script a full session;
/// production wires the loop to stdin and stdout.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use tracing::debug;

use crate::domain::{HabitId, StreakEvent};
use crate::storage::HabitStorage;
use crate::store::{HabitStore, StoreError};

/// Menu-driven shell over a habit store
pub struct Shell<S: HabitStorage, R: BufRead, W: Write> {
    store: HabitStore<S>,
    input: R,
    output: W,
}

impl<S: HabitStorage, R: BufRead, W: Write> Shell<S, R, W> {
    pub fn new(store: HabitStore<S>, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
        }
    }

    /// Run the menu loop until the user quits or the input stream ends
    ///
    /// Every operation runs to completion before the next prompt; there is
    /// nothing concurrent here.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let Some(line) = self.read_line()? else {
                debug!("Input stream closed, leaving menu loop");
                break;
            };
            match line.trim().parse::<u32>() {
                Ok(1) => self.add_habit()?,
                Ok(2) => self.mark_progress()?,
                Ok(3) => {
                    let listing = self.store.view_habits();
                    writeln!(self.output, "\n{}", listing)?;
                }
                Ok(4) => self.delete_habit()?,
                Ok(5) => {
                    let summary = self.store.weekly_summary();
                    writeln!(self.output, "\n{}", summary)?;
                }
                Ok(6) => {
                    writeln!(self.output, "\nExiting...")?;
                    break;
                }
                _ => writeln!(self.output, "\nInvalid choice. Try again.")?,
            }
        }
        Ok(())
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n*** Console Habit Tracker ***")?;
        writeln!(self.output, "1. Add Habit")?;
        writeln!(self.output, "2. Mark Progress")?;
        writeln!(self.output, "3. View Habits")?;
        writeln!(self.output, "4. Delete Habit")?;
        writeln!(self.output, "5. Weekly Summary")?;
        writeln!(self.output, "6. Quit")?;
        write!(self.output, "Enter your choice: ")?;
        self.output.flush()
    }

    fn add_habit(&mut self) -> io::Result<()> {
        let Some(name) = self.prompt("\nEnter habit name: ")? else {
            return Ok(());
        };
        let Some(target) = self.prompt_number::<u32>("Enter target streak: ")? else {
            return Ok(());
        };
        self.store.add_habit(name, target);
        writeln!(self.output, "\nHabit added successfully!")
    }

    fn mark_progress(&mut self) -> io::Result<()> {
        let Some(id) = self.prompt_number::<u64>("\nEnter habit ID to mark progress: ")? else {
            return Ok(());
        };
        let id = HabitId::from(id);
        match self.store.mark_progress(id) {
            Ok(StreakEvent::CycleCompleted) => {
                // The habit survives a completed cycle; only deletion removes it.
                if let Some(habit) = self.store.get(id) {
                    writeln!(
                        self.output,
                        "\nCongratulations! You completed the streak for habit: {}!",
                        habit.name
                    )?;
                }
                Ok(())
            }
            Ok(StreakEvent::Advanced) => Ok(()),
            Err(StoreError::HabitNotFound(_)) => writeln!(self.output, "\nHabit not found!"),
        }
    }

    fn delete_habit(&mut self) -> io::Result<()> {
        let Some(id) = self.prompt_number::<u64>("\nEnter habit ID to delete: ")? else {
            return Ok(());
        };
        match self.store.delete_habit(HabitId::from(id)) {
            Ok(()) => writeln!(self.output, "\nHabit deleted successfully."),
            Err(StoreError::HabitNotFound(_)) => writeln!(self.output, "\nHabit not found!"),
        }
    }

    /// Print a prompt and read one raw line; None when the input stream ends
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Print a prompt and parse the answer as a number
    ///
    /// A non-numeric answer is reported and treated like an abandoned prompt:
    /// the caller returns to the menu.
    fn prompt_number<T: FromStr>(&mut self, text: &str) -> io::Result<Option<T>> {
        let Some(line) = self.prompt(text)? else {
            return Ok(None);
        };
        match line.trim().parse::<T>() {
            Ok(value) => Ok(Some(value)),
            Err(_) => {
                writeln!(self.output, "\nInvalid number.")?;
                Ok(None)
            }
        }
    }

    /// Read one line with the trailing newline stripped; None at end-of-input
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }
}
