/// Flat-file implementation of the habit storage interface
///
/// Records are stored as a concatenation of five-line stanzas, one per habit,
/// fields newline-separated in a fixed order: id, name, target streak,
/// current streak, total progress. There is no header, no versioning, and no
/// escaping; a name containing a newline corrupts parsing of the records that
/// follow it.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::domain::{Habit, HabitId};
use crate::storage::{HabitStorage, StorageError};

/// Default data file, resolved against the working directory
pub const DEFAULT_DATA_FILE: &str = "habits.data";

/// Flat-file storage rooted at a fixed path
pub struct FlatFileStorage {
    path: PathBuf,
}

impl FlatFileStorage {
    /// Create a storage handle for the given data file path
    ///
    /// The file is only touched by save and load calls; a path that does not
    /// exist yet is fine.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path this storage reads and writes
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Write one habit as its five-line record
fn write_record(out: &mut impl Write, habit: &Habit) -> io::Result<()> {
    writeln!(out, "{}", habit.id)?;
    writeln!(out, "{}", habit.name)?;
    writeln!(out, "{}", habit.target_streak)?;
    writeln!(out, "{}", habit.current_streak)?;
    writeln!(out, "{}", habit.total_progress)
}

/// Parse the next five-line record
///
/// Returns None at end-of-file or at the first field that is not well-formed,
/// including a truncated trailing record. Numeric fields tolerate surrounding
/// whitespace; the name line is taken verbatim.
fn read_record(lines: &mut impl Iterator<Item = io::Result<String>>) -> Option<Habit> {
    let id: u64 = lines.next()?.ok()?.trim().parse().ok()?;
    let name = lines.next()?.ok()?;
    let target_streak = lines.next()?.ok()?.trim().parse().ok()?;
    let current_streak = lines.next()?.ok()?.trim().parse().ok()?;
    let total_progress = lines.next()?.ok()?.trim().parse().ok()?;
    Some(Habit::from_existing(
        HabitId::from(id),
        name,
        target_streak,
        current_streak,
        total_progress,
    ))
}

impl HabitStorage for FlatFileStorage {
    fn save_all<'a, I>(&self, habits: I) -> Result<(), StorageError>
    where
        I: IntoIterator<Item = &'a Habit>,
    {
        let mut out = BufWriter::new(File::create(&self.path)?);
        for habit in habits {
            write_record(&mut out, habit)?;
        }
        out.flush()?;
        Ok(())
    }

    fn load_all(&self) -> Result<Vec<Habit>, StorageError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(StorageError::Io(err)),
        };

        let mut lines = BufReader::new(file).lines();
        let mut habits = Vec::new();
        while let Some(habit) = read_record(&mut lines) {
            habits.push(habit);
        }
        tracing::debug!("Loaded {} habit records from {:?}", habits.len(), self.path);
        Ok(habits)
    }
}
