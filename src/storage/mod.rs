/// Storage layer for persisting habit records
///
/// This module handles serialization of habits to the flat data file. The
/// backend sits behind a small trait so the store logic stays independent of
/// where the records actually live and tests can point it at temp files.

pub mod flat_file;

// Re-export the main storage types
pub use flat_file::*;

use thiserror::Error;

use crate::domain::Habit;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Trait defining the persistence interface for habit records
///
/// Persistence is whole-file: every save rewrites the complete record set and
/// every load reads it back. That is acceptable here because the data volume
/// is a personal habit list, not a scaled dataset.
pub trait HabitStorage {
    /// Rewrite the backing file with exactly the given habits, truncating any
    /// prior content
    fn save_all<'a, I>(&self, habits: I) -> Result<(), StorageError>
    where
        I: IntoIterator<Item = &'a Habit>;

    /// Read every well-formed record from the backing file
    ///
    /// A missing file yields an empty list, not an error. Reading stops at
    /// end-of-file or at the first record that fails to parse.
    fn load_all(&self) -> Result<Vec<Habit>, StorageError>;
}
