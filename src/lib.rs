/// Public library interface for the console habit tracker
///
/// This module exports the habit store, its flat-file storage backend, and
/// the interactive shell so integration tests can drive a full session the
/// same way the binary does.

// Internal modules
mod domain;
mod shell;
mod storage;
mod store;

// Re-export public modules and types
pub use domain::*;
pub use shell::Shell;
pub use storage::{FlatFileStorage, HabitStorage, StorageError, DEFAULT_DATA_FILE};
pub use store::{HabitStore, StoreError};
