/// Domain module containing the core habit entities
///
/// This module defines the Habit entity, its identifier type, and the
/// sequential id allocator the store uses to hand out fresh ids.

pub mod habit;
pub mod types;

// Re-export public types for easy access
pub use habit::*;
pub use types::*;
