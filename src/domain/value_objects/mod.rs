//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod entry;
pub mod suggest;

pub use entry::{is_glob_pattern, Entry, EntryParseError, REFERENCE_MARKER};
pub use suggest::{closest_match, levenshtein};
