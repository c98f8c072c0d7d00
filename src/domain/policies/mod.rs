//! Domain Policies
//!
//! Caller-supplied rules applied to resolved file sets.

mod entry_filter;

pub use entry_filter::{EntryFilter, SubstringFilter};
