//! Domain Entities
//!
//! - `NamedList` - An ordered list of entries with a unique name
//! - `ManifestStore` - All named lists of one manifest, immutable once built

mod manifest;
mod named_list;

pub use manifest::{ManifestError, ManifestStore, ResolveError};
pub use named_list::NamedList;
