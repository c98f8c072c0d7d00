//! ManifestSource port
//!
//! Provides the named lists of a manifest. Reading and parsing happen here,
//! before any resolution; the returned store is never touched again.

use crate::domain::entities::{ManifestError, ManifestStore};

pub trait ManifestSource: Send + Sync {
    /// Load and classify every list of the manifest.
    fn load(&self) -> Result<ManifestStore, ManifestError>;

    /// Human-readable origin for diagnostics (usually a path).
    fn describe(&self) -> String;
}
