//! Manifest loading

mod file_source;

pub use file_source::{FileManifestSource, ManifestFormat};
