//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `manifest/` - File-backed manifest sources (TOML, JSON, YAML)

pub mod manifest;

// Re-export for convenience
pub use manifest::{FileManifestSource, ManifestFormat};
