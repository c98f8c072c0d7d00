//! Domain Layer
//!
//! The core of filesets - pure resolution logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Named lists and the manifest store
//! - `value_objects/` - Immutable value types (Entry, typo suggestions)
//! - `services/` - The resolver
//! - `policies/` - Caller-supplied entry filters
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Pure Functions** - Resolution is stateless; the store is read-only
//! 3. **Ports & Adapters** - Manifest loading goes through the `ManifestSource` port

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
