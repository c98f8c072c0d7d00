//! filesets - named file-set resolver
//!
//! Manifests describe named, ordered file lists. Entries are literal paths,
//! glob patterns (passed through untouched) or `@name` references to other
//! lists. filesets expands the references into one flat, ordered,
//! duplicate-free list and subtracts exclusion lists, ready to hand to a build
//! or test runner.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

// Re-exports for convenience
pub use application::{assemble, BuildInput, BuildInputRequest, CheckResult, CheckUseCase};
pub use config::{Config, Verbosity};
pub use domain::entities::{ManifestError, ManifestStore, NamedList, ResolveError};
pub use domain::policies::{EntryFilter, SubstringFilter};
pub use domain::ports::ManifestSource;
pub use domain::services::{ResolutionIssue, ResolvedFileSet, Resolver};
pub use domain::value_objects::Entry;
pub use error::{FilesetsError, FilesetsResult};
pub use infrastructure::{FileManifestSource, ManifestFormat};
