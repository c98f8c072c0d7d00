//! Configuration module for filesets
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (FILESETS_*)
//! 3. Project config (.filesets/config.toml)
//! 4. User config (~/.config/filesets/config.toml)
//! 5. Built-in defaults (lowest priority)

mod env_validator;
mod loader;
mod types;

pub use env_validator::EnvVarValidator;
pub use loader::{ConfigWarning, LoadedConfig, PROJECT_CONFIG_PATH, USER_CONFIG_PATH};
pub use types::{Config, ManifestConfig, OutputConfig, ResolveConfig, Verbosity};
