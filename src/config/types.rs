//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::FilesetsResult;

use super::loader::{self, ConfigWarning, LoadedConfig};

/// Manifest location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestConfig {
    /// Relative paths are resolved against the project root
    #[serde(default = "default_manifest_path")]
    pub path: PathBuf,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            path: default_manifest_path(),
        }
    }
}

fn default_manifest_path() -> PathBuf {
    PathBuf::from("filesets.toml")
}

/// How resolved lists are turned into runner input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveConfig {
    /// Treat missing references and cycles as a failed run
    #[serde(default)]
    pub fail_on_issues: bool,

    /// Entries placed before every resolved list
    #[serde(default)]
    pub prepend: Vec<String>,

    /// Drop resolved paths containing any of these substrings
    #[serde(default)]
    pub skip_containing: Vec<String>,

    /// Use `<list><exclude_suffix>` as exclusion list when it exists
    #[serde(default = "default_true")]
    pub companion_exclusions: bool,

    #[serde(default = "default_exclude_suffix")]
    pub exclude_suffix: String,
}

impl Default for ResolveConfig {
    fn default() -> Self {
        Self {
            fail_on_issues: false,
            prepend: Vec::new(),
            skip_containing: Vec::new(),
            companion_exclusions: true,
            exclude_suffix: default_exclude_suffix(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_exclude_suffix() -> String {
    "Exclude".to_string()
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    pub const VALID_VALUES: &'static [&'static str] = &["quiet", "normal", "verbose", "debug"];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "quiet" => Some(Self::Quiet),
            "normal" => Some(Self::Normal),
            "verbose" => Some(Self::Verbose),
            "debug" => Some(Self::Debug),
            _ => None,
        }
    }

    /// Map a `-v` count onto a level (`-v` verbose, `-vv` and up debug).
    pub fn from_count(count: u8) -> Self {
        match count {
            0 => Self::Normal,
            1 => Self::Verbose,
            _ => Self::Debug,
        }
    }

    /// Default `tracing` filter directive for this level.
    pub fn filter_directive(&self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "info",
            Self::Debug => "debug",
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub manifest: ManifestConfig,

    #[serde(default)]
    pub resolve: ResolveConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> FilesetsResult<Self> {
        Ok(Self::load_with_warnings(path)?.0)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> FilesetsResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load project config, else user config, else defaults; then apply
    /// `FILESETS_*` environment overrides.
    pub fn discover(project_root: Option<&Path>) -> FilesetsResult<LoadedConfig> {
        loader::discover(project_root)
    }

    /// Apply environment variable overrides (FILESETS_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Companion exclusion suffix, if companion lookup is enabled.
    pub fn companion_suffix(&self) -> Option<&str> {
        if self.resolve.companion_exclusions && !self.resolve.exclude_suffix.is_empty() {
            Some(&self.resolve.exclude_suffix)
        } else {
            None
        }
    }

    /// Manifest path resolved against `project_root`.
    pub fn manifest_path(&self, project_root: &Path) -> PathBuf {
        if self.manifest.path.is_absolute() {
            self.manifest.path.clone()
        } else {
            project_root.join(&self.manifest.path)
        }
    }
}
