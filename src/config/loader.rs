//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::closest_match;
use crate::error::{FilesetsError, FilesetsResult};

use super::env_validator::EnvVarValidator;
use super::types::{Config, Verbosity};

/// Project config location, relative to the project root.
pub const PROJECT_CONFIG_PATH: &str = ".filesets/config.toml";

/// User config location, relative to the XDG config directory.
pub const USER_CONFIG_PATH: &str = "filesets/config.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Configuration together with where it came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the config was read from; `None` for built-in defaults
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> FilesetsResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

pub(crate) fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> FilesetsResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| FilesetsError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string().trim_end().to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Project config first, then user config, then defaults.
///
/// Environment overrides are applied on top of whichever was found. A config
/// file that exists but does not parse is an error rather than a silent
/// fallback.
pub fn discover(project_root: Option<&Path>) -> FilesetsResult<LoadedConfig> {
    let candidates = project_root
        .map(|root| root.join(PROJECT_CONFIG_PATH))
        .into_iter()
        .chain(dirs_config_dir().map(|dir| dir.join(USER_CONFIG_PATH)));

    for candidate in candidates {
        if candidate.is_file() {
            let (config, warnings) = load_with_warnings(&candidate)?;
            return Ok(LoadedConfig {
                config: with_env_overrides(config),
                source: Some(candidate),
                warnings,
            });
        }
    }

    Ok(LoadedConfig {
        config: with_env_overrides(Config::default()),
        source: None,
        warnings: Vec::new(),
    })
}

/// Apply environment variable overrides (FILESETS_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_env_overrides(config, |name| std::env::var(name).ok(), &mut std::io::stderr())
}

pub(crate) fn apply_env_overrides<F, W>(mut config: Config, lookup: F, warnings: &mut W) -> Config
where
    F: Fn(&str) -> Option<String>,
    W: std::io::Write,
{
    // FILESETS_MANIFEST
    if let Some(path) = lookup("FILESETS_MANIFEST").filter(|p| !p.trim().is_empty()) {
        config.manifest.path = PathBuf::from(path);
    }

    // FILESETS_VERBOSITY
    if let Some(value) = lookup("FILESETS_VERBOSITY") {
        let validator = EnvVarValidator::new("FILESETS_VERBOSITY", Verbosity::VALID_VALUES);
        config.output.verbosity = validator.parse_with_writer(
            &value,
            Verbosity::parse,
            config.output.verbosity,
            warnings,
        );
    }

    // FILESETS_FAIL_ON_ISSUES
    if let Some(value) = lookup("FILESETS_FAIL_ON_ISSUES") {
        let validator = EnvVarValidator::new("FILESETS_FAIL_ON_ISSUES", &["true", "false"]);
        config.resolve.fail_on_issues = validator.parse_with_writer(
            &value,
            parse_bool,
            config.resolve.fail_on_issues,
            warnings,
        );
    }

    config
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Get XDG config directory
fn dirs_config_dir() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "manifest",
        "path",
        "resolve",
        "fail_on_issues",
        "prepend",
        "skip_containing",
        "companion_exclusions",
        "exclude_suffix",
        "output",
        "verbosity",
    ];

    closest_match(unknown, CANDIDATES.iter().copied())
}
