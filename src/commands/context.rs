//! Shared state for subcommands: effective config and manifest location.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use filesets::config::{Config, LoadedConfig, Verbosity};
use filesets::{FileManifestSource, ManifestSource, ManifestStore};

pub struct CommandContext {
    pub config: Config,
    pub manifest_path: PathBuf,
    pub json: bool,
}

impl CommandContext {
    /// Combine discovered config with CLI flags (CLI wins).
    pub fn new(
        project_root: &Path,
        loaded: LoadedConfig,
        manifest_override: Option<PathBuf>,
        json: bool,
    ) -> Self {
        let mut config = loaded.config;
        if let Some(path) = manifest_override {
            config.manifest.path = path;
        }
        let manifest_path = config.manifest_path(project_root);
        Self {
            config,
            manifest_path,
            json,
        }
    }

    /// Effective verbosity: `-q`/`-v` flags override config.
    pub fn verbosity(config: &Config, verbose: u8, quiet: bool) -> Verbosity {
        if quiet {
            Verbosity::Quiet
        } else if verbose > 0 {
            Verbosity::from_count(verbose)
        } else {
            config.output.verbosity
        }
    }

    pub fn load_store(&self) -> Result<ManifestStore> {
        let source = FileManifestSource::new(&self.manifest_path);
        source
            .load()
            .with_context(|| format!("loading manifest {}", source.describe()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_override_wins_over_config() {
        let ctx = CommandContext::new(
            Path::new("/project"),
            LoadedConfig::default(),
            Some(PathBuf::from("other.json")),
            false,
        );
        assert_eq!(ctx.manifest_path, Path::new("/project").join("other.json"));
    }

    #[test]
    fn default_manifest_is_under_project_root() {
        let ctx = CommandContext::new(Path::new("/project"), LoadedConfig::default(), None, true);
        assert_eq!(ctx.manifest_path, Path::new("/project").join("filesets.toml"));
        assert!(ctx.json);
    }

    #[test]
    fn verbosity_flags_override_config() {
        let mut config = Config::default();
        config.output.verbosity = Verbosity::Debug;
        assert_eq!(CommandContext::verbosity(&config, 0, true), Verbosity::Quiet);
        assert_eq!(CommandContext::verbosity(&config, 1, false), Verbosity::Verbose);
        assert_eq!(CommandContext::verbosity(&config, 0, false), Verbosity::Debug);
    }
}
