//! File-backed manifest source
//!
//! Reads a manifest from TOML, JSON or YAML. The format is picked from the file
//! extension; every format must be a mapping of list names to string arrays.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};

use crate::domain::entities::{ManifestError, ManifestStore};
use crate::domain::ports::ManifestSource;

/// Maximum manifest size (4MB)
const MAX_FILE_SIZE: u64 = 4 * 1024 * 1024;

/// Serialization format of a manifest file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Toml,
    Json,
    Yaml,
}

/// List names and raw entries in document order.
///
/// Repeated names are kept rather than collapsed, so the store rejects them
/// with `DuplicateList` instead of the last one silently winning.
#[derive(Debug, Default)]
struct RawManifest(Vec<(String, Vec<String>)>);

impl<'de> Deserialize<'de> for RawManifest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RawManifestVisitor;

        impl<'de> Visitor<'de> for RawManifestVisitor {
            type Value = RawManifest;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of list names to arrays of strings")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut lists = Vec::with_capacity(map.size_hint().unwrap_or(0).min(1024));
                while let Some(entry) = map.next_entry::<String, Vec<String>>()? {
                    lists.push(entry);
                }
                Ok(RawManifest(lists))
            }
        }

        deserializer.deserialize_map(RawManifestVisitor)
    }
}

impl ManifestFormat {
    /// Detect the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Toml => "TOML",
            Self::Json => "JSON",
            Self::Yaml => "YAML",
        }
    }

    /// Parse manifest content into a store.
    ///
    /// `path` is only used for error messages.
    pub fn parse(&self, content: &str, path: &Path) -> Result<ManifestStore, ManifestError> {
        let raw: RawManifest = match self {
            Self::Toml => toml::from_str(content).map_err(|e| e.to_string()),
            Self::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            Self::Yaml if content.trim().is_empty() => Ok(RawManifest::default()),
            Self::Yaml => serde_yaml_ng::from_str(content).map_err(|e| e.to_string()),
        }
        .map_err(|message| ManifestError::Parse {
            path: path.to_path_buf(),
            format: self.name(),
            message: message.trim_end().to_string(),
        })?;

        ManifestStore::from_raw(raw.0)
    }
}

/// Loads a manifest from a file on disk.
#[derive(Debug, Clone)]
pub struct FileManifestSource {
    path: PathBuf,
}

impl FileManifestSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ManifestSource for FileManifestSource {
    fn load(&self) -> Result<ManifestStore, ManifestError> {
        let format =
            ManifestFormat::from_path(&self.path).ok_or_else(|| ManifestError::UnsupportedFormat {
                path: self.path.clone(),
            })?;

        let metadata = fs::metadata(&self.path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ManifestError::NotFound {
                path: self.path.clone(),
            },
            _ => ManifestError::Io {
                path: self.path.clone(),
                message: e.to_string(),
            },
        })?;
        if metadata.len() > MAX_FILE_SIZE {
            return Err(ManifestError::Io {
                path: self.path.clone(),
                message: format!(
                    "file is {} bytes, exceeds {}MB limit",
                    metadata.len(),
                    MAX_FILE_SIZE / (1024 * 1024)
                ),
            });
        }

        let content = fs::read_to_string(&self.path).map_err(|e| ManifestError::Io {
            path: self.path.clone(),
            message: e.to_string(),
        })?;

        let store = format.parse(&content, &self.path)?;
        tracing::info!(
            path = %self.path.display(),
            format = format.name(),
            lists = store.len(),
            "loaded manifest"
        );
        Ok(store)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
