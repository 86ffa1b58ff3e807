//! Pluggable catalog sources.
//!
//! A source hands back raw pack text. The registry compiles it and falls
//! back to the embedded packs if anything goes wrong, so a source never has
//! to worry about partial failure.

use std::path::{Path, PathBuf};

use webcompat_core::errors::CatalogError;

/// Raw text of one pack plus a name for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackText {
    pub name: String,
    pub toml: String,
}

/// Provides feature pack text from somewhere other than the binary.
pub trait CatalogSource: Send + Sync {
    fn name(&self) -> &str;

    fn fetch_packs(&self) -> Result<Vec<PackText>, CatalogError>;
}

/// Reads every `*.toml` file in a directory, sorted by file name.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
    name: String,
}

impl DirectorySource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let name = dir.display().to_string();
        Self { dir, name }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Paths of the pack files, sorted so load order is deterministic.
    pub fn pack_paths(&self) -> Result<Vec<PathBuf>, CatalogError> {
        let entries = std::fs::read_dir(&self.dir).map_err(|e| CatalogError::SourceUnavailable {
            source_name: self.name.clone(),
            message: e.to_string(),
        })?;
        let mut paths: Vec<PathBuf> = entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "toml"))
            .collect();
        paths.sort();
        Ok(paths)
    }
}

impl CatalogSource for DirectorySource {
    fn name(&self) -> &str {
        &self.name
    }

    fn fetch_packs(&self) -> Result<Vec<PackText>, CatalogError> {
        self.pack_paths()?
            .into_iter()
            .map(|path| {
                let toml = std::fs::read_to_string(&path).map_err(|e| CatalogError::Io {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })?;
                Ok(PackText {
                    name: path.display().to_string(),
                    toml,
                })
            })
            .collect()
    }
}

/// In-memory source, handy for embedding alternative data sets.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    packs: Vec<PackText>,
}

impl StaticSource {
    pub fn new(packs: Vec<PackText>) -> Self {
        Self { packs }
    }
}

impl CatalogSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    fn fetch_packs(&self) -> Result<Vec<PackText>, CatalogError> {
        if self.packs.is_empty() {
            return Err(CatalogError::SourceUnavailable {
                source_name: self.name().to_string(),
                message: "no packs provided".to_string(),
            });
        }
        Ok(self.packs.clone())
    }
}
