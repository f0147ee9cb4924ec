//! Manifest file loading
//!
//! This module provides functionality to:
//! - Read a package.json from disk
//! - Merge its production and development dependency maps

mod package_json;

pub use package_json::PackageJsonParser;

use crate::domain::Dependency;
use crate::error::ManifestError;
use std::io::ErrorKind;
use std::path::Path;

/// A loaded manifest with its merged dependency list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    /// Merged dependencies, production entries first
    pub dependencies: Vec<Dependency>,
}

impl Manifest {
    /// Read and parse a package.json
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ManifestError::not_found(path),
            _ => ManifestError::read_error(path, e),
        })?;

        Self::from_content(&content, path)
    }

    /// Parse a package.json that has already been read
    pub fn from_content(content: &str, path: &Path) -> Result<Self, ManifestError> {
        let dependencies = PackageJsonParser.parse(content, path)?;
        Ok(Self { dependencies })
    }
}
