//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ManifestError: Issues with reading or parsing package.json
//! - VersionError: Version ranges that cannot be coerced to a base version
//! - OutputError: Failures rendering or writing dependabot.yml

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Manifest file related errors
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Version range related errors
    #[error(transparent)]
    Version(#[from] VersionError),

    /// Output related errors
    #[error(transparent)]
    Output(#[from] OutputError),
}

/// Errors related to manifest file operations
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Manifest file not found
    #[error("manifest file not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read manifest file
    #[error("failed to read manifest file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing error
    #[error("failed to parse JSON in {path}: {message}")]
    JsonParseError { path: PathBuf, message: String },
}

/// Errors related to version ranges
#[derive(Error, Debug)]
pub enum VersionError {
    /// The declared range has no base version to bump from
    #[error("couldn't convert '{range}' to valid SemVer (dependency '{dependency}' in {path})")]
    Coercion {
        path: PathBuf,
        dependency: String,
        range: String,
    },
}

/// Errors related to producing dependabot.yml
#[derive(Error, Debug)]
pub enum OutputError {
    /// YAML serialization failed
    #[error("failed to serialize config: {message}")]
    Serialize { message: String },

    /// Output directory could not be created
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file could not be written
    #[error("failed to write config file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ManifestError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        ManifestError::NotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new JsonParseError
    pub fn json_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ManifestError::JsonParseError {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl VersionError {
    /// Creates a new Coercion error
    pub fn coercion(
        path: impl Into<PathBuf>,
        dependency: impl Into<String>,
        range: impl Into<String>,
    ) -> Self {
        VersionError::Coercion {
            path: path.into(),
            dependency: dependency.into(),
            range: range.into(),
        }
    }
}

impl OutputError {
    /// Creates a new Serialize error
    pub fn serialize(message: impl Into<String>) -> Self {
        OutputError::Serialize {
            message: message.into(),
        }
    }

    /// Creates a new CreateDir error
    pub fn create_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        OutputError::CreateDir {
            path: path.into(),
            source,
        }
    }

    /// Creates a new Write error
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        OutputError::Write {
            path: path.into(),
            source,
        }
    }
}
