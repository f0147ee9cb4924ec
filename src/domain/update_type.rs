//! Semantic version update classes

use serde::{Deserialize, Serialize};
use std::fmt;

/// A category of semantic version change
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateType {
    /// Bump of the major component (e.g., 1.4.2 -> 2.0.0)
    Major,
    /// Bump of the minor component (e.g., 1.4.2 -> 1.5.0)
    Minor,
    /// Bump of the patch component (e.g., 1.4.2 -> 1.4.3)
    Patch,
}

impl UpdateType {
    /// Returns all update types in canonical order (major, minor, patch)
    pub fn all() -> &'static [UpdateType] {
        &[UpdateType::Major, UpdateType::Minor, UpdateType::Patch]
    }

    /// Returns the tag used in group `update-types`
    pub fn group_tag(&self) -> &'static str {
        match self {
            UpdateType::Major => "major",
            UpdateType::Minor => "minor",
            UpdateType::Patch => "patch",
        }
    }

    /// Returns the tag used in ignore rule `update-types`
    pub fn ignore_tag(&self) -> &'static str {
        match self {
            UpdateType::Major => "version-update:semver-major",
            UpdateType::Minor => "version-update:semver-minor",
            UpdateType::Patch => "version-update:semver-patch",
        }
    }

    /// Returns the next version of this class after `base`
    ///
    /// Lower components are reset to zero and prerelease/build metadata is dropped.
    pub fn bump(&self, base: &semver::Version) -> semver::Version {
        match self {
            UpdateType::Major => semver::Version::new(base.major + 1, 0, 0),
            UpdateType::Minor => semver::Version::new(base.major, base.minor + 1, 0),
            UpdateType::Patch => semver::Version::new(base.major, base.minor, base.patch + 1),
        }
    }
}

impl fmt::Display for UpdateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.group_tag())
    }
}
