//! Dependabot configuration document model
//!
//! These types serialize directly to the `dependabot.yml` schema (version 2).
//! Optional fields are omitted rather than written as null, since Dependabot
//! reads a missing `update-types` on an ignore rule as "ignore everything".

use crate::domain::{ScheduleInterval, UpdateType, VersioningStrategy};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Schema version written at the top of every document
pub const CONFIG_VERSION: u8 = 2;

/// Name used by wildcard ignore rules
pub const WILDCARD: &str = "*";

/// Group collecting version updates of production dependencies
pub const PRODUCTION_DEPENDENCIES: &str = "production-dependencies";
/// Group collecting version updates of development dependencies
pub const DEVELOPMENT_DEPENDENCIES: &str = "development-dependencies";
/// Group collecting security updates of production dependencies
pub const PRODUCTION_SECURITY_FIXES: &str = "production-security-fixes";
/// Group collecting security updates of development dependencies
pub const DEVELOPMENT_SECURITY_FIXES: &str = "development-security-fixes";

/// Root of a dependabot.yml document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependabotConfig {
    pub version: u8,
    pub updates: Vec<UpdateConfig>,
}

impl DependabotConfig {
    /// Creates an empty version 2 document
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            updates: Vec::new(),
        }
    }
}

impl Default for DependabotConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Package ecosystem of an update block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageEcosystem {
    Npm,
}

/// Schedule of an update block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Schedule {
    pub interval: ScheduleInterval,
}

/// One entry of `updates`: the settings for a single manifest directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct UpdateConfig {
    pub package_ecosystem: PackageEcosystem,
    pub labels: Vec<String>,
    pub directory: String,
    pub schedule: Schedule,
    pub versioning_strategy: VersioningStrategy,
    pub groups: Groups,
    pub ignore: Vec<IgnoreConfig>,
}

/// Which kind of pull requests a group applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppliesTo {
    SecurityUpdates,
    VersionUpdates,
}

/// Which dependency section a group covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyType {
    Production,
    Development,
}

/// A named bucket of related update pull requests
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct GroupConfig {
    pub applies_to: AppliesTo,
    pub dependency_type: DependencyType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_types: Option<Vec<UpdateType>>,
}

impl GroupConfig {
    /// A version-update group restricted to `update_types`
    pub fn version_updates(dependency_type: DependencyType, update_types: Vec<UpdateType>) -> Self {
        Self {
            applies_to: AppliesTo::VersionUpdates,
            dependency_type,
            update_types: Some(update_types),
        }
    }

    /// A security-update group without an update-types restriction
    pub fn security_updates(dependency_type: DependencyType) -> Self {
        Self {
            applies_to: AppliesTo::SecurityUpdates,
            dependency_type,
            update_types: None,
        }
    }
}

/// Insertion-ordered `groups` mapping
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Groups(Vec<(String, GroupConfig)>);

impl Groups {
    /// Creates an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a group, replacing any group with the same name in place
    pub fn insert(&mut self, name: impl Into<String>, group: GroupConfig) {
        let name = name.into();
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = group,
            None => self.0.push((name, group)),
        }
    }

    /// Look up a group by name
    pub fn get(&self, name: &str) -> Option<&GroupConfig> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, g)| g)
    }

    /// Check whether a group exists
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Group names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(n, _)| n.as_str())
    }
}

impl Serialize for Groups {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, group) in &self.0 {
            map.serialize_entry(name, group)?;
        }
        map.end()
    }
}

/// A rule suppressing update pull requests for a dependency (or `*`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct IgnoreConfig {
    pub dependency_name: String,
    /// Ignored update classes; `None` ignores every update
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_ignore_tags"
    )]
    pub update_types: Option<Vec<UpdateType>>,
}

impl IgnoreConfig {
    /// Ignore all updates of a dependency
    pub fn all(dependency_name: impl Into<String>) -> Self {
        Self {
            dependency_name: dependency_name.into(),
            update_types: None,
        }
    }

    /// Ignore only the given update classes of a dependency
    pub fn for_types(dependency_name: impl Into<String>, update_types: Vec<UpdateType>) -> Self {
        Self {
            dependency_name: dependency_name.into(),
            update_types: Some(update_types),
        }
    }

    /// Ignore one update class for every dependency
    pub fn wildcard(update_type: UpdateType) -> Self {
        Self::for_types(WILDCARD, vec![update_type])
    }
}

fn serialize_ignore_tags<S: Serializer>(
    update_types: &Option<Vec<UpdateType>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match update_types {
        Some(types) => serializer.collect_seq(types.iter().map(UpdateType::ignore_tag)),
        None => serializer.serialize_none(),
    }
}
