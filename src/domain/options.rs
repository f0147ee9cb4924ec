//! Generation options supplied once per invocation

use super::UpdateType;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How Dependabot should edit manifest version requirements
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum VersioningStrategy {
    /// Let Dependabot pick a strategy per ecosystem
    Auto,
    /// Always raise the minimum version
    #[default]
    Increase,
    /// Raise the minimum version only when the range no longer allows the update
    IncreaseIfNecessary,
    /// Only touch lockfiles
    LockfileOnly,
    /// Widen the range to include both old and new versions
    Widen,
}

impl VersioningStrategy {
    /// Returns the value as written in dependabot.yml
    pub fn as_str(&self) -> &'static str {
        match self {
            VersioningStrategy::Auto => "auto",
            VersioningStrategy::Increase => "increase",
            VersioningStrategy::IncreaseIfNecessary => "increase-if-necessary",
            VersioningStrategy::LockfileOnly => "lockfile-only",
            VersioningStrategy::Widen => "widen",
        }
    }
}

impl fmt::Display for VersioningStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How often Dependabot looks for version updates
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleInterval {
    Daily,
    #[default]
    Weekly,
    Monthly,
}

impl ScheduleInterval {
    /// Returns the value as written in dependabot.yml
    pub fn as_str(&self) -> &'static str {
        match self {
            ScheduleInterval::Daily => "daily",
            ScheduleInterval::Weekly => "weekly",
            ScheduleInterval::Monthly => "monthly",
        }
    }
}

impl fmt::Display for ScheduleInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Options controlling config generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Comma separated labels attached to every pull request
    pub labels: String,
    /// Allow major updates globally
    pub major_updates: bool,
    /// Allow minor updates globally
    pub minor_updates: bool,
    /// Allow patch updates globally
    pub patch_updates: bool,
    /// Put security fixes into their own production/development groups
    pub separate_security_fixes: bool,
    /// Versioning strategy written verbatim into each block
    pub versioning_strategy: VersioningStrategy,
    /// Schedule interval written verbatim into each block
    pub schedule_interval: ScheduleInterval,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            labels: "dependencies".to_string(),
            major_updates: true,
            minor_updates: true,
            patch_updates: true,
            separate_security_fixes: true,
            versioning_strategy: VersioningStrategy::default(),
            schedule_interval: ScheduleInterval::default(),
        }
    }
}

impl GeneratorOptions {
    /// Create options with the same defaults as the CLI
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the comma separated labels
    pub fn with_labels(mut self, labels: impl Into<String>) -> Self {
        self.labels = labels.into();
        self
    }

    /// Enable or disable a single update class
    pub fn with_update_type(mut self, update_type: UpdateType, enabled: bool) -> Self {
        match update_type {
            UpdateType::Major => self.major_updates = enabled,
            UpdateType::Minor => self.minor_updates = enabled,
            UpdateType::Patch => self.patch_updates = enabled,
        }
        self
    }

    /// Set whether security fixes get their own groups
    pub fn with_separate_security_fixes(mut self, separate: bool) -> Self {
        self.separate_security_fixes = separate;
        self
    }

    /// Set the versioning strategy
    pub fn with_versioning_strategy(mut self, strategy: VersioningStrategy) -> Self {
        self.versioning_strategy = strategy;
        self
    }

    /// Set the schedule interval
    pub fn with_schedule_interval(mut self, interval: ScheduleInterval) -> Self {
        self.schedule_interval = interval;
        self
    }

    /// Check whether an update class is globally enabled
    pub fn is_enabled(&self, update_type: UpdateType) -> bool {
        match update_type {
            UpdateType::Major => self.major_updates,
            UpdateType::Minor => self.minor_updates,
            UpdateType::Patch => self.patch_updates,
        }
    }

    /// Globally enabled update classes in order major, minor, patch
    pub fn enabled_update_types(&self) -> Vec<UpdateType> {
        UpdateType::all()
            .iter()
            .copied()
            .filter(|t| self.is_enabled(*t))
            .collect()
    }

    /// Globally disabled update classes in order major, minor, patch
    pub fn disabled_update_types(&self) -> Vec<UpdateType> {
        UpdateType::all()
            .iter()
            .copied()
            .filter(|t| !self.is_enabled(*t))
            .collect()
    }

    /// Labels split on commas, kept verbatim
    pub fn label_list(&self) -> Vec<String> {
        self.labels.split(',').map(str::to_string).collect()
    }
}
