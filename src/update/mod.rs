//! Ignore rule judgment for dependencies
//!
//! This module provides:
//! - Range allowance analysis (which bumps a declared range already permits)
//! - Ignore judgment engine that turns allowances and global flags into rules

mod allowance;

pub use allowance::RangeAllowance;

use crate::dependabot::IgnoreConfig;
use crate::domain::{Dependency, GeneratorOptions, UpdateType};
use crate::error::VersionError;
use std::path::Path;

/// Decides which ignore rules a block needs
pub struct UpdateJudge {
    /// Globally enabled update classes, in order major, minor, patch
    enabled: Vec<UpdateType>,
    /// Globally disabled update classes, in order major, minor, patch
    disabled: Vec<UpdateType>,
}

impl UpdateJudge {
    /// Create a judge from the generation options
    pub fn new(options: &GeneratorOptions) -> Self {
        Self {
            enabled: options.enabled_update_types(),
            disabled: options.disabled_update_types(),
        }
    }

    /// Update classes that are enabled globally but not permitted by the range
    ///
    /// Globally disabled classes are never listed; the wildcard rules cover them.
    pub fn ignored_types(&self, allowance: &RangeAllowance) -> Vec<UpdateType> {
        self.enabled
            .iter()
            .copied()
            .filter(|t| !allowance.allows(*t))
            .collect()
    }

    /// Build the ignore rule for one dependency, if it needs one
    ///
    /// `path` is the manifest the dependency came from and only used for errors.
    pub fn judge(
        &self,
        dependency: &Dependency,
        path: &Path,
    ) -> Result<Option<IgnoreConfig>, VersionError> {
        let allowance = RangeAllowance::analyze(&dependency.range)
            .ok_or_else(|| VersionError::coercion(path, &dependency.name, &dependency.range))?;

        let ignored = self.ignored_types(&allowance);

        let rule = match ignored.len() {
            0 => None,
            n if n == UpdateType::all().len() => Some(IgnoreConfig::all(&dependency.name)),
            _ => Some(IgnoreConfig::for_types(&dependency.name, ignored)),
        };

        Ok(rule)
    }

    /// Wildcard rules, one per globally disabled update class
    pub fn wildcard_rules(&self) -> Vec<IgnoreConfig> {
        self.disabled
            .iter()
            .copied()
            .map(IgnoreConfig::wildcard)
            .collect()
    }
}
