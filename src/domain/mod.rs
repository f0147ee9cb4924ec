//! Core domain models for dependabot-gen
//!
//! This module contains the fundamental types used throughout the application:
//! - Update classes (major/minor/patch) and their Dependabot tags
//! - Generation options with closed versioning/schedule enums
//! - Dependency declarations read from manifests

mod dependency;
mod options;
mod update_type;

pub use dependency::Dependency;
pub use options::{GeneratorOptions, ScheduleInterval, VersioningStrategy};
pub use update_type::UpdateType;
