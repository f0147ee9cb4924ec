//! Version range handling for npm manifests
//!
//! This module provides:
//! - Coercion of a range string to its concrete base version
//! - npm range parsing and satisfaction checks backed by `semver`

mod coerce;
mod node;

/// Largest version component npm accepts (`Number.MAX_SAFE_INTEGER`)
pub(crate) const MAX_SAFE_COMPONENT: u64 = (1 << 53) - 1;

pub use coerce::coerce;
pub use node::{satisfies, NodeRange};
