//! Which update classes a declared range already permits
//!
//! The range is coerced to a base version, each class is bumped once from
//! that base, and the bumped version is tested against the declared range.

use crate::domain::UpdateType;
use crate::parser::{coerce, NodeRange};

/// Update classes permitted by a single declared range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeAllowance {
    /// Whether the base version bumped by major satisfies the range
    major: bool,
    /// Whether the base version bumped by minor satisfies the range
    minor: bool,
    /// Whether the base version bumped by patch satisfies the range
    patch: bool,
}

impl RangeAllowance {
    /// Analyze a range string; returns `None` when it cannot be coerced
    pub fn analyze(range: &str) -> Option<Self> {
        let base = coerce(range)?;
        let parsed = NodeRange::parse(range);
        let allows = |update_type: UpdateType| {
            parsed
                .as_ref()
                .is_some_and(|r| r.matches(&update_type.bump(&base)))
        };

        Some(Self {
            major: allows(UpdateType::Major),
            minor: allows(UpdateType::Minor),
            patch: allows(UpdateType::Patch),
        })
    }

    /// Check whether an update class is permitted
    pub fn allows(&self, update_type: UpdateType) -> bool {
        match update_type {
            UpdateType::Major => self.major,
            UpdateType::Minor => self.minor,
            UpdateType::Patch => self.patch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allowance(range: &str) -> (bool, bool, bool) {
        let a = RangeAllowance::analyze(range).unwrap();
        (a.major, a.minor, a.patch)
    }

    #[test]
    fn test_exact_pin_allows_nothing() {
        assert_eq!(allowance("13.0.0"), (false, false, false));
    }

    #[test]
    fn test_caret_allows_minor_and_patch() {
        assert_eq!(allowance("^13.0.0"), (false, true, true));
    }

    #[test]
    fn test_tilde_allows_patch() {
        assert_eq!(allowance("~13.0.0"), (false, false, true));
    }

    #[test]
    fn test_caret_zero_minor_allows_patch_only() {
        assert_eq!(allowance("^0.4.1"), (false, false, true));
    }

    #[test]
    fn test_caret_zero_zero_allows_nothing() {
        assert_eq!(allowance("^0.0.3"), (false, false, false));
    }

    #[test]
    fn test_open_lower_bound_allows_everything() {
        assert_eq!(allowance(">=1.2.3"), (true, true, true));
    }

    #[test]
    fn test_major_wildcard() {
        assert_eq!(allowance("1.x"), (false, true, true));
    }

    #[test]
    fn test_union_range() {
        assert_eq!(allowance("^1.0.0 || ^2.0.0"), (true, true, true));
    }

    #[test]
    fn test_unparsable_range_allows_nothing() {
        let a = RangeAllowance::analyze("npm:lodash@^4.17.0").unwrap();
        assert!(!a.allows(UpdateType::Major));
        assert!(!a.allows(UpdateType::Minor));
        assert!(!a.allows(UpdateType::Patch));
    }

    #[test]
    fn test_uncoercible_range() {
        assert!(RangeAllowance::analyze("*").is_none());
        assert!(RangeAllowance::analyze("latest").is_none());
    }

    #[test]
    fn test_partial_tilde() {
        let a = RangeAllowance::analyze("~1.2").unwrap();
        assert!(a.allows(UpdateType::Patch));
        assert!(!a.allows(UpdateType::Minor));
    }

    #[test]
    fn test_oversized_component_allows_nothing() {
        let a = RangeAllowance::analyze("~1.18446744073709551615").unwrap();
        assert!(!a.allows(UpdateType::Major));
        assert!(!a.allows(UpdateType::Minor));
        assert!(!a.allows(UpdateType::Patch));
    }
}
