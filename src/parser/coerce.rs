//! Reduction of a version range expression to a concrete base version
//!
//! Mirrors npm's loose coercion: the first run of one to three dot-separated
//! numbers that is not part of a longer digit run wins, missing components
//! default to zero, and everything else in the string is ignored.

use super::MAX_SAFE_COMPONENT;
use regex::Regex;
use semver::Version;
use std::sync::LazyLock;

static COERCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^\d])(\d{1,16})(?:\.(\d{1,16}))?(?:\.(\d{1,16}))?(?:$|[^\d])").unwrap()
});

/// Coerce a range string such as `^13.0.0`, `~1.2` or `v2` to `major.minor.patch`
///
/// Returns `None` when the string contains no usable number (e.g. `*`, `latest`)
/// or a component is larger than npm can represent.
pub fn coerce(range: &str) -> Option<Version> {
    let caps = COERCE_RE.captures(range)?;

    let component = |idx: usize| -> Option<u64> {
        match caps.get(idx) {
            Some(m) => m
                .as_str()
                .parse()
                .ok()
                .filter(|n| *n <= MAX_SAFE_COMPONENT),
            None => Some(0),
        }
    };

    Some(Version::new(component(1)?, component(2)?, component(3)?))
}
