//! npm (node-semver) range parser
//!
//! Handles range formats:
//! - Exact: `1.2.3`, `=1.2.3`, `v1.2.3`
//! - Caret: `^1.2.3`, `^0.2.3`, `^1.x`
//! - Tilde: `~1.2.3`, `~1.2`, `~>1.2.3`
//! - Comparison: `>=1.2.3`, `>1.2`, `<=1`, `<1.2.3`
//! - Wildcard: `*`, `x`, `1.x`, `1.2.*`, `1`, `1.2`
//! - Hyphen: `1.0.0 - 2.0.0`
//! - Intersection and union: `>=1.0.0 <2.0.0 || ^3.0.0`
//!
//! Every range is desugared into plain `semver` comparators
//! (`=`, `>`, `>=`, `<`, `<=` against full versions) so that the matching
//! itself, including prerelease handling, is done by `semver::VersionReq`.

use super::MAX_SAFE_COMPONENT;
use regex::Regex;
use semver::{Comparator, Op, Prerelease, Version, VersionReq};
use std::sync::LazyLock;

static PARTIAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[v=]*(0|[1-9]\d*|[xX*])(?:\.(0|[1-9]\d*|[xX*])(?:\.(0|[1-9]\d*|[xX*])(?:-([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?(?:\+[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*)?)?)?$",
    )
    .unwrap()
});
static HYPHEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\S+)\s+-\s+(\S+)$").unwrap());
static OPERATOR_SPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(~>?|\^|[<>]=?|=)\s+").unwrap());
static OR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*\|\|\s*").unwrap());

/// A possibly partial version such as `1`, `1.2`, `1.x` or `1.2.3-beta.1`
///
/// Numeric components never exceed `MAX_SAFE_COMPONENT`, so bumping one by
/// one while desugaring cannot overflow.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Partial {
    major: Option<u64>,
    minor: Option<u64>,
    patch: Option<u64>,
    pre: Prerelease,
}

impl Partial {
    fn parse(s: &str) -> Option<Self> {
        let caps = PARTIAL_RE.captures(s)?;

        let component = |idx: usize| -> Option<Option<u64>> {
            match caps.get(idx).map(|m| m.as_str()) {
                None | Some("x") | Some("X") | Some("*") => Some(None),
                Some(n) => n
                    .parse::<u64>()
                    .ok()
                    .filter(|n| *n <= MAX_SAFE_COMPONENT)
                    .map(Some),
            }
        };

        let major = component(1)?;
        // Anything after a wildcard component is a wildcard too
        let minor = major.and(component(2)?);
        let patch = minor.and(component(3)?);
        let pre = match (patch, caps.get(4)) {
            (Some(_), Some(m)) => Prerelease::new(m.as_str()).ok()?,
            _ => Prerelease::EMPTY,
        };

        Some(Self {
            major,
            minor,
            patch,
            pre,
        })
    }
}

fn comparator(op: Op, major: u64, minor: u64, patch: u64, pre: Prerelease) -> Comparator {
    Comparator {
        op,
        major,
        minor: Some(minor),
        patch: Some(patch),
        pre,
    }
}

fn at_least(major: u64, minor: u64, patch: u64) -> Comparator {
    comparator(Op::GreaterEq, major, minor, patch, Prerelease::EMPTY)
}

fn below(major: u64, minor: u64, patch: u64) -> Comparator {
    comparator(Op::Less, major, minor, patch, Prerelease::EMPTY)
}

/// A comparator set that no version satisfies
fn nothing() -> Vec<Comparator> {
    vec![below(0, 0, 0)]
}

fn desugar_tilde(p: &Partial) -> Vec<Comparator> {
    match (p.major, p.minor, p.patch) {
        (None, _, _) => Vec::new(),
        (Some(ma), None, _) => vec![at_least(ma, 0, 0), below(ma + 1, 0, 0)],
        (Some(ma), Some(mi), None) => vec![at_least(ma, mi, 0), below(ma, mi + 1, 0)],
        (Some(ma), Some(mi), Some(pa)) => vec![
            comparator(Op::GreaterEq, ma, mi, pa, p.pre.clone()),
            below(ma, mi + 1, 0),
        ],
    }
}

fn desugar_caret(p: &Partial) -> Vec<Comparator> {
    match (p.major, p.minor, p.patch) {
        (None, _, _) => Vec::new(),
        (Some(ma), None, _) => vec![at_least(ma, 0, 0), below(ma + 1, 0, 0)],
        (Some(0), Some(mi), None) => vec![at_least(0, mi, 0), below(0, mi + 1, 0)],
        (Some(ma), Some(mi), None) => vec![at_least(ma, mi, 0), below(ma + 1, 0, 0)],
        (Some(ma), Some(mi), Some(pa)) => {
            let lower = comparator(Op::GreaterEq, ma, mi, pa, p.pre.clone());
            let upper = if ma > 0 {
                below(ma + 1, 0, 0)
            } else if mi > 0 {
                below(0, mi + 1, 0)
            } else {
                below(0, 0, pa + 1)
            };
            vec![lower, upper]
        }
    }
}

/// Desugar a primitive comparison or x-range (`op` is empty for a bare version)
fn desugar_primitive(op: &str, p: &Partial) -> Option<Vec<Comparator>> {
    let Some(ma) = p.major else {
        return Some(match op {
            ">" | "<" => nothing(),
            _ => Vec::new(),
        });
    };

    let (mi, pa) = match (p.minor, p.patch) {
        (Some(mi), Some(pa)) => (mi, pa),
        (minor, _) => {
            // Partial version: expand to the covered interval
            let minor_missing = minor.is_none();
            let mi = minor.unwrap_or(0);
            let comparators = match op {
                "" | "=" if minor_missing => vec![at_least(ma, 0, 0), below(ma + 1, 0, 0)],
                "" | "=" => vec![at_least(ma, mi, 0), below(ma, mi + 1, 0)],
                ">=" => vec![at_least(ma, mi, 0)],
                ">" if minor_missing => vec![at_least(ma + 1, 0, 0)],
                ">" => vec![at_least(ma, mi + 1, 0)],
                "<" => vec![below(ma, mi, 0)],
                "<=" if minor_missing => vec![below(ma + 1, 0, 0)],
                "<=" => vec![below(ma, mi + 1, 0)],
                _ => return None,
            };
            return Some(comparators);
        }
    };

    let op = match op {
        "" | "=" => Op::Exact,
        ">" => Op::Greater,
        ">=" => Op::GreaterEq,
        "<" => Op::Less,
        "<=" => Op::LessEq,
        _ => return None,
    };
    Some(vec![comparator(op, ma, mi, pa, p.pre.clone())])
}

fn desugar_hyphen(from: &Partial, to: &Partial) -> Vec<Comparator> {
    let mut comparators = Vec::new();

    match (from.major, from.minor, from.patch) {
        (None, _, _) => {}
        (Some(ma), None, _) => comparators.push(at_least(ma, 0, 0)),
        (Some(ma), Some(mi), None) => comparators.push(at_least(ma, mi, 0)),
        (Some(ma), Some(mi), Some(pa)) => {
            comparators.push(comparator(Op::GreaterEq, ma, mi, pa, from.pre.clone()))
        }
    }

    match (to.major, to.minor, to.patch) {
        (None, _, _) => {}
        (Some(ma), None, _) => comparators.push(below(ma + 1, 0, 0)),
        (Some(ma), Some(mi), None) => comparators.push(below(ma, mi + 1, 0)),
        (Some(ma), Some(mi), Some(pa)) => {
            comparators.push(comparator(Op::LessEq, ma, mi, pa, to.pre.clone()))
        }
    }

    comparators
}

fn split_operator(token: &str) -> (&str, &str) {
    for op in ["~>", "~", "^", ">=", "<=", ">", "<", "="] {
        if let Some(rest) = token.strip_prefix(op) {
            return (op, rest);
        }
    }
    ("", token)
}

fn parse_comparator_set(set: &str) -> Option<VersionReq> {
    let set = set.trim();

    if let Some(caps) = HYPHEN_RE.captures(set) {
        let from = Partial::parse(caps.get(1)?.as_str())?;
        let to = Partial::parse(caps.get(2)?.as_str())?;
        return Some(VersionReq {
            comparators: desugar_hyphen(&from, &to),
        });
    }

    let collapsed = OPERATOR_SPACE_RE.replace_all(set, "$1");
    let mut comparators = Vec::new();

    for token in collapsed.split_whitespace() {
        let (op, rest) = split_operator(token);
        let partial = Partial::parse(rest)?;
        let desugared = match op {
            "~" | "~>" => desugar_tilde(&partial),
            "^" => desugar_caret(&partial),
            _ => desugar_primitive(op, &partial)?,
        };
        comparators.extend(desugared);
    }

    Some(VersionReq { comparators })
}

/// A parsed npm range: a union of comparator sets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeRange {
    alternatives: Vec<VersionReq>,
}

impl NodeRange {
    /// Parse an npm range string; returns `None` for syntax npm would reject
    pub fn parse(range: &str) -> Option<Self> {
        let alternatives = OR_RE
            .split(range.trim())
            .map(parse_comparator_set)
            .collect::<Option<Vec<_>>>()?;

        Some(Self { alternatives })
    }

    /// Check whether `version` satisfies any alternative of this range
    pub fn matches(&self, version: &Version) -> bool {
        self.alternatives.iter().any(|req| req.matches(version))
    }
}

/// Check whether `version` satisfies the npm range `range`
///
/// An unparsable range is satisfied by nothing.
pub fn satisfies(version: &Version, range: &str) -> bool {
    NodeRange::parse(range).is_some_and(|r| r.matches(version))
}
