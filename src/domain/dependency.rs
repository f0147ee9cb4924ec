//! Dependency declarations read from a manifest

/// A dependency name with its declared version range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    /// Package name
    pub name: String,
    /// Version range exactly as written in the manifest
    pub range: String,
}

impl Dependency {
    /// Creates a new dependency
    pub fn new(name: impl Into<String>, range: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            range: range.into(),
        }
    }
}
