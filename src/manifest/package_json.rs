//! package.json parser for Node.js projects
//!
//! Handles:
//! - dependencies
//! - devDependencies
//!
//! Both maps are merged into one list in declaration order. A name listed in
//! both sections keeps its first position and takes the devDependencies range.

use crate::domain::Dependency;
use crate::error::ManifestError;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::Path;

/// Raw shape of the fields we read from package.json
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPackageJson {
    #[serde(default)]
    dependencies: Option<Map<String, Value>>,
    #[serde(default)]
    dev_dependencies: Option<Map<String, Value>>,
}

/// Parser for package.json files
pub struct PackageJsonParser;

impl PackageJsonParser {
    /// Parse and merge the dependency maps of a package.json
    ///
    /// `path` is only used for error messages.
    pub fn parse(&self, content: &str, path: &Path) -> Result<Vec<Dependency>, ManifestError> {
        let raw: RawPackageJson = serde_json::from_str(content)
            .map_err(|e| ManifestError::json_parse_error(path, e.to_string()))?;

        let mut dependencies = Vec::new();

        if let Some(deps) = &raw.dependencies {
            merge_dependency_object(deps, path, &mut dependencies)?;
        }

        if let Some(deps) = &raw.dev_dependencies {
            merge_dependency_object(deps, path, &mut dependencies)?;
        }

        Ok(dependencies)
    }
}

fn merge_dependency_object(
    deps: &Map<String, Value>,
    path: &Path,
    output: &mut Vec<Dependency>,
) -> Result<(), ManifestError> {
    for (name, version_value) in deps {
        let range = version_value.as_str().ok_or_else(|| {
            ManifestError::json_parse_error(
                path,
                format!("version of '{}' must be a string, got {}", name, version_value),
            )
        })?;

        match output.iter_mut().find(|d| &d.name == name) {
            Some(existing) => existing.range = range.to_string(),
            None => output.push(Dependency::new(name.clone(), range)),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn parse(content: &str) -> Result<Vec<Dependency>, ManifestError> {
        PackageJsonParser.parse(content, &PathBuf::from("package.json"))
    }

    #[test]
    fn test_parse_simple_dependencies() {
        let content = r#"{
            "dependencies": {
                "lodash": "^4.17.21",
                "express": "~4.18.2"
            }
        }"#;

        let deps = parse(content).unwrap();
        assert_eq!(deps.len(), 2);
        assert_eq!(deps[0], Dependency::new("lodash", "^4.17.21"));
        assert_eq!(deps[1], Dependency::new("express", "~4.18.2"));
    }

    #[test]
    fn test_parse_dev_dependencies() {
        let content = r#"{
            "devDependencies": {
                "typescript": "^5.0.0",
                "jest": "^29.0.0"
            }
        }"#;

        let deps = parse(content).unwrap();
        assert_eq!(deps.len(), 2);
        assert_eq!(deps[0], Dependency::new("typescript", "^5.0.0"));
        assert_eq!(deps[1], Dependency::new("jest", "^29.0.0"));
    }

    #[test]
    fn test_parse_keeps_declaration_order() {
        let content = r#"{
            "dependencies": {
                "zod": "^3.0.0",
                "axios": "^1.0.0"
            },
            "devDependencies": {
                "typescript": "^5.0.0",
                "eslint": "^9.0.0"
            }
        }"#;

        let names: Vec<_> = parse(content)
            .unwrap()
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(names, vec!["zod", "axios", "typescript", "eslint"]);
    }

    #[test]
    fn test_dev_entry_overwrites_production_entry() {
        let content = r#"{
            "dependencies": {
                "react": "^18.2.0",
                "lodash": "4.17.21"
            },
            "devDependencies": {
                "react": "~18.2.0"
            }
        }"#;

        let deps = parse(content).unwrap();
        assert_eq!(deps.len(), 2);
        assert_eq!(deps[0], Dependency::new("react", "~18.2.0"));
        assert_eq!(deps[1], Dependency::new("lodash", "4.17.21"));
    }

    #[test]
    fn test_parse_empty_object() {
        assert!(parse("{}").unwrap().is_empty());
    }

    #[test]
    fn test_parse_empty_maps() {
        let content = r#"{ "dependencies": {}, "devDependencies": {} }"#;
        assert!(parse(content).unwrap().is_empty());
    }

    #[test]
    fn test_parse_null_maps() {
        let content = r#"{ "dependencies": null }"#;
        assert!(parse(content).unwrap().is_empty());
    }

    #[test]
    fn test_other_sections_are_ignored() {
        let content = r#"{
            "name": "app",
            "peerDependencies": { "react": "^18.0.0" },
            "optionalDependencies": { "fsevents": "^2.3.0" }
        }"#;
        assert!(parse(content).unwrap().is_empty());
    }

    #[test]
    fn test_unparsable_ranges_are_kept_verbatim() {
        let content = r#"{ "dependencies": { "shared": "workspace:*" } }"#;
        let deps = parse(content).unwrap();
        assert_eq!(deps[0].range, "workspace:*");
    }

    #[test]
    fn test_parse_invalid_json() {
        let result = parse("not json");
        assert!(matches!(
            result,
            Err(ManifestError::JsonParseError { .. })
        ));
    }

    #[test]
    fn test_parse_non_string_version() {
        let content = r#"{ "dependencies": { "lodash": 4 } }"#;
        let err = parse(content).unwrap_err();
        assert!(format!("{}", err).contains("must be a string"));
    }
}
