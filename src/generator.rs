//! Config generator coordinating the whole workflow
//!
//! This module provides:
//! - Workflow coordination: load manifest → judge ranges → assemble block
//! - Directory resolution relative to the invocation root
//! - Fail-fast error handling (the first error aborts the whole document)

use crate::dependabot::{
    DependabotConfig, DependencyType, GroupConfig, Groups, PackageEcosystem, Schedule,
    UpdateConfig, DEVELOPMENT_DEPENDENCIES, DEVELOPMENT_SECURITY_FIXES, PRODUCTION_DEPENDENCIES,
    PRODUCTION_SECURITY_FIXES,
};
use crate::domain::GeneratorOptions;
use crate::error::AppError;
use crate::manifest::Manifest;
use crate::progress::Progress;
use crate::update::UpdateJudge;
use std::path::{Component, Path, PathBuf};

/// Generator for dependabot.yml documents
pub struct Generator {
    /// Generation options
    options: GeneratorOptions,
    /// Invocation root that manifest directories are relative to
    root: PathBuf,
    /// Ignore rule judge built from the options
    judge: UpdateJudge,
}

impl Generator {
    /// Create a generator rooted at `root`
    pub fn new(options: GeneratorOptions, root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let root = std::path::absolute(&root).unwrap_or(root);
        let judge = UpdateJudge::new(&options);

        Self {
            options,
            root,
            judge,
        }
    }

    /// Create a generator rooted at the current working directory
    pub fn in_current_dir(options: GeneratorOptions) -> Self {
        let root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::new(options, root)
    }

    /// The invocation root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Generate the document for the given manifests
    pub fn generate<P: AsRef<Path>>(
        &self,
        manifest_paths: &[P],
    ) -> Result<DependabotConfig, AppError> {
        self.generate_with_progress(manifest_paths, false)
    }

    /// Generate the document with optional progress display
    pub fn generate_with_progress<P: AsRef<Path>>(
        &self,
        manifest_paths: &[P],
        show_progress: bool,
    ) -> Result<DependabotConfig, AppError> {
        let progress = Progress::start(show_progress, manifest_paths.len() as u64);
        let mut config = DependabotConfig::new();

        for path in manifest_paths {
            let path = path.as_ref();
            progress.reading(path);

            let update = match self.update_config(path) {
                Ok(update) => update,
                Err(e) => {
                    progress.finish();
                    return Err(e);
                }
            };
            config.updates.push(update);
            progress.done();
        }
        progress.finish();

        Ok(config)
    }

    /// Build the update block for a single manifest
    pub fn update_config(&self, manifest_path: &Path) -> Result<UpdateConfig, AppError> {
        let resolved = self.resolve(manifest_path);
        let manifest = Manifest::load(&resolved)?;

        let mut ignore = Vec::new();
        for dependency in &manifest.dependencies {
            if let Some(rule) = self.judge.judge(dependency, manifest_path)? {
                ignore.push(rule);
            }
        }
        ignore.extend(self.judge.wildcard_rules());

        Ok(UpdateConfig {
            package_ecosystem: PackageEcosystem::Npm,
            labels: self.options.label_list(),
            directory: target_directory(&self.root, &resolved),
            schedule: Schedule {
                interval: self.options.schedule_interval,
            },
            versioning_strategy: self.options.versioning_strategy,
            groups: self.groups(),
            ignore,
        })
    }

    /// The groups shared by every block
    fn groups(&self) -> Groups {
        let update_types = self.options.enabled_update_types();
        let mut groups = Groups::new();

        groups.insert(
            PRODUCTION_DEPENDENCIES,
            GroupConfig::version_updates(DependencyType::Production, update_types.clone()),
        );
        groups.insert(
            DEVELOPMENT_DEPENDENCIES,
            GroupConfig::version_updates(DependencyType::Development, update_types),
        );

        if self.options.separate_security_fixes {
            groups.insert(
                PRODUCTION_SECURITY_FIXES,
                GroupConfig::security_updates(DependencyType::Production),
            );
            groups.insert(
                DEVELOPMENT_SECURITY_FIXES,
                GroupConfig::security_updates(DependencyType::Development),
            );
        }

        groups
    }

    fn resolve(&self, manifest_path: &Path) -> PathBuf {
        if manifest_path.is_absolute() {
            manifest_path.to_path_buf()
        } else {
            self.root.join(manifest_path)
        }
    }
}

/// Generate a document for manifests relative to the current working directory
pub fn generate<P: AsRef<Path>>(
    options: &GeneratorOptions,
    manifest_paths: &[P],
) -> Result<DependabotConfig, AppError> {
    Generator::in_current_dir(options.clone()).generate(manifest_paths)
}

/// Generate a document for manifests relative to `root`
pub fn generate_in<P: AsRef<Path>>(
    root: &Path,
    options: &GeneratorOptions,
    manifest_paths: &[P],
) -> Result<DependabotConfig, AppError> {
    Generator::new(options.clone(), root).generate(manifest_paths)
}

/// Directory entry for a manifest: "/" + its folder relative to `root`
pub fn target_directory(root: &Path, manifest_path: &Path) -> String {
    let dir = manifest_path.parent().unwrap_or_else(|| Path::new(""));
    let relative = relative_to(dir, root);

    let parts: Vec<String> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            Component::ParentDir => Some("..".to_string()),
            _ => None,
        })
        .collect();

    format!("/{}", parts.join("/"))
}

/// Lexically normalize a path, resolving `.` and `..` without touching the filesystem
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let last_is_normal =
                    matches!(out.components().next_back(), Some(Component::Normal(_)));
                if last_is_normal {
                    out.pop();
                } else {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Lexical path from `base` to `path`
fn relative_to(path: &Path, base: &Path) -> PathBuf {
    let path = normalize(path);
    let base = normalize(base);

    let common = path
        .components()
        .zip(base.components())
        .take_while(|(a, b)| a == b)
        .count();

    let mut relative = PathBuf::new();
    for _ in base.components().skip(common) {
        relative.push("..");
    }
    for component in path.components().skip(common) {
        relative.push(component.as_os_str());
    }
    relative
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependabot::IgnoreConfig;
    use crate::domain::{ScheduleInterval, UpdateType, VersioningStrategy};
    use crate::error::VersionError;
    use std::fs;
    use tempfile::TempDir;

    const EMPTY_MANIFEST: &str = r#"{ "dependencies": {}, "devDependencies": {} }"#;

    fn project(files: &[(&str, &str)]) -> TempDir {
        let temp_dir = tempfile::tempdir().unwrap();
        for (path, content) in files {
            let full = temp_dir.path().join(path);
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(full, content).unwrap();
        }
        temp_dir
    }

    #[test]
    fn test_target_directory_root() {
        let root = Path::new("/repo");
        assert_eq!(target_directory(root, Path::new("/repo/package.json")), "/");
    }

    #[test]
    fn test_target_directory_nested() {
        let root = Path::new("/repo");
        assert_eq!(
            target_directory(root, Path::new("/repo/mock-app/package.json")),
            "/mock-app"
        );
        assert_eq!(
            target_directory(root, Path::new("/repo/packages/ui/package.json")),
            "/packages/ui"
        );
    }

    #[test]
    fn test_target_directory_with_dot_segments() {
        let root = Path::new("/repo");
        assert_eq!(
            target_directory(root, Path::new("/repo/./apps/../web/package.json")),
            "/web"
        );
    }

    #[test]
    fn test_target_directory_outside_root() {
        let root = Path::new("/repo/sub");
        assert_eq!(
            target_directory(root, Path::new("/repo/other/package.json")),
            "/../other"
        );
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(Path::new("./a/b/../c")), PathBuf::from("a/c"));
        assert_eq!(normalize(Path::new("../a")), PathBuf::from("../a"));
        assert_eq!(normalize(Path::new(".")), PathBuf::new());
    }

    #[test]
    fn test_empty_manifest_has_no_ignore_rules() {
        let dir = project(&[("package.json", EMPTY_MANIFEST)]);
        let config =
            generate_in(dir.path(), &GeneratorOptions::default(), &["package.json"]).unwrap();

        assert_eq!(config.version, 2);
        assert_eq!(config.updates.len(), 1);
        assert!(config.updates[0].ignore.is_empty());
        assert_eq!(config.updates[0].directory, "/");
    }

    #[test]
    fn test_block_fields() {
        let dir = project(&[("package.json", EMPTY_MANIFEST)]);
        let options = GeneratorOptions::new()
            .with_labels("dependencies,autoupdate")
            .with_schedule_interval(ScheduleInterval::Monthly)
            .with_versioning_strategy(VersioningStrategy::Widen);
        let config = generate_in(dir.path(), &options, &["package.json"]).unwrap();
        let block = &config.updates[0];

        assert_eq!(block.package_ecosystem, PackageEcosystem::Npm);
        assert_eq!(block.labels, vec!["dependencies", "autoupdate"]);
        assert_eq!(block.schedule.interval, ScheduleInterval::Monthly);
        assert_eq!(block.versioning_strategy, VersioningStrategy::Widen);
    }

    #[test]
    fn test_version_groups_share_update_types() {
        let dir = project(&[("package.json", EMPTY_MANIFEST)]);
        let options = GeneratorOptions::new().with_update_type(UpdateType::Minor, false);
        let config = generate_in(dir.path(), &options, &["package.json"]).unwrap();
        let groups = &config.updates[0].groups;

        let prod = groups.get(PRODUCTION_DEPENDENCIES).unwrap();
        let dev = groups.get(DEVELOPMENT_DEPENDENCIES).unwrap();
        assert_eq!(
            prod.update_types,
            Some(vec![UpdateType::Major, UpdateType::Patch])
        );
        assert_eq!(prod.update_types, dev.update_types);
    }

    #[test]
    fn test_security_groups_toggle() {
        let dir = project(&[("package.json", EMPTY_MANIFEST)]);

        let with =
            generate_in(dir.path(), &GeneratorOptions::default(), &["package.json"]).unwrap();
        assert!(with.updates[0].groups.contains(PRODUCTION_SECURITY_FIXES));
        assert!(with.updates[0].groups.contains(DEVELOPMENT_SECURITY_FIXES));
        assert_eq!(with.updates[0].groups.names().count(), 4);

        let options = GeneratorOptions::new().with_separate_security_fixes(false);
        let without = generate_in(dir.path(), &options, &["package.json"]).unwrap();
        assert!(!without.updates[0].groups.contains(PRODUCTION_SECURITY_FIXES));
        assert!(!without.updates[0].groups.contains(DEVELOPMENT_SECURITY_FIXES));
        assert_eq!(without.updates[0].groups.names().count(), 2);
    }

    #[test]
    fn test_dependency_rules_precede_wildcards() {
        let dir = project(&[(
            "package.json",
            r#"{ "dependencies": { "commander": "13.0.0" }, "devDependencies": {} }"#,
        )]);
        let options = GeneratorOptions::new().with_update_type(UpdateType::Major, false);
        let config = generate_in(dir.path(), &options, &["package.json"]).unwrap();

        assert_eq!(
            config.updates[0].ignore,
            vec![
                IgnoreConfig::for_types("commander", vec![UpdateType::Minor, UpdateType::Patch]),
                IgnoreConfig::wildcard(UpdateType::Major),
            ]
        );
    }

    #[test]
    fn test_blocks_follow_input_order() {
        let dir = project(&[
            ("package.json", EMPTY_MANIFEST),
            ("mock-app/package.json", EMPTY_MANIFEST),
        ]);
        let config = generate_in(
            dir.path(),
            &GeneratorOptions::default(),
            &["mock-app/package.json", "package.json"],
        )
        .unwrap();

        let dirs: Vec<_> = config.updates.iter().map(|u| u.directory.as_str()).collect();
        assert_eq!(dirs, vec!["/mock-app", "/"]);
    }

    #[test]
    fn test_absolute_manifest_path() {
        let dir = project(&[("web/package.json", EMPTY_MANIFEST)]);
        let path = dir.path().join("web/package.json");
        let config = generate_in(dir.path(), &GeneratorOptions::default(), &[path]).unwrap();
        assert_eq!(config.updates[0].directory, "/web");
    }

    #[test]
    fn test_coercion_failure_aborts() {
        let dir = project(&[
            ("package.json", EMPTY_MANIFEST),
            (
                "bad/package.json",
                r#"{ "dependencies": { "shared": "latest" } }"#,
            ),
        ]);
        let result = generate_in(
            dir.path(),
            &GeneratorOptions::default(),
            &["package.json", "bad/package.json"],
        );
        assert!(matches!(
            result,
            Err(AppError::Version(VersionError::Coercion { .. }))
        ));
    }

    #[test]
    fn test_oversized_version_component_ignores_every_update() {
        let manifest = r#"{
            "dependencies": {
                "x": "^18446744073709551615.0.0",
                "y": "~1.18446744073709551615"
            }
        }"#;
        let dir = project(&[("package.json", manifest)]);
        let config =
            generate_in(dir.path(), &GeneratorOptions::default(), &["package.json"]).unwrap();

        assert_eq!(
            config.updates[0].ignore,
            vec![IgnoreConfig::all("x"), IgnoreConfig::all("y")]
        );
    }

    #[test]
    fn test_missing_manifest_propagates() {
        let dir = project(&[]);
        let result = generate_in(dir.path(), &GeneratorOptions::default(), &["package.json"]);
        assert!(matches!(result, Err(AppError::Manifest(_))));
    }

    #[test]
    fn test_no_manifests_gives_empty_document() {
        let dir = project(&[]);
        let paths: [&str; 0] = [];
        let config = generate_in(dir.path(), &GeneratorOptions::default(), &paths).unwrap();
        assert_eq!(config, DependabotConfig::new());
    }
}
