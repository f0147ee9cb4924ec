//! CLI argument parsing module for dependabot-gen

use crate::domain::{GeneratorOptions, ScheduleInterval, VersioningStrategy};
use crate::output::DEFAULT_OUTPUT_DIR;
use clap::Parser;
use std::path::PathBuf;

/// Generate a dependabot.yml config from package.json version ranges
#[derive(Parser, Debug, Clone)]
#[command(
    name = "dependabot-gen",
    version,
    about = "Generate a dependabot.yml config from package.json version ranges"
)]
pub struct CliArgs {
    /// Paths to package.json files (one update block per file)
    #[arg(value_name = "PACKAGE_JSON", default_value = "package.json")]
    pub manifests: Vec<PathBuf>,

    /// Labels separated by a comma (,) for all pull requests raised by Dependabot
    #[arg(long, default_value = "dependencies")]
    pub labels: String,

    /// Directory the generated dependabot.yml is written to
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    // Update classes
    /// Disallow pull requests for major semver updates of all dependencies
    #[arg(long)]
    pub no_major_updates: bool,

    /// Disallow pull requests for minor semver updates of all dependencies
    #[arg(long)]
    pub no_minor_updates: bool,

    /// Disallow pull requests for patch semver updates of all dependencies
    #[arg(long)]
    pub no_patch_updates: bool,

    /// Do not split security fixes into their own production/development groups
    #[arg(long)]
    pub no_separate_security_fixes: bool,

    /// How often to look for version updates
    #[arg(long, value_enum, default_value_t = ScheduleInterval::Weekly)]
    pub schedule_interval: ScheduleInterval,

    /// How Dependabot should edit manifest files
    #[arg(long, value_enum, default_value_t = VersioningStrategy::Increase)]
    pub versioning_strategy: VersioningStrategy,

    // General options
    /// Print the generated config to stdout instead of writing it
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Enable quiet mode - minimal output
    #[arg(short, long)]
    pub quiet: bool,
}

impl CliArgs {
    /// Convert the parsed arguments into generation options
    pub fn generator_options(&self) -> GeneratorOptions {
        GeneratorOptions {
            labels: self.labels.clone(),
            major_updates: !self.no_major_updates,
            minor_updates: !self.no_minor_updates,
            patch_updates: !self.no_patch_updates,
            separate_security_fixes: !self.no_separate_security_fixes,
            versioning_strategy: self.versioning_strategy,
            schedule_interval: self.schedule_interval,
        }
    }

    /// Whether a progress bar should be drawn
    pub fn show_progress(&self) -> bool {
        !self.quiet && !self.dry_run && self.manifests.len() > 1
    }
}
