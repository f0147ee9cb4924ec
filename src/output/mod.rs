//! Output of the generated document
//!
//! This module provides:
//! - YAML rendering of a `DependabotConfig`
//! - Writing `dependabot.yml` into an output directory
//! - Printing to any writer for dry runs

use crate::dependabot::DependabotConfig;
use crate::error::OutputError;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Default directory the config is written to
pub const DEFAULT_OUTPUT_DIR: &str = ".github";

/// File name Dependabot reads its configuration from
pub const CONFIG_FILENAME: &str = "dependabot.yml";

/// Render the document as YAML
pub fn render_yaml(config: &DependabotConfig) -> Result<String, OutputError> {
    serde_yaml::to_string(config).map_err(|e| OutputError::serialize(e.to_string()))
}

/// Path of the config file inside `output_dir`
pub fn config_path(output_dir: &Path) -> PathBuf {
    output_dir.join(CONFIG_FILENAME)
}

/// Write the document to `output_dir/dependabot.yml`, creating the directory
///
/// The YAML is rendered before anything touches the filesystem, so a
/// serialization failure leaves no partial file behind.
pub fn write_config(config: &DependabotConfig, output_dir: &Path) -> Result<PathBuf, OutputError> {
    let yaml = render_yaml(config)?;

    std::fs::create_dir_all(output_dir)
        .map_err(|e| OutputError::create_dir(output_dir, e))?;

    let path = config_path(output_dir);
    std::fs::write(&path, yaml).map_err(|e| OutputError::write(&path, e))?;

    Ok(path)
}

/// Write the rendered document to `writer` (used by dry runs)
pub fn print_config(config: &DependabotConfig, writer: &mut dyn Write) -> Result<(), OutputError> {
    let yaml = render_yaml(config)?;
    writer
        .write_all(yaml.as_bytes())
        .map_err(|e| OutputError::write("<stdout>", e))
}
