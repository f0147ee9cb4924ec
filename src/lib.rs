//! dependabot-gen - Dependabot config generator library
//!
//! This library provides the core functionality for turning npm manifests
//! into a `dependabot.yml`:
//! - package.json loading (dependencies + devDependencies)
//! - npm range coercion and satisfaction checks
//! - per-dependency ignore rules derived from the declared ranges
//! - YAML output of the assembled document

pub mod cli;
pub mod dependabot;
pub mod domain;
pub mod error;
pub mod generator;
pub mod manifest;
pub mod output;
pub mod parser;
pub mod progress;
pub mod update;

pub use generator::{generate, generate_in, Generator};
