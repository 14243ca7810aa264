//! CLI command implementations.

pub mod check;
pub mod generate;
pub mod inspect;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use xpc_bindgen::GeneratorConfig;

/// Read a header as text.
pub(crate) fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

/// Load the generator configuration, or the built-in conventions.
pub(crate) fn load_config(path: Option<&Path>) -> Result<GeneratorConfig> {
    match path {
        Some(path) => {
            GeneratorConfig::load(path).with_context(|| format!("loading {}", path.display()))
        }
        None => Ok(GeneratorConfig::default()),
    }
}
