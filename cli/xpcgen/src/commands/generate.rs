//! `xpcgen generate`: emit the binding module.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::{load_config, read_source};

/// Parse both headers and write the generated module to `output`.
///
/// Nothing is written when any declaration or constant fails to parse.
pub fn run(header: &Path, constants: &Path, config: Option<&Path>, output: &Path) -> Result<()> {
    let config = load_config(config)?;
    let functions_src = read_source(header)?;
    let constants_src = read_source(constants)?;

    let module = xpc_bindgen::generate(&functions_src, &constants_src, &config)
        .with_context(|| format!("generating bindings from {}", header.display()))?;

    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(output, &module).with_context(|| format!("writing {}", output.display()))?;

    println!("Generated bindings → {}", output.display());
    Ok(())
}
