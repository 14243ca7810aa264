//! `xpcgen check`: detect a stale generated module.

use std::path::Path;

use anyhow::{bail, Result};
use xpc_bindgen::{recorded_digest, source_digest};

use super::{load_config, read_source};

/// Succeed when the digest recorded in `artifact` matches the headers and
/// the generator configuration.
pub fn run(header: &Path, constants: &Path, config: Option<&Path>, artifact: &Path) -> Result<()> {
    let config = load_config(config)?;
    let current = source_digest(&read_source(header)?, &read_source(constants)?, &config);
    let generated = read_source(artifact)?;

    match recorded_digest(&generated) {
        Some(recorded) if recorded == current => {
            println!("{} is up to date", artifact.display());
            Ok(())
        }
        Some(recorded) => {
            log::debug!("recorded digest {recorded}, current {current}");
            bail!(
                "{} is stale (run `xpcgen generate` to refresh it)",
                artifact.display()
            )
        }
        None => bail!("{} carries no source digest", artifact.display()),
    }
}
