//! `xpcgen inspect`: show what the generator sees in the headers.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use xpc_bindgen::{parse_constants, parse_functions, ConstantSet, FunctionDescriptor};

use super::{load_config, read_source};

#[derive(Serialize)]
struct Report {
    functions: Vec<FunctionDescriptor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    constants: Option<ConstantSet>,
}

/// Print parsed function descriptors and constant groups.
pub fn run(header: &Path, constants: Option<&Path>, config: Option<&Path>, json: bool) -> Result<()> {
    let report = collect(header, constants, config)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render(&report));
    }
    Ok(())
}

fn collect(header: &Path, constants: Option<&Path>, config: Option<&Path>) -> Result<Report> {
    let config = load_config(config)?;
    let functions = parse_functions(&read_source(header)?, &config)
        .with_context(|| format!("parsing {}", header.display()))?;
    let constants = match constants {
        Some(path) => Some(
            parse_constants(&read_source(path)?, &config.library.scalar_marker)
                .with_context(|| format!("parsing {}", path.display()))?,
        ),
        None => None,
    };
    Ok(Report {
        functions,
        constants,
    })
}

fn render(report: &Report) -> String {
    let mut out = format!("--- Functions ({}) ---\n", report.functions.len());
    for f in &report.functions {
        let params: Vec<String> = f
            .parameters
            .iter()
            .map(|p| format!("{}: {}", p.name, p.ty.rust_type()))
            .collect();
        out.push_str(&format!("  {}({})", f.name, params.join(", ")));
        if !f.return_type.is_void() {
            out.push_str(&format!(" -> {}", f.return_type.rust_type()));
        }
        out.push('\n');
    }

    if let Some(constants) = &report.constants {
        out.push_str(&format!("\n--- Constants ({}) ---\n", constants.scalars.len()));
        for scalar in &constants.scalars {
            out.push_str(&format!("  {} = {}\n", scalar.name, scalar.value));
        }
        out.push_str(&format!("\n--- Groups ({}) ---\n", constants.groups.len()));
        for group in &constants.groups {
            let members: Vec<String> = group
                .members
                .iter()
                .map(|m| format!("{}={}", m.name, m.value))
                .collect();
            out.push_str(&format!("  {}: {}\n", group.name, members.join(" ")));
        }
    }
    out
}
