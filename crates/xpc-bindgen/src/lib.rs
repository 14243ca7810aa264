//! Binding generator for the xPC Target host API.
//!
//! Reads the function-declaration header and the constants header of the
//! vendor library and emits a single Rust module containing the native
//! entry-point table, the enumerated constant groups and one checked
//! convenience method per function.
//!
//! ## Modules
//!
//! - [`csig`]: C function signature parser
//! - [`header`]: Declaration scanning and function descriptors
//! - [`marshal`]: C type to emitted type mapping
//! - [`consts`]: `#define` constant extraction and grouping
//! - [`config`]: `xpcgen.toml` generator configuration
//! - [`emit`]: Rust source emission

pub mod config;
pub mod consts;
pub mod csig;
pub mod emit;
pub mod error;
pub mod header;
pub mod marshal;

pub use config::GeneratorConfig;
pub use consts::{parse_constants, ConstantGroup, ConstantSet};
pub use csig::{CSignature, CType};
pub use emit::{recorded_digest, source_digest, Bindings};
pub use error::BindgenError;
pub use header::{parse_functions, FunctionDescriptor};
pub use marshal::TypeDesc;

/// Parse both headers into the emitter's input.
pub fn parse_headers(
    functions_src: &str,
    constants_src: &str,
    config: &GeneratorConfig,
) -> error::Result<Bindings> {
    let functions = parse_functions(functions_src, config)?;
    let constants = parse_constants(constants_src, &config.library.scalar_marker)?;
    Ok(Bindings {
        functions,
        constants,
        digest: source_digest(functions_src, constants_src, config),
    })
}

/// Run the whole pipeline and return the generated module source.
pub fn generate(
    functions_src: &str,
    constants_src: &str,
    config: &GeneratorConfig,
) -> error::Result<String> {
    let bindings = parse_headers(functions_src, constants_src, config)?;
    log::info!(
        "generating {} functions, {} constant groups",
        bindings.functions.len(),
        bindings.constants.groups.len()
    );
    emit::emit_module(&bindings, config)
}
