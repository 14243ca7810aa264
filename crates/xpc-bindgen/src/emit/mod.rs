//! Rust source emission for the generated binding module.
//!
//! The emitted file is meant to live at `xpc-api/src/raw/generated.rs`: it
//! refers to `super::types` for record layouts, to `super::{require, XpcRaw}`
//! for the call-then-check plumbing and to `crate::error` for the error type.

mod bindings;
mod constants;

use std::collections::BTreeSet;

use sha2::{Digest, Sha256};

use crate::config::GeneratorConfig;
use crate::consts::ConstantSet;
use crate::error::Result;
use crate::header::FunctionDescriptor;
use crate::marshal::TypeDesc;

pub use bindings::method_name;

/// Prefix of the provenance line carrying the input digest.
pub const DIGEST_MARKER: &str = "// source-digest: sha256:";

/// Everything the emitter needs for one module.
#[derive(Debug, Clone)]
pub struct Bindings {
    /// Exported functions, in header order.
    pub functions: Vec<FunctionDescriptor>,
    /// Scalar constants and enumerated groups, in header order.
    pub constants: ConstantSet,
    /// Hex SHA-256 digest of the input headers and generator settings.
    pub digest: String,
}

/// SHA-256 over the function header, the constants header and the
/// configuration fingerprint, in that order.
pub fn source_digest(functions_src: &str, constants_src: &str, config: &GeneratorConfig) -> String {
    let mut hasher = Sha256::new();
    hasher.update(functions_src.as_bytes());
    hasher.update(constants_src.as_bytes());
    hasher.update(config.fingerprint().as_bytes());
    let hash: [u8; 32] = hasher.finalize().into();
    hash.iter().map(|b| format!("{b:02x}")).collect()
}

/// Extract the digest recorded in a previously generated module.
pub fn recorded_digest(artifact: &str) -> Option<&str> {
    artifact
        .lines()
        .find_map(|line| line.strip_prefix(DIGEST_MARKER))
        .map(str::trim)
}

/// Emit the complete module source.
pub fn emit_module(bindings: &Bindings, config: &GeneratorConfig) -> Result<String> {
    let mut w = Writer::default();

    w.line("// @generated by xpc-bindgen. Do not edit by hand.");
    w.line("// Regenerate with `xpcgen generate`; `xpcgen check` verifies this file is current.");
    w.line(format!("{DIGEST_MARKER}{}", bindings.digest));
    w.blank();
    w.line(
        "#![allow(non_camel_case_types, non_snake_case, clippy::too_many_arguments, \
         clippy::upper_case_acronyms)]",
    );
    w.blank();
    emit_imports(&mut w, bindings);

    constants::emit_constants(&mut w, &bindings.constants);
    bindings::emit_function_table(&mut w, &bindings.functions);
    bindings::emit_methods(&mut w, &bindings.functions, config)?;

    Ok(w.finish())
}

fn emit_imports(w: &mut Writer, bindings: &Bindings) {
    let mut raw = BTreeSet::new();
    let mut records = BTreeSet::new();
    for func in &bindings.functions {
        let returned = Some(&func.return_type).filter(|ty| !ty.is_void());
        for ty in func.parameters.iter().map(|p| &p.ty).chain(returned) {
            ty.collect_raw_names(&mut raw);
            collect_records(ty, &mut records);
        }
    }

    if !raw.is_empty() {
        w.line(use_line("std::os::raw", raw.into_iter().map(String::from).collect()));
        w.blank();
    }
    if !records.is_empty() {
        w.line(use_line("super::types", records.into_iter().collect()));
    }
    w.line("use super::{require, XpcRaw};");
    if bindings.constants.groups.is_empty() {
        w.line("use crate::error::Result;");
    } else {
        w.line("use crate::error::{Result, XpcError};");
    }
    w.line("use crate::library::NativeLibrary;");
}

/// `use path::name;` for one name, `use path::{a, b};` for several.
fn use_line(path: &str, names: Vec<String>) -> String {
    match names.as_slice() {
        [single] => format!("use {path}::{single};"),
        many => format!("use {path}::{{{}}};", many.join(", ")),
    }
}

fn collect_records(ty: &TypeDesc, out: &mut BTreeSet<String>) {
    match ty {
        TypeDesc::Record { name } => {
            out.insert(name.clone());
        }
        TypeDesc::Pointer { pointee, .. } => collect_records(pointee, out),
        _ => {}
    }
}

/// Escape a header identifier so it is usable as a Rust identifier.
///
/// `reserved` lists locals of the emitted method bodies that a parameter
/// must not shadow.
pub(crate) fn escape_ident(name: &str, reserved: &[&str]) -> String {
    const KEYWORDS: &[&str] = &[
        "as", "async", "await", "break", "const", "continue", "dyn", "else", "enum", "extern",
        "false", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod", "move",
        "mut", "pub", "ref", "return", "static", "struct", "trait", "true", "type", "unsafe",
        "use", "where", "while", "abstract", "become", "box", "do", "final", "macro", "override",
        "priv", "try", "typeof", "unsized", "virtual", "yield",
    ];
    if matches!(name, "self" | "Self" | "super" | "crate") || reserved.contains(&name) {
        format!("{name}_")
    } else if KEYWORDS.contains(&name) {
        format!("r#{name}")
    } else {
        name.to_string()
    }
}

/// Line-oriented source writer with four-space indentation.
#[derive(Default)]
pub(crate) struct Writer {
    out: String,
}

impl Writer {
    pub(crate) fn line(&mut self, text: impl AsRef<str>) {
        self.out.push_str(text.as_ref());
        self.out.push('\n');
    }

    pub(crate) fn indented(&mut self, depth: usize, text: impl AsRef<str>) {
        for _ in 0..depth {
            self.out.push_str("    ");
        }
        self.line(text);
    }

    pub(crate) fn blank(&mut self) {
        self.out.push('\n');
    }

    fn finish(self) -> String {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_is_stable_hex() {
        let config = GeneratorConfig::default();
        let a = source_digest("int f(void);", "#define A_B 1", &config);
        let b = source_digest("int f(void);", "#define A_B 1", &config);
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, source_digest("int f(void);", "#define A_B 2", &config));
    }

    #[test]
    fn digest_covers_configuration() {
        let config = GeneratorConfig::default();
        let mut renamed = config.clone();
        renamed.library.session_param = "handle".to_string();
        assert_ne!(
            source_digest("int f(void);", "", &config),
            source_digest("int f(void);", "", &renamed)
        );
    }

    #[test]
    fn single_import_has_no_braces() {
        let names = |list: &[&str]| list.iter().map(|n| n.to_string()).collect();
        assert_eq!(
            use_line("super::types", names(&["ScopeData"])),
            "use super::types::ScopeData;"
        );
        assert_eq!(
            use_line("std::os::raw", names(&["c_char", "c_int"])),
            "use std::os::raw::{c_char, c_int};"
        );
    }

    #[test]
    fn recorded_digest_round_trip() {
        let artifact = format!("// header\n{DIGEST_MARKER}abc123\n\nuse x;\n");
        assert_eq!(recorded_digest(&artifact), Some("abc123"));
        assert_eq!(recorded_digest("no marker"), None);
    }

    #[test]
    fn keywords_are_escaped() {
        assert_eq!(escape_ident("type", &[]), "r#type");
        assert_eq!(escape_ident("self", &[]), "self_");
        assert_eq!(escape_ident("retval", &["retval"]), "retval_");
        assert_eq!(escape_ident("scNum", &["retval"]), "scNum");
    }
}
