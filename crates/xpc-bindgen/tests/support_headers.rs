use std::fs;
use std::path::PathBuf;

use xpc_bindgen::{generate, parse_headers, recorded_digest, GeneratorConfig};

fn workspace_file(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../..").join(relative)
}

fn read(relative: &str) -> String {
    fs::read_to_string(workspace_file(relative)).unwrap()
}

struct Inputs {
    functions: String,
    constants: String,
    config: GeneratorConfig,
}

fn inputs() -> Inputs {
    Inputs {
        functions: read("support/xpcapi.h"),
        constants: read("support/xpcapiconst.h"),
        config: GeneratorConfig::load(&workspace_file("support/xpcgen.toml")).unwrap(),
    }
}

/// Names of generated methods and table fields, in emission order.
fn outline(module: &str) -> (Vec<String>, Vec<String>) {
    let mut methods = Vec::new();
    let mut fields = Vec::new();
    for line in module.lines() {
        let line = line.trim_start();
        let rest = line
            .strip_prefix("pub unsafe fn ")
            .or_else(|| line.strip_prefix("pub fn "));
        if let Some(rest) = rest {
            if let Some((name, _)) = rest.split_once('(') {
                methods.push(name.to_string());
            }
        } else if let Some(rest) = line.strip_prefix("pub xPC") {
            if let Some((name, _)) = rest.split_once(':') {
                fields.push(format!("xPC{name}"));
            }
        }
    }
    (methods, fields)
}

#[test]
fn vendor_headers_parse_completely() {
    let inputs = inputs();
    let bindings = parse_headers(&inputs.functions, &inputs.constants, &inputs.config).unwrap();
    assert_eq!(bindings.functions.len(), 164);

    let init = bindings
        .functions
        .iter()
        .find(|f| f.name == "xPCInitAPI")
        .unwrap();
    assert!(init.parameters.is_empty());

    for group in ["COMMTYP", "SCTYPE", "TRIGMD", "TRIGSLOPE", "SCMODE", "SCST", "LGMOD"] {
        assert!(
            bindings.constants.group(group).is_some(),
            "missing constant group {group}"
        );
    }
    let sctype = bindings.constants.group("SCTYPE").unwrap();
    assert_eq!(sctype.value_of("HOST"), Some(1));
    assert_eq!(sctype.value_of("FILE"), Some(3));
}

#[test]
fn checked_in_module_matches_headers() {
    let inputs = inputs();
    let checked_in = read("crates/xpc-api/src/raw/generated.rs");
    let bindings = parse_headers(&inputs.functions, &inputs.constants, &inputs.config).unwrap();
    assert_eq!(
        recorded_digest(&checked_in),
        Some(bindings.digest.as_str()),
        "generated bindings are stale, run `xpcgen generate`"
    );

    let fresh = generate(&inputs.functions, &inputs.constants, &inputs.config).unwrap();
    let (_, fresh_fields) = outline(&fresh);
    assert_eq!(fresh_fields.len(), 164);
    assert!(
        fresh == checked_in,
        "crates/xpc-api/src/raw/generated.rs differs from a fresh generation"
    );
}

#[test]
fn config_edit_invalidates_recorded_digest() {
    let inputs = inputs();
    let checked_in = read("crates/xpc-api/src/raw/generated.rs");
    let mut edited = inputs.config.clone();
    edited.substitutions.insert("HWND".to_string(), "void * window".to_string());

    let bindings = parse_headers(&inputs.functions, &inputs.constants, &edited).unwrap();
    assert_ne!(recorded_digest(&checked_in), Some(bindings.digest.as_str()));
}

#[test]
fn error_protocol_functions_are_present() {
    let inputs = inputs();
    let fresh = generate(&inputs.functions, &inputs.constants, &inputs.config).unwrap();
    let (methods, fields) = outline(&fresh);
    for field in ["xPCGetLastError", "xPCSetLastError", "xPCErrorMsg"] {
        assert!(fields.iter().any(|f| f == field), "missing {field}");
    }
    assert!(methods.iter().any(|m| m == "getLastError"));
    assert!(methods.iter().any(|m| m == "openTcpIpPort"));
}
