//! Function-declaration header scanning.
//!
//! Turns a C header into an ordered list of [`FunctionDescriptor`]s. The
//! scanner is deliberately small: comments and preprocessor lines are
//! dropped, `extern "C"` blocks are looked through, braced statements and
//! typedefs are skipped, and every remaining statement with a parameter
//! list is parsed as a function declaration.

use regex::Regex;
use serde::Serialize;

use crate::config::GeneratorConfig;
use crate::csig::CSignature;
use crate::error::{BindgenError, Result};
use crate::marshal::{type_desc_from_ctype, TypeDesc};

/// One named, typed parameter of a native function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    /// Parameter name as written in the header (empty if unnamed).
    pub name: String,
    /// Mapped type.
    #[serde(rename = "type")]
    pub ty: TypeDesc,
}

/// An exported native function, ready for emission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionDescriptor {
    /// Native symbol name.
    pub name: String,
    /// Parameters in declaration order.
    pub parameters: Vec<Parameter>,
    /// Return type.
    pub return_type: TypeDesc,
}

impl FunctionDescriptor {
    /// Map a parsed signature through the configured record table.
    pub fn from_signature(sig: &CSignature, config: &GeneratorConfig) -> Result<Self> {
        let parameters = sig
            .parameters
            .iter()
            .map(|p| {
                Ok(Parameter {
                    name: p.name.clone(),
                    ty: type_desc_from_ctype(&p.param_type, &config.records, &sig.name)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        let return_type = type_desc_from_ctype(&sig.return_type, &config.records, &sig.name)?;
        Ok(Self {
            name: sig.name.clone(),
            parameters,
            return_type,
        })
    }

    /// Whether any parameter is a raw pointer.
    pub fn takes_pointers(&self) -> bool {
        self.parameters.iter().any(|p| p.ty.is_pointer())
    }
}

/// Parse every function carrying the configured prefix out of `source`.
pub fn parse_functions(source: &str, config: &GeneratorConfig) -> Result<Vec<FunctionDescriptor>> {
    let prefix = &config.library.prefix;
    let mut functions = Vec::new();
    for sig in scan_declarations(source, config)? {
        if !sig.name.starts_with(prefix.as_str()) || sig.name.len() == prefix.len() {
            log::debug!("skipping '{}': no '{prefix}' prefix", sig.name);
            continue;
        }
        if functions.iter().any(|f: &FunctionDescriptor| f.name == sig.name) {
            return Err(BindgenError::InvalidCSignature {
                detail: format!("'{}' is declared more than once", sig.name),
            });
        }
        functions.push(FunctionDescriptor::from_signature(&sig, config)?);
    }
    log::debug!("parsed {} exported functions", functions.len());
    Ok(functions)
}

/// Parse every function declaration in `source`, in header order.
pub fn scan_declarations(source: &str, config: &GeneratorConfig) -> Result<Vec<CSignature>> {
    let text = strip_preprocessor(&strip_comments(source));
    let expand = MacroExpander::new(config)?;

    let mut signatures = Vec::new();
    for statement in split_statements(&text) {
        let statement = statement.trim();
        if statement.is_empty() || statement.contains('{') || starts_with_word(statement, "typedef")
        {
            continue;
        }
        let statement = expand.apply(statement);
        if !statement.contains('(') {
            continue;
        }
        signatures.push(CSignature::parse(&statement)?);
    }
    Ok(signatures)
}

fn starts_with_word(s: &str, word: &str) -> bool {
    s.strip_prefix(word)
        .is_some_and(|rest| rest.chars().next().map_or(true, |c| !c.is_ascii_alphanumeric() && c != '_'))
}

/// Remove `/* */` and `//` comments, keeping line structure intact.
fn strip_comments(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();
    let mut in_string = false;

    while let Some(c) = chars.next() {
        if in_string {
            out.push(c);
            if c == '"' {
                in_string = false;
            }
            continue;
        }
        match (c, chars.peek()) {
            ('"', _) => {
                in_string = true;
                out.push(c);
            }
            ('/', Some('*')) => {
                chars.next();
                let mut prev = '\0';
                for c in chars.by_ref() {
                    if c == '\n' {
                        out.push('\n');
                    }
                    if prev == '*' && c == '/' {
                        break;
                    }
                    prev = c;
                }
                out.push(' ');
            }
            ('/', Some('/')) => {
                for c in chars.by_ref() {
                    if c == '\n' {
                        out.push('\n');
                        break;
                    }
                }
            }
            _ => out.push(c),
        }
    }
    out
}

/// Drop preprocessor directives, including backslash-continued lines.
fn strip_preprocessor(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut continued = false;
    for line in source.lines() {
        let directive = continued || line.trim_start().starts_with('#');
        continued = directive && line.trim_end().ends_with('\\');
        if !directive {
            out.push_str(line);
        }
        out.push('\n');
    }
    out
}

/// Split on top-level `;`, looking through `extern "C" { ... }` blocks.
///
/// A statement that opens any other brace keeps its braces so the caller
/// can recognise and skip it.
fn split_statements(source: &str) -> Vec<String> {
    let mut statements = Vec::new();
    let mut current = String::new();
    // true for transparent `extern "C"` frames
    let mut frames: Vec<bool> = Vec::new();

    for c in source.chars() {
        let opaque_depth = frames.iter().filter(|transparent| !**transparent).count();
        match c {
            '{' if opaque_depth == 0 && current.trim_end().ends_with("extern \"C\"") => {
                frames.push(true);
                current.clear();
            }
            '{' => {
                frames.push(false);
                current.push(c);
            }
            '}' => match frames.pop() {
                Some(true) => current.clear(),
                _ => current.push(c),
            },
            ';' if opaque_depth == 0 => {
                statements.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    if !current.trim().is_empty() {
        statements.push(current);
    }
    statements
}

/// Applies `[substitutions]` and expands the export macro.
struct MacroExpander {
    substitutions: Vec<(Regex, String)>,
    export: Option<Regex>,
}

impl MacroExpander {
    fn new(config: &GeneratorConfig) -> Result<Self> {
        let substitutions = config
            .substitutions
            .iter()
            .map(|(from, to)| Ok((word_regex(from)?, to.clone())))
            .collect::<Result<Vec<_>>>()?;
        let export = match &config.library.export_macro {
            Some(name) => Some(
                Regex::new(&format!(
                    r"\b{}\s*\(\s*([^,()]+?)\s*,\s*([A-Za-z_]\w*)\s*\)",
                    regex::escape(name)
                ))
                .map_err(|e| BindgenError::InvalidConfig {
                    detail: format!("export-macro '{name}': {e}"),
                })?,
            ),
            None => None,
        };
        Ok(Self {
            substitutions,
            export,
        })
    }

    fn apply(&self, statement: &str) -> String {
        let mut text = statement.split_whitespace().collect::<Vec<_>>().join(" ");
        for (pattern, replacement) in &self.substitutions {
            text = pattern
                .replace_all(&text, regex::NoExpand(replacement))
                .into_owned();
        }
        if let Some(export) = &self.export {
            text = export.replace(&text, "$1 $2").into_owned();
        }
        text
    }
}

fn word_regex(word: &str) -> Result<Regex> {
    Regex::new(&format!(r"\b{}\b", regex::escape(word))).map_err(|e| BindgenError::InvalidConfig {
        detail: format!("substitution '{word}': {e}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csig::CType;

    const HEADER: &str = r#"
/* leading comment with a ; inside */
#ifndef H
#define H
#define XPCAPIFUNC(type, fun) \
    extern type __stdcall fun

typedef struct {
    int number;
    double level;
} scopedata;

#ifdef __cplusplus
extern "C" {
#endif

XPCAPIFUNC(int, xPCGetNumSignals)(int port); // trailing comment
XPCAPIFUNC(void, xPCGetParam)(int port, int parIdx,
                              double *paramValue);
XPCAPIFUNC(int, xPCInitAPI)(void);
XPCAPIFUNC(int, xPCResolveAPI)(HMODULE);
int helper(int x);
XPCAPIFUNC(scopedata, xPCGetScope)(int port, int scNum);

#ifdef __cplusplus
}
#endif
#endif
"#;

    #[test]
    fn scan_finds_all_declarations_in_order() {
        let config = GeneratorConfig::default();
        let sigs = scan_declarations(HEADER, &config).unwrap();
        let names: Vec<_> = sigs.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "xPCGetNumSignals",
                "xPCGetParam",
                "xPCInitAPI",
                "xPCResolveAPI",
                "helper",
                "xPCGetScope"
            ]
        );
    }

    #[test]
    fn void_parameter_list_is_empty() {
        let config = GeneratorConfig::default();
        let sigs = scan_declarations(HEADER, &config).unwrap();
        let init = sigs.iter().find(|s| s.name == "xPCInitAPI").unwrap();
        assert!(init.parameters.is_empty());
    }

    #[test]
    fn substitutions_are_applied() {
        let config = GeneratorConfig::default();
        let sigs = scan_declarations(HEADER, &config).unwrap();
        let resolve = sigs.iter().find(|s| s.name == "xPCResolveAPI").unwrap();
        assert_eq!(resolve.parameters[0].name, "module");
        assert_eq!(
            resolve.parameters[0].param_type,
            CType::Pointer(Box::new(CType::Void))
        );
    }

    #[test]
    fn parse_functions_filters_by_prefix() {
        let config = GeneratorConfig::default();
        let functions = parse_functions(HEADER, &config).unwrap();
        assert_eq!(functions.len(), 5);
        assert!(functions.iter().all(|f| f.name.starts_with("xPC")));

        let get_param = &functions[1];
        assert_eq!(get_param.parameters.len(), 3);
        assert!(get_param.takes_pointers());
        assert_eq!(get_param.parameters[2].ty.rust_type(), "*mut c_double");
        assert!(get_param.return_type.is_void());
    }

    #[test]
    fn unknown_type_aborts() {
        let config = GeneratorConfig::default();
        let header = "XPCAPIFUNC(HWND, xPCGetWindow)(int port);";
        assert!(matches!(
            parse_functions(header, &config),
            Err(BindgenError::UnsupportedType { .. })
        ));
    }

    #[test]
    fn malformed_declaration_aborts() {
        let config = GeneratorConfig::default();
        let header = "XPCAPIFUNC(int, xPCBroken)(int port, ...);";
        assert!(parse_functions(header, &config).is_err());
    }

    #[test]
    fn duplicate_declaration_aborts() {
        let config = GeneratorConfig::default();
        let header = "int xPCTargetPing(int port);\nint xPCTargetPing(int port);";
        assert!(parse_functions(header, &config).is_err());
    }

    #[test]
    fn plain_declarations_without_macro() {
        let mut config = GeneratorConfig::default();
        config.library.export_macro = None;
        let functions = parse_functions("double xPCGetExecTime(int port);", &config).unwrap();
        assert_eq!(functions[0].return_type, TypeDesc::Double);
    }

    #[test]
    fn comments_removed() {
        let stripped = strip_comments("a /* b;\n c */ d // e;\nf");
        assert!(!stripped.contains('b'));
        assert!(!stripped.contains('e'));
        assert!(stripped.contains('f'));
        assert_eq!(stripped.lines().count(), 3);
    }
}
