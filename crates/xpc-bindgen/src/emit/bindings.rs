use super::{escape_ident, Writer};
use crate::config::GeneratorConfig;
use crate::error::{BindgenError, Result};
use crate::header::FunctionDescriptor;

/// Locals of the emitted method bodies.
const BODY_LOCALS: &[&str] = &["native", "retval"];

/// Inherent methods `XpcRaw` defines by hand.
const RESERVED_METHODS: &[&str] = &[
    "check_error",
    "from_functions",
    "functions",
    "load",
    "port",
    "set_port",
];

/// Target-language method name for a native function: the library prefix
/// is dropped and the first remaining character lower-cased.
pub fn method_name(function: &str, prefix: &str) -> String {
    let stem = function.strip_prefix(prefix).unwrap_or(function);
    let mut chars = stem.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub(super) fn emit_function_table(w: &mut Writer, functions: &[FunctionDescriptor]) {
    w.blank();
    w.line("/// Entry points of the native library.");
    w.line("///");
    w.line("/// A field is `None` when the loaded build does not export that symbol.");
    w.line("#[derive(Clone, Copy, Default)]");
    w.line("pub struct XpcFunctions {");
    for func in functions {
        w.indented(1, format!("pub {}: Option<{}>,", func.name, fn_pointer_type(func)));
    }
    w.line("}");

    w.blank();
    w.line("impl XpcFunctions {");
    w.indented(1, "/// Number of entry points the header declares.");
    w.indented(1, format!("pub const COUNT: usize = {};", functions.len()));
    w.blank();
    w.indented(1, "/// Look up every entry point, leaving absent symbols unset.");
    w.indented(1, "///");
    w.indented(1, "/// # Safety");
    w.indented(1, "///");
    w.indented(1, "/// Each exported symbol of `library` must have the signature declared");
    w.indented(1, "/// for it in the header.");
    w.indented(1, "pub unsafe fn resolve(library: &NativeLibrary) -> Self {");
    w.indented(2, "unsafe {");
    w.indented(3, "Self {");
    for func in functions {
        w.indented(4, format!("{0}: library.symbol(b\"{0}\\0\"),", func.name));
    }
    w.indented(3, "}");
    w.indented(2, "}");
    w.indented(1, "}");
    w.blank();
    w.indented(1, "/// Number of entry points that were resolved.");
    w.indented(1, "pub fn resolved_count(&self) -> usize {");
    if functions.is_empty() {
        w.indented(2, "0");
    } else {
        w.indented(2, "[");
        for func in functions {
            w.indented(3, format!("self.{}.is_some(),", func.name));
        }
        w.indented(2, "]");
        w.indented(2, ".iter()");
        w.indented(2, ".filter(|present| **present)");
        w.indented(2, ".count()");
    }
    w.indented(1, "}");
    w.line("}");
}

fn fn_pointer_type(func: &FunctionDescriptor) -> String {
    let params: Vec<String> = func.parameters.iter().map(|p| p.ty.rust_type()).collect();
    let mut ty = format!("unsafe extern \"system\" fn({})", params.join(", "));
    if !func.return_type.is_void() {
        ty.push_str(" -> ");
        ty.push_str(&func.return_type.rust_type());
    }
    ty
}

pub(super) fn emit_methods(
    w: &mut Writer,
    functions: &[FunctionDescriptor],
    config: &GeneratorConfig,
) -> Result<()> {
    let prefix = &config.library.prefix;
    let mut seen: Vec<String> = Vec::new();

    w.blank();
    w.line("impl XpcRaw {");
    for (i, func) in functions.iter().enumerate() {
        let method = method_name(&func.name, prefix);
        if RESERVED_METHODS.contains(&method.as_str()) || seen.contains(&method) {
            return Err(BindgenError::InvalidCSignature {
                detail: format!("'{}' maps to method '{method}', which is already taken", func.name),
            });
        }
        if i > 0 {
            w.blank();
        }
        emit_method(w, func, &method, &config.library.session_param);
        seen.push(method);
    }
    w.line("}");
    Ok(())
}

fn emit_method(w: &mut Writer, func: &FunctionDescriptor, method: &str, session_param: &str) {
    let elide_session = func
        .parameters
        .first()
        .is_some_and(|p| p.name == session_param);

    let mut declared = Vec::new();
    let mut arguments = Vec::new();
    for (index, param) in func.parameters.iter().enumerate() {
        if index == 0 && elide_session {
            arguments.push("self.port".to_string());
            continue;
        }
        let ident = if param.name.is_empty() {
            format!("arg{index}")
        } else {
            escape_ident(&param.name, BODY_LOCALS)
        };
        declared.push(format!("{ident}: {}", param.ty.rust_type()));
        arguments.push(ident);
    }

    let unsafe_kw = if func.takes_pointers() { "unsafe " } else { "" };
    let returned = if func.return_type.is_void() {
        "()".to_string()
    } else {
        func.return_type.rust_type()
    };
    let method = escape_ident(method, &[]);

    w.indented(1, format!("/// Calls `{}`.", func.name));
    if func.takes_pointers() {
        w.indented(1, "///");
        w.indented(1, "/// # Safety");
        w.indented(1, "///");
        w.indented(
            1,
            "/// Pointer arguments must be valid for every read and write the native call makes.",
        );
    }

    let mut signature = vec!["&self".to_string()];
    signature.extend(declared);
    let one_line = format!(
        "    pub {unsafe_kw}fn {method}({}) -> Result<{returned}> {{",
        signature.join(", ")
    );
    if one_line.len() <= 100 {
        w.line(one_line);
    } else {
        w.indented(1, format!("pub {unsafe_kw}fn {method}("));
        for item in &signature {
            w.indented(2, format!("{item},"));
        }
        w.indented(1, format!(") -> Result<{returned}> {{"));
    }

    w.indented(
        2,
        format!("let native = require(self.fns.{0}, \"{0}\")?;", func.name),
    );
    let call = format!("native({})", arguments.join(", "));
    if func.return_type.is_void() {
        w.indented(2, format!("unsafe {{ {call} }};"));
        w.indented(2, "self.check_error()?;");
        w.indented(2, "Ok(())");
    } else {
        w.indented(2, format!("let retval = unsafe {{ {call} }};"));
        w.indented(2, "self.check_error()?;");
        w.indented(2, "Ok(retval)");
    }
    w.indented(1, "}");
}
