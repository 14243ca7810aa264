//! Hand-written C declaration parser.
//!
//! Handles the declaration shapes found in vendor API headers: builtin
//! arithmetic types, typedef names, `struct` tags, `const` qualifiers,
//! pointers of any depth and array parameters (which decay to pointers).
//! Function pointers and variadic functions are rejected.

use crate::error::{BindgenError, Result};

/// A C type as written in a declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CType {
    Void,
    Char,
    SignedChar,
    UnsignedChar,
    Short,
    UnsignedShort,
    Int,
    UnsignedInt,
    Long,
    UnsignedLong,
    LongLong,
    UnsignedLongLong,
    Float,
    Double,
    /// Pointer to another type.
    Pointer(Box<CType>),
    /// Const-qualified type.
    Const(Box<CType>),
    /// Typedef name (e.g. `scopedata`).
    Named(String),
    /// `struct tag` reference.
    Struct(String),
}

impl CType {
    /// Whether this type is void.
    pub fn is_void(&self) -> bool {
        matches!(self, CType::Void)
    }

    /// Strip const qualifiers from outer level.
    pub fn strip_const(&self) -> &CType {
        match self {
            CType::Const(inner) => inner.strip_const(),
            other => other,
        }
    }

    /// Number of pointer levels above the base type.
    pub fn pointer_depth(&self) -> usize {
        match self.strip_const() {
            CType::Pointer(inner) => 1 + inner.pointer_depth(),
            _ => 0,
        }
    }
}

impl std::fmt::Display for CType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CType::Void => write!(f, "void"),
            CType::Char => write!(f, "char"),
            CType::SignedChar => write!(f, "signed char"),
            CType::UnsignedChar => write!(f, "unsigned char"),
            CType::Short => write!(f, "short"),
            CType::UnsignedShort => write!(f, "unsigned short"),
            CType::Int => write!(f, "int"),
            CType::UnsignedInt => write!(f, "unsigned int"),
            CType::Long => write!(f, "long"),
            CType::UnsignedLong => write!(f, "unsigned long"),
            CType::LongLong => write!(f, "long long"),
            CType::UnsignedLongLong => write!(f, "unsigned long long"),
            CType::Float => write!(f, "float"),
            CType::Double => write!(f, "double"),
            CType::Pointer(inner) => write!(f, "{inner}*"),
            CType::Const(inner) => write!(f, "const {inner}"),
            CType::Named(name) => write!(f, "{name}"),
            CType::Struct(name) => write!(f, "struct {name}"),
        }
    }
}

/// A parsed C function parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CParam {
    /// Parameter type.
    pub param_type: CType,
    /// Parameter name (empty if unnamed).
    pub name: String,
}

/// A parsed C function declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CSignature {
    /// Return type.
    pub return_type: CType,
    /// Function name.
    pub name: String,
    /// Parameters. A lone `void` parameter list parses as empty.
    pub parameters: Vec<CParam>,
}

impl CSignature {
    /// Parse a single C function declaration, with or without the trailing `;`.
    ///
    /// Examples:
    /// - `"int xPCGetNumSignals(int port)"`
    /// - `"void xPCGetParam(int port, int parIdx, double *paramValue);"`
    /// - `"char* xPCGetAPIVersion(void)"`
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim().trim_end_matches(';').trim_end();
        if input.is_empty() {
            return Err(invalid("empty signature"));
        }

        let paren_pos = input.find('(').ok_or_else(|| invalid("missing '('"))?;
        if !input.ends_with(')') {
            return Err(invalid("missing ')'"));
        }

        let before_paren = input[..paren_pos].trim();
        let params_str = &input[paren_pos + 1..input.len() - 1];

        let (return_type, name) = parse_type_and_name(before_paren)?;
        if name.is_empty() {
            return Err(invalid("missing function name"));
        }
        let parameters = parse_params(params_str)
            .map_err(|e| invalid(&format!("{name}: {e}")))?;

        Ok(CSignature {
            return_type,
            name,
            parameters,
        })
    }
}

impl std::fmt::Display for CSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}(", self.return_type, self.name)?;
        if self.parameters.is_empty() {
            write!(f, "void")?;
        }
        for (i, param) in self.parameters.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", param.param_type)?;
            if !param.name.is_empty() {
                write!(f, " {}", param.name)?;
            }
        }
        write!(f, ")")
    }
}

fn invalid(detail: &str) -> BindgenError {
    BindgenError::InvalidCSignature {
        detail: detail.to_string(),
    }
}

/// Storage classes and calling-convention keywords that carry no type information.
const IGNORED_KEYWORDS: &[&str] = &[
    "extern", "static", "inline", "volatile", "__stdcall", "__cdecl", "WINAPI",
];

/// Tokenize a declaration fragment, keeping `*`, `[` and `]` as separate tokens.
fn tokenize(s: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    for part in s.split_whitespace() {
        let mut start = 0;
        for (i, c) in part.char_indices() {
            if matches!(c, '*' | '[' | ']') {
                if i > start {
                    tokens.push(&part[start..i]);
                }
                tokens.push(&part[i..i + 1]);
                start = i + 1;
            }
        }
        if start < part.len() {
            tokens.push(&part[start..]);
        }
    }
    tokens
        .into_iter()
        .filter(|t| !IGNORED_KEYWORDS.contains(t))
        .collect()
}

/// Parse a base type specifier from the front of `tokens`.
///
/// Returns the type and the number of tokens consumed.
fn parse_base_type(tokens: &[&str]) -> Result<(CType, usize)> {
    let mut pos = 0;
    let mut is_const = false;

    while pos < tokens.len() && tokens[pos] == "const" {
        is_const = true;
        pos += 1;
    }
    let first = *tokens.get(pos).ok_or_else(|| invalid("expected type"))?;

    let ct = match first {
        "struct" => {
            let tag = tokens.get(pos + 1).ok_or_else(|| invalid("expected struct name"))?;
            pos += 2;
            CType::Struct(tag.to_string())
        }
        "unsigned" | "signed" => {
            let unsigned = first == "unsigned";
            pos += 1;
            match tokens.get(pos).copied() {
                Some("char") => {
                    pos += 1;
                    if unsigned { CType::UnsignedChar } else { CType::SignedChar }
                }
                Some("short") => {
                    pos += 1;
                    if unsigned { CType::UnsignedShort } else { CType::Short }
                }
                Some("int") => {
                    pos += 1;
                    if unsigned { CType::UnsignedInt } else { CType::Int }
                }
                Some("long") => {
                    pos += 1;
                    if tokens.get(pos) == Some(&"long") {
                        pos += 1;
                        if unsigned { CType::UnsignedLongLong } else { CType::LongLong }
                    } else if unsigned {
                        CType::UnsignedLong
                    } else {
                        CType::Long
                    }
                }
                // bare `unsigned` / `signed` means int
                _ => if unsigned { CType::UnsignedInt } else { CType::Int },
            }
        }
        "long" => {
            pos += 1;
            if tokens.get(pos) == Some(&"long") {
                pos += 1;
                CType::LongLong
            } else {
                CType::Long
            }
        }
        "void" => { pos += 1; CType::Void }
        "char" => { pos += 1; CType::Char }
        "short" => { pos += 1; CType::Short }
        "int" => { pos += 1; CType::Int }
        "float" => { pos += 1; CType::Float }
        "double" => { pos += 1; CType::Double }
        "*" | "[" | "]" => return Err(invalid(&format!("unexpected '{first}'"))),
        other if is_identifier(other) => { pos += 1; CType::Named(other.to_string()) }
        other => return Err(invalid(&format!("unknown type '{other}'"))),
    };

    // `int const` is the same as `const int`
    while pos < tokens.len() && tokens[pos] == "const" {
        is_const = true;
        pos += 1;
    }

    let ct = if is_const { CType::Const(Box::new(ct)) } else { ct };
    Ok((ct, pos))
}

/// Parse the declarator that follows a base type: pointer stars, an
/// optional name and optional array brackets.
fn parse_declarator(base: CType, tokens: &[&str]) -> Result<(CType, String)> {
    let mut result = base;
    let mut name = String::new();
    let mut i = 0;

    while i < tokens.len() {
        match tokens[i] {
            "*" => {
                if !name.is_empty() {
                    return Err(invalid("'*' after declarator name"));
                }
                result = CType::Pointer(Box::new(result));
            }
            // `char * const p`: the pointer itself is const, which does not
            // change how it is passed
            "const" => {}
            "[" => {
                if tokens.get(i + 1) == Some(&"]") {
                    i += 1;
                } else if tokens.get(i + 2) == Some(&"]") {
                    i += 2;
                } else {
                    return Err(invalid("unterminated array declarator"));
                }
                result = CType::Pointer(Box::new(result));
            }
            tok if is_identifier(tok) && name.is_empty() => name = tok.to_string(),
            tok => return Err(invalid(&format!("unexpected token '{tok}'"))),
        }
        i += 1;
    }

    Ok((result, name))
}

/// Parse "return_type function_name" from the part before `(`.
fn parse_type_and_name(s: &str) -> Result<(CType, String)> {
    let tokens = tokenize(s);
    if tokens.is_empty() {
        return Err(invalid("empty return type and name"));
    }
    let (base_type, consumed) = parse_base_type(&tokens)?;
    parse_declarator(base_type, &tokens[consumed..])
}

/// Parse a single parameter declaration.
fn parse_param(s: &str) -> Result<CParam> {
    if s.contains('(') {
        return Err(invalid(&format!("function pointer parameter '{s}' is not supported")));
    }
    let tokens = tokenize(s);
    if tokens.is_empty() {
        return Err(invalid("empty parameter"));
    }
    let (base_type, consumed) = parse_base_type(&tokens)?;
    let (param_type, name) = parse_declarator(base_type, &tokens[consumed..])?;
    Ok(CParam { param_type, name })
}

/// Parse the parameter list between `(` and `)`.
fn parse_params(s: &str) -> Result<Vec<CParam>> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(Vec::new());
    }

    let mut params = Vec::new();
    for part in s.split(',') {
        let part = part.trim();
        if part == "..." {
            return Err(invalid("variadic functions are not supported"));
        }
        params.push(parse_param(part)?);
    }

    // `f(void)` is the zero-argument marker, not a parameter
    if params.len() == 1 && params[0].param_type.is_void() && params[0].name.is_empty() {
        params.clear();
    }
    if params.iter().any(|p| p.param_type.is_void()) {
        return Err(invalid("'void' is only valid as the sole parameter"));
    }

    Ok(params)
}

/// Whether `s` is a valid C identifier.
pub(crate) fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
