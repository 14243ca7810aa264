//! Generator error types.
//!
//! Every variant aborts the generation run: there is no partial output.

/// Errors that can occur while parsing headers or emitting bindings.
#[derive(Debug, thiserror::Error)]
pub enum BindgenError {
    /// Failed to parse a C function declaration.
    #[error("invalid C signature: {detail}")]
    InvalidCSignature { detail: String },

    /// A parsed type has a shape the type mapper cannot express.
    #[error("unsupported type in '{function}': {detail}")]
    UnsupportedType { function: String, detail: String },

    /// A constant name has no underscore, so its group is ambiguous.
    #[error("constant '{name}' has no '_' and cannot be assigned to a group")]
    UngroupedConstant { name: String },

    /// A constant cannot be emitted (bad value or member name).
    #[error("invalid constant '{name}': {detail}")]
    InvalidConstant { name: String, detail: String },

    /// Generator configuration is inconsistent.
    #[error("invalid generator configuration: {detail}")]
    InvalidConfig { detail: String },

    /// A scanning pattern failed to compile.
    #[error("invalid pattern: {0}")]
    Regex(#[from] regex::Error),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for generator operations.
pub type Result<T> = std::result::Result<T, BindgenError>;
