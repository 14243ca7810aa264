//! Error types of the native layer and the facade.

/// Errors raised by native calls and by the facade's local checks.
#[derive(Debug, thiserror::Error)]
pub enum XpcError {
    /// The native last-error register was nonzero after a call.
    #[error("xPC error {code}: {message}")]
    Native { code: i32, message: String },

    /// The loaded library build does not export this function.
    #[error("function '{function}' is not exported by the loaded xPC library")]
    Unavailable { function: &'static str },

    /// A symbol the error-check protocol depends on is missing.
    #[error("xPC library lacks required symbol '{symbol}'")]
    MissingSymbol { symbol: &'static str },

    /// The native library could not be opened.
    #[error("failed to load xPC library: {0}")]
    Load(#[from] libloading::Error),

    /// Remote files can only be opened for reading.
    #[error("unsupported file mode '{mode}', only \"r\" is implemented")]
    UnsupportedMode { mode: String },

    /// The application bundle is missing or has the wrong extension.
    #[error("invalid application: {detail}")]
    InvalidApplication { detail: String },

    /// The request needs support the facade does not have.
    #[error("not implemented: {detail}")]
    NotImplemented { detail: String },

    /// Read on a remote file after it was closed.
    #[error("read on closed remote file")]
    FileClosed,

    /// A host string cannot be handed to the native layer.
    #[error("invalid string argument: {detail}")]
    InvalidString { detail: String },

    /// A native integer outside its enumerated group.
    #[error("value {value} is not a member of {group}")]
    UnknownValue { group: &'static str, value: i32 },

    /// Facade configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<XpcError> for std::io::Error {
    fn from(err: XpcError) -> Self {
        match err {
            XpcError::Io(io) => io,
            other => std::io::Error::other(other),
        }
    }
}

/// Result type alias for native and facade operations.
pub type Result<T> = std::result::Result<T, XpcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_error_message() {
        let err = XpcError::Native {
            code: 12,
            message: "Scope not found".into(),
        };
        assert_eq!(err.to_string(), "xPC error 12: Scope not found");
    }

    #[test]
    fn converts_to_io_error() {
        let io: std::io::Error = XpcError::FileClosed.into();
        assert_eq!(io.kind(), std::io::ErrorKind::Other);
        assert!(io.to_string().contains("closed"));

        let inner = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let io: std::io::Error = XpcError::Io(inner).into();
        assert_eq!(io.kind(), std::io::ErrorKind::NotFound);
    }
}
