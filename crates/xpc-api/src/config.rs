//! Facade configuration (`xpc.toml`).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::library::default_library_path;

/// How to reach the target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Connection {
    /// Network connection.
    Tcp { address: String, port: u16 },
    /// Serial connection on COM port `port`.
    Serial { port: i32, baud: i32 },
}

/// Settings for [`XpcApi::connect`](crate::XpcApi::connect).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct XpcConfig {
    /// Native library path; see [`default_library_path`] when unset.
    #[serde(default)]
    pub library: Option<PathBuf>,
    /// Remote application load time-out in seconds.
    #[serde(default)]
    pub load_timeout: Option<i32>,
    /// Connection opened right after loading the library.
    #[serde(default)]
    pub connection: Option<Connection>,
}

impl XpcConfig {
    /// Parse a configuration from a TOML string.
    pub fn parse(input: &str) -> Result<Self> {
        Ok(toml::from_str(input)?)
    }

    /// Parse a configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// The library to load: the configured path or the default location.
    pub fn library_path(&self) -> PathBuf {
        self.library.clone().unwrap_or_else(default_library_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_tcp_config() {
        let config = XpcConfig::parse(
            r#"
library = "C:/xpc/xpcapi.dll"
load-timeout = 30

[connection.tcp]
address = "192.168.0.10"
port = 22222
"#,
        )
        .unwrap();
        assert_eq!(config.library_path(), PathBuf::from("C:/xpc/xpcapi.dll"));
        assert_eq!(config.load_timeout, Some(30));
        assert_eq!(
            config.connection,
            Some(Connection::Tcp {
                address: "192.168.0.10".into(),
                port: 22222
            })
        );
    }

    #[test]
    fn parse_serial_inline() {
        let config = XpcConfig::parse("connection = { serial = { port = 1, baud = 115200 } }").unwrap();
        assert_eq!(
            config.connection,
            Some(Connection::Serial {
                port: 1,
                baud: 115200
            })
        );
        assert!(config.library.is_none());
    }

    #[test]
    fn empty_config_is_default() {
        assert_eq!(XpcConfig::parse("").unwrap(), XpcConfig::default());
    }

    #[test]
    fn bad_config_is_error() {
        let err = XpcConfig::parse("connection = { usb = {} }").unwrap_err();
        assert!(matches!(err, crate::error::XpcError::Config(_)));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "load-timeout = 5").unwrap();
        let config = XpcConfig::load(file.path()).unwrap();
        assert_eq!(config.load_timeout, Some(5));
    }
}
