//! Generator configuration (`xpcgen.toml`) parsing.
//!
//! The configuration names the library's reserved tokens and tells the type
//! mapper how typedef names from the header map onto the hand-written
//! record module.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::csig::is_identifier;
use crate::error::{BindgenError, Result};

/// Complete generator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Naming conventions of the native library.
    #[serde(default)]
    pub library: LibraryConventions,
    /// Whole-identifier replacements applied to the header before parsing.
    #[serde(default)]
    pub substitutions: BTreeMap<String, String>,
    /// Typedef name → Rust type name in the record module.
    #[serde(default = "default_records")]
    pub records: BTreeMap<String, String>,
}

/// Reserved tokens of the native library.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LibraryConventions {
    /// Prefix every exported function carries.
    #[serde(default = "default_prefix")]
    pub prefix: String,
    /// Name of the leading session-handle parameter.
    #[serde(default = "default_session_param")]
    pub session_param: String,
    /// Export annotation of the form `MACRO(type, name)`.
    #[serde(default)]
    pub export_macro: Option<String>,
    /// Prefix marking scalar (maximum-value) constants.
    #[serde(default = "default_scalar_marker")]
    pub scalar_marker: String,
}

fn default_prefix() -> String {
    "xPC".to_string()
}

fn default_session_param() -> String {
    "port".to_string()
}

fn default_scalar_marker() -> String {
    "MAX_".to_string()
}

fn default_records() -> BTreeMap<String, String> {
    [
        ("scopedata", "ScopeData"),
        ("dirStruct", "DirStruct"),
        ("diskinfo", "DiskInfo"),
        ("lgmode", "LgMode"),
        ("fileinfo", "FileHandleInfo"),
    ]
    .into_iter()
    .map(|(c, rust)| (c.to_string(), rust.to_string()))
    .collect()
}

impl Default for LibraryConventions {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            session_param: default_session_param(),
            export_macro: Some("XPCAPIFUNC".to_string()),
            scalar_marker: default_scalar_marker(),
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            library: LibraryConventions::default(),
            substitutions: BTreeMap::from([("HMODULE".to_string(), "void * module".to_string())]),
            records: default_records(),
        }
    }
}

impl GeneratorConfig {
    /// Parse a configuration from a TOML string.
    pub fn parse(input: &str) -> Result<Self> {
        let config: GeneratorConfig = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Canonical text of every setting that shapes the generated module.
    ///
    /// One `key=value` line per setting; map entries in key order.
    pub fn fingerprint(&self) -> String {
        let lib = &self.library;
        let mut out = format!(
            "library.prefix={}\nlibrary.session-param={}\nlibrary.export-macro={}\nlibrary.scalar-marker={}\n",
            lib.prefix,
            lib.session_param,
            lib.export_macro.as_deref().unwrap_or(""),
            lib.scalar_marker,
        );
        for (from, to) in &self.substitutions {
            out.push_str(&format!("substitution.{from}={to}\n"));
        }
        for (c_name, rust) in &self.records {
            out.push_str(&format!("record.{c_name}={rust}\n"));
        }
        out
    }

    fn validate(&self) -> Result<()> {
        let lib = &self.library;
        if lib.prefix.is_empty() || !is_identifier(&lib.prefix) {
            return Err(BindgenError::InvalidConfig {
                detail: format!("library.prefix '{}' is not an identifier", lib.prefix),
            });
        }
        if !is_identifier(&lib.session_param) {
            return Err(BindgenError::InvalidConfig {
                detail: format!(
                    "library.session-param '{}' is not an identifier",
                    lib.session_param
                ),
            });
        }
        if lib.scalar_marker.is_empty() {
            return Err(BindgenError::InvalidConfig {
                detail: "library.scalar-marker must not be empty".to_string(),
            });
        }
        for (from, to) in &self.substitutions {
            if !is_identifier(from) {
                return Err(BindgenError::InvalidConfig {
                    detail: format!("substitution key '{from}' is not an identifier"),
                });
            }
            if to.contains(';') {
                return Err(BindgenError::InvalidConfig {
                    detail: format!("substitution for '{from}' must not contain ';'"),
                });
            }
        }
        for (c_name, rust_name) in &self.records {
            if !is_identifier(rust_name) {
                return Err(BindgenError::InvalidConfig {
                    detail: format!("record '{c_name}' maps to invalid Rust name '{rust_name}'"),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_config() {
        let toml = r#"
[library]
prefix = "xPC"
session-param = "port"
export-macro = "XPCAPIFUNC"
scalar-marker = "MAX_"

[substitutions]
HMODULE = "void * module"

[records]
scopedata = "ScopeData"
"#;
        let config = GeneratorConfig::parse(toml).unwrap();
        assert_eq!(config.library.prefix, "xPC");
        assert_eq!(config.library.session_param, "port");
        assert_eq!(config.library.export_macro.as_deref(), Some("XPCAPIFUNC"));
        assert_eq!(config.substitutions["HMODULE"], "void * module");
        assert_eq!(config.records.len(), 1);
    }

    #[test]
    fn parse_minimal_config_uses_defaults() {
        let config = GeneratorConfig::parse("").unwrap();
        assert_eq!(config.library.prefix, "xPC");
        assert_eq!(config.library.scalar_marker, "MAX_");
        assert_eq!(config.records["scopedata"], "ScopeData");
        assert!(config.substitutions.is_empty());
    }

    #[test]
    fn reject_bad_prefix() {
        let toml = r#"
[library]
prefix = "x-PC"
"#;
        assert!(matches!(
            GeneratorConfig::parse(toml),
            Err(BindgenError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn reject_bad_record_name() {
        let toml = r#"
[records]
scopedata = "scope data"
"#;
        assert!(GeneratorConfig::parse(toml).is_err());
    }

    #[test]
    fn default_matches_support_file() {
        let config = GeneratorConfig::default();
        assert_eq!(config.library.export_macro.as_deref(), Some("XPCAPIFUNC"));
        assert_eq!(config.substitutions["HMODULE"], "void * module");
    }

    #[test]
    fn fingerprint_tracks_every_setting() {
        let base = GeneratorConfig::default();
        let text = base.fingerprint();
        assert!(text.starts_with("library.prefix=xPC\nlibrary.session-param=port\n"));
        assert!(text.contains("substitution.HMODULE=void * module\n"));
        assert!(text.contains("record.scopedata=ScopeData\n"));

        let mut other = base.clone();
        other.library.session_param = "handle".to_string();
        assert_ne!(other.fingerprint(), text);

        let mut other = base.clone();
        other.records.insert("extra".to_string(), "Extra".to_string());
        assert_ne!(other.fingerprint(), text);
    }
}
