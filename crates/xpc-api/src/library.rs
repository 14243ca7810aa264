//! Native library loading and symbol lookup.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use libloading::Library;

use crate::error::Result;

/// File name of the vendor library.
pub const LIBRARY_FILE: &str = "xpcapi.dll";

/// Environment variable overriding the default library location.
pub const LIBRARY_ENV: &str = "XPCAPI_PATH";

/// A loaded native library.
pub struct NativeLibrary {
    library: Library,
    path: PathBuf,
}

impl NativeLibrary {
    /// Load the library at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let library = unsafe { Library::new(path) }?;
        log::debug!("loaded native library '{}'", path.display());
        Ok(Self {
            library,
            path: path.to_path_buf(),
        })
    }

    /// Look up an exported symbol, returning `None` if it is absent.
    ///
    /// `name` must be NUL-terminated.
    ///
    /// # Safety
    ///
    /// `F` must match the actual type of the exported symbol.
    pub unsafe fn symbol<F: Copy>(&self, name: &[u8]) -> Option<F> {
        match unsafe { self.library.get::<F>(name) } {
            Ok(symbol) => Some(*symbol),
            Err(_) => {
                let printable = name.strip_suffix(b"\0").unwrap_or(name);
                log::debug!(
                    "'{}' does not export '{}'",
                    self.path.display(),
                    String::from_utf8_lossy(printable)
                );
                None
            }
        }
    }

    /// Path the library was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl std::fmt::Debug for NativeLibrary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativeLibrary")
            .field("path", &self.path)
            .finish()
    }
}

/// Default library location.
///
/// `XPCAPI_PATH` wins when set; otherwise the library is expected next to
/// the running executable, falling back to a bare file name resolved by
/// the platform loader.
pub fn default_library_path() -> PathBuf {
    library_path_from(
        std::env::var_os(LIBRARY_ENV).as_deref(),
        std::env::current_exe().ok().as_deref(),
    )
}

fn library_path_from(env: Option<&OsStr>, exe: Option<&Path>) -> PathBuf {
    if let Some(path) = env.filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }
    match exe.and_then(Path::parent) {
        Some(dir) => dir.join(LIBRARY_FILE),
        None => PathBuf::from(LIBRARY_FILE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_override_wins() {
        let path = library_path_from(
            Some(OsStr::new("/opt/xpc/xpcapi.dll")),
            Some(Path::new("/usr/bin/tool")),
        );
        assert_eq!(path, PathBuf::from("/opt/xpc/xpcapi.dll"));
    }

    #[test]
    fn defaults_next_to_executable() {
        let path = library_path_from(None, Some(Path::new("/usr/bin/tool")));
        assert_eq!(path, Path::new("/usr/bin").join(LIBRARY_FILE));
    }

    #[test]
    fn empty_env_is_ignored() {
        let path = library_path_from(Some(OsStr::new("")), None);
        assert_eq!(path, PathBuf::from(LIBRARY_FILE));
    }

    #[test]
    fn missing_library_is_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = NativeLibrary::load(dir.path().join("absent.dll")).unwrap_err();
        assert!(matches!(err, crate::error::XpcError::Load(_)));
    }
}
