//! Native layer: the generated bindings plus the call-then-check plumbing
//! every convenience method goes through.
//!
//! Each generated method looks its entry point up with [`require`], makes
//! the call and then runs [`XpcRaw::check_error`] before handing back the
//! raw result. Nothing else in the crate touches the function table.

mod generated;
pub mod types;

use std::os::raw::{c_char, c_int};
use std::path::Path;

pub use generated::*;

use crate::decode;
use crate::error::{Result, XpcError};
use crate::library::NativeLibrary;

/// Size of the buffer the error message is decoded from.
pub const ERROR_MESSAGE_LEN: usize = 256;

/// Session handle of an unopened connection.
pub const NO_PORT: c_int = -1;

type GetLastErrorFn = unsafe extern "system" fn() -> c_int;
type ErrorMsgFn = unsafe extern "system" fn(c_int, *mut c_char) -> *mut c_char;

/// Unwrap an entry point or report it as unavailable.
fn require<F>(entry: Option<F>, function: &'static str) -> Result<F> {
    entry.ok_or(XpcError::Unavailable { function })
}

/// Loaded entry points, the error-check protocol and the session handle.
pub struct XpcRaw {
    fns: XpcFunctions,
    get_last_error: GetLastErrorFn,
    error_msg: ErrorMsgFn,
    port: c_int,
    library: Option<NativeLibrary>,
}

impl XpcRaw {
    /// Load the native library at `path` and resolve its entry points.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let library = NativeLibrary::load(path)?;
        let fns = unsafe { XpcFunctions::resolve(&library) };
        log::debug!(
            "resolved {}/{} entry points from '{}'",
            fns.resolved_count(),
            XpcFunctions::COUNT,
            library.path().display()
        );
        let mut raw = Self::from_functions(fns)?;
        raw.library = Some(library);
        Ok(raw)
    }

    /// Build the native layer from an already populated function table.
    ///
    /// Fails unless the table carries the two entry points the error-check
    /// protocol needs.
    pub fn from_functions(fns: XpcFunctions) -> Result<Self> {
        let get_last_error = fns.xPCGetLastError.ok_or(XpcError::MissingSymbol {
            symbol: "xPCGetLastError",
        })?;
        let error_msg = fns.xPCErrorMsg.ok_or(XpcError::MissingSymbol {
            symbol: "xPCErrorMsg",
        })?;
        Ok(Self {
            fns,
            get_last_error,
            error_msg,
            port: NO_PORT,
            library: None,
        })
    }

    /// The resolved function table.
    pub fn functions(&self) -> &XpcFunctions {
        &self.fns
    }

    /// Current session handle, [`NO_PORT`] when unopened.
    pub fn port(&self) -> c_int {
        self.port
    }

    /// Replace the session handle used by every session-scoped call.
    pub fn set_port(&mut self, port: c_int) {
        self.port = port;
    }

    /// Read the last-error register and fail if it is set.
    ///
    /// A nonzero register is consumed: it is reset when the library
    /// exports `xPCSetLastError`, and its message is decoded as Latin-1.
    pub fn check_error(&self) -> Result<()> {
        let code = unsafe { (self.get_last_error)() };
        if code == 0 {
            return Ok(());
        }

        let mut buf = vec![0 as c_char; ERROR_MESSAGE_LEN];
        unsafe { (self.error_msg)(code, buf.as_mut_ptr()) };
        let message = decode::latin1(&buf);

        if let Some(reset) = self.fns.xPCSetLastError {
            unsafe { reset(0) };
        }
        log::debug!("native error {code}: {message}");
        Err(XpcError::Native { code, message })
    }
}

impl std::fmt::Debug for XpcRaw {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("XpcRaw")
            .field("port", &self.port)
            .field("resolved", &self.fns.resolved_count())
            .field("library", &self.library)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    thread_local! {
        static LAST_ERROR: Cell<c_int> = const { Cell::new(0) };
        static MSG_CALLS: Cell<u32> = const { Cell::new(0) };
    }

    unsafe extern "system" fn get_last_error() -> c_int {
        LAST_ERROR.with(Cell::get)
    }

    unsafe extern "system" fn set_last_error(code: c_int) {
        LAST_ERROR.with(|e| e.set(code));
    }

    unsafe extern "system" fn error_msg(_code: c_int, buf: *mut c_char) -> *mut c_char {
        MSG_CALLS.with(|c| c.set(c.get() + 1));
        let text = b"Invalid Scope\0";
        unsafe { std::ptr::copy_nonoverlapping(text.as_ptr().cast(), buf, text.len()) };
        buf
    }

    unsafe extern "system" fn get_num_signals(port: c_int) -> c_int {
        if port < 0 {
            LAST_ERROR.with(|e| e.set(7));
        }
        port * 10
    }

    fn raw() -> XpcRaw {
        LAST_ERROR.with(|e| e.set(0));
        MSG_CALLS.with(|c| c.set(0));
        XpcRaw::from_functions(XpcFunctions {
            xPCGetLastError: Some(get_last_error),
            xPCSetLastError: Some(set_last_error),
            xPCErrorMsg: Some(error_msg),
            xPCGetNumSignals: Some(get_num_signals),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn missing_protocol_symbols_rejected() {
        let err = XpcRaw::from_functions(XpcFunctions::default()).unwrap_err();
        assert!(matches!(
            err,
            XpcError::MissingSymbol {
                symbol: "xPCGetLastError"
            }
        ));

        let err = XpcRaw::from_functions(XpcFunctions {
            xPCGetLastError: Some(get_last_error),
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(err, XpcError::MissingSymbol { symbol: "xPCErrorMsg" }));
    }

    #[test]
    fn clean_register_is_ok() {
        let raw = raw();
        assert!(raw.check_error().is_ok());
        assert_eq!(MSG_CALLS.with(Cell::get), 0);
    }

    #[test]
    fn error_is_decoded_and_consumed() {
        let raw = raw();
        LAST_ERROR.with(|e| e.set(3));
        match raw.check_error() {
            Err(XpcError::Native { code, message }) => {
                assert_eq!(code, 3);
                assert_eq!(message, "Invalid Scope");
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(raw.check_error().is_ok());
    }

    #[test]
    fn session_handle_is_supplied_implicitly() {
        let mut raw = raw();
        raw.set_port(4);
        assert_eq!(raw.getNumSignals().unwrap(), 40);

        raw.set_port(NO_PORT);
        assert!(matches!(
            raw.getNumSignals(),
            Err(XpcError::Native { code: 7, .. })
        ));
    }

    #[test]
    fn absent_entry_point_is_unavailable() {
        let raw = raw();
        assert!(matches!(
            raw.getNumParams(),
            Err(XpcError::Unavailable {
                function: "xPCGetNumParams"
            })
        ));
    }
}
