//! Conversions between native buffers and host values.
//!
//! Native strings are single-byte Latin-1 text; fixed-capacity id lists are
//! terminated by the first negative entry.

use std::ffi::CStr;
use std::os::raw::{c_char, c_int};

use crate::error::{Result, XpcError};

/// Capacity of string buffers handed to the native layer.
pub const STRING_BUFFER_LEN: usize = 256;

/// Decode a NUL-terminated (or full) buffer as Latin-1.
pub fn latin1(buf: &[c_char]) -> String {
    buf.iter()
        .take_while(|&&c| c != 0)
        .map(|&c| char::from(c as u8))
        .collect()
}

/// Decode a native string pointer, treating null as empty.
///
/// # Safety
///
/// A non-null `ptr` must point to a NUL-terminated string.
pub unsafe fn latin1_ptr(ptr: *const c_char) -> String {
    if ptr.is_null() {
        return String::new();
    }
    let bytes = unsafe { CStr::from_ptr(ptr) }.to_bytes();
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Encode a host string as a NUL-terminated Latin-1 buffer.
pub fn encode(text: &str) -> Result<Vec<c_char>> {
    let mut out = Vec::with_capacity(text.len() + 1);
    for ch in text.chars() {
        let byte = u8::try_from(u32::from(ch)).map_err(|_| XpcError::InvalidString {
            detail: format!("'{ch}' in {text:?} is outside Latin-1"),
        })?;
        if byte == 0 {
            return Err(XpcError::InvalidString {
                detail: format!("{text:?} contains a NUL character"),
            });
        }
        out.push(byte as c_char);
    }
    out.push(0);
    Ok(out)
}

/// A zeroed string buffer of [`STRING_BUFFER_LEN`] bytes.
pub fn string_buffer() -> Vec<c_char> {
    vec![0; STRING_BUFFER_LEN]
}

/// An id buffer of `len` entries, pre-filled with the `-1` sentinel.
pub fn id_buffer(len: usize) -> Vec<c_int> {
    vec![-1; len]
}

/// Entries preceding the first negative sentinel.
pub fn until_sentinel(ids: &[c_int]) -> Vec<i32> {
    ids.iter().copied().take_while(|&id| id >= 0).collect()
}
