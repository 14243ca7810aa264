//! Fixed-layout records exchanged with the native library.
//!
//! Field order and widths mirror the vendor headers exactly. The library is
//! a Windows build, so C `unsigned long` is 32 bits wide.

use std::os::raw::{c_char, c_double, c_int};

/// Number of signal slots in [`ScopeData::signals`].
pub const SCOPE_SIGNAL_SLOTS: usize = 20;

/// Complete state of one scope (`scopedata`).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScopeData {
    pub number: c_int,
    pub scope_type: c_int,
    pub state: c_int,
    /// Signal indices, terminated by the first negative entry.
    pub signals: [c_int; SCOPE_SIGNAL_SLOTS],
    pub num_samples: c_int,
    pub decimation: c_int,
    pub trigger_mode: c_int,
    pub num_pre_post_samples: c_int,
    pub trigger_signal: c_int,
    pub trigger_scope: c_int,
    pub trigger_scope_sample: c_int,
    pub trigger_level: c_double,
    pub trigger_slope: c_int,
}

/// One entry of a remote directory listing (`dirStruct`).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirStruct {
    /// 8.3 base name, space padded, not necessarily NUL-terminated.
    pub name: [c_char; 8],
    pub ext: [c_char; 3],
    pub day: c_int,
    pub month: c_int,
    pub year: c_int,
    pub hour: c_int,
    pub min: c_int,
    pub is_dir: c_int,
    pub size: u32,
}

/// Remote drive information (`diskinfo`).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DiskInfo {
    pub drive_letter: c_char,
    pub label: [c_char; 3],
    pub reserved: [c_char; 0],
    pub serial_number: c_int,
    pub first_physical_sector: c_char,
    pub fat_type: c_double,
    pub fat_count: c_char,
    pub max_dir_entries: c_char,
    pub bytes_per_sector: c_char,
    pub sectors_per_cluster: c_char,
    pub total_clusters: c_char,
    pub bad_clusters: c_char,
    pub free_clusters: c_char,
    pub files: c_char,
    pub file_chains: c_char,
    pub free_chains: c_char,
    pub largest_free_chain: c_int,
}

/// Data logging mode (`lgmode`), passed as a plain integer.
pub type LgMode = c_int;

/// Remote file information (`fileinfo`), passed as a plain integer.
pub type FileHandleInfo = c_int;
