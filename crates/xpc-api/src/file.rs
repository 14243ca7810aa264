//! Target file system access.

use std::io;
use std::os::raw::{c_int, c_uchar};

use chrono::{NaiveDate, NaiveDateTime};

use crate::decode::{encode, latin1, string_buffer};
use crate::error::{Result, XpcError};
use crate::raw::types::{DirStruct, DiskInfo};
use crate::session::XpcApi;

/// One entry of a remote directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    /// `NAME.EXT`, or just `NAME` when there is no extension.
    pub name: String,
    pub size: u64,
    pub is_dir: bool,
    /// Last modification, `None` when the target reports an invalid date.
    pub modified: Option<NaiveDateTime>,
}

impl From<&DirStruct> for FileInfo {
    fn from(entry: &DirStruct) -> Self {
        let name = latin1(&entry.name);
        let ext = latin1(&entry.ext);
        let (name, ext) = (name.trim(), ext.trim());
        let name = if ext.is_empty() {
            name.to_string()
        } else {
            format!("{name}.{ext}")
        };

        let modified = u32::try_from(entry.month)
            .ok()
            .zip(u32::try_from(entry.day).ok())
            .and_then(|(month, day)| NaiveDate::from_ymd_opt(entry.year, month, day))
            .zip(u32::try_from(entry.hour).ok().zip(u32::try_from(entry.min).ok()))
            .and_then(|(date, (hour, min))| date.and_hms_opt(hour, min, 0));

        Self {
            name,
            size: u64::from(entry.size),
            is_dir: entry.is_dir != 0,
            modified,
        }
    }
}

/// A file on the target opened for reading.
///
/// The size is read once at open time. The handle is closed on drop if
/// [`RemoteFile::close`] was not called.
#[derive(Debug)]
pub struct RemoteFile<'a> {
    api: &'a XpcApi,
    handle: Option<c_int>,
    name: String,
    position: usize,
    size: usize,
}

impl<'a> RemoteFile<'a> {
    fn open(api: &'a XpcApi, name: &str) -> Result<Self> {
        let mut name_buf = encode(name)?;
        let mut mode_buf = encode("r")?;
        let handle =
            unsafe { api.raw().fSOpenFile(name_buf.as_mut_ptr(), mode_buf.as_mut_ptr()) }?;
        let mut file = Self {
            api,
            handle: Some(handle),
            name: name.to_string(),
            position: 0,
            size: 0,
        };
        // dropping `file` on error closes the handle
        file.size = usize::try_from(api.raw().fSGetFileSize(handle)?).unwrap_or(0);
        log::debug!("opened remote file '{name}' ({} bytes)", file.size);
        Ok(file)
    }

    /// Size cached at open time.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Bytes read so far.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Bytes left before the cached end of file.
    pub fn remaining(&self) -> usize {
        self.size - self.position
    }

    /// Read up to `len` bytes, or everything that is left when `len` is
    /// `None`. Returns an empty buffer at end of file.
    pub fn read_bytes(&mut self, len: Option<usize>) -> Result<Vec<u8>> {
        let len = len.map_or(self.remaining(), |n| n.min(self.remaining()));
        let mut buf = vec![0u8; len];
        let read = self.read_into(&mut buf)?;
        buf.truncate(read);
        Ok(buf)
    }

    fn read_into(&mut self, buf: &mut [u8]) -> Result<usize> {
        let handle = self.handle.ok_or(XpcError::FileClosed)?;
        let len = buf.len().min(self.remaining());
        if len == 0 {
            return Ok(0);
        }
        let (start, count) = match (c_int::try_from(self.position), c_int::try_from(len)) {
            (Ok(start), Ok(count)) => (start, count),
            _ => {
                return Err(XpcError::NotImplemented {
                    detail: format!("reads beyond {} bytes", c_int::MAX),
                })
            }
        };
        unsafe {
            self.api
                .raw()
                .fSReadFile(handle, start, count, buf.as_mut_ptr().cast::<c_uchar>())
        }?;
        self.position += len;
        Ok(len)
    }

    /// Close the handle. Closing twice is a no-op.
    pub fn close(&mut self) -> Result<()> {
        match self.handle.take() {
            Some(handle) => {
                log::debug!("closing remote file '{}'", self.name);
                self.api.raw().fSCloseFile(handle)
            }
            None => Ok(()),
        }
    }

    pub fn is_closed(&self) -> bool {
        self.handle.is_none()
    }
}

impl io::Read for RemoteFile<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(self.read_into(buf)?)
    }
}

impl Drop for RemoteFile<'_> {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            log::warn!("failed to close remote file '{}': {e}", self.name);
        }
    }
}

impl XpcApi {
    /// Open a remote file. Only mode `"r"` is supported.
    pub fn open_file(&self, name: &str, mode: &str) -> Result<RemoteFile<'_>> {
        if mode != "r" {
            return Err(XpcError::UnsupportedMode {
                mode: mode.to_string(),
            });
        }
        RemoteFile::open(self, name)
    }

    /// Entries of a remote directory.
    pub fn list_dir(&self, path: &str) -> Result<Vec<FileInfo>> {
        let mut path_buf = encode(path)?;
        let count = unsafe { self.raw().fSDirStructSize(path_buf.as_mut_ptr()) }?;
        if count <= 0 {
            return Ok(Vec::new());
        }
        let mut entries = vec![DirStruct::default(); count as usize];
        unsafe {
            self.raw()
                .fSDirItems(path_buf.as_mut_ptr(), entries.as_mut_ptr(), count)
        }?;
        Ok(entries.iter().map(FileInfo::from).collect())
    }

    /// Drive information for `drive` (e.g. `"C:\\"`).
    pub fn disk_info(&self, drive: &str) -> Result<DiskInfo> {
        let mut drive = encode(drive)?;
        unsafe { self.raw().fSDiskInfo(drive.as_mut_ptr()) }
    }

    /// Current remote working directory.
    pub fn pwd(&self) -> Result<String> {
        let mut buf = string_buffer();
        unsafe { self.raw().fSGetPWD(buf.as_mut_ptr()) }?;
        Ok(latin1(&buf))
    }

    pub fn cd(&self, dir: &str) -> Result<()> {
        let mut dir = encode(dir)?;
        unsafe { self.raw().fSCD(dir.as_mut_ptr()) }
    }

    pub fn mkdir(&self, dir: &str) -> Result<()> {
        let mut dir = encode(dir)?;
        unsafe { self.raw().fSMKDIR(dir.as_mut_ptr()) }
    }

    pub fn rmdir(&self, dir: &str) -> Result<()> {
        let mut dir = encode(dir)?;
        unsafe { self.raw().fSRMDIR(dir.as_mut_ptr()) }
    }

    pub fn remove_file(&self, name: &str) -> Result<()> {
        let mut name = encode(name)?;
        unsafe { self.raw().fSRemoveFile(name.as_mut_ptr()) }
    }
}
