//! Abstractions for filesystem access to enable testing and mocking.
//!
//! The `FileSystem` trait lets the collector work with the real `/etc` and
//! `/proc` files on Linux as well as with in-memory fixtures in tests.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Raw filesystem statistics for one mount point, as reported by `statvfs`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FsStats {
    /// Size of the filesystem in fragment-size units (`f_blocks`).
    pub total_blocks: u64,
    /// Free blocks (`f_bfree`).
    pub free_blocks: u64,
    /// Fragment size in bytes (`f_frsize`).
    pub fragment_size: u64,
}

/// Abstraction for filesystem operations.
///
/// This trait allows collectors to read from the real filesystem or from
/// a mock implementation for testing purposes.
pub trait FileSystem: Send + Sync {
    /// Opens a text resource for buffered reading.
    ///
    /// The returned reader owns the underlying handle; it is released when
    /// the reader is dropped.
    fn open(&self, path: &Path) -> io::Result<Box<dyn BufRead + '_>>;

    /// Returns filesystem statistics for the filesystem containing `path`.
    fn fs_stats(&self, path: &Path) -> io::Result<FsStats>;
}

/// Real filesystem implementation backed by `std::fs` and `statvfs(3)`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFs;

impl RealFs {
    /// Creates a new `RealFs` instance.
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for RealFs {
    fn open(&self, path: &Path) -> io::Result<Box<dyn BufRead + '_>> {
        let file = File::open(path)?;
        Ok(Box::new(BufReader::new(file)))
    }

    #[cfg(unix)]
    #[allow(clippy::unnecessary_cast)]
    fn fs_stats(&self, path: &Path) -> io::Result<FsStats> {
        use std::ffi::CString;
        use std::os::unix::ffi::OsStrExt;

        let c_path = CString::new(path.as_os_str().as_bytes())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        // SAFETY: `statvfs` is a plain C struct without pointers; an all-zero
        // value is valid and is overwritten by the call below.
        let mut stat: libc::statvfs = unsafe { std::mem::zeroed() };

        // SAFETY: `c_path` is a valid NUL-terminated string that outlives the
        // call, and `stat` is a valid, exclusively borrowed struct.
        let rc = unsafe { libc::statvfs(c_path.as_ptr(), &mut stat) };
        if rc != 0 {
            return Err(io::Error::last_os_error());
        }

        Ok(FsStats {
            total_blocks: stat.f_blocks as u64,
            free_blocks: stat.f_bfree as u64,
            fragment_size: stat.f_frsize as u64,
        })
    }

    #[cfg(not(unix))]
    fn fs_stats(&self, _path: &Path) -> io::Result<FsStats> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "statvfs is not available on this platform",
        ))
    }
}
