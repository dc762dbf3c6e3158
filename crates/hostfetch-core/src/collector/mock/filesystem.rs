//! In-memory mock filesystem for testing collectors without real `/etc` and `/proc`.
//!
//! This module provides `MockFs` which simulates a filesystem in memory,
//! allowing tests to run on macOS and in CI environments without Linux.

use crate::collector::traits::{FileSystem, FsStats};
use std::collections::HashMap;
use std::io::{self, BufRead, Cursor, Read};
use std::path::{Path, PathBuf};

/// In-memory filesystem for testing.
///
/// Stores file contents and per-mount statistics in memory, and can simulate
/// resources that open fine but fail while being read.
#[derive(Debug, Clone, Default)]
pub struct MockFs {
    /// Map from path to file contents.
    files: HashMap<PathBuf, Vec<u8>>,
    /// Files whose reads fail after yielding the stored prefix.
    failing: HashMap<PathBuf, Vec<u8>>,
    /// Map from mount point to filesystem statistics.
    stats: HashMap<PathBuf, FsStats>,
}

impl MockFs {
    /// Creates a new empty mock filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a text file with the given content.
    pub fn add_file(&mut self, path: impl AsRef<Path>, content: impl Into<String>) {
        self.add_bytes(path, content.into().into_bytes());
    }

    /// Adds a file with raw (possibly non-UTF-8) content.
    pub fn add_bytes(&mut self, path: impl AsRef<Path>, content: Vec<u8>) {
        let path = path.as_ref().to_path_buf();
        self.failing.remove(&path);
        self.files.insert(path, content);
    }

    /// Adds a file that opens successfully, yields `prefix`, then fails with an I/O error.
    pub fn add_failing_file(&mut self, path: impl AsRef<Path>, prefix: impl Into<String>) {
        let path = path.as_ref().to_path_buf();
        self.files.remove(&path);
        self.failing.insert(path, prefix.into().into_bytes());
    }

    /// Removes a file, making it unavailable.
    pub fn remove_file(&mut self, path: impl AsRef<Path>) {
        self.files.remove(path.as_ref());
        self.failing.remove(path.as_ref());
    }

    /// Registers filesystem statistics for a mount point.
    pub fn add_fs_stats(&mut self, mount_point: impl AsRef<Path>, stats: FsStats) {
        self.stats.insert(mount_point.as_ref().to_path_buf(), stats);
    }
}

/// Reader that yields a fixed prefix, then fails on every later read.
struct FailingReader {
    prefix: Cursor<Vec<u8>>,
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.prefix.read(buf)?;
        if n > 0 {
            return Ok(n);
        }
        Err(io::Error::other("simulated read failure"))
    }
}

impl FileSystem for MockFs {
    fn open(&self, path: &Path) -> io::Result<Box<dyn BufRead + '_>> {
        if let Some(content) = self.files.get(path) {
            return Ok(Box::new(Cursor::new(content.as_slice())));
        }
        if let Some(prefix) = self.failing.get(path) {
            return Ok(Box::new(io::BufReader::new(FailingReader {
                prefix: Cursor::new(prefix.clone()),
            })));
        }
        Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("file not found: {:?}", path),
        ))
    }

    fn fs_stats(&self, path: &Path) -> io::Result<FsStats> {
        self.stats.get(path).copied().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no filesystem mounted at {:?}", path),
            )
        })
    }
}
