//! Host collector for gathering the facts of one report.

use crate::collector::error::CollectError;
use crate::collector::lines::{DEFAULT_MAX_LINE_LEN, read_lines};
use crate::collector::procfs::parser::{
    MemInfo, ParseError, parse_hostname, parse_kernel_version, parse_meminfo, parse_os_release,
    parse_uptime,
};
use crate::collector::traits::FileSystem;
use crate::models::{DiskSnapshot, HostFacts, HostSnapshot, MemorySnapshot, OsIdentity, Uptime};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Locations of the resources the collector reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostPaths {
    /// Base of the configuration tree (usually "/etc").
    pub etc: PathBuf,
    /// Base of the proc filesystem (usually "/proc").
    pub proc: PathBuf,
    /// Mount point whose disk usage is reported (usually "/").
    pub mount_point: PathBuf,
}

impl Default for HostPaths {
    fn default() -> Self {
        Self {
            etc: PathBuf::from("/etc"),
            proc: PathBuf::from("/proc"),
            mount_point: PathBuf::from("/"),
        }
    }
}

impl HostPaths {
    pub fn new(
        etc: impl Into<PathBuf>,
        proc: impl Into<PathBuf>,
        mount_point: impl Into<PathBuf>,
    ) -> Self {
        Self {
            etc: etc.into(),
            proc: proc.into(),
            mount_point: mount_point.into(),
        }
    }

    /// `os-release` locations in lookup order, see os-release(5).
    ///
    /// The fallback sits next to `etc`, so a relocated root such as
    /// `/mnt/etc` looks in `/mnt/usr/lib/os-release`.
    pub fn os_release_candidates(&self) -> Vec<PathBuf> {
        let root = self.etc.parent().unwrap_or_else(|| Path::new("/"));
        vec![
            self.etc.join("os-release"),
            root.join("usr/lib/os-release"),
        ]
    }

    pub fn hostname_candidates(&self) -> Vec<PathBuf> {
        vec![
            self.etc.join("hostname"),
            self.proc.join("sys/kernel/hostname"),
        ]
    }

    pub fn version(&self) -> PathBuf {
        self.proc.join("version")
    }

    pub fn meminfo(&self) -> PathBuf {
        self.proc.join("meminfo")
    }

    pub fn uptime(&self) -> PathBuf {
        self.proc.join("uptime")
    }
}

/// Environment-derived inputs to a snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostEnv {
    pub user: Option<String>,
    /// Full shell path, e.g. `/usr/bin/zsh`.
    pub shell: Option<String>,
}

impl HostEnv {
    /// Reads `USER` and `SHELL` from the process environment.
    pub fn from_process() -> Self {
        Self {
            user: std::env::var("USER").ok(),
            shell: std::env::var("SHELL").ok(),
        }
    }
}

/// Which fact a warning concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactSource {
    Hostname,
    OsRelease,
    Kernel,
    Memory,
    Uptime,
    Disk,
}

impl fmt::Display for FactSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FactSource::Hostname => "hostname",
            FactSource::OsRelease => "os-release",
            FactSource::Kernel => "kernel",
            FactSource::Memory => "memory",
            FactSource::Uptime => "uptime",
            FactSource::Disk => "disk",
        };
        f.write_str(name)
    }
}

/// A fact that was replaced by its default because collection failed.
#[derive(Debug)]
pub struct CollectWarning {
    pub source: FactSource,
    pub error: CollectError,
}

impl fmt::Display for CollectWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.source, self.error)
    }
}

/// A snapshot plus the warnings produced while gathering it.
#[derive(Debug)]
pub struct Collection {
    pub snapshot: HostSnapshot,
    pub warnings: Vec<CollectWarning>,
}

impl Collection {
    pub fn has_warning(&self, source: FactSource) -> bool {
        self.warnings.iter().any(|w| w.source == source)
    }
}

/// Collects host facts from `/etc`, `/proc` and `statvfs`.
///
/// Each resource is read to completion before the next one is opened.
pub struct HostCollector<F: FileSystem> {
    fs: F,
    paths: HostPaths,
    max_line_len: usize,
}

impl<F: FileSystem> HostCollector<F> {
    /// Creates a new host collector.
    ///
    /// # Arguments
    /// * `fs` - Filesystem implementation (real or mock)
    /// * `paths` - Resource locations
    pub fn new(fs: F, paths: HostPaths) -> Self {
        Self {
            fs,
            paths,
            max_line_len: DEFAULT_MAX_LINE_LEN,
        }
    }

    /// Overrides the per-line length bound of the line reader.
    pub fn with_max_line_len(mut self, max_line_len: usize) -> Self {
        self.max_line_len = max_line_len;
        self
    }

    /// Gathers every fact and assembles the snapshot.
    ///
    /// Never fails: a fact that cannot be collected is replaced by its zero
    /// or absent default, and the failure is recorded as a warning.
    pub fn collect(&self, env: &HostEnv) -> Collection {
        debug!(
            etc = %self.paths.etc.display(),
            proc = %self.paths.proc.display(),
            "collecting host facts"
        );
        let mut warnings = Vec::new();

        let hostname = degrade(self.collect_hostname(), FactSource::Hostname, &mut warnings);
        let os = degrade(self.collect_os_release(), FactSource::OsRelease, &mut warnings)
            .unwrap_or_default();
        let kernel = degrade(self.collect_kernel(), FactSource::Kernel, &mut warnings);

        let memory = match self.collect_meminfo() {
            Ok(info) => {
                if info.total_kib.is_none() {
                    push(&mut warnings, FactSource::Memory, self.missing_key("MemTotal"));
                }
                if info.available_kib.is_none() {
                    push(&mut warnings, FactSource::Memory, self.missing_key("MemAvailable"));
                }
                MemorySnapshot::from_meminfo(&info)
            }
            Err(e) => {
                push(&mut warnings, FactSource::Memory, e);
                MemorySnapshot::default()
            }
        };

        let uptime = degrade(self.collect_uptime(), FactSource::Uptime, &mut warnings)
            .unwrap_or_default();
        let disk = degrade(self.collect_disk(), FactSource::Disk, &mut warnings)
            .unwrap_or_default();

        let snapshot = HostSnapshot::assemble(HostFacts {
            user: env.user.clone(),
            hostname,
            os,
            kernel,
            shell_path: env.shell.clone(),
            memory,
            uptime,
            disk,
        });

        Collection { snapshot, warnings }
    }

    /// Reads the hostname, falling back to the kernel's view of it.
    pub fn collect_hostname(&self) -> Result<String, CollectError> {
        let mut last_err = None;
        for path in self.paths.hostname_candidates() {
            match self.read(&path) {
                Ok(lines) => match parse_hostname(&lines) {
                    Some(name) => return Ok(name),
                    None => last_err = Some(CollectError::malformed(&path, "empty hostname")),
                },
                Err(e) => last_err = Some(e),
            }
        }
        Err(last_err
            .unwrap_or_else(|| CollectError::malformed(&self.paths.etc, "no hostname source")))
    }

    /// Reads the OS identity from the first available `os-release`.
    pub fn collect_os_release(&self) -> Result<OsIdentity, CollectError> {
        let mut last_err = None;
        for path in self.paths.os_release_candidates() {
            match self.read(&path) {
                Ok(lines) => return Ok(parse_os_release(&lines)),
                Err(e) if e.is_unavailable() => last_err = Some(e),
                Err(e) => return Err(e),
            }
        }
        Err(last_err
            .unwrap_or_else(|| CollectError::malformed(&self.paths.etc, "no os-release source")))
    }

    /// Reads the kernel release from `/proc/version`.
    pub fn collect_kernel(&self) -> Result<String, CollectError> {
        let path = self.paths.version();
        let lines = self.read(&path)?;
        parse_kernel_version(&lines).map_err(|e| malformed(&path, e))
    }

    /// Reads `MemTotal` and `MemAvailable` from `/proc/meminfo`.
    pub fn collect_meminfo(&self) -> Result<MemInfo, CollectError> {
        let lines = self.read(&self.paths.meminfo())?;
        Ok(parse_meminfo(&lines))
    }

    /// Reads the time since boot from `/proc/uptime`.
    pub fn collect_uptime(&self) -> Result<Uptime, CollectError> {
        let path = self.paths.uptime();
        let lines = self.read(&path)?;
        parse_uptime(&lines).map_err(|e| malformed(&path, e))
    }

    /// Queries filesystem statistics for the configured mount point.
    pub fn collect_disk(&self) -> Result<DiskSnapshot, CollectError> {
        let path = &self.paths.mount_point;
        let stats = self
            .fs
            .fs_stats(path)
            .map_err(|source| CollectError::FsStats {
                path: path.clone(),
                source,
            })?;
        Ok(DiskSnapshot::from_stats(&stats))
    }

    fn read(&self, path: &Path) -> Result<Vec<String>, CollectError> {
        read_lines(&self.fs, path, self.max_line_len)
    }

    fn missing_key(&self, key: &str) -> CollectError {
        CollectError::malformed(self.paths.meminfo(), format!("missing {}", key))
    }
}

fn malformed(path: &Path, e: ParseError) -> CollectError {
    CollectError::malformed(path, e.message)
}

fn push(warnings: &mut Vec<CollectWarning>, source: FactSource, error: CollectError) {
    warn!(fact = %source, error = %error, "fact unavailable, using default");
    warnings.push(CollectWarning { source, error });
}

/// Turns a failed collection into `None` and a recorded warning.
fn degrade<T>(
    result: Result<T, CollectError>,
    source: FactSource,
    warnings: &mut Vec<CollectWarning>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            push(warnings, source, e);
            None
        }
    }
}
