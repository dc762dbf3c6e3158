//! Typed host facts.
//!
//! Each extractor produces one of these records; [`HostSnapshot::assemble`]
//! composes them into the immutable snapshot handed to the presentation layer.

use crate::collector::procfs::parser::MemInfo;
use crate::collector::traits::FsStats;

/// Placeholder used for facts that could not be resolved at all.
pub const UNKNOWN: &str = "unknown";

const KIB_PER_GIB: f64 = 1024.0 * 1024.0;
const BYTES_PER_GIB: f64 = 1024.0 * 1024.0 * 1024.0;

const SECS_PER_DAY: u64 = 86_400;
const SECS_PER_HOUR: u64 = 3_600;
const SECS_PER_MINUTE: u64 = 60;

/// Operating system identity from `os-release`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OsIdentity {
    pub name: Option<String>,
    pub version: Option<String>,
    pub build_id: Option<String>,
}

/// Memory usage in GiB.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MemorySnapshot {
    pub total_gib: f64,
    pub used_gib: f64,
}

impl MemorySnapshot {
    /// Converts parsed `/proc/meminfo` values.
    ///
    /// Used memory is `MemTotal - MemAvailable`, clamped at zero. An absent
    /// total leaves `total_gib` at zero; an absent available leaves `used_gib`
    /// at zero.
    pub fn from_meminfo(info: &MemInfo) -> Self {
        let total_gib = info.total_kib.map_or(0.0, |kib| kib as f64 / KIB_PER_GIB);
        let used_gib = match info.available_kib {
            Some(kib) => (total_gib - kib as f64 / KIB_PER_GIB).max(0.0),
            None => 0.0,
        };
        Self {
            total_gib,
            used_gib,
        }
    }
}

/// Time since boot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Uptime {
    pub seconds: u64,
}

/// Uptime broken down into calendar-style components.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UptimeParts {
    pub days: u64,
    /// 0..24
    pub hours: u64,
    /// 0..60
    pub minutes: u64,
    /// 0..60
    pub seconds: u64,
}

impl Uptime {
    pub fn from_secs(seconds: u64) -> Self {
        Self { seconds }
    }

    pub fn parts(&self) -> UptimeParts {
        let s = self.seconds;
        UptimeParts {
            days: s / SECS_PER_DAY,
            hours: (s % SECS_PER_DAY) / SECS_PER_HOUR,
            minutes: (s % SECS_PER_HOUR) / SECS_PER_MINUTE,
            seconds: s % SECS_PER_MINUTE,
        }
    }
}

/// Disk usage of one mount point in GiB.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DiskSnapshot {
    pub total_gib: f64,
    pub used_gib: f64,
}

impl DiskSnapshot {
    /// Converts raw `statvfs` block counts, in floating point so that
    /// sub-GiB filesystems do not round down to zero.
    pub fn from_stats(stats: &FsStats) -> Self {
        let block = stats.fragment_size as f64;
        let used_blocks = stats.total_blocks.saturating_sub(stats.free_blocks);
        Self {
            total_gib: stats.total_blocks as f64 * block / BYTES_PER_GIB,
            used_gib: used_blocks as f64 * block / BYTES_PER_GIB,
        }
    }
}

/// Raw inputs to [`HostSnapshot::assemble`].
///
/// Every field may be absent; assembly fills in placeholders.
#[derive(Debug, Clone, Default)]
pub struct HostFacts {
    pub user: Option<String>,
    pub hostname: Option<String>,
    pub os: OsIdentity,
    pub kernel: Option<String>,
    /// Full shell path as found in `$SHELL`.
    pub shell_path: Option<String>,
    pub memory: MemorySnapshot,
    pub uptime: Uptime,
    pub disk: DiskSnapshot,
}

/// Complete set of facts for one report. Immutable once assembled.
#[derive(Debug, Clone, PartialEq)]
pub struct HostSnapshot {
    username: String,
    hostname: String,
    os: OsIdentity,
    kernel: Option<String>,
    shell: String,
    memory: MemorySnapshot,
    uptime: Uptime,
    disk: DiskSnapshot,
}

impl HostSnapshot {
    /// Composes extractor outputs into a snapshot.
    ///
    /// Missing user, hostname or shell become [`UNKNOWN`].
    pub fn assemble(facts: HostFacts) -> Self {
        let shell = facts
            .shell_path
            .as_deref()
            .and_then(shell_name)
            .map_or_else(|| UNKNOWN.to_string(), str::to_string);

        Self {
            username: non_empty_or_unknown(facts.user),
            hostname: non_empty_or_unknown(facts.hostname),
            os: facts.os,
            kernel: facts.kernel,
            shell,
            memory: facts.memory,
            uptime: facts.uptime,
            disk: facts.disk,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn os(&self) -> &OsIdentity {
        &self.os
    }

    pub fn kernel(&self) -> Option<&str> {
        self.kernel.as_deref()
    }

    pub fn shell(&self) -> &str {
        &self.shell
    }

    pub fn memory(&self) -> MemorySnapshot {
        self.memory
    }

    pub fn uptime(&self) -> Uptime {
        self.uptime
    }

    pub fn disk(&self) -> DiskSnapshot {
        self.disk
    }
}

/// Returns the last `/`-separated segment of a shell path.
///
/// `"/usr/bin/zsh"` gives `"zsh"`; a bare `"fish"` is returned as is.
/// A path ending in `/` has no name.
pub fn shell_name(path: &str) -> Option<&str> {
    let name = path.rsplit('/').next()?;
    if name.is_empty() { None } else { Some(name) }
}

fn non_empty_or_unknown(value: Option<String>) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_memory_used_is_total_minus_available() {
        let pairs = [
            (16_384_000, 12_000_000),
            (1_048_576, 1_048_576),
            (2_097_152, 0),
            (0, 0),
            (64 * 1024 * 1024, 1),
        ];
        for (total, available) in pairs {
            let mem = MemorySnapshot::from_meminfo(&MemInfo {
                total_kib: Some(total),
                available_kib: Some(available),
            });
            let expected = total as f64 / KIB_PER_GIB - available as f64 / KIB_PER_GIB;
            assert!(approx(mem.used_gib, expected), "{} {}", total, available);
            assert!(mem.used_gib >= 0.0);
            assert!(mem.used_gib <= mem.total_gib);
        }
    }

    #[test]
    fn test_memory_clamps_when_available_exceeds_total() {
        let mem = MemorySnapshot::from_meminfo(&MemInfo {
            total_kib: Some(1024),
            available_kib: Some(4096),
        });
        assert_eq!(mem.used_gib, 0.0);
    }

    #[test]
    fn test_memory_absent_fields_stay_zero() {
        let mem = MemorySnapshot::from_meminfo(&MemInfo {
            total_kib: Some(2_097_152),
            available_kib: None,
        });
        assert!(approx(mem.total_gib, 2.0));
        assert_eq!(mem.used_gib, 0.0);

        let mem = MemorySnapshot::from_meminfo(&MemInfo::default());
        assert_eq!(mem, MemorySnapshot::default());
    }

    #[test]
    fn test_uptime_parts_recompose() {
        for s in [0, 1, 59, 60, 3_599, 3_600, 86_399, 86_400, 302_400, 1_000_000_007] {
            let p = Uptime::from_secs(s).parts();
            assert_eq!(p.days * 86_400 + p.hours * 3_600 + p.minutes * 60 + p.seconds, s);
            assert!(p.hours < 24);
            assert!(p.minutes < 60);
            assert!(p.seconds < 60);
        }
    }

    #[test]
    fn test_uptime_parts_values() {
        let p = Uptime::from_secs(90_061).parts();
        assert_eq!(
            p,
            UptimeParts {
                days: 1,
                hours: 1,
                minutes: 1,
                seconds: 1
            }
        );
    }

    #[test]
    fn test_disk_from_stats() {
        let disk = DiskSnapshot::from_stats(&FsStats {
            total_blocks: 262_144,
            free_blocks: 131_072,
            fragment_size: 4096,
        });
        assert!(approx(disk.total_gib, 1.0));
        assert!(approx(disk.used_gib, 0.5));
    }

    #[test]
    fn test_disk_small_filesystem_is_not_zero() {
        // 64 MiB tmpfs.
        let disk = DiskSnapshot::from_stats(&FsStats {
            total_blocks: 16_384,
            free_blocks: 16_000,
            fragment_size: 4096,
        });
        assert!(approx(disk.total_gib, 0.0625));
        assert!(disk.used_gib > 0.0);
    }

    #[test]
    fn test_disk_free_exceeding_total_clamps() {
        let disk = DiskSnapshot::from_stats(&FsStats {
            total_blocks: 10,
            free_blocks: 20,
            fragment_size: 4096,
        });
        assert_eq!(disk.used_gib, 0.0);
    }

    #[test]
    fn test_disk_gib_survives_text_round_trip() {
        let disk = DiskSnapshot::from_stats(&FsStats {
            total_blocks: 122_070_313,
            free_blocks: 48_828_125,
            fragment_size: 4096,
        });
        let total: f64 = disk.total_gib.to_string().parse().unwrap();
        let used: f64 = disk.used_gib.to_string().parse().unwrap();
        assert!(approx(total, disk.total_gib));
        assert!(approx(used, disk.used_gib));
    }

    #[test]
    fn test_shell_name() {
        assert_eq!(shell_name("/usr/bin/zsh"), Some("zsh"));
        assert_eq!(shell_name("/bin/bash"), Some("bash"));
        assert_eq!(shell_name("fish"), Some("fish"));
        assert_eq!(shell_name("/bin/"), None);
        assert_eq!(shell_name(""), None);
    }

    #[test]
    fn test_assemble_fills_placeholders() {
        let snapshot = HostSnapshot::assemble(HostFacts::default());
        assert_eq!(snapshot.username(), UNKNOWN);
        assert_eq!(snapshot.hostname(), UNKNOWN);
        assert_eq!(snapshot.shell(), UNKNOWN);
        assert_eq!(snapshot.kernel(), None);
        assert_eq!(snapshot.uptime(), Uptime::default());
    }

    #[test]
    fn test_assemble_keeps_facts() {
        let snapshot = HostSnapshot::assemble(HostFacts {
            user: Some("alice".to_string()),
            hostname: Some("workstation".to_string()),
            os: OsIdentity {
                name: Some("Ubuntu".to_string()),
                version: Some("22.04".to_string()),
                build_id: None,
            },
            kernel: Some("6.1.0".to_string()),
            shell_path: Some("/usr/bin/fish".to_string()),
            memory: MemorySnapshot {
                total_gib: 16.0,
                used_gib: 4.0,
            },
            uptime: Uptime::from_secs(120),
            disk: DiskSnapshot {
                total_gib: 500.0,
                used_gib: 100.0,
            },
        });
        assert_eq!(snapshot.username(), "alice");
        assert_eq!(snapshot.hostname(), "workstation");
        assert_eq!(snapshot.os().name.as_deref(), Some("Ubuntu"));
        assert_eq!(snapshot.kernel(), Some("6.1.0"));
        assert_eq!(snapshot.shell(), "fish");
        assert_eq!(snapshot.memory().used_gib, 4.0);
        assert_eq!(snapshot.disk().total_gib, 500.0);
    }

    #[test]
    fn test_assemble_empty_user_is_unknown() {
        let snapshot = HostSnapshot::assemble(HostFacts {
            user: Some(String::new()),
            ..HostFacts::default()
        });
        assert_eq!(snapshot.username(), UNKNOWN);
    }
}
