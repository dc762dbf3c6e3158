//! Pre-built mock filesystem scenarios for testing.
//!
//! These scenarios provide realistic `/etc` and `/proc` states
//! for testing various host conditions.

use super::filesystem::MockFs;
use crate::collector::traits::FsStats;

impl MockFs {
    /// Creates a typical desktop host with every resource present.
    ///
    /// Ubuntu 22.04, 16 GB of RAM, a 500 GB root filesystem and
    /// about 3.5 days of uptime.
    pub fn typical_system() -> Self {
        let mut fs = Self::new();

        fs.add_file("/etc/hostname", "workstation\n");
        fs.add_file(
            "/etc/os-release",
            "\
PRETTY_NAME=\"Ubuntu 22.04.3 LTS\"
NAME=\"Ubuntu\"
VERSION_ID=\"22.04\"
VERSION=\"22.04.3 LTS (Jammy Jellyfish)\"
VERSION_CODENAME=jammy
ID=ubuntu
ID_LIKE=debian
HOME_URL=\"https://www.ubuntu.com/\"
UBUNTU_CODENAME=jammy
",
        );

        fs.add_file(
            "/proc/version",
            "Linux version 6.1.0-13-amd64 (debian-kernel@lists.debian.org) \
(gcc-12 (Debian 12.2.0-14) 12.2.0, GNU ld (GNU Binutils for Debian) 2.40) \
#1 SMP PREEMPT_DYNAMIC Debian 6.1.55-1 (2023-09-29)\n",
        );
        fs.add_file("/proc/uptime", "302400.67 1209600.12\n");
        fs.add_file(
            "/proc/meminfo",
            "\
MemTotal:       16384000 kB
MemFree:         8192000 kB
MemAvailable:   12000000 kB
Buffers:          512000 kB
Cached:          2048000 kB
SwapCached:            0 kB
Active:          4096000 kB
Inactive:        2048000 kB
SwapTotal:       4096000 kB
SwapFree:        4096000 kB
Dirty:              1024 kB
Writeback:             0 kB
Slab:             512000 kB
SReclaimable:     256000 kB
",
        );

        // 4 KiB fragments: ~476.8 GiB total, ~119.2 GiB free.
        fs.add_fs_stats(
            "/",
            FsStats {
                total_blocks: 125_000_000,
                free_blocks: 31_250_000,
                fragment_size: 4096,
            },
        );

        fs
    }

    /// Creates a minimal container root.
    ///
    /// No `/etc/hostname` or `/etc/os-release`; the OS identity is only in
    /// `/usr/lib/os-release`, the hostname only in `/proc/sys/kernel/hostname`.
    /// There are no filesystem statistics for `/`.
    pub fn minimal_container() -> Self {
        let mut fs = Self::new();

        fs.add_file(
            "/usr/lib/os-release",
            "\
NAME=\"Alpine Linux\"
ID=alpine
VERSION_ID=3.19.1
PRETTY_NAME=\"Alpine Linux v3.19\"
",
        );
        fs.add_file("/proc/sys/kernel/hostname", "a1b2c3d4e5f6\n");
        fs.add_file(
            "/proc/version",
            "Linux version 5.15.0-91-generic (buildd@lcy02-amd64-045) #101-Ubuntu SMP\n",
        );
        fs.add_file("/proc/uptime", "59.99 100.00\n");
        fs.add_file(
            "/proc/meminfo",
            "\
MemTotal:        2097152 kB
MemFree:          524288 kB
MemAvailable:    1048576 kB
",
        );

        fs
    }

    /// Creates a host whose `/proc` files are present but damaged.
    ///
    /// `/proc/version` has too few fields, `/proc/uptime` is empty and
    /// `/proc/meminfo` lacks `MemAvailable`.
    pub fn damaged_proc() -> Self {
        let mut fs = Self::typical_system();

        fs.add_file("/proc/version", "Linux version\n");
        fs.add_file("/proc/uptime", "");
        fs.add_file(
            "/proc/meminfo",
            "\
MemTotal:        8192000 kB
MemFree:         4096000 kB
MemTotalFoo:     1 kB
",
        );

        fs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::traits::FileSystem;
    use std::path::Path;

    #[test]
    fn test_typical_system_has_all_resources() {
        let fs = MockFs::typical_system();
        for path in [
            "/etc/hostname",
            "/etc/os-release",
            "/proc/version",
            "/proc/uptime",
            "/proc/meminfo",
        ] {
            assert!(fs.open(Path::new(path)).is_ok(), "missing {}", path);
        }
        assert!(fs.fs_stats(Path::new("/")).is_ok());
    }

    #[test]
    fn test_minimal_container_lacks_etc() {
        let fs = MockFs::minimal_container();
        assert!(fs.open(Path::new("/etc/os-release")).is_err());
        assert!(fs.open(Path::new("/etc/hostname")).is_err());
        assert!(fs.fs_stats(Path::new("/")).is_err());
    }
}
