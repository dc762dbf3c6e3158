//! Host fact collection for Linux.
//!
//! This module reads the handful of `/etc` and `/proc` resources a report
//! needs, with support for mocking for testing on macOS.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       HostCollector                         │
//! │  ┌─────────────────────┐   ┌─────────────────────────────┐  │
//! │  │   procfs::parser    │   │     DiskSnapshot            │  │
//! │  │  - os-release       │   │  - statvfs(mount_point)     │  │
//! │  │  - /proc/meminfo    │   └──────────────┬──────────────┘  │
//! │  │  - /proc/uptime     │                  │                 │
//! │  │  - /proc/version    │                  │                 │
//! │  └──────────┬──────────┘                  │                 │
//! │      ┌──────▼──────┐                      │                 │
//! │      │ read_lines  │                      │                 │
//! │      └──────┬──────┘                      │                 │
//! │             └──────────────┬──────────────┘                 │
//! │                     ┌──────▼──────┐                         │
//! │                     │  FileSystem │ (trait)                 │
//! │                     └──────┬──────┘                         │
//! └────────────────────────────┼────────────────────────────────┘
//!                              │
//!              ┌───────────────┼───────────────┐
//!              │               │               │
//!       ┌──────▼──────┐ ┌──────▼──────┐ ┌──────▼──────┐
//!       │   RealFs    │ │   MockFs    │ │  Scenarios  │
//!       │ (Linux)     │ │ (Testing)   │ │ (Fixtures)  │
//!       └─────────────┘ └─────────────┘ └─────────────┘
//! ```
//!
//! # Usage
//!
//! ## Production (Linux)
//!
//! ```ignore
//! use hostfetch_core::collector::{HostCollector, HostEnv, HostPaths, RealFs};
//!
//! let collector = HostCollector::new(RealFs::new(), HostPaths::default());
//! let collection = collector.collect(&HostEnv::from_process());
//! ```
//!
//! ## Testing (with MockFs)
//!
//! ```
//! use hostfetch_core::collector::{HostCollector, HostEnv, HostPaths, MockFs};
//!
//! let collector = HostCollector::new(MockFs::typical_system(), HostPaths::default());
//! let collection = collector.collect(&HostEnv::default());
//! assert!(collection.warnings.is_empty());
//! assert_eq!(collection.snapshot.hostname(), "workstation");
//! ```

mod error;
pub mod lines;
pub mod mock;
pub mod procfs;
pub mod traits;

pub use error::CollectError;
pub use lines::{DEFAULT_MAX_LINE_LEN, read_lines};
pub use mock::MockFs;
pub use procfs::{Collection, CollectWarning, FactSource, HostCollector, HostEnv, HostPaths};
pub use traits::{FileSystem, FsStats, RealFs};
