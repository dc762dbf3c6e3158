//! Extractors for Linux `/etc` and `/proc` text resources.
//!
//! `parser` holds the pure line-to-record functions; `host` drives them
//! against a [`FileSystem`](crate::collector::traits::FileSystem).

pub mod host;
pub mod parser;

pub use host::{Collection, CollectWarning, FactSource, HostCollector, HostEnv, HostPaths};
pub use parser::{MemInfo, ParseError};
