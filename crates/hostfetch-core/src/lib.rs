//! hostfetch-core — host fact collection for the `hostfetch` report.
//!
//! Provides:
//! - `collector` — filesystem abstraction, line reader, fact extractors, host collector
//! - `models` — typed host facts and the assembled `HostSnapshot`
//! - `fmt` — plain-text formatting helpers (no colors, no layout)
//! - `util` — tokenizer

pub mod collector;
pub mod fmt;
pub mod models;
pub mod util;
