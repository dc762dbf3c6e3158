//! Parsers for `/etc` and `/proc` text resources.
//!
//! These are pure functions over the lines produced by the line reader. They
//! are designed to be easily testable with string inputs.

use crate::models::{OsIdentity, Uptime};
use crate::util::tokenize_whitespace;

/// Position of the release string in `/proc/version`
/// (`Linux version <release> ...`).
const KERNEL_TOKEN_INDEX: usize = 2;

/// Error type for parsing failures.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub message: String,
}

impl ParseError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Parse error: {}", self.message)
    }
}

impl std::error::Error for ParseError {}

/// Parses `os-release` lines.
///
/// Recognizes `NAME`, `VERSION_ID` and `BUILD_ID`. When a key repeats, the
/// last assignment wins. Double quotes are stripped from the captured value.
pub fn parse_os_release(lines: &[String]) -> OsIdentity {
    let mut name = None;
    let mut version = None;
    let mut build_id = None;

    for line in lines {
        if let Some(value) = line.strip_prefix("NAME=") {
            name = Some(value);
        } else if let Some(value) = line.strip_prefix("VERSION_ID=") {
            version = Some(value);
        } else if let Some(value) = line.strip_prefix("BUILD_ID=") {
            build_id = Some(value);
        }
    }

    let unquote = |value: &str| value.replace('"', "");
    OsIdentity {
        name: name.map(unquote),
        version: version.map(unquote),
        build_id: build_id.map(unquote),
    }
}

/// Parsed values from `/proc/meminfo`, in KiB.
///
/// `None` means the key was not present (or had no numeric value), as
/// opposed to a measured zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemInfo {
    pub total_kib: Option<u64>,
    pub available_kib: Option<u64>,
}

/// Parses `/proc/meminfo` lines.
///
/// Only lines whose key is exactly `MemTotal` or `MemAvailable` count, so
/// `MemTotalFoo:` is ignored. The last numeric occurrence of a key wins; a
/// later line without a leading integer leaves an earlier value in place.
pub fn parse_meminfo(lines: &[String]) -> MemInfo {
    let mut info = MemInfo::default();

    for line in lines {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        match key {
            "MemTotal" => {
                if let Some(kib) = parse_kib(value) {
                    info.total_kib = Some(kib);
                }
            }
            "MemAvailable" => {
                if let Some(kib) = parse_kib(value) {
                    info.available_kib = Some(kib);
                }
            }
            _ => {}
        }
    }

    info
}

/// Reads the leading integer of a meminfo value such as `"   16384000 kB"`.
///
/// Parsing stops at the first non-digit, so the unit suffix may be absent
/// or of any length.
fn parse_kib(value: &str) -> Option<u64> {
    let value = value.trim_start();
    let end = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());
    value[..end].parse().ok()
}

/// Parses `/proc/uptime`: `<uptime seconds> <idle seconds>`.
///
/// The fractional part of the first field is truncated. Both parts must be
/// plain ASCII digits, so signs are rejected.
pub fn parse_uptime(lines: &[String]) -> Result<Uptime, ParseError> {
    let line = lines
        .first()
        .ok_or_else(|| ParseError::new("empty uptime"))?;
    let token = tokenize_whitespace(line)
        .first()
        .copied()
        .ok_or_else(|| ParseError::new("empty uptime"))?;

    let whole = match token.split_once('.') {
        Some((whole, frac)) if frac.bytes().all(|b| b.is_ascii_digit()) => whole,
        Some(_) => return Err(ParseError::new(format!("invalid uptime {:?}", token))),
        None => token,
    };
    if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::new(format!("invalid uptime {:?}", token)));
    }
    let seconds = whole
        .parse()
        .map_err(|_| ParseError::new(format!("invalid uptime {:?}", token)))?;

    Ok(Uptime::from_secs(seconds))
}

/// Parses `/proc/version` and returns the kernel release token.
pub fn parse_kernel_version(lines: &[String]) -> Result<String, ParseError> {
    let line = lines
        .first()
        .ok_or_else(|| ParseError::new("empty version"))?;
    let tokens = tokenize_whitespace(line);

    tokens
        .get(KERNEL_TOKEN_INDEX)
        .map(|t| t.to_string())
        .ok_or_else(|| {
            ParseError::new(format!(
                "expected at least {} fields, got {}",
                KERNEL_TOKEN_INDEX + 1,
                tokens.len()
            ))
        })
}

/// Returns the hostname from the first line of a hostname file.
pub fn parse_hostname(lines: &[String]) -> Option<String> {
    let name = lines.first()?.trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}
