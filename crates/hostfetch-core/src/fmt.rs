//! Shared formatting helpers for the report.
//!
//! All pure formatting functions (no colors, no layout) live here.

use crate::models::{OsIdentity, UNKNOWN, Uptime};

/// Format a GiB value with one decimal: `"15.6"`.
pub fn format_gib(gib: f64) -> String {
    format!("{:.1}", gib)
}

/// Format a used/total pair: `"4.2 / 15.6 GiB"`.
pub fn format_usage(used_gib: f64, total_gib: f64) -> String {
    format!("{} / {} GiB", format_gib(used_gib), format_gib(total_gib))
}

/// Format uptime, dropping leading zero units.
///
/// `"3d 12h 0m"`, `"4h 25m"`, `"17m"`, `"42s"`
pub fn format_uptime(uptime: &Uptime) -> String {
    let p = uptime.parts();
    if p.days > 0 {
        format!("{}d {}h {}m", p.days, p.hours, p.minutes)
    } else if p.hours > 0 {
        format!("{}h {}m", p.hours, p.minutes)
    } else if p.minutes > 0 {
        format!("{}m", p.minutes)
    } else {
        format!("{}s", p.seconds)
    }
}

/// Format the OS identity as `name version (build_id)`, omitting absent parts.
pub fn format_os(os: &OsIdentity) -> String {
    let mut out = os.name.as_deref().unwrap_or(UNKNOWN).to_string();
    if let Some(version) = &os.version {
        out.push(' ');
        out.push_str(version);
    }
    if let Some(build_id) = &os.build_id {
        out.push_str(" (");
        out.push_str(build_id);
        out.push(')');
    }
    out
}
