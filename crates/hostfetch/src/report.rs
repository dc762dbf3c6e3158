//! Colorized text rendering of a host snapshot.

use crossterm::style::{Color, Stylize};
use hostfetch_core::fmt::{format_os, format_uptime, format_usage};
use hostfetch_core::models::{HostSnapshot, UNKNOWN};

/// Width of the label column, including padding.
const LABEL_WIDTH: usize = 10;

pub const LICENSE_TEXT: &str = "\
hostfetch  Copyright (C) the hostfetch authors

This program is free software: you can redistribute it and/or modify
it under the terms of the GNU General Public License as published by
the Free Software Foundation, either version 3 of the License, or
(at your option) any later version.

This program is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
GNU General Public License for more details.

You should have received a copy of the GNU General Public License
along with this program.  If not, see <https://www.gnu.org/licenses/>.
";

/// Renders the report, one `label value` row per fact.
pub fn render(snapshot: &HostSnapshot, color: bool) -> String {
    let memory = snapshot.memory();
    let disk = snapshot.disk();

    let rows = [
        (
            "user/host",
            Color::Green,
            format!("{}@{}", snapshot.username(), snapshot.hostname()),
        ),
        ("os", Color::Cyan, format_os(snapshot.os())),
        (
            "kernel",
            Color::Yellow,
            snapshot.kernel().unwrap_or(UNKNOWN).to_string(),
        ),
        ("shell", Color::Magenta, snapshot.shell().to_string()),
        (
            "ram",
            Color::Blue,
            format_usage(memory.used_gib, memory.total_gib),
        ),
        ("uptime", Color::DarkGrey, format_uptime(&snapshot.uptime())),
        ("disk", Color::Red, format_usage(disk.used_gib, disk.total_gib)),
    ];

    let mut out = String::new();
    for (label, fg, value) in rows {
        let pad = " ".repeat(LABEL_WIDTH.saturating_sub(label.len()).max(1));
        if color {
            out.push_str(&label.with(fg).bold().to_string());
        } else {
            out.push_str(label);
        }
        out.push_str(&pad);
        out.push_str(&value);
        out.push('\n');
    }
    out
}
