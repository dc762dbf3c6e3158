//! Line reader for text resources.

use crate::collector::error::CollectError;
use crate::collector::traits::FileSystem;
use std::io::BufRead;
use std::path::Path;
use tracing::debug;

/// Default upper bound on the length of a single line, in bytes.
///
/// Longer lines are truncated. None of the resources hostfetch reads come
/// anywhere near this on a sane system.
pub const DEFAULT_MAX_LINE_LEN: usize = 1024;

/// Reads `path` into an ordered sequence of lines with terminators stripped.
///
/// Returns `ResourceUnavailable` if the resource cannot be opened and `Read`
/// if reading fails partway through (including invalid UTF-8); no partial
/// result is returned in that case. An empty resource yields an empty vector.
pub fn read_lines<F: FileSystem + ?Sized>(
    fs: &F,
    path: &Path,
    max_line_len: usize,
) -> Result<Vec<String>, CollectError> {
    let mut reader = fs
        .open(path)
        .map_err(|source| CollectError::ResourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;

    let mut lines = Vec::new();
    let mut buf = String::new();
    loop {
        buf.clear();
        let n = reader
            .read_line(&mut buf)
            .map_err(|source| CollectError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        if n == 0 {
            break;
        }

        let line = buf.strip_suffix('\n').unwrap_or(&buf);
        let line = line.strip_suffix('\r').unwrap_or(line);
        lines.push(truncate_line(line, max_line_len, path).to_string());
    }

    debug!(path = %path.display(), lines = lines.len(), "read resource");
    Ok(lines)
}

/// Cuts `line` to at most `max_len` bytes, backing off to a char boundary.
fn truncate_line<'a>(line: &'a str, max_len: usize, path: &Path) -> &'a str {
    if line.len() <= max_len {
        return line;
    }

    let mut end = max_len;
    while !line.is_char_boundary(end) {
        end -= 1;
    }
    debug!(
        path = %path.display(),
        len = line.len(),
        max_len,
        "line exceeds bound, truncated"
    );
    &line[..end]
}
