// crates/notes-core/src/header.rs - Date Header Maintenance
//
// Keeps the top of a notes file stamped with today's date:
//
// 01/02/2006
// ----------
//
//
// (older notes...)
//
// The rewrite itself is a pure function over bytes (`rewrite`) so it can be
// tested without touching the disk. `ensure_header` wraps it with a single
// read and at most one write.

use chrono::{Local, NaiveDate};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Line written under the date
pub const SEPARATOR: &str = "----------";

/// Number of newlines inserted by the clear path
pub const CLEAR_PADDING_LINES: usize = 50;

/// chrono format for the date line (always 10 characters)
pub const DATE_FORMAT: &str = "%m/%d/%Y";

/// Errors that can occur while maintaining the header
#[derive(Error, Debug)]
pub enum HeaderError {
    #[error("Failed to read notes file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write notes file {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for header operations
pub type HeaderResult<T> = Result<T, HeaderError>;

/// What `ensure_header` did to the file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderOutcome {
    /// Today's header was already on top, nothing written
    Unchanged,
    /// A new header for today was prepended
    Inserted,
    /// Clear padding was written below today's header
    Cleared,
}

/// Format a date the way the header line expects it (`MM/DD/YYYY`)
pub fn today_string(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Today's header line, using the local timezone
pub fn today() -> String {
    today_string(Local::now().date_naive())
}

/// Compute the new file content for `data`.
///
/// Returns `None` when the file should be left untouched, which only happens
/// on the normal path when today's header is already in place. Running the
/// normal path twice on the same day is therefore a no-op the second time.
///
/// CLEAR PATH:
/// With `clear` set, 50 newlines go directly under the separator. If today's
/// header already exists its date line is kept as written (including any text
/// after the date) and the separator is not duplicated; if not, the whole
/// previous content (old headers included) is pushed below the padding.
pub fn rewrite(data: &[u8], today: &str, clear: bool) -> Option<Vec<u8>> {
    let has_today = data.starts_with(today.as_bytes());

    if !clear {
        if has_today {
            return None;
        }
        let mut out = header_block(today.as_bytes());
        out.extend_from_slice(b"\n\n");
        out.extend_from_slice(data);
        return Some(out);
    }

    let (date_line, body) = if has_today {
        let (first, _) = split_line(data);
        (trim_cr(first), after_header(data))
    } else {
        (today.as_bytes(), data)
    };

    let mut out = header_block(date_line);
    out.extend(std::iter::repeat_n(b'\n', CLEAR_PADDING_LINES));
    out.extend_from_slice(body);
    Some(out)
}

/// Read `path`, rewrite its header for `today`, and write it back if needed.
///
/// The file must already exist: a missing file is a read error and is never
/// created here. The new content is written with a single `fs::write`.
pub fn ensure_header(path: &Path, today: &str, clear: bool) -> HeaderResult<HeaderOutcome> {
    let data = fs::read(path).map_err(|source| HeaderError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let Some(content) = rewrite(&data, today, clear) else {
        debug!(path = %path.display(), "header for {} already present", today);
        return Ok(HeaderOutcome::Unchanged);
    };

    fs::write(path, &content).map_err(|source| HeaderError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    let outcome = if clear {
        HeaderOutcome::Cleared
    } else {
        HeaderOutcome::Inserted
    };
    info!(path = %path.display(), ?outcome, bytes = content.len(), "rewrote notes header");
    Ok(outcome)
}

fn header_block(date_line: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(date_line.len() + SEPARATOR.len() + 2 + CLEAR_PADDING_LINES);
    out.extend_from_slice(date_line);
    out.push(b'\n');
    out.extend_from_slice(SEPARATOR.as_bytes());
    out.push(b'\n');
    out
}

/// Everything after the date line and, if present, the separator line under it.
///
/// For the canonical `<date>\n----------\n` this lands on the same byte as
/// skipping `date.len() + 12`, but a short file or a missing separator
/// cannot push the split past the end or into note text.
fn after_header(data: &[u8]) -> &[u8] {
    let (_, rest) = split_line(data);
    let (line, after) = split_line(rest);
    if trim_cr(line) == SEPARATOR.as_bytes() { after } else { rest }
}

fn trim_cr(line: &[u8]) -> &[u8] {
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Split off the first line, consuming its `\n` if there is one.
fn split_line(data: &[u8]) -> (&[u8], &[u8]) {
    match data.iter().position(|&b| b == b'\n') {
        Some(i) => (&data[..i], &data[i + 1..]),
        None => (data, &data[data.len()..]),
    }
}
