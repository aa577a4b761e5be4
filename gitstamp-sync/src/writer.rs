//! Content-gated writer.
//!
//! Destination unset: the content goes to stdout every time.
//! Destination set:
//!
//! 1. With `force`, write unconditionally.
//! 2. Otherwise read the current destination (missing counts as absent).
//! 3. Byte-compare with the new content → skip if identical.
//! 4. Create-or-truncate, write through a buffer, flush.
//!
//! Skipping identical content keeps the destination's mtime untouched, which
//! is what mtime-driven build tools key their rebuild decisions on.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{io_err, SyncError};

// ---------------------------------------------------------------------------
// Write result
// ---------------------------------------------------------------------------

/// Outcome of a single output write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteResult {
    /// Content was written to standard output.
    Stdout,
    /// File was written (forced, content changed, or did not previously exist).
    Written { path: PathBuf },
    /// File was skipped — existing content is byte-identical.
    Unchanged { path: PathBuf },
}

// ---------------------------------------------------------------------------
// write_output
// ---------------------------------------------------------------------------

/// Write `content` to `destination`, or to `stdout` when there is none.
///
/// An empty destination path is treated as no destination.
pub fn write_output<W: Write>(
    destination: Option<&Path>,
    content: &[u8],
    force: bool,
    stdout: &mut W,
) -> Result<WriteResult, SyncError> {
    let path = match destination {
        Some(path) if !path.as_os_str().is_empty() => path,
        _ => {
            stdout
                .write_all(content)
                .and_then(|()| stdout.flush())
                .map_err(SyncError::Stdout)?;
            return Ok(WriteResult::Stdout);
        }
    };

    if !force && destination_matches(path, content) {
        tracing::debug!("unchanged: {}", path.display());
        return Ok(WriteResult::Unchanged {
            path: path.to_path_buf(),
        });
    }

    write_file(path, content)?;
    tracing::info!("wrote: {}", path.display());
    Ok(WriteResult::Written {
        path: path.to_path_buf(),
    })
}

/// Unreadable destinations never match; they simply get rewritten.
fn destination_matches(path: &Path, content: &[u8]) -> bool {
    match std::fs::read(path) {
        Ok(existing) => existing == content,
        Err(e) => {
            tracing::debug!("destination {} not readable: {e}", path.display());
            false
        }
    }
}

fn write_file(path: &Path, content: &[u8]) -> Result<(), SyncError> {
    let file = File::create(path).map_err(|e| io_err(path, e))?;
    let mut out = BufWriter::new(file);
    out.write_all(content).map_err(|e| io_err(path, e))?;
    out.flush().map_err(|e| io_err(path, e))?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
