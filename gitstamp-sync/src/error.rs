//! Error types for gitstamp-sync.

use std::path::PathBuf;

use thiserror::Error;

use gitstamp_core::InspectError;
use gitstamp_renderer::RenderError;

/// All errors that can arise from a stamp run.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Repository inspection failed and the failure was not tolerated.
    #[error("git error")]
    Inspect(#[from] InspectError),

    /// Template missing, malformed, or failed to render.
    #[error("template error")]
    Render(#[from] RenderError),

    /// Destination could not be written, with annotated path for context.
    #[error("I/O error at {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Standard output is closed or broken.
    #[error("cannot write to standard output")]
    Stdout(#[source] std::io::Error),
}

/// Convenience constructor for [`SyncError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> SyncError {
    SyncError::Io {
        path: path.into(),
        source,
    }
}
