//! Error types for gitstamp-renderer.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from loading or rendering a template.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Template file missing or unreadable.
    #[error("cannot read template {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Template syntax error.
    #[error("failed to parse template '{name}'")]
    Parse {
        name: String,
        #[source]
        source: tera::Error,
    },

    /// Rendering failed, e.g. the template references an unknown field.
    #[error("failed to render template '{name}'")]
    Render {
        name: String,
        #[source]
        source: tera::Error,
    },

    /// Building the tera context from the record failed.
    #[error("context serialization error")]
    Context(#[from] tera::Error),
}
