//! Stamp pipeline — inspect, render, write.
//!
//! Shared entrypoint for the `gitstamp` binary. Error policy:
//!
//! - Query failures halt the run before rendering, unless
//!   [`StampOptions::ignore_git_errors`] is set, in which case the partial
//!   record is rendered instead.
//! - Working-directory, template and write failures always halt the run.

use std::io::Write;
use std::path::PathBuf;

use gitstamp_core::{GitBackend, Incomplete, Inspector, MetadataRecord};
use gitstamp_renderer::TemplateEngine;

use crate::error::SyncError;
use crate::writer::{write_output, WriteResult};

/// Configuration for one stamp run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StampOptions {
    /// Template file to render.
    pub template: PathBuf,
    /// Repository to inspect; the process working directory when `None`.
    pub git_repo: Option<PathBuf>,
    /// Destination file; standard output when `None`.
    pub out: Option<PathBuf>,
    /// Overwrite the destination even when its content is unchanged.
    pub force: bool,
    /// Render with whatever was collected when a git query fails.
    pub ignore_git_errors: bool,
}

/// Run the pipeline against the real `git` binary and process stdout.
pub fn run(opts: &StampOptions) -> Result<WriteResult, SyncError> {
    let inspector = Inspector::open(opts.git_repo.as_deref())?;
    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();
    run_with(&inspector, opts, &mut stdout)
}

/// Run the pipeline with a caller-provided inspector and stdout sink.
pub fn run_with<B, W>(
    inspector: &Inspector<B>,
    opts: &StampOptions,
    stdout: &mut W,
) -> Result<WriteResult, SyncError>
where
    B: GitBackend,
    W: Write,
{
    let record = gather(inspector, opts.ignore_git_errors)?;
    let engine = TemplateEngine::from_file(&opts.template)?;
    tracing::debug!("rendering {}", engine.name());
    let content = engine.render(&record)?;
    write_output(opts.out.as_deref(), content.as_bytes(), opts.force, stdout)
}

/// Collect the record, degrading to the partial record when tolerated.
pub fn gather<B: GitBackend>(
    inspector: &Inspector<B>,
    ignore_git_errors: bool,
) -> Result<MetadataRecord, SyncError> {
    match inspector.collect() {
        Ok(record) => Ok(record),
        Err(Incomplete { partial, error }) if ignore_git_errors && error.is_query_error() => {
            tracing::warn!("ignoring git error: {error}");
            Ok(partial)
        }
        Err(Incomplete { error, .. }) => Err(SyncError::Inspect(error)),
    }
}
