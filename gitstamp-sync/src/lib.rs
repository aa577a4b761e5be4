//! # gitstamp-sync
//!
//! Content-gated output writer and the stamp pipeline.
//!
//! Call [`pipeline::run`] to inspect a repository, render a template against
//! the result and write it out, or [`write_output`] to apply the
//! "only overwrite when changed" policy to content rendered elsewhere.

pub mod error;
pub mod pipeline;
pub mod writer;

pub use error::SyncError;
pub use pipeline::StampOptions;
pub use writer::{write_output, WriteResult};
