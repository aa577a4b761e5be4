//! gitstamp core library — metadata record, git queries, repository inspection.
//!
//! Public API surface:
//! - [`types`] — [`MetadataRecord`] and short-hash derivation
//! - [`git`] — [`GitBackend`] trait and the [`GitCli`] subprocess adapter
//! - [`inspector`] — [`Inspector`], the ordered query pipeline
//! - [`error`] — [`InspectError`], [`QueryError`], [`Incomplete`]

pub mod error;
pub mod git;
pub mod inspector;
pub mod types;

pub use error::{Incomplete, InspectError, QueryError};
pub use git::{GitBackend, GitCli};
pub use inspector::Inspector;
pub use types::{short_hash, MetadataRecord, SHORT_HASH_LEN};
