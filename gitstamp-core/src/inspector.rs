//! Repository inspection — the ordered query pipeline behind [`MetadataRecord`].
//!
//! [`Inspector::collect`] runs, in order: hash, branch, tag, describe, clean,
//! clean-ignoring-untracked. The first failure stops the pipeline; nothing
//! after it is queried. `tag` and `describe` each consult [`Inspector::has_tag`]
//! on their own, so a repository without tags costs one `git tag` call per
//! field and never reaches `git describe`.

use std::path::Path;

use crate::error::{Incomplete, InspectError, QueryError};
use crate::git::{GitBackend, GitCli};
use crate::types::{short_hash, MetadataRecord};

fn trim_newlines(output: &str) -> &str {
    output.trim_end_matches(['\r', '\n'])
}

fn query_err(query: &'static str) -> impl FnOnce(QueryError) -> InspectError {
    move |source| InspectError::Query { query, source }
}

/// Assembles a [`MetadataRecord`] from a [`GitBackend`].
#[derive(Debug, Clone)]
pub struct Inspector<B> {
    backend: B,
}

impl Inspector<GitCli> {
    /// Inspect `workdir`, or the process working directory when it is `None`
    /// or empty.
    pub fn open(workdir: Option<&Path>) -> Result<Self, InspectError> {
        let workdir = match workdir {
            Some(path) if !path.as_os_str().is_empty() => path.to_path_buf(),
            _ => std::env::current_dir().map_err(InspectError::WorkingDirectory)?,
        };
        Ok(Inspector::new(GitCli::new(workdir)))
    }
}

impl<B: GitBackend> Inspector<B> {
    pub fn new(backend: B) -> Self {
        Inspector { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Whether the repository has at least one tag.
    pub fn has_tag(&self) -> Result<bool, InspectError> {
        let tags = self.backend.list_tags().map_err(query_err("has-tag"))?;
        Ok(!trim_newlines(&tags).is_empty())
    }

    pub fn hash(&self) -> Result<String, InspectError> {
        let out = self.backend.head_hash().map_err(query_err("hash"))?;
        Ok(trim_newlines(&out).to_string())
    }

    pub fn branch(&self) -> Result<String, InspectError> {
        let out = self.backend.head_branch().map_err(query_err("branch"))?;
        Ok(trim_newlines(&out).to_string())
    }

    /// Nearest tag, or an empty string when the repository has none.
    pub fn tag(&self) -> Result<String, InspectError> {
        if !self.has_tag()? {
            return Ok(String::new());
        }
        let out = self.backend.nearest_tag().map_err(query_err("tag"))?;
        Ok(trim_newlines(&out).to_string())
    }

    /// Describe string, or an empty string when the repository has none.
    pub fn describe(&self) -> Result<String, InspectError> {
        if !self.has_tag()? {
            return Ok(String::new());
        }
        let out = self.backend.describe().map_err(query_err("describe"))?;
        Ok(trim_newlines(&out).to_string())
    }

    pub fn is_clean(&self) -> Result<bool, InspectError> {
        let out = self.backend.status(true).map_err(query_err("is-clean"))?;
        Ok(out.is_empty())
    }

    pub fn is_clean_ignoring_untracked(&self) -> Result<bool, InspectError> {
        let out = self
            .backend
            .status(false)
            .map_err(query_err("is-clean-ignoring-untracked"))?;
        Ok(out.is_empty())
    }

    /// Run every query in order and build the record.
    ///
    /// On failure the returned [`Incomplete`] carries the fields gathered so
    /// far alongside the error.
    pub fn collect(&self) -> Result<MetadataRecord, Incomplete> {
        let mut record = MetadataRecord::default();
        match self.fill(&mut record) {
            Ok(()) => Ok(record),
            Err(error) => {
                tracing::debug!("inspection stopped: {error}");
                Err(Incomplete {
                    partial: record,
                    error,
                })
            }
        }
    }

    fn fill(&self, record: &mut MetadataRecord) -> Result<(), InspectError> {
        record.hash = self.hash()?;
        record.short_hash = short_hash(&record.hash)
            .ok_or_else(|| InspectError::MalformedHash {
                hash: record.hash.clone(),
            })?
            .to_string();
        record.branch = self.branch()?;
        record.tag = self.tag()?;
        record.describe = self.describe()?;
        record.is_clean = self.is_clean()?;
        record.is_clean_ignoring_untracked = self.is_clean_ignoring_untracked()?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
