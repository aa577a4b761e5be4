//! Error types for gitstamp-core.

use thiserror::Error;

use crate::types::MetadataRecord;

/// Failure of a single git subprocess invocation.
///
/// Every variant carries the full command line so a diagnostic names exactly
/// what was run.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The process could not be started (git not installed, bad program path).
    #[error("failed to spawn, command-line: {command_line}")]
    Spawn {
        command_line: String,
        #[source]
        source: std::io::Error,
    },

    /// The process ran but exited unsuccessfully.
    #[error("command-line: {command_line}: {status}: {stderr}")]
    Failed {
        command_line: String,
        status: String,
        stderr: String,
    },

    /// Stdout was not valid UTF-8.
    #[error("command-line: {command_line}: output is not valid UTF-8")]
    NonUtf8 { command_line: String },
}

impl QueryError {
    /// Command line of the failed invocation.
    pub fn command_line(&self) -> &str {
        match self {
            QueryError::Spawn { command_line, .. }
            | QueryError::Failed { command_line, .. }
            | QueryError::NonUtf8 { command_line } => command_line,
        }
    }
}

/// All errors that can arise while inspecting a repository.
#[derive(Debug, Error)]
pub enum InspectError {
    /// The process working directory could not be resolved. Never recoverable.
    #[error("cannot resolve current working directory")]
    WorkingDirectory(#[source] std::io::Error),

    /// A named metadata query failed.
    #[error("git query '{query}' failed")]
    Query {
        query: &'static str,
        #[source]
        source: QueryError,
    },

    /// HEAD resolved to something too short to abbreviate.
    #[error("HEAD hash {hash:?} is shorter than 7 characters")]
    MalformedHash { hash: String },
}

impl InspectError {
    /// `true` for failures of the version-control queries themselves, the only
    /// class a caller may choose to tolerate.
    pub fn is_query_error(&self) -> bool {
        !matches!(self, InspectError::WorkingDirectory(_))
    }

    /// Name of the failing query, when there is one.
    pub fn query(&self) -> Option<&'static str> {
        match self {
            InspectError::Query { query, .. } => Some(*query),
            InspectError::MalformedHash { .. } => Some("hash"),
            InspectError::WorkingDirectory(_) => None,
        }
    }
}

/// Inspection stopped at the first failing query.
///
/// `partial` holds every field collected before the failure; the rest keep
/// their zero values.
#[derive(Debug, Error)]
#[error("repository inspection stopped early")]
pub struct Incomplete {
    pub partial: MetadataRecord,
    #[source]
    pub error: InspectError,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn working_directory_failure_is_not_a_query_error() {
        let err = InspectError::WorkingDirectory(std::io::Error::from(
            std::io::ErrorKind::NotFound,
        ));
        assert!(!err.is_query_error());
        assert_eq!(err.query(), None);
    }

    #[test]
    fn query_failures_are_query_errors() {
        let err = InspectError::MalformedHash {
            hash: "abc".to_string(),
        };
        assert!(err.is_query_error());
        assert_eq!(err.query(), Some("hash"));
    }
}
