//! Raw git queries — the [`GitBackend`] seam and its subprocess adapter.
//!
//! Each backend method maps to one fixed `git` invocation and returns its
//! stdout untouched. Interpretation (trimming, emptiness checks, the tag
//! gating) lives in [`crate::Inspector`] so it can be exercised against a fake.
//!
//! | Method         | Invocation                                       |
//! |----------------|--------------------------------------------------|
//! | `list_tags`    | `git -C <dir> tag`                               |
//! | `head_hash`    | `git -C <dir> rev-parse HEAD`                    |
//! | `head_branch`  | `git -C <dir> rev-parse --abbrev-ref HEAD`       |
//! | `nearest_tag`  | `git -C <dir> describe --tags --abbrev=0`        |
//! | `describe`     | `git -C <dir> describe --tags`                   |
//! | `status`       | `git -C <dir> status --porcelain [--untracked-files=no]` |

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::QueryError;

/// One method per read-only metadata query.
pub trait GitBackend {
    /// All tag names, one per line. Empty when the repository has no tags.
    fn list_tags(&self) -> Result<String, QueryError>;

    /// Full commit id of HEAD.
    fn head_hash(&self) -> Result<String, QueryError>;

    /// Symbolic name of HEAD.
    fn head_branch(&self) -> Result<String, QueryError>;

    /// Nearest tag reachable from HEAD.
    fn nearest_tag(&self) -> Result<String, QueryError>;

    /// Tag + distance + abbreviated commit id.
    fn describe(&self) -> Result<String, QueryError>;

    /// Porcelain status report; untracked files omitted unless `include_untracked`.
    fn status(&self, include_untracked: bool) -> Result<String, QueryError>;
}

/// [`GitBackend`] that shells out to the `git` binary.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: OsString,
    workdir: PathBuf,
}

impl GitCli {
    /// Query the repository at `workdir` with `git` from `PATH`.
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self::with_program("git", workdir)
    }

    /// Query with an explicit git executable.
    pub fn with_program(program: impl AsRef<OsStr>, workdir: impl Into<PathBuf>) -> Self {
        GitCli {
            program: program.as_ref().to_os_string(),
            workdir: workdir.into(),
        }
    }

    /// Directory every query runs against.
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    fn command_line(&self, args: &[&str]) -> String {
        let mut line = format!(
            "{} -C {}",
            self.program.to_string_lossy(),
            self.workdir.display()
        );
        for arg in args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }

    fn call(&self, args: &[&str]) -> Result<String, QueryError> {
        let command_line = self.command_line(args);
        tracing::debug!("running: {command_line}");

        let output = Command::new(&self.program)
            .arg("-C")
            .arg(&self.workdir)
            .args(args)
            .output()
            .map_err(|source| QueryError::Spawn {
                command_line: command_line.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(QueryError::Failed {
                command_line,
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        String::from_utf8(output.stdout).map_err(|_| QueryError::NonUtf8 { command_line })
    }
}

impl GitBackend for GitCli {
    fn list_tags(&self) -> Result<String, QueryError> {
        self.call(&["tag"])
    }

    fn head_hash(&self) -> Result<String, QueryError> {
        self.call(&["rev-parse", "HEAD"])
    }

    fn head_branch(&self) -> Result<String, QueryError> {
        self.call(&["rev-parse", "--abbrev-ref", "HEAD"])
    }

    fn nearest_tag(&self) -> Result<String, QueryError> {
        self.call(&["describe", "--tags", "--abbrev=0"])
    }

    fn describe(&self) -> Result<String, QueryError> {
        self.call(&["describe", "--tags"])
    }

    fn status(&self, include_untracked: bool) -> Result<String, QueryError> {
        if include_untracked {
            self.call(&["status", "--porcelain"])
        } else {
            self.call(&["status", "--porcelain", "--untracked-files=no"])
        }
    }
}
