//! Domain types: the metadata record handed to templates.

use serde::Serialize;

/// Length of [`MetadataRecord::short_hash`].
pub const SHORT_HASH_LEN: usize = 7;

/// Version-control metadata for one working directory.
///
/// Built once per run by [`crate::Inspector::collect`]. Field names serialize
/// in PascalCase (`Hash`, `ShortHash`, ...) which is how templates refer to
/// them. `Default` is the zero-valued record: empty strings, `false` flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct MetadataRecord {
    /// Full commit id of HEAD.
    pub hash: String,
    /// First [`SHORT_HASH_LEN`] characters of `hash`.
    pub short_hash: String,
    /// Symbolic name of HEAD; `HEAD` when detached.
    pub branch: String,
    /// Nearest tag reachable from HEAD, empty when the repository has no tags.
    pub tag: String,
    /// `git describe --tags` output, empty when the repository has no tags.
    pub describe: String,
    /// No modified, staged or untracked files.
    pub is_clean: bool,
    /// No modified or staged files; untracked files are ignored.
    pub is_clean_ignoring_untracked: bool,
}

/// Abbreviate a commit id, or `None` when it is too short.
pub fn short_hash(hash: &str) -> Option<&str> {
    hash.get(..SHORT_HASH_LEN)
}
