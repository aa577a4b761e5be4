//! Template context — the record exposed field-by-field to templates.
//!
//! Every [`MetadataRecord`] field is a top-level variable named in PascalCase:
//! `Hash`, `ShortHash`, `Branch`, `Tag`, `Describe`, `IsClean`,
//! `IsCleanIgnoringUntracked`.

use gitstamp_core::MetadataRecord;

use crate::error::RenderError;

/// Convert a record to a [`tera::Context`] for rendering.
pub fn to_tera_context(record: &MetadataRecord) -> Result<tera::Context, RenderError> {
    tera::Context::from_serialize(record).map_err(RenderError::from)
}
