//! Tera rendering engine for a single user-supplied template.
//!
//! Autoescaping is switched off for every template name: the output is source
//! code or plain text, so `{{ Describe }}` must come out byte-for-byte even
//! when the template file happens to end in `.html`.

use std::path::Path;

use tera::Tera;

use gitstamp_core::MetadataRecord;

use crate::context::to_tera_context;
use crate::error::RenderError;

/// A parsed template ready to render records.
pub struct TemplateEngine {
    tera: Tera,
    name: String,
}

impl TemplateEngine {
    /// Read and parse the template at `path`.
    pub fn from_file(path: &Path) -> Result<Self, RenderError> {
        let source = std::fs::read_to_string(path).map_err(|source| RenderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_source(&path.display().to_string(), &source)
    }

    /// Parse `source` under `name`, which only appears in diagnostics.
    pub fn from_source(name: &str, source: &str) -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);
        tera.add_raw_template(name, source)
            .map_err(|source| RenderError::Parse {
                name: name.to_string(),
                source,
            })?;
        Ok(TemplateEngine {
            tera,
            name: name.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Render the template against `record`.
    pub fn render(&self, record: &MetadataRecord) -> Result<String, RenderError> {
        let ctx = to_tera_context(record)?;
        self.tera
            .render(&self.name, &ctx)
            .map_err(|source| RenderError::Render {
                name: self.name.clone(),
                source,
            })
    }
}

/// Parse and render `source` in one step.
pub fn render(source: &str, record: &MetadataRecord) -> Result<String, RenderError> {
    TemplateEngine::from_source("template", source)?.render(record)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
