//! # gitstamp-renderer
//!
//! Tera-based rendering of a user template against a [`MetadataRecord`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use gitstamp_core::MetadataRecord;
//! use gitstamp_renderer::TemplateEngine;
//!
//! fn stamp(record: &MetadataRecord) {
//!     if let Ok(engine) = TemplateEngine::from_file(Path::new("version.h.tera")) {
//!         if let Ok(text) = engine.render(record) {
//!             print!("{text}");
//!         }
//!     }
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;

pub use context::to_tera_context;
pub use engine::{render, TemplateEngine};
pub use error::RenderError;

pub use gitstamp_core::MetadataRecord;
