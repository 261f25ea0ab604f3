//! Form Fill - Coordinate-driven template filling
//!
//! This crate provides functionality for:
//! - Loading raster form templates and outline fonts
//! - Drawing record values onto a template at fixed pixel anchors
//! - Running ordered batches with per-record skip reporting
//! - Parsing layout and record JSON
//!
//! # Example
//!
//! ```ignore
//! use formfill::{Compositor, Record, RunConfig};
//!
//! let config = RunConfig::new(&template_bytes, font_bytes)?;
//! let compositor = Compositor::new(&config)?;
//! let page = compositor.fill(&Record::new().with_name("Asha").with_age("34"))?;
//! let pdf = pdf_export::export_single(&page)?;
//! ```

mod batch;
mod compositor;
mod font;
mod parser;
mod schema;
mod template;

pub use batch::{run_batch, run_batch_with_progress, BatchFailure, BatchOutcome};
pub use compositor::{Compositor, RunConfig};
pub use font::load_font;
pub use parser::{parse_layout, parse_record, parse_records};
pub use schema::{Field, Layout, Position, Record};
pub use template::load_template;

use thiserror::Error;

/// Errors that can occur while filling templates
#[derive(Debug, Error)]
pub enum FillError {
    #[error("Template load error: {0}")]
    TemplateLoadError(String),

    #[error("Font load error: {0}")]
    FontLoadError(String),

    #[error("Failed to render field '{0}': {1}")]
    FieldRenderError(Field, String),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Export error: {0}")]
    ExportError(#[from] pdf_export::ExportError),
}

/// Result type for form filling operations
pub type Result<T> = std::result::Result<T, FillError>;
