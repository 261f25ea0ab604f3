//! PDF Export - serializing raster pages into PDF documents
//!
//! This crate provides functionality for:
//! - Lossless embedding of RGB raster images as PDF image XObjects
//! - Exporting one image as a single-page document
//! - Exporting an ordered sequence of images as a multi-page document
//!
//! Pages are sized so that one source pixel maps to one PDF point, and the
//! raster is drawn to fill its page exactly.
//!
//! # Example
//!
//! ```ignore
//! use image::RgbImage;
//! use pdf_export::{export_multi, export_single};
//!
//! let page = RgbImage::new(800, 400);
//! let pdf_bytes = export_single(&page)?;
//!
//! let pages = vec![page.clone(), page];
//! let booklet = export_multi(&pages)?;
//! ```

mod document;
mod raster;

pub use document::{export_multi, export_single};
pub use raster::{generate_page_operators, RasterXObject};

use thiserror::Error;

/// Errors that can occur during document export
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Cannot export an empty batch of images")]
    EmptyBatchError,

    #[error("PDF serialization error: {0}")]
    SerializationError(#[from] lopdf::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for export operations
pub type Result<T> = std::result::Result<T, ExportError>;
