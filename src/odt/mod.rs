//! OpenDocument Text (.odt) reading.
//!
//! An ODT file is a ZIP package whose main content lives in
//! `content.xml`. This module opens the package, walks the document body
//! in order, and exposes the extraction API:
//!
//! - `Document::open()` / `Document::from_bytes()` - load a document
//! - `Document::extract()` - sections and linearized table blocks
//! - `Document::extract_with()` - same, with a caller-supplied lexicon
//! - `Document::extract_range()` - page-range parity shim (unenforced)
//! - `Document::text()` - all section texts joined with newlines
//!
//! # References
//! - ODF Specification: §2 (Packages), §4-5 (Text Content)

/// Document body walker
pub mod body;
/// content.xml part handling
mod content;
/// Document API
mod document;
/// ODT package (ZIP) handling
mod package;

pub use document::{Document, Extraction, Section, TableBlock};
pub use package::Package;
