//! Rambutan - structured text extraction for OpenDocument Text files
//!
//! This library walks the body of an .odt document and pulls out
//! paragraphs, nested bullet/numbered lists, and tables, converting each
//! table's grid of cell strings into a small number of semantically
//! linearized text lines suitable for natural-language indexing.
//!
//! # Features
//!
//! - **ODT Reader**: Open documents from a path or a byte buffer
//! - **Body walker**: Paragraphs, headings, lists, and tables in document order
//! - **Table linearization**: Cell type classification, header-row
//!   inference, and header-qualified row flattening
//! - **Nested list formatting**: Ordered and unordered lists rendered to
//!   indented bullet lines
//! - **Pluggable lexicon**: Tokenizer/tagger used as a classification
//!   signal, substitutable behind a trait
//!
//! # Example - Extracting a document
//!
//! ```no_run
//! use rambutan::odt::Document;
//!
//! # fn main() -> rambutan::Result<()> {
//! let doc = Document::open("report.odt")?;
//! let extraction = doc.extract()?;
//!
//! for section in &extraction.sections {
//!     println!("{}", section.text);
//! }
//! for table in &extraction.tables {
//!     for line in table {
//!         println!("{}", line);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Linearizing a grid directly
//!
//! ```
//! use rambutan::extract::{WhitespaceLexicon, linearize};
//!
//! let grid = vec![
//!     vec!["Year".to_string(), "Revenue".to_string()],
//!     vec!["2023".to_string(), "100".to_string()],
//! ];
//! let lines = linearize(&grid, &WhitespaceLexicon);
//! assert_eq!(lines, vec!["Year: 2023;Revenue: 100".to_string()]);
//! ```

/// Common types and utilities
pub mod common;

/// Linearization of tables and lists into indexable text
pub mod extract;

/// OpenDocument Text (.odt) reading
pub mod odt;

// Re-export commonly used types for convenience
pub use common::{Error, Result};
pub use extract::{CellType, Lexicon, WhitespaceLexicon};
pub use odt::{Document, Extraction, Section, TableBlock};
