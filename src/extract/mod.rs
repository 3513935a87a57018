//! Linearization of document structures into indexable text.
//!
//! The pieces here are pure functions over already-materialized
//! structures: a table grid goes through cell classification, header-row
//! inference, and header-qualified row flattening; a list tree is
//! rendered into indented bullet lines. Nothing in this module touches
//! the container format.

/// Cell type classification
pub mod cell_type;
/// Tokenizer/tagger capability trait
pub mod lexicon;
/// Nested list formatting
pub mod list;
/// Table-to-text linearization
pub mod table;

// Re-exports for convenience
pub use cell_type::{CellType, classify};
pub use lexicon::{Lexicon, WhitespaceLexicon};
pub use list::{ListItem, ListNode, format_list};
pub use table::{detect_header_rows, linearize};
