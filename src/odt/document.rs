//! OpenDocument Text document structure and extraction API.

use crate::common::{Error, Result};
use crate::extract::lexicon::{Lexicon, WhitespaceLexicon};
use crate::extract::list::format_list;
use crate::extract::table::linearize;
use crate::odt::body::{BodyNode, parse_body};
use crate::odt::content::Content;
use crate::odt::package::Package;
use std::io::Cursor;
use std::path::Path;

/// MIME types a text document may carry in its `mimetype` entry.
const TEXT_MIME_TYPES: &[&str] = &[
    "application/vnd.oasis.opendocument.text",
    "application/vnd.oasis.opendocument.text-template",
];

/// One extracted unit of body text.
///
/// The image reference is reserved for output parity with sibling parsers
/// of formats that embed extractable images; for ODT it is always `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub text: String,
    pub image: Option<String>,
}

/// The linearized text lines of one table, in document order.
pub type TableBlock = Vec<String>;

/// Everything extracted from a document body.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    /// Paragraph, heading, and list-line texts in document order
    pub sections: Vec<Section>,
    /// One block of linearized lines per table that produced output
    pub tables: Vec<TableBlock>,
}

/// An OpenDocument text document (.odt).
///
/// Documents are immutable after loading; extraction is a pure read over
/// the parsed `content.xml`, so one document can be processed repeatedly
/// or from multiple call sites without coordination.
///
/// # Examples
///
/// ```no_run
/// use rambutan::odt::Document;
///
/// # fn main() -> rambutan::Result<()> {
/// let doc = Document::open("document.odt")?;
/// let extraction = doc.extract()?;
///
/// for section in &extraction.sections {
///     println!("{}", section.text);
/// }
/// for table in &extraction.tables {
///     for line in table {
///         println!("{}", line);
///     }
/// }
/// # Ok(())
/// # }
/// ```
#[allow(dead_code)]
pub struct Document {
    /// ZIP package containing all document files
    package: Package<Cursor<Vec<u8>>>,
    /// Parsed content.xml (main document content)
    content: Content,
}

impl Document {
    /// Open an ODT document from a file path.
    ///
    /// Reads the entire file into memory and parses the package.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not a valid ZIP
    /// archive, declares a non-text MIME type, or has no `content.xml`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = std::fs::read(path.as_ref())?;
        Self::from_bytes(bytes)
    }

    /// Create a document from a byte buffer.
    ///
    /// Useful when the document is already in memory, such as from a
    /// network transfer or an embedded resource.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        let cursor = Cursor::new(bytes);
        let package = Package::from_reader(cursor)?;

        // Some producers omit the mimetype entry; a present one must match
        if let Some(mime) = package.mimetype()
            && !TEXT_MIME_TYPES.contains(&mime)
        {
            return Err(Error::InvalidContentType {
                expected: TEXT_MIME_TYPES[0].to_string(),
                got: mime.to_string(),
            });
        }

        let content_bytes = package.get_file("content.xml")?;
        let content = Content::from_bytes(content_bytes)?;

        Ok(Self { package, content })
    }

    /// Extract sections and table blocks using the bundled whitespace
    /// lexicon.
    pub fn extract(&self) -> Result<Extraction> {
        self.extract_with(&WhitespaceLexicon)
    }

    /// Extract sections and table blocks, classifying table cells with
    /// the given lexicon.
    ///
    /// Paragraphs and headings become one section each; every formatted
    /// list line becomes its own section; each table that yields output
    /// contributes one block of lines. Order follows the document body.
    pub fn extract_with<L: Lexicon>(&self, lexicon: &L) -> Result<Extraction> {
        let nodes = parse_body(self.content.xml_content())?;

        let mut extraction = Extraction::default();
        for node in nodes {
            match node {
                BodyNode::Paragraph(text) => {
                    let text = text.trim();
                    if !text.is_empty() {
                        extraction.sections.push(Section {
                            text: text.to_string(),
                            image: None,
                        });
                    }
                },
                BodyNode::List(list) => {
                    for line in format_list(&list, 0, list.is_ordered()) {
                        if !line.trim().is_empty() {
                            extraction.sections.push(Section { text: line, image: None });
                        }
                    }
                },
                BodyNode::Table(rows) => {
                    let block = linearize(&rows, lexicon);
                    if !block.is_empty() {
                        extraction.tables.push(block);
                    }
                },
            }
        }

        Ok(extraction)
    }

    /// Extract a page range.
    ///
    /// ODT has no pagination, so the range is accepted for interface
    /// parity with paginated parsers and the whole document is returned.
    pub fn extract_range(&self, _from_page: usize, _to_page: usize) -> Result<Extraction> {
        self.extract()
    }

    /// All section texts joined with newlines.
    pub fn text(&self) -> Result<String> {
        let extraction = self.extract()?;
        let texts: Vec<String> = extraction.sections.into_iter().map(|s| s.text).collect();
        Ok(texts.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::{SimpleFileOptions, ZipWriter};

    fn build_odt(content_xml: &str) -> Vec<u8> {
        build_odt_with_mimetype(content_xml, Some(TEXT_MIME_TYPES[0]))
    }

    fn build_odt_with_mimetype(content_xml: &str, mimetype: Option<&str>) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        if let Some(mime) = mimetype {
            let options =
                SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
            writer.start_file("mimetype", options).unwrap();
            writer.write_all(mime.as_bytes()).unwrap();
        }
        let options = SimpleFileOptions::default();
        writer.start_file("content.xml", options).unwrap();
        writer.write_all(content_xml.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    fn content(inner: &str) -> String {
        format!(
            "<office:document-content><office:body><office:text>{}\
             </office:text></office:body></office:document-content>",
            inner
        )
    }

    #[test]
    fn test_extracts_sections_and_tables_in_order() {
        let xml = content(
            "<text:p>Intro</text:p>\
             <text:list text:style-name=\"Numbering1\">\
             <text:list-item><text:p>step one</text:p></text:list-item>\
             <text:list-item><text:p>step two</text:p></text:list-item>\
             </text:list>\
             <table:table>\
             <table:table-row>\
             <table:table-cell><text:p>Year</text:p></table:table-cell>\
             <table:table-cell><text:p>Revenue</text:p></table:table-cell>\
             </table:table-row>\
             <table:table-row>\
             <table:table-cell><text:p>2023</text:p></table:table-cell>\
             <table:table-cell><text:p>100</text:p></table:table-cell>\
             </table:table-row>\
             <table:table-row>\
             <table:table-cell><text:p>2024</text:p></table:table-cell>\
             <table:table-cell><text:p>120</text:p></table:table-cell>\
             </table:table-row>\
             </table:table>",
        );
        let doc = Document::from_bytes(build_odt(&xml)).unwrap();
        let extraction = doc.extract().unwrap();

        let texts: Vec<&str> = extraction.sections.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["Intro", "1. step one", "2. step two"]);
        assert!(extraction.sections.iter().all(|s| s.image.is_none()));

        assert_eq!(
            extraction.tables,
            vec![vec!["Year: 2023;Revenue: 100\nYear: 2024;Revenue: 120".to_string()]]
        );
    }

    #[test]
    fn test_single_row_table_contributes_nothing() {
        let xml = content(
            "<table:table><table:table-row>\
             <table:table-cell><text:p>alone</text:p></table:table-cell>\
             </table:table-row></table:table>",
        );
        let doc = Document::from_bytes(build_odt(&xml)).unwrap();
        let extraction = doc.extract().unwrap();
        assert!(extraction.tables.is_empty());
    }

    #[test]
    fn test_missing_mimetype_is_tolerated() {
        let xml = content("<text:p>hello</text:p>");
        let doc = Document::from_bytes(build_odt_with_mimetype(&xml, None)).unwrap();
        assert_eq!(doc.text().unwrap(), "hello");
    }

    #[test]
    fn test_wrong_mimetype_is_rejected() {
        let xml = content("<text:p>hello</text:p>");
        let bytes =
            build_odt_with_mimetype(&xml, Some("application/vnd.oasis.opendocument.spreadsheet"));
        match Document::from_bytes(bytes) {
            Err(Error::InvalidContentType { got, .. }) => {
                assert!(got.contains("spreadsheet"));
            },
            other => panic!("expected InvalidContentType, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_missing_content_xml_is_an_error() {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default();
        writer.start_file("styles.xml", options).unwrap();
        writer.write_all(b"<office:document-styles/>").unwrap();
        let bytes = writer.finish().unwrap().into_inner();

        match Document::from_bytes(bytes) {
            Err(Error::ComponentNotFound(name)) => assert_eq!(name, "content.xml"),
            other => panic!("expected ComponentNotFound, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_not_a_zip_is_an_error() {
        assert!(matches!(
            Document::from_bytes(b"plain text, not an archive".to_vec()),
            Err(Error::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_open_from_path() {
        let xml = content("<text:p>from disk</text:p>");
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.odt");
        std::fs::write(&path, build_odt(&xml)).unwrap();

        let doc = Document::open(&path).unwrap();
        assert_eq!(doc.text().unwrap(), "from disk");
    }

    #[test]
    fn test_extract_range_ignores_pages() {
        let xml = content("<text:p>everything</text:p>");
        let doc = Document::from_bytes(build_odt(&xml)).unwrap();
        let ranged = doc.extract_range(0, 1).unwrap();
        let full = doc.extract().unwrap();
        assert_eq!(ranged.sections, full.sections);
    }

    #[test]
    fn test_empty_paragraphs_are_dropped() {
        let xml = content("<text:p/><text:p>  </text:p><text:p>kept</text:p>");
        let doc = Document::from_bytes(build_odt(&xml)).unwrap();
        let extraction = doc.extract().unwrap();
        assert_eq!(extraction.sections.len(), 1);
        assert_eq!(extraction.sections[0].text, "kept");
    }
}
