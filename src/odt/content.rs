//! `content.xml` part handling.
//!
//! The main document content of an ODT file lives in the `content.xml`
//! entry of the package. This wrapper validates the bytes as UTF-8 and
//! hands the XML text to the body walker.

use crate::common::{Error, Result};

/// Parsed `content.xml` part.
#[derive(Debug)]
pub struct Content {
    content: String,
}

impl Content {
    /// Parse content from bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        let content = String::from_utf8(bytes)
            .map_err(|_| Error::InvalidFormat("Invalid UTF-8 in content.xml".to_string()))?;
        Ok(Self { content })
    }

    /// Get the raw XML content.
    pub fn xml_content(&self) -> &str {
        &self.content
    }
}
