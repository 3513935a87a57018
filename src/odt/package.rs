//! ODT package (ZIP archive) handling.
//!
//! An ODT file is a ZIP archive containing XML documents. This module
//! provides the thin archive wrapper used to pull individual entries
//! (`mimetype`, `content.xml`) out of the package.

use crate::common::{Error, Result};
use std::cell::RefCell;
use std::io::{Read, Seek};

/// An ODT package (ZIP file containing XML documents).
pub struct Package<R> {
    archive: RefCell<zip::ZipArchive<R>>,
    mimetype: Option<String>,
}

impl<R: Read + Seek> Package<R> {
    /// Open an ODT package from a reader.
    pub fn from_reader(reader: R) -> Result<Self> {
        let mut archive = zip::ZipArchive::new(reader)
            .map_err(|_| Error::InvalidFormat("Invalid ZIP archive".to_string()))?;

        let mimetype = Self::read_mimetype(&mut archive)?;

        Ok(Self {
            archive: RefCell::new(archive),
            mimetype,
        })
    }

    /// Read the MIME type from the `mimetype` entry.
    ///
    /// Some producers omit the entry entirely, so a missing file is not an
    /// error here; the document layer decides whether to insist on it.
    fn read_mimetype(archive: &mut zip::ZipArchive<R>) -> Result<Option<String>> {
        let Ok(mut mimetype_file) = archive.by_name("mimetype") else {
            return Ok(None);
        };

        let mut content = String::new();
        mimetype_file.read_to_string(&mut content)?;
        Ok(Some(content.trim().to_string()))
    }

    /// Get the MIME type from the `mimetype` entry, if present.
    pub fn mimetype(&self) -> Option<&str> {
        self.mimetype.as_deref()
    }

    /// Get a file from the package by path.
    pub fn get_file(&self, path: &str) -> Result<Vec<u8>> {
        let mut archive = self.archive.borrow_mut();
        let mut file = archive
            .by_name(path)
            .map_err(|_| Error::ComponentNotFound(path.to_string()))?;

        let mut content = Vec::new();
        file.read_to_end(&mut content)?;
        Ok(content)
    }

    /// Check if a file exists in the package.
    pub fn has_file(&self, path: &str) -> bool {
        self.archive.borrow_mut().by_name(path).is_ok()
    }
}
