//! ZIP container abstraction for Word documents.

use crate::detect::looks_like_zip;
use crate::error::{ExtractionError, Result};
use std::cell::RefCell;
use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::Path;

/// Path of the main document part inside a WordprocessingML package.
pub const DOCUMENT_PART: &str = "word/document.xml";

/// Decode member bytes as UTF-8.
///
/// Anything that is not valid UTF-8 is rejected rather than decoded lossily.
/// A leading byte order mark is kept as U+FEFF.
pub fn decode_xml_bytes(member: &str, bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|source| ExtractionError::Encoding {
        member: member.to_string(),
        source,
    })
}

/// Word document container over a ZIP archive.
///
/// The whole archive is held in memory; dropping the container releases it.
pub struct DocxContainer {
    archive: RefCell<zip::ZipArchive<Cursor<Vec<u8>>>>,
}

impl DocxContainer {
    /// Open a container from a file path.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use docxstrip::container::{DocxContainer, DOCUMENT_PART};
    ///
    /// let container = DocxContainer::open("document.docx")?;
    /// let xml = container.read_xml(DOCUMENT_PART)?;
    /// # Ok::<(), docxstrip::ExtractionError>(())
    /// ```
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let open_err = |source| ExtractionError::Open {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(open_err)?;
        let mut reader = BufReader::new(file);
        let mut data = Vec::new();
        reader.read_to_end(&mut data).map_err(open_err)?;
        Self::from_bytes(data)
    }

    /// Create a container from a byte vector.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let is_zip = looks_like_zip(&data);
        let archive = zip::ZipArchive::new(Cursor::new(data)).map_err(|e| {
            if is_zip {
                ExtractionError::from(e)
            } else {
                ExtractionError::NotAnArchive
            }
        })?;

        tracing::debug!(members = archive.len(), "opened archive");
        Ok(Self {
            archive: RefCell::new(archive),
        })
    }

    /// Read a member as UTF-8 text.
    pub fn read_xml(&self, member: &str) -> Result<String> {
        let bytes = self.read_binary(member)?;
        tracing::debug!(member, bytes = bytes.len(), "read archive member");
        decode_xml_bytes(member, bytes)
    }

    /// Read a member as raw bytes.
    pub fn read_binary(&self, member: &str) -> Result<Vec<u8>> {
        let mut archive = self.archive.borrow_mut();
        let mut file = archive.by_name(member).map_err(|e| match e {
            zip::result::ZipError::FileNotFound => {
                ExtractionError::MissingMember(member.to_string())
            }
            other => ExtractionError::from(other),
        })?;

        let mut data = Vec::new();
        file.read_to_end(&mut data)?;
        Ok(data)
    }

    /// Check if a member exists in the archive.
    pub fn exists(&self, member: &str) -> bool {
        self.archive.borrow().file_names().any(|n| n == member)
    }

    /// List all members in the archive.
    pub fn list_files(&self) -> Vec<String> {
        let archive = self.archive.borrow();
        archive.file_names().map(String::from).collect()
    }

    /// Number of members in the archive.
    pub fn len(&self) -> usize {
        self.archive.borrow().len()
    }

    /// Returns true if the archive has no members.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for DocxContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocxContainer")
            .field("files", &self.len())
            .finish()
    }
}
