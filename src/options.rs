//! Extraction options configuration.

use crate::container::DOCUMENT_PART;
use std::path::{Path, PathBuf};

/// File name the extracted text is written to, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "extracted_doc_content.md";

/// Options for text extraction.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Archive member holding the document XML
    pub member: String,

    /// Where the extracted text is written
    pub output: PathBuf,

    /// Collapse runs of blank lines into a single newline
    pub collapse_blank_lines: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            member: DOCUMENT_PART.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            collapse_blank_lines: true,
        }
    }
}

impl ExtractOptions {
    /// Create new extraction options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a different archive member.
    pub fn with_member(mut self, member: impl Into<String>) -> Self {
        self.member = member.into();
        self
    }

    /// Write the extracted text somewhere else.
    pub fn with_output(mut self, output: impl AsRef<Path>) -> Self {
        self.output = output.as_ref().to_path_buf();
        self
    }

    /// Enable or disable blank-line collapsing.
    pub fn with_collapse_blank_lines(mut self, collapse: bool) -> Self {
        self.collapse_blank_lines = collapse;
        self
    }
}
