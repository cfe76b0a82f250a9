//! # docxstrip
//!
//! Raw text extraction from Word (`.docx`) documents.
//!
//! A `.docx` file is a ZIP archive. This crate reads its main document part
//! (`word/document.xml`), strips every XML tag with a regular expression,
//! collapses runs of blank lines, and writes what is left to
//! `extracted_doc_content.md`.
//!
//! ## Quick Start
//!
//! ```no_run
//! // Text only
//! let text = docxstrip::extract_text("document.docx")?;
//! println!("{}", text);
//!
//! // Text written to extracted_doc_content.md in the working directory
//! let extraction = docxstrip::extract_to_file("document.docx")?;
//! println!("Wrote {}", extraction.output.display());
//! # Ok::<(), docxstrip::ExtractionError>(())
//! ```
//!
//! ## Custom Options
//!
//! ```no_run
//! use docxstrip::{ExtractOptions, Extractor};
//!
//! let options = ExtractOptions::new()
//!     .with_output("notes.md")
//!     .with_collapse_blank_lines(false);
//!
//! Extractor::new(options).extract_to_file("document.docx")?;
//! # Ok::<(), docxstrip::ExtractionError>(())
//! ```
//!
//! Stripping is textual, not an XML parse: tag-like text inside content is
//! removed along with the markup, and character entities are not decoded.

pub mod container;
pub mod detect;
pub mod error;
pub mod extractor;
pub mod options;
pub mod strip;

// Re-exports
pub use container::{DocxContainer, DOCUMENT_PART};
pub use detect::looks_like_zip;
pub use error::{ExtractionError, Result};
pub use extractor::{Extraction, Extractor};
pub use options::{ExtractOptions, DEFAULT_OUTPUT};
pub use strip::strip_markup;

use std::path::Path;

/// Extract plain text from a document.
///
/// # Example
///
/// ```no_run
/// use docxstrip::extract_text;
///
/// let text = extract_text("document.docx")?;
/// println!("{}", text);
/// # Ok::<(), docxstrip::ExtractionError>(())
/// ```
pub fn extract_text(path: impl AsRef<Path>) -> Result<String> {
    Extractor::default().extract_text(path)
}

/// Extract text from a document and write it to [`DEFAULT_OUTPUT`].
///
/// The output file is overwritten if it already exists.
pub fn extract_to_file(path: impl AsRef<Path>) -> Result<Extraction> {
    Extractor::default().extract_to_file(path)
}
