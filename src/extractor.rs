//! The extraction pipeline: open, read, strip, write.

use crate::container::DocxContainer;
use crate::error::{ExtractionError, Result};
use crate::options::ExtractOptions;
use crate::strip::{collapse_blank_lines, count_tags, strip_tags};
use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of a successful extraction to file.
#[derive(Debug, Clone)]
pub struct Extraction {
    /// Path the text was written to
    pub output: PathBuf,
    /// Size of the document XML in bytes
    pub xml_bytes: usize,
    /// Number of tags removed
    pub tags_removed: usize,
    /// The extracted text as written
    pub text: String,
}

/// Extracts raw text from Word documents.
///
/// # Example
///
/// ```no_run
/// use docxstrip::{ExtractOptions, Extractor};
///
/// let extractor = Extractor::new(ExtractOptions::new().with_output("report.md"));
/// let extraction = extractor.extract_to_file("report.docx")?;
/// println!("{} tags removed", extraction.tags_removed);
/// # Ok::<(), docxstrip::ExtractionError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    options: ExtractOptions,
}

impl Extractor {
    /// Create an extractor with the given options.
    pub fn new(options: ExtractOptions) -> Self {
        Self { options }
    }

    /// Extract text from the document at `path` without writing anything.
    pub fn extract_text(&self, path: impl AsRef<Path>) -> Result<String> {
        let container = DocxContainer::open(path)?;
        let xml = container.read_xml(&self.options.member)?;
        Ok(self.strip(&xml).0)
    }

    /// Extract text from an in-memory document.
    pub fn extract_text_from_bytes(&self, data: &[u8]) -> Result<String> {
        let container = DocxContainer::from_bytes(data.to_vec())?;
        let xml = container.read_xml(&self.options.member)?;
        Ok(self.strip(&xml).0)
    }

    /// Extract text from the document at `path` and write it to the output path.
    ///
    /// Any existing output file is overwritten. Nothing is written if the
    /// document cannot be read.
    pub fn extract_to_file(&self, path: impl AsRef<Path>) -> Result<Extraction> {
        let xml = {
            let container = DocxContainer::open(path)?;
            container.read_xml(&self.options.member)?
        };

        let (text, tags_removed) = self.strip(&xml);

        let output = self.options.output.clone();
        fs::write(&output, &text).map_err(|source| ExtractionError::Write {
            path: output.clone(),
            source,
        })?;
        tracing::info!(output = %output.display(), chars = text.chars().count(), "wrote extracted text");

        Ok(Extraction {
            output,
            xml_bytes: xml.len(),
            tags_removed,
            text,
        })
    }

    fn strip(&self, xml: &str) -> (String, usize) {
        let tags_removed = count_tags(xml);
        let stripped = strip_tags(xml);
        let text = if self.options.collapse_blank_lines {
            collapse_blank_lines(&stripped).into_owned()
        } else {
            stripped.into_owned()
        };

        tracing::debug!(
            xml_bytes = xml.len(),
            tags_removed,
            text_bytes = text.len(),
            "stripped markup"
        );
        (text, tags_removed)
    }
}
