//! Markup stripping for document XML.
//!
//! This is a purely textual pass, not an XML parse: anything between a `<`
//! and the next `>` is dropped, including tag-like text that happens to sit
//! in content. Character entities such as `&amp;` are left as they are.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

/// `<`, one or more non-`>` characters, `>`.
static TAG_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());

/// A newline, optional whitespace (newlines included), then another newline.
static BLANK_RUN_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").unwrap());

/// Remove every XML tag from `xml`.
///
/// # Example
///
/// ```
/// use docxstrip::strip::strip_tags;
///
/// assert_eq!(strip_tags("<w:p><w:t>Hello</w:t></w:p>"), "Hello");
/// ```
pub fn strip_tags(xml: &str) -> Cow<'_, str> {
    TAG_PATTERN.replace_all(xml, "")
}

/// Count the tags `strip_tags` would remove.
pub fn count_tags(xml: &str) -> usize {
    TAG_PATTERN.find_iter(xml).count()
}

/// Collapse every run of blank or whitespace-only lines into one newline.
///
/// The greedy `\s*` swallows the whole run up to its last newline, so one
/// pass leaves no blank line behind.
pub fn collapse_blank_lines(text: &str) -> Cow<'_, str> {
    BLANK_RUN_PATTERN.replace_all(text, "\n")
}

/// Strip tags, then collapse blank-line runs.
pub fn strip_markup(xml: &str) -> String {
    let text = strip_tags(xml);
    collapse_blank_lines(&text).into_owned()
}
