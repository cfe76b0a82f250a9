//! ZIP signature detection for input documents.

/// ZIP magic bytes: a local file header (`PK\x03\x04`) or, for an archive
/// with no entries, the end of central directory record (`PK\x05\x06`).
pub const ZIP_SIGNATURES: [[u8; 4]; 2] = [[0x50, 0x4B, 0x03, 0x04], [0x50, 0x4B, 0x05, 0x06]];

/// Returns true if the data starts with a ZIP signature.
///
/// # Example
///
/// ```
/// use docxstrip::detect::looks_like_zip;
///
/// assert!(looks_like_zip(b"PK\x03\x04..."));
/// assert!(!looks_like_zip(b"%PDF-1.7"));
/// ```
pub fn looks_like_zip(data: &[u8]) -> bool {
    data.len() >= 4 && ZIP_SIGNATURES.iter().any(|sig| data[..4] == sig[..])
}
