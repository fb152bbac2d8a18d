//! Source-text acquisition and cleaning: everything between the raw file on
//! disk and the uppercase-letter-only string the cipher consumes.

use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::errors::AppError;

const START_MARKER: &str = "*** START OF THE PROJECT GUTENBERG EBOOK";
const END_MARKER: &str = "*** END OF THE PROJECT GUTENBERG EBOOK";

/// Reads a file, mapping any I/O failure to [`AppError::SourceNotFound`].
pub fn read_source(path: &Path) -> Result<String, AppError> {
    fs::read_to_string(path).map_err(|source| AppError::SourceNotFound {
        path: path.display().to_string(),
        source,
    })
}

/// Loads plaintext for encryption: strips Project Gutenberg boilerplate when
/// both markers are present, then keeps only letters, uppercased.
pub fn load_and_clean_text(path: &Path) -> Result<String, AppError> {
    info!("reading text from {}", path.display());
    let raw = read_source(path)?;
    let cleaned = clean(strip_boilerplate(&raw));
    debug!("cleaned text length: {} characters", cleaned.len());
    Ok(cleaned)
}

/// Keep only alphabetic characters, uppercased: the projection onto the
/// cipher's Z_26 alphabet space.
pub fn clean(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// If both Gutenberg markers occur verbatim, keep only the text between
/// them; otherwise use the whole text.
fn strip_boilerplate(text: &str) -> &str {
    match (text.find(START_MARKER), text.find(END_MARKER)) {
        (Some(start), Some(end)) if start + START_MARKER.len() <= end => {
            &text[start + START_MARKER.len()..end]
        }
        _ => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_keeps_letters_only() {
        assert_eq!(clean("It was 1895!"), "ITWAS");
        assert_eq!(clean("...\n\t"), "");
    }

    #[test]
    fn test_strip_boilerplate_with_markers() {
        let text = format!("header junk {START_MARKER} The Body. {END_MARKER} footer");
        assert_eq!(strip_boilerplate(&text), " The Body. ");
    }

    #[test]
    fn test_strip_boilerplate_without_markers() {
        assert_eq!(strip_boilerplate("plain text"), "plain text");
        // an end marker before the start marker is not a valid span
        let reversed = format!("{END_MARKER} middle {START_MARKER}");
        assert_eq!(strip_boilerplate(&reversed), reversed.as_str());
    }

    #[test]
    fn test_read_source_missing_file() {
        let err = read_source(Path::new("no-such-file.txt")).unwrap_err();
        assert!(matches!(err, AppError::SourceNotFound { .. }));
    }
}
