//! Settings file tokenizer
//!
//! Turns the raw text of a settings file into an ordered list of
//! `KEY=VALUE` pairs. Comment and blank lines are dropped; every other line
//! must split into a non-empty key and a non-empty value.

use crate::{Error, Result};
use std::path::Path;
use tracing::debug;

/// Lines starting with this character are ignored
pub const COMMENT_MARKER: char = '%';

/// Separates a key from its value
pub const KEY_VALUE_DELIMITER: char = '=';

/// One directive line of a settings file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPair {
    /// Key, verbatim
    pub key: String,
    /// Everything after the first delimiter, verbatim
    pub value: String,
    /// 1-based source line
    pub line: usize,
}

impl RawPair {
    /// Create a new pair
    pub fn new(key: impl Into<String>, value: impl Into<String>, line: usize) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            line,
        }
    }
}

/// Read and tokenize the settings file at `path`
///
/// The whole file is read before tokenizing, so the handle is released on
/// every return path.
pub fn tokenize_file(path: &Path) -> Result<Vec<RawPair>> {
    let text = std::fs::read_to_string(path).map_err(|e| Error::from_read(path, e))?;
    debug!("Read settings file {:?} ({} bytes)", path, text.len());
    tokenize_str(&text)
}

/// Tokenize settings text already held in memory
pub fn tokenize_str(text: &str) -> Result<Vec<RawPair>> {
    let mut pairs = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;

        if line.trim().is_empty() || line.starts_with(COMMENT_MARKER) {
            continue;
        }

        // Only the first delimiter splits; the value may contain more
        let (key, value) = line
            .split_once(KEY_VALUE_DELIMITER)
            .ok_or_else(|| Error::malformed_line(line_no, line))?;

        if key.is_empty() || value.is_empty() {
            return Err(Error::malformed_line(line_no, line));
        }

        pairs.push(RawPair::new(key, value, line_no));
    }

    debug!("Tokenized {} directive(s)", pairs.len());
    Ok(pairs)
}
