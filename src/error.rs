use std::fmt;

/// The main error type for document loading and parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum DexError {
    /// A file could not be read or written; carries the underlying io message.
    FileError {
        message: String,
        path: String,
    },
    /// A line matched neither recognized shape (list item or mapping entry),
    /// or mixed list items and mapping keys under one parent.
    MalformedLine {
        line: usize,
        text: String,
    },
}

impl fmt::Display for DexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DexError::FileError { message, path } =>
                write!(f, "[dex] File Error '{}': {}", path, message),
            DexError::MalformedLine { line, text } =>
                write!(f, "[dex] Malformed line {}: '{}'", line, text),
        }
    }
}

impl std::error::Error for DexError {}
