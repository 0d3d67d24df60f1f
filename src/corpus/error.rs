//! Errors for corpus building
//!
//! There are only two failure sources: reading a source file and parsing one
//! for docstrings. Both abort the run (the corpus builder is expected to run
//! over known-good trees), so the error type stays flat and message-carrying.

use rustpython_parser::ParseError;

/// Error that can occur while building a corpus.
#[derive(Debug, Clone)]
pub enum CorpusError {
    /// IO error when reading a source file or writing the corpus
    Io(String),
    /// A file could not be parsed for docstring extraction
    Parse(String),
}

impl std::fmt::Display for CorpusError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CorpusError::Io(msg) => write!(f, "IO error: {}", msg),
            CorpusError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for CorpusError {}

impl From<std::io::Error> for CorpusError {
    fn from(err: std::io::Error) -> Self {
        CorpusError::Io(err.to_string())
    }
}

impl From<ParseError> for CorpusError {
    fn from(err: ParseError) -> Self {
        CorpusError::Parse(err.to_string())
    }
}
