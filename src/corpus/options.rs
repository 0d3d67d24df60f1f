//! Extraction options
//!
//! One options struct is threaded through the whole pipeline; there is no
//! global configuration state.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Knobs for corpus extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractOptions {
    /// Keep comments consisting of a single word (no spaces).
    pub allow_single_word: bool,
    /// Include docstrings in each file's block. Off in the reference
    /// behavior; comments alone usually make the better prose corpus.
    pub docstrings: bool,
    /// Where the rendered corpus is written.
    pub output: PathBuf,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        ExtractOptions {
            allow_single_word: true,
            docstrings: false,
            output: PathBuf::from("corpus.txt"),
        }
    }
}
