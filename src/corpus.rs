//! Main module for corpus extraction
//!
//! The extraction pipeline, leaf first:
//! 1. [`classify`] decides whether a line carries a genuine comment or a hash
//!    inside a string literal, using quote-presence heuristics only.
//! 2. [`merge`] walks a whole file, merging vertically aligned comment lines
//!    into logical comments and filtering out commented-out code.
//! 3. [`docstrings`] pulls documentation strings off module, function and
//!    class declarations via a real Python parse.
//! 4. [`aggregate`] walks a directory tree, runs the above per file, and
//!    renders the newline-joined corpus.
//!
//! [`oracle`] supplies the syntax-validity check the merger needs to tell
//! prose from disabled code.

pub mod aggregate;
pub mod classify;
pub mod docstrings;
pub mod error;
pub mod merge;
pub mod options;
pub mod oracle;

pub use self::aggregate::{discover, write_corpus, Corpus, FileBlock};
pub use self::classify::classify;
pub use self::docstrings::extract_docstrings;
pub use self::error::CorpusError;
pub use self::merge::extract_comments;
pub use self::options::ExtractOptions;
pub use self::oracle::{PythonSyntax, SyntaxOracle};
