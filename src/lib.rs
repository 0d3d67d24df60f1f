//! # pycorpus
//!
//! A corpus miner for Python source trees: extracts inline comments and
//! docstrings (the natural-language text embedded in code) into a flat
//! newline-delimited corpus for downstream text analysis or model training.
//!
//! Commented-out code is filtered away using a syntax-validity check, and
//! hash symbols that sit inside string literals are handled by a shallow
//! quote heuristic rather than a full lexer.
//!
//! ## Testing
//!
//! Core heuristics are unit tested beside their modules; end-to-end corpus
//! building and the CLI are covered by the integration tests under `tests/`.

pub mod corpus;
