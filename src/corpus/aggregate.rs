//! Corpus aggregation
//!
//! Walks a directory tree for Python sources, runs the comment merger and
//! (optionally) the docstring extractor per file, and renders the per-file
//! blocks into one newline-delimited corpus. Files are discovered in
//! arbitrary walk order and then processed in sorted path order so a corpus
//! build is deterministic.

use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use walkdir::WalkDir;

use crate::corpus::docstrings::extract_docstrings;
use crate::corpus::error::CorpusError;
use crate::corpus::merge::extract_comments;
use crate::corpus::options::ExtractOptions;
use crate::corpus::oracle::PythonSyntax;

/// Runs of blank lines collapse to a single newline in rendered output.
static DOUBLED_NEWLINES: Lazy<Regex> = Lazy::new(|| Regex::new("\n{2,}").expect("static pattern"));

/// Extraction result for one source file.
#[derive(Debug, Clone, Serialize)]
pub struct FileBlock {
    pub path: PathBuf,
    pub comments: Vec<String>,
    pub docstrings: Vec<String>,
}

impl FileBlock {
    /// Comments, then docstrings, newline-joined with blank-line runs
    /// collapsed. A file with no extracted text renders as a single newline.
    pub fn render(&self) -> String {
        let text = format!(
            "{}\n{}",
            self.comments.join("\n"),
            self.docstrings.join("\n")
        );
        DOUBLED_NEWLINES.replace_all(&text, "\n").into_owned()
    }
}

/// The aggregated extraction result for a whole source tree, one block per
/// file in sorted path order.
#[derive(Debug, Clone, Serialize)]
pub struct Corpus {
    pub blocks: Vec<FileBlock>,
}

impl Corpus {
    /// Build a corpus from every `*.py` file under `root`.
    ///
    /// Prints a `Doing <i>/<total>` progress line per file. Any read or
    /// parse failure aborts the build.
    pub fn build(root: &Path, options: &ExtractOptions) -> Result<Corpus, CorpusError> {
        let files = discover(root);
        let total = files.len();
        let mut blocks = Vec::with_capacity(total);
        for (i, path) in files.iter().enumerate() {
            println!("Doing {}/{}", i + 1, total);
            blocks.push(file_block(path, options)?);
        }
        Ok(Corpus { blocks })
    }

    /// Render the whole corpus: blocks newline-joined, blank-line runs
    /// collapsed, terminated by a trailing newline.
    pub fn render(&self) -> String {
        let joined = self
            .blocks
            .iter()
            .map(FileBlock::render)
            .collect::<Vec<_>>()
            .join("\n");
        DOUBLED_NEWLINES
            .replace_all(&format!("{}\n", joined), "\n")
            .into_owned()
    }
}

/// Find every Python source file under `root`, sorted by path. Unreadable
/// directory entries are skipped rather than failing the walk.
pub fn discover(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "py"))
        .map(walkdir::DirEntry::into_path)
        .collect();
    files.sort();
    files
}

fn file_block(path: &Path, options: &ExtractOptions) -> Result<FileBlock, CorpusError> {
    let source = fs::read_to_string(path)?;
    let comments = extract_comments(&source, options, &PythonSyntax);
    let docstrings = if options.docstrings {
        extract_docstrings(&source)?
    } else {
        Vec::new()
    };
    Ok(FileBlock {
        path: path.to_path_buf(),
        comments,
        docstrings,
    })
}

/// Build the corpus under `root` and write it to `options.output`.
pub fn write_corpus(root: &Path, options: &ExtractOptions) -> Result<(), CorpusError> {
    let corpus = Corpus::build(root, options)?;
    fs::write(&options.output, corpus.render())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(comments: &[&str], docstrings: &[&str]) -> FileBlock {
        FileBlock {
            path: PathBuf::from("test.py"),
            comments: comments.iter().map(|s| s.to_string()).collect(),
            docstrings: docstrings.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn empty_block_renders_as_single_newline() {
        assert_eq!(block(&[], &[]).render(), "\n");
    }

    #[test]
    fn comments_precede_docstrings() {
        let rendered = block(&["first note.", "second note."], &["A docstring."]).render();
        assert_eq!(rendered, "first note.\nsecond note.\nA docstring.");
    }

    #[test]
    fn corpus_render_collapses_empty_blocks() {
        let corpus = Corpus {
            blocks: vec![block(&[], &[]), block(&["only sentence."], &[])],
        };
        assert_eq!(corpus.render(), "\nonly sentence.\n");
    }

    #[test]
    fn corpus_render_ends_with_single_newline() {
        let corpus = Corpus {
            blocks: vec![block(&["a note."], &[]), block(&["b note."], &[])],
        };
        assert_eq!(corpus.render(), "a note.\nb note.\n");
    }
}
