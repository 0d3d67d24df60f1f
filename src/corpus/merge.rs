//! Run merging: physical comment lines to logical comments
//!
//! A human-authored comment often spans several physical lines, each starting
//! at the same column:
//!
//! ```text
//! x = load()  # normalize the input
//!             # before the first pass
//! ```
//!
//! The merger walks a file once, seeds a logical comment at each line the
//! classifier accepts, and extends it downward while the next line carries
//! the marker at the same column. Merged text then runs a filter gauntlet:
//! reserved tooling words, the disabled-code check, and the single-word
//! policy.

use std::collections::HashSet;

use crate::corpus::classify::{classify, MARKER};
use crate::corpus::options::ExtractOptions;
use crate::corpus::oracle::SyntaxOracle;

/// Words that mark a comment as an editor or tooling directive rather than
/// prose. Matched as substrings of the merged comment.
static RESERVED: &[&str] = &["pylint", "pragma"];

/// Extract all logical comments from one file's text, in file order.
///
/// Line 0 never seeds a comment (shebang/header convention), and a line
/// absorbed into a preceding logical comment never seeds its own. Accepted
/// multi-word comments are normalized into sentences: trailing periods are
/// stripped and exactly one is appended. Single-word comments are kept
/// verbatim, and only when `options.allow_single_word` is set.
pub fn extract_comments(
    source: &str,
    options: &ExtractOptions,
    oracle: &impl SyntaxOracle,
) -> Vec<String> {
    let lines: Vec<&str> = source.lines().collect();
    let mut comments = Vec::new();
    let mut skippable: HashSet<usize> = HashSet::new();

    for i in 1..lines.len() {
        if skippable.contains(&i) {
            continue;
        }
        let Some(seed) = classify(lines[i]) else {
            continue;
        };
        if seed.is_empty() {
            continue;
        }
        let Some(column) = lines[i].find(MARKER) else {
            continue;
        };

        let mut comment = seed;
        for j in (i + 1)..lines.len() {
            if !marker_at_column(lines[j], column) {
                break;
            }
            let Some(extra) = classify(lines[j]) else {
                break;
            };
            if extra.is_empty() {
                break;
            }
            comment.push(' ');
            comment.push_str(&extra);
            skippable.insert(j);
        }

        if RESERVED.iter().any(|word| comment.contains(word)) {
            continue;
        }

        let comment = normalize(&comment);
        // Valid code with letters in it is almost certainly disabled code.
        // Pure symbol noise that happens to parse falls through.
        if oracle.is_valid_code(&comment) && comment.chars().any(char::is_alphabetic) {
            continue;
        }

        if comment.contains(' ') {
            comments.push(format!("{}.", comment.trim_end_matches('.')));
        } else if options.allow_single_word {
            comments.push(comment);
        }
    }
    comments
}

/// Continuation requires the marker at exactly the seed's column, so the line
/// must be long enough to index there.
fn marker_at_column(line: &str, column: usize) -> bool {
    line.as_bytes().get(column) == Some(&(MARKER as u8))
}

fn normalize(comment: &str) -> String {
    comment
        .trim()
        .replace(['\n', '\r'], " ")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::oracle::PythonSyntax;

    /// Canned oracle for exercising the disabled-code filter in isolation.
    struct Always(bool);

    impl SyntaxOracle for Always {
        fn is_valid_code(&self, _text: &str) -> bool {
            self.0
        }
    }

    fn extract(source: &str) -> Vec<String> {
        extract_comments(source, &ExtractOptions::default(), &PythonSyntax)
    }

    #[test]
    fn aligned_run_merges_into_one_sentence() {
        let source = "import os\nx = 1  # part one\n       # part two\n       # part three\n";
        assert_eq!(extract(source), vec!["part one part two part three."]);
    }

    #[test]
    fn absorbed_lines_do_not_seed_their_own_comments() {
        let source = "import os\nx = 1  # part one\n       # part two\n";
        let result = extract(source);
        assert_eq!(result.len(), 1);
        assert!(!result.contains(&"part two.".to_string()));
    }

    #[test]
    fn column_mismatch_ends_the_run() {
        let source = "import os\nx = 1  # part one\n  # separate note here\n";
        assert_eq!(
            extract(source),
            vec!["part one.", "separate note here."]
        );
    }

    #[test]
    fn first_line_never_seeds_a_comment() {
        let source = "#!/usr/bin/env python3\nx = 1\n";
        assert!(extract(source).is_empty());
        // Even a genuine comment on line 0 is skipped.
        assert!(extract("# a real comment up top\nx = 1\n").is_empty());
    }

    #[test]
    fn reserved_words_reject_the_whole_comment() {
        let source = "import os\nx = 1  # pragma: no cover\ny = 2  # pylint: disable=C0103\n";
        assert!(extract(source).is_empty());
    }

    #[test]
    fn disabled_code_is_rejected() {
        let source = "import os\n# x = 1 + 2\n";
        assert!(extract(source).is_empty());
    }

    #[test]
    fn symbol_noise_is_kept_even_when_oracle_accepts_it() {
        // The disabled-code filter only fires on alphabetic text.
        let source = "import os\n# !!!\n";
        let result = extract_comments(source, &ExtractOptions::default(), &Always(true));
        assert_eq!(result, vec!["!!!"]);
    }

    #[test]
    fn single_word_policy() {
        let source = "import os\nx = 1  # TODO\n";
        assert_eq!(extract(source), vec!["TODO"]);

        let options = ExtractOptions {
            allow_single_word: false,
            ..ExtractOptions::default()
        };
        assert!(extract_comments(source, &options, &PythonSyntax).is_empty());
    }

    #[test]
    fn trailing_periods_collapse_to_one() {
        let source = "import os\nx = 1  # ends with dots...\n";
        assert_eq!(extract(source), vec!["ends with dots."]);
    }

    #[test]
    fn run_after_end_of_file_terminates_cleanly() {
        // Seed on the final line: there is no continuation to look at.
        let source = "import os\nx = 1  # last line note";
        assert_eq!(extract(source), vec!["last line note."]);
    }

    #[test]
    fn extraction_is_idempotent() {
        let source = "import os\nx = 1  # part one\n       # part two\n# standalone remark here\n";
        let first = extract(source);
        let second = extract(source);
        assert_eq!(first, second);
    }
}
