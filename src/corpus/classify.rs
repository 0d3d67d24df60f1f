//! Line classification: comment marker vs. hash-in-string
//!
//! Given a single line of Python source, decide whether the first `#` starts
//! a comment and return the text after it. This is deliberately not a lexer:
//! it only looks at whether quote characters appear before and after the
//! marker, and recurses on the ambiguous case where both sides are quoted.
//! Triple-quoted and escape-heavy strings can fool it; the merger's validity
//! check downstream catches most of the fallout.

/// The character that starts a single-line comment in Python source.
pub const MARKER: char = '#';

fn has_quote(text: &str) -> bool {
    text.contains('"') || text.contains('\'')
}

/// Extract the comment text from a line, or `None` when the line has no
/// comment.
///
/// Returns the trimmed text after the first `#`. A marker at column 0 returns
/// the remainder even when it trims to empty; callers treat an empty result
/// as no comment. Cases, in order:
///
/// - no `#` in the line: `None`
/// - `#` at line start: the trimmed remainder, as-is
/// - nothing after the `#`: `None`
/// - no quote before the `#`: the marker cannot sit inside a string, so the
///   remainder is a comment
/// - quotes on both sides: ambiguous, so re-classify the remainder as if it
///   were a fresh line (each recursion drops at least the marker, so this
///   terminates)
/// - quote only before: the `#` likely closed off a string construct; keep
///   the remainder only if it contains a letter
pub fn classify(line: &str) -> Option<String> {
    let (before, after) = line.split_once(MARKER)?;
    let after = after.trim();
    if before.is_empty() {
        return Some(after.to_string());
    }
    if after.is_empty() {
        return None;
    }

    if !has_quote(before) {
        return Some(after.to_string());
    }
    if has_quote(after) {
        // Either the hash was inside a string that closes later, or the
        // string closed before the hash. Try again on the remainder.
        return classify(after);
    }

    if after.chars().any(char::is_alphabetic) {
        Some(after.to_string())
    } else {
        None
    }
}
