//! Property-based tests for the line classifier
//!
//! These pin the classifier's unconditional contracts: no marker means no
//! comment, a line-leading marker always surfaces the trimmed remainder, an
//! unquoted prefix can never hide the marker inside a string, and arbitrary
//! input never panics (the ambiguous-quote case recurses on a strictly
//! shorter remainder).

use proptest::prelude::*;
use pycorpus::corpus::classify;

proptest! {
    #[test]
    fn lines_without_marker_are_absent(line in "[^#]*") {
        prop_assert_eq!(classify(&line), None);
    }

    #[test]
    fn marker_at_line_start_returns_trimmed_remainder(after in "[a-z !?.]*") {
        let line = format!("#{}", after);
        prop_assert_eq!(classify(&line), Some(after.trim().to_string()));
    }

    #[test]
    fn unquoted_prefix_always_returns_remainder(
        before in "[a-z ()=.]+",
        after in "[a-z !?.]*",
    ) {
        let line = format!("{}#{}", before, after);
        let trimmed = after.trim();
        let expected = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        prop_assert_eq!(classify(&line), expected);
    }

    #[test]
    fn classification_never_panics(line in ".*") {
        let _ = classify(&line);
    }
}
