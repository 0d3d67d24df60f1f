//! Syntax validity oracle
//!
//! The merger needs a yes/no answer to "does this text parse as Python?" to
//! recognize commented-out code. The check is exposed as a trait so tests can
//! substitute a canned oracle, with [`PythonSyntax`] as the production
//! implementation on top of `rustpython-parser`.

use rustpython_parser::{ast, Parse};

/// Reports whether a text snippet is syntactically valid code.
///
/// A failed parse is the normal, expected outcome for genuine prose and is
/// never an error.
pub trait SyntaxOracle {
    fn is_valid_code(&self, text: &str) -> bool;
}

/// Validity oracle backed by the `rustpython-parser` grammar.
#[derive(Debug, Default, Clone, Copy)]
pub struct PythonSyntax;

impl SyntaxOracle for PythonSyntax {
    fn is_valid_code(&self, text: &str) -> bool {
        let Ok(suite) = ast::Suite::parse(text, "<snippet>") else {
            return false;
        };
        !is_lone_identifier(&suite)
    }
}

/// A single bare-name expression statement (`TODO`, `FIXME`) technically
/// parses, but carries no code structure. Treating it as code would reject
/// every one-word comment, so the oracle reports it as prose.
fn is_lone_identifier(suite: &[ast::Stmt]) -> bool {
    match suite {
        [ast::Stmt::Expr(expr)] => matches!(expr.value.as_ref(), ast::Expr::Name(_)),
        _ => false,
    }
}
