//! Docstring extraction via a full Python parse
//!
//! Unlike the marker heuristics, docstrings are pulled off a real declaration
//! tree: a docstring is the leading string-constant expression statement of a
//! module, function (sync or async) or class body. The walk is depth-first
//! over declaration nesting, module docstring first, descending through
//! compound statements so that conditionally defined functions are still
//! visited.

use rustpython_parser::{ast, Parse};

use crate::corpus::error::CorpusError;

/// Extract every docstring in the file, internal newlines collapsed to
/// spaces. A parse failure propagates; callers only invoke this on files
/// expected to be valid Python.
pub fn extract_docstrings(source: &str) -> Result<Vec<String>, CorpusError> {
    let suite = ast::Suite::parse(source, "<corpus>")?;
    let mut docs = Vec::new();
    if let Some(doc) = body_docstring(&suite) {
        docs.push(doc);
    }
    walk_suite(&suite, &mut docs);
    Ok(docs)
}

/// The docstring of a declaration body, per Python convention.
fn body_docstring(body: &[ast::Stmt]) -> Option<String> {
    let ast::Stmt::Expr(expr) = body.first()? else {
        return None;
    };
    let ast::Expr::Constant(constant) = expr.value.as_ref() else {
        return None;
    };
    let ast::Constant::Str(text) = &constant.value else {
        return None;
    };
    Some(text.replace('\n', " "))
}

fn walk_suite(body: &[ast::Stmt], docs: &mut Vec<String>) {
    for stmt in body {
        walk_stmt(stmt, docs);
    }
}

fn walk_stmt(stmt: &ast::Stmt, docs: &mut Vec<String>) {
    match stmt {
        ast::Stmt::FunctionDef(def) => {
            docs.extend(body_docstring(&def.body));
            walk_suite(&def.body, docs);
        }
        ast::Stmt::AsyncFunctionDef(def) => {
            docs.extend(body_docstring(&def.body));
            walk_suite(&def.body, docs);
        }
        ast::Stmt::ClassDef(def) => {
            docs.extend(body_docstring(&def.body));
            walk_suite(&def.body, docs);
        }
        // Compound statements carry no docstring themselves, but may hide
        // nested declarations.
        ast::Stmt::If(inner) => {
            walk_suite(&inner.body, docs);
            walk_suite(&inner.orelse, docs);
        }
        ast::Stmt::While(inner) => {
            walk_suite(&inner.body, docs);
            walk_suite(&inner.orelse, docs);
        }
        ast::Stmt::For(inner) => {
            walk_suite(&inner.body, docs);
            walk_suite(&inner.orelse, docs);
        }
        ast::Stmt::AsyncFor(inner) => {
            walk_suite(&inner.body, docs);
            walk_suite(&inner.orelse, docs);
        }
        ast::Stmt::With(inner) => walk_suite(&inner.body, docs),
        ast::Stmt::AsyncWith(inner) => walk_suite(&inner.body, docs),
        ast::Stmt::Try(inner) => {
            walk_suite(&inner.body, docs);
            for handler in &inner.handlers {
                let ast::ExceptHandler::ExceptHandler(handler) = handler;
                walk_suite(&handler.body, docs);
            }
            walk_suite(&inner.orelse, docs);
            walk_suite(&inner.finalbody, docs);
        }
        ast::Stmt::TryStar(inner) => {
            walk_suite(&inner.body, docs);
            for handler in &inner.handlers {
                let ast::ExceptHandler::ExceptHandler(handler) = handler;
                walk_suite(&handler.body, docs);
            }
            walk_suite(&inner.orelse, docs);
            walk_suite(&inner.finalbody, docs);
        }
        ast::Stmt::Match(inner) => {
            for case in &inner.cases {
                walk_suite(&case.body, docs);
            }
        }
        _ => {}
    }
}
