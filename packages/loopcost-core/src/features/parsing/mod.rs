//! Parsing - the external parser collaborator
//!
//! Wraps tree-sitter-python and lowers its CST into the crate's tagged-union
//! AST (`shared::ast`). This is the only stage that can fail: malformed
//! source short-circuits with a parse error before any analysis runs.

pub mod infrastructure;

pub use infrastructure::PythonParser;
