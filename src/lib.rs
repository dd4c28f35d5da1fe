#![forbid(unsafe_code)]
//! kthx: a LOLCODE front end
//!
//! This crate ties the front end together: the CLI, and a post-parse symbol
//! resolution pass over the AST. The algorithmic core (lexer, parser, AST,
//! diagnostics) lives in `kthx_syntax`; language vocabulary lives in
//! `kthx_core`.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` /
//!   `map_err`. The `cli` module enforces `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//! - **True invariants**: If a panic represents a bug in this crate (logic
//!   error), use `.expect("reason")` with a clear explanation.

pub mod cli;
pub mod symbols;

pub use kthx_syntax::ast;
pub use kthx_syntax::diagnostics;
pub use kthx_syntax::lexer;
pub use kthx_syntax::parser;

pub use symbols::{SemanticError, Symbol, SymbolTable};
