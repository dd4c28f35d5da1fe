#![forbid(unsafe_code)]
//! Shared syntax frontend for LOLCODE: lexer, parser, AST, diagnostics.
//!
//! This crate is dependency-light and intended for reuse across the CLI and
//! future interactive tooling.
//!
//! ## Notes
//! - This crate is intentionally "syntax-only": it does not do symbol
//!   resolution or any evaluation. The parser answers exactly one question -
//!   is this program syntactically valid, and what is its tree.
//! - Vocabulary identity (keywords/operators/type names) comes from
//!   `kthx_core::lang` registries.
//! - Neither the lexer nor the parser prints anything as a side effect of
//!   normal operation; per-token tracing is emitted at `trace` level and is
//!   opt-in via the subscriber's filter.
//!
//! ## Examples
//! ```rust
//! use kthx_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("HAI KTHXBYE").unwrap();
//! let program = parser::parse(&tokens).unwrap();
//! assert!(program.body.is_empty());
//! ```
//!
//! ## See also
//! - `kthx_core::lang` for registry-backed language vocabulary.

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;
