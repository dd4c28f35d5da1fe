//! Recursive-descent parser for LOLCODE.
//!
//! Converts a token stream into an AST. The parser is a pure syntax checker:
//! it validates the token sequence against the grammar and builds the tree,
//! but performs no symbol resolution and no evaluation. The first error
//! aborts the parse: there is no recovery or multi-error reporting.
//!
//! ## Examples
//!
//! ```rust
//! use kthx_syntax::{lexer, parser};
//!
//! let source = "HAI\nI HAS A kitteh ITZ 3\nVISIBLE kitteh\nKTHXBYE";
//! let tokens = lexer::lex(source).unwrap();
//! let program = parser::parse(&tokens).unwrap();
//! assert_eq!(program.body.len(), 2);
//! ```

use crate::ast::*;
use crate::diagnostics::FrontendError;
use crate::lexer::{Token, TokenKind};
use kthx_core::lang::keywords::{self, KeywordId};
use kthx_core::lang::operators::{self, Arity, OperatorId};
use kthx_core::lang::types::TypeId;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
