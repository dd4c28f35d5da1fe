//! Token types for the LOLCODE lexer.
//!
//! The lexer uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for structural keywords (`HAI`, `I HAS A`, ...)
//! - `Operator(OperatorId)` for prefix operators (`SUM OF`, `NOT`, ...)
//! - `TypeName(TypeId)` for builtin type names (`NUMBR`, ...)
//!
//! ## Notes
//! - ID-bearing tokens avoid stringly-typed checks in the parser.
//! - Literal tokens carry their decoded payload; `text` always preserves the
//!   exact matched lexeme, so concatenating token texts with the skipped
//!   whitespace/comment spans reconstructs the source.
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.

use crate::ast::Span;
use kthx_core::lang::keywords::KeywordId;
use kthx_core::lang::operators::OperatorId;
use kthx_core::lang::types::TypeId;

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the lexer.
///
/// Comments, newlines, and intra-line whitespace are consumed and discarded
/// by the lexer; they never appear here. End-of-stream is the synthetic
/// [`TokenKind::Eof`] pseudo-token rather than an out-of-bounds condition.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // ========== Vocabulary (ID-based) ==========
    Keyword(KeywordId),
    Operator(OperatorId),
    TypeName(TypeId),

    // ========== Identifiers and literals ==========
    Ident(String),
    /// Integer literal.
    Numbr(i64),
    /// Float literal.
    Numbar(f64),
    /// String literal (decoded, without the quotes).
    Yarn(String),
    /// Boolean literal (`WIN` / `FAIL`).
    Troof(bool),

    // ========== Special ==========
    /// `+`: print-operand separator.
    Plus,
    /// End of file.
    Eof,
}

/// A token: kind, exact matched lexeme, byte span, and source position.
///
/// `line` is 1-based; `column` is the 0-based byte offset from the start of
/// the token's line. Tokens are produced once by the lexer and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
    pub line: u32,
    pub column: u32,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span, line: u32, column: u32) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
            line,
            column,
        }
    }
}
