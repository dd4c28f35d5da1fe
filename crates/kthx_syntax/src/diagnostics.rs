//! Diagnostics for the LOLCODE frontend.
//!
//! One flat error type covers the whole front end: lexical errors, syntax
//! errors, and the explicit resource-exhaustion condition for pathologically
//! nested expressions. Every error is terminal for the call that produced
//! it: there is no recovery and no partial result.
//!
//! ## Notes
//! - `line` is 1-based; `column` is the 0-based byte offset from the start
//!   of the offending lexeme's line. Both are computed by the lexer and
//!   carried on tokens, so the parser never re-derives positions.
//! - The byte `span` exists for rendering: the CLI attaches the source text
//!   and lets miette draw the label.

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::ast::Span;

/// Discriminates the error families of the front end.
///
/// Loop-label mismatches and non-literal switch cases are plain `Syntax`
/// errors with descriptive expected/found pairs; the taxonomy stays flat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No lexical rule matched at the scan position.
    Lexical,
    /// The parser expected one token kind and found another.
    Syntax,
    /// Expression nesting exceeded the supported depth.
    ResourceExhausted,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Lexical => write!(f, "lexical error"),
            ErrorKind::Syntax => write!(f, "syntax error"),
            ErrorKind::ResourceExhausted => write!(f, "resource exhausted"),
        }
    }
}

/// A front-end error with location information.
#[derive(Debug, Clone, Error, Diagnostic)]
#[error("{kind} at line {line}, column {column}: {message}")]
#[diagnostic(code(kthx::frontend))]
pub struct FrontendError {
    pub message: String,
    pub kind: ErrorKind,
    /// What was expected at the cursor, when the parser knows (e.g.
    /// `keyword 'OIC'`, `a literal case value`).
    pub expected: Option<String>,
    /// Description of what was actually found (e.g. `end of input`).
    pub found: Option<String>,
    /// 1-based line of the offending lexeme.
    pub line: u32,
    /// 0-based column of the offending lexeme.
    pub column: u32,
    #[label("here")]
    pub span: SourceSpan,
}

impl FrontendError {
    /// A lexical error with a pre-formatted message.
    pub fn lexical(message: impl Into<String>, line: u32, column: u32, span: Span) -> Self {
        Self {
            message: message.into(),
            kind: ErrorKind::Lexical,
            expected: None,
            found: None,
            line,
            column,
            span: to_source_span(span),
        }
    }

    /// The classic lexical error: a character no rule matches.
    pub fn unexpected_char(c: char, line: u32, column: u32, span: Span) -> Self {
        Self::lexical(format!("unexpected character {:?}", c), line, column, span)
    }

    /// A syntax error from an expected/found pair.
    pub fn syntax(
        expected: impl Into<String>,
        found: impl Into<String>,
        line: u32,
        column: u32,
        span: Span,
    ) -> Self {
        let expected = expected.into();
        let found = found.into();
        Self {
            message: format!("expected {}, found {}", expected, found),
            kind: ErrorKind::Syntax,
            expected: Some(expected),
            found: Some(found),
            line,
            column,
            span: to_source_span(span),
        }
    }

    /// The explicit nesting-depth condition (instead of a stack overflow).
    pub fn resource_exhausted(line: u32, column: u32, span: Span) -> Self {
        Self {
            message: "expression nesting exceeds the supported depth".to_string(),
            kind: ErrorKind::ResourceExhausted,
            expected: None,
            found: None,
            line,
            column,
            span: to_source_span(span),
        }
    }
}

fn to_source_span(span: Span) -> SourceSpan {
    (span.start, span.len()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syntax_error_formats_expected_and_found() {
        let err = FrontendError::syntax("keyword 'OIC'", "end of input", 3, 0, Span::new(10, 10));
        assert_eq!(err.kind, ErrorKind::Syntax);
        assert_eq!(
            err.to_string(),
            "syntax error at line 3, column 0: expected keyword 'OIC', found end of input"
        );
    }

    #[test]
    fn lexical_error_names_the_character() {
        let err = FrontendError::unexpected_char('#', 1, 4, Span::new(4, 5));
        assert_eq!(err.kind, ErrorKind::Lexical);
        assert!(err.to_string().contains("unexpected character '#'"));
    }
}
