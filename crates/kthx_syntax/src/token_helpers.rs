//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These helpers exist to reduce repetitive `matches!(...)` at call sites and
//! to keep diagnostic wording for tokens in one place.

use crate::lexer::{Token, TokenKind};
use kthx_core::lang::keywords::{self, KeywordId};
use kthx_core::lang::operators::{self, OperatorId};
use kthx_core::lang::types::{self, TypeId};

impl TokenKind {
    /// Return the keyword id, if this is a keyword token.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        match self {
            TokenKind::Keyword(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given keyword.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == id)
    }

    /// Return the operator id, if this is an operator token.
    pub fn operator_id(&self) -> Option<OperatorId> {
        match self {
            TokenKind::Operator(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given operator.
    pub fn is_operator(&self, id: OperatorId) -> bool {
        matches!(self, TokenKind::Operator(o) if *o == id)
    }

    /// Return the type id, if this is a type-name token.
    pub fn type_id(&self) -> Option<TypeId> {
        match self {
            TokenKind::TypeName(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this token is a literal (`NUMBR`/`NUMBAR`/`YARN`/`TROOF`).
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::Numbr(_) | TokenKind::Numbar(_) | TokenKind::Yarn(_) | TokenKind::Troof(_)
        )
    }

    /// Human-readable description of this token kind for diagnostics.
    ///
    /// This is the wording used in every expected/found pair, so tests and
    /// tooling can rely on it being stable.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Keyword(id) => format!("keyword '{}'", keywords::as_str(*id)),
            TokenKind::Operator(id) => format!("operator '{}'", operators::as_str(*id)),
            TokenKind::TypeName(id) => format!("type '{}'", types::as_str(*id)),
            TokenKind::Ident(name) => format!("identifier '{}'", name),
            TokenKind::Numbr(_) => "NUMBR literal".to_string(),
            TokenKind::Numbar(_) => "NUMBAR literal".to_string(),
            TokenKind::Yarn(_) => "YARN literal".to_string(),
            TokenKind::Troof(_) => "TROOF literal".to_string(),
            TokenKind::Plus => "'+'".to_string(),
            TokenKind::Eof => "end of input".to_string(),
        }
    }
}

impl Token {
    /// Convenience wrapper for `self.kind.keyword_id()`.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        self.kind.keyword_id()
    }

    /// Convenience wrapper for `self.kind.operator_id()`.
    pub fn operator_id(&self) -> Option<OperatorId> {
        self.kind.operator_id()
    }

    /// Convenience wrapper for `self.kind.describe()`.
    pub fn describe(&self) -> String {
        self.kind.describe()
    }
}
