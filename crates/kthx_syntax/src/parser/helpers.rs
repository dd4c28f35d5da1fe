/// Token-stream helpers.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Peeking/consuming tokens (`peek`, `peek_next`, `advance`)
/// - Matching / expecting keywords, identifiers, and type names
/// - Error construction anchored at the cursor
///
/// Most functions in this file are internal (`fn`) and are documented
/// primarily to aid maintenance and onboarding.
impl<'a> Parser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Return `true` if the current token is [`TokenKind::Eof`].
    fn is_at_end(&self) -> bool {
        matches!(self.peek().kind, TokenKind::Eof)
    }

    /// Return the current token without consuming it.
    fn peek(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    /// Return the token after the current token without consuming it.
    fn peek_next(&self) -> &Token {
        if self.pos + 1 < self.tokens.len() {
            &self.tokens[self.pos + 1]
        } else {
            &self.tokens[self.tokens.len() - 1]
        }
    }

    /// Advance to the next token and return the token we just consumed.
    ///
    /// Never advances past `Eof`, so the cursor stays in bounds.
    fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.pos += 1;
        }
        &self.tokens[self.pos - 1]
    }

    /// Return `true` if the current token is the given keyword.
    fn check_keyword(&self, id: KeywordId) -> bool {
        self.peek().kind.is_keyword(id)
    }

    /// If the current token is the given keyword, consume it and return `true`.
    fn match_keyword(&mut self, id: KeywordId) -> bool {
        if self.check_keyword(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// If the current token is `+`, consume it and return `true`.
    fn match_plus(&mut self) -> bool {
        if matches!(self.peek().kind, TokenKind::Plus) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect_keyword(&mut self, id: KeywordId) -> Result<&Token, FrontendError> {
        if self.check_keyword(id) {
            Ok(self.advance())
        } else {
            Err(self.syntax_error(format!("keyword '{}'", keywords::as_str(id))))
        }
    }

    /// Consume an identifier and return its name.
    fn identifier(&mut self) -> Result<Ident, FrontendError> {
        match &self.peek().kind {
            TokenKind::Ident(name) => {
                let name = name.clone();
                self.advance();
                Ok(name)
            }
            _ => Err(self.syntax_error("an identifier")),
        }
    }

    /// Consume a builtin type name (`NUMBR`, `YARN`, ...).
    fn type_name(&mut self) -> Result<TypeId, FrontendError> {
        match self.peek().kind {
            TokenKind::TypeName(id) => {
                self.advance();
                Ok(id)
            }
            _ => Err(self.syntax_error("a type name")),
        }
    }

    /// Byte span of the current token.
    fn current_span(&self) -> Span {
        self.peek().span
    }

    /// Byte span of the most recently consumed token.
    fn prev_span(&self) -> Span {
        self.tokens[self.pos.saturating_sub(1)].span
    }

    /// Build a syntax error at the cursor: `expected ..., found <current>`.
    fn syntax_error(&self, expected: impl Into<String>) -> FrontendError {
        let tok = self.peek();
        FrontendError::syntax(expected, tok.describe(), tok.line, tok.column, tok.span)
    }

    /// Build the explicit nesting-depth error at the cursor.
    fn resource_exhausted_here(&self) -> FrontendError {
        let tok = self.peek();
        FrontendError::resource_exhausted(tok.line, tok.column, tok.span)
    }
}
