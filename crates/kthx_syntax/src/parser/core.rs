/// Parser core types and entrypoint.
///
/// This chunk defines the [`Parser`] type and its top-level `parse()`
/// entrypoint, plus the expression-nesting limit shared with the expression
/// chunk.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods
///   in a single module while avoiding a single “god file”.
/// - Operand parsing recurses, so nesting depth is bounded by the call stack.
///   Past `MAX_EXPR_DEPTH` the parser reports an explicit resource-exhaustion
///   error instead of letting the runtime abort on stack overflow.
const MAX_EXPR_DEPTH: usize = 1024;

/// Parser state.
///
/// ## Notes
/// - A single forward cursor over a borrowed token slice; the index is
///   monotonically non-decreasing within a parse. End-of-stream is the
///   lexer's `Eof` pseudo-token, never an out-of-bounds access.
/// - The parser owns its cursor exclusively for the duration of one parse;
///   no state survives between calls.
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    expr_depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser for a token stream.
    ///
    /// ## Parameters
    /// - `tokens`: Token stream produced by `kthx_syntax::lexer` (ends with
    ///   `Eof`).
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            expr_depth: 0,
        }
    }

    /// Parse the entire token stream into a [`Program`].
    ///
    /// Grammar: `HAI` → optional `WAZZUP`..`BUHBYE` declaration block →
    /// statement sequence → `KTHXBYE` → end of stream. Tokens after
    /// `KTHXBYE` are a distinct error rather than being silently ignored.
    ///
    /// ## Errors
    /// Returns the first [`FrontendError`] encountered; the parse does not
    /// attempt recovery.
    pub fn parse(mut self) -> Result<Program, FrontendError> {
        self.expect_keyword(KeywordId::Hai)?;

        let declarations = if self.check_keyword(KeywordId::Wazzup) {
            self.declaration_block()?
        } else {
            Vec::new()
        };

        let body = self.statements(&[])?;
        self.expect_keyword(KeywordId::Kthxbye)?;

        if !self.is_at_end() {
            return Err(self.syntax_error("end of input after KTHXBYE"));
        }

        Ok(Program { declarations, body })
    }
}
