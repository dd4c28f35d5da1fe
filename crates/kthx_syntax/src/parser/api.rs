/// Parse a token stream into an AST [`Program`].
///
/// This is the main public entrypoint for parsing.
///
/// ## Parameters
/// - `tokens`: Token stream produced by `kthx_syntax::lexer` (always ends
///   with an `Eof` pseudo-token).
///
/// ## Errors
/// Returns the first [`FrontendError`] if parsing fails; no partial tree is
/// returned.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(tokens: &[Token]) -> Result<Program, FrontendError> {
    if tokens.is_empty() {
        // The lexer always emits Eof; an empty slice means the caller
        // bypassed it. Report the missing program opener at the origin.
        return Err(FrontendError::syntax(
            format!("keyword '{}'", keywords::as_str(KeywordId::Hai)),
            "end of input",
            1,
            0,
            Span::new(0, 0),
        ));
    }
    Parser::new(tokens).parse()
}
