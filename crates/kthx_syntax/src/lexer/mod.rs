//! Lexer for LOLCODE source text.
//!
//! Handles tokenization including:
//! - Multi-word keyword phrases (`I HAS A`, `IS NOW A`, `IM OUTTA YR`, ...)
//! - Prefix operator phrases (`SUM OF`, `BOTH SAEM`, ...)
//! - Literals (`NUMBR`, `NUMBAR`, `YARN`, `TROOF`) and type names
//! - Comments (`BTW ...` to end of line, `OBTW ... TLDR` spanning lines)
//!
//! ## Matching discipline
//!
//! Rules are tried in a fixed priority order at each scan position and the
//! first match wins: comments, then keyword/operator phrases (longest phrase
//! first among those sharing a first word, so `IS NOW A` can never be split
//! into three tokens), then literal spellings, then identifiers. Every fixed
//! spelling requires a word boundary on both sides: `HAIr` is one
//! identifier, never `HAI` plus trailing text. A character that no rule
//! matches aborts the scan with a lexical error.
//!
//! Newlines and intra-line whitespace advance position counters and emit no
//! tokens. Comment spans are discarded, but newlines inside an
//! `OBTW ... TLDR` span still advance the line counter so every later
//! diagnostic reports the right line.
//!
//! ## Module structure
//!
//! - `tokens` - Token types (TokenKind, Token)

pub mod tokens;

pub use tokens::{Token, TokenKind};

use crate::ast::Span;
use crate::diagnostics::FrontendError;
use kthx_core::lang::keywords::{self, KeywordId};
use kthx_core::lang::operators::{self, OperatorId};
use kthx_core::lang::types;

// ============================================================================
// LEXER STATE
// ============================================================================

/// Lexer for LOLCODE source text.
///
/// Converts source text into a stream of tokens ending with a synthetic
/// [`TokenKind::Eof`]. All position state (`line`, `line_start`) is local to
/// one lexer value; repeated calls can never interfere with each other.
pub struct Lexer<'a> {
    source: &'a str,
    pos: usize,
    /// 1-based line of the current scan position.
    line: u32,
    /// Byte offset of the start of the current line; columns are
    /// `position - line_start`.
    line_start: usize,
    tokens: Vec<Token>,
}

/// A keyword or operator phrase candidate during matching.
#[derive(Debug, Clone, Copy)]
enum PhraseKind {
    Keyword(KeywordId),
    Operator(OperatorId),
}

#[derive(Debug, Clone, Copy)]
struct Phrase {
    words: &'static [&'static str],
    kind: PhraseKind,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            line: 1,
            line_start: 0,
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire source text.
    ///
    /// Returns the token stream on success (always ending with `Eof`), or the
    /// first lexical error. No partial stream is returned on error.
    pub fn tokenize(mut self) -> Result<Vec<Token>, FrontendError> {
        while self.pos < self.source.len() {
            self.scan_token()?;
        }

        let at = self.source.len();
        self.tokens.push(Token::new(
            TokenKind::Eof,
            "",
            Span::new(at, at),
            self.line,
            self.column_at(at),
        ));

        tracing::debug!(
            token_count = self.tokens.len(),
            final_line = self.line,
            "tokenized source"
        );
        Ok(self.tokens)
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn peek_char(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn peek_byte(&self) -> Option<u8> {
        self.source.as_bytes().get(self.pos).copied()
    }

    fn byte_at(&self, pos: usize) -> Option<u8> {
        self.source.as_bytes().get(pos).copied()
    }

    fn column_at(&self, pos: usize) -> u32 {
        (pos - self.line_start) as u32
    }

    /// Consume a newline and reset the column origin.
    fn consume_newline(&mut self) {
        self.pos += 1;
        self.line += 1;
        self.line_start = self.pos;
    }

    /// Read a maximal identifier-shaped word (`[A-Za-z][A-Za-z0-9_]*`) at the
    /// current position. Returns the empty string if the position does not
    /// start a word.
    fn read_word(&mut self) -> &'a str {
        let start = self.pos;
        if self.peek_byte().is_some_and(|b| b.is_ascii_alphabetic()) {
            self.pos += 1;
            while self
                .peek_byte()
                .is_some_and(|b| b.is_ascii_alphanumeric() || b == b'_')
            {
                self.pos += 1;
            }
        }
        &self.source[start..self.pos]
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) -> Result<(), FrontendError> {
        let Some(c) = self.peek_char() else {
            return Ok(());
        };

        match c {
            // Newline: advances the line counter, emits nothing.
            '\n' => self.consume_newline(),

            // Intra-line whitespace: skipped.
            ' ' | '\t' | '\r' => self.pos += 1,

            // String literal.
            '"' => self.scan_yarn()?,

            // Print-operand separator.
            '+' => {
                let start = self.pos;
                let (line, column) = (self.line, self.column_at(start));
                self.pos += 1;
                self.push_token(TokenKind::Plus, start, line, column);
            }

            // Signed number: `-` only starts a token when a digit follows.
            '-' if self.byte_at(self.pos + 1).is_some_and(|b| b.is_ascii_digit()) => {
                self.scan_number()?
            }

            '0'..='9' => self.scan_number()?,

            c if c.is_ascii_alphabetic() => self.scan_word()?,

            // Catch-all: no rule matched.
            other => {
                return Err(FrontendError::unexpected_char(
                    other,
                    self.line,
                    self.column_at(self.pos),
                    Span::new(self.pos, self.pos + other.len_utf8()),
                ));
            }
        }
        Ok(())
    }

    // ========================================================================
    // Words: comments, keyword/operator phrases, literal spellings, idents
    // ========================================================================

    fn scan_word(&mut self) -> Result<(), FrontendError> {
        let start = self.pos;
        let (line, column) = (self.line, self.column_at(start));
        let first = self.read_word();

        // Comments out-rank every keyword rule.
        if first == "OBTW" {
            return self.skip_multiline_comment(start, line, column);
        }
        if first == "BTW" {
            self.skip_line_comment();
            return Ok(());
        }

        // Keyword/operator phrases, longest first among candidates sharing
        // this first word. A failed phrase match leaves the cursor at the end
        // of the first word and falls through to the later rules.
        for phrase in phrase_candidates(first) {
            if let Some(end) = self.match_phrase(start, phrase.words) {
                self.pos = end;
                let kind = match phrase.kind {
                    PhraseKind::Keyword(id) => TokenKind::Keyword(id),
                    PhraseKind::Operator(id) => TokenKind::Operator(id),
                };
                self.push_token(kind, start, line, column);
                return Ok(());
            }
        }

        // Literal spellings, then identifier.
        let kind = if let Some(value) = types::troof_value(first) {
            TokenKind::Troof(value)
        } else if let Some(id) = types::from_str(first) {
            TokenKind::TypeName(id)
        } else {
            TokenKind::Ident(first.to_string())
        };
        self.push_token(kind, start, line, column);
        Ok(())
    }

    /// Try to match a whole phrase starting at `start`. Pure lookahead: on
    /// failure the lexer state is untouched and the caller falls back to the
    /// next rule.
    ///
    /// Phrase words are separated by spaces/tabs on a single line. A `?`
    /// suffix on a phrase word (`O RLY?`, `WTF?`) must follow the word
    /// immediately in the source.
    fn match_phrase(&self, start: usize, words: &[&str]) -> Option<usize> {
        let mut pos = start;
        for (i, word) in words.iter().enumerate() {
            if i > 0 {
                let ws_start = pos;
                while matches!(self.byte_at(pos), Some(b' ') | Some(b'\t')) {
                    pos += 1;
                }
                if pos == ws_start {
                    return None;
                }
            }

            let (body, wants_question) = match word.strip_suffix('?') {
                Some(body) => (body, true),
                None => (*word, false),
            };

            let scanned = word_at(self.source, pos);
            if scanned != body {
                return None;
            }
            pos += scanned.len();

            if wants_question {
                if self.byte_at(pos) != Some(b'?') {
                    return None;
                }
                pos += 1;
            }
        }
        Some(pos)
    }

    // ========================================================================
    // Comments
    // ========================================================================

    /// `BTW` to (but not past) the end of the line.
    fn skip_line_comment(&mut self) {
        while let Some(b) = self.peek_byte() {
            if b == b'\n' {
                break;
            }
            self.pos += self.char_len();
        }
    }

    /// `OBTW ... TLDR`, non-greedy: stops at the **first** whole-word `TLDR`.
    /// Interior newlines advance the line counter.
    fn skip_multiline_comment(
        &mut self,
        start: usize,
        line: u32,
        column: u32,
    ) -> Result<(), FrontendError> {
        loop {
            match self.peek_char() {
                None => {
                    return Err(FrontendError::lexical(
                        "unterminated multi-line comment (missing TLDR)",
                        line,
                        column,
                        Span::new(start, self.pos),
                    ));
                }
                Some('\n') => self.consume_newline(),
                Some(c) if c.is_ascii_alphabetic() => {
                    let word = self.read_word();
                    if word == "TLDR" {
                        return Ok(());
                    }
                }
                Some(c) => self.pos += c.len_utf8(),
            }
        }
    }

    // ========================================================================
    // Literals
    // ========================================================================

    /// `"..."`: single line, no escape sequences.
    fn scan_yarn(&mut self) -> Result<(), FrontendError> {
        let start = self.pos;
        let (line, column) = (self.line, self.column_at(start));
        self.pos += 1; // opening quote

        loop {
            match self.peek_byte() {
                None | Some(b'\n') => {
                    return Err(FrontendError::lexical(
                        "unterminated YARN literal",
                        line,
                        column,
                        Span::new(start, self.pos),
                    ));
                }
                Some(b'"') => {
                    self.pos += 1;
                    break;
                }
                Some(_) => self.pos += self.char_len(),
            }
        }

        let value = self.source[start + 1..self.pos - 1].to_string();
        self.push_token(TokenKind::Yarn(value), start, line, column);
        Ok(())
    }

    /// Signed integer or float. The float rule (`-?\d+\.\d+`) is tried
    /// first: a `.` only joins the token when a digit follows, so `-3.14` is
    /// one NUMBAR and `3.` is a NUMBR followed by a stray `.`.
    fn scan_number(&mut self) -> Result<(), FrontendError> {
        let start = self.pos;
        let (line, column) = (self.line, self.column_at(start));

        if self.peek_byte() == Some(b'-') {
            self.pos += 1;
        }
        self.consume_digits();

        let is_float = self.peek_byte() == Some(b'.')
            && self.byte_at(self.pos + 1).is_some_and(|b| b.is_ascii_digit());

        if is_float {
            self.pos += 1;
            self.consume_digits();
            let text = &self.source[start..self.pos];
            let value: f64 = text.parse().map_err(|_| {
                FrontendError::lexical(
                    format!("malformed NUMBAR literal '{}'", text),
                    line,
                    column,
                    Span::new(start, self.pos),
                )
            })?;
            self.push_token(TokenKind::Numbar(value), start, line, column);
        } else {
            let text = &self.source[start..self.pos];
            let value: i64 = text.parse().map_err(|_| {
                FrontendError::lexical(
                    format!("NUMBR literal '{}' out of range", text),
                    line,
                    column,
                    Span::new(start, self.pos),
                )
            })?;
            self.push_token(TokenKind::Numbr(value), start, line, column);
        }
        Ok(())
    }

    fn consume_digits(&mut self) {
        while self.peek_byte().is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }
    }

    // ========================================================================
    // Token emission
    // ========================================================================

    fn push_token(&mut self, kind: TokenKind, start: usize, line: u32, column: u32) {
        let text = &self.source[start..self.pos];
        tracing::trace!(kind = ?kind, lexeme = text, line, column, "token");
        self.tokens
            .push(Token::new(kind, text, Span::new(start, self.pos), line, column));
    }

    fn char_len(&self) -> usize {
        self.peek_char().map_or(1, |c| c.len_utf8())
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Keyword/operator phrases whose first word matches `first`, longest phrase
/// first so that `IS NOW A` out-ranks any shorter overlap.
fn phrase_candidates(first: &str) -> Vec<Phrase> {
    let mut out: Vec<Phrase> = keywords::KEYWORDS
        .iter()
        .filter(|k| first_word_fits(k.words[0], first))
        .map(|k| Phrase {
            words: k.words,
            kind: PhraseKind::Keyword(k.id),
        })
        .chain(
            operators::OPERATORS
                .iter()
                .filter(|o| first_word_fits(o.words[0], first))
                .map(|o| Phrase {
                    words: o.words,
                    kind: PhraseKind::Operator(o.id),
                }),
        )
        .collect();
    out.sort_by(|a, b| b.words.len().cmp(&a.words.len()));
    out
}

/// Compare a phrase's first word against a scanned word, ignoring a trailing
/// `?` in the spelling (checked against the source during the full match).
fn first_word_fits(phrase_word: &str, scanned: &str) -> bool {
    phrase_word.strip_suffix('?').unwrap_or(phrase_word) == scanned
}

/// The maximal identifier-shaped word at `pos` (empty if none starts there).
fn word_at(source: &str, pos: usize) -> &str {
    let bytes = source.as_bytes();
    if !bytes.get(pos).is_some_and(|b| b.is_ascii_alphabetic()) {
        return "";
    }
    let mut end = pos + 1;
    while bytes.get(end).is_some_and(|b| b.is_ascii_alphanumeric() || *b == b'_') {
        end += 1;
    }
    &source[pos..end]
}

/// Convenience function to lex a source string.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, FrontendError> {
    Lexer::new(source).tokenize()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use kthx_core::lang::types::TypeId;

    /// Tokens without the trailing Eof, for terser assertions.
    fn lex_body(source: &str) -> Vec<Token> {
        let mut tokens = lex(source).unwrap();
        assert!(matches!(tokens.last().map(|t| &t.kind), Some(TokenKind::Eof)));
        tokens.pop();
        tokens
    }

    #[test]
    fn test_keyword_registry_parity() {
        for k in keywords::KEYWORDS {
            let tokens = lex_body(k.canonical);
            assert_eq!(
                tokens.len(),
                1,
                "expected single token for keyword {:?}, got {:?}",
                k.id,
                tokens
            );
            assert!(tokens[0].kind.is_keyword(k.id));
            assert_eq!(tokens[0].text, k.canonical);
        }
    }

    #[test]
    fn test_operator_registry_parity() {
        for o in operators::OPERATORS {
            let tokens = lex_body(o.canonical);
            assert_eq!(
                tokens.len(),
                1,
                "expected single token for operator {:?}, got {:?}",
                o.id,
                tokens
            );
            assert!(tokens[0].kind.is_operator(o.id));
        }
    }

    #[test]
    fn test_multiword_phrases_never_split() {
        let tokens = lex_body("x IS NOW A NUMBR");
        assert!(matches!(&tokens[0].kind, TokenKind::Ident(s) if s == "x"));
        assert!(tokens[1].kind.is_keyword(KeywordId::IsNowA));
        assert!(matches!(tokens[2].kind, TokenKind::TypeName(TypeId::Numbr)));
        assert_eq!(tokens.len(), 3);
    }

    #[test]
    fn test_phrase_tolerates_extra_intraline_whitespace() {
        let tokens = lex_body("I  HAS\tA kitteh");
        assert!(tokens[0].kind.is_keyword(KeywordId::IHasA));
        assert_eq!(tokens[0].text, "I  HAS\tA");
        assert!(matches!(&tokens[1].kind, TokenKind::Ident(s) if s == "kitteh"));
    }

    #[test]
    fn test_phrase_does_not_span_newlines() {
        // `IS` and `NOW` on different lines must not fuse into `IS NOW A`.
        let tokens = lex_body("IS\nNOW A x");
        assert!(matches!(&tokens[0].kind, TokenKind::Ident(s) if s == "IS"));
        assert!(matches!(&tokens[1].kind, TokenKind::Ident(s) if s == "NOW"));
        assert!(tokens[2].kind.is_keyword(KeywordId::A));
    }

    #[test]
    fn test_failed_phrase_falls_back_to_identifier() {
        // `BOTH` alone is neither `BOTH OF` nor `BOTH SAEM`.
        let tokens = lex_body("BOTH x");
        assert!(matches!(&tokens[0].kind, TokenKind::Ident(s) if s == "BOTH"));
    }

    #[test]
    fn test_keyword_requires_word_boundary() {
        let tokens = lex_body("HAIr");
        assert_eq!(tokens.len(), 1);
        assert!(matches!(&tokens[0].kind, TokenKind::Ident(s) if s == "HAIr"));
    }

    #[test]
    fn test_question_mark_spellings() {
        let tokens = lex_body("O RLY? WTF?");
        assert!(tokens[0].kind.is_keyword(KeywordId::ORly));
        assert!(tokens[1].kind.is_keyword(KeywordId::Wtf));

        // Without the `?` these are plain identifiers.
        let tokens = lex_body("WTF");
        assert!(matches!(&tokens[0].kind, TokenKind::Ident(s) if s == "WTF"));
    }

    #[test]
    fn test_numbers() {
        let tokens = lex_body("42 -7 3.14 -3.14");
        assert!(matches!(tokens[0].kind, TokenKind::Numbr(42)));
        assert!(matches!(tokens[1].kind, TokenKind::Numbr(-7)));
        assert!(matches!(tokens[2].kind, TokenKind::Numbar(f) if (f - 3.14).abs() < 1e-9));
        assert!(matches!(tokens[3].kind, TokenKind::Numbar(f) if (f + 3.14).abs() < 1e-9));
        assert_eq!(tokens[3].text, "-3.14");
    }

    #[test]
    fn test_float_requires_fractional_digits() {
        // `3.` is a NUMBR followed by a stray dot, which no rule matches.
        let err = lex("3.").unwrap_err();
        assert!(err.to_string().contains("unexpected character '.'"));
    }

    #[test]
    fn test_troof_and_type_literals() {
        let tokens = lex_body("WIN FAIL NOOB YARN");
        assert!(matches!(tokens[0].kind, TokenKind::Troof(true)));
        assert!(matches!(tokens[1].kind, TokenKind::Troof(false)));
        assert!(matches!(tokens[2].kind, TokenKind::TypeName(TypeId::Noob)));
        assert!(matches!(tokens[3].kind, TokenKind::TypeName(TypeId::Yarn)));
    }

    #[test]
    fn test_yarn_literal() {
        let tokens = lex_body(r#"VISIBLE "O HAI THAR""#);
        assert!(tokens[0].kind.is_keyword(KeywordId::Visible));
        assert!(matches!(&tokens[1].kind, TokenKind::Yarn(s) if s == "O HAI THAR"));
        assert_eq!(tokens[1].text, r#""O HAI THAR""#);
    }

    #[test]
    fn test_unterminated_yarn_is_lexical_error() {
        let err = lex("\"no closing quote").unwrap_err();
        assert!(err.to_string().contains("unterminated YARN literal"));

        let err = lex("\"spans\nlines\"").unwrap_err();
        assert!(err.to_string().contains("unterminated YARN literal"));
    }

    #[test]
    fn test_plus_separator() {
        let tokens = lex_body(r#"VISIBLE "a" + "b""#);
        assert!(matches!(tokens[2].kind, TokenKind::Plus));
    }

    #[test]
    fn test_line_comment() {
        let tokens = lex_body("BTW dis is ignored\nHAI");
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].kind.is_keyword(KeywordId::Hai));
        assert_eq!(tokens[0].line, 2);
    }

    #[test]
    fn test_multiline_comment_stops_at_first_tldr() {
        // Non-greedy: the second TLDR is an identifier, not a comment close.
        let tokens = lex_body("OBTW one TLDR TLDR");
        assert_eq!(tokens.len(), 1);
        assert!(matches!(&tokens[0].kind, TokenKind::Ident(s) if s == "TLDR"));
    }

    #[test]
    fn test_multiline_comment_counts_newlines() {
        let tokens = lex_body("OBTW\nsum comment\ntext\nTLDR\nHAI");
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].kind.is_keyword(KeywordId::Hai));
        assert_eq!(tokens[0].line, 5);
        assert_eq!(tokens[0].column, 0);
    }

    #[test]
    fn test_unterminated_multiline_comment() {
        let err = lex("OBTW never closed").unwrap_err();
        assert!(err.to_string().contains("unterminated multi-line comment"));
    }

    #[test]
    fn test_comment_and_whitespace_only_input_is_empty() {
        let tokens = lex("  BTW nothing here\n\nOBTW\nmore\nnothing\nTLDR\n  \t\n").unwrap();
        assert_eq!(tokens.len(), 1);
        let eof = &tokens[0];
        assert!(matches!(eof.kind, TokenKind::Eof));
        // Final line count = number of newlines + 1.
        assert_eq!(eof.line, 8);
    }

    #[test]
    fn test_positions() {
        let tokens = lex_body("HAI\n  VISIBLE x");
        assert_eq!((tokens[0].line, tokens[0].column), (1, 0));
        assert_eq!((tokens[1].line, tokens[1].column), (2, 2));
        assert_eq!((tokens[2].line, tokens[2].column), (2, 10));
    }

    #[test]
    fn test_unexpected_character() {
        let err = lex("HAI @").unwrap_err();
        assert!(err.to_string().contains("unexpected character '@'"));
        assert_eq!(err.line, 1);
        assert_eq!(err.column, 4);
    }

    #[test]
    fn test_bare_minus_is_lexical_error() {
        let err = lex("SUM OF - AN 1").unwrap_err();
        assert!(err.to_string().contains("unexpected character '-'"));
    }

    #[test]
    fn test_token_texts_roundtrip_source_slices() {
        let source = "HAI\nI HAS A kitteh ITZ -3.14 BTW trailing\nVISIBLE \"mew\" + kitteh\nKTHXBYE";
        for token in lex_body(source) {
            assert_eq!(
                &source[token.span.start..token.span.end],
                token.text,
                "token text must equal its source slice"
            );
        }
    }

    #[test]
    fn test_numbr_out_of_range() {
        let err = lex("99999999999999999999999").unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }
}
