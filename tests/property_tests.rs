//! Property-based tests for the kthx frontend
//!
//! These tests use proptest to verify invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use proptest::prelude::*;

use kthx::ast::Statement;
use kthx::lexer::{self, TokenKind};
use kthx::{parser, symbols};

// =============================================================================
// Generators
// =============================================================================

/// Trivia: whitespace and complete comments. Each element is self-delimiting
/// (comments end their own line) so arbitrary concatenations stay trivia.
fn trivia_fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(" ".to_string()),
        Just("\t".to_string()),
        Just("\n".to_string()),
        Just("BTW sum single line comment\n".to_string()),
        Just("OBTW hidden\nacross lines TLDR\n".to_string()),
        Just("OBTW wun line TLDR\n".to_string()),
    ]
}

/// Lowercase identifiers never collide with the all-caps vocabulary.
fn identifier() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,10}"
}

// =============================================================================
// Lexer properties
// =============================================================================

proptest! {
    /// Whitespace- and comment-only inputs tokenize to nothing, and the
    /// final line count is the newline count plus one.
    #[test]
    fn trivia_only_inputs_produce_no_tokens(fragments in prop::collection::vec(trivia_fragment(), 0..20)) {
        let source: String = fragments.concat();
        let tokens = lexer::lex(&source).unwrap();

        prop_assert_eq!(tokens.len(), 1, "only the Eof pseudo-token: {:?}", tokens);
        prop_assert!(matches!(tokens[0].kind, TokenKind::Eof));

        let newlines = source.matches('\n').count() as u32;
        prop_assert_eq!(tokens[0].line, newlines + 1);
    }

    /// Every token's text is exactly its source slice (the round-trip
    /// property: token texts plus the skipped spans reconstruct the input).
    #[test]
    fn token_texts_equal_source_slices(
        name in identifier(),
        value in any::<i64>(),
        trivia in prop::collection::vec(trivia_fragment(), 0..5),
    ) {
        let source = format!(
            "HAI\n{}I HAS A {} ITZ {}\nVISIBLE {}\nKTHXBYE",
            trivia.concat(),
            name,
            value,
            name
        );
        let tokens = lexer::lex(&source).unwrap();
        for token in &tokens {
            prop_assert_eq!(&source[token.span.start..token.span.end], token.text.as_str());
        }
    }

    /// Integer literals survive the lexer exactly.
    #[test]
    fn integer_literals_lex_to_their_value(value in any::<i64>()) {
        let source = value.to_string();
        let tokens = lexer::lex(&source).unwrap();
        prop_assert_eq!(tokens.len(), 2);
        prop_assert!(matches!(tokens[0].kind, TokenKind::Numbr(v) if v == value));
    }

    /// Lowercase identifiers are never fragmented or misclassified.
    #[test]
    fn identifiers_lex_whole(name in identifier()) {
        let tokens = lexer::lex(&name).unwrap();
        prop_assert_eq!(tokens.len(), 2);
        prop_assert!(matches!(&tokens[0].kind, TokenKind::Ident(s) if s == &name));
    }
}

// =============================================================================
// Pipeline properties
// =============================================================================

proptest! {
    /// Declare-then-use programs always pass the whole pipeline, and the
    /// symbol table records the declared variable.
    #[test]
    fn declared_variables_always_resolve(name in identifier(), value in any::<i64>()) {
        let source = format!("HAI\nI HAS A {} ITZ {}\nVISIBLE {}\nKTHXBYE", name, value, name);

        let tokens = lexer::lex(&source).unwrap();
        let program = parser::parse(&tokens).unwrap();
        prop_assert_eq!(program.body.len(), 2);
        prop_assert!(matches!(&program.body[0].node, Statement::Declare(d) if d.name == name));

        let table = symbols::resolve(&program).unwrap();
        prop_assert!(table.get(&name).is_some());
        prop_assert!(table.get(&name).unwrap().initialized);
    }

    /// Use-without-declare always fails resolution, never parsing.
    #[test]
    fn undeclared_use_fails_resolution_only(name in identifier()) {
        let source = format!("HAI\nVISIBLE {}\nKTHXBYE", name);

        let tokens = lexer::lex(&source).unwrap();
        let program = parser::parse(&tokens).unwrap();
        let errors = symbols::resolve(&program).unwrap_err();
        prop_assert_eq!(errors.len(), 1);
        prop_assert!(errors[0].message.contains(&name));
    }
}
