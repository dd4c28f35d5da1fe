//! Guardrail tests for the vocabulary registries.
//!
//! These protect the invariants the tokenizer relies on: every spelling is
//! resolvable, no spelling is claimed by two registries, and phrase metadata
//! is internally consistent (canonical == words joined by single spaces).

use std::collections::HashMap;

use kthx_core::lang::keywords;
use kthx_core::lang::operators;
use kthx_core::lang::types;

#[test]
fn keyword_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, keywords::KeywordId> = HashMap::new();

    for info in keywords::KEYWORDS {
        assert_eq!(
            keywords::from_str(info.canonical),
            Some(info.id),
            "keyword canonical spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(
            keywords::as_str(info.id),
            info.canonical,
            "keyword as_str mismatch for {:?}",
            info.id
        );

        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate keyword spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }
    }
}

#[test]
fn operator_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, operators::OperatorId> = HashMap::new();

    for info in operators::OPERATORS {
        assert_eq!(
            operators::from_str(info.canonical),
            Some(info.id),
            "operator canonical spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(
            operators::as_str(info.id),
            info.canonical,
            "operator as_str mismatch for {:?}",
            info.id
        );

        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate operator spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }
    }
}

#[test]
fn canonical_spelling_matches_words() {
    for info in keywords::KEYWORDS {
        assert!(!info.words.is_empty(), "keyword {:?} has no words", info.id);
        assert_eq!(
            info.canonical,
            info.words.join(" "),
            "keyword {:?} canonical/words mismatch",
            info.id
        );
    }
    for info in operators::OPERATORS {
        assert!(!info.words.is_empty(), "operator {:?} has no words", info.id);
        assert_eq!(
            info.canonical,
            info.words.join(" "),
            "operator {:?} canonical/words mismatch",
            info.id
        );
    }
}

#[test]
fn words_are_wellformed() {
    // Every phrase word is uppercase ASCII letters, optionally ending in `?`
    // (`O RLY?`, `WTF?`). The tokenizer's word scanner depends on this shape.
    let all_words = keywords::KEYWORDS
        .iter()
        .flat_map(|k| k.words.iter())
        .chain(operators::OPERATORS.iter().flat_map(|o| o.words.iter()));

    for word in all_words {
        let body = word.strip_suffix('?').unwrap_or(word);
        assert!(!body.is_empty(), "empty phrase word");
        assert!(
            body.chars().all(|c| c.is_ascii_uppercase()),
            "phrase word {:?} is not uppercase ASCII",
            word
        );
    }
}

#[test]
fn no_spelling_collisions_across_registries() {
    let mut seen: HashMap<&'static str, &'static str> = HashMap::new();

    for info in keywords::KEYWORDS {
        seen.insert(info.canonical, "keyword");
    }
    for info in operators::OPERATORS {
        if let Some(owner) = seen.insert(info.canonical, "operator") {
            panic!("spelling {:?} claimed by {} and operator", info.canonical, owner);
        }
    }
    for info in types::TYPES {
        if let Some(owner) = seen.insert(info.canonical, "type") {
            panic!("spelling {:?} claimed by {} and type", info.canonical, owner);
        }
    }
    for troof in ["WIN", "FAIL"] {
        if let Some(owner) = seen.insert(troof, "troof literal") {
            panic!("spelling {:?} claimed by {} and troof literal", troof, owner);
        }
    }
}

#[test]
fn type_spellings_resolvable() {
    for info in types::TYPES {
        assert_eq!(types::from_str(info.canonical), Some(info.id));
        assert_eq!(types::as_str(info.id), info.canonical);
    }
    assert_eq!(types::troof_value("WIN"), Some(true));
    assert_eq!(types::troof_value("FAIL"), Some(false));
    assert_eq!(types::troof_value("MAYBE"), None);
}
