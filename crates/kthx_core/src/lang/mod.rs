//! LOLCODE vocabulary registries.
//!
//! This module is the "front door" for language-level vocabulary: reserved
//! keywords, prefix operators, and builtin type names.
//!
//! The design goal is to avoid stringly-typed checks scattered across the
//! lexer, parser, and tooling. Instead, callers work with **stable IDs**
//! (e.g. `KeywordId`, `OperatorId`) and look up spellings/metadata via
//! registry tables.
//!
//! LOLCODE spellings are frequently multi-word (`IS NOW A`, `IM OUTTA YR`),
//! so every registry entry records its spelling both as a canonical phrase
//! and as the individual words the tokenizer must match in sequence. Rule
//! priority (a longer phrase out-ranks any shorter phrase or identifier that
//! is a prefix of it) is the tokenizer's job; the registries only promise
//! that the spellings are unambiguous.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no token/AST types, no IO, no
//!   side effects.
//! - Lookup via each `from_str` is **case-sensitive**; LOLCODE keywords are
//!   all-caps by definition and `hai` is just an identifier.
//!
//! ## Examples
//! ```rust
//! use kthx_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("I HAS A"), Some(KeywordId::IHasA));
//! assert_eq!(keywords::as_str(KeywordId::IHasA), "I HAS A");
//! ```

pub mod keywords;
pub mod operators;
pub mod types;
