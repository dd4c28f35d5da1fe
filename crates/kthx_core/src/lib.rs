#![forbid(unsafe_code)]
//! Provide the canonical LOLCODE vocabulary for the kthx front end.
//!
//! This crate is intentionally small and dependency-light. It is the single
//! source of truth for the language's fixed spellings: reserved keywords
//! (including multi-word phrases such as `I HAS A`), prefix operators
//! (`SUM OF`, `BOTH SAEM`, ...), and builtin type names (`NUMBR`, `YARN`,
//! ...).
//!
//! ## Notes
//!
//! - This is a "vocabulary core" crate: **no IO**, no global state, and no
//!   lexer/parser types. The lexer and parser consume these registries; they
//!   never re-spell the language themselves.
//! - Callers work with stable IDs ([`lang::keywords::KeywordId`],
//!   [`lang::operators::OperatorId`], [`lang::types::TypeId`]) rather than
//!   string comparisons.

pub mod lang;
