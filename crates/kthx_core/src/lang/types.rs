//! Builtin type-name vocabulary.
//!
//! LOLCODE spells its types in source (`MAEK x A NUMBR`, `y IS NOW A YARN`),
//! so the tokenizer needs the type names as fixed spellings and the parser
//! needs a stable [`TypeId`] to put in the AST. The `TROOF` literal
//! spellings (`WIN`/`FAIL`) also live here.
//!
//! ## Examples
//! ```rust
//! use kthx_core::lang::types::{self, TypeId};
//!
//! assert_eq!(types::from_str("NUMBR"), Some(TypeId::Numbr));
//! assert_eq!(types::as_str(TypeId::Noob), "NOOB");
//! assert_eq!(types::troof_value("WIN"), Some(true));
//! ```

/// Stable identifier for every builtin type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeId {
    /// Integer.
    Numbr,
    /// Float.
    Numbar,
    /// String.
    Yarn,
    /// Boolean.
    Troof,
    /// Untyped / uninitialized.
    Noob,
    /// Array (tokenized for completeness; no grammar productions consume it).
    Bukkit,
}

/// Metadata for a builtin type name.
#[derive(Debug, Clone, Copy)]
pub struct TypeInfo {
    pub id: TypeId,
    pub canonical: &'static str,
}

/// Registry of all builtin type names.
pub const TYPES: &[TypeInfo] = &[
    TypeInfo {
        id: TypeId::Numbr,
        canonical: "NUMBR",
    },
    TypeInfo {
        id: TypeId::Numbar,
        canonical: "NUMBAR",
    },
    TypeInfo {
        id: TypeId::Yarn,
        canonical: "YARN",
    },
    TypeInfo {
        id: TypeId::Troof,
        canonical: "TROOF",
    },
    TypeInfo {
        id: TypeId::Noob,
        canonical: "NOOB",
    },
    TypeInfo {
        id: TypeId::Bukkit,
        canonical: "BUKKIT",
    },
];

/// Canonical spelling.
pub fn as_str(id: TypeId) -> &'static str {
    TYPES
        .iter()
        .find(|t| t.id == id)
        .expect("type info missing")
        .canonical
}

/// Lookup by spelling.
pub fn from_str(s: &str) -> Option<TypeId> {
    TYPES.iter().find(|t| t.canonical == s).map(|t| t.id)
}

/// Resolve a `TROOF` literal spelling to its boolean value.
pub fn troof_value(s: &str) -> Option<bool> {
    match s {
        "WIN" => Some(true),
        "FAIL" => Some(false),
        _ => None,
    }
}
