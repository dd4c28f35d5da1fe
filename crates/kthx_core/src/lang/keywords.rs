//! Define the reserved keyword vocabulary for LOLCODE.
//!
//! This module is the single source of truth for the structural keywords: a
//! stable identifier ([`KeywordId`]) plus a const metadata table
//! ([`KEYWORDS`]) that records the canonical phrase, its individual words,
//! and a coarse category.
//!
//! Expression operators (`SUM OF`, `NOT`, ...) live in
//! [`crate::lang::operators`]; builtin type names (`NUMBR`, ...) live in
//! [`crate::lang::types`]. The three registries never overlap in spelling.
//!
//! ## Notes
//! - Many keywords are multi-word phrases. `words` holds the words the
//!   tokenizer matches in sequence; `canonical` is the words joined by a
//!   single space and is the spelling used in diagnostics and docs.
//! - A `?` suffix on a word (`O RLY?`, `WTF?`) is part of the spelling: the
//!   question mark must immediately follow the word with no whitespace.
//! - Lookup via [`from_str`] is **case-sensitive**.
//!
//! ## Examples
//! ```rust
//! use kthx_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("IS NOW A"), Some(KeywordId::IsNowA));
//! assert_eq!(keywords::as_str(KeywordId::ORly), "O RLY?");
//! assert_eq!(keywords::info_for(KeywordId::ImInYr).words, &["IM", "IN", "YR"]);
//! ```

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Program delimiters
    Hai,
    Kthxbye,
    Wazzup,
    Buhbye,

    // Declarations / assignment
    IHasA,
    Itz,
    R,
    IsNowA,
    Maek,
    A,

    // IO statements
    Visible,
    Gimmeh,

    // Conditionals
    ORly,
    YaRly,
    Mebbe,
    NoWai,
    Oic,

    // Switch
    Wtf,
    Omg,
    Omgwtf,
    Gtfo,

    // Loops
    ImInYr,
    ImOuttaYr,
    Uppin,
    Nerfin,
    Yr,
    Til,
    Wile,

    // Functions (tokenized; no grammar productions consume these yet)
    HowIzI,
    IfUSaySo,
    FoundYr,
    IIz,

    // Separators / implicit variable
    An,
    Mkay,
    It,
}

/// High-level grouping for documentation and tooling.
///
/// ## Notes
/// - Categories are metadata only; they do not enforce parsing context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    Program,
    Declaration,
    Assignment,
    Io,
    ControlFlow,
    Function,
    Separator,
    Expression,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    /// Preferred spelling for docs and diagnostics (words joined by one space).
    pub canonical: &'static str,
    /// The whitespace-separated words the tokenizer matches in sequence.
    pub words: &'static [&'static str],
    pub category: KeywordCategory,
}

/// Registry of all keywords.
///
/// ## Notes
/// - The ordering is not semantically meaningful, but is grouped for
///   readability. Match priority among overlapping phrases is derived from
///   word counts by the tokenizer, not from table order.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Program delimiters
    info(KeywordId::Hai, "HAI", &["HAI"], KeywordCategory::Program),
    info(KeywordId::Kthxbye, "KTHXBYE", &["KTHXBYE"], KeywordCategory::Program),
    info(KeywordId::Wazzup, "WAZZUP", &["WAZZUP"], KeywordCategory::Program),
    info(KeywordId::Buhbye, "BUHBYE", &["BUHBYE"], KeywordCategory::Program),
    // Declarations / assignment
    info(KeywordId::IHasA, "I HAS A", &["I", "HAS", "A"], KeywordCategory::Declaration),
    info(KeywordId::Itz, "ITZ", &["ITZ"], KeywordCategory::Declaration),
    info(KeywordId::R, "R", &["R"], KeywordCategory::Assignment),
    info(KeywordId::IsNowA, "IS NOW A", &["IS", "NOW", "A"], KeywordCategory::Assignment),
    info(KeywordId::Maek, "MAEK", &["MAEK"], KeywordCategory::Assignment),
    info(KeywordId::A, "A", &["A"], KeywordCategory::Assignment),
    // IO
    info(KeywordId::Visible, "VISIBLE", &["VISIBLE"], KeywordCategory::Io),
    info(KeywordId::Gimmeh, "GIMMEH", &["GIMMEH"], KeywordCategory::Io),
    // Conditionals
    info(KeywordId::ORly, "O RLY?", &["O", "RLY?"], KeywordCategory::ControlFlow),
    info(KeywordId::YaRly, "YA RLY", &["YA", "RLY"], KeywordCategory::ControlFlow),
    info(KeywordId::Mebbe, "MEBBE", &["MEBBE"], KeywordCategory::ControlFlow),
    info(KeywordId::NoWai, "NO WAI", &["NO", "WAI"], KeywordCategory::ControlFlow),
    info(KeywordId::Oic, "OIC", &["OIC"], KeywordCategory::ControlFlow),
    // Switch
    info(KeywordId::Wtf, "WTF?", &["WTF?"], KeywordCategory::ControlFlow),
    info(KeywordId::Omg, "OMG", &["OMG"], KeywordCategory::ControlFlow),
    info(KeywordId::Omgwtf, "OMGWTF", &["OMGWTF"], KeywordCategory::ControlFlow),
    info(KeywordId::Gtfo, "GTFO", &["GTFO"], KeywordCategory::ControlFlow),
    // Loops
    info(KeywordId::ImInYr, "IM IN YR", &["IM", "IN", "YR"], KeywordCategory::ControlFlow),
    info(
        KeywordId::ImOuttaYr,
        "IM OUTTA YR",
        &["IM", "OUTTA", "YR"],
        KeywordCategory::ControlFlow,
    ),
    info(KeywordId::Uppin, "UPPIN", &["UPPIN"], KeywordCategory::ControlFlow),
    info(KeywordId::Nerfin, "NERFIN", &["NERFIN"], KeywordCategory::ControlFlow),
    info(KeywordId::Yr, "YR", &["YR"], KeywordCategory::ControlFlow),
    info(KeywordId::Til, "TIL", &["TIL"], KeywordCategory::ControlFlow),
    info(KeywordId::Wile, "WILE", &["WILE"], KeywordCategory::ControlFlow),
    // Functions
    info(KeywordId::HowIzI, "HOW IZ I", &["HOW", "IZ", "I"], KeywordCategory::Function),
    info(
        KeywordId::IfUSaySo,
        "IF U SAY SO",
        &["IF", "U", "SAY", "SO"],
        KeywordCategory::Function,
    ),
    info(KeywordId::FoundYr, "FOUND YR", &["FOUND", "YR"], KeywordCategory::Function),
    info(KeywordId::IIz, "I IZ", &["I", "IZ"], KeywordCategory::Function),
    // Separators / implicit variable
    info(KeywordId::An, "AN", &["AN"], KeywordCategory::Separator),
    info(KeywordId::Mkay, "MKAY", &["MKAY"], KeywordCategory::Separator),
    info(KeywordId::It, "IT", &["IT"], KeywordCategory::Expression),
];

/// Canonical spelling.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Category.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a
///   programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id == id).expect("keyword info missing")
}

/// Lookup by canonical spelling.
///
/// ## Notes
/// - Matching is **case-sensitive** and expects single spaces between words
///   (the canonical form). The tokenizer matches word-by-word and tolerates
///   arbitrary intra-line whitespace; this function does not.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

const fn info(
    id: KeywordId,
    canonical: &'static str,
    words: &'static [&'static str],
    category: KeywordCategory,
) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        words,
        category,
    }
}
