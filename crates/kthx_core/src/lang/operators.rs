//! Operator vocabulary.
//!
//! This module defines the canonical prefix-operator set (`SUM OF`,
//! `BOTH SAEM`, `NOT`, ...) along with the metadata the parser actually
//! dispatches on: **arity**. LOLCODE operators are spelled as keyword
//! phrases and always lead their expression, so there is no precedence or
//! associativity to record: the operand shape is the whole grammar.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - [`Arity::Binary`] operators take exactly two `AN`-joined operands;
//!   [`Arity::Variadic`] operators take two or more, optionally closed by
//!   `MKAY`; [`Arity::Unary`] operators take exactly one operand and no
//!   joiner.
//!
//! ## Examples
//! ```rust
//! use kthx_core::lang::operators::{self, Arity, OperatorId};
//!
//! assert_eq!(operators::from_str("SUM OF"), Some(OperatorId::SumOf));
//! assert_eq!(operators::info_for(OperatorId::SumOf).arity, Arity::Variadic);
//! assert_eq!(operators::info_for(OperatorId::DiffOf).arity, Arity::Binary);
//! ```

/// Define how many operands an operator application takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    /// Exactly one operand (`NOT x`).
    Unary,
    /// Exactly two operands joined by `AN` (`DIFF OF x AN y`).
    Binary,
    /// Two or more operands chained by `AN`, optionally closed by `MKAY`.
    Variadic,
}

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Arithmetic
    SumOf,
    DiffOf,
    ProduktOf,
    QuoshuntOf,
    ModOf,
    BiggrOf,
    SmallrOf,

    // Boolean
    BothOf,
    EitherOf,
    WonOf,
    AnyOf,
    AllOf,
    Not,

    // Comparison
    BothSaem,
    Diffrint,

    // String
    Smoosh,
}

/// High-level grouping for documentation and tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorCategory {
    Arithmetic,
    Boolean,
    Comparison,
    String,
}

/// Metadata for an operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    /// Preferred spelling for docs and diagnostics (words joined by one space).
    pub canonical: &'static str,
    /// The whitespace-separated words the tokenizer matches in sequence.
    pub words: &'static [&'static str],
    pub arity: Arity,
    pub category: OperatorCategory,
}

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    // Arithmetic
    op(OperatorId::SumOf, "SUM OF", &["SUM", "OF"], Arity::Variadic, OperatorCategory::Arithmetic),
    op(OperatorId::DiffOf, "DIFF OF", &["DIFF", "OF"], Arity::Binary, OperatorCategory::Arithmetic),
    op(
        OperatorId::ProduktOf,
        "PRODUKT OF",
        &["PRODUKT", "OF"],
        Arity::Variadic,
        OperatorCategory::Arithmetic,
    ),
    op(
        OperatorId::QuoshuntOf,
        "QUOSHUNT OF",
        &["QUOSHUNT", "OF"],
        Arity::Binary,
        OperatorCategory::Arithmetic,
    ),
    op(OperatorId::ModOf, "MOD OF", &["MOD", "OF"], Arity::Binary, OperatorCategory::Arithmetic),
    op(OperatorId::BiggrOf, "BIGGR OF", &["BIGGR", "OF"], Arity::Binary, OperatorCategory::Arithmetic),
    op(
        OperatorId::SmallrOf,
        "SMALLR OF",
        &["SMALLR", "OF"],
        Arity::Binary,
        OperatorCategory::Arithmetic,
    ),
    // Boolean
    op(OperatorId::BothOf, "BOTH OF", &["BOTH", "OF"], Arity::Variadic, OperatorCategory::Boolean),
    op(OperatorId::EitherOf, "EITHER OF", &["EITHER", "OF"], Arity::Variadic, OperatorCategory::Boolean),
    op(OperatorId::WonOf, "WON OF", &["WON", "OF"], Arity::Variadic, OperatorCategory::Boolean),
    op(OperatorId::AnyOf, "ANY OF", &["ANY", "OF"], Arity::Variadic, OperatorCategory::Boolean),
    op(OperatorId::AllOf, "ALL OF", &["ALL", "OF"], Arity::Variadic, OperatorCategory::Boolean),
    op(OperatorId::Not, "NOT", &["NOT"], Arity::Unary, OperatorCategory::Boolean),
    // Comparison
    op(
        OperatorId::BothSaem,
        "BOTH SAEM",
        &["BOTH", "SAEM"],
        Arity::Binary,
        OperatorCategory::Comparison,
    ),
    op(OperatorId::Diffrint, "DIFFRINT", &["DIFFRINT"], Arity::Binary, OperatorCategory::Comparison),
    // String
    op(OperatorId::Smoosh, "SMOOSH", &["SMOOSH"], Arity::Variadic, OperatorCategory::String),
];

/// Canonical spelling.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).canonical
}

/// Arity.
pub fn arity(id: OperatorId) -> Arity {
    info_for(id).arity
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a
///   programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS.iter().find(|o| o.id == id).expect("operator info missing")
}

/// Lookup by canonical spelling.
pub fn from_str(s: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.canonical == s).map(|o| o.id)
}

const fn op(
    id: OperatorId,
    canonical: &'static str,
    words: &'static [&'static str],
    arity: Arity,
    category: OperatorCategory,
) -> OperatorInfo {
    OperatorInfo {
        id,
        canonical,
        words,
        arity,
        category,
    }
}
