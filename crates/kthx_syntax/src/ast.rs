//! Abstract Syntax Tree definitions for LOLCODE.
//!
//! This module defines all AST node types the parser produces: one tagged
//! variant per node shape, each carrying only the fields that shape needs.
//! Ownership is strictly tree-shaped; nodes are immutable once built.

use kthx_core::lang::operators::OperatorId;
use kthx_core::lang::types::TypeId;

/// Source location span (byte offsets).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A node with source location.
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

/// Identifier (plain string; LOLCODE has a single flat namespace).
pub type Ident = String;

/// An ordered statement sequence. Blocks are bounded by their construct's
/// closing keywords; there is no layout or indentation in the language.
pub type Block = Vec<Spanned<Statement>>;

/// A whole program: `HAI`, an optional `WAZZUP`..`BUHBYE` declaration block,
/// a statement sequence, `KTHXBYE`.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub declarations: Vec<Spanned<VarDecl>>,
    pub body: Block,
}

/// Statement forms, one per grammar production.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `I HAS A x [ITZ <expr>]` (also legal outside the declaration block)
    Declare(VarDecl),
    /// `x R <expr>` or `x R MAEK y [A] <type>`
    Assign(AssignStmt),
    /// `x IS NOW A <type>`: changes only the declared type tag
    Retype(RetypeStmt),
    /// `VISIBLE <expr> [+/AN <expr>]*`
    Print(PrintStmt),
    /// `GIMMEH x`
    Input(InputStmt),
    /// `O RLY? YA RLY ... [MEBBE <expr> ...]* [NO WAI ...] OIC`
    If(IfStmt),
    /// `WTF? [OMG <lit> ... [GTFO]]* [OMGWTF ...] OIC`
    Switch(SwitchStmt),
    /// `IM IN YR label ... IM OUTTA YR label`
    Loop(LoopStmt),
    /// A bare value-or-expression in statement position
    Expr(Spanned<Expr>),
}

/// Variable declaration. `init: None` records an uninitialized (`NOOB`)
/// variable; no sentinel literal is fabricated.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    pub name: Ident,
    pub init: Option<Spanned<Expr>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignStmt {
    pub name: Ident,
    pub value: AssignValue,
}

/// Right-hand side of an `R` assignment.
#[derive(Debug, Clone, PartialEq)]
pub enum AssignValue {
    Expr(Spanned<Expr>),
    /// `MAEK source [A] <type>` typecast
    Cast(CastExpr),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CastExpr {
    pub source: Ident,
    pub target_type: TypeId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RetypeStmt {
    pub name: Ident,
    pub target_type: TypeId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrintStmt {
    /// Operands in source order; concatenation order matches.
    pub operands: Vec<Spanned<Expr>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InputStmt {
    pub target: Ident,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub then_block: Block,
    /// `MEBBE` branches in source order.
    pub mebbe_branches: Vec<MebbeBranch>,
    pub else_block: Option<Block>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MebbeBranch {
    pub condition: Spanned<Expr>,
    pub block: Block,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwitchStmt {
    /// Arms in source order.
    pub arms: Vec<SwitchArm>,
    pub default_block: Option<Block>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwitchArm {
    pub literal: Spanned<Literal>,
    pub block: Block,
    /// Whether the arm ended with `GTFO` (no fallthrough).
    pub breaks: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoopStmt {
    /// Open/close labels are validated equal by the parser, so one field
    /// suffices.
    pub label: Ident,
    pub body: Block,
}

/// A value-or-expression: literal, variable reference, the implicit `IT`
/// variable, or a prefix operator application.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(Literal),
    Var(Ident),
    It,
    Op(OpExpr),
}

/// Operator application. Operand count is dictated by the operator's arity
/// (see `kthx_core::lang::operators`): one for `NOT`, exactly two for the
/// binary family, two-or-more for the variadic family.
#[derive(Debug, Clone, PartialEq)]
pub struct OpExpr {
    pub op: OperatorId,
    pub operands: Vec<Spanned<Expr>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Numbr(i64),
    Numbar(f64),
    Yarn(String),
    Troof(bool),
}

impl Literal {
    /// The LOLCODE type name of this literal, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Literal::Numbr(_) => "NUMBR",
            Literal::Numbar(_) => "NUMBAR",
            Literal::Yarn(_) => "YARN",
            Literal::Troof(_) => "TROOF",
        }
    }
}
