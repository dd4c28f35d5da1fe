//! Symbol resolution for parsed LOLCODE programs.
//!
//! This is a second pass over the completed AST, deliberately decoupled from
//! the parser's single-token-lookahead discipline: the parser stays a pure
//! syntax checker, and this walk resolves identifiers against declarations.
//!
//! The pass builds a [`SymbolTable`] mapping each variable to its declared
//! type tag and initialization state, and collects **all** violations in one
//! walk (unlike the parser, which aborts on the first error, this pass has
//! the whole tree and can report everything).
//!
//! ## Notes
//! - LOLCODE has a single flat scope; conditional, switch, and loop bodies
//!   share it.
//! - `IS NOW A` updates only the recorded type tag. Nothing in this crate
//!   evaluates values, so the tag is the only observable effect.
//! - The implicit `IT` variable is always defined.

use std::collections::HashMap;

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use kthx_core::lang::types::TypeId;
use kthx_syntax::ast::{
    AssignValue, Block, Expr, Literal, Program, Span, Spanned, Statement, VarDecl,
};

/// A resolved variable: declared type tag and initialization state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub name: String,
    /// The current type tag. `NOOB` until a literal initializer, a typecast,
    /// or an `IS NOW A` gives the variable a concrete type.
    pub declared_type: TypeId,
    pub initialized: bool,
}

/// Variable table built by [`resolve`].
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    symbols: HashMap<String, Symbol>,
}

impl SymbolTable {
    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.values()
    }
}

/// A violation found while resolving symbols.
#[derive(Debug, Clone, Error, Diagnostic)]
#[error("semantic error: {message}")]
#[diagnostic(code(kthx::symbols))]
pub struct SemanticError {
    pub message: String,
    #[label("here")]
    pub span: SourceSpan,
}

impl SemanticError {
    fn new(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span: (span.start, span.len()).into(),
        }
    }
}

/// Resolve every identifier in `program` against its declarations.
///
/// ## Returns
/// - `Ok(SymbolTable)` when every reference resolves.
/// - `Err(errors)` with one entry per violation, in source order.
#[tracing::instrument(skip_all)]
pub fn resolve(program: &Program) -> Result<SymbolTable, Vec<SemanticError>> {
    let mut resolver = Resolver::default();

    for decl in &program.declarations {
        resolver.declare(&decl.node, decl.span);
    }
    resolver.block(&program.body);

    if resolver.errors.is_empty() {
        Ok(resolver.table)
    } else {
        Err(resolver.errors)
    }
}

#[derive(Default)]
struct Resolver {
    table: SymbolTable,
    errors: Vec<SemanticError>,
}

impl Resolver {
    fn declare(&mut self, decl: &VarDecl, span: Span) {
        // The initializer is resolved before the name becomes visible, so
        // `I HAS A x ITZ x` is a use of an undeclared variable.
        if let Some(init) = &decl.init {
            self.expr(init);
        }

        if self.table.contains(&decl.name) {
            self.errors.push(SemanticError::new(
                format!("variable '{}' is declared twice", decl.name),
                span,
            ));
            return;
        }

        let declared_type = match &decl.init {
            Some(init) => literal_type(&init.node).unwrap_or(TypeId::Noob),
            None => TypeId::Noob,
        };
        self.table.symbols.insert(
            decl.name.clone(),
            Symbol {
                name: decl.name.clone(),
                declared_type,
                initialized: decl.init.is_some(),
            },
        );
    }

    fn block(&mut self, block: &Block) {
        for stmt in block {
            self.statement(stmt);
        }
    }

    fn statement(&mut self, stmt: &Spanned<Statement>) {
        match &stmt.node {
            Statement::Declare(decl) => self.declare(decl, stmt.span),
            Statement::Assign(assign) => {
                match &assign.value {
                    AssignValue::Expr(expr) => {
                        self.expr(expr);
                        self.mark_assigned(&assign.name, literal_type_of(expr), stmt.span);
                    }
                    AssignValue::Cast(cast) => {
                        self.require_declared(&cast.source, stmt.span);
                        self.mark_assigned(&assign.name, Some(cast.target_type), stmt.span);
                    }
                };
            }
            Statement::Retype(retype) => {
                if let Some(symbol) = self.table.symbols.get_mut(&retype.name) {
                    symbol.declared_type = retype.target_type;
                } else {
                    self.errors.push(SemanticError::new(
                        format!("retype of undeclared variable '{}'", retype.name),
                        stmt.span,
                    ));
                }
            }
            Statement::Print(print) => {
                for operand in &print.operands {
                    self.expr(operand);
                }
            }
            Statement::Input(input) => self.require_declared(&input.target, stmt.span),
            Statement::If(if_stmt) => {
                self.block(&if_stmt.then_block);
                for branch in &if_stmt.mebbe_branches {
                    self.expr(&branch.condition);
                    self.block(&branch.block);
                }
                if let Some(else_block) = &if_stmt.else_block {
                    self.block(else_block);
                }
            }
            Statement::Switch(switch) => {
                for arm in &switch.arms {
                    self.block(&arm.block);
                }
                if let Some(default_block) = &switch.default_block {
                    self.block(default_block);
                }
            }
            Statement::Loop(loop_stmt) => self.block(&loop_stmt.body),
            Statement::Expr(expr) => self.expr(expr),
        }
    }

    fn expr(&mut self, expr: &Spanned<Expr>) {
        match &expr.node {
            Expr::Literal(_) | Expr::It => {}
            Expr::Var(name) => self.require_declared(name, expr.span),
            Expr::Op(op) => {
                for operand in &op.operands {
                    self.expr(operand);
                }
            }
        }
    }

    fn require_declared(&mut self, name: &str, span: Span) {
        if !self.table.contains(name) {
            self.errors.push(SemanticError::new(
                format!("use of undeclared variable '{}'", name),
                span,
            ));
        }
    }

    /// Record an assignment: the target must exist, becomes initialized, and
    /// picks up a concrete type tag when one is known.
    fn mark_assigned(&mut self, name: &str, new_type: Option<TypeId>, span: Span) {
        match self.table.symbols.get_mut(name) {
            Some(symbol) => {
                symbol.initialized = true;
                if let Some(ty) = new_type {
                    symbol.declared_type = ty;
                }
            }
            None => self.errors.push(SemanticError::new(
                format!("assignment to undeclared variable '{}'", name),
                span,
            )),
        }
    }
}

fn literal_type(expr: &Expr) -> Option<TypeId> {
    match expr {
        Expr::Literal(Literal::Numbr(_)) => Some(TypeId::Numbr),
        Expr::Literal(Literal::Numbar(_)) => Some(TypeId::Numbar),
        Expr::Literal(Literal::Yarn(_)) => Some(TypeId::Yarn),
        Expr::Literal(Literal::Troof(_)) => Some(TypeId::Troof),
        _ => None,
    }
}

fn literal_type_of(expr: &Spanned<Expr>) -> Option<TypeId> {
    literal_type(&expr.node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kthx_syntax::{lexer, parser};

    fn resolve_str(source: &str) -> Result<SymbolTable, Vec<SemanticError>> {
        let tokens = lexer::lex(source).unwrap();
        let program = parser::parse(&tokens).unwrap();
        resolve(&program)
    }

    #[test]
    fn test_declared_variables_resolve() {
        let table = resolve_str("HAI WAZZUP I HAS A x ITZ 5 BUHBYE VISIBLE x KTHXBYE").unwrap();
        let symbol = table.get("x").unwrap();
        assert_eq!(symbol.declared_type, TypeId::Numbr);
        assert!(symbol.initialized);
    }

    #[test]
    fn test_uninitialized_variable_is_noob() {
        let table = resolve_str("HAI I HAS A x KTHXBYE").unwrap();
        let symbol = table.get("x").unwrap();
        assert_eq!(symbol.declared_type, TypeId::Noob);
        assert!(!symbol.initialized);
    }

    #[test]
    fn test_use_of_undeclared_variable() {
        let errors = resolve_str("HAI VISIBLE x KTHXBYE").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("undeclared variable 'x'"));
    }

    #[test]
    fn test_assignment_requires_declaration() {
        let errors = resolve_str("HAI x R 5 KTHXBYE").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("assignment to undeclared variable 'x'"));
    }

    #[test]
    fn test_duplicate_declaration() {
        let errors = resolve_str("HAI I HAS A x I HAS A x KTHXBYE").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("declared twice"));
    }

    #[test]
    fn test_initializer_cannot_reference_the_declared_name() {
        let errors = resolve_str("HAI I HAS A x ITZ x KTHXBYE").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("undeclared variable 'x'"));
    }

    #[test]
    fn test_retype_updates_the_tag() {
        let table = resolve_str("HAI I HAS A x ITZ 5 x IS NOW A YARN KTHXBYE").unwrap();
        assert_eq!(table.get("x").unwrap().declared_type, TypeId::Yarn);
    }

    #[test]
    fn test_typecast_assignment_sets_target_type() {
        let table = resolve_str("HAI I HAS A x ITZ \"5\" I HAS A y x R MAEK x A NUMBR y R 1 KTHXBYE")
            .unwrap();
        assert_eq!(table.get("x").unwrap().declared_type, TypeId::Numbr);
    }

    #[test]
    fn test_cast_source_must_be_declared() {
        let errors = resolve_str("HAI I HAS A x x R MAEK y A NUMBR KTHXBYE").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("undeclared variable 'y'"));
    }

    #[test]
    fn test_it_is_implicitly_defined() {
        assert!(resolve_str("HAI VISIBLE IT KTHXBYE").is_ok());
    }

    #[test]
    fn test_all_violations_reported_in_one_pass() {
        let errors = resolve_str("HAI VISIBLE a VISIBLE b GIMMEH c KTHXBYE").unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_bodies_share_the_flat_scope() {
        let source = "HAI I HAS A x ITZ WIN O RLY? YA RLY VISIBLE x NO WAI VISIBLE x OIC KTHXBYE";
        assert!(resolve_str(source).is_ok());
    }
}
