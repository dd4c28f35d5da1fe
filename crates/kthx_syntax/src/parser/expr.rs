/// Expression parsing methods.
///
/// A value-or-expression is a literal, a variable reference, the implicit
/// `IT` variable, or a prefix operator application. There is no precedence
/// ladder: every operator leads its expression and the operand shape is
/// dictated entirely by the operator's registered arity.
///
/// ## Notes
/// - Operand parsing recurses into value-or-expression, so expressions nest
///   to arbitrary depth; the depth counter converts pathological nesting into
///   an explicit resource-exhaustion error (see `MAX_EXPR_DEPTH`).
impl<'a> Parser<'a> {
    // ========================================================================
    // Expressions
    // ========================================================================

    fn value_or_expression(&mut self) -> Result<Spanned<Expr>, FrontendError> {
        if self.expr_depth >= MAX_EXPR_DEPTH {
            return Err(self.resource_exhausted_here());
        }
        self.expr_depth += 1;
        let result = self.value_or_expression_inner();
        self.expr_depth -= 1;
        result
    }

    fn value_or_expression_inner(&mut self) -> Result<Spanned<Expr>, FrontendError> {
        let span = self.current_span();

        let expr = match &self.peek().kind {
            TokenKind::Numbr(v) => Expr::Literal(Literal::Numbr(*v)),
            TokenKind::Numbar(v) => Expr::Literal(Literal::Numbar(*v)),
            TokenKind::Yarn(s) => Expr::Literal(Literal::Yarn(s.clone())),
            TokenKind::Troof(b) => Expr::Literal(Literal::Troof(*b)),
            TokenKind::Ident(name) => Expr::Var(name.clone()),
            TokenKind::Keyword(KeywordId::It) => Expr::It,
            TokenKind::Operator(op) => {
                let op = *op;
                return self.operator_expr(op);
            }
            _ => return Err(self.syntax_error("a value or expression")),
        };

        self.advance();
        Ok(Spanned::new(expr, span))
    }

    /// Parse an operator application, dispatching on the operator's arity:
    /// unary (one operand, no joiner), binary (exactly two `AN`-joined
    /// operands), or variadic (two or more `AN`-chained operands with an
    /// optional closing `MKAY`).
    fn operator_expr(&mut self, op: OperatorId) -> Result<Spanned<Expr>, FrontendError> {
        let start = self.current_span();
        self.advance(); // the operator phrase

        let mut operands = Vec::new();
        match operators::arity(op) {
            Arity::Unary => {
                operands.push(self.value_or_expression()?);
            }
            Arity::Binary => {
                operands.push(self.value_or_expression()?);
                self.expect_keyword(KeywordId::An)?;
                operands.push(self.value_or_expression()?);
            }
            Arity::Variadic => {
                operands.push(self.value_or_expression()?);
                self.expect_keyword(KeywordId::An)?;
                operands.push(self.value_or_expression()?);
                while self.match_keyword(KeywordId::An) {
                    operands.push(self.value_or_expression()?);
                }
                // Optional terminator: closes the expression without being
                // an operand.
                self.match_keyword(KeywordId::Mkay);
            }
        }

        Ok(Spanned::new(
            Expr::Op(OpExpr { op, operands }),
            start.merge(self.prev_span()),
        ))
    }
}
