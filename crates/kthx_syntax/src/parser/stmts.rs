/// Statement parsing methods.
///
/// This chunk parses the declaration block and every statement form. Blocks
/// are statement sequences bounded by their construct's closing keywords
/// (there is no layout in the language); `KTHXBYE` and end-of-input always
/// stop a sequence so the enclosing construct can report a precise
/// expected/found pair.
impl<'a> Parser<'a> {
    // ========================================================================
    // Declaration block
    // ========================================================================

    /// `WAZZUP <var-decl>* BUHBYE`.
    ///
    /// Anything other than `I HAS A` before `BUHBYE` is a syntax error: the
    /// declaration block admits declarations only.
    fn declaration_block(&mut self) -> Result<Vec<Spanned<VarDecl>>, FrontendError> {
        self.expect_keyword(KeywordId::Wazzup)?;

        let mut decls = Vec::new();
        while self.check_keyword(KeywordId::IHasA) {
            let start = self.current_span();
            let decl = self.var_decl()?;
            decls.push(Spanned::new(decl, start.merge(self.prev_span())));
        }

        if !self.check_keyword(KeywordId::Buhbye) {
            return Err(self.syntax_error(format!(
                "keyword '{}' or a variable declaration",
                keywords::as_str(KeywordId::Buhbye)
            )));
        }
        self.advance();
        Ok(decls)
    }

    // ========================================================================
    // Statements
    // ========================================================================

    /// Parse a statement sequence until one of `stop`, `KTHXBYE`, or end of
    /// input. The stopping token is left for the caller to consume.
    fn statements(&mut self, stop: &[KeywordId]) -> Result<Block, FrontendError> {
        let mut stmts = Vec::new();
        while !self.is_at_end()
            && !self.check_keyword(KeywordId::Kthxbye)
            && !stop.iter().any(|&k| self.check_keyword(k))
        {
            stmts.push(self.statement()?);
        }
        Ok(stmts)
    }

    /// Dispatch on the leading token: exactly one production per statement
    /// kind. Any other leading token is a syntax error naming the token.
    fn statement(&mut self) -> Result<Spanned<Statement>, FrontendError> {
        let start = self.current_span();

        let stmt = match &self.peek().kind {
            TokenKind::Keyword(KeywordId::IHasA) => Statement::Declare(self.var_decl()?),
            TokenKind::Keyword(KeywordId::Visible) => self.print_stmt()?,
            TokenKind::Keyword(KeywordId::Gimmeh) => self.input_stmt()?,
            TokenKind::Keyword(KeywordId::ORly) => self.if_stmt()?,
            TokenKind::Keyword(KeywordId::Wtf) => self.switch_stmt()?,
            TokenKind::Keyword(KeywordId::ImInYr) => self.loop_stmt()?,
            TokenKind::Ident(_) => {
                // An identifier starts an assignment only when followed by
                // `R` or `IS NOW A`; otherwise it is a bare expression
                // statement.
                if matches!(
                    self.peek_next().kind,
                    TokenKind::Keyword(KeywordId::R) | TokenKind::Keyword(KeywordId::IsNowA)
                ) {
                    self.assignment_stmt()?
                } else {
                    Statement::Expr(self.value_or_expression()?)
                }
            }
            _ => return Err(self.syntax_error("a statement")),
        };

        Ok(Spanned::new(stmt, start.merge(self.prev_span())))
    }

    /// `I HAS A <ident> [ITZ <value-or-expression>]`.
    ///
    /// An omitted initializer records the variable as uninitialized
    /// (`init: None`); no sentinel literal is fabricated.
    fn var_decl(&mut self) -> Result<VarDecl, FrontendError> {
        self.expect_keyword(KeywordId::IHasA)?;
        let name = self.identifier()?;

        let init = if self.match_keyword(KeywordId::Itz) {
            Some(self.value_or_expression()?)
        } else {
            None
        };

        Ok(VarDecl { name, init })
    }

    /// `<ident> R <value-or-expression>` | `<ident> R MAEK <ident> [A] <type>`
    /// | `<ident> IS NOW A <type>`.
    fn assignment_stmt(&mut self) -> Result<Statement, FrontendError> {
        let name = self.identifier()?;

        if self.match_keyword(KeywordId::R) {
            let value = if self.check_keyword(KeywordId::Maek) {
                AssignValue::Cast(self.cast_expr()?)
            } else {
                AssignValue::Expr(self.value_or_expression()?)
            };
            Ok(Statement::Assign(AssignStmt { name, value }))
        } else {
            // `IS NOW A` changes only the declared type tag; no value is
            // parsed or recorded.
            self.expect_keyword(KeywordId::IsNowA)?;
            let target_type = self.type_name()?;
            Ok(Statement::Retype(RetypeStmt { name, target_type }))
        }
    }

    /// `MAEK <ident> [A] <type>`.
    fn cast_expr(&mut self) -> Result<CastExpr, FrontendError> {
        self.expect_keyword(KeywordId::Maek)?;
        let source = self.identifier()?;
        self.match_keyword(KeywordId::A);
        let target_type = self.type_name()?;
        Ok(CastExpr { source, target_type })
    }

    /// `VISIBLE <operand> ((+ | AN) <operand>)*`.
    fn print_stmt(&mut self) -> Result<Statement, FrontendError> {
        self.expect_keyword(KeywordId::Visible)?;

        let mut operands = vec![self.value_or_expression()?];
        while self.match_plus() || self.match_keyword(KeywordId::An) {
            operands.push(self.value_or_expression()?);
        }

        Ok(Statement::Print(PrintStmt { operands }))
    }

    /// `GIMMEH <ident>`.
    fn input_stmt(&mut self) -> Result<Statement, FrontendError> {
        self.expect_keyword(KeywordId::Gimmeh)?;
        let target = self.identifier()?;
        Ok(Statement::Input(InputStmt { target }))
    }

    /// `O RLY? YA RLY <block> (MEBBE <expr> <block>)* [NO WAI <block>] OIC`.
    fn if_stmt(&mut self) -> Result<Statement, FrontendError> {
        self.expect_keyword(KeywordId::ORly)?;

        self.expect_keyword(KeywordId::YaRly)?;
        let then_block = self.statements(&[KeywordId::Mebbe, KeywordId::NoWai, KeywordId::Oic])?;

        let mut mebbe_branches = Vec::new();
        while self.match_keyword(KeywordId::Mebbe) {
            let condition = self.value_or_expression()?;
            let block = self.statements(&[KeywordId::Mebbe, KeywordId::NoWai, KeywordId::Oic])?;
            mebbe_branches.push(MebbeBranch { condition, block });
        }

        let else_block = if self.match_keyword(KeywordId::NoWai) {
            Some(self.statements(&[KeywordId::Oic])?)
        } else {
            None
        };

        self.expect_keyword(KeywordId::Oic)?;

        Ok(Statement::If(IfStmt {
            then_block,
            mebbe_branches,
            else_block,
        }))
    }

    /// `WTF? (OMG <literal> <block> [GTFO])* [OMGWTF <block>] OIC`.
    fn switch_stmt(&mut self) -> Result<Statement, FrontendError> {
        self.expect_keyword(KeywordId::Wtf)?;

        let mut arms = Vec::new();
        while self.match_keyword(KeywordId::Omg) {
            let literal = self.case_literal()?;
            let block = self.statements(&[
                KeywordId::Gtfo,
                KeywordId::Omg,
                KeywordId::Omgwtf,
                KeywordId::Oic,
            ])?;
            let breaks = self.match_keyword(KeywordId::Gtfo);
            arms.push(SwitchArm { literal, block, breaks });
        }

        let default_block = if self.match_keyword(KeywordId::Omgwtf) {
            Some(self.statements(&[KeywordId::Oic])?)
        } else {
            None
        };

        self.expect_keyword(KeywordId::Oic)?;

        Ok(Statement::Switch(SwitchStmt { arms, default_block }))
    }

    /// A case arm's value must be one of the recognized literal kinds.
    fn case_literal(&mut self) -> Result<Spanned<Literal>, FrontendError> {
        let span = self.current_span();
        let literal = match &self.peek().kind {
            TokenKind::Numbr(v) => Literal::Numbr(*v),
            TokenKind::Numbar(v) => Literal::Numbar(*v),
            TokenKind::Yarn(s) => Literal::Yarn(s.clone()),
            TokenKind::Troof(b) => Literal::Troof(*b),
            _ => return Err(self.syntax_error("a literal case value")),
        };
        self.advance();
        Ok(Spanned::new(literal, span))
    }

    /// `IM IN YR <label> <block> IM OUTTA YR <label>`.
    ///
    /// The closing label is checked equal to the opening label: a mismatch
    /// is a syntax error naming both, not a silently accepted shape.
    fn loop_stmt(&mut self) -> Result<Statement, FrontendError> {
        self.expect_keyword(KeywordId::ImInYr)?;
        let label = self.identifier()?;

        let body = self.statements(&[KeywordId::ImOuttaYr])?;
        self.expect_keyword(KeywordId::ImOuttaYr)?;

        let close_tok = self.peek();
        let (close_line, close_column, close_span) = (close_tok.line, close_tok.column, close_tok.span);
        let close_label = self.identifier()?;

        if close_label != label {
            return Err(FrontendError::syntax(
                format!("loop label '{}'", label),
                format!("label '{}'", close_label),
                close_line,
                close_column,
                close_span,
            ));
        }

        Ok(Statement::Loop(LoopStmt { label, body }))
    }
}
