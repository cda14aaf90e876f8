/// Statement dispatch and statement forms.
///
/// A statement is recognized from its lookahead term alone: a brace group, a keyword
/// (`while`, `if`, `for`, `function`, `var`/`let`/`const`), `;`, or anything else as an
/// expression statement. Each form validates all of its required sub-terms before it
/// produces a node.
impl<'c> Enforester<'c> {
    // ========================================================================
    // Sequences
    // ========================================================================

    /// Enforest statements until the sequence is exhausted.
    fn statements(&self, stream: &mut TermStream) -> Result<Vec<Spanned<Statement>>, SyntaxError> {
        let mut statements = Vec::new();
        while !stream.is_empty() {
            statements.push(self.statement(stream)?);
        }
        Ok(statements)
    }

    fn statement(&self, stream: &mut TermStream) -> Result<Spanned<Statement>, SyntaxError> {
        let lookahead = stream.peek();
        if stream.is_empty() {
            return Err(SyntaxError::structural("statement", "end of input", stream.here()));
        }

        if term::is_brace(lookahead) {
            return self.block_statement(stream);
        }
        if let Some(span) = self.eat_punct(stream, PunctuationId::Semicolon) {
            return Ok(Spanned::new(Statement::Empty, span));
        }

        match stream.peek().and_then(Term::as_token).and_then(Token::keyword_id) {
            Some(KeywordId::While) => self.while_statement(stream),
            Some(KeywordId::If) => self.if_statement(stream),
            Some(KeywordId::For) => self.for_statement(stream),
            Some(KeywordId::Function) => self.function_declaration(stream),
            Some(KeywordId::Var | KeywordId::Let | KeywordId::Const) => self.variable_statement(stream),
            Some(id @ (KeywordId::Do | KeywordId::Return | KeywordId::Break | KeywordId::Continue)) => Err(
                SyntaxError::not_implemented(format!("`{}` statement", keywords::as_str(id)), stream.here()),
            ),
            _ => self.expression_statement(stream),
        }
    }

    // ========================================================================
    // Blocks
    // ========================================================================

    fn block_statement(&self, stream: &mut TermStream) -> Result<Spanned<Statement>, SyntaxError> {
        let group = self.expect_group(stream, Delimiter::Brace, "to open a block")?;
        let span = group.open.merge(group.close);
        let block = self.block_body(stream, group)?;
        Ok(Spanned::new(Statement::Block(block), span))
    }

    /// Enforest each statement of a brace group's inner sequence.
    fn block_body(&self, parent: &TermStream, group: Group) -> Result<Block, SyntaxError> {
        let mut inner = self.enter(parent, group)?;
        let statements = self.statements(&mut inner)?;
        Ok(Block { statements })
    }

    // ========================================================================
    // Control flow
    // ========================================================================

    /// `while (test) body`
    fn while_statement(&self, stream: &mut TermStream) -> Result<Spanned<Statement>, SyntaxError> {
        let start = stream.here();
        stream.advance();

        let group = self.expect_group(stream, Delimiter::Paren, "after `while`")?;
        let test = self.paren_expression(stream, group)?;
        let body = self.nested_statement(stream)?;

        let span = start.merge(body.span);
        Ok(Spanned::new(
            Statement::While(WhileStatement {
                test,
                body: Box::new(body),
            }),
            span,
        ))
    }

    /// `if (test) consequent [else alternate]`
    fn if_statement(&self, stream: &mut TermStream) -> Result<Spanned<Statement>, SyntaxError> {
        let start = stream.here();
        stream.advance();

        let group = self.expect_group(stream, Delimiter::Paren, "after `if`")?;
        let test = self.paren_expression(stream, group)?;
        let consequent = self.nested_statement(stream)?;

        let mut span = start.merge(consequent.span);
        let alternate = if self.eat_keyword(stream, KeywordId::Else).is_some() {
            let alternate = self.nested_statement(stream)?;
            span = span.merge(alternate.span);
            Some(Box::new(alternate))
        } else {
            None
        };

        Ok(Spanned::new(
            Statement::If(IfStatement {
                test,
                consequent: Box::new(consequent),
                alternate,
            }),
            span,
        ))
    }

    /// `for (init; test; update) body`, every clause optional.
    ///
    /// The head's first term picks the init shape: `;` (absent), a declaration keyword, or an expression.
    fn for_statement(&self, stream: &mut TermStream) -> Result<Spanned<Statement>, SyntaxError> {
        let start = stream.here();
        stream.advance();

        let group = self.expect_group(stream, Delimiter::Paren, "after `for`")?;
        let mut head = self.enter(stream, group)?;

        let init = if self.eat_punct(&mut head, PunctuationId::Semicolon).is_some() {
            None
        } else {
            let init = if is_declaration_keyword(head.peek()) {
                ForInit::VariableDeclaration(self.variable_declaration(&mut head)?)
            } else {
                self.reject_for_in_of(&head, head.peek_nth(1))?;
                ForInit::Expression(self.expression(&mut head)?)
            };
            self.reject_for_in_of(&head, head.peek())?;
            self.expect_punct(&mut head, PunctuationId::Semicolon, "after the loop initializer")?;
            Some(init)
        };

        let test = if self.eat_punct(&mut head, PunctuationId::Semicolon).is_some() {
            None
        } else {
            let test = self.expression(&mut head)?;
            self.expect_punct(&mut head, PunctuationId::Semicolon, "after the loop condition")?;
            Some(test)
        };

        let update = if head.is_empty() {
            None
        } else {
            let update = self.expression(&mut head)?;
            self.expect_end(&head, "`)` after the loop update")?;
            Some(update)
        };

        let body = self.nested_statement(stream)?;
        let span = start.merge(body.span);
        Ok(Spanned::new(
            Statement::For(ForStatement {
                init,
                test,
                update,
                body: Box::new(body),
            }),
            span,
        ))
    }

    /// `in` / `of` where a classic loop head continues marks a for-in/for-of loop.
    fn reject_for_in_of(&self, head: &TermStream, at: Option<&Term>) -> Result<(), SyntaxError> {
        if term::is_keyword_id(at, KeywordId::In) || term::is_identifier_named(at, "of") {
            return Err(SyntaxError::not_implemented("for-in/for-of loop", head.here()));
        }
        Ok(())
    }

    // ========================================================================
    // Declarations
    // ========================================================================

    /// `function name(params) { body }`
    fn function_declaration(&self, stream: &mut TermStream) -> Result<Spanned<Statement>, SyntaxError> {
        let start = stream.here();
        stream.advance();

        let name = self.binding_identifier(stream)?;
        let params_group = self.expect_group(stream, Delimiter::Paren, "after the function name")?;
        let params = self.formal_parameters(stream, params_group)?;
        let body_group = self.expect_group(stream, Delimiter::Brace, "for the function body")?;
        let span = start.merge(body_group.close);
        let body = self.block_body(stream, body_group)?;

        Ok(Spanned::new(
            Statement::FunctionDeclaration(FunctionDeclaration { name, params, body }),
            span,
        ))
    }

    /// `var|let|const declarator, ... [;]`
    fn variable_statement(&self, stream: &mut TermStream) -> Result<Spanned<Statement>, SyntaxError> {
        let declaration = self.variable_declaration(stream)?;
        let mut span = declaration.span;
        if let Some(semi) = self.eat_punct(stream, PunctuationId::Semicolon) {
            span = span.merge(semi);
        }
        Ok(Spanned::new(Statement::VariableDeclaration(declaration.node), span))
    }

    /// Declaration keyword plus one or more comma-separated declarators (no trailing `;`).
    fn variable_declaration(&self, stream: &mut TermStream) -> Result<Spanned<VariableDeclaration>, SyntaxError> {
        let start = stream.here();
        let kind = match stream.peek().and_then(Term::as_token).and_then(Token::keyword_id) {
            Some(KeywordId::Var) => VariableKind::Var,
            Some(KeywordId::Let) => VariableKind::Let,
            Some(KeywordId::Const) => VariableKind::Const,
            _ => {
                return Err(SyntaxError::structural(
                    "`var`, `let`, or `const`",
                    term::describe(stream.peek()),
                    start,
                ));
            }
        };
        stream.advance();

        let mut declarators = Vec::new();
        let mut span = start;
        loop {
            let binding = self.binding_identifier(stream)?;
            let init = match self.eat_default_marker(stream) {
                Some(eq) => Some(self.assignment_expression(stream, Some(("=", eq)))?),
                None => None,
            };
            let declarator_span = init
                .as_ref()
                .map_or(binding.span, |init| binding.span.merge(init.span));
            span = span.merge(declarator_span);
            declarators.push(Spanned::new(VariableDeclarator { binding, init }, declarator_span));

            if self.eat_punct(stream, PunctuationId::Comma).is_none() {
                break;
            }
        }

        Ok(Spanned::new(VariableDeclaration { kind, declarators }, span))
    }

    // ========================================================================
    // Expression statements
    // ========================================================================

    fn expression_statement(&self, stream: &mut TermStream) -> Result<Spanned<Statement>, SyntaxError> {
        let expr = self.expression(stream)?;
        let mut span = expr.span;
        if let Some(semi) = self.eat_punct(stream, PunctuationId::Semicolon) {
            span = span.merge(semi);
        }
        Ok(Spanned::new(Statement::Expression(expr), span))
    }
}

fn is_declaration_keyword(term: Option<&Term>) -> bool {
    term::is_keyword_id(term, KeywordId::Var)
        || term::is_keyword_id(term, KeywordId::Let)
        || term::is_keyword_id(term, KeywordId::Const)
}
