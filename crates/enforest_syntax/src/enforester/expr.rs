/// Expression reduction.
///
/// Layers, loosest first:
/// - `sequence`: `,`-sequences, folded to the left
/// - `assignment`: right-associative assignment over reduced operands
/// - `reduce`: precedence climbing over prefix and infix operators with an explicit frame stack
///
/// ## Notes
/// - Every node records the height of its tree. Stream depth plus height may not exceed `max_depth`, so long
///   operator chains fail with the same nesting error as deep groups instead of building an unbounded spine.
/// - `reduce` never backtracks. Each iteration fires exactly one rule based on the lookahead and
///   whether an operand is pending, and it stops at the first term that cannot extend the expression,
///   leaving that term in the stream.
impl<'c> Enforester<'c> {
    // ========================================================================
    // Sequences and assignment
    // ========================================================================

    fn expression(&self, stream: &mut TermStream) -> Result<Spanned<Expr>, SyntaxError> {
        self.sequence(stream).map(|sequence| sequence.expr)
    }

    fn sequence(&self, stream: &mut TermStream) -> Result<Operand, SyntaxError> {
        let mut left = self.assignment(stream, None)?;
        while let Some(comma) = self.eat_punct(stream, PunctuationId::Comma) {
            let right = self.assignment(stream, Some((",", comma)))?;
            let height = left.height.max(right.height) + 1;
            self.check_height(stream, height, "`,`", comma)?;
            let span = left.expr.span.merge(right.expr.span);
            left = Operand {
                expr: Spanned::new(
                    Expr::Sequence {
                        left: Box::new(left.expr),
                        right: Box::new(right.expr),
                    },
                    span,
                ),
                height,
            };
        }
        Ok(left)
    }

    fn assignment_expression(
        &self,
        stream: &mut TermStream,
        after: Option<(&'static str, Span)>,
    ) -> Result<Spanned<Expr>, SyntaxError> {
        self.assignment(stream, after).map(|assignment| assignment.expr)
    }

    /// `target op value`, right-associative and looser than every binary operator.
    ///
    /// `after` names the operator (spelling and span) whose right operand this is, for error reporting.
    fn assignment(&self, stream: &mut TermStream, after: Option<(&'static str, Span)>) -> Result<Operand, SyntaxError> {
        let ops = &self.config.operators;
        let mut targets = Vec::new();
        let mut value = self.reduce(stream, after)?;

        while let Some(operator) = ops.operator_of(stream.peek()).filter(|&id| ops.is_assignment(id)) {
            let spelling = registry::as_str(operator);
            if !value.expr.node.is_assignment_target() {
                return Err(SyntaxError::expression(
                    format!("invalid assignment target for `{}`", spelling),
                    value.expr.span,
                ));
            }
            let span = stream.here();
            stream.advance();
            targets.push((value, operator, span));
            value = self.reduce(stream, Some((spelling, span)))?;
        }

        while let Some((target, operator, at)) = targets.pop() {
            let height = target.height.max(value.height) + 1;
            self.check_height(stream, height, &format!("operator `{}`", registry::as_str(operator)), at)?;
            let span = target.expr.span.merge(value.expr.span);
            value = Operand {
                expr: Spanned::new(
                    Expr::Assignment {
                        target: Box::new(target.expr),
                        operator,
                        value: Box::new(value.expr),
                    },
                    span,
                ),
                height,
            };
        }
        Ok(value)
    }

    // ========================================================================
    // Reduction engine
    // ========================================================================

    fn reduce(&self, stream: &mut TermStream, after: Option<(&'static str, Span)>) -> Result<Operand, SyntaxError> {
        let ops = &self.config.operators;
        let mut pending: Option<Operand> = None;
        let mut frames = vec![ReductionFrame::sentinel()];

        loop {
            let threshold = frames.last().map_or(0, |f| f.precedence);

            if pending.is_none() {
                // Rules 1 and 2 (plus identifiers and templates): an operand.
                if let Some(operand) = self.operand(stream)? {
                    pending = Some(operand);
                    continue;
                }

                // Rule 3: a prefix operator opens a frame; the next iteration produces its operand.
                let prefix = ops
                    .operator_of(stream.peek())
                    .and_then(|id| ops.prefix(id).map(|descriptor| (id, descriptor)));
                if let Some((operator, descriptor)) = prefix {
                    let span = stream.here();
                    stream.advance();
                    tracing::trace!(
                        operator = registry::as_str(operator),
                        precedence = descriptor.precedence,
                        "push prefix frame"
                    );
                    frames.push(ReductionFrame {
                        precedence: descriptor.precedence,
                        combine: Combine::Unary { operator, span },
                    });
                    continue;
                }
            } else {
                // Rule 4: a binary operator that binds over the top frame takes the pending operand as its left side.
                let infix = ops
                    .operator_of(stream.peek())
                    .and_then(|id| ops.infix(id).map(|descriptor| (id, descriptor)))
                    .filter(|(_, descriptor)| descriptor.binds_over(threshold));
                if let Some((operator, descriptor)) = infix {
                    let left = pending
                        .take()
                        .expect("INVARIANT: an operand is pending in this branch");
                    let span = stream.here();
                    stream.advance();
                    tracing::trace!(
                        operator = registry::as_str(operator),
                        precedence = descriptor.precedence,
                        "push infix frame"
                    );
                    frames.push(ReductionFrame {
                        precedence: descriptor.precedence,
                        combine: Combine::Binary { left, operator, span },
                    });
                    continue;
                }
            }

            // Rule 5: nothing extends the expression here; fold the top frame.
            let frame = frames
                .pop()
                .expect("INVARIANT: the frame stack is non-empty until the sentinel folds");
            let Some(operand) = pending.take() else {
                return Err(self.missing_operand(&frame, stream, after));
            };
            tracing::trace!(precedence = frame.precedence, "fold frame");
            let operator = frame.operator();
            let folded = frame.apply(operand);
            if let Some((operator, span)) = operator {
                let found = format!("operator `{}`", registry::as_str(operator));
                self.check_height(stream, folded.height, &found, span)?;
            }
            if frames.is_empty() {
                return Ok(folded);
            }
            pending = Some(folded);
        }
    }

    fn missing_operand(
        &self,
        frame: &ReductionFrame,
        stream: &TermStream,
        after: Option<(&'static str, Span)>,
    ) -> SyntaxError {
        let ops = &self.config.operators;
        let found = stream.peek();

        if let Combine::Identity = frame.combine {
            if let Some(operator) = ops.operator_of(found).filter(|&id| ops.infix(id).is_some()) {
                return SyntaxError::expression(
                    format!("operator `{}` is missing its left operand", registry::as_str(operator)),
                    stream.here(),
                );
            }
            if let Some((spelling, span)) = after {
                return SyntaxError::expression(
                    format!(
                        "operator `{}` is missing its right operand, found {}",
                        spelling,
                        term::describe(found)
                    ),
                    span,
                );
            }
        }
        frame.missing_operand(found, stream.here())
    }

    // ========================================================================
    // Operands
    // ========================================================================

    /// Consume one operand if the lookahead starts one.
    ///
    /// ## Returns
    /// - `Ok(None)` when the lookahead is not an operand (an operator, punctuation, or end of input).
    fn operand(&self, stream: &mut TermStream) -> Result<Option<Operand>, SyntaxError> {
        let lookahead = stream.peek();
        let span = stream.here();

        if term::is_literal(lookahead) || term::is_identifier(lookahead) || term::is_template(lookahead) {
            return match stream.next_token() {
                Some(token) => self.leaf_operand(stream, token).map(Some),
                None => Ok(None),
            };
        }
        if let Some(group) = stream.next_group(Delimiter::Paren) {
            return self.paren_operand(stream, group).map(Some);
        }

        let lookahead = stream.peek();
        let unsupported = if term::is_bracket(lookahead) {
            Some("array literal".to_string())
        } else if term::is_brace(lookahead) {
            Some("object literal".to_string())
        } else if term::is_quotation(lookahead) {
            Some("syntax quotation".to_string())
        } else {
            lookahead
                .and_then(Term::as_token)
                .and_then(Token::keyword_id)
                .filter(|&id| keywords::category(id) == KeywordCategory::Reserved)
                .map(|id| format!("`{}` expression", keywords::as_str(id)))
        };
        match unsupported {
            Some(feature) => Err(SyntaxError::not_implemented(feature, span)),
            None => Ok(None),
        }
    }

    fn leaf_operand(&self, stream: &TermStream, token: Token) -> Result<Operand, SyntaxError> {
        let span = token.span;
        let expr = match token.kind {
            TokenKind::Number(n) => Expr::Literal(Literal::Number(n)),
            TokenKind::String(s) => Expr::Literal(Literal::String(s)),
            TokenKind::Keyword(KeywordId::True) => Expr::Literal(Literal::Boolean(true)),
            TokenKind::Keyword(KeywordId::False) => Expr::Literal(Literal::Boolean(false)),
            TokenKind::Keyword(KeywordId::Null) => Expr::Literal(Literal::Null),
            TokenKind::Ident(name) => Expr::Identifier(name),
            TokenKind::Template(elements) => return self.template(stream, elements, span),
            other => return Err(SyntaxError::structural("expression", other.to_string(), span)),
        };
        Ok(Operand::leaf(Spanned::new(expr, span)))
    }

    fn paren_expression(&self, parent: &TermStream, group: Group) -> Result<Spanned<Expr>, SyntaxError> {
        self.paren_operand(parent, group).map(|paren| paren.expr)
    }

    /// A parenthesized expression. The parentheses contribute no node; the inner sequence must be consumed.
    fn paren_operand(&self, parent: &TermStream, group: Group) -> Result<Operand, SyntaxError> {
        let mut inner = self.enter(parent, group)?;
        let sequence = self.sequence(&mut inner)?;
        self.expect_end(&inner, "`)`")?;
        Ok(sequence)
    }

    /// Fragments verbatim; each interpolation group enforested as one expression.
    ///
    /// Interpolations sit one group deeper, so the template node itself never exceeds the nesting limit.
    fn template(&self, parent: &TermStream, elements: Vec<Term>, span: Span) -> Result<Operand, SyntaxError> {
        let mut out = Vec::with_capacity(elements.len());
        let mut height = 0;
        for element in elements {
            match element {
                Term::Leaf(Token {
                    kind: TokenKind::TemplateFragment(fragment),
                    ..
                }) => out.push(TemplateElement::Fragment(fragment.value)),
                Term::Group(group) if group.delimiter == Delimiter::Brace => {
                    let mut inner = self.enter(parent, group)?;
                    let interpolation = self.sequence(&mut inner)?;
                    self.expect_end(&inner, "`}` to close the interpolation")?;
                    height = height.max(interpolation.height + 1);
                    out.push(TemplateElement::Interpolation(interpolation.expr));
                }
                other => {
                    return Err(SyntaxError::lexical(
                        format!("unexpected {} inside a template literal", other.describe()),
                        other.span(),
                    ));
                }
            }
        }
        Ok(Operand {
            expr: Spanned::new(Expr::Template(out), span),
            height,
        })
    }
}
