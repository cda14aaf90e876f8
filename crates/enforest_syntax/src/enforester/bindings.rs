/// Binding targets and formal-parameter lists.
///
/// ## Notes
/// - Only simple bindings are recognized: an identifier, or a keyword used as an identifier. Bracket and brace groups in binding position are
///   destructuring patterns and raise `NotImplemented`.
impl<'c> Enforester<'c> {
    fn binding_identifier(&self, stream: &mut TermStream) -> Result<Spanned<BindingIdentifier>, SyntaxError> {
        let lookahead = stream.peek();
        if term::is_bracket(lookahead) || term::is_brace(lookahead) {
            return Err(SyntaxError::not_implemented(
                "destructuring binding pattern",
                stream.here(),
            ));
        }

        match stream.next_token() {
            Some(Token {
                kind: TokenKind::Ident(name),
                span,
            }) => Ok(Spanned::new(BindingIdentifier { name }, span)),
            // Keywords name bindings by their spelling (`var let`, `function delete()`).
            Some(Token {
                kind: TokenKind::Keyword(id),
                span,
            }) => Ok(Spanned::new(
                BindingIdentifier {
                    name: keywords::as_str(id).to_string(),
                },
                span,
            )),
            Some(token) => Err(SyntaxError::structural(
                "binding identifier",
                token.kind.to_string(),
                token.span,
            )),
            None => Err(SyntaxError::structural(
                "binding identifier",
                term::describe(stream.peek()),
                stream.here(),
            )),
        }
    }

    /// Consume the `=` that introduces an initializer or default value.
    fn eat_default_marker(&self, stream: &mut TermStream) -> Option<Span> {
        if self.config.operators.operator_of(stream.peek()) == Some(OperatorId::Eq) {
            stream.advance().map(|t| t.span())
        } else {
            None
        }
    }

    /// `name` or `name = default`
    fn binding_element(&self, stream: &mut TermStream) -> Result<Spanned<BindingElement>, SyntaxError> {
        let binding = self.binding_identifier(stream)?;
        match self.eat_default_marker(stream) {
            Some(eq) => {
                let init = self.assignment_expression(stream, Some(("=", eq)))?;
                let span = binding.span.merge(init.span);
                Ok(Spanned::new(BindingElement::WithDefault { binding, init }, span))
            }
            None => Ok(Spanned::new(BindingElement::Identifier(binding.node), binding.span)),
        }
    }

    /// Comma-separated binding elements with an optional trailing `...rest`.
    fn formal_parameters(&self, parent: &TermStream, group: Group) -> Result<FormalParameters, SyntaxError> {
        let mut inner = self.enter(parent, group)?;
        let mut params = FormalParameters::default();

        while !inner.is_empty() {
            if let Some(ellipsis) = self.eat_punct(&mut inner, PunctuationId::Ellipsis) {
                let binding = self.binding_identifier(&mut inner)?;
                let span = ellipsis.merge(binding.span);
                params.rest = Some(Spanned::new(binding.node, span));
                self.expect_end(&inner, "`)` after the rest parameter")?;
                break;
            }

            params.items.push(self.binding_element(&mut inner)?);
            if inner.is_empty() {
                break;
            }
            self.expect_punct(&mut inner, PunctuationId::Comma, "between parameters")?;
        }

        Ok(params)
    }
}
