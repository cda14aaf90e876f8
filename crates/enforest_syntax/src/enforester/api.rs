impl<'c> Enforester<'c> {
    /// Enforest every statement of a top-level sequence.
    pub fn enforest_program(&self, terms: Vec<Term>) -> Result<Program, SyntaxError> {
        let mut stream = TermStream::new(terms);
        let statements = self.statements(&mut stream)?;
        Ok(Program { statements })
    }

    /// Enforest exactly one statement from the front of `stream`, leaving the rest in place.
    pub fn enforest_statement(&self, stream: &mut TermStream) -> Result<Spanned<Statement>, SyntaxError> {
        self.statement(stream)
    }

    /// Enforest exactly one expression (including `,`-sequences) from the front of `stream`.
    pub fn enforest_expression(&self, stream: &mut TermStream) -> Result<Spanned<Expr>, SyntaxError> {
        if stream.is_empty() {
            return Err(SyntaxError::structural("expression", "end of input", stream.here()));
        }
        self.expression(stream)
    }
}

/// Enforest a term sequence into a [`Program`].
///
/// This is the main public entrypoint for enforestation.
///
/// ## Parameters
/// - `terms`: Term sequence produced by [`crate::reader::read`].
/// - `config`: Operator table and nesting limit.
///
/// ## Errors
/// Returns the first [`SyntaxError`]; there is no recovery and no partial result.
#[tracing::instrument(skip_all, fields(term_count = terms.len()))]
pub fn enforest(terms: Vec<Term>, config: &EnforestConfig) -> Result<Program, SyntaxError> {
    Enforester::new(config)
        .enforest_program(terms)
        .inspect_err(|err| tracing::debug!(error = %err, "enforest failed"))
}

/// Enforest one statement and return it with the unconsumed terms.
#[tracing::instrument(skip_all, fields(term_count = terms.len()))]
pub fn enforest_statement(
    terms: Vec<Term>,
    config: &EnforestConfig,
) -> Result<(Spanned<Statement>, Vec<Term>), SyntaxError> {
    let mut stream = TermStream::new(terms);
    let statement = Enforester::new(config)
        .enforest_statement(&mut stream)
        .inspect_err(|err| tracing::debug!(error = %err, "enforest_statement failed"))?;
    Ok((statement, stream.into_remaining()))
}

/// Enforest one expression and return it with the unconsumed terms.
///
/// The expression stops at the first term that cannot extend it, e.g. a `;`.
#[tracing::instrument(skip_all, fields(term_count = terms.len()))]
pub fn enforest_expression(terms: Vec<Term>, config: &EnforestConfig) -> Result<(Spanned<Expr>, Vec<Term>), SyntaxError> {
    let mut stream = TermStream::new(terms);
    let expr = Enforester::new(config)
        .enforest_expression(&mut stream)
        .inspect_err(|err| tracing::debug!(error = %err, "enforest_expression failed"))?;
    Ok((expr, stream.into_remaining()))
}
