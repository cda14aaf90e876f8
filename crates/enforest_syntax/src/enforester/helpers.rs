/// Expectation helpers and nesting control.
///
/// This chunk contains the primitives the statement and expression chunks share:
/// - Matching / expecting punctuation, keywords, and groups
/// - Opening a group's inner sequence as a nested [`TermStream`]
/// - Enforcing the configured nesting limit
impl<'c> Enforester<'c> {
    // ========================================================================
    // Matching
    // ========================================================================

    /// If the lookahead is the given punctuation, consume it and return its span.
    fn eat_punct(&self, stream: &mut TermStream, id: PunctuationId) -> Option<Span> {
        if term::is_punctuation(stream.peek(), id) {
            stream.advance().map(|t| t.span())
        } else {
            None
        }
    }

    /// If the lookahead is the given keyword, consume it and return its span.
    fn eat_keyword(&self, stream: &mut TermStream, id: KeywordId) -> Option<Span> {
        if term::is_keyword_id(stream.peek(), id) {
            stream.advance().map(|t| t.span())
        } else {
            None
        }
    }

    fn expect_punct(&self, stream: &mut TermStream, id: PunctuationId, context: &str) -> Result<Span, SyntaxError> {
        self.eat_punct(stream, id).ok_or_else(|| {
            SyntaxError::structural(
                format!("`{}` {}", punctuation::as_str(id), context),
                term::describe(stream.peek()),
                stream.here(),
            )
        })
    }

    /// Require a group of the given kind, e.g. the `(...)` after `while`.
    fn expect_group(&self, stream: &mut TermStream, delimiter: Delimiter, context: &str) -> Result<Group, SyntaxError> {
        match stream.next_group(delimiter) {
            Some(group) => Ok(group),
            None => Err(SyntaxError::structural(
                format!("{} {}", delimiter.label(), context),
                term::describe(stream.peek()),
                stream.here(),
            )),
        }
    }

    /// Require that a nested sequence was fully consumed.
    fn expect_end(&self, stream: &TermStream, context: &str) -> Result<(), SyntaxError> {
        if stream.is_empty() {
            Ok(())
        } else {
            Err(SyntaxError::structural(
                context.to_string(),
                term::describe(stream.peek()),
                stream.here(),
            ))
        }
    }

    // ========================================================================
    // Nesting
    // ========================================================================

    fn nesting_error(&self, found: String, span: Span) -> SyntaxError {
        SyntaxError::structural(
            format!("at most {} levels of nesting", self.config.max_depth),
            found,
            span,
        )
    }

    /// Open a group's inner sequence as a nested cursor one level deeper.
    fn enter(&self, parent: &TermStream, mut group: Group) -> Result<TermStream, SyntaxError> {
        let depth = parent.depth + 1;
        if depth > self.config.max_depth {
            return Err(self.nesting_error(group.delimiter.label(), group.open.merge(group.close)));
        }
        Ok(TermStream::nested(std::mem::take(&mut group.inner), depth, group.close))
    }

    /// Require that an expression node of `height`, built at this stream's depth, stays within the nesting limit.
    ///
    /// `found` names the operator that built the node and `at` is where it was written.
    fn check_height(&self, stream: &TermStream, height: usize, found: &str, at: Span) -> Result<(), SyntaxError> {
        if stream.depth + height > self.config.max_depth {
            return Err(self.nesting_error(found.to_string(), at));
        }
        Ok(())
    }

    /// Enforest one statement nested inside another (a loop or branch body).
    fn nested_statement(&self, stream: &mut TermStream) -> Result<Spanned<Statement>, SyntaxError> {
        if stream.depth + 1 > self.config.max_depth {
            return Err(self.nesting_error(term::describe(stream.peek()), stream.here()));
        }
        stream.depth += 1;
        let result = self.statement(stream);
        stream.depth -= 1;
        result
    }
}
