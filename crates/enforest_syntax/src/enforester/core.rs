/// Enforester core types.
///
/// This chunk defines the term cursor ([`TermStream`]), the [`Enforester`] itself, and the
/// reduction-frame types used by the expression engine.
///
/// ## Notes
/// - This file is `include!`'d into `crate::enforester` to keep all enforester methods in a
///   single module while avoiding a single “god file”.
/// - The enforester holds only its configuration. Cursor, frame stack, and the pending operand are
///   per-call values, so every method is re-entrant.

/// Cursor over a term sequence. Consuming a term is destructive and is the only way to move.
#[derive(Debug, Clone, PartialEq)]
pub struct TermStream {
    terms: VecDeque<Term>,
    /// Number of enclosing groups/statements.
    depth: usize,
    /// Where "end of input" is reported: the closing delimiter of the enclosing group, or the end of the last term.
    end: Span,
}

impl TermStream {
    /// Cursor over a top-level sequence.
    pub fn new(terms: Vec<Term>) -> Self {
        let end = terms
            .last()
            .map(|t| Span::new(t.span().end, t.span().end))
            .unwrap_or_default();
        Self {
            terms: terms.into(),
            depth: 0,
            end,
        }
    }

    fn nested(terms: Vec<Term>, depth: usize, end: Span) -> Self {
        Self {
            terms: terms.into(),
            depth,
            end,
        }
    }

    /// Look `n` terms ahead without consuming.
    pub fn peek_nth(&self, n: usize) -> Option<&Term> {
        self.terms.get(n)
    }

    pub fn peek(&self) -> Option<&Term> {
        self.peek_nth(0)
    }

    /// Consume the next term.
    pub fn advance(&mut self) -> Option<Term> {
        self.terms.pop_front()
    }

    /// `true` when no terms remain (a trailing end-of-stream leaf counts as nothing).
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty() || (self.terms.len() == 1 && term::is_eos(self.peek()))
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Span of the lookahead, or the end position when the stream is exhausted.
    pub fn here(&self) -> Span {
        self.peek().map(Term::span).unwrap_or(self.end)
    }

    /// Return the unconsumed terms.
    pub fn into_remaining(self) -> Vec<Term> {
        self.terms.into()
    }

    /// Consume the next term if it is a leaf.
    fn next_token(&mut self) -> Option<Token> {
        match self.peek() {
            Some(Term::Leaf(_)) => match self.advance() {
                Some(Term::Leaf(token)) => Some(token),
                _ => None,
            },
            _ => None,
        }
    }

    /// Consume the next term if it is a group of the given kind.
    fn next_group(&mut self, delimiter: Delimiter) -> Option<Group> {
        if !term::is_group(self.peek(), delimiter) {
            return None;
        }
        match self.advance() {
            Some(Term::Group(group)) => Some(group),
            _ => None,
        }
    }
}

/// Statement and expression recognizer.
///
/// ## Notes
/// - Construct one per configuration; it can be reused across any number of sequences.
#[derive(Debug, Clone, Copy)]
pub struct Enforester<'c> {
    config: &'c EnforestConfig,
}

impl<'c> Enforester<'c> {
    pub fn new(config: &'c EnforestConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &'c EnforestConfig {
        self.config
    }
}

/// An expression together with the height of its tree (0 for a leaf).
#[derive(Debug)]
struct Operand {
    expr: Spanned<Expr>,
    height: usize,
}

impl Operand {
    fn leaf(expr: Spanned<Expr>) -> Self {
        Self { expr, height: 0 }
    }
}

/// Combination step of a reduction frame, applied once its operand is known.
#[derive(Debug)]
enum Combine {
    /// The sentinel: the operand is the result.
    Identity,
    /// Wrap the operand in a unary expression.
    Unary { operator: OperatorId, span: Span },
    /// Use the operand as the right side of a binary expression.
    Binary {
        left: Operand,
        operator: OperatorId,
        span: Span,
    },
}

/// One entry of the expression engine's stack.
#[derive(Debug)]
struct ReductionFrame {
    precedence: u8,
    combine: Combine,
}

impl ReductionFrame {
    fn sentinel() -> Self {
        Self {
            precedence: 0,
            combine: Combine::Identity,
        }
    }

    /// The operator this frame applies and where it was written; `None` for the sentinel.
    fn operator(&self) -> Option<(OperatorId, Span)> {
        match &self.combine {
            Combine::Identity => None,
            Combine::Unary { operator, span } | Combine::Binary { operator, span, .. } => Some((*operator, *span)),
        }
    }

    /// Apply the combination step to a completed operand.
    fn apply(self, operand: Operand) -> Operand {
        match self.combine {
            Combine::Identity => operand,
            Combine::Unary { operator, span } => {
                let span = span.merge(operand.expr.span);
                Operand {
                    height: operand.height + 1,
                    expr: Spanned::new(
                        Expr::Unary {
                            operator,
                            operand: Box::new(operand.expr),
                        },
                        span,
                    ),
                }
            }
            Combine::Binary { left, operator, .. } => {
                let span = left.expr.span.merge(operand.expr.span);
                Operand {
                    height: left.height.max(operand.height) + 1,
                    expr: Spanned::new(
                        Expr::Binary {
                            left: Box::new(left.expr),
                            operator,
                            right: Box::new(operand.expr),
                        },
                        span,
                    ),
                }
            }
        }
    }

    /// Error for a frame that never received its operand.
    fn missing_operand(&self, found: Option<&Term>, here: Span) -> SyntaxError {
        match &self.combine {
            Combine::Identity => SyntaxError::structural("expression", term::describe(found), here),
            Combine::Unary { operator, span } => SyntaxError::expression(
                format!(
                    "operator `{}` is missing its operand, found {}",
                    registry::as_str(*operator),
                    term::describe(found)
                ),
                *span,
            ),
            Combine::Binary { operator, span, .. } => SyntaxError::expression(
                format!(
                    "operator `{}` is missing its right operand, found {}",
                    registry::as_str(*operator),
                    term::describe(found)
                ),
                *span,
            ),
        }
    }
}
