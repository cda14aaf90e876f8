//! Reader: groups a flat token stream into a tree of terms.
//!
//! The reader matches nested delimiters with an explicit stack of open frames rather than call recursion, so
//! arbitrarily deep nesting cannot exhaust the call stack. Template literals are folded into a single
//! [`TokenKind::Template`] leaf whose elements alternate fragment leaves and brace groups.
//!
//! ## Notes
//! - A closer is accepted only if it matches the innermost open delimiter (strict nesting).
//! - The stream ends at the first `Eof` token; a stream without one is treated as if it ended with one.
//! - Errors carry the offending token's span, or the last consumed token's span at end of input.

use crate::ast::Span;
use crate::diagnostics::SyntaxError;
use crate::lexer::{Token, TokenKind};
use crate::term::{Delimiter, Group, Term};
use enforest_core::lang::punctuation::{self, PunctuationId};

/// An open construct awaiting its end.
#[derive(Debug)]
enum Frame {
    Group {
        delimiter: Delimiter,
        open: Span,
        inner: Vec<Term>,
    },
    /// A template literal between its first fragment and its tail fragment.
    Template { start: Span, elements: Vec<Term> },
}

#[derive(Debug, Default)]
struct Reader {
    frames: Vec<Frame>,
    output: Vec<Term>,
    /// Span of the last consumed token.
    last: Span,
}

/// Group a token stream into a term sequence.
///
/// ## Errors
/// - `Structural`: a closer with nothing open, a closer that does not match the innermost opener, or end of
///   input with delimiters still open.
/// - `Lexical`: a template literal whose fragments and interpolations do not alternate, or that never ends.
#[tracing::instrument(skip_all)]
pub fn read(tokens: impl IntoIterator<Item = Token>) -> Result<Vec<Term>, SyntaxError> {
    let result = Reader::default().run(tokens.into_iter());
    if let Err(err) = &result {
        tracing::debug!(kind = %err.kind(), error = %err, "reader rejected token stream");
    }
    result
}

impl Reader {
    fn run(mut self, mut tokens: impl Iterator<Item = Token>) -> Result<Vec<Term>, SyntaxError> {
        loop {
            let token = tokens.next().unwrap_or_else(|| Token::eof(self.last.end));
            if token.is_eof() {
                return self.finish();
            }

            let span = token.span;
            if matches!(self.frames.last(), Some(Frame::Template { .. })) {
                self.template_step(token)?;
            } else {
                self.step(token)?;
            }
            self.last = span;
        }
    }

    /// Handle one token outside a template's own structure.
    fn step(&mut self, token: Token) -> Result<(), SyntaxError> {
        match token.kind {
            TokenKind::Punctuation(id) if punctuation::is_opener(id) => {
                let delimiter = Delimiter::from_opener(id).expect("INVARIANT: registry openers map to a delimiter");
                self.frames.push(Frame::Group {
                    delimiter,
                    open: token.span,
                    inner: Vec::new(),
                });
                Ok(())
            }
            TokenKind::Punctuation(id) if punctuation::is_closer(id) => self.close(id, token),
            TokenKind::TemplateFragment(ref fragment) => {
                if fragment.tail {
                    let span = token.span;
                    self.emit(template_leaf(vec![Term::Leaf(token)], span));
                } else {
                    self.frames.push(Frame::Template {
                        start: token.span,
                        elements: vec![Term::Leaf(token)],
                    });
                }
                Ok(())
            }
            _ => {
                self.emit(Term::Leaf(token));
                Ok(())
            }
        }
    }

    /// Handle the token that follows a template fragment or an interpolation group.
    fn template_step(&mut self, token: Token) -> Result<(), SyntaxError> {
        let Some(Frame::Template { elements, .. }) = self.frames.last_mut() else {
            unreachable!("INVARIANT: template_step requires a template frame on top");
        };
        let expects_interpolation = matches!(elements.last(), Some(Term::Leaf(_)));

        if expects_interpolation {
            if !token.kind.is_punctuation(PunctuationId::LBrace) {
                return Err(SyntaxError::lexical(
                    format!("expected `{{` to open a template interpolation, found {}", token.kind),
                    token.span,
                ));
            }
            self.frames.push(Frame::Group {
                delimiter: Delimiter::Brace,
                open: token.span,
                inner: Vec::new(),
            });
            return Ok(());
        }

        let TokenKind::TemplateFragment(fragment) = &token.kind else {
            return Err(SyntaxError::lexical(
                format!("expected template continuation after interpolation, found {}", token.kind),
                token.span,
            ));
        };
        let tail = fragment.tail;
        elements.push(Term::Leaf(token));

        if tail {
            let Some(Frame::Template { start, elements }) = self.frames.pop() else {
                unreachable!("INVARIANT: a template frame was on top");
            };
            let span = start.merge(self.last_element_span(&elements));
            self.emit(template_leaf(elements, span));
        }
        Ok(())
    }

    fn last_element_span(&self, elements: &[Term]) -> Span {
        elements.last().map(Term::span).unwrap_or(self.last)
    }

    fn close(&mut self, closer: PunctuationId, token: Token) -> Result<(), SyntaxError> {
        match self.frames.pop() {
            Some(Frame::Group {
                delimiter,
                open,
                inner,
            }) if delimiter.closer() == closer => {
                self.emit(Term::Group(Group {
                    delimiter,
                    inner,
                    open,
                    close: token.span,
                }));
                Ok(())
            }
            Some(Frame::Group { delimiter, .. }) => Err(SyntaxError::structural(
                format!("`{}`", punctuation::as_str(delimiter.closer())),
                token.kind.to_string(),
                token.span,
            )),
            Some(Frame::Template { .. }) => unreachable!("INVARIANT: template frames are handled by template_step"),
            None => Err(SyntaxError::structural(
                "end of input",
                format!("unmatched {}", token.kind),
                token.span,
            )),
        }
    }

    /// Append a finished term to the innermost open frame, or to the top-level output.
    fn emit(&mut self, term: Term) {
        match self.frames.last_mut() {
            Some(Frame::Group { inner, .. }) => inner.push(term),
            Some(Frame::Template { elements, .. }) => elements.push(term),
            None => self.output.push(term),
        }
    }

    fn finish(mut self) -> Result<Vec<Term>, SyntaxError> {
        match self.frames.pop() {
            None => Ok(self.output),
            Some(Frame::Group { delimiter, .. }) => Err(SyntaxError::structural(
                format!("`{}`", punctuation::as_str(delimiter.closer())),
                "end of input",
                self.last,
            )),
            Some(Frame::Template { .. }) => Err(SyntaxError::lexical("unterminated template literal", self.last)),
        }
    }
}

fn template_leaf(elements: Vec<Term>, span: Span) -> Term {
    Term::Leaf(Token::new(TokenKind::Template(elements), span))
}
