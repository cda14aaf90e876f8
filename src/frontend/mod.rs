//! Source-to-AST pipeline.
//!
//! This module wires the stages of `enforest_syntax` together:
//! - `lexer`: characters to classified tokens (errors are collected)
//! - `reader`: tokens to a delimiter-matched term tree
//! - `enforester`: terms to statements and expressions
//!
//! Every stage after the scanner stops at its first error, so a failed parse yields either all scanner
//! errors or exactly one reader/enforester error.

// Syntax components are provided by the shared enforest_syntax crate.
pub use enforest_syntax::{ast, config, diagnostics, enforester, lexer, operators, reader, term};

use ast::Program;
use config::EnforestConfig;
use diagnostics::SyntaxError;
use term::Term;

/// Lex and read `source` into a term tree.
///
/// ## Errors
/// - All scanner errors, or the single reader error.
pub fn read_source(source: &str) -> Result<Vec<Term>, Vec<SyntaxError>> {
    let tokens = lexer::lex(source)?;
    reader::read(tokens).map_err(|err| vec![err])
}

/// Parse `source` with the standard operator table and nesting limit.
pub fn parse_source(source: &str) -> Result<Program, Vec<SyntaxError>> {
    parse_source_with_config(source, &EnforestConfig::default())
}

/// Parse `source` with a caller-supplied configuration (custom operator table or nesting limit).
#[tracing::instrument(skip_all, fields(source_len = source.len(), max_depth = config.max_depth))]
pub fn parse_source_with_config(source: &str, config: &EnforestConfig) -> Result<Program, Vec<SyntaxError>> {
    let terms = read_source(source)?;
    let program = enforester::enforest(terms, config).map_err(|err| vec![err])?;
    tracing::debug!(statements = program.statements.len(), "parsed source");
    Ok(program)
}
