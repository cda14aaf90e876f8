//! Syntax frontend for the enforest engine: scanner, reader, term model, enforester, AST, diagnostics.
//!
//! The pipeline is `lex → read → enforest`. The reader matches delimiters into a term tree; the enforester
//! recognizes statements and reduces expressions over that tree, re-entering itself on each group it needs.
//!
//! ## Notes
//! - This crate is syntax-only: it does not resolve names or evaluate anything.
//! - Vocabulary identity (keywords/operators/punctuation) comes from `enforest_core::lang` registries.
//!
//! ## Examples
//! ```rust
//! use enforest_syntax::{config::EnforestConfig, enforester, lexer, reader};
//!
//! let tokens = lexer::lex("while (x) x = x - 1;").unwrap();
//! let terms = reader::read(tokens).unwrap();
//! let program = enforester::enforest(terms, &EnforestConfig::default()).unwrap();
//! assert_eq!(program.statements.len(), 1);
//! ```
//!
//! ## See also
//! - `enforest_core::lang` for registry-backed language vocabulary.

pub mod ast;
pub mod config;
pub mod diagnostics;
pub mod enforester;
pub mod lexer;
pub mod operators;
pub mod reader;
pub mod term;
pub mod token_helpers;
