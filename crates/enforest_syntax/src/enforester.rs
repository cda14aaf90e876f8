//! Enforester: turns a term sequence into statements and expressions.
//!
//! Statements are recognized from their leading term with one term of lookahead and no backtracking. Expressions
//! are reduced by precedence climbing over an explicit stack of reduction frames. Whenever a form needs the
//! contents of a delimiter group, the enforester runs again over that group's inner sequence with a fresh cursor.
//!
//! ## Examples
//!
//! ```rust
//! use enforest_syntax::{config::EnforestConfig, enforester, lexer, reader};
//!
//! let terms = reader::read(lexer::lex("var x = 1 + 2 * 3;").unwrap()).unwrap();
//! let program = enforester::enforest(terms, &EnforestConfig::default()).unwrap();
//! assert_eq!(program.to_string(), "(var (x (+ 1 (* 2 3))))");
//! ```

use std::collections::VecDeque;

use crate::ast::*;
use crate::config::EnforestConfig;
use crate::diagnostics::SyntaxError;
use crate::lexer::{Token, TokenKind};
use crate::term::{self, Delimiter, Group, Term};
use enforest_core::lang::keywords::{self, KeywordCategory, KeywordId};
use enforest_core::lang::operators::{self as registry, OperatorId};
use enforest_core::lang::punctuation::{self, PunctuationId};

// NOTE: This module is split across multiple files using `include!` to keep all enforester
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("enforester/core.rs");
include!("enforester/helpers.rs");
include!("enforester/stmts.rs");
include!("enforester/bindings.rs");
include!("enforester/expr.rs");
include!("enforester/api.rs");
include!("enforester/tests.rs");
