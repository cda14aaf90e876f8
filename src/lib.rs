#![forbid(unsafe_code)]
//! Enforestation front end.
//!
//! Turns source text into statements and expressions in three stages: the scanner classifies characters into
//! tokens, the reader matches delimiters into a term tree, and the enforester recognizes statement forms and reduces
//! expressions by precedence climbing, re-entering itself on every nested group.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//! - **True invariants**: If a panic represents an engine bug (logic error), use `.expect("INVARIANT: reason")` with a
//!   clear explanation.
//!
//! ## Examples
//! ```rust
//! let program = enforest::parse_source("var x = 1 + 2 * 3;").unwrap();
//! assert_eq!(program.to_string(), "(var (x (+ 1 (* 2 3))))");
//! ```

pub mod frontend;
pub mod version;

pub use frontend::{ast, config, diagnostics, enforester, lexer, operators, reader, term};
pub use frontend::{parse_source, parse_source_with_config, read_source};

pub use enforest_core::lang;
