//! Provide the canonical language vocabulary shared by the enforest scanner, reader, and enforester.
//!
//! This crate is intentionally small and dependency-free. It contains `const` registries only:
//! reserved keywords, punctuation (including the quotation delimiters reserved for syntax extensions),
//! and the operator tables that drive precedence climbing.
//!
//! ## Notes
//!
//! - This is a “vocabulary core” crate: **no IO**, no global mutable state, and no syntax-tree types.
//! - The tables here are the *defaults*. The enforester never reads them directly during reduction; it works from an
//!   explicit operator configuration built from them (see `enforest_syntax::operators::OperatorTable`).

pub mod lang;
