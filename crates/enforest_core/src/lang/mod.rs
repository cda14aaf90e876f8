//! Language vocabulary registries.
//!
//! This module is the “front door” for language-level vocabulary: reserved keywords, operators, and punctuation.
//!
//! The design goal is to avoid stringly-typed checks scattered across the scanner and enforester.
//! Instead, callers work with **stable IDs** (e.g. `KeywordId`, `OperatorId`) and look up
//! spellings/metadata via registry tables.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no term types, no IO, no side effects.
//! - The scanner/reader/enforester enforce syntax; registries provide spellings and metadata for shared use
//!   (diagnostics, operator configuration, tests).
//!
//! ## Examples
//! ```rust
//! use enforest_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("while"), Some(KeywordId::While));
//! assert_eq!(keywords::as_str(KeywordId::While), "while");
//! ```

pub mod keywords;
pub mod operators;
pub mod punctuation;
