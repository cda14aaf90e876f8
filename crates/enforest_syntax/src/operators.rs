//! Operator tables as an explicit configuration value.
//!
//! [`OperatorTable::standard`] is built from the closed tables in `enforest_core::lang::operators`. Alternate
//! grammars derive their own table with the builder methods and hand it to the enforester through
//! [`crate::config::EnforestConfig`]; nothing here is global or mutable once built.
//!
//! ## Notes
//! - A spelling may be both prefix and infix (`+`, `-`). Which role a concrete occurrence plays is decided by the
//!   enforester: prefix when no operand is pending, infix otherwise.
//! - Word operators (`typeof`, `in`, ...) are keyword tokens; the term queries resolve them too.

use std::collections::{HashMap, HashSet};

use crate::term::Term;
use enforest_core::lang::operators::{self as registry, OperatorId};

pub use enforest_core::lang::operators::{Associativity, PREFIX_PRECEDENCE};

/// Binding strength of one operator role. The role itself is the table that holds the descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorDescriptor {
    /// Higher binds tighter. 0 is reserved for the reduction sentinel.
    pub precedence: u8,
    pub associativity: Associativity,
}

impl OperatorDescriptor {
    /// Return `true` if this operator may open a new reduction frame above a frame of precedence `threshold`.
    ///
    /// Left-associative operators need strictly higher precedence, so equal-precedence chains fold to the left.
    /// Right-associative operators also bind over an equal threshold, so the chain nests to the right.
    pub fn binds_over(&self, threshold: u8) -> bool {
        match self.associativity {
            Associativity::Left => self.precedence > threshold,
            Associativity::Right => self.precedence >= threshold,
        }
    }
}

/// Immutable set of prefix, infix, and assignment operators.
#[derive(Debug, Clone, PartialEq)]
pub struct OperatorTable {
    prefix: HashMap<OperatorId, OperatorDescriptor>,
    infix: HashMap<OperatorId, OperatorDescriptor>,
    assignment: HashSet<OperatorId>,
}

impl Default for OperatorTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl OperatorTable {
    /// The base operator set: every prefix operator at [`PREFIX_PRECEDENCE`], the left-associative binary
    /// precedence map, and the assignment operators.
    pub fn standard() -> Self {
        let prefix = registry::PREFIX_OPERATORS
            .iter()
            .map(|&id| (id, prefix_entry()))
            .collect();
        let infix = registry::INFIX_OPERATORS
            .iter()
            .map(|info| {
                (
                    info.id,
                    OperatorDescriptor {
                        precedence: info.precedence,
                        associativity: info.associativity,
                    },
                )
            })
            .collect();
        let assignment = registry::ASSIGNMENT_OPERATORS.iter().copied().collect();
        Self {
            prefix,
            infix,
            assignment,
        }
    }

    /// A table with no operators at all.
    pub fn empty() -> Self {
        Self {
            prefix: HashMap::new(),
            infix: HashMap::new(),
            assignment: HashSet::new(),
        }
    }

    /// Add (or keep) `id` as a prefix operator.
    pub fn with_prefix(mut self, id: OperatorId) -> Self {
        self.prefix.insert(id, prefix_entry());
        self
    }

    /// Add or replace `id` as an infix operator.
    ///
    /// ## Panics
    /// - If `precedence` is 0 (reserved for the reduction sentinel).
    pub fn with_infix(mut self, id: OperatorId, precedence: u8, associativity: Associativity) -> Self {
        assert!(precedence > 0, "precedence 0 is reserved for the reduction sentinel");
        self.infix.insert(
            id,
            OperatorDescriptor {
                precedence,
                associativity,
            },
        );
        self
    }

    /// Remove `id` from the infix map.
    pub fn without_infix(mut self, id: OperatorId) -> Self {
        self.infix.remove(&id);
        self
    }

    pub fn with_assignment(mut self, id: OperatorId) -> Self {
        self.assignment.insert(id);
        self
    }

    // ------------------------------------------------------------------------
    // Id queries
    // ------------------------------------------------------------------------

    pub fn prefix(&self, id: OperatorId) -> Option<OperatorDescriptor> {
        self.prefix.get(&id).copied()
    }

    pub fn infix(&self, id: OperatorId) -> Option<OperatorDescriptor> {
        self.infix.get(&id).copied()
    }

    pub fn is_assignment(&self, id: OperatorId) -> bool {
        self.assignment.contains(&id)
    }

    // ------------------------------------------------------------------------
    // Term queries
    // ------------------------------------------------------------------------

    /// The operator a leaf term spells, if any (symbol operators and word-operator keywords).
    pub fn operator_of(&self, term: Option<&Term>) -> Option<OperatorId> {
        term.and_then(Term::as_token).and_then(|t| t.operator_id())
    }

    pub fn is_unary_operator(&self, term: Option<&Term>) -> bool {
        self.prefix_descriptor(term).is_some()
    }

    pub fn is_binary_operator(&self, term: Option<&Term>) -> bool {
        self.infix_descriptor(term).is_some()
    }

    pub fn is_assign_operator(&self, term: Option<&Term>) -> bool {
        self.operator_of(term).is_some_and(|id| self.is_assignment(id))
    }

    pub fn prefix_descriptor(&self, term: Option<&Term>) -> Option<OperatorDescriptor> {
        self.operator_of(term).and_then(|id| self.prefix(id))
    }

    pub fn infix_descriptor(&self, term: Option<&Term>) -> Option<OperatorDescriptor> {
        self.operator_of(term).and_then(|id| self.infix(id))
    }

    /// Precedence of an operator term: its binary precedence, or the prefix precedence for prefix-only operators.
    ///
    /// ## Panics
    /// - If `term` is not an operator in this table. Callers test membership first.
    pub fn precedence(&self, term: Option<&Term>) -> u8 {
        match self.infix_descriptor(term).or_else(|| self.prefix_descriptor(term)) {
            Some(descriptor) => descriptor.precedence,
            None => panic!(
                "precedence queried for non-operator term {}",
                crate::term::describe(term)
            ),
        }
    }
}

fn prefix_entry() -> OperatorDescriptor {
    OperatorDescriptor {
        precedence: PREFIX_PRECEDENCE,
        associativity: Associativity::Right,
    }
}
