//! Enforester configuration.

use crate::operators::OperatorTable;

/// Default limit on nested groups/statements.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Configuration handed to the enforester at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct EnforestConfig {
    /// Operator tables driving expression reduction
    pub operators: OperatorTable,
    /// Maximum nesting of groups and statements before the enforester gives up with a structural error
    pub max_depth: usize,
}

impl Default for EnforestConfig {
    fn default() -> Self {
        Self {
            operators: OperatorTable::standard(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl EnforestConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the operator tables
    pub fn with_operators(mut self, operators: OperatorTable) -> Self {
        self.operators = operators;
        self
    }

    /// Set the nesting limit
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
