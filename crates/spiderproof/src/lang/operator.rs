//! Logical connectives labelling compound diagrams

use serde::{Deserialize, Serialize};
use std::fmt;

/// A logical connective of a compound spider diagram
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Operator {
    Negation,
    Conjunction,
    Disjunction,
    Implication,
    Equivalence,
}

impl Operator {
    /// All operators, in declaration order
    pub const ALL: [Operator; 5] = [
        Operator::Negation,
        Operator::Conjunction,
        Operator::Disjunction,
        Operator::Implication,
        Operator::Equivalence,
    ];

    /// Number of operands a compound diagram with this operator carries
    pub fn arity(&self) -> usize {
        match self {
            Operator::Negation => 1,
            Operator::Conjunction
            | Operator::Disjunction
            | Operator::Implication
            | Operator::Equivalence => 2,
        }
    }

    /// Token used in the textual representation of spider diagrams
    pub fn token(&self) -> &'static str {
        match self {
            Operator::Negation => "op ~",
            Operator::Conjunction => "op &",
            Operator::Disjunction => "op |",
            Operator::Implication => "op -->",
            Operator::Equivalence => "op <-->",
        }
    }

    /// Look up an operator by its textual token
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.token() == token)
    }

    /// Logical symbol, e.g. `∧` for conjunction
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Negation => "¬",
            Operator::Conjunction => "∧",
            Operator::Disjunction => "∨",
            Operator::Implication => "⇒",
            Operator::Equivalence => "⇔",
        }
    }

    pub fn is_binary(&self) -> bool {
        self.arity() == 2
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arity() {
        assert_eq!(Operator::Negation.arity(), 1);
        for op in [
            Operator::Conjunction,
            Operator::Disjunction,
            Operator::Implication,
            Operator::Equivalence,
        ] {
            assert_eq!(op.arity(), 2, "{:?} should be binary", op);
            assert!(op.is_binary());
        }
    }

    #[test]
    fn test_token_lookup() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_token(op.token()), Some(op));
        }
        assert_eq!(Operator::from_token("op ^"), None);
    }
}
