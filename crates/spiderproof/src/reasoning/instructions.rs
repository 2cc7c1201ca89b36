//! Selection instructions exposed by rules to interactive callers
//!
//! An instruction describes what the user has to select so that valid
//! arguments can be built for a rule. This crate only produces them.

use super::args::RuleArgKind;
use crate::lang::Operator;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RuleInstruction {
    /// Select one of the goals
    SelectSubgoal,
    /// Select a single compound sub-diagram whose operator is one of `operators`
    SelectSingleOperator { operators: Vec<Operator> },
}

impl RuleInstruction {
    pub fn select_single_operator(operators: impl IntoIterator<Item = Operator>) -> Self {
        RuleInstruction::SelectSingleOperator {
            operators: operators.into_iter().collect(),
        }
    }

    /// Kind of argument a completed selection produces
    pub fn argument_kind(&self) -> RuleArgKind {
        match self {
            RuleInstruction::SelectSubgoal => RuleArgKind::SubgoalIndex,
            RuleInstruction::SelectSingleOperator { .. } => RuleArgKind::SubDiagramIndex,
        }
    }

    /// Whether a compound node with `operator` is an acceptable selection
    pub fn accepts_operator(&self, operator: Operator) -> bool {
        match self {
            RuleInstruction::SelectSubgoal => false,
            RuleInstruction::SelectSingleOperator { operators } => operators.contains(&operator),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_operator() {
        let instruction = RuleInstruction::select_single_operator([Operator::Conjunction, Operator::Disjunction]);
        assert_eq!(instruction.argument_kind(), RuleArgKind::SubDiagramIndex);
        assert!(instruction.accepts_operator(Operator::Conjunction));
        assert!(!instruction.accepts_operator(Operator::Negation));
    }

    #[test]
    fn test_select_subgoal() {
        assert_eq!(RuleInstruction::SelectSubgoal.argument_kind(), RuleArgKind::SubgoalIndex);
        assert!(!RuleInstruction::SelectSubgoal.accepts_operator(Operator::Conjunction));
    }
}
