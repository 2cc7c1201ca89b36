//! Arguments passed to inference rules

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kinds of rule arguments, used by rules to declare what they expect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleArgKind {
    SubgoalIndex,
    SubDiagramIndex,
}

impl fmt::Display for RuleArgKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleArgKind::SubgoalIndex => write!(f, "subgoal index"),
            RuleArgKind::SubDiagramIndex => write!(f, "sub-diagram index"),
        }
    }
}

/// Selects a whole goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubgoalIndexArg {
    pub subgoal_index: usize,
}

/// Selects a compound sub-diagram, by pre-order index, within a goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubDiagramIndexArg {
    pub subgoal_index: usize,
    pub sub_diagram_index: usize,
}

/// A concrete argument value for an inference rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RuleArg {
    Subgoal(SubgoalIndexArg),
    SubDiagram(SubDiagramIndexArg),
}

impl RuleArg {
    pub fn subgoal(subgoal_index: usize) -> Self {
        RuleArg::Subgoal(SubgoalIndexArg { subgoal_index })
    }

    pub fn sub_diagram(subgoal_index: usize, sub_diagram_index: usize) -> Self {
        RuleArg::SubDiagram(SubDiagramIndexArg {
            subgoal_index,
            sub_diagram_index,
        })
    }

    pub fn kind(&self) -> RuleArgKind {
        match self {
            RuleArg::Subgoal(_) => RuleArgKind::SubgoalIndex,
            RuleArg::SubDiagram(_) => RuleArgKind::SubDiagramIndex,
        }
    }

    /// Index of the goal this argument targets
    pub fn subgoal_index(&self) -> usize {
        match self {
            RuleArg::Subgoal(arg) => arg.subgoal_index,
            RuleArg::SubDiagram(arg) => arg.subgoal_index,
        }
    }
}

/// A concrete argument type that can be extracted from a [`RuleArg`]
pub trait TypedRuleArg: Sized {
    const KIND: RuleArgKind;

    fn from_rule_arg(arg: &RuleArg) -> Option<&Self>;
}

impl TypedRuleArg for SubgoalIndexArg {
    const KIND: RuleArgKind = RuleArgKind::SubgoalIndex;

    fn from_rule_arg(arg: &RuleArg) -> Option<&Self> {
        match arg {
            RuleArg::Subgoal(a) => Some(a),
            _ => None,
        }
    }
}

impl TypedRuleArg for SubDiagramIndexArg {
    const KIND: RuleArgKind = RuleArgKind::SubDiagramIndex;

    fn from_rule_arg(arg: &RuleArg) -> Option<&Self> {
        match arg {
            RuleArg::SubDiagram(a) => Some(a),
            _ => None,
        }
    }
}
