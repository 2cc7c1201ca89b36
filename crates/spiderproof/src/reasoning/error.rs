//! Error types for rule application

use super::args::RuleArgKind;
use crate::config::ApplicationMode;
use thiserror::Error;

/// Result type of applying an inference rule
pub type RuleResult<T> = Result<T, RuleApplicationError>;

/// Why an inference rule could not be applied
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleApplicationError {
    /// The rule requires arguments but none were given
    #[error("rule '{rule}' requires arguments of type {expected}")]
    MissingArgument {
        rule: &'static str,
        expected: RuleArgKind,
    },

    /// The arguments are of a different kind than the rule declares
    #[error("rule '{rule}' expects arguments of type {expected}, got {found}")]
    ArgumentTypeMismatch {
        rule: &'static str,
        expected: RuleArgKind,
        found: RuleArgKind,
    },

    /// The targeted goal does not exist
    #[error("there is no subgoal {index} (goal count: {count})")]
    GoalIndexOutOfRange { index: usize, count: usize },

    /// The targeted sub-diagram does not exist within the goal
    #[error("subgoal {subgoal} has no sub-diagram {index} (compound count: {count})")]
    SubDiagramIndexOutOfRange {
        subgoal: usize,
        index: usize,
        count: usize,
    },

    /// The structural precondition of the rule failed at the target
    #[error("rule '{rule}' is not applicable: {reason}")]
    NotApplicable {
        rule: &'static str,
        key: &'static str,
        reason: String,
    },

    /// The rule cannot be applied in the requested direction
    #[error("rule '{rule}' cannot be applied in {mode} mode")]
    DirectionUnsupported {
        rule: &'static str,
        mode: ApplicationMode,
    },
}

impl RuleApplicationError {
    pub fn not_applicable(
        rule: &'static str,
        key: &'static str,
        reason: impl Into<String>,
    ) -> Self {
        RuleApplicationError::NotApplicable {
            rule,
            key,
            reason: reason.into(),
        }
    }

    /// Stable key for looking up a localized message
    pub fn message_key(&self) -> &'static str {
        match self {
            RuleApplicationError::MissingArgument { .. } => "GERR_NULL_ARGUMENT",
            RuleApplicationError::ArgumentTypeMismatch { .. } => "RULE_ARG_TYPE_MISMATCH",
            RuleApplicationError::GoalIndexOutOfRange { .. } => "RULE_NO_SUBGOAL",
            RuleApplicationError::SubDiagramIndexOutOfRange { .. } => "RULE_NO_SUBDIAGRAM",
            RuleApplicationError::NotApplicable { key, .. } => *key,
            RuleApplicationError::DirectionUnsupported { .. } => "RULE_DIRECTION_UNSUPPORTED",
        }
    }
}
