//! The inference rule protocol
//!
//! A rule is described by a set of facets:
//! - **InferenceRule**: name, description, declared argument kind, selection
//!   instructions and the basic `apply`
//! - **ForwardRule**: application from premises towards the conclusion
//! - **BackwardRule**: goal-directed application
//!
//! Rules advertise the optional facets through [`InferenceRule::as_forward`]
//! and [`InferenceRule::as_backward`].

use super::args::{RuleArg, RuleArgKind, TypedRuleArg};
use super::error::{RuleApplicationError, RuleResult};
use super::goals::Goals;
use super::instructions::RuleInstruction;
use crate::config::ApplicationMode;
use crate::lang::SpiderDiagram;
use std::fmt;

/// Goals that remain after applying an inference rule.
///
/// `None` means the application produced no goals at all; like an empty goal
/// set it means there is nothing left to prove.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleApplicationResult {
    goals: Option<Goals>,
}

impl RuleApplicationResult {
    pub fn new(goals: Option<Goals>) -> Self {
        RuleApplicationResult { goals }
    }

    pub fn goals(&self) -> Option<&Goals> {
        self.goals.as_ref()
    }

    pub fn into_goals(self) -> Option<Goals> {
        self.goals
    }

    /// Whether nothing is left to prove
    pub fn is_discharged(&self) -> bool {
        self.goals.as_ref().map_or(true, Goals::is_empty)
    }
}

impl From<Goals> for RuleApplicationResult {
    fn from(goals: Goals) -> Self {
        RuleApplicationResult::new(Some(goals))
    }
}

/// Basic facet shared by every inference rule
pub trait InferenceRule: Send + Sync {
    /// Stable name used to look the rule up
    fn name(&self) -> &'static str;

    /// Human-readable name
    fn pretty_name(&self) -> &'static str;

    /// One-line description of what the rule does
    fn description(&self) -> &'static str;

    /// Kind of argument the rule expects, `None` if it takes none
    fn argument_kind(&self) -> Option<RuleArgKind>;

    /// What an interactive caller has to select to build valid arguments
    fn instructions(&self) -> Option<RuleInstruction>;

    /// Apply the rule to `goals`, producing a new goal set
    fn apply(&self, args: Option<&RuleArg>, goals: &Goals) -> RuleResult<RuleApplicationResult>;

    fn as_forward(&self) -> Option<&dyn ForwardRule> {
        None
    }

    fn as_backward(&self) -> Option<&dyn BackwardRule> {
        None
    }
}

/// Rules that can be applied forwards
pub trait ForwardRule: InferenceRule {
    fn apply_forwards(
        &self,
        args: Option<&RuleArg>,
        goals: &Goals,
    ) -> RuleResult<RuleApplicationResult>;
}

/// Rules that can be applied backwards
pub trait BackwardRule: InferenceRule {
    fn apply_backwards(
        &self,
        args: Option<&RuleArg>,
        goals: &Goals,
    ) -> RuleResult<RuleApplicationResult>;
}

/// Extract the argument a rule declares, failing on absent or mismatched ones
pub fn typed_args<'a, A: TypedRuleArg>(
    rule: &'static str,
    args: Option<&'a RuleArg>,
) -> RuleResult<&'a A> {
    let arg = args.ok_or(RuleApplicationError::MissingArgument {
        rule,
        expected: A::KIND,
    })?;
    A::from_rule_arg(arg).ok_or(RuleApplicationError::ArgumentTypeMismatch {
        rule,
        expected: A::KIND,
        found: arg.kind(),
    })
}

/// The goal at `index`, or a `GoalIndexOutOfRange` error
pub fn subgoal(goals: &Goals, index: usize) -> RuleResult<&SpiderDiagram> {
    goals
        .get(index)
        .ok_or(RuleApplicationError::GoalIndexOutOfRange {
            index,
            count: goals.goals_count(),
        })
}

/// A copy of `goals` with the goal at `index` replaced by `goal`.
///
/// The other goals keep their positions.
pub fn replace_subgoal(goals: &Goals, index: usize, goal: SpiderDiagram) -> RuleResult<Goals> {
    subgoal(goals, index)?;
    let mut new_goals = goals.goals().to_vec();
    new_goals[index] = goal;
    Ok(Goals::create_goals_from(&new_goals))
}

/// An inference rule paired with the arguments to apply it with
#[derive(Clone, Copy)]
pub struct RuleApplication {
    rule: &'static dyn InferenceRule,
    args: Option<RuleArg>,
}

impl RuleApplication {
    pub fn new(rule: &'static dyn InferenceRule, args: Option<RuleArg>) -> Self {
        RuleApplication { rule, args }
    }

    pub fn rule(&self) -> &'static dyn InferenceRule {
        self.rule
    }

    pub fn args(&self) -> Option<&RuleArg> {
        self.args.as_ref()
    }

    /// Apply the rule with the stored arguments
    pub fn apply_to(&self, goals: &Goals) -> RuleResult<RuleApplicationResult> {
        self.rule.apply(self.args.as_ref(), goals)
    }

    /// Apply the rule through the entry point selected by `mode`
    pub fn apply_in(&self, mode: ApplicationMode, goals: &Goals) -> RuleResult<RuleApplicationResult> {
        let unsupported = || RuleApplicationError::DirectionUnsupported {
            rule: self.rule.name(),
            mode,
        };
        match mode {
            ApplicationMode::Plain => self.apply_to(goals),
            ApplicationMode::Forward => self
                .rule
                .as_forward()
                .ok_or_else(unsupported)?
                .apply_forwards(self.args.as_ref(), goals),
            ApplicationMode::Backward => self
                .rule
                .as_backward()
                .ok_or_else(unsupported)?
                .apply_backwards(self.args.as_ref(), goals),
        }
    }
}

impl fmt::Debug for RuleApplication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleApplication")
            .field("rule", &self.rule.name())
            .field("args", &self.args)
            .finish()
    }
}

impl PartialEq for RuleApplication {
    fn eq(&self, other: &Self) -> bool {
        self.rule.name() == other.rule.name() && self.args == other.args
    }
}

impl Eq for RuleApplication {}
