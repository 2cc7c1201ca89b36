//! Reasoning with spider diagrams
//!
//! Goals, the inference rule protocol, rule arguments and instructions, the
//! available rules, and proof sessions built from repeated rule application.

pub mod args;
pub mod error;
pub mod goals;
pub mod instructions;
pub mod proof;
pub mod rule;
pub mod rules;

pub use args::{RuleArg, RuleArgKind, SubDiagramIndexArg, SubgoalIndexArg, TypedRuleArg};
pub use error::{RuleApplicationError, RuleResult};
pub use goals::Goals;
pub use instructions::RuleInstruction;
pub use proof::{Proof, ProofError, ProofStep};
pub use rule::{
    BackwardRule, ForwardRule, InferenceRule, RuleApplication, RuleApplicationResult,
};
pub use rules::{all_rules, rule_by_name, Idempotency};
