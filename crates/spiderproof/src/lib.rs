//! spiderproof: rule application for spider diagram proofs
//!
//! This library represents proof goals as spider diagram terms and applies
//! named inference rules that rewrite a selected sub-diagram of one goal,
//! producing a new goal set. Every value is immutable: a failed application
//! leaves the caller's goals untouched, a successful one returns fresh goals.
//!
//! # Example
//!
//! ```
//! use spiderproof::{Goals, Operator, RuleApplication, RuleArg, SpiderDiagram};
//! use spiderproof::reasoning::rules::IDEMPOTENCY;
//!
//! let goal = SpiderDiagram::binary(Operator::Equivalence, SpiderDiagram::Null, SpiderDiagram::Null).unwrap();
//! let goals = Goals::new(vec![goal]);
//!
//! let application = RuleApplication::new(&IDEMPOTENCY, Some(RuleArg::sub_diagram(0, 0)));
//! let result = application.apply_to(&goals).unwrap();
//! assert_eq!(result.goals().unwrap()[0].to_string(), "NullSD");
//! ```

pub mod config;
pub mod json;
pub mod lang;
pub mod reasoning;

pub use config::{ApplicationMode, ProofConfig};

// Re-export commonly used types from lang
pub use lang::{
    transform, CompoundDiagram, DiagramError, DiagramTransformer, Operator, PrimaryDiagram,
    Region, Rewrite, SpiderDiagram, Visit, Zone, NULL_SD_TEXT,
};

// Re-export reasoning types
pub use reasoning::{
    rule_by_name, BackwardRule, ForwardRule, Goals, InferenceRule, Proof, ProofError, ProofStep,
    RuleApplication, RuleApplicationError, RuleApplicationResult, RuleArg, RuleArgKind,
    RuleInstruction,
};

pub use json::{GoalsJson, ProofJson};
