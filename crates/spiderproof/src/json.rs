//! JSON serialization types for goals and proofs

use crate::config::ApplicationMode;
use crate::lang::SpiderDiagram;
use crate::reasoning::{Goals, Proof, ProofStep, RuleApplicationResult, RuleArg};
use serde::{Deserialize, Serialize};

/// JSON representation of a goal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalJson {
    /// Canonical textual form of the diagram
    pub text: String,
    pub diagram: SpiderDiagram,
}

impl GoalJson {
    pub fn from_diagram(diagram: &SpiderDiagram) -> Self {
        GoalJson {
            text: diagram.to_string(),
            diagram: diagram.clone(),
        }
    }
}

/// JSON representation of a goal set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GoalsJson {
    pub goals: Vec<GoalJson>,
}

impl From<&Goals> for GoalsJson {
    fn from(goals: &Goals) -> Self {
        GoalsJson {
            goals: goals.iter().map(GoalJson::from_diagram).collect(),
        }
    }
}

impl From<&GoalsJson> for Goals {
    fn from(json: &GoalsJson) -> Self {
        json.goals.iter().map(|g| g.diagram.clone()).collect()
    }
}

/// JSON representation of a single rule application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofStepJson {
    pub rule: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub args: Option<RuleArg>,
    /// Goals after the step; `None` when the step left no goal set at all
    pub goals: Option<GoalsJson>,
}

impl From<&ProofStep> for ProofStepJson {
    fn from(step: &ProofStep) -> Self {
        ProofStepJson {
            rule: step.application.rule().name().to_string(),
            args: step.application.args().copied(),
            goals: step.goals.as_ref().map(GoalsJson::from),
        }
    }
}

/// JSON representation of a proof
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofJson {
    pub mode: ApplicationMode,
    pub initial_goals: GoalsJson,
    pub steps: Vec<ProofStepJson>,
    pub finished: bool,
}

impl From<&Proof> for ProofJson {
    fn from(proof: &Proof) -> Self {
        ProofJson {
            mode: proof.config().mode,
            initial_goals: proof.initial_goals().into(),
            steps: proof.steps().iter().map(ProofStepJson::from).collect(),
            finished: proof.is_finished(),
        }
    }
}

/// JSON representation of the outcome of one rule application
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "result")]
pub enum ApplicationJson {
    Applied {
        rule: String,
        goals: Option<GoalsJson>,
        discharged: bool,
    },
    Failed {
        rule: String,
        key: String,
        message: String,
    },
}

impl ApplicationJson {
    pub fn applied(rule: &str, result: &RuleApplicationResult) -> Self {
        ApplicationJson::Applied {
            rule: rule.to_string(),
            goals: result.goals().map(GoalsJson::from),
            discharged: result.is_discharged(),
        }
    }

    pub fn failed(rule: &str, error: &crate::reasoning::RuleApplicationError) -> Self {
        ApplicationJson::Failed {
            rule: rule.to_string(),
            key: error.message_key().to_string(),
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::Operator;
    use crate::reasoning::rules::IDEMPOTENCY;
    use crate::reasoning::{RuleApplication, RuleApplicationError};

    fn goal() -> SpiderDiagram {
        SpiderDiagram::binary(Operator::Implication, SpiderDiagram::Null, SpiderDiagram::Null).unwrap()
    }

    #[test]
    fn test_goals_roundtrip() {
        let goals = Goals::new(vec![goal(), SpiderDiagram::Null]);
        let json = serde_json::to_string(&GoalsJson::from(&goals)).unwrap();
        let parsed: GoalsJson = serde_json::from_str(&json).unwrap();
        assert_eq!(Goals::from(&parsed), goals);
        assert_eq!(parsed.goals[1].text, "NullSD");
    }

    #[test]
    fn test_proof_json() {
        let mut proof = Proof::new(Goals::new(vec![goal()]));
        proof
            .apply(RuleApplication::new(&IDEMPOTENCY, Some(RuleArg::sub_diagram(0, 0))))
            .unwrap();

        let json = ProofJson::from(&proof);
        assert_eq!(json.steps.len(), 1);
        assert_eq!(json.steps[0].rule, "idempotency");
        assert_eq!(json.steps[0].args, Some(RuleArg::sub_diagram(0, 0)));
        let goals = json.steps[0].goals.as_ref().unwrap();
        assert_eq!(goals.goals[0].text, "NullSD");
        assert!(!json.finished);

        let value = serde_json::to_value(&json).unwrap();
        assert_eq!(value["mode"], "Backward");
        assert_eq!(value["steps"][0]["args"]["type"], "SubDiagram");
    }

    #[test]
    fn test_application_json() {
        let err = RuleApplicationError::GoalIndexOutOfRange { index: 4, count: 1 };
        let value = serde_json::to_value(ApplicationJson::failed("idempotency", &err)).unwrap();
        assert_eq!(value["result"], "Failed");
        assert_eq!(value["key"], "RULE_NO_SUBGOAL");

        let applied = ApplicationJson::applied("idempotency", &RuleApplicationResult::new(None));
        let value = serde_json::to_value(applied).unwrap();
        assert_eq!(value["discharged"], true);
        assert!(value["goals"].is_null());
    }
}
