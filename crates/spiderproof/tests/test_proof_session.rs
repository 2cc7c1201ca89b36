//! Integration tests for multi-step proofs

use spiderproof::reasoning::rules::IDEMPOTENCY;
use spiderproof::{
    ApplicationMode, Goals, Operator, Proof, ProofConfig, ProofError, ProofJson,
    RuleApplication, RuleArg, SpiderDiagram,
};

fn bin(op: Operator, l: SpiderDiagram, r: SpiderDiagram) -> SpiderDiagram {
    SpiderDiagram::binary(op, l, r).unwrap()
}

fn step(subgoal: usize, index: usize) -> RuleApplication {
    RuleApplication::new(&IDEMPOTENCY, Some(RuleArg::sub_diagram(subgoal, index)))
}

/// ((⊤ ∨ ⊤) ∧ ⊤) ⇒ ⊤
fn goal() -> SpiderDiagram {
    let null = SpiderDiagram::Null;
    bin(
        Operator::Implication,
        bin(
            Operator::Conjunction,
            bin(Operator::Disjunction, null.clone(), null.clone()),
            null.clone(),
        ),
        null,
    )
}

#[test]
fn test_reduce_to_null() {
    let mut proof = Proof::new(Goals::new(vec![goal()]));

    // Indices: 0 ⇒, 1 ∧, 2 ∨
    proof.apply(step(0, 2)).unwrap();
    proof.apply(step(0, 1)).unwrap();
    let goals = proof.apply(step(0, 0)).unwrap().unwrap();
    assert_eq!(goals.goals(), &[SpiderDiagram::Null]);
    assert_eq!(proof.step_count(), 3);
}

#[test]
fn test_failed_step_is_not_recorded() {
    let mut proof = Proof::new(Goals::new(vec![goal()]));

    // The implication's operands differ until the inner reductions are done
    let err = proof.apply(step(0, 0)).unwrap_err();
    assert!(matches!(err, ProofError::Rule(_)));
    assert_eq!(proof.step_count(), 0);
    assert_eq!(proof.current_goals(), Some(&Goals::new(vec![goal()])));
}

#[test]
fn test_undo_then_redo() {
    let mut proof = Proof::new(Goals::new(vec![goal()]));
    proof.apply(step(0, 2)).unwrap();
    let after_first = proof.current_goals().cloned();

    proof.apply(step(0, 1)).unwrap();
    proof.undo().unwrap();
    assert_eq!(proof.current_goals().cloned(), after_first);

    proof.apply(step(0, 1)).unwrap();
    assert_eq!(proof.step_count(), 2);
}

#[test]
fn test_forward_mode_with_limit() {
    let config = ProofConfig {
        max_steps: 2,
        mode: ApplicationMode::Forward,
    };
    let mut proof = Proof::with_config(Goals::new(vec![goal()]), config);
    proof.apply(step(0, 2)).unwrap();
    proof.apply(step(0, 1)).unwrap();
    assert_eq!(
        proof.apply(step(0, 0)).unwrap_err(),
        ProofError::StepLimit { limit: 2 }
    );
}

#[test]
fn test_proof_json_export() {
    let mut proof = Proof::new(Goals::new(vec![goal()]));
    proof.apply(step(0, 2)).unwrap();

    let json = serde_json::to_value(ProofJson::from(&proof)).unwrap();
    assert_eq!(json["steps"][0]["rule"], "idempotency");
    assert_eq!(json["steps"][0]["args"]["sub_diagram_index"], 2);
    assert_eq!(json["initial_goals"][0]["diagram"]["type"], "Compound");
    assert_eq!(json["finished"], false);
}
