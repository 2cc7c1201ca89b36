//! Idempotency inference rule
//!
//! Reduces a binary compound diagram whose operands are s-equivalent:
//! - `D ∧ D` and `D ∨ D` become `D`
//! - `D ⇒ D` and `D ⇔ D` become the null diagram (`⊤`)

use crate::lang::{transform, CompoundDiagram, DiagramTransformer, Operator, Rewrite, SpiderDiagram, Visit};
use crate::reasoning::args::{RuleArg, RuleArgKind, SubDiagramIndexArg};
use crate::reasoning::error::{RuleApplicationError, RuleResult};
use crate::reasoning::goals::Goals;
use crate::reasoning::instructions::RuleInstruction;
use crate::reasoning::rule::{
    replace_subgoal, subgoal, typed_args, BackwardRule, ForwardRule, InferenceRule,
    RuleApplicationResult,
};
use tracing::debug;

/// Message key reported when the targeted diagram cannot be reduced
pub const NOT_APPLICABLE_KEY: &str = "RULE_IDEMPOTENCY_NOT_APPLICABLE";

/// The idempotency rule
#[derive(Debug, Clone, Copy, Default)]
pub struct Idempotency;

impl Idempotency {
    pub const NAME: &'static str = "idempotency";

    /// Rewrite the sub-diagram selected by `arg` within its goal
    fn reduce(&self, arg: &SubDiagramIndexArg, goals: &Goals) -> RuleResult<Goals> {
        let goal = subgoal(goals, arg.subgoal_index)?;
        let mut transformer = IdempotencyTransformer {
            target: arg.sub_diagram_index,
            reached: false,
        };
        let reduced = transform(goal, &mut transformer)?;
        if !transformer.reached {
            return Err(RuleApplicationError::SubDiagramIndexOutOfRange {
                subgoal: arg.subgoal_index,
                index: arg.sub_diagram_index,
                count: goal.compound_count(),
            });
        }
        replace_subgoal(goals, arg.subgoal_index, reduced)
    }
}

impl InferenceRule for Idempotency {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn pretty_name(&self) -> &'static str {
        "Idempotency"
    }

    fn description(&self) -> &'static str {
        "Reduces D ∧ D and D ∨ D to D, and D ⇒ D and D ⇔ D to ⊤"
    }

    fn argument_kind(&self) -> Option<RuleArgKind> {
        Some(RuleArgKind::SubDiagramIndex)
    }

    fn instructions(&self) -> Option<RuleInstruction> {
        Some(RuleInstruction::select_single_operator([
            Operator::Conjunction,
            Operator::Disjunction,
        ]))
    }

    fn apply(&self, args: Option<&RuleArg>, goals: &Goals) -> RuleResult<RuleApplicationResult> {
        let arg: &SubDiagramIndexArg = typed_args(self.name(), args)?;
        debug!(
            rule = self.name(),
            subgoal = arg.subgoal_index,
            sub_diagram = arg.sub_diagram_index,
            "applying rule"
        );
        Ok(self.reduce(arg, goals)?.into())
    }

    fn as_forward(&self) -> Option<&dyn ForwardRule> {
        Some(self)
    }

    fn as_backward(&self) -> Option<&dyn BackwardRule> {
        Some(self)
    }
}

impl ForwardRule for Idempotency {
    fn apply_forwards(&self, args: Option<&RuleArg>, goals: &Goals) -> RuleResult<RuleApplicationResult> {
        self.apply(args, goals)
    }
}

impl BackwardRule for Idempotency {
    fn apply_backwards(&self, args: Option<&RuleArg>, goals: &Goals) -> RuleResult<RuleApplicationResult> {
        self.apply(args, goals)
    }
}

struct IdempotencyTransformer {
    target: usize,
    reached: bool,
}

impl DiagramTransformer for IdempotencyTransformer {
    type Error = RuleApplicationError;

    fn transform_compound(
        &mut self,
        node: &CompoundDiagram,
        visit: &Visit<'_>,
    ) -> Result<Rewrite, Self::Error> {
        if visit.index != self.target {
            return Ok(Rewrite::Unchanged);
        }
        self.reached = true;

        let operator = node.operator();
        match operator {
            Operator::Conjunction | Operator::Disjunction if node.operands_sequivalent() => {
                // Operands are equivalent: keep the second one
                let kept = node.operands()[1].clone();
                debug!(%operator, index = visit.index, "reduced to operand");
                Ok(Rewrite::Replace(kept))
            }
            Operator::Implication | Operator::Equivalence if node.operands_sequivalent() => {
                debug!(%operator, index = visit.index, "reduced to null diagram");
                Ok(Rewrite::Replace(SpiderDiagram::Null))
            }
            Operator::Conjunction
            | Operator::Disjunction
            | Operator::Implication
            | Operator::Equivalence => Err(RuleApplicationError::not_applicable(
                Idempotency::NAME,
                NOT_APPLICABLE_KEY,
                format!("the operands of {} are not equivalent", operator),
            )),
            Operator::Negation => Err(RuleApplicationError::not_applicable(
                Idempotency::NAME,
                NOT_APPLICABLE_KEY,
                format!("operator {} is not supported", operator),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::{PrimaryDiagram, Region, Zone};

    fn spider_in(contour: &str) -> SpiderDiagram {
        let zone = Zone::new([contour], Vec::<String>::new()).unwrap();
        PrimaryDiagram::new(["s"], [("s", Region::new([zone]))], [])
            .unwrap()
            .into()
    }

    fn bin(op: Operator, l: SpiderDiagram, r: SpiderDiagram) -> SpiderDiagram {
        SpiderDiagram::binary(op, l, r).unwrap()
    }

    fn apply(goals: &Goals, subgoal: usize, index: usize) -> RuleResult<RuleApplicationResult> {
        Idempotency.apply(Some(&RuleArg::sub_diagram(subgoal, index)), goals)
    }

    #[test]
    fn test_conjunction_keeps_second_operand() {
        let goals = Goals::new(vec![bin(Operator::Conjunction, spider_in("A"), spider_in("A"))]);
        let result = apply(&goals, 0, 0).unwrap();
        assert_eq!(result.goals().unwrap().goals(), &[spider_in("A")]);
    }

    #[test]
    fn test_second_operand_is_the_one_kept() {
        // Spider names differ, so the two operands are s-equivalent but not equal
        let left: SpiderDiagram = PrimaryDiagram::new(["x"], [("x", Region::new([Zone::new(["A"], Vec::<String>::new()).unwrap()]))], [])
            .unwrap()
            .into();
        let right = spider_in("A");
        assert_ne!(left, right);

        let goals = Goals::new(vec![bin(Operator::Disjunction, left, right.clone())]);
        let result = apply(&goals, 0, 0).unwrap();
        assert_eq!(result.goals().unwrap()[0], right);
    }

    #[test]
    fn test_implication_and_equivalence_become_null() {
        for op in [Operator::Implication, Operator::Equivalence] {
            let goals = Goals::new(vec![bin(op, spider_in("A"), spider_in("A"))]);
            let result = apply(&goals, 0, 0).unwrap();
            assert_eq!(result.goals().unwrap()[0], SpiderDiagram::Null);
            assert_eq!(result.goals().unwrap()[0].to_string(), "NullSD");
        }
    }

    #[test]
    fn test_nested_target() {
        // ¬(B ∨ B) ∧ C, target the disjunction at index 2
        let goal = bin(
            Operator::Conjunction,
            SpiderDiagram::negation(bin(Operator::Disjunction, spider_in("B"), spider_in("B"))),
            spider_in("C"),
        );
        let goals = Goals::new(vec![SpiderDiagram::Null, goal]);
        let result = apply(&goals, 1, 2).unwrap();
        let expected = bin(
            Operator::Conjunction,
            SpiderDiagram::negation(spider_in("B")),
            spider_in("C"),
        );
        let new_goals = result.goals().unwrap();
        assert_eq!(new_goals.goals_count(), 2);
        assert_eq!(new_goals[0], SpiderDiagram::Null);
        assert_eq!(new_goals[1], expected);
    }

    #[test]
    fn test_not_equivalent_operands() {
        let goals = Goals::new(vec![bin(Operator::Conjunction, spider_in("A"), spider_in("B"))]);
        let snapshot = goals.clone();
        let err = apply(&goals, 0, 0).unwrap_err();
        assert_eq!(err.message_key(), NOT_APPLICABLE_KEY);
        assert!(matches!(err, RuleApplicationError::NotApplicable { rule: "idempotency", .. }));
        assert_eq!(goals, snapshot);
    }

    #[test]
    fn test_negation_not_applicable() {
        let goals = Goals::new(vec![SpiderDiagram::negation(spider_in("A"))]);
        let err = apply(&goals, 0, 0).unwrap_err();
        assert!(matches!(err, RuleApplicationError::NotApplicable { .. }));
    }

    #[test]
    fn test_index_errors() {
        let goals = Goals::new(vec![bin(Operator::Conjunction, spider_in("A"), spider_in("A"))]);
        assert_eq!(
            apply(&goals, 1, 0).unwrap_err(),
            RuleApplicationError::GoalIndexOutOfRange { index: 1, count: 1 }
        );
        assert_eq!(
            apply(&goals, 0, 1).unwrap_err(),
            RuleApplicationError::SubDiagramIndexOutOfRange {
                subgoal: 0,
                index: 1,
                count: 1
            }
        );

        let primary_only = Goals::new(vec![spider_in("A")]);
        assert!(matches!(
            apply(&primary_only, 0, 0).unwrap_err(),
            RuleApplicationError::SubDiagramIndexOutOfRange { count: 0, .. }
        ));
    }

    #[test]
    fn test_argument_errors() {
        let goals = Goals::new(vec![bin(Operator::Conjunction, spider_in("A"), spider_in("A"))]);
        assert!(matches!(
            Idempotency.apply(None, &goals).unwrap_err(),
            RuleApplicationError::MissingArgument { .. }
        ));
        assert!(matches!(
            Idempotency.apply(Some(&RuleArg::subgoal(0)), &goals).unwrap_err(),
            RuleApplicationError::ArgumentTypeMismatch { .. }
        ));
    }

    #[test]
    fn test_directions_agree() {
        let goals = Goals::new(vec![bin(Operator::Equivalence, spider_in("A"), spider_in("A"))]);
        let arg = RuleArg::sub_diagram(0, 0);
        let plain = Idempotency.apply(Some(&arg), &goals).unwrap();
        assert_eq!(Idempotency.apply_forwards(Some(&arg), &goals).unwrap(), plain);
        assert_eq!(Idempotency.apply_backwards(Some(&arg), &goals).unwrap(), plain);
    }

    #[test]
    fn test_metadata() {
        assert_eq!(Idempotency.name(), "idempotency");
        assert_eq!(Idempotency.argument_kind(), Some(RuleArgKind::SubDiagramIndex));
        let instruction = Idempotency.instructions().unwrap();
        assert!(instruction.accepts_operator(Operator::Conjunction));
        assert!(instruction.accepts_operator(Operator::Disjunction));
        assert!(Idempotency.as_forward().is_some());
        assert!(Idempotency.as_backward().is_some());
    }
}
