//! Goal sets: the open proof obligations

use crate::lang::SpiderDiagram;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

/// An ordered, immutable sequence of goals.
///
/// Goals are identified by position only; the same diagram may appear more
/// than once. Rules never mutate a goal set, they build a new one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Goals {
    goals: Vec<SpiderDiagram>,
}

impl Goals {
    pub fn new(goals: Vec<SpiderDiagram>) -> Self {
        Goals { goals }
    }

    /// A goal set with nothing left to prove
    pub fn empty() -> Self {
        Goals { goals: Vec::new() }
    }

    /// Create a goal set from a literal sequence of diagrams
    pub fn create_goals_from(goals: &[SpiderDiagram]) -> Self {
        Goals {
            goals: goals.to_vec(),
        }
    }

    pub fn goals_count(&self) -> usize {
        self.goals.len()
    }

    pub fn goals(&self) -> &[SpiderDiagram] {
        &self.goals
    }

    pub fn get(&self, index: usize) -> Option<&SpiderDiagram> {
        self.goals.get(index)
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SpiderDiagram> + '_ {
        self.goals.iter()
    }
}

impl From<Vec<SpiderDiagram>> for Goals {
    fn from(goals: Vec<SpiderDiagram>) -> Self {
        Goals::new(goals)
    }
}

impl FromIterator<SpiderDiagram> for Goals {
    fn from_iter<T: IntoIterator<Item = SpiderDiagram>>(iter: T) -> Self {
        Goals::new(iter.into_iter().collect())
    }
}

impl Index<usize> for Goals {
    type Output = SpiderDiagram;

    fn index(&self, index: usize) -> &SpiderDiagram {
        &self.goals[index]
    }
}

impl fmt::Display for Goals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, goal) in self.goals.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[{}] {}", i, goal)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::Operator;

    #[test]
    fn test_create_goals_from_copies() {
        let diagrams = vec![SpiderDiagram::Null, SpiderDiagram::negation(SpiderDiagram::Null)];
        let goals = Goals::create_goals_from(&diagrams);
        assert_eq!(goals.goals_count(), 2);
        assert_eq!(goals.goals(), diagrams.as_slice());
        assert_eq!(goals[1], diagrams[1]);
        assert!(goals.get(2).is_none());
    }

    #[test]
    fn test_duplicates_by_position() {
        let goals: Goals = vec![SpiderDiagram::Null, SpiderDiagram::Null].into();
        assert_eq!(goals.goals_count(), 2);
    }

    #[test]
    fn test_empty() {
        assert!(Goals::empty().is_empty());
        assert_eq!(Goals::default(), Goals::empty());
    }

    #[test]
    fn test_display() {
        let goals: Goals = vec![
            SpiderDiagram::Null,
            SpiderDiagram::binary(Operator::Conjunction, SpiderDiagram::Null, SpiderDiagram::Null).unwrap(),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            goals.to_string(),
            "[0] NullSD\n[1] BinarySD {operator = \"op &\", arg1 = NullSD, arg2 = NullSD}"
        );
    }
}
