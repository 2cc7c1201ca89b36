//! Proof sessions
//!
//! A proof starts from a set of goals and records every rule application
//! together with the goals it produced. Each step works on the goals left by
//! the previous one; earlier goal sets are kept untouched so steps can be
//! undone.

use super::error::RuleApplicationError;
use super::goals::Goals;
use super::rule::RuleApplication;
use crate::config::ProofConfig;
use thiserror::Error;
use tracing::{debug, info};

/// Errors raised by a proof session
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProofError {
    /// Every goal has been discharged already
    #[error("the proof is finished, there are no goals left")]
    NoGoals,

    /// The configured step limit has been reached
    #[error("step limit of {limit} reached")]
    StepLimit { limit: usize },

    /// The rule application itself failed
    #[error(transparent)]
    Rule(#[from] RuleApplicationError),
}

/// A single step in a proof: the rule applied and the goals it left
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProofStep {
    pub application: RuleApplication,
    pub goals: Option<Goals>,
}

/// An interactive proof: initial goals plus the steps applied so far
#[derive(Debug, Clone)]
pub struct Proof {
    config: ProofConfig,
    initial_goals: Goals,
    steps: Vec<ProofStep>,
}

impl Proof {
    pub fn new(initial_goals: Goals) -> Self {
        Self::with_config(initial_goals, ProofConfig::default())
    }

    pub fn with_config(initial_goals: Goals, config: ProofConfig) -> Self {
        Proof {
            config,
            initial_goals,
            steps: Vec::new(),
        }
    }

    pub fn config(&self) -> &ProofConfig {
        &self.config
    }

    pub fn initial_goals(&self) -> &Goals {
        &self.initial_goals
    }

    pub fn steps(&self) -> &[ProofStep] {
        &self.steps
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Goals left after the last step, or the initial goals
    pub fn current_goals(&self) -> Option<&Goals> {
        match self.steps.last() {
            Some(step) => step.goals.as_ref(),
            None => Some(&self.initial_goals),
        }
    }

    /// Whether nothing is left to prove
    pub fn is_finished(&self) -> bool {
        self.current_goals().map_or(true, Goals::is_empty)
    }

    /// Apply a rule to the current goals.
    ///
    /// On failure the proof is left exactly as it was.
    pub fn apply(&mut self, application: RuleApplication) -> Result<Option<&Goals>, ProofError> {
        if self.config.max_steps > 0 && self.steps.len() >= self.config.max_steps {
            return Err(ProofError::StepLimit {
                limit: self.config.max_steps,
            });
        }
        let goals = match self.current_goals() {
            Some(goals) if !goals.is_empty() => goals,
            _ => return Err(ProofError::NoGoals),
        };

        let result = application
            .apply_in(self.config.mode, goals)
            .map_err(|e| {
                debug!(rule = application.rule().name(), error = %e, "rule application failed");
                e
            })?;

        self.steps.push(ProofStep {
            application,
            goals: result.into_goals(),
        });
        info!(
            step = self.steps.len(),
            rule = application.rule().name(),
            finished = self.is_finished(),
            "applied rule"
        );
        Ok(self.current_goals())
    }

    /// Remove the last step, returning it
    pub fn undo(&mut self) -> Option<ProofStep> {
        let step = self.steps.pop();
        if let Some(step) = &step {
            debug!(rule = step.application.rule().name(), "undid step");
        }
        step
    }
}
