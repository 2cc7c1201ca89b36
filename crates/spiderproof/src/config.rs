//! Proof session configuration types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Configuration for a proof session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofConfig {
    /// Maximum number of rule applications in a session (0 means no limit)
    pub max_steps: usize,
    /// Direction in which rules are applied
    pub mode: ApplicationMode,
}

/// Which entry point of a rule is used to apply it
///
/// - Plain: the rule's basic `apply`
/// - Forward: reasoning from premises towards the conclusion
/// - Backward: goal-directed reasoning, reducing goals to subgoals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApplicationMode {
    Plain,
    Forward,
    Backward,
}

impl Default for ProofConfig {
    fn default() -> Self {
        ProofConfig {
            max_steps: 0, // 0 means no limit
            mode: ApplicationMode::Backward,
        }
    }
}

impl fmt::Display for ApplicationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApplicationMode::Plain => write!(f, "plain"),
            ApplicationMode::Forward => write!(f, "forward"),
            ApplicationMode::Backward => write!(f, "backward"),
        }
    }
}

impl FromStr for ApplicationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plain" => Ok(ApplicationMode::Plain),
            "forward" => Ok(ApplicationMode::Forward),
            "backward" => Ok(ApplicationMode::Backward),
            other => Err(format!("unknown application mode '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = ProofConfig::default();
        assert_eq!(config.max_steps, 0);
        assert_eq!(config.mode, ApplicationMode::Backward);
    }

    #[test]
    fn test_mode_parsing() {
        for mode in [ApplicationMode::Plain, ApplicationMode::Forward, ApplicationMode::Backward] {
            assert_eq!(mode.to_string().parse::<ApplicationMode>(), Ok(mode));
        }
        assert!("sideways".parse::<ApplicationMode>().is_err());
    }
}
