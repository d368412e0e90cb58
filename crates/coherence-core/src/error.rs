use std::fmt;

use crate::params::DomainIssue;

#[derive(Debug, Clone, PartialEq)]
pub enum EvaluationError {
    /// Strict validation rejected an input outside the nominal domain.
    Domain(DomainIssue),
    /// Evaluator configuration is unusable.
    InvalidConfig(String),
}

impl fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvaluationError::Domain(issue) => write!(f, "input rejected: {issue}"),
            EvaluationError::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for EvaluationError {}

impl From<DomainIssue> for EvaluationError {
    fn from(issue: DomainIssue) -> Self {
        EvaluationError::Domain(issue)
    }
}

pub type Result<T> = std::result::Result<T, EvaluationError>;
