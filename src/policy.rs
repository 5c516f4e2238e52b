//! Approval policy configuration.

use crate::cost::Cost;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Cost at or above which a leader's acceptance escalates to a director.
pub const DEFAULT_DIRECTOR_THRESHOLD: Cost = Cost::from_major_units(5000);

/// Errors that can occur when loading an approval policy
#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("Invalid policy document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Tunable parameters of the approval workflow.
///
/// Missing fields fall back to their defaults when deserializing.
///
/// # Example
///
/// ```rust
/// use wishlist::{ApprovalPolicy, Cost};
///
/// let policy = ApprovalPolicy::from_json(r#"{ "director_threshold": 100000 }"#).unwrap();
/// assert_eq!(policy.director_threshold, Cost::from_major_units(1000));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApprovalPolicy {
    /// Minimum cost that needs a director's acceptance after the leader's.
    pub director_threshold: Cost,
}

impl ApprovalPolicy {
    /// Parse a policy from a JSON document.
    pub fn from_json(document: &str) -> Result<Self, PolicyError> {
        Ok(serde_json::from_str(document)?)
    }

    /// Whether an item of this cost escalates to a director.
    pub fn requires_director(&self, cost: Cost) -> bool {
        cost >= self.director_threshold
    }
}

impl Default for ApprovalPolicy {
    fn default() -> Self {
        Self {
            director_threshold: DEFAULT_DIRECTOR_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_threshold_is_five_thousand() {
        let policy = ApprovalPolicy::default();
        assert_eq!(policy.director_threshold.to_string(), "5000.00");
    }

    #[test]
    fn threshold_is_inclusive() {
        let policy = ApprovalPolicy::default();

        assert!(!policy.requires_director(Cost::from_minor_units(499_999)));
        assert!(policy.requires_director(Cost::from_major_units(5000)));
        assert!(policy.requires_director(Cost::from_major_units(10_000)));
    }

    #[test]
    fn empty_document_uses_defaults() {
        let policy = ApprovalPolicy::from_json("{}").unwrap();
        assert_eq!(policy, ApprovalPolicy::default());
    }

    #[test]
    fn malformed_document_is_rejected() {
        let result = ApprovalPolicy::from_json(r#"{ "director_threshold": "lots" }"#);
        assert!(matches!(result, Err(PolicyError::Parse(_))));
    }

    #[test]
    fn policy_roundtrips_through_json() {
        let policy = ApprovalPolicy {
            director_threshold: Cost::from_major_units(250),
        };

        let json = serde_json::to_string(&policy).unwrap();
        assert_eq!(ApprovalPolicy::from_json(&json).unwrap(), policy);
    }
}
