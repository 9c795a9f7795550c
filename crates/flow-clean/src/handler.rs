//! A handler that holds the current remediation policy.

use flow_model::Table;

use crate::error::Result;
use crate::policy::RemediationPolicy;
use crate::remediate::remediate;

/// Applies a swappable [`RemediationPolicy`] to tables.
///
/// The policy can only be replaced through `&mut self`, so it never changes
/// while a `handle` call is borrowing the handler.
#[derive(Debug, Clone)]
pub struct MissingValueHandler {
    policy: RemediationPolicy,
}

impl MissingValueHandler {
    pub fn new(policy: RemediationPolicy) -> Self {
        Self { policy }
    }

    /// Current policy.
    pub fn policy(&self) -> &RemediationPolicy {
        &self.policy
    }

    /// Replace the current policy.
    pub fn set_policy(&mut self, policy: RemediationPolicy) {
        tracing::info!(from = %self.policy, to = %policy, "Switching remediation policy");
        self.policy = policy;
    }

    /// Apply the current policy to `table`.
    pub fn handle(&self, table: &Table) -> Result<Table> {
        let span = tracing::info_span!("remediate", policy = %self.policy);
        let _guard = span.enter();
        remediate(table, &self.policy)
    }
}
