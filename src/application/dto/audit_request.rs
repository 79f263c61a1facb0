use crate::license_audit::domain::AuditPolicy;

/// Default number of repositories processed concurrently. Deliberately
/// conservative to respect forge and registry rate limits.
pub const DEFAULT_CONCURRENCY: usize = 5;

/// Input to the organization audit use case.
#[derive(Debug)]
pub struct AuditRequest {
    pub organization: String,
    pub concurrency: usize,
    pub policy: AuditPolicy,
}

impl AuditRequest {
    pub fn new(organization: impl Into<String>, concurrency: usize, policy: AuditPolicy) -> Self {
        Self {
            organization: organization.into(),
            // A zero cap would stall the scheduler forever.
            concurrency: concurrency.max(1),
            policy,
        }
    }
}
