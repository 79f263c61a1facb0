pub mod audit_policy;
pub mod audit_summary;
pub mod dependency_graph;
pub mod findings;
pub mod resolved_package;

pub use audit_policy::AuditPolicy;
pub use audit_summary::AuditSummary;
pub use dependency_graph::{
    SbomDocument, SbomPackage, SbomRelationship, MISSING_SPDX_ID, ROOT_VERSION,
};
pub use findings::{
    AggregatedFinding, AggregationStore, AuditFindings, ClassifyOutcome, FindingKey,
    FindingOccurrence,
};
pub use resolved_package::{
    LicenseResolution, ResolveMode, ResolvedPackage, NON_NPM_LICENSE, UNKNOWN_LICENSE,
};
