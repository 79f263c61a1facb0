pub mod audit_organization;
pub mod publish_report;

pub use audit_organization::AuditOrganizationUseCase;
pub use publish_report::{PublishOutcome, PublishReportUseCase};
