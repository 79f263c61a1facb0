//! org-license-audit - organization-wide dependency license auditing
//!
//! This library scans every repository of an organization for dependencies
//! whose declared license is blacklisted or unknown, aggregates the
//! findings into a single deduplicated report, and publishes that report
//! only when its content actually changed.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`license_audit`): Pure business logic and domain models
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use org_license_audit::prelude::*;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! // Create adapters
//! let graph_source = GithubGraphSource::new("ghp_token".to_string())?;
//! let license_repository = CachingLicenseRepository::new(NpmLicenseRepository::new()?);
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = AuditOrganizationUseCase::new(
//!     graph_source,
//!     license_repository,
//!     progress_reporter,
//! );
//!
//! // Execute
//! let policy = AuditPolicy::new(vec!["GPL-3.0".to_string()], &[])?;
//! let request = AuditRequest::new("acme", 5, policy);
//! let response = use_case.execute(request).await?;
//!
//! // Render the report
//! let report = ReportRenderer::render(
//!     &response.blacklisted,
//!     &response.missing,
//!     &response.summary,
//! );
//! println!("{}", report);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod license_audit;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::network::{
        CachingLicenseRepository, GithubGraphSource, GithubIssueSink, NpmLicenseRepository,
        WebhookNotifier,
    };
    pub use crate::application::dto::{AuditRequest, AuditResponse, DEFAULT_CONCURRENCY};
    pub use crate::application::use_cases::{
        AuditOrganizationUseCase, PublishOutcome, PublishReportUseCase,
    };
    pub use crate::license_audit::domain::{
        AggregatedFinding, AuditFindings, AuditPolicy, AuditSummary, FindingOccurrence,
        ResolveMode, ResolvedPackage, SbomDocument, SbomPackage, SbomRelationship,
        MISSING_SPDX_ID, NON_NPM_LICENSE, ROOT_VERSION, UNKNOWN_LICENSE,
    };
    pub use crate::license_audit::services::{
        RelationshipMap, RelationshipResolver, ReportDiffer, ReportRenderer,
    };
    pub use crate::ports::outbound::{
        GraphSource, LicenseRepository, Notifier, OutputPresenter, ProgressReporter,
        ReportSink, RepositoryRef,
    };
    pub use crate::shared::Result;
}
