use crate::application::dto::{AuditRequest, AuditResponse};
use crate::license_audit::domain::{
    AuditFindings, AuditSummary, ResolvedPackage, SbomPackage,
};
use crate::license_audit::services::RelationshipResolver;
use crate::ports::outbound::{GraphSource, LicenseRepository, ProgressReporter, RepositoryRef};
use crate::shared::error::AuditError;
use crate::shared::Result;
use futures::future;
use futures::stream::{self, StreamExt};
use std::collections::HashSet;

/// AuditOrganizationUseCase - the core audit pipeline
///
/// Fans the per-repository processor out over every scannable repository
/// of the organization with a bounded concurrency cap, and folds completed
/// units into the aggregation stores and run counters.
///
/// # Failure model
/// A failing repository (fetch error, parse error) is logged and counted;
/// it never cancels sibling units and never aborts the batch. Only an
/// empty repository list is fatal. All store insertions and counter
/// updates happen in the single completion loop below, so concurrent
/// units never write shared state.
///
/// # Type Parameters
/// * `GS` - GraphSource implementation
/// * `LR` - LicenseRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct AuditOrganizationUseCase<GS, LR, PR> {
    graph_source: GS,
    license_repository: LR,
    progress_reporter: PR,
}

impl<GS, LR, PR> AuditOrganizationUseCase<GS, LR, PR>
where
    GS: GraphSource,
    LR: LicenseRepository,
    PR: ProgressReporter,
{
    /// Creates a new AuditOrganizationUseCase with injected dependencies
    pub fn new(graph_source: GS, license_repository: LR, progress_reporter: PR) -> Self {
        Self {
            graph_source,
            license_repository,
            progress_reporter,
        }
    }

    /// Executes the audit over the whole organization.
    ///
    /// # Returns
    /// The serialized finding sets and run counters. Returns an error only
    /// for fatal conditions (repository listing failed, or nothing to
    /// scan).
    pub async fn execute(&self, request: AuditRequest) -> Result<AuditResponse> {
        let repositories = self
            .graph_source
            .list_repositories(&request.organization)
            .await?;

        let (active, archived): (Vec<RepositoryRef>, Vec<RepositoryRef>) =
            repositories.into_iter().partition(|repo| !repo.archived);

        let mut summary = AuditSummary {
            repositories_archived: archived.len(),
            ..AuditSummary::default()
        };

        if active.is_empty() {
            return Err(AuditError::NoRepositoriesFound {
                organization: request.organization.clone(),
            }
            .into());
        }

        self.progress_reporter.report(&format!(
            "🔍 Scanning {} repositories in '{}' ({} archived, skipped)...",
            active.len(),
            request.organization,
            archived.len()
        ));

        let total = active.len();
        let mut findings = AuditFindings::default();

        {
            let mut completions = stream::iter(active)
                .map(|repository| async move {
                    let packages = self.process_repository(&repository).await;
                    (repository, packages)
                })
                .buffer_unordered(request.concurrency);

            let mut completed = 0usize;
            while let Some((repository, packages)) = completions.next().await {
                completed += 1;
                match packages {
                    Ok(packages) => {
                        summary.repositories_scanned += 1;
                        let outcome =
                            findings.classify(&repository.name, &packages, &request.policy);
                        summary.record_outcome(&repository.name, &outcome);
                    }
                    Err(error) => {
                        summary.repositories_failed += 1;
                        self.progress_reporter.report_error(&format!(
                            "⚠️  Warning: Failed to scan {}: {:#}",
                            repository.full_name(),
                            error
                        ));
                    }
                }
                self.progress_reporter
                    .report_progress(completed, total, Some(&repository.name));
            }
        }

        self.progress_reporter.report_completion(&format!(
            "✅ Scan complete: {} scanned, {} failed, {} affected",
            summary.repositories_scanned,
            summary.repositories_failed,
            summary.repositories_affected
        ));

        Ok(AuditResponse {
            blacklisted: findings.blacklisted.serialize(),
            missing: findings.missing.serialize(),
            summary,
        })
    }

    /// Processes one repository: fetch its graph, classify each unique
    /// dependency, resolve licenses concurrently.
    ///
    /// All-or-nothing per repository: any error here makes the whole
    /// repository count as failed, and no partial package list escapes.
    async fn process_repository(
        &self,
        repository: &RepositoryRef,
    ) -> Result<Vec<ResolvedPackage>> {
        let document = self.graph_source.fetch_dependency_graph(repository).await?;
        let relationships = RelationshipResolver::resolve(&document);

        // One license lookup per unique name per repository, first
        // occurrence wins.
        let mut seen = HashSet::new();
        let dependencies: Vec<&SbomPackage> = document
            .packages
            .iter()
            .filter(|package| !package.is_root())
            .filter(|package| seen.insert(package.name.clone()))
            .collect();

        let resolutions = dependencies.into_iter().map(|package| {
            let relationships = &relationships;
            async move {
                let resolution = self
                    .license_repository
                    .resolve_license(
                        &package.name,
                        &package.version_info,
                        package.declared_license(),
                    )
                    .await;

                ResolvedPackage {
                    name: package.name.clone(),
                    version: package.version_info.clone(),
                    license: resolution.license,
                    resolve_mode: resolution.mode,
                    is_transitive_dep: relationships.is_transitive(package.element_id()),
                }
            }
        });

        Ok(future::join_all(resolutions).await)
    }
}
