use crate::license_audit::domain::SbomDocument;
use crate::shared::Result;
use async_trait::async_trait;

/// A reference to one organization repository, as needed by the audit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRef {
    pub name: String,
    pub owner: String,
    pub archived: bool,
}

impl RepositoryRef {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            owner: owner.into(),
            archived: false,
        }
    }

    /// `owner/name` form used in log messages and API paths.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

/// GraphSource port for repository enumeration and dependency graph
/// retrieval
///
/// Abstracts the forge API that knows the organization's repositories and
/// serves their raw dependency graph documents.
#[async_trait]
pub trait GraphSource: Send + Sync {
    /// Lists all repositories of the organization, including archived ones
    /// (the audit filters and counts those itself; no dependency graph
    /// endpoint is available for them).
    async fn list_repositories(&self, organization: &str) -> Result<Vec<RepositoryRef>>;

    /// Fetches one repository's raw dependency graph document.
    ///
    /// # Errors
    /// Returns an error when the repository has no dependency graph, the
    /// request fails, or the response cannot be parsed. The caller treats
    /// any error as a per-repository scan failure.
    async fn fetch_dependency_graph(&self, repository: &RepositoryRef) -> Result<SbomDocument>;
}
