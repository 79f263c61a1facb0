use crate::license_audit::domain::SbomDocument;
use crate::ports::outbound::{GraphSource, RepositoryRef};
use crate::shared::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

const GITHUB_API_BASE: &str = "https://api.github.com";
const REPOS_PER_PAGE: usize = 100;

#[derive(Debug, Deserialize)]
struct RepositoryEntry {
    name: String,
    owner: OwnerEntry,
    #[serde(default)]
    archived: bool,
}

#[derive(Debug, Deserialize)]
struct OwnerEntry {
    login: String,
}

/// The dependency graph endpoint wraps the SPDX document in an envelope.
#[derive(Debug, Deserialize)]
struct SbomEnvelope {
    sbom: SbomDocument,
}

/// GithubGraphSource adapter for repository enumeration and dependency
/// graph retrieval
///
/// This adapter implements the GraphSource port against the GitHub REST
/// API: the paginated organization repository listing and the per-repo
/// dependency-graph SBOM endpoint.
pub struct GithubGraphSource {
    client: reqwest::Client,
    token: String,
    api_base: String,
}

impl GithubGraphSource {
    /// Creates a new adapter authenticating with the given token
    pub fn new(token: String) -> Result<Self> {
        Self::with_api_base(token, GITHUB_API_BASE.to_string())
    }

    /// Creates an adapter against a custom API base URL (used by tests and
    /// GitHub Enterprise installations).
    pub fn with_api_base(token: String, api_base: String) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("org-license-audit/{}", version);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            token,
            api_base,
        })
    }

    fn request(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .get(url)
            .bearer_auth(&self.token)
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
    }
}

#[async_trait]
impl GraphSource for GithubGraphSource {
    async fn list_repositories(&self, organization: &str) -> Result<Vec<RepositoryRef>> {
        let mut repositories = Vec::new();
        let mut page = 1usize;

        loop {
            let url = format!(
                "{}/orgs/{}/repos?per_page={}&page={}",
                self.api_base,
                urlencoding::encode(organization),
                REPOS_PER_PAGE,
                page
            );

            let response = self.request(&url).send().await?;
            if !response.status().is_success() {
                anyhow::bail!(
                    "GitHub API returned status code {} while listing repositories",
                    response.status()
                );
            }

            let entries: Vec<RepositoryEntry> = response.json().await?;
            let received = entries.len();

            repositories.extend(entries.into_iter().map(|entry| RepositoryRef {
                name: entry.name,
                owner: entry.owner.login,
                archived: entry.archived,
            }));

            if received < REPOS_PER_PAGE {
                break;
            }
            page += 1;
        }

        Ok(repositories)
    }

    async fn fetch_dependency_graph(&self, repository: &RepositoryRef) -> Result<SbomDocument> {
        let url = format!(
            "{}/repos/{}/{}/dependency-graph/sbom",
            self.api_base,
            urlencoding::encode(&repository.owner),
            urlencoding::encode(&repository.name)
        );

        let response = self.request(&url).send().await?;
        if !response.status().is_success() {
            anyhow::bail!(
                "GitHub API returned status code {} for the dependency graph of {}",
                response.status(),
                repository.full_name()
            );
        }

        let envelope: SbomEnvelope = response.json().await?;
        Ok(envelope.sbom)
    }
}
