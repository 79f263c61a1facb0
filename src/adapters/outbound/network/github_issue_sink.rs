use crate::ports::outbound::ReportSink;
use crate::shared::Result;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

const GITHUB_API_BASE: &str = "https://api.github.com";
const ISSUES_PER_PAGE: usize = 100;

#[derive(Debug, Deserialize)]
struct IssueEntry {
    number: u64,
    title: String,
    #[serde(default)]
    body: Option<String>,
}

/// GithubIssueSink adapter for report persistence
///
/// Implements the ReportSink port against a single GitHub issue in a
/// configured repository, identified by its title. The issue body is the
/// previously published report text; publishing edits the body in place,
/// or opens the issue on the first run.
pub struct GithubIssueSink {
    client: reqwest::Client,
    token: String,
    api_base: String,
    repository: String,
    issue_title: String,
}

impl GithubIssueSink {
    /// Creates a sink against `repository` (in `owner/name` form) using
    /// the issue with `issue_title` as the report location.
    pub fn new(token: String, repository: String, issue_title: String) -> Result<Self> {
        Self::with_api_base(token, repository, issue_title, GITHUB_API_BASE.to_string())
    }

    pub fn with_api_base(
        token: String,
        repository: String,
        issue_title: String,
        api_base: String,
    ) -> Result<Self> {
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
            repository,
            issue_title,
        })
    }

    fn headers(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .bearer_auth(&self.token)
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
    }

    /// Finds the open report issue by title, if it exists.
    async fn find_issue(&self) -> Result<Option<IssueEntry>> {
        let url = format!(
            "{}/repos/{}/issues?state=open&per_page={}",
            self.api_base, self.repository, ISSUES_PER_PAGE
        );

        let response = self.headers(self.client.get(&url)).send().await?;
        if !response.status().is_success() {
            anyhow::bail!(
                "GitHub API returned status code {} while listing issues",
                response.status()
            );
        }

        let issues: Vec<IssueEntry> = response.json().await?;
        Ok(issues
            .into_iter()
            .find(|issue| issue.title == self.issue_title))
    }
}

#[async_trait]
impl ReportSink for GithubIssueSink {
    async fn previous_report(&self) -> Result<Option<String>> {
        Ok(self.find_issue().await?.and_then(|issue| issue.body))
    }

    async fn publish(&self, body: &str) -> Result<()> {
        let response = match self.find_issue().await? {
            Some(issue) => {
                let url = format!(
                    "{}/repos/{}/issues/{}",
                    self.api_base, self.repository, issue.number
                );
                self.headers(self.client.patch(&url))
                    .json(&json!({ "body": body }))
                    .send()
                    .await?
            }
            None => {
                let url = format!("{}/repos/{}/issues", self.api_base, self.repository);
                self.headers(self.client.post(&url))
                    .json(&json!({ "title": self.issue_title, "body": body }))
                    .send()
                    .await?
            }
        };

        if !response.status().is_success() {
            anyhow::bail!(
                "GitHub API returned status code {} while publishing the report",
                response.status()
            );
        }

        Ok(())
    }
}
