use async_trait::async_trait;
use org_license_audit::prelude::*;
use std::collections::HashMap;

/// Mock GraphSource serving canned dependency graph documents
pub struct MockGraphSource {
    repositories: Vec<RepositoryRef>,
    graphs: HashMap<String, SbomDocument>,
    failing: Vec<String>,
}

impl MockGraphSource {
    pub fn new() -> Self {
        Self {
            repositories: Vec::new(),
            graphs: HashMap::new(),
            failing: Vec::new(),
        }
    }

    pub fn with_repository(mut self, name: &str, graph_json: &str) -> Self {
        self.repositories.push(RepositoryRef::new("acme", name));
        self.graphs
            .insert(name.to_string(), serde_json::from_str(graph_json).unwrap());
        self
    }

    pub fn with_archived_repository(mut self, name: &str) -> Self {
        let mut repository = RepositoryRef::new("acme", name);
        repository.archived = true;
        self.repositories.push(repository);
        self
    }

    pub fn with_failing_repository(mut self, name: &str) -> Self {
        self.repositories.push(RepositoryRef::new("acme", name));
        self.failing.push(name.to_string());
        self
    }
}

impl Default for MockGraphSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GraphSource for MockGraphSource {
    async fn list_repositories(&self, _organization: &str) -> Result<Vec<RepositoryRef>> {
        Ok(self.repositories.clone())
    }

    async fn fetch_dependency_graph(&self, repository: &RepositoryRef) -> Result<SbomDocument> {
        if self.failing.contains(&repository.name) {
            anyhow::bail!("dependency graph fetch failed for {}", repository.name);
        }
        self.graphs
            .get(&repository.name)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("no graph for {}", repository.name))
    }
}
