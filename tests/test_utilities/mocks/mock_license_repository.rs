use async_trait::async_trait;
use org_license_audit::prelude::*;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Mock LicenseRepository with separately controllable version-scoped and
/// latest lookups. Lookups not configured fail, driving the resolution
/// ladder to its next rung.
pub struct MockLicenseRepository {
    versioned: HashMap<String, Option<String>>,
    latest: HashMap<String, Option<String>>,
    call_count: AtomicUsize,
}

impl MockLicenseRepository {
    pub fn new() -> Self {
        Self {
            versioned: HashMap::new(),
            latest: HashMap::new(),
            call_count: AtomicUsize::new(0),
        }
    }

    pub fn with_versioned_license(mut self, name: &str, version: &str, license: &str) -> Self {
        self.versioned.insert(
            format!("{}@{}", name, version),
            Some(license.to_string()),
        );
        self
    }

    /// A version-scoped lookup that succeeds but carries no license field.
    pub fn with_versioned_no_license(mut self, name: &str, version: &str) -> Self {
        self.versioned.insert(format!("{}@{}", name, version), None);
        self
    }

    pub fn with_latest_license(mut self, name: &str, license: &str) -> Self {
        self.latest
            .insert(name.to_string(), Some(license.to_string()));
        self
    }

    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

impl Default for MockLicenseRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LicenseRepository for MockLicenseRepository {
    async fn fetch_license(
        &self,
        package_name: &str,
        version: Option<&str>,
    ) -> Result<Option<String>> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        let entry = match version {
            Some(version) => self.versioned.get(&format!("{}@{}", package_name, version)),
            None => self.latest.get(package_name),
        };
        match entry {
            Some(license) => Ok(license.clone()),
            None => anyhow::bail!("package not found: {}", package_name),
        }
    }
}
