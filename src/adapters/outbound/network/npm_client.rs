use crate::ports::outbound::LicenseRepository;
use crate::shared::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

const NPM_REGISTRY_BASE: &str = "https://registry.npmjs.org";

/// The npm `license` field is either a bare SPDX expression or, in older
/// packages, an object with a `type` field.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum LicenseField {
    Expression(String),
    Legacy {
        #[serde(rename = "type")]
        license_type: String,
    },
}

impl LicenseField {
    fn into_string(self) -> String {
        match self {
            LicenseField::Expression(expression) => expression,
            LicenseField::Legacy { license_type } => license_type,
        }
    }
}

#[derive(Debug, Deserialize)]
struct VersionMetadata {
    #[serde(default)]
    license: Option<LicenseField>,
}

/// NpmLicenseRepository adapter for fetching license information from the
/// npm registry
///
/// This adapter implements the LicenseRepository port, providing async
/// network access to the npm registry JSON API for version metadata.
///
/// # Async Support
/// Uses an async reqwest client for non-blocking HTTP requests, enabling
/// parallel license fetching across packages and repositories.
pub struct NpmLicenseRepository {
    client: reqwest::Client,
    registry_base: String,
    max_retries: u32,
}

impl NpmLicenseRepository {
    /// Creates a new npm license repository with default configuration
    pub fn new() -> Result<Self> {
        Self::with_registry_base(NPM_REGISTRY_BASE.to_string())
    }

    /// Creates a repository against a custom registry base URL (used by
    /// tests and registry mirrors).
    pub fn with_registry_base(registry_base: String) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("org-license-audit/{}", version);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            registry_base,
            max_retries: 3,
        })
    }

    /// Fetches version metadata from the registry with retry logic (async)
    async fn fetch_with_retry(
        &self,
        package_name: &str,
        version: Option<&str>,
    ) -> Result<VersionMetadata> {
        let mut last_error = None;

        for attempt in 1..=self.max_retries {
            match self.fetch_from_registry(package_name, version).await {
                Ok(result) => return Ok(result),
                Err(e) => {
                    last_error = Some(e);
                    if attempt < self.max_retries {
                        // Retry after a short wait (async)
                        tokio::time::sleep(Duration::from_millis(100 * attempt as u64)).await;
                    }
                }
            }
        }

        Err(last_error.unwrap())
    }

    /// Validates package name and version for URL safety.
    ///
    /// Scoped npm names legitimately contain `@` and `/`; both are
    /// percent-encoded before use, so only traversal and query injection
    /// characters are rejected here.
    fn validate_url_component(component: &str, component_type: &str) -> Result<()> {
        if component.contains("..") {
            anyhow::bail!(
                "Security: {} contains '..' which is not allowed",
                component_type
            );
        }

        if component.contains('\\') || component.contains('#') || component.contains('?') {
            anyhow::bail!(
                "Security: {} contains URL-unsafe characters",
                component_type
            );
        }

        Ok(())
    }

    /// Fetches version metadata from the npm registry API (async)
    async fn fetch_from_registry(
        &self,
        package_name: &str,
        version: Option<&str>,
    ) -> Result<VersionMetadata> {
        Self::validate_url_component(package_name, "Package name")?;
        if let Some(version) = version {
            Self::validate_url_component(version, "Version")?;
        }

        // URL encode components to handle special characters safely.
        // Scoped names become e.g. %40scope%2Fname, which the registry
        // resolves correctly.
        let encoded_package = urlencoding::encode(package_name);
        let url = match version {
            Some(version) => format!(
                "{}/{}/{}",
                self.registry_base,
                encoded_package,
                urlencoding::encode(version)
            ),
            // Without a version constraint the `latest` dist-tag is used.
            None => format!("{}/{}/latest", self.registry_base, encoded_package),
        };

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            anyhow::bail!("npm registry returned status code {}", response.status());
        }

        let metadata: VersionMetadata = response.json().await?;
        Ok(metadata)
    }
}

// Note: no Default implementation. Default::default() would have to panic
// if client creation fails; use NpmLicenseRepository::new() and handle the
// Result.

#[async_trait]
impl LicenseRepository for NpmLicenseRepository {
    async fn fetch_license(
        &self,
        package_name: &str,
        version: Option<&str>,
    ) -> Result<Option<String>> {
        let metadata = self.fetch_with_retry(package_name, version).await?;
        Ok(metadata.license.map(LicenseField::into_string))
    }
}
