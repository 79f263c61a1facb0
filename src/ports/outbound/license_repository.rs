use crate::license_audit::domain::{
    LicenseResolution, ResolveMode, NON_NPM_LICENSE, UNKNOWN_LICENSE,
};
use crate::shared::Result;
use async_trait::async_trait;

/// LicenseRepository port for fetching license information
///
/// This port abstracts the external package metadata source (the npm
/// registry) used to resolve licenses for packages that do not declare one
/// in the dependency graph document.
///
/// # Async Support
/// All methods are async for efficient parallel license fetching.
/// Implementations must be `Send + Sync`, mutate no shared state, and
/// tolerate arbitrarily many concurrent invocations.
#[async_trait]
pub trait LicenseRepository: Send + Sync {
    /// Fetches the declared license for a package from the registry.
    ///
    /// # Arguments
    /// * `package_name` - Name of the package
    /// * `version` - Specific version to query, or `None` for the latest
    ///   available version
    ///
    /// # Returns
    /// `Ok(Some(license))` when the registry declares one, `Ok(None)` when
    /// the package exists but carries no license field.
    ///
    /// # Errors
    /// Returns an error if the package or version is not found, the network
    /// request fails, or the response cannot be parsed.
    async fn fetch_license(
        &self,
        package_name: &str,
        version: Option<&str>,
    ) -> Result<Option<String>>;

    /// Resolves a license through the full fallback ladder.
    ///
    /// Stages, each attempted only if the previous one did not succeed:
    /// 1. an explicit license declared on the graph node is returned
    ///    unmodified (no network call);
    /// 2. a version-scoped registry lookup (a missing license field maps to
    ///    `"Unknown"`);
    /// 3. an unscoped lookup against the latest available version;
    /// 4. the terminal `"non-NPM"` sentinel - the package is assumed to
    ///    live outside the queried ecosystem and is not retried.
    async fn resolve_license(
        &self,
        package_name: &str,
        version: &str,
        declared: Option<&str>,
    ) -> LicenseResolution {
        if let Some(license) = declared {
            return LicenseResolution::new(license, ResolveMode::Explicit);
        }

        if let Ok(license) = self.fetch_license(package_name, Some(version)).await {
            return LicenseResolution::new(
                license.unwrap_or_else(|| UNKNOWN_LICENSE.to_string()),
                ResolveMode::NpmCurrentVersion,
            );
        }

        match self.fetch_license(package_name, None).await {
            Ok(license) => LicenseResolution::new(
                license.unwrap_or_else(|| UNKNOWN_LICENSE.to_string()),
                ResolveMode::NpmLatestVersion,
            ),
            Err(_) => LicenseResolution::new(NON_NPM_LICENSE, ResolveMode::Failed),
        }
    }
}
