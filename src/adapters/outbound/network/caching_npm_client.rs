use crate::ports::outbound::LicenseRepository;
use crate::shared::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

/// Cache key for license lookups. `None` for the version is the
/// latest-available query and is cached separately from any pinned
/// version.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
struct CacheKey {
    package_name: String,
    version: Option<String>,
}

impl CacheKey {
    fn new(package_name: &str, version: Option<&str>) -> Self {
        Self {
            package_name: package_name.to_string(),
            version: version.map(String::from),
        }
    }
}

/// CachingLicenseRepository wraps a LicenseRepository and adds in-memory
/// caching.
///
/// The same package name recurs across most repositories of an
/// organization, so one successful registry lookup serves the whole run.
/// Only successes are cached; failures stay uncached so the ladder's
/// fallback semantics are untouched. The cache is thread-safe and suitable
/// for concurrent access.
pub struct CachingLicenseRepository<R: LicenseRepository> {
    inner: R,
    cache: Arc<DashMap<CacheKey, Option<String>>>,
}

impl<R: LicenseRepository> CachingLicenseRepository<R> {
    /// Creates a new caching repository wrapping the given inner repository
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            cache: Arc::new(DashMap::new()),
        }
    }

    /// Returns the current cache size (for testing/monitoring)
    #[cfg(test)]
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

#[async_trait]
impl<R: LicenseRepository> LicenseRepository for CachingLicenseRepository<R> {
    async fn fetch_license(
        &self,
        package_name: &str,
        version: Option<&str>,
    ) -> Result<Option<String>> {
        let key = CacheKey::new(package_name, version);

        if let Some(cached) = self.cache.get(&key) {
            return Ok(cached.clone());
        }

        let license = self.inner.fetch_license(package_name, version).await?;
        self.cache.insert(key, license.clone());

        Ok(license)
    }
}
