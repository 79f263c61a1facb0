use std::fmt;

/// License value used when the external metadata source declares no license
/// for a package.
pub const UNKNOWN_LICENSE: &str = "Unknown";

/// License value used when a package cannot be resolved against the npm
/// registry at all.
pub const NON_NPM_LICENSE: &str = "non-NPM";

/// Records which resolution strategy produced a package's license value.
///
/// The order of the variants mirrors the fallback ladder: an explicit
/// license on the graph node wins, then a version-scoped registry lookup,
/// then an unscoped (latest) lookup, then the terminal failure sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolveMode {
    Explicit,
    NpmCurrentVersion,
    NpmLatestVersion,
    Failed,
}

impl ResolveMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolveMode::Explicit => "explicit",
            ResolveMode::NpmCurrentVersion => "npmCurrVer",
            ResolveMode::NpmLatestVersion => "npmLatestVer",
            ResolveMode::Failed => "failed",
        }
    }
}

impl fmt::Display for ResolveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of the license resolution ladder for a single package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseResolution {
    pub license: String,
    pub mode: ResolveMode,
}

impl LicenseResolution {
    pub fn new(license: impl Into<String>, mode: ResolveMode) -> Self {
        Self {
            license: license.into(),
            mode,
        }
    }
}

/// A dependency after license resolution and direct/transitive
/// classification, ready for policy classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPackage {
    pub name: String,
    pub version: String,
    pub license: String,
    pub resolve_mode: ResolveMode,
    pub is_transitive_dep: bool,
}
