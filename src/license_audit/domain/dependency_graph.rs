use serde::Deserialize;

/// Version string that marks a repository's own root package in its
/// dependency graph document.
pub const ROOT_VERSION: &str = "main";

/// Sentinel element id assigned to packages whose SPDXID is missing,
/// so they can never alias the real root node.
pub const MISSING_SPDX_ID: &str = "NOTFOUND";

/// A repository's raw dependency graph document, as returned by the
/// dependency-scanning service (SPDX-shaped: package nodes plus
/// relationship edges).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SbomDocument {
    #[serde(default)]
    pub packages: Vec<SbomPackage>,
    #[serde(default)]
    pub relationships: Vec<SbomRelationship>,
}

/// A single package node in the dependency graph document.
#[derive(Debug, Clone, Deserialize)]
pub struct SbomPackage {
    #[serde(rename = "SPDXID")]
    pub spdx_id: Option<String>,
    pub name: String,
    #[serde(rename = "versionInfo", default)]
    pub version_info: String,
    #[serde(rename = "licenseConcluded")]
    pub license_concluded: Option<String>,
}

impl SbomPackage {
    /// The node's element id, with the sentinel substituted for a missing
    /// SPDXID.
    pub fn element_id(&self) -> &str {
        self.spdx_id.as_deref().unwrap_or(MISSING_SPDX_ID)
    }

    /// Whether this node is the repository's own root package.
    pub fn is_root(&self) -> bool {
        self.version_info == ROOT_VERSION
    }

    /// The explicitly declared license, if any. An empty string counts as
    /// absent.
    pub fn declared_license(&self) -> Option<&str> {
        self.license_concluded.as_deref().filter(|l| !l.is_empty())
    }
}

/// A relationship edge between two element ids. Edges lacking either id
/// are discarded during relationship resolution.
#[derive(Debug, Clone, Deserialize)]
pub struct SbomRelationship {
    #[serde(rename = "spdxElementId")]
    pub spdx_element_id: Option<String>,
    #[serde(rename = "relatedSpdxElement")]
    pub related_spdx_element: Option<String>,
}
