use crate::license_audit::domain::SbomDocument;
use std::collections::HashMap;

/// One-hop relationship lookup for a single dependency graph document.
///
/// Maps each element id to the first related element id seen for it, and
/// records the root node's element id. Classification is a single
/// comparison: a dependency whose first-seen relationship does not point at
/// the root (including dependencies with no relationship entry at all) is
/// transitive.
#[derive(Debug, Clone, Default)]
pub struct RelationshipMap {
    root_id: String,
    first_related: HashMap<String, String>,
}

impl RelationshipMap {
    pub fn root_id(&self) -> &str {
        &self.root_id
    }

    /// The first-seen related element id for a source element id.
    pub fn related_to(&self, element_id: &str) -> Option<&str> {
        self.first_related.get(element_id).map(String::as_str)
    }

    /// Whether the package with this element id is a transitive dependency.
    ///
    /// A missing relationship entry never matches the root id, so such
    /// packages classify transitive. When the document has no root node the
    /// root id is empty and every package classifies transitive - degraded,
    /// not an error.
    pub fn is_transitive(&self, element_id: &str) -> bool {
        self.related_to(element_id) != Some(self.root_id.as_str())
    }
}

/// RelationshipResolver service for building the one-hop lookup
///
/// Pure graph bookkeeping with no I/O and no failure mode; malformed edges
/// are silently excluded.
pub struct RelationshipResolver;

impl RelationshipResolver {
    /// Builds the relationship map for a document.
    ///
    /// One pass over the packages finds the root node (version `"main"`);
    /// one pass over the edges retains the first edge per source id. Edges
    /// missing either id are discarded, matching the graph service's habit
    /// of emitting partial relationship records.
    pub fn resolve(document: &SbomDocument) -> RelationshipMap {
        let root_id = document
            .packages
            .iter()
            .find(|package| package.is_root())
            .and_then(|package| package.spdx_id.clone())
            .unwrap_or_default();

        let mut first_related: HashMap<String, String> = HashMap::new();
        for edge in &document.relationships {
            let (Some(source), Some(related)) = (
                edge.spdx_element_id.as_deref().filter(|id| !id.is_empty()),
                edge.related_spdx_element
                    .as_deref()
                    .filter(|id| !id.is_empty()),
            ) else {
                continue;
            };

            first_related
                .entry(source.to_string())
                .or_insert_with(|| related.to_string());
        }

        RelationshipMap {
            root_id,
            first_related,
        }
    }
}
