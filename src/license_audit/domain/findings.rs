use super::audit_policy::AuditPolicy;
use super::resolved_package::{ResolveMode, ResolvedPackage, UNKNOWN_LICENSE};
use std::collections::BTreeMap;

/// Composite aggregation key. The derived ordering (name, then license,
/// then version, each lexicographic) is exactly the serialization order
/// required for reproducible reports.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct FindingKey {
    pub name: String,
    pub license: String,
    pub version: String,
}

/// One repository's occurrence of an aggregated finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindingOccurrence {
    pub repo: String,
    pub resolve_mode: ResolveMode,
    pub is_transitive_dep: bool,
}

/// AggregationStore - deduplicating multi-level store for findings
///
/// Conceptually a name -> license -> version -> occurrences mapping; kept
/// as a single flat ordered map over the composite key, with the innermost
/// list re-sorted at serialization time. Insertion order is completion
/// order and carries no meaning; `serialize` is deterministic for any
/// insertion order of the same tuples.
#[derive(Debug, Default)]
pub struct AggregationStore {
    entries: BTreeMap<FindingKey, Vec<FindingOccurrence>>,
}

impl AggregationStore {
    /// Appends one occurrence, creating the key chain on first use.
    pub fn insert(&mut self, repo: &str, package: &ResolvedPackage) {
        let key = FindingKey {
            name: package.name.clone(),
            license: package.license.clone(),
            version: package.version.clone(),
        };
        self.entries.entry(key).or_default().push(FindingOccurrence {
            repo: repo.to_string(),
            resolve_mode: package.resolve_mode,
            is_transitive_dep: package.is_transitive_dep,
        });
    }

    /// Produces the fully sorted array form: keys in (name, license,
    /// version) order, occurrences sorted by repository name.
    pub fn serialize(&self) -> Vec<AggregatedFinding> {
        self.entries
            .iter()
            .map(|(key, occurrences)| {
                let mut occurrences = occurrences.clone();
                occurrences.sort_by(|a, b| a.repo.cmp(&b.repo));
                AggregatedFinding {
                    name: key.name.clone(),
                    license: key.license.clone(),
                    version: key.version.clone(),
                    occurrences,
                }
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of occurrences across all keys.
    pub fn occurrence_count(&self) -> usize {
        self.entries.values().map(|v| v.len()).sum()
    }
}

/// One serialized finding: a (name, license, version) tuple with all
/// repositories it was observed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatedFinding {
    pub name: String,
    pub license: String,
    pub version: String,
    pub occurrences: Vec<FindingOccurrence>,
}

/// Result of classifying one repository's resolved packages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassifyOutcome {
    pub affected: bool,
    pub direct_findings: usize,
    pub transitive_findings: usize,
}

/// AuditFindings - the two parallel result sets of a run
///
/// Blacklisted-license findings and missing-license findings. A package
/// lands in at most one of the two stores; compliant packages are dropped.
#[derive(Debug, Default)]
pub struct AuditFindings {
    pub blacklisted: AggregationStore,
    pub missing: AggregationStore,
}

impl AuditFindings {
    /// Classifies one repository's packages against the policy.
    ///
    /// Packages matching any ignore rule are skipped entirely. A
    /// blacklisted license wins over the missing-license check, so no
    /// package is ever recorded in both stores.
    pub fn classify(
        &mut self,
        repo: &str,
        packages: &[ResolvedPackage],
        policy: &AuditPolicy,
    ) -> ClassifyOutcome {
        let mut outcome = ClassifyOutcome::default();

        for package in packages {
            if policy.is_ignored(&package.name) {
                continue;
            }

            if policy.is_blacklisted(&package.license) {
                self.blacklisted.insert(repo, package);
            } else if package.license == UNKNOWN_LICENSE {
                self.missing.insert(repo, package);
            } else {
                continue;
            }

            outcome.affected = true;
            if package.is_transitive_dep {
                outcome.transitive_findings += 1;
            } else {
                outcome.direct_findings += 1;
            }
        }

        outcome
    }
}
