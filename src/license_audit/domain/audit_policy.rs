use crate::shared::Result;
use anyhow::Context;
use regex::RegexSet;

/// AuditPolicy - the configured rules a resolved package is judged against
///
/// Holds the blacklist of unacceptable license identifiers (exact string
/// match) and the ignore rules (regular expressions over package names).
/// A package matching any ignore rule is exempt from classification
/// entirely, regardless of its license.
#[derive(Debug)]
pub struct AuditPolicy {
    blacklist: Vec<String>,
    ignore_rules: RegexSet,
}

impl AuditPolicy {
    /// Creates a policy from raw configuration values, compiling the ignore
    /// patterns eagerly so invalid regexes fail at startup rather than
    /// mid-scan.
    pub fn new(blacklist: Vec<String>, ignore_patterns: &[String]) -> Result<Self> {
        let ignore_rules = RegexSet::new(ignore_patterns)
            .context("Failed to compile ignore_packages patterns")?;

        Ok(Self {
            blacklist,
            ignore_rules,
        })
    }

    /// Whether the license identifier is on the blacklist (exact match).
    pub fn is_blacklisted(&self, license: &str) -> bool {
        self.blacklist.iter().any(|entry| entry == license)
    }

    /// Whether the package name matches any ignore pattern.
    pub fn is_ignored(&self, package_name: &str) -> bool {
        self.ignore_rules.is_match(package_name)
    }

    pub fn blacklist(&self) -> &[String] {
        &self.blacklist
    }
}
