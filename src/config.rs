//! Configuration file support for org-license-audit.
//!
//! Provides YAML-based configuration through `license-audit.config.yml`
//! files, including data structures, file loading, and validation. The
//! blacklist and the ignore pattern list are mandatory: running an audit
//! without them is a misconfiguration, not an empty policy.

use anyhow::{bail, Context};
use regex::RegexSet;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::application::dto::DEFAULT_CONCURRENCY;
use crate::shared::error::AuditError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "license-audit.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    /// Organization whose repositories are audited.
    pub organization: String,
    /// License identifiers that must not appear (exact string match).
    pub blacklist: Vec<String>,
    /// Regular expressions over package names; a matching package is
    /// exempt from classification entirely.
    pub ignore_packages: Vec<String>,
    /// Repository fan-out cap.
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
    /// Where the report is published.
    pub report: ReportConfig,
    /// Optional webhook for the run summary.
    pub webhook_url: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yml::Value>,
}

/// Report publication target: an issue, identified by title, in a
/// dedicated repository.
#[derive(Debug, Deserialize)]
pub struct ReportConfig {
    pub repository: String,
    pub issue_title: String,
}

fn default_concurrency() -> usize {
    DEFAULT_CONCURRENCY
}

/// Load config from an explicit path. Returns an error if the file is not
/// found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        return Err(AuditError::ConfigNotFound {
            path: path.to_path_buf(),
            suggestion: format!(
                "Create a {} file or pass --config with the correct path",
                CONFIG_FILENAME
            ),
        }
        .into());
    }

    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yml::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax and that organization, blacklist, ignore_packages and report are all present.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if config.organization.trim().is_empty() {
        bail!(
            "Invalid config: organization must not be empty.\n\n\
             💡 Hint: Set 'organization' to the GitHub organization to audit."
        );
    }

    if config.blacklist.is_empty() {
        bail!(
            "Invalid config: blacklist must not be empty.\n\n\
             💡 Hint: List at least one license identifier (e.g., \"GPL-3.0\") that the audit should flag."
        );
    }

    // Compile eagerly so bad patterns abort the run before any scanning.
    RegexSet::new(&config.ignore_packages).with_context(|| {
        "Invalid config: ignore_packages contains an invalid regular expression.\n\n\
         💡 Hint: Each entry must be a valid regex (e.g., \"^@acme/\")."
            .to_string()
    })?;

    if config.concurrency == 0 {
        bail!(
            "Invalid config: concurrency must be at least 1.\n\n\
             💡 Hint: Omit the field to use the default of {}.",
            DEFAULT_CONCURRENCY
        );
    }

    if !config.report.repository.contains('/') {
        bail!(
            "Invalid config: report.repository must be in 'owner/name' form.\n\n\
             💡 Hint: e.g., \"acme/license-reports\"."
        );
    }

    if config.report.issue_title.trim().is_empty() {
        bail!(
            "Invalid config: report.issue_title must not be empty.\n\n\
             💡 Hint: The issue with this title holds the published report."
        );
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const VALID_CONFIG: &str = r#"
organization: acme
blacklist:
  - GPL-3.0
  - AGPL-3.0
ignore_packages:
  - "^@acme/"
concurrency: 3
report:
  repository: acme/license-reports
  issue_title: "License audit report"
webhook_url: "https://hooks.example.com/T000/B000"
"#;

    fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("config.yml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, VALID_CONFIG);

        let config = load_config_from_path(&path).unwrap();
        assert_eq!(config.organization, "acme");
        assert_eq!(config.blacklist, vec!["GPL-3.0", "AGPL-3.0"]);
        assert_eq!(config.ignore_packages, vec!["^@acme/"]);
        assert_eq!(config.concurrency, 3);
        assert_eq!(config.report.repository, "acme/license-reports");
        assert_eq!(config.report.issue_title, "License audit report");
        assert_eq!(
            config.webhook_url.as_deref(),
            Some("https://hooks.example.com/T000/B000")
        );
    }

    #[test]
    fn test_concurrency_defaults_when_omitted() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
organization: acme
blacklist: [GPL-3.0]
ignore_packages: []
report:
  repository: acme/reports
  issue_title: "Report"
"#,
        );

        let config = load_config_from_path(&path).unwrap();
        assert_eq!(config.concurrency, DEFAULT_CONCURRENCY);
        assert!(config.webhook_url.is_none());
    }

    #[test]
    fn test_missing_file_is_config_not_found() {
        let result = load_config_from_path(Path::new("/nonexistent/config.yml"));
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Configuration file not found"));
    }

    #[test]
    fn test_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "invalid: yaml: [[[broken");

        let result = load_config_from_path(&path);
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_missing_blacklist_is_fatal() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
organization: acme
ignore_packages: []
report:
  repository: acme/reports
  issue_title: "Report"
"#,
        );

        let result = load_config_from_path(&path);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_blacklist_is_fatal() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
organization: acme
blacklist: []
ignore_packages: []
report:
  repository: acme/reports
  issue_title: "Report"
"#,
        );

        let result = load_config_from_path(&path);
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("blacklist must not be empty"));
    }

    #[test]
    fn test_missing_ignore_packages_is_fatal() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
organization: acme
blacklist: [GPL-3.0]
report:
  repository: acme/reports
  issue_title: "Report"
"#,
        );

        let result = load_config_from_path(&path);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_ignore_regex_is_fatal() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
organization: acme
blacklist: [GPL-3.0]
ignore_packages: ["[unclosed"]
report:
  repository: acme/reports
  issue_title: "Report"
"#,
        );

        let result = load_config_from_path(&path);
        assert!(result.is_err());
        let err = format!("{:#}", result.unwrap_err());
        assert!(err.contains("ignore_packages"));
    }

    #[test]
    fn test_zero_concurrency_is_fatal() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
organization: acme
blacklist: [GPL-3.0]
ignore_packages: []
concurrency: 0
report:
  repository: acme/reports
  issue_title: "Report"
"#,
        );

        let result = load_config_from_path(&path);
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("concurrency must be at least 1"));
    }

    #[test]
    fn test_bad_report_repository_is_fatal() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
organization: acme
blacklist: [GPL-3.0]
ignore_packages: []
report:
  repository: just-a-name
  issue_title: "Report"
"#,
        );

        let result = load_config_from_path(&path);
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("owner/name"));
    }

    #[test]
    fn test_unknown_fields_are_collected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
organization: acme
blacklist: [GPL-3.0]
ignore_packages: []
report:
  repository: acme/reports
  issue_title: "Report"
unknown_field: true
another_unknown: value
"#,
        );

        let config = load_config_from_path(&path).unwrap();
        assert_eq!(config.unknown_fields.len(), 2);
        assert!(config.unknown_fields.contains_key("unknown_field"));
        assert!(config.unknown_fields.contains_key("another_unknown"));
    }
}
