use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the audit ran and found no blacklisted licenses
    Success = 0,
    /// Blacklisted licenses were found (the report was still produced)
    FindingsDetected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (API error, network error, configuration error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::FindingsDetected => write!(f, "Findings Detected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for the organization license audit.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
///
/// Only configuration-level failures and an empty repository list are fatal;
/// per-repository scan failures are caught inside the audit use case and
/// surface as counters, never as errors.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("Configuration file not found: {path}\n\n💡 Hint: {suggestion}")]
    ConfigNotFound { path: PathBuf, suggestion: String },

    #[error("Missing credentials: {message}\n\n💡 Hint: export a GITHUB_TOKEN with read access to the organization")]
    MissingCredentials { message: String },

    #[error("No scannable repositories found in organization '{organization}'\n\n💡 Hint: Check the organization name and that the token can list its repositories")]
    NoRepositoriesFound { organization: String },

    #[error("Failed to publish report: {details}")]
    ReportPublish { details: String },

    #[error("Failed to write report to {path}: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    ReportWrite { path: PathBuf, details: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::FindingsDetected.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::FindingsDetected),
            "Findings Detected (1)"
        );
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_config_not_found_display() {
        let error = AuditError::ConfigNotFound {
            path: PathBuf::from("/test/license-audit.config.yml"),
            suggestion: "Test suggestion".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Configuration file not found"));
        assert!(display.contains("/test/license-audit.config.yml"));
        assert!(display.contains("💡 Hint:"));
        assert!(display.contains("Test suggestion"));
    }

    #[test]
    fn test_missing_credentials_display() {
        let error = AuditError::MissingCredentials {
            message: "GITHUB_TOKEN is not set".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Missing credentials"));
        assert!(display.contains("GITHUB_TOKEN"));
    }

    #[test]
    fn test_no_repositories_found_display() {
        let error = AuditError::NoRepositoriesFound {
            organization: "acme".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("No scannable repositories"));
        assert!(display.contains("acme"));
    }

    #[test]
    fn test_report_write_display() {
        let error = AuditError::ReportWrite {
            path: PathBuf::from("/test/report.md"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write report"));
        assert!(display.contains("/test/report.md"));
        assert!(display.contains("Permission denied"));
    }
}
