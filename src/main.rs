use org_license_audit::adapters::outbound::console::StderrProgressReporter;
use org_license_audit::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use org_license_audit::adapters::outbound::network::{
    CachingLicenseRepository, GithubGraphSource, GithubIssueSink, NpmLicenseRepository,
    WebhookNotifier,
};
use org_license_audit::application::dto::AuditRequest;
use org_license_audit::application::use_cases::{AuditOrganizationUseCase, PublishReportUseCase};
use org_license_audit::cli::Args;
use org_license_audit::config::load_config_from_path;
use org_license_audit::license_audit::domain::AuditPolicy;
use org_license_audit::license_audit::services::ReportRenderer;
use org_license_audit::ports::outbound::OutputPresenter;
use org_license_audit::shared::error::{AuditError, ExitCode};
use org_license_audit::shared::Result;
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    match run().await {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

async fn run() -> Result<ExitCode> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Load and validate configuration (fatal on any problem, before any
    // scanning starts)
    let config = load_config_from_path(Path::new(&args.config))?;

    let token =
        std::env::var("GITHUB_TOKEN").map_err(|_| AuditError::MissingCredentials {
            message: "GITHUB_TOKEN is not set".to_string(),
        })?;

    let policy = AuditPolicy::new(config.blacklist.clone(), &config.ignore_packages)?;

    // Create adapters (Dependency Injection)
    let graph_source = GithubGraphSource::new(token.clone())?;
    let license_repository = CachingLicenseRepository::new(NpmLicenseRepository::new()?);
    let progress_reporter = StderrProgressReporter::new();

    // Create use case with injected dependencies
    let use_case =
        AuditOrganizationUseCase::new(graph_source, license_repository, progress_reporter);

    let concurrency = args.concurrency.unwrap_or(config.concurrency);
    let request = AuditRequest::new(config.organization.clone(), concurrency, policy);

    // Execute the audit
    let response = use_case.execute(request).await?;

    let report =
        ReportRenderer::render(&response.blacklisted, &response.missing, &response.summary);

    if let Some(output_path) = &args.output {
        FileSystemWriter::new(PathBuf::from(output_path)).present(&report)?;
    } else if args.dry_run {
        StdoutPresenter::new().present(&report)?;
    } else {
        let report_sink = GithubIssueSink::new(
            token,
            config.report.repository.clone(),
            config.report.issue_title.clone(),
        )?;
        let notifier = match &config.webhook_url {
            Some(url) => Some(WebhookNotifier::new(url.clone())?),
            None => None,
        };
        let publisher =
            PublishReportUseCase::new(report_sink, notifier, StderrProgressReporter::new());

        let notification = ReportRenderer::render_notification(
            &response.blacklisted,
            &response.missing,
            &response.summary,
        );
        publisher.execute(&report, &notification).await?;
    }

    Ok(if response.has_blacklisted_findings() {
        ExitCode::FindingsDetected
    } else {
        ExitCode::Success
    })
}
