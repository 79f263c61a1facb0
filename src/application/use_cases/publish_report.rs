use crate::license_audit::services::ReportDiffer;
use crate::ports::outbound::{Notifier, ProgressReporter, ReportSink};
use crate::shared::error::AuditError;
use crate::shared::Result;

/// Whether the publish step updated the stored report or left it alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishOutcome {
    Published,
    Skipped,
}

/// PublishReportUseCase - idempotent report publication
///
/// Fetches the previously published report, lets the differ decide whether
/// the new text changes anything, and publishes plus notifies only when it
/// does. Skipping is the normal case for an organization whose dependency
/// state did not move between runs.
///
/// # Type Parameters
/// * `RS` - ReportSink implementation
/// * `N` - Notifier implementation (optional at runtime)
/// * `PR` - ProgressReporter implementation
pub struct PublishReportUseCase<RS, N, PR> {
    report_sink: RS,
    notifier: Option<N>,
    progress_reporter: PR,
}

impl<RS, N, PR> PublishReportUseCase<RS, N, PR>
where
    RS: ReportSink,
    N: Notifier,
    PR: ProgressReporter,
{
    pub fn new(report_sink: RS, notifier: Option<N>, progress_reporter: PR) -> Self {
        Self {
            report_sink,
            notifier,
            progress_reporter,
        }
    }

    /// Publishes the rendered report if its content differs from the
    /// previous run's.
    ///
    /// Notification failures are logged and swallowed: the report is the
    /// artifact of record, the ping is best-effort.
    pub async fn execute(&self, report: &str, notification: &str) -> Result<PublishOutcome> {
        let previous = self.report_sink.previous_report().await?;

        if !ReportDiffer::needs_publish(previous.as_deref(), report) {
            self.progress_reporter
                .report("📄 Report content unchanged since last run, skipping publish");
            return Ok(PublishOutcome::Skipped);
        }

        self.report_sink
            .publish(report)
            .await
            .map_err(|error| AuditError::ReportPublish {
                details: format!("{:#}", error),
            })?;
        self.progress_reporter.report_completion("✅ Report published");

        if let Some(notifier) = &self.notifier {
            if let Err(error) = notifier.notify(notification).await {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: Failed to send notification: {:#}",
                    error
                ));
            }
        }

        Ok(PublishOutcome::Published)
    }
}
