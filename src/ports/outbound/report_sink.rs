use crate::shared::Result;
use async_trait::async_trait;

/// ReportSink port for report persistence
///
/// Abstracts wherever the rendered report lives between runs (an issue, a
/// wiki page, a file). The previous report text is the only state the
/// pipeline carries across runs, and it is treated as an opaque string.
#[async_trait]
pub trait ReportSink: Send + Sync {
    /// The previously published report text, if any.
    async fn previous_report(&self) -> Result<Option<String>>;

    /// Publishes the new report text, replacing the previous one.
    async fn publish(&self, body: &str) -> Result<()>;
}
