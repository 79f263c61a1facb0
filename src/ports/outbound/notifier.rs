use crate::shared::Result;
use async_trait::async_trait;

/// Notifier port for posting a short run summary to an external channel.
///
/// Best-effort by contract: callers may log and swallow notification
/// failures, since a missed ping must never invalidate a published report.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, text: &str) -> Result<()>;
}
