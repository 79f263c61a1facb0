use crate::shared::Result;

/// OutputPresenter port for local report output
///
/// Used by the dry-run and file-output paths, where the rendered report is
/// handed to the user directly instead of being published.
pub trait OutputPresenter {
    /// Presents the rendered report.
    ///
    /// # Errors
    /// Returns an error if the output destination cannot be written.
    fn present(&self, content: &str) -> Result<()>;
}
