mod mock_graph_source;
mod mock_license_repository;
mod mock_notifier;
mod mock_progress_reporter;
mod mock_report_sink;

pub use mock_graph_source::MockGraphSource;
pub use mock_license_repository::MockLicenseRepository;
pub use mock_notifier::MockNotifier;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_report_sink::MockReportSink;
