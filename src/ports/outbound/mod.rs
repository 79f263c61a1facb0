/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (forge API, package registry,
/// console, webhook).
pub mod graph_source;
pub mod license_repository;
pub mod notifier;
pub mod output_presenter;
pub mod progress_reporter;
pub mod report_sink;

pub use graph_source::{GraphSource, RepositoryRef};
pub use license_repository::LicenseRepository;
pub use notifier::Notifier;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use report_sink::ReportSink;
