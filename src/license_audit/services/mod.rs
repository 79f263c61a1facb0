pub mod relationship_resolver;
pub mod report_differ;
pub mod report_renderer;

pub use relationship_resolver::{RelationshipMap, RelationshipResolver};
pub use report_differ::ReportDiffer;
pub use report_renderer::ReportRenderer;
