//! Batch analysis and reporting for field-migration readiness.
//!
//! Consumes record batches from any collection surface (form, grid, import),
//! runs the core validator and the migration consistency check over each
//! record, and reduces the results into a serializable summary plus a
//! rendered markdown report.

pub mod aliases;
pub mod engine;
pub mod metrics;
pub mod model;
pub mod report;

pub use aliases::resolve_field_alias;
pub use engine::{Analyzer, analyze};
pub use metrics::{
    AnalysisSummary, ConsistencyMismatch, FieldCounts, MigrationCandidate, SUMMARY_VERSION,
};
pub use model::{AnalyzeOptions, FieldPair, FieldRecord};
pub use report::render_report;
