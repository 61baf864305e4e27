//! CLI command implementations.
//!
//! The command orchestrates the library components (objdump client, parser,
//! aggregator, output) to produce the report.

pub mod report;

// Re-export main command functions
pub use report::{execute_report, validate_args, ReportArgs};
