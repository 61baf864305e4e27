//! Report text rendering.
//!
//! The aggregator's numeric results become the human-readable summary here;
//! the command layer decides what to print and when.

pub mod report;

// Re-export main functions
pub use report::{render_groups, render_section_summary, render_waste};
