//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.
//!
//! Note that a failed demangle is deliberately *not* an error here: it is
//! expected per-symbol control flow, modeled as a variant of
//! [`crate::parser::DemangleOutcome`].

use crate::parser::SectionKind;
use std::process::ExitStatus;
use thiserror::Error;

/// Errors that can occur while invoking the external objdump tool
#[derive(Error, Debug)]
pub enum ObjdumpError {
    #[error("failed to run {command}: {source}")]
    InvocationFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{command} exited with {status}")]
    ToolFailed { command: String, status: ExitStatus },

    #[error("{arch} architecture not supported, only {supported} supported")]
    UnsupportedArchitecture { arch: String, supported: &'static str },

    #[error("could not detect architecture of ELF")]
    UnknownArchitecture,
}

/// Errors that can occur during report assembly
///
/// A missing section must fail loudly rather than default to zero: a silent
/// default would under-report memory usage.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("section table is missing the .{0} section")]
    MissingSection(SectionKind),
}
