//! Invocation of the external binary-inspection tool.
//!
//! objdump is a black box producing text: the client runs it twice (header
//! dump and full dump), buffers the output completely, and hands the text to
//! the parser. Nothing stays open across the parse boundary.

pub mod client;

// Re-export main functions
pub use client::{detect_architecture, full_dump, header_dump};
