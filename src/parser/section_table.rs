//! Section-table line parser.
//!
//! Recognizes lines of the form emitted under the `Sections:` header:
//!
//! ```text
//!   0 .text         00008150  00010000  00010000  00010000  2**4
//! ```
//!
//! Only the five recognized section names are recorded. Everything else is
//! silently ignored; objdump output varies slightly across toolchain
//! versions and we target the common subset.

use super::schema::SectionKind;
use regex::Regex;

/// Compiled matcher for section-table lines
pub struct SectionTableParser {
    line: Regex,
}

impl Default for SectionTableParser {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionTableParser {
    pub fn new() -> Self {
        // index, ".name", hex size, then arbitrary trailing content
        let line = Regex::new(
            r"^\S+\s+\.(text|relocate|sram|stack|app_memory)\s+([0-9a-fA-F]+).+",
        )
        .expect("section-table pattern is valid");
        Self { line }
    }

    /// Parse one section-table line
    ///
    /// Returns the recognized section and its size in bytes, or `None` for
    /// any line that does not match (never an error).
    pub fn parse_line(&self, line: &str) -> Option<(SectionKind, u64)> {
        let captures = self.line.captures(line)?;
        let kind = SectionKind::from_table_name(&captures[1])?;
        let size = u64::from_str_radix(&captures[2], 16).ok()?;
        Some((kind, size))
    }
}
