//! Symbol-table line parser.
//!
//! Recognizes lines of the form emitted under the `SYMBOL TABLE:` header:
//!
//! ```text
//! 00010000 l    d  .text	00000000 .text
//! 000146a8 l     F .text	00000182 _ZN6kernel5sched7Kernel12kernel_loop17h0a1b2c3d4e5f6071E
//! ```
//!
//! Only `.text`, `.relocate` and `.sram` symbols feed a collection; symbols
//! in the other recognized sections, and any line that does not match, are
//! silently ignored.

use super::demangle::{demangle_or_raw, trim_hash_suffix};
use super::schema::{SectionKind, SymbolClass, SymbolRecord};
use crate::utils::config::NAMESPACE_SEPARATOR;
use regex::Regex;

/// Compiled matchers for symbol-table lines
pub struct SymbolTableParser {
    line: Regex,
    embedded: Regex,
}

impl Default for SymbolTableParser {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTableParser {
    pub fn new() -> Self {
        // address, flags token, optional second flags token, ".section",
        // hex size field, trailing name (free text, may contain spaces)
        let line = Regex::new(
            r"^([0-9a-fA-F]+)\s+\w+\s+\w*\s+\.(text|relocate|sram|stack|app_memory)\s+([0-9a-fA-F]+)\s+(.+)$",
        )
        .expect("symbol-table pattern is valid");

        // Legacy mangling convention distinct from the primary demangler:
        // a name wrapped in `$...$` built from `word..` segments, e.g.
        // `$kernel..sched..Kernel$`.
        let embedded = Regex::new(r"\$((?:\w+\.\.)+\w+)\$").expect("embedded pattern is valid");

        Self { line, embedded }
    }

    /// Parse one symbol-table line
    ///
    /// Returns the collection the symbol belongs to along with its record,
    /// or `None` for lines that do not match or belong to a section we do
    /// not attribute symbols to (never an error).
    pub fn parse_line(&self, line: &str) -> Option<(SymbolClass, SymbolRecord)> {
        let captures = self.line.captures(line)?;
        let address = u64::from_str_radix(&captures[1], 16).ok()?;
        let kind = SectionKind::from_table_name(&captures[2])?;
        let size = u64::from_str_radix(&captures[3], 16).ok()?;
        let raw_name = &captures[4];

        let (class, name) = match kind {
            SectionKind::Relocate => (SymbolClass::Initialized, demangle_or_raw(raw_name)),
            SectionKind::Sram => (SymbolClass::Uninitialized, demangle_or_raw(raw_name)),
            SectionKind::Text => (SymbolClass::Function, self.function_name(raw_name)),
            // Recognized sections without attributable symbols
            SectionKind::Stack | SectionKind::AppMemory => return None,
        };

        Some((class, SymbolRecord::new(name, address, size)))
    }

    /// Resolve the display name for a `.text` symbol
    ///
    /// The embedded `$word..word$` convention takes priority; otherwise fall
    /// back to the general demangler, and on failure keep the raw name.
    fn function_name(&self, raw_name: &str) -> String {
        if let Some(captures) = self.embedded.captures(raw_name) {
            let path = captures[1].replace("..", NAMESPACE_SEPARATOR);
            return trim_hash_suffix(&path);
        }
        demangle_or_raw(raw_name)
    }
}
