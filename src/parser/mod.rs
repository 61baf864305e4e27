//! Parsing of objdump text output into typed records.
//!
//! This module handles:
//! - Walking the full dump (`Sections:` then `SYMBOL TABLE:` regions)
//! - Parsing section-table lines into [`SectionSizes`]
//! - Parsing symbol-table lines into per-collection [`SymbolRecord`]s
//! - Name demangling with raw-name fallback

pub mod demangle;
pub mod schema;
pub mod section_table;
pub mod symbol_table;

// Re-export main types
pub use demangle::{demangle, demangle_or_raw, trim_hash_suffix, DemangleOutcome};
pub use schema::{ParsedImage, SectionKind, SectionSizes, SymbolClass, SymbolRecord};
pub use section_table::SectionTableParser;
pub use symbol_table::SymbolTableParser;

use crate::utils::config::{SECTIONS_MARKER, SYMBOL_TABLE_MARKER};
use log::debug;

/// Region of the full dump we are currently walking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DumpRegion {
    Preamble,
    Sections,
    Symbols,
}

/// Parse the full objdump output into typed records
///
/// **Public** - main entry point for parsing
///
/// The dump is a single buffered text stream: everything between the
/// `Sections:` and `SYMBOL TABLE:` markers is treated as section-table
/// lines, everything after the second marker as symbol-table lines. Lines
/// that match neither table's pattern are skipped without error.
pub fn parse_dump(dump: &str) -> ParsedImage {
    let section_parser = SectionTableParser::new();
    let symbol_parser = SymbolTableParser::new();

    let mut image = ParsedImage::default();
    let mut region = DumpRegion::Preamble;

    for raw_line in dump.lines() {
        let line = raw_line.trim();

        if line == SECTIONS_MARKER {
            region = DumpRegion::Sections;
            continue;
        }
        if line == SYMBOL_TABLE_MARKER {
            region = DumpRegion::Symbols;
            continue;
        }

        match region {
            DumpRegion::Preamble => {}
            DumpRegion::Sections => {
                if let Some((kind, size)) = section_parser.parse_line(line) {
                    image.sections.record(kind, size);
                }
            }
            DumpRegion::Symbols => {
                if let Some((class, record)) = symbol_parser.parse_line(line) {
                    image.collection_mut(class).push(record);
                }
            }
        }
    }

    debug!(
        "Parsed {} sections and {} symbols ({} initialized, {} uninitialized, {} functions)",
        image.sections.len(),
        image.symbol_count(),
        image.initialized.len(),
        image.uninitialized.len(),
        image.functions.len()
    );

    image
}
