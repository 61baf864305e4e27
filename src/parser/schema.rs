//! Typed records produced by the dump parser.
//!
//! Everything here is built once per invocation, transformed once by the
//! aggregator, and discarded after the report is printed. There is no
//! module-level state; the whole parse result travels as a [`ParsedImage`].

use crate::utils::error::ReportError;
use std::collections::HashMap;
use std::fmt;

/// The five section identifiers this tool recognizes in the section table.
///
/// `text`, `relocate` and `sram` also carry symbols we attribute to
/// collections; `stack` and `app_memory` contribute size totals only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Text,
    Relocate,
    Sram,
    Stack,
    AppMemory,
}

impl SectionKind {
    /// Map a section-table name (without the leading `.`) to its kind
    pub fn from_table_name(name: &str) -> Option<Self> {
        match name {
            "text" => Some(SectionKind::Text),
            "relocate" => Some(SectionKind::Relocate),
            "sram" => Some(SectionKind::Sram),
            "stack" => Some(SectionKind::Stack),
            "app_memory" => Some(SectionKind::AppMemory),
            _ => None,
        }
    }

    /// The name as it appears in the section table (without the leading `.`)
    pub fn table_name(&self) -> &'static str {
        match self {
            SectionKind::Text => "text",
            SectionKind::Relocate => "relocate",
            SectionKind::Sram => "sram",
            SectionKind::Stack => "stack",
            SectionKind::AppMemory => "app_memory",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table_name())
    }
}

/// Byte sizes of the recognized sections
///
/// All five kinds must have been recorded by the time the report is
/// assembled; [`SectionSizes::get`] fails loudly on a missing kind.
#[derive(Debug, Clone, Default)]
pub struct SectionSizes {
    sizes: HashMap<SectionKind, u64>,
}

impl SectionSizes {
    /// Record the size of a section, replacing any earlier value
    pub fn record(&mut self, kind: SectionKind, size: u64) {
        self.sizes.insert(kind, size);
    }

    /// Look up a section size
    ///
    /// # Errors
    /// * `ReportError::MissingSection` - the section table never mentioned
    ///   this section
    pub fn get(&self, kind: SectionKind) -> Result<u64, ReportError> {
        self.sizes
            .get(&kind)
            .copied()
            .ok_or(ReportError::MissingSection(kind))
    }

    /// Number of distinct sections recorded so far
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}

/// One entry from the symbol table
///
/// `size` is the declared symbol size from the dump. `padded_size` starts
/// equal to `size` and is finalized by the padding pass as the distance to
/// the next symbol's address, which may include trailing constants or
/// alignment filler not attributed to the symbol itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolRecord {
    pub name: String,
    pub address: u64,
    pub size: u64,
    pub padded_size: u64,
}

impl SymbolRecord {
    pub fn new(name: impl Into<String>, address: u64, size: u64) -> Self {
        Self {
            name: name.into(),
            address,
            size,
            padded_size: size,
        }
    }
}

/// Which top-level collection a symbol belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolClass {
    /// Variables with initializers (the `.relocate` section)
    Initialized,
    /// Zero-filled variables (the `.sram` section)
    Uninitialized,
    /// Executable code (the `.text` section)
    Function,
}

/// Complete parse result for one binary image
///
/// Symbols are appended in the order the symbol table lists them; the
/// aggregator sorts each collection by address before computing padding.
#[derive(Debug, Clone, Default)]
pub struct ParsedImage {
    pub sections: SectionSizes,
    pub initialized: Vec<SymbolRecord>,
    pub uninitialized: Vec<SymbolRecord>,
    pub functions: Vec<SymbolRecord>,
}

impl ParsedImage {
    /// The collection a symbol class maps to
    pub fn collection_mut(&mut self, class: SymbolClass) -> &mut Vec<SymbolRecord> {
        match class {
            SymbolClass::Initialized => &mut self.initialized,
            SymbolClass::Uninitialized => &mut self.uninitialized,
            SymbolClass::Function => &mut self.functions,
        }
    }

    /// Total number of symbols across all three collections
    pub fn symbol_count(&self) -> usize {
        self.initialized.len() + self.uninitialized.len() + self.functions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_kind_round_trip() {
        for name in ["text", "relocate", "sram", "stack", "app_memory"] {
            let kind = SectionKind::from_table_name(name).unwrap();
            assert_eq!(kind.table_name(), name);
        }
        assert!(SectionKind::from_table_name("bss").is_none());
    }

    #[test]
    fn test_missing_section_is_an_error() {
        let mut sizes = SectionSizes::default();
        sizes.record(SectionKind::Text, 0x1000);

        assert_eq!(sizes.get(SectionKind::Text).unwrap(), 0x1000);
        assert!(matches!(
            sizes.get(SectionKind::Stack),
            Err(ReportError::MissingSection(SectionKind::Stack))
        ));
    }

    #[test]
    fn test_record_replaces_earlier_value() {
        let mut sizes = SectionSizes::default();
        sizes.record(SectionKind::Sram, 100);
        sizes.record(SectionKind::Sram, 200);
        assert_eq!(sizes.get(SectionKind::Sram).unwrap(), 200);
        assert_eq!(sizes.len(), 1);
    }

    #[test]
    fn test_new_record_starts_unpadded() {
        let record = SymbolRecord::new("kernel::sched::TIMESLICE", 0x2000_0000, 4);
        assert_eq!(record.padded_size, record.size);
    }
}
