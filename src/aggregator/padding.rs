//! Inter-symbol padding ("waste") detection.
//!
//! Given a collection sorted by address, the gap between the end of one
//! symbol's declared size and the next symbol's start address is alignment
//! filler or embedded constants not attributed to any symbol.

use crate::parser::SymbolRecord;
use log::debug;

/// One detected gap between adjacent symbols
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WasteGap {
    /// Name of the symbol the gap follows
    pub after: String,
    /// Gap size in bytes
    pub bytes: u64,
}

/// Result of a padding pass over one collection
#[derive(Debug, Clone, Default)]
pub struct PaddingReport {
    /// Sum of all detected gaps
    pub total: u64,
    /// Gaps in address order, for waste display
    pub gaps: Vec<WasteGap>,
}

/// Compute inter-symbol padding over an address-sorted collection
///
/// **Public** - main entry point for padding computation
///
/// The caller must have dropped zero-size symbols and sorted by address
/// (see [`super::prepare_symbols`]); a zero-size entry would corrupt the
/// expected-next-address bookkeeping.
///
/// For each adjacent pair the previous symbol's `padded_size` is finalized
/// as the distance to the next symbol's address. No gap is measured before
/// the first symbol or after the last one, so the last symbol keeps its
/// declared size as its padded size. Arithmetic saturates, so overlapping
/// or duplicate addresses never produce a negative total.
pub fn compute_padding(symbols: &mut [SymbolRecord]) -> PaddingReport {
    let mut report = PaddingReport::default();

    for i in 1..symbols.len() {
        let next_address = symbols[i].address;
        let prev = &mut symbols[i - 1];

        prev.padded_size = next_address.saturating_sub(prev.address);

        let gap = next_address.saturating_sub(prev.address + prev.size);
        if gap != 0 {
            report.total += gap;
            report.gaps.push(WasteGap {
                after: prev.name.clone(),
                bytes: gap,
            });
        }
    }

    if report.total > 0 {
        debug!(
            "Detected {} wasted bytes across {} gaps",
            report.total,
            report.gaps.len()
        );
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn symbol(name: &str, address: u64, size: u64) -> SymbolRecord {
        SymbolRecord::new(name, address, size)
    }

    #[test]
    fn test_gap_between_adjacent_symbols() {
        let mut symbols = vec![symbol("a", 0x100, 4), symbol("b", 0x108, 4)];
        let report = compute_padding(&mut symbols);

        assert_eq!(report.total, 4);
        assert_eq!(
            report.gaps,
            vec![WasteGap {
                after: "a".to_string(),
                bytes: 4
            }]
        );
        // Padded size reaches up to the next symbol
        assert_eq!(symbols[0].padded_size, 8);
        // Last symbol keeps its declared size
        assert_eq!(symbols[1].padded_size, 4);
    }

    #[test]
    fn test_tightly_packed_symbols_have_no_waste() {
        let mut symbols = vec![
            symbol("a", 0x100, 8),
            symbol("b", 0x108, 8),
            symbol("c", 0x110, 8),
        ];
        let report = compute_padding(&mut symbols);

        assert_eq!(report.total, 0);
        assert!(report.gaps.is_empty());
        assert_eq!(symbols[0].padded_size, 8);
        assert_eq!(symbols[1].padded_size, 8);
    }

    #[test]
    fn test_empty_and_single_collections() {
        let mut empty: Vec<SymbolRecord> = vec![];
        assert_eq!(compute_padding(&mut empty).total, 0);

        let mut single = vec![symbol("only", 0x200, 16)];
        let report = compute_padding(&mut single);
        assert_eq!(report.total, 0);
        // No successor, so no trailing padding is measured
        assert_eq!(single[0].padded_size, 16);
    }

    #[test]
    fn test_overlapping_symbols_never_go_negative() {
        // Duplicate addresses can legitimately appear across merged
        // collections; saturating arithmetic keeps the total non-negative.
        let mut symbols = vec![symbol("a", 0x100, 16), symbol("alias", 0x100, 16)];
        let report = compute_padding(&mut symbols);
        assert_eq!(report.total, 0);
        assert_eq!(symbols[0].padded_size, 0);
    }

    #[test]
    fn test_multiple_gaps_accumulate() {
        let mut symbols = vec![
            symbol("a", 0x100, 2),
            symbol("b", 0x108, 2),
            symbol("c", 0x110, 2),
        ];
        let report = compute_padding(&mut symbols);
        assert_eq!(report.total, 12);
        assert_eq!(report.gaps.len(), 2);
    }
}
