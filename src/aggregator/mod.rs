//! Aggregation of parsed symbols into padding totals and named groups.
//!
//! This module transforms the parser's collections into:
//! - Inter-symbol padding totals and gap lists (waste detection)
//! - Depth-limited namespace groups with per-group sizes

pub mod grouping;
pub mod padding;

// Re-export main types and functions
pub use grouping::{grand_total, group_symbols, group_total, GroupEntry, SymbolGroups};
pub use padding::{compute_padding, PaddingReport, WasteGap};

use crate::parser::SymbolRecord;

/// Prepare one collection for aggregation
///
/// **Public** - run before [`compute_padding`] and [`group_symbols`]
///
/// Drops zero-size symbols (they occupy no address range) and sorts by
/// ascending address, establishing the ordering both the padding pass and
/// the per-group entry order rely on.
pub fn prepare_symbols(symbols: &mut Vec<SymbolRecord>) {
    symbols.retain(|symbol| symbol.size != 0);
    symbols.sort_by_key(|symbol| symbol.address);
}
