//! Depth-limited grouping of symbols into named buckets.
//!
//! Namespaced symbols group under their leading namespace segments, so a
//! report can collapse an entire module into one line while still showing
//! individual symbols when a module contributes only one. Names without a
//! namespace classify through an ordered prefix-rule table instead.

use crate::parser::SymbolRecord;
use crate::utils::config::NAMESPACE_SEPARATOR;
use std::collections::BTreeMap;

/// One (display name, size) entry within a group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupEntry {
    pub name: String,
    pub size: u64,
}

/// Group key -> entries, in sorted key order for presentation
///
/// Namespace-group keys carry a trailing `::` so presentation can tell them
/// apart from heuristic bucket names.
pub type SymbolGroups = BTreeMap<String, Vec<GroupEntry>>;

/// A prefix-classification rule for names without a namespace
struct BucketRule {
    prefixes: &'static [&'static str],
    bucket: &'static str,
}

// Evaluated in priority order; first match wins. These rules are based on
// observation of linker and compiler output.
const BUCKET_RULES: &[BucketRule] = &[
    // .Lanon*, anon.* and str.* are embedded strings
    BucketRule {
        prefixes: &[".Lanon", "anon.", "str."],
        bucket: "Constant strings",
    },
    BucketRule {
        prefixes: &[".hidden "],
        bucket: "ARM aeabi support",
    },
    BucketRule {
        prefixes: &["_ZN"],
        bucket: "Unidentified auto-generated",
    },
];

const FALLBACK_BUCKET: &str = "Unmangled globals (C-like code)";

fn classify_unscoped(name: &str) -> &'static str {
    BUCKET_RULES
        .iter()
        .find(|rule| rule.prefixes.iter().any(|prefix| name.starts_with(prefix)))
        .map(|rule| rule.bucket)
        .unwrap_or(FALLBACK_BUCKET)
}

/// Group symbols into `groups` by namespace depth
///
/// **Public** - main entry point for grouping
///
/// Zero-size symbols represent no actual memory use and are skipped. Within
/// a group, entries keep symbol processing order (post address-sort).
/// Calling this for several collections against the same map merges them,
/// which is how the variable report combines initialized and uninitialized
/// data.
pub fn group_symbols(groups: &mut SymbolGroups, symbols: &[SymbolRecord], depth: usize) {
    for symbol in symbols {
        if symbol.size == 0 {
            continue;
        }

        let tokens: Vec<&str> = symbol.name.split(NAMESPACE_SEPARATOR).collect();
        let (key, display_name) = if tokens.len() == 1 {
            (classify_unscoped(&symbol.name).to_string(), symbol.name.clone())
        } else {
            let cut = depth.min(tokens.len());
            (
                format!("{}{}", tokens[..cut].join(NAMESPACE_SEPARATOR), NAMESPACE_SEPARATOR),
                tokens[cut..].join(NAMESPACE_SEPARATOR),
            )
        };

        groups.entry(key).or_default().push(GroupEntry {
            name: display_name,
            size: symbol.size,
        });
    }
}

/// Sum of entry sizes within one group
pub fn group_total(entries: &[GroupEntry]) -> u64 {
    entries.iter().map(|entry| entry.size).sum()
}

/// Sum of all group totals
pub fn grand_total(groups: &SymbolGroups) -> u64 {
    groups.values().map(|entries| group_total(entries)).sum()
}
