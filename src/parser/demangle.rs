//! Symbol name demangling and hash trimming.
//!
//! Most symbols in a kernel image carry compiler-mangled names. Demangling
//! can fail for linker-generated and C symbols; that is expected, common
//! control flow, so the outcome is a plain enum the caller branches on
//! rather than an error type.

use crate::utils::config::NAMESPACE_SEPARATOR;
use rustc_demangle::try_demangle;

/// Result of attempting to demangle a raw symbol name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DemangleOutcome {
    /// The name was a recognized mangled form; holds the demangled path
    /// (still carrying any trailing `::h<hex>` hash segment)
    Demangled(String),
    /// Not a mangled name; the caller should use the raw name verbatim
    NotMangled,
}

/// Attempt to demangle a raw symbol name
pub fn demangle(raw: &str) -> DemangleOutcome {
    match try_demangle(raw) {
        Ok(demangled) => DemangleOutcome::Demangled(demangled.to_string()),
        Err(_) => DemangleOutcome::NotMangled,
    }
}

/// Demangle a name and trim its hash suffix, falling back to the raw name
///
/// This is the common "demangle or keep" step shared by all three symbol
/// collections.
pub fn demangle_or_raw(raw: &str) -> String {
    match demangle(raw) {
        DemangleOutcome::Demangled(name) => trim_hash_suffix(&name),
        DemangleOutcome::NotMangled => raw.to_string(),
    }
}

/// Drop the conventional `h<hex>` disambiguation segment from the end of a
/// namespace path
///
/// The final segment is dropped when it is non-empty and starts with `h`.
/// Idempotent, and safe on names with zero or one segment.
pub fn trim_hash_suffix(name: &str) -> String {
    let mut tokens: Vec<&str> = name.split(NAMESPACE_SEPARATOR).collect();
    if let Some(last) = tokens.last() {
        if !last.is_empty() && last.starts_with('h') {
            tokens.pop();
        }
    }
    tokens.join(NAMESPACE_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_demangle_legacy_mangled_name() {
        let outcome = demangle("_ZN4core3fmt9Formatter3pad17h2e9e9c7801e52684E");
        match outcome {
            DemangleOutcome::Demangled(name) => {
                assert_eq!(name, "core::fmt::Formatter::pad::h2e9e9c7801e52684");
            }
            DemangleOutcome::NotMangled => panic!("expected a demangled name"),
        }
    }

    #[test]
    fn test_demangle_rejects_plain_names() {
        assert_eq!(demangle("memcpy"), DemangleOutcome::NotMangled);
        assert_eq!(demangle(".Lanon.abc123"), DemangleOutcome::NotMangled);
    }

    #[test]
    fn test_demangle_or_raw_trims_hash() {
        assert_eq!(
            demangle_or_raw("_ZN4core3fmt9Formatter3pad17h2e9e9c7801e52684E"),
            "core::fmt::Formatter::pad"
        );
        assert_eq!(demangle_or_raw("__aeabi_memclr4"), "__aeabi_memclr4");
    }

    #[test]
    fn test_trim_hash_suffix() {
        assert_eq!(
            trim_hash_suffix("kernel::sched::do_process::h1a2b3c4d5e6f7a8b"),
            "kernel::sched::do_process"
        );
        // Last segment not a hash marker
        assert_eq!(trim_hash_suffix("kernel::sched::run"), "kernel::sched::run");
    }

    #[test]
    fn test_trim_hash_suffix_is_idempotent() {
        let once = trim_hash_suffix("core::fmt::write::h0123456789abcdef");
        let twice = trim_hash_suffix(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_trim_hash_suffix_short_names() {
        assert_eq!(trim_hash_suffix(""), "");
        assert_eq!(trim_hash_suffix("main"), "main");
        // A single segment starting with 'h' is still treated as a hash
        assert_eq!(trim_hash_suffix("h12345"), "");
        assert_eq!(trim_hash_suffix(trim_hash_suffix("h12345").as_str()), "");
    }
}
