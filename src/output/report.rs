//! Text rendering for the memory usage report.
//!
//! All blocks render to `String` so the command layer controls what reaches
//! stdout; nothing here prints directly. The numeric contracts (flash = text
//! + relocate, RAM = stack + sram + relocate, per-group and grand totals)
//! live here and must hold exactly; the surrounding layout is cosmetic.

use crate::aggregator::{grand_total, group_total, PaddingReport, SymbolGroups};
use crate::parser::{SectionKind, SectionSizes};
use crate::utils::config::NAMESPACE_SEPARATOR;
use crate::utils::error::ReportError;

/// Render the section-size summary block
///
/// **Public** - first block of the report
///
/// # Errors
/// * `ReportError::MissingSection` - the section table lacked one of the
///   five required sections; the report must abort rather than under-report
pub fn render_section_summary(sections: &SectionSizes) -> Result<String, ReportError> {
    let text = sections.get(SectionKind::Text)?;
    let stack = sections.get(SectionKind::Stack)?;
    let relocate = sections.get(SectionKind::Relocate)?;
    let sram = sections.get(SectionKind::Sram)?;
    let app_memory = sections.get(SectionKind::AppMemory)?;

    let flash = text + relocate;
    let ram = stack + sram + relocate;

    let mut out = String::new();
    out.push_str(&format!("Kernel occupies {} bytes of flash\n", flash));
    out.push_str(&format!("  {:>6}\tcode and constant strings\n", text));
    out.push_str(&format!("  {:>6}\tvariable initializers\n", relocate));
    out.push_str(&format!("Kernel occupies {} bytes of RAM\n", ram));
    out.push_str(&format!("  {:>6}\tstack\n", stack));
    out.push_str(&format!("  {:>6}\tuninitialized variables\n", sram));
    out.push_str(&format!("  {:>6}\tinitialized variables\n", relocate));
    out.push_str(&format!("  {:>6}\tvariables total\n", sram + relocate));
    out.push_str(&format!(
        "Applications allocated {} bytes of RAM\n",
        app_memory
    ));
    Ok(out)
}

/// Render one group block with its grand total
///
/// **Public** - used for both the variable and the function report
///
/// Keys print in sorted order, left-padded to the longest key so the sizes
/// line up. A single-entry group prints as `key:` (the entry is the whole
/// group); a multi-entry namespace key prints as `key::*`.
pub fn render_groups(title: &str, groups: &SymbolGroups) -> String {
    let mut out = format!("{}: {} bytes\n", title, grand_total(groups));
    let pad_width = groups.keys().map(|key| key.len()).max().unwrap_or(0) + 2;

    for (key, entries) in groups {
        out.push_str(&format_group_line(
            key,
            pad_width,
            group_total(entries),
            entries.len(),
        ));
    }
    out
}

/// Format one group line, disambiguating namespace keys from bucket names
///
/// **Private** - internal helper for render_groups
fn format_group_line(key: &str, pad_width: usize, group_size: u64, entry_count: usize) -> String {
    let label = if entry_count == 1 {
        // A single symbol prints as itself, not as a namespace
        format!("{}:", key.strip_suffix(NAMESPACE_SEPARATOR).unwrap_or(key))
    } else if key.ends_with(NAMESPACE_SEPARATOR) {
        format!("{}*", key)
    } else {
        format!("{}:", key)
    };
    format!("  {:<width$}{} bytes\n", label, group_size, width = pad_width)
}

/// Render the waste lines for one region
///
/// **Public** - printed only when waste display is enabled
///
/// Returns an empty string when the region has no gaps.
pub fn render_waste(region: &str, padding: &PaddingReport) -> String {
    let mut out = String::new();
    for gap in &padding.gaps {
        out.push_str(&format!(
            "  ! {} bytes wasted after {}\n",
            gap.bytes, gap.after
        ));
    }
    if padding.total > 0 {
        out.push_str(&format!(
            "Total of {} bytes wasted in {}\n\n",
            padding.total, region
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::{GroupEntry, WasteGap};
    use pretty_assertions::assert_eq;

    fn spec_sections() -> SectionSizes {
        let mut sections = SectionSizes::default();
        sections.record(SectionKind::Text, 1000);
        sections.record(SectionKind::Relocate, 200);
        sections.record(SectionKind::Sram, 300);
        sections.record(SectionKind::Stack, 2048);
        sections.record(SectionKind::AppMemory, 4096);
        sections
    }

    #[test]
    fn test_section_summary_totals() {
        let summary = render_section_summary(&spec_sections()).unwrap();

        assert!(summary.contains("Kernel occupies 1200 bytes of flash"));
        assert!(summary.contains("Kernel occupies 2548 bytes of RAM"));
        assert!(summary.contains("Applications allocated 4096 bytes of RAM"));
        // variables total = sram + relocate
        assert!(summary.contains("   500\tvariables total"));
    }

    #[test]
    fn test_section_summary_missing_section_fails() {
        let mut sections = SectionSizes::default();
        sections.record(SectionKind::Text, 1000);

        let result = render_section_summary(&sections);
        assert!(matches!(result, Err(ReportError::MissingSection(_))));
    }

    #[test]
    fn test_group_block_totals_and_labels() {
        let mut groups = SymbolGroups::new();
        groups.insert(
            "kernel::".to_string(),
            vec![
                GroupEntry {
                    name: "sched::TIMESLICE".to_string(),
                    size: 4,
                },
                GroupEntry {
                    name: "ipc::QUEUE".to_string(),
                    size: 60,
                },
            ],
        );
        groups.insert(
            "capsules::".to_string(),
            vec![GroupEntry {
                name: "console::BUF".to_string(),
                size: 128,
            }],
        );

        let block = render_groups("Variable groups (RAM)", &groups);

        assert!(block.starts_with("Variable groups (RAM): 192 bytes\n"));
        // Multi-entry namespace group renders with a wildcard
        assert!(block.contains("kernel::*"));
        // Single-entry group renders as the symbol itself
        assert!(block.contains("capsules:"));
        assert!(!block.contains("capsules::*"));
    }

    #[test]
    fn test_bucket_key_renders_with_colon() {
        let mut groups = SymbolGroups::new();
        groups.insert(
            "Constant strings".to_string(),
            vec![
                GroupEntry {
                    name: "str.0".to_string(),
                    size: 10,
                },
                GroupEntry {
                    name: "str.1".to_string(),
                    size: 5,
                },
            ],
        );

        let block = render_groups("Function groups (in flash)", &groups);
        assert!(block.contains("Constant strings:"));
        assert!(block.contains("15 bytes"));
    }

    #[test]
    fn test_render_waste() {
        let padding = PaddingReport {
            total: 12,
            gaps: vec![
                WasteGap {
                    after: "kernel::DEBUG".to_string(),
                    bytes: 4,
                },
                WasteGap {
                    after: "BUFFER".to_string(),
                    bytes: 8,
                },
            ],
        };

        let block = render_waste("RAM", &padding);
        assert_eq!(
            block,
            "  ! 4 bytes wasted after kernel::DEBUG\n  ! 8 bytes wasted after BUFFER\nTotal of 12 bytes wasted in RAM\n\n"
        );
    }

    #[test]
    fn test_render_waste_empty() {
        assert_eq!(render_waste("RAM", &PaddingReport::default()), "");
    }
}
