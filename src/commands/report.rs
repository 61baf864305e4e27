//! Report command implementation.
//!
//! The report command:
//! 1. Runs the header dump and checks the architecture
//! 2. Runs the full dump and parses both tables
//! 3. Sorts the collections and computes inter-symbol padding
//! 4. Groups variables and functions by namespace depth
//! 5. Prints the report

use crate::aggregator::{compute_padding, group_symbols, prepare_symbols, SymbolGroups};
use crate::objdump;
use crate::output::{render_groups, render_section_summary, render_waste};
use crate::parser::parse_dump;
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::PathBuf;

/// Arguments for the report command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ReportArgs {
    /// Path to the kernel ELF image
    pub elf_path: PathBuf,

    /// Number of leading namespace segments used as the grouping key
    pub depth: usize,

    /// Print verbose output (implies waste display)
    pub verbose: bool,

    /// Show where RAM is wasted due to padding
    pub show_waste: bool,
}

impl Default for ReportArgs {
    fn default() -> Self {
        Self {
            elf_path: PathBuf::new(),
            depth: crate::utils::config::DEFAULT_GROUP_DEPTH,
            verbose: false,
            show_waste: false,
        }
    }
}

/// Validate report arguments
///
/// **Public** - called before execute_report for early validation
pub fn validate_args(args: &ReportArgs) -> Result<()> {
    if args.elf_path.as_os_str().is_empty() {
        anyhow::bail!("no ELF specified");
    }

    if args.depth == 0 {
        anyhow::bail!("grouping depth must be at least 1");
    }

    Ok(())
}

/// Execute the report command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * objdump invocation failures
/// * Unsupported or undetected architecture
/// * A required section missing from the section table
///
/// All of these abort before any report text is printed, so the user never
/// sees a partially-correct report.
pub fn execute_report(args: ReportArgs) -> Result<()> {
    info!("Inspecting {}", args.elf_path.display());

    // The architecture check runs before anything is printed; an
    // unsupported image must not produce report lines.
    let header = objdump::header_dump(&args.elf_path)
        .context("Failed to run the objdump header dump")?;
    let arch = objdump::detect_architecture(&header)?;
    debug!("Detected architecture: {}", arch);

    let dump = objdump::full_dump(&args.elf_path)
        .context("Failed to run the objdump full dump")?;

    let mut image = parse_dump(&dump);
    prepare_symbols(&mut image.initialized);
    prepare_symbols(&mut image.uninitialized);
    prepare_symbols(&mut image.functions);

    let initialized_padding = compute_padding(&mut image.initialized);
    let uninitialized_padding = compute_padding(&mut image.uninitialized);
    let text_padding = compute_padding(&mut image.functions);

    // Assemble the section summary before printing anything; a missing
    // section aborts the whole report.
    let section_summary =
        render_section_summary(&image.sections).context("Incomplete section table")?;

    println!("Kernel memory usage report for {}", args.elf_path.display());
    print!("{}", section_summary);
    println!();

    // Waste display covers the variable regions only. Embedded constants in
    // code are not counted in a function symbol's declared size, so waste
    // detection in .text has too many false positives.
    if args.show_waste || args.verbose {
        print!("{}", render_waste("RAM", &initialized_padding));
        print!("{}", render_waste("Flash+RAM", &uninitialized_padding));
    }

    let mut variable_groups = SymbolGroups::new();
    group_symbols(&mut variable_groups, &image.initialized, args.depth);
    group_symbols(&mut variable_groups, &image.uninitialized, args.depth);
    print!("{}", render_groups("Variable groups (RAM)", &variable_groups));
    println!();

    println!("Embedded data (in flash): {} bytes", text_padding.total);
    println!();

    let mut function_groups = SymbolGroups::new();
    group_symbols(&mut function_groups, &image.functions, args.depth);
    print!(
        "{}",
        render_groups("Function groups (in flash)", &function_groups)
    );
    println!();

    Ok(())
}
