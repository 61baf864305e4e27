//! kmem-report CLI
//!
//! Reports the static memory usage (flash and RAM) of an embedded kernel
//! binary by inspecting its section and symbol tables.

use clap::Parser;
use env_logger::Env;
use kmem_report::commands::{execute_report, validate_args, ReportArgs};
use kmem_report::utils::config::DEFAULT_GROUP_DEPTH;
use std::path::PathBuf;

/// Static flash/RAM usage report for an embedded kernel ELF
#[derive(Parser, Debug)]
#[command(name = "kmem-report")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the kernel ELF image
    elf: PathBuf,

    /// Group symbols at this namespace depth or greater. E.g., depth 2
    /// groups all kernel::sched:: symbols together
    #[arg(short, long, default_value_t = DEFAULT_GROUP_DEPTH)]
    depth: usize,

    /// Print verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Show where RAM is wasted (due to padding)
    #[arg(short, long)]
    show_waste: bool,
}

fn main() {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let args = ReportArgs {
        elf_path: cli.elf,
        depth: cli.depth,
        verbose: cli.verbose,
        show_waste: cli.show_waste,
    };

    let result = validate_args(&args).and_then(|_| execute_report(args));
    if let Err(err) = result {
        eprintln!("  error: {:#}", err);
        eprintln!("  usage: kmem-report [-d DEPTH] [-v] [-s] <ELF>");
        std::process::exit(1);
    }
}
