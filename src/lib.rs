//! kmem-report
//!
//! Static memory usage reporting for embedded kernel ELF binaries.
//!
//! Parses the section and symbol tables dumped by
//! `arm-none-eabi-objdump`, groups symbols into logical namespaces,
//! detects padding between adjacent symbols, and prints a flash/RAM
//! summary.
//!
//! This crate provides the core implementation for the `kmem-report`
//! CLI tool.

pub mod aggregator;
pub mod commands;
pub mod objdump;
pub mod output;
pub mod parser;
pub mod utils;
