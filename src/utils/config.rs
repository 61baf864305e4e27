//! Configuration and constants for the CLI.

/// External binary-inspection tool used to dump section and symbol tables
pub const OBJDUMP_COMMAND: &str = "arm-none-eabi-objdump";

/// The only object format this tool understands
pub const SUPPORTED_FORMAT: &str = "elf32-littlearm";

/// Default namespace depth for symbol grouping
pub const DEFAULT_GROUP_DEPTH: usize = 1;

/// Separator between namespace segments in demangled names
pub const NAMESPACE_SEPARATOR: &str = "::";

// Marker lines in the full objdump output. The section table follows the
// first marker, the symbol table follows the second and runs to end of input.
pub const SECTIONS_MARKER: &str = "Sections:";
pub const SYMBOL_TABLE_MARKER: &str = "SYMBOL TABLE:";
