//! Client for running objdump and checking what it reports.

use crate::utils::config::{OBJDUMP_COMMAND, SUPPORTED_FORMAT};
use crate::utils::error::ObjdumpError;
use log::{debug, info};
use regex::Regex;
use std::path::Path;
use std::process::Command;

/// Run `objdump -f` and return its output text
///
/// The header dump carries the `file format` line used for the
/// architecture check.
pub fn header_dump(elf_path: &Path) -> Result<String, ObjdumpError> {
    run_objdump("-f", elf_path)
}

/// Run `objdump -x` and return its output text
///
/// The full dump carries the section table and the symbol table.
pub fn full_dump(elf_path: &Path) -> Result<String, ObjdumpError> {
    run_objdump("-x", elf_path)
}

/// Invoke objdump with one flag, fully buffering stdout
///
/// **Private** - internal helper for the two dump entry points
fn run_objdump(flag: &str, elf_path: &Path) -> Result<String, ObjdumpError> {
    info!("Running {} {} {}", OBJDUMP_COMMAND, flag, elf_path.display());

    let output = Command::new(OBJDUMP_COMMAND)
        .arg(flag)
        .arg(elf_path)
        .output()
        .map_err(|source| ObjdumpError::InvocationFailed {
            command: OBJDUMP_COMMAND.to_string(),
            source,
        })?;

    if !output.status.success() {
        return Err(ObjdumpError::ToolFailed {
            command: OBJDUMP_COMMAND.to_string(),
            status: output.status,
        });
    }

    let text = String::from_utf8_lossy(&output.stdout).into_owned();
    debug!("{} produced {} bytes of output", OBJDUMP_COMMAND, text.len());
    Ok(text)
}

/// Check the architecture reported in a header dump
///
/// Returns the detected format token when it is the one supported target.
/// Any other token, or a dump with no `file format` line at all, is a
/// configuration error that must abort before any report output.
pub fn detect_architecture(header: &str) -> Result<String, ObjdumpError> {
    let format_line =
        Regex::new(r"file format (\S+)").expect("file-format pattern is valid");

    let arch = format_line
        .captures(header)
        .map(|captures| captures[1].to_string())
        .ok_or(ObjdumpError::UnknownArchitecture)?;

    if arch != SUPPORTED_FORMAT {
        return Err(ObjdumpError::UnsupportedArchitecture {
            arch,
            supported: SUPPORTED_FORMAT,
        });
    }

    Ok(arch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_supported_architecture() {
        let header = "\nkernel.elf:     file format elf32-littlearm\narchitecture: armv7e-m\n";
        assert_eq!(detect_architecture(header).unwrap(), "elf32-littlearm");
    }

    #[test]
    fn test_detect_unsupported_architecture() {
        let header = "kernel.elf:     file format elf64-x86-64\n";
        match detect_architecture(header) {
            Err(ObjdumpError::UnsupportedArchitecture { arch, .. }) => {
                assert_eq!(arch, "elf64-x86-64");
            }
            other => panic!("expected UnsupportedArchitecture, got {:?}", other),
        }
    }

    #[test]
    fn test_detect_missing_format_line() {
        assert!(matches!(
            detect_architecture("kernel.elf: no format here\n"),
            Err(ObjdumpError::UnknownArchitecture)
        ));
    }
}
