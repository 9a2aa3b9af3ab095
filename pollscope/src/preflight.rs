//! Pre-flight checks for pollscope
//!
//! Validates that a debugger can attach to the target and that the
//! instrumented symbols stand a chance of resolving, before any
//! breakpoint work starts. Provides clear, actionable error messages
//! when requirements aren't met.

#![allow(unsafe_code)] // geteuid() requires unsafe

use anyhow::{bail, Context, Result};
use object::{Object, ObjectSection, ObjectSymbol};
use std::path::Path;

use crate::symbol_map::SymbolMap;

/// Run all pre-flight checks for attaching to `target_path`.
pub fn run_preflight_checks(target_path: &str, quiet: bool) -> Result<()> {
    check_attach_permissions()?;
    check_binary_exists(target_path)?;
    check_debug_symbols(target_path, quiet)?;
    Ok(())
}

/// Check that ptrace attach is allowed for this user.
fn check_attach_permissions() -> Result<()> {
    if unsafe { libc::geteuid() } == 0 {
        return Ok(());
    }

    // Yama restricts non-root ptrace attach. Scopes 0 and 1 allow
    // same-user attach (1 limits it to descendants, which covers targets
    // the debugger launches itself); 2+ needs root or CAP_SYS_PTRACE.
    let scope = std::fs::read_to_string("/proc/sys/kernel/yama/ptrace_scope")
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|_| "0".to_string());
    if scope == "0" || scope == "1" {
        return Ok(());
    }

    bail!(
        "Permission denied: ptrace_scope={scope} blocks debugger attach for non-root users.\n\n\
         Run as root, or relax the scope:\n  \
         sudo sysctl kernel.yama.ptrace_scope=1"
    );
}

/// Check if the target binary exists and is readable.
fn check_binary_exists(target_path: &str) -> Result<()> {
    let path = Path::new(target_path);
    if !path.exists() {
        bail!(
            "Binary not found: {}\n\n\
             Make sure the path is correct and the binary exists.",
            target_path
        );
    }
    if !path.is_file() {
        bail!(
            "Not a file: {}\n\n\
             --target must point to the traced executable, not a directory.",
            target_path
        );
    }
    Ok(())
}

/// Check if the binary has the symbols breakpoint registration relies on.
fn check_debug_symbols(target_path: &str, quiet: bool) -> Result<()> {
    if quiet {
        return Ok(());
    }

    let file_data = std::fs::read(target_path)
        .with_context(|| format!("Failed to read binary: {target_path}"))?;

    let obj = match object::File::parse(&*file_data) {
        Ok(obj) => obj,
        Err(_) => {
            // Not a valid object file, let the debugger report it
            return Ok(());
        }
    };

    let has_debug_info = obj.section_by_name(".debug_info").is_some_and(|s| s.size() > 0);
    let has_symtab = obj.section_by_name(".symtab").is_some_and(|s| s.size() > 0);

    if !has_debug_info && !has_symtab {
        eprintln!("warning: binary stripped, poll breakpoints will not resolve");
    } else if !has_symtab {
        eprintln!("warning: no symbol table, breakpoint registration relies on debug info alone");
    }

    Ok(())
}

/// Count how many poll symbols from the map are present in the binary's
/// symbol table.
///
/// Symbol-table names are mangled; each is compared both raw and
/// demangled (hash suffix stripped) against the map's poll symbols.
pub fn count_instrumentable_symbols(target_path: &str, map: &SymbolMap) -> Result<usize> {
    let file_data = std::fs::read(target_path)
        .with_context(|| format!("Failed to read binary: {target_path}"))?;
    let obj = object::File::parse(&*file_data)
        .with_context(|| format!("Failed to parse binary: {target_path}"))?;

    let mut present = 0;
    for symbol in obj.symbols() {
        let Ok(name) = symbol.name() else {
            continue;
        };
        let demangled = format!("{:#}", rustc_demangle::demangle(name));
        if map.display_name(name).is_some() || map.display_name(&demangled).is_some() {
            present += 1;
        }
    }
    Ok(present)
}
