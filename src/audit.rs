//! Audit invocation and top-level orchestration
//!
//! One external `npm audit` process per directory, launched synchronously
//! and awaited to completion. Every per-directory failure is converted to an
//! error-count contribution; nothing here aborts the scan.

use crate::config::AuditConfig;
use crate::error::{AuditError, Result};
use crate::resolutions::extract_resolutions;
use crate::scan;
use serde_json::Value;
use std::io::Read;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};
use tracing::{debug, warn};

/// Audit every discovered directory under `root`: the two fixed targets
/// first, then the pruned recursive scan. Returns the summed error count.
pub fn run_scan(root: &Path, config: &AuditConfig) -> u32 {
    let mut errors = 0u32;

    for path in scan::fixed_targets(root) {
        errors += audit_directory(&path, config);
    }

    let exclude = config.exclusion_prefixes(root);
    for path in scan::scan_targets(root, &exclude) {
        errors += audit_directory(&path, config);
    }

    errors
}

/// Audit a single directory, returning its error-count contribution.
///
/// Ineligible directories are skipped with a notice and contribute 0. A
/// command that cannot be launched at all contributes 1.
pub fn audit_directory(path: &Path, config: &AuditConfig) -> u32 {
    if !scan::is_auditable(path) {
        println!(
            "Skipping audit of \"{}\" (no {} or {} directory found)",
            path.display(),
            scan::MANIFEST_FILE,
            scan::INSTALLED_DEPS_DIR
        );
        return 0;
    }

    println!("Auditing {}", path.display());
    match run_audit(path, config) {
        Ok(contribution) => contribution,
        Err(e) => {
            warn!("audit of {} could not run: {}", path.display(), e);
            println!("Audit of {} failed to run", path.display());
            1
        }
    }
}

/// Launch the audit command in `path` and interpret the outcome.
fn run_audit(path: &Path, config: &AuditConfig) -> Result<u32> {
    if config.audit_dev_deps {
        // Plain `npm audit` on inherited stdio; the raw exit code is the
        // contribution, dev findings included.
        let status = Command::new(&config.program)
            .arg("audit")
            .current_dir(path)
            .status()
            .map_err(|source| AuditError::CommandLaunch {
                command: config.program.clone(),
                source,
            })?;
        return Ok(exit_contribution(status));
    }

    // JSON mode: capture stdout only, stderr stays on the terminal.
    let mut child = Command::new(&config.program)
        .args(["audit", "--json"])
        .current_dir(path)
        .stdout(Stdio::piped())
        .spawn()
        .map_err(|source| AuditError::CommandLaunch {
            command: config.program.clone(),
            source,
        })?;

    let mut stdout = Vec::new();
    if let Some(mut pipe) = child.stdout.take() {
        pipe.read_to_end(&mut stdout)?;
    }

    // The exit code carries no signal in JSON mode (npm exits nonzero for
    // dev-only findings too); the child is only reaped here.
    let status = child.wait()?;
    debug!("{} exited with {:?}", config.program, status.code());

    Ok(classify_output(&stdout))
}

/// Decode and classify captured audit output. Decode and parse failures are
/// a distinct failure point from the child's exit code: the command can exit
/// zero and still produce unparseable bytes (npm network errors do), and
/// vice versa.
fn classify_output(stdout: &[u8]) -> u32 {
    let result = std::str::from_utf8(stdout)
        .ok()
        .and_then(|text| serde_json::from_str::<Value>(text).ok());

    let Some(result) = result else {
        println!("Audit failed to return valid json");
        return 1;
    };

    let (resolutions, non_dev) = extract_resolutions(&result);

    if !non_dev.is_empty() {
        println!("Result: Audit finished, vulnerabilities found");
        return 1;
    }

    // Dev-only findings pass, but the user gets told about them.
    if !resolutions.is_empty() {
        println!("Result: Audit finished, there are dev package warnings");
    } else {
        println!("Result: Audit finished, no vulnerabilities found");
    }
    0
}

fn exit_contribution(status: ExitStatus) -> u32 {
    match status.code() {
        Some(code) if code > 0 => code as u32,
        Some(_) => 0,
        // Killed by a signal: no code, count it as one failure.
        None => 1,
    }
}
