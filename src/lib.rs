//! # npm_deps_audit
//!
//! CI gate for JavaScript dependencies vendored throughout a source tree.
//! Walks the tree, finds every directory holding a `package.json` and
//! `package-lock.json` next to an installed `node_modules/`, runs
//! `npm audit` in each, and fails when any non-development dependency has a
//! known vulnerability. Development-only findings are reported but tolerated.
//!
//! ## Quick Start
//!
//! ```no_run
//! use npm_deps_audit::{run_scan, AuditConfig};
//! use std::path::Path;
//!
//! let config = AuditConfig::default();
//! let errors = run_scan(Path::new("/src/tree"), &config);
//!
//! std::process::exit(if errors > 0 { 1 } else { 0 });
//! ```
//!
//! ## Behavior
//!
//! - Audits the tree root and its grandparent ahead of the recursive scan
//! - Prunes configured subtrees (`build/`, `node_modules/` by default)
//! - Keeps scanning after individual failures; contributions accumulate
//! - `audit_dev_deps` switches to raw passthrough of npm's own exit code

mod audit;
mod config;
mod error;
mod resolutions;
mod scan;

// Re-export public API
pub use audit::{audit_directory, run_scan};
pub use config::AuditConfig;
pub use error::{AuditError, Result};
pub use resolutions::extract_resolutions;
pub use scan::{fixed_targets, is_auditable, scan_targets};
