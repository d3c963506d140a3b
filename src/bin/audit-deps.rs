//! CLI tool for auditing npm dependencies across a source tree

use anyhow::Context;
use clap::Parser;
use colored::*;
use npm_deps_audit::{audit_directory, run_scan, AuditConfig};
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "audit-deps")]
#[command(about = "Run npm audit across a source tree, failing on non-dev vulnerabilities", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory to audit directly, bypassing tree discovery
    input_dir: Option<PathBuf>,

    /// Root of the source tree to scan
    #[arg(short = 'r', long, default_value = ".")]
    root: PathBuf,

    /// Path to custom configuration file (TOML)
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Audit dev dependencies too, passing npm's exit code through unchanged
    #[arg(long = "audit_dev_deps")]
    audit_dev_deps: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    // Load configuration
    let mut config = match load_config(cli.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{} Failed to load config: {:#}", "Error:".red().bold(), e);
            process::exit(1);
        }
    };

    if cli.audit_dev_deps {
        config.audit_dev_deps = true;
    }

    let errors = if let Some(dir) = &cli.input_dir {
        // Single-directory mode: no exclusions, no recursive scan.
        audit_directory(&absolute(dir), &config)
    } else {
        run_scan(&absolute(&cli.root), &config)
    };

    if errors > 0 {
        eprintln!(
            "{} audit finished with {} error(s)",
            "Failed:".red().bold(),
            errors
        );
        process::exit(1);
    }

    println!("{} all audits passed", "Success:".green().bold());
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn load_config(path: Option<&Path>) -> anyhow::Result<AuditConfig> {
    let Some(path) = path else {
        return Ok(AuditConfig::default());
    };
    AuditConfig::load(path).with_context(|| format!("load {}", path.display()))
}
