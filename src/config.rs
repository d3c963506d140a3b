//! Configuration for the audit runner

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration for an audit run
///
/// All fields have defaults, so a config file only needs to name the
/// settings it overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    /// Command used to run the audit (`npm.cmd` on Windows, `npm` elsewhere)
    pub program: String,
    /// Path prefixes excluded from the recursive scan; relative entries are
    /// resolved against the scan root
    pub exclude_paths: Vec<PathBuf>,
    /// Audit dev dependencies too, passing the command's exit code through
    /// without interpreting its output
    pub audit_dev_deps: bool,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            program: default_program().to_string(),
            exclude_paths: vec![PathBuf::from("build"), PathBuf::from("node_modules")],
            audit_dev_deps: false,
        }
    }
}

/// Platform-appropriate npm command name
fn default_program() -> &'static str {
    if cfg!(windows) {
        "npm.cmd"
    } else {
        "npm"
    }
}

impl AuditConfig {
    /// Load configuration from a TOML file; unnamed settings keep their
    /// defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Resolve the configured exclusion entries into absolute prefixes under
    /// `root`. Entries that are already absolute are kept as-is.
    pub fn exclusion_prefixes(&self, root: &Path) -> Vec<PathBuf> {
        self.exclude_paths.iter().map(|p| root.join(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_program_matches_platform() {
        let config = AuditConfig::default();
        if cfg!(windows) {
            assert_eq!(config.program, "npm.cmd");
        } else {
            assert_eq!(config.program, "npm");
        }
    }

    #[test]
    fn exclusion_prefixes_resolve_relative_entries() {
        let config = AuditConfig::default();
        let prefixes = config.exclusion_prefixes(Path::new("/src/tree"));
        assert!(prefixes.contains(&PathBuf::from("/src/tree/build")));
        assert!(prefixes.contains(&PathBuf::from("/src/tree/node_modules")));
    }

    #[test]
    fn exclusion_prefixes_keep_absolute_entries() {
        let config = AuditConfig {
            exclude_paths: vec![PathBuf::from("/elsewhere/vendor")],
            ..AuditConfig::default()
        };
        let prefixes = config.exclusion_prefixes(Path::new("/src/tree"));
        assert_eq!(prefixes, vec![PathBuf::from("/elsewhere/vendor")]);
    }

    #[test]
    fn partial_config_file_fills_defaults() {
        let config: AuditConfig = toml::from_str("audit_dev_deps = true\n").unwrap();
        assert!(config.audit_dev_deps);
        assert_eq!(config.exclude_paths.len(), 2);
    }

    #[test]
    fn load_reads_a_config_file() {
        let tmp = tempfile::TempDir::new().expect("temp dir");
        let path = tmp.path().join("audit.toml");
        std::fs::write(&path, "program = \"pnpm\"\nexclude_paths = [\"out\"]\n")
            .expect("write config");

        let config = AuditConfig::load(&path).expect("load config");
        assert_eq!(config.program, "pnpm");
        assert_eq!(config.exclude_paths, vec![PathBuf::from("out")]);
        assert!(!config.audit_dev_deps);
    }

    #[test]
    fn load_rejects_malformed_toml() {
        let tmp = tempfile::TempDir::new().expect("temp dir");
        let path = tmp.path().join("audit.toml");
        std::fs::write(&path, "not toml [").expect("write config");

        assert!(AuditConfig::load(&path).is_err());
    }
}
