//! Configuration file (.treetest.conf) parsing and handling
//!
//! The .treetest.conf file uses INI format with a [DEFAULT] section
//! describing suite-wide settings. It is optional; command-line options take
//! precedence over it.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the per-suite configuration file, looked up in the suite root.
pub const CONFIG_FILE: &str = ".treetest.conf";

/// Configuration loaded from .treetest.conf
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SuiteConfig {
    /// Wrap every spawned command with this command line
    pub wrap: Option<String>,

    /// Extra directories searched for executables, before the environment's
    /// search path
    pub exec_paths: Vec<PathBuf>,

    /// Extension recognized as a test-module source file
    pub module_extension: Option<String>,

    /// Root-level driver file excluded from discovery
    pub driver: Option<String>,
}

impl SuiteConfig {
    /// Load configuration from a .treetest.conf file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {}", CONFIG_FILE, e)))?;

        Self::parse(&contents)
    }

    /// Load the configuration from the suite root, or defaults if the file
    /// does not exist.
    pub fn discover(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE);
        if path.exists() {
            Self::load_from_file(&path)
        } else {
            Ok(SuiteConfig::default())
        }
    }

    /// Parse configuration from a string
    pub fn parse(contents: &str) -> Result<Self> {
        // Parse as INI format
        let ini: HashMap<String, HashMap<String, String>> = serde_ini::from_str(contents)
            .map_err(|e| Error::Config(format!("Failed to parse {}: {}", CONFIG_FILE, e)))?;

        // Extract DEFAULT section
        let default = ini.get("DEFAULT").ok_or_else(|| {
            Error::Config(format!("No [DEFAULT] section in {}", CONFIG_FILE))
        })?;

        let exec_paths = match default.get("exec_path") {
            Some(paths) => std::env::split_paths(paths).collect(),
            None => Vec::new(),
        };

        Ok(SuiteConfig {
            wrap: default.get("wrap").cloned(),
            exec_paths,
            module_extension: default.get("module_extension").cloned(),
            driver: default.get("driver").cloned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full() {
        let config = SuiteConfig::parse(
            "[DEFAULT]\nwrap=valgrind -q\nexec_path=bin:tools/bin\nmodule_extension=chk\ndriver=run.chk\n",
        )
        .unwrap();
        assert_eq!(config.wrap.as_deref(), Some("valgrind -q"));
        assert_eq!(
            config.exec_paths,
            vec![PathBuf::from("bin"), PathBuf::from("tools/bin")]
        );
        assert_eq!(config.module_extension.as_deref(), Some("chk"));
        assert_eq!(config.driver.as_deref(), Some("run.chk"));
    }

    #[test]
    fn test_parse_missing_section() {
        let result = SuiteConfig::parse("[suite]\nwrap=x\n");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("DEFAULT"));
    }

    #[test]
    fn test_discover_absent_file_is_default() {
        let dir = TempDir::new().unwrap();
        let config = SuiteConfig::discover(dir.path()).unwrap();
        assert!(config.wrap.is_none());
        assert!(config.exec_paths.is_empty());
    }

    #[test]
    fn test_discover_reads_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "[DEFAULT]\nwrap=strace\n").unwrap();
        let config = SuiteConfig::discover(dir.path()).unwrap();
        assert_eq!(config.wrap.as_deref(), Some("strace"));
    }
}
