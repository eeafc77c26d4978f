//! Path resolution for pomoclock configuration and log files.
//!
//! Everything lives in `~/.pomoclock/`:
//! - `config.yaml` - Main configuration file
//! - `logs/` - Log output while the TUI owns the terminal

use std::path::PathBuf;

use crate::error::ClockError;

/// Paths to pomoclock configuration and data directories.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.pomoclock/`
    pub root: PathBuf,
    /// Config file: `~/.pomoclock/config.yaml`
    pub config_file: PathBuf,
    /// Logs directory: `~/.pomoclock/logs/`
    pub logs: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, ClockError> {
        let home = std::env::var("HOME")
            .map_err(|_| ClockError::Config("Could not determine home directory".to_string()))?;

        Ok(Self::with_root(PathBuf::from(home).join(".pomoclock")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            logs: root.join("logs"),
            root,
        }
    }

    /// Log file used while the TUI is running.
    #[must_use]
    pub fn log_file(&self) -> PathBuf {
        self.logs.join("pomoclock.log")
    }

    /// Ensure all directories exist, creating them if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), ClockError> {
        for dir in [&self.root, &self.logs] {
            if !dir.exists() {
                std::fs::create_dir_all(dir).map_err(|e| {
                    ClockError::Config(format!(
                        "Failed to create directory {}: {e}",
                        dir.display()
                    ))
                })?;
            }
        }

        Ok(())
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| Self::with_root(PathBuf::from(".pomoclock")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths_with_root() {
        let root = PathBuf::from("/tmp/test-pomoclock");
        let paths = Paths::with_root(root.clone());

        assert_eq!(paths.root, root);
        assert_eq!(paths.config_file, root.join("config.yaml"));
        assert_eq!(paths.logs, root.join("logs"));
        assert_eq!(paths.log_file(), root.join("logs").join("pomoclock.log"));
    }

    #[test]
    fn test_ensure_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().join("nested"));

        paths.ensure_dirs().unwrap();

        assert!(paths.root.exists());
        assert!(paths.logs.exists());
    }
}
