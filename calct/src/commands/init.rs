//! Init command implementation.
//!
//! Writes a `calct.toml` populated with the default settings.

use std::path::{Path, PathBuf};

use crate::config::{Config, CONFIG_FILE_NAME};
use crate::error::{CalctError, Result};

/// Arguments for the init command.
#[derive(Debug, Clone, Default)]
pub struct InitArgs {
    /// Where to write the file (default: `./calct.toml`).
    pub path: Option<PathBuf>,
    /// Overwrite an existing file.
    pub force: bool,
}

/// Execute the init command, returning the path that was written.
pub fn run_init(args: InitArgs) -> Result<PathBuf> {
    let target = args.path.unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));
    write_default_config(&target, args.force)?;
    tracing::info!(path = %target.display(), "wrote default configuration");
    Ok(target)
}

fn write_default_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(CalctError::Config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    Config::default().save_to_path(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_loadable_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("calct.toml");

        let written = run_init(InitArgs {
            path: Some(path.clone()),
            force: false,
        })
        .unwrap();

        assert_eq!(written, path);
        assert_eq!(Config::load_from_path(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("calct.toml");
        std::fs::write(&path, "verbose = true\n").unwrap();

        let err = run_init(InitArgs {
            path: Some(path.clone()),
            force: false,
        })
        .unwrap_err();
        assert!(matches!(err, CalctError::Config(_)));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "verbose = true\n");
    }

    #[test]
    fn test_init_force_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("calct.toml");
        std::fs::write(&path, "verbose = true\n").unwrap();

        run_init(InitArgs {
            path: Some(path.clone()),
            force: true,
        })
        .unwrap();
        assert!(!Config::load_from_path(&path).unwrap().verbose);
    }
}
