use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Environment variable that overrides the default data directory
pub const DATA_DIR_ENV: &str = "RECORD_EXPLORER_DATA_DIR";

const DEFAULT_DATA_DIR: &str = "data";

/// Resolve the directory searched by the search command.
///
/// An explicit override (the `--data-dir` flag) wins, then `RECORD_EXPLORER_DATA_DIR`,
/// then `./data` under the current working directory.
pub fn get_data_dir(override_dir: Option<&Path>) -> Result<PathBuf> {
    let from_env = env::var_os(DATA_DIR_ENV).filter(|value| !value.is_empty());
    resolve_data_dir(override_dir, from_env.map(PathBuf::from))
}

fn resolve_data_dir(override_dir: Option<&Path>, from_env: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = override_dir {
        return Ok(dir.to_path_buf());
    }
    if let Some(dir) = from_env {
        return Ok(dir);
    }

    let cwd = env::current_dir().context("Failed to determine the current directory")?;
    Ok(cwd.join(DEFAULT_DATA_DIR))
}
