use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

/// Base config directory (~/.config/scaffold-kit/ on Unix, %APPDATA%\scaffold-kit on Windows)
pub fn scaffold_kit() -> Result<PathBuf> {
    #[cfg(windows)]
    {
        let appdata = env::var("APPDATA").map_err(|_| {
            Error::internal_unexpected(
                "APPDATA environment variable not set on Windows".to_string(),
            )
        })?;
        Ok(PathBuf::from(appdata).join("scaffold-kit"))
    }

    #[cfg(not(windows))]
    {
        let home = env::var("HOME").map_err(|_| {
            Error::internal_unexpected(
                "HOME environment variable not set on Unix-like system".to_string(),
            )
        })?;
        Ok(PathBuf::from(home).join(".config").join("scaffold-kit"))
    }
}

/// Global scaffold-kit.json config file path
pub fn config_json() -> Result<PathBuf> {
    Ok(scaffold_kit()?.join("scaffold-kit.json"))
}

/// Resolve a user-supplied path, expanding a leading `~`.
pub fn expand(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).to_string())
}
