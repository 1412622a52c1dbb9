//! XDG-style path utilities.
//!
//! The configuration directory follows XDG Base Directory conventions on
//! every platform rather than OS-specific locations.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Returns the configuration directory for lingome.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/lingome` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/lingome` otherwise
pub fn config_dir() -> Result<PathBuf> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME")
        && !xdg.is_empty()
    {
        return Ok(PathBuf::from(xdg).join("lingome"));
    }

    let home = dirs::home_dir().context("Failed to determine home directory")?;
    Ok(home.join(".config").join("lingome"))
}
