//! # Configuration Module
//!
//! This module handles the on-disk settings store for Rota. The engine only
//! exposes pure snapshot transformations; reading and writing the settings
//! file lives here, outside the core.
//!
//! ## Data Storage
//!
//! Rota stores its settings in the platform-standard config directory:
//! - Linux: `~/.config/rota/settings.json`
//! - macOS: `~/Library/Application Support/rota/settings.json`
//! - Windows: `%APPDATA%\rota\settings.json`
//!
//! The file is the JSON form of [`Snapshot`](crate::persist::Snapshot):
//! votes plus cooldown/history configuration. History and cooldown windows
//! are transient and never written.

use crate::persist::Snapshot;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Returns the platform-appropriate settings file path.
///
/// Locates the standard config directory for the current platform and
/// creates the `rota` subdirectory if it doesn't exist, so a subsequent
/// write can succeed.
///
/// # Errors
///
/// Fails when the system config directory cannot be determined or the
/// subdirectory cannot be created.
pub fn settings_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir().ok_or_else(|| {
        anyhow::anyhow!(
            "Could not determine system config directory. Please ensure your platform supports standard config directories."
        )
    })?;

    let rota_dir = config_dir.join("rota");
    fs::create_dir_all(&rota_dir).with_context(|| {
        format!(
            "Failed to create Rota config directory at {}. Please check file permissions.",
            rota_dir.display()
        )
    })?;

    Ok(rota_dir.join("settings.json"))
}

/// Load a snapshot from `path`. A missing file is not an error: it yields
/// an empty snapshot, so first runs start from defaults.
pub fn load_snapshot(path: &Path) -> Result<Snapshot> {
    if !path.exists() {
        log::debug!("No settings file at {}; starting fresh.", path.display());
        return Ok(Snapshot::default());
    }

    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file {}", path.display()))?;
    Snapshot::from_json(&json)
        .with_context(|| format!("Settings file {} is not valid JSON", path.display()))
}

/// Write a snapshot to `path` as pretty-printed JSON.
pub fn save_snapshot(path: &Path, snapshot: &Snapshot) -> Result<()> {
    let json = snapshot.to_json_pretty()?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write settings file {}", path.display()))?;
    log::debug!("Saved settings to {}.", path.display());
    Ok(())
}
