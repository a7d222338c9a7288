// Config module for resolving the directories the installer works against

use crate::constants;
use anyhow::Context;
use std::path::PathBuf;

/// The user's "my documents" folder.
///
/// Platforms that report no documents folder (e.g. Linux without `user-dirs.dirs`)
/// fall back to `<home>/Documents`, where Maya keeps its user directories.
pub fn documents_dir() -> anyhow::Result<PathBuf> {
    dirs::document_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join("Documents")))
        .ok_or_else(|| anyhow::anyhow!("Could not resolve the documents directory"))
}

/// `<documents>/maya`, the parent of every per-version user directory.
pub fn maya_user_root() -> anyhow::Result<PathBuf> {
    Ok(documents_dir()?.join(constants::MAYA_DIR))
}

pub fn current_dir() -> anyhow::Result<PathBuf> {
    std::env::current_dir().context("Failed to read the current working directory")
}
