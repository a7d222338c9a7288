// Discover module for locating Maya user directories on disk

use crate::version::MayaVersion;
use log::debug;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Probe `root/<folder>` for every entry in `table` and keep the ones that exist.
pub fn find_installations(
    root: &Path,
    table: &[(MayaVersion, &str)],
) -> BTreeMap<MayaVersion, PathBuf> {
    let mut found = BTreeMap::new();

    for (version, folder) in table {
        let path = root.join(folder);
        if path.is_dir() {
            debug!("Found Maya {} user directory at {}", version, path.display());
            found.insert(*version, path);
        } else {
            debug!("No Maya {} user directory at {}", version, path.display());
        }
    }

    found
}

/// A discovered user directory paired with the install target configured for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Installation<'a> {
    pub user_dir: PathBuf,
    pub target: &'a str,
}

/// Keep only the installations this installer targets.
pub fn filter_installations<'a>(
    found: &BTreeMap<MayaVersion, PathBuf>,
    targets: &[(MayaVersion, &'a str)],
) -> BTreeMap<MayaVersion, Installation<'a>> {
    found
        .iter()
        .filter_map(|(version, path)| {
            let target = targets
                .iter()
                .find(|(candidate, _)| candidate == version)
                .map(|(_, target)| *target);
            if target.is_none() {
                debug!("Skipping Maya {}: not an install target", version);
            }
            target.map(|target| {
                (
                    *version,
                    Installation {
                        user_dir: path.clone(),
                        target,
                    },
                )
            })
        })
        .collect()
}
