// Descriptor module for the .mod file Maya's module loader reads

use crate::constants;
use std::path::{Path, PathBuf};

#[cfg(windows)]
const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
const LINE_ENDING: &str = "\n";

/// A module definition: a `+ <name> <version> <path>` header followed by raw data lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDescriptor {
    pub name: String,
    pub version: String,
    pub install_path: PathBuf,
    pub data: Vec<String>,
}

impl ModuleDescriptor {
    pub fn pivot_tool(install_path: impl Into<PathBuf>) -> Self {
        Self {
            name: constants::MODULE_NAME.to_string(),
            version: constants::MODULE_VERSION.to_string(),
            install_path: install_path.into(),
            data: constants::MODULE_DATA.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn header(&self) -> String {
        format!(
            "+ {} {} {}",
            self.name,
            self.version,
            self.install_path.display()
        )
    }

    /// File contents, every line terminated by the platform line ending.
    pub fn render(&self) -> String {
        let mut text = self.header();
        text.push_str(LINE_ENDING);
        for line in &self.data {
            text.push_str(line);
            text.push_str(LINE_ENDING);
        }
        text
    }

    pub fn file_name(&self) -> String {
        format!("{}.{}", self.name, constants::MODULE_FILE_EXTENSION)
    }

    /// Where this descriptor lives inside a `modules` directory.
    pub fn path_in(&self, modules_dir: &Path) -> PathBuf {
        modules_dir.join(self.file_name())
    }
}
