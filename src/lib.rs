//! Installs the PivotTool module descriptor into Maya user directories.
//!
//! The run is a straight line: find the per-version user directories under
//! `<documents>/maya`, keep the versions listed in [`version::INSTALL_TARGETS`], then
//! write `modules/PivotTool.mod` into each of them.

pub mod cli;
pub mod config;
pub mod constants;
pub mod descriptor;
pub mod discover;
pub mod install;
pub mod report;
pub mod ui;
pub mod version;

pub use descriptor::ModuleDescriptor;
pub use install::{InstallOptions, Installer};
pub use report::{InstallReport, InstalledModule};
pub use version::MayaVersion;
