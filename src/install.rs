// Install module for writing the module descriptor into each targeted Maya user directory

use crate::config;
use crate::constants;
use crate::descriptor::ModuleDescriptor;
use crate::discover::{Installation, filter_installations, find_installations};
use crate::report::{InstallReport, InstalledModule};
use crate::ui;
use crate::version::{self, MayaVersion, VERSION_DIRS};
use anyhow::Context;
use log::{debug, info};
use std::fs;
use std::path::{Component, Path, PathBuf};

#[derive(Debug, Clone, Copy, Default)]
pub struct InstallOptions {
    /// Discover and report, but touch nothing on disk.
    pub dry_run: bool,
    /// Suppress console output (used for --json).
    pub quiet: bool,
}

pub struct Installer {
    maya_root: PathBuf,
    working_dir: PathBuf,
    targets: &'static [(MayaVersion, &'static str)],
    options: InstallOptions,
}

impl Installer {
    pub fn new(
        maya_root: impl Into<PathBuf>,
        working_dir: impl Into<PathBuf>,
        targets: &'static [(MayaVersion, &'static str)],
        options: InstallOptions,
    ) -> Self {
        Self {
            maya_root: maya_root.into(),
            working_dir: working_dir.into(),
            targets,
            options,
        }
    }

    /// Installer for this machine: `<documents>/maya`, the process working directory,
    /// and the compiled-in install targets.
    pub fn from_environment(options: InstallOptions) -> anyhow::Result<Self> {
        Ok(Self::new(
            config::maya_user_root()?,
            config::current_dir()?,
            version::INSTALL_TARGETS,
            options,
        ))
    }

    pub fn run(&self) -> anyhow::Result<InstallReport> {
        let mut report = InstallReport::new(self.maya_root.clone(), self.options.dry_run);

        if self.options.dry_run {
            self.status("[DRY RUN]", "Previewing module installation...");
        }

        let found = find_installations(&self.maya_root, VERSION_DIRS);
        report.discovered = found.keys().copied().collect();

        let installations = filter_installations(&found, self.targets);
        if installations.is_empty() {
            self.warning(&format!(
                "No targeted Maya user directories found under {}",
                self.maya_root.display()
            ));
        }

        for (maya_version, installation) in &installations {
            let installed = self.install_one(*maya_version, installation)?;
            report.installed.push(installed);
        }

        if !self.options.quiet {
            ui::success("Done!");
        }
        Ok(report)
    }

    fn install_one(
        &self,
        maya_version: MayaVersion,
        installation: &Installation<'_>,
    ) -> anyhow::Result<InstalledModule> {
        self.action(&format!("Installing module for '{}'...", maya_version));

        let install_path = resolve_install_path(&self.working_dir, installation.target);
        let modules_dir = installation.user_dir.join(constants::MODULES_DIR);
        let descriptor = ModuleDescriptor::pivot_tool(&install_path);
        let module_file = descriptor.path_in(&modules_dir);

        let created_modules_dir = if self.options.dry_run {
            let missing = !modules_dir.exists();
            if !missing && !modules_dir.is_dir() {
                self.warning(&format!(
                    "{} exists and is not a directory; installing would fail",
                    modules_dir.display()
                ));
            } else if missing {
                self.step(&format!("Would create directory: {}", modules_dir.display()));
            }
            self.step(&format!("Would write {}", module_file.display()));
            missing
        } else {
            let created = ensure_dir(&modules_dir)?;
            if created {
                self.step(&format!("Created directory: {}", modules_dir.display()));
            }
            self.step("Writing module...");
            fs::write(&module_file, descriptor.render())
                .with_context(|| format!("Failed to write {}", module_file.display()))?;
            info!(
                "Wrote {} for Maya {} -> {}",
                module_file.display(),
                maya_version,
                install_path.display()
            );
            created
        };

        Ok(InstalledModule {
            version: maya_version,
            module_file,
            install_path,
            created_modules_dir,
        })
    }

    fn action(&self, message: &str) {
        if !self.options.quiet {
            ui::action(message);
        }
    }

    fn step(&self, message: &str) {
        if !self.options.quiet {
            ui::step(message);
        }
    }

    fn status(&self, prefix: &str, message: &str) {
        if !self.options.quiet {
            ui::status(prefix, message);
        }
    }

    fn warning(&self, message: &str) {
        if !self.options.quiet {
            ui::warning(message);
        }
    }
}

/// Join `relative` onto `working_dir` and fold `.`/`..` components lexically.
///
/// Symlinks are left alone, so `"."` under `/work` is exactly `/work`.
pub fn resolve_install_path(working_dir: &Path, relative: &str) -> PathBuf {
    let mut resolved = PathBuf::new();
    for component in working_dir.join(relative).components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(resolved.components().next_back(), Some(Component::Normal(_))) {
                    resolved.pop();
                } else if !resolved.has_root() {
                    resolved.push(component);
                }
            }
            other => resolved.push(other),
        }
    }
    resolved
}

/// Create `dir` when it is missing. Returns whether a creation call was made.
pub fn ensure_dir(dir: &Path) -> anyhow::Result<bool> {
    if dir.is_dir() {
        debug!("{} already exists", dir.display());
        return Ok(false);
    }

    info!("Creating directory {}", dir.display());
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    Ok(true)
}
