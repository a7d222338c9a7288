// Report module describing the outcome of an install run

use crate::constants;
use crate::version::MayaVersion;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Serialize)]
pub struct InstallReport {
    /// See constants::SCHEMA_VERSION.
    pub schema_version: u32,
    pub dry_run: bool,
    pub maya_root: PathBuf,
    pub discovered: Vec<MayaVersion>,
    pub installed: Vec<InstalledModule>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InstalledModule {
    pub version: MayaVersion,
    pub module_file: PathBuf,
    pub install_path: PathBuf,
    pub created_modules_dir: bool,
}

impl InstallReport {
    pub fn new(maya_root: PathBuf, dry_run: bool) -> Self {
        Self {
            schema_version: constants::SCHEMA_VERSION,
            dry_run,
            maya_root,
            discovered: Vec::new(),
            installed: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_json_shape() {
        let mut report = InstallReport::new(PathBuf::from("/docs/maya"), false);
        report.discovered = vec![MayaVersion::M2016, MayaVersion::M2018];
        report.installed.push(InstalledModule {
            version: MayaVersion::M2018,
            module_file: PathBuf::from("/docs/maya/2018/modules/PivotTool.mod"),
            install_path: PathBuf::from("/work"),
            created_modules_dir: true,
        });

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["schema_version"], 1);
        assert_eq!(value["dry_run"], false);
        assert_eq!(value["discovered"], serde_json::json!(["2016", "2018"]));
        assert_eq!(value["installed"][0]["version"], "2018");
        assert_eq!(value["installed"][0]["created_modules_dir"], true);
    }
}
