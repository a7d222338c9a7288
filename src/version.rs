// Version module for the supported Maya releases and their lookup tables

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A Maya release line with its own per-user directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum MayaVersion {
    #[serde(rename = "2013-x64")]
    M2013X64,
    #[serde(rename = "2014-x64")]
    M2014X64,
    #[serde(rename = "2015-x64")]
    M2015X64,
    #[serde(rename = "2016")]
    M2016,
    #[serde(rename = "2017")]
    M2017,
    #[serde(rename = "2018")]
    M2018,
    #[serde(rename = "2019")]
    M2019,
}

/// Version to the folder name used under `<documents>/maya`.
pub const VERSION_DIRS: &[(MayaVersion, &str)] = &[
    (MayaVersion::M2013X64, MayaVersion::M2013X64.folder_name()),
    (MayaVersion::M2014X64, MayaVersion::M2014X64.folder_name()),
    (MayaVersion::M2015X64, MayaVersion::M2015X64.folder_name()),
    (MayaVersion::M2016, MayaVersion::M2016.folder_name()),
    (MayaVersion::M2017, MayaVersion::M2017.folder_name()),
    (MayaVersion::M2018, MayaVersion::M2018.folder_name()),
    (MayaVersion::M2019, MayaVersion::M2019.folder_name()),
];

/// Versions that receive the module, mapped to the install location advertised in the
/// descriptor, relative to the working directory.
///
/// Add a row here to target another release.
pub const INSTALL_TARGETS: &[(MayaVersion, &str)] =
    &[(MayaVersion::M2018, "."), (MayaVersion::M2019, ".")];

impl MayaVersion {
    pub const fn folder_name(self) -> &'static str {
        match self {
            MayaVersion::M2013X64 => "2013-x64",
            MayaVersion::M2014X64 => "2014-x64",
            MayaVersion::M2015X64 => "2015-x64",
            MayaVersion::M2016 => "2016",
            MayaVersion::M2017 => "2017",
            MayaVersion::M2018 => "2018",
            MayaVersion::M2019 => "2019",
        }
    }
}

impl fmt::Display for MayaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.folder_name())
    }
}

impl FromStr for MayaVersion {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VERSION_DIRS
            .iter()
            .find(|(_, folder)| *folder == s)
            .map(|(version, _)| *version)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Unsupported Maya version: '{}'. Supported versions: {}",
                    s,
                    VERSION_DIRS
                        .iter()
                        .map(|(_, folder)| *folder)
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            })
    }
}
