// Constants module for the module descriptor and Maya folder layout

pub const MODULE_NAME: &str = "PivotTool";
pub const MODULE_VERSION: &str = "1.0.0.0";
/// Extra lines appended verbatim after the descriptor header.
pub const MODULE_DATA: &[&str] = &[];

pub const MAYA_DIR: &str = "maya";
pub const MODULES_DIR: &str = "modules";
pub const MODULE_FILE_EXTENSION: &str = "mod";

/// Schema version for the --json report format.
/// Increment only on breaking changes to ensure future integrations can safely evolve.
pub const SCHEMA_VERSION: u32 = 1;
