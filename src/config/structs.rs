//! Configuration struct definitions.

use crate::fmt::DEFAULT_PREFIX_FORMAT;
use serde::Deserialize;

/// Filtering and muting.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Threshold level name or index (`"info"`, `"4"`).
    pub level: String,
    /// Prefix verbosity name or index (`"minimal"`, `"1"`).
    pub prefix_level: String,
    pub muted: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            level: "trace".to_string(),
            prefix_level: "minimal".to_string(),
            muted: false,
        }
    }
}

/// How lines look on the console.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    pub colors: bool,
    pub propagate_color_on_user_header: bool,
    pub clean_line_before_print: bool,
    pub user_header: String,
    pub prefix_format: String,
    pub time_format: String,
    pub indent_unit: String,
    pub disable_printf_line_jump: bool,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            colors: true,
            propagate_color_on_user_header: false,
            clean_line_before_print: true,
            user_header: String::new(),
            prefix_format: DEFAULT_PREFIX_FORMAT.to_string(),
            time_format: "%H:%M:%S".to_string(),
            indent_unit: "  ".to_string(),
            disable_printf_line_jump: false,
        }
    }
}

/// Optional file mirror.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub enabled: bool,
    /// `~` is expanded.
    pub folder: String,
    /// Supports `{EXE}` and `{TIME}`.
    pub name: String,
    /// Overwrite when false.
    pub append: bool,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            folder: ".".to_string(),
            name: "{EXE}_{TIME}.log".to_string(),
            append: false,
        }
    }
}
