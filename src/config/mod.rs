//! TOML configuration and `LINELOG_*` environment overrides.
//!
//! Every section and field has a default, so an empty or missing file still
//! yields a working logger. The environment layer is applied on top of the
//! file values.

mod structs;

pub use structs::{FileConfig, GeneralConfig, TerminalConfig};

use crate::internal;
use crate::level::{Level, PrefixLevel};
use crate::logger::Settings;
use crate::output::FileTarget;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Threshold level, by name or index.
pub const ENV_LEVEL: &str = "LINELOG_LEVEL";
/// Prefix verbosity, by name or index.
pub const ENV_PREFIX_LEVEL: &str = "LINELOG_PREFIX_LEVEL";
/// `1`/`0`, `true`/`false`, `on`/`off`, `yes`/`no`.
pub const ENV_COLORS: &str = "LINELOG_COLORS";
/// Path of a file to mirror output to. Enables the mirror.
pub const ENV_OUTPUT_FILE: &str = "LINELOG_OUTPUT_FILE";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub terminal: TerminalConfig,
    pub file: FileConfig,
}

impl Config {
    /// Reads `linelog.toml` from the user config directory. A missing file
    /// gives the defaults.
    ///
    /// # Errors
    /// No config directory on this platform, unreadable file, or invalid TOML.
    pub fn load() -> Result<Self, crate::Error> {
        let path = Self::get_config_path()?;
        let config = Self::load_from(&path)?;
        internal::info("CONFIG", &format!("Config loaded from {}", path.display()));
        Ok(config)
    }

    /// # Errors
    /// Unreadable file or invalid TOML.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            internal::debug("CONFIG", "Config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// # Errors
    /// Invalid TOML or wrongly typed values.
    pub fn parse(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// `<config dir>/linelog/linelog.toml`, e.g. `~/.config/linelog/linelog.toml`.
    ///
    /// # Errors
    /// The platform has no notion of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("linelog").join("linelog.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// Defaults overlaid with the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Overlays the `LINELOG_*` variables of the process environment.
    pub fn apply_env(&mut self) {
        self.apply_env_from(|key| std::env::var(key).ok());
    }

    /// Overlays variables looked up through `lookup`. Values that do not
    /// parse are reported on the internal logger and ignored.
    pub fn apply_env_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(level) = lookup(ENV_LEVEL) {
            if level.parse::<Level>().is_ok() {
                self.general.level = level;
            } else {
                internal::warn("CONFIG", &format!("Ignoring {ENV_LEVEL}={level}"));
            }
        }
        if let Some(level) = lookup(ENV_PREFIX_LEVEL) {
            if level.parse::<PrefixLevel>().is_ok() {
                self.general.prefix_level = level;
            } else {
                internal::warn("CONFIG", &format!("Ignoring {ENV_PREFIX_LEVEL}={level}"));
            }
        }
        if let Some(colors) = lookup(ENV_COLORS) {
            match parse_bool(&colors) {
                Some(enabled) => self.terminal.colors = enabled,
                None => internal::warn("CONFIG", &format!("Ignoring {ENV_COLORS}={colors}")),
            }
        }
        if let Some(path) = lookup(ENV_OUTPUT_FILE)
            && !path.trim().is_empty()
        {
            let target = FileTarget::from_path(path.trim());
            self.file.enabled = true;
            self.file.folder = target.folder;
            self.file.name = target.name_pattern;
        }
    }

    /// Threshold; an unknown name falls back to `Trace`.
    #[must_use]
    pub fn parse_level(&self) -> Level {
        self.general.level.parse().unwrap_or_else(|_| {
            internal::warn(
                "CONFIG",
                &format!("Unknown level '{}', using trace", self.general.level),
            );
            Level::Trace
        })
    }

    /// Prefix verbosity; an unknown name falls back to `Minimal`.
    #[must_use]
    pub fn parse_prefix_level(&self) -> PrefixLevel {
        self.general.prefix_level.parse().unwrap_or_else(|_| {
            internal::warn(
                "CONFIG",
                &format!(
                    "Unknown prefix level '{}', using minimal",
                    self.general.prefix_level
                ),
            );
            PrefixLevel::Minimal
        })
    }

    /// Rejects level names that [`parse_level`](Self::parse_level) and
    /// [`parse_prefix_level`](Self::parse_prefix_level) would silently replace.
    ///
    /// # Errors
    /// [`Error::InvalidLevel`](crate::Error::InvalidLevel) naming the bad value.
    pub fn validate(&self) -> Result<(), crate::Error> {
        self.general.level.parse::<Level>()?;
        self.general.prefix_level.parse::<PrefixLevel>()?;
        Ok(())
    }

    /// Runtime settings described by this config.
    #[must_use]
    pub fn to_settings(&self) -> Settings {
        Settings {
            max_level: self.parse_level(),
            prefix_level: self.parse_prefix_level(),
            colors: self.terminal.colors,
            propagate_color_on_user_header: self.terminal.propagate_color_on_user_header,
            clean_line_before_print: self.terminal.clean_line_before_print,
            user_header: self.terminal.user_header.clone(),
            prefix_format: self.terminal.prefix_format.clone(),
            indent: String::new(),
            indent_unit: self.terminal.indent_unit.clone(),
            time_format: self.terminal.time_format.clone(),
            muted: self.general.muted,
            disable_printf_line_jump: self.terminal.disable_printf_line_jump,
        }
    }

    /// Mirror target, when the file section is enabled.
    #[must_use]
    pub fn file_target(&self) -> Option<FileTarget> {
        self.file.enabled.then(|| {
            FileTarget::new(self.file.folder.clone(), self.file.name.clone())
                .append(self.file.append)
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
