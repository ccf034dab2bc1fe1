//! Logger construction from a [`Config`].

use super::{Logger, LoggerBuilder};
use crate::config::Config;
use crate::internal;

impl Logger {
    /// Console logger configured by `config`, mirrored to a file when the
    /// file section is enabled.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        internal::debug("LOGGER", "Building logger from config");
        Self::builder_from_config(config).build()
    }

    /// Same as [`from_config`](Self::from_config) but leaves the builder open,
    /// e.g. to swap the sink.
    #[must_use]
    pub fn builder_from_config(config: &Config) -> LoggerBuilder {
        let settings = config.to_settings();
        internal::debug(
            "LOGGER",
            &format!(
                "level={} prefix={} colors={}",
                settings.max_level,
                settings.prefix_level,
                if settings.colors { "on" } else { "off" }
            ),
        );

        let mut builder = LoggerBuilder::new().settings(settings);
        if let Some(target) = config.file_target() {
            internal::debug(
                "FILE",
                &format!("Output file: {}/{}", target.folder, target.name_pattern),
            );
            builder = builder.output_file(target);
        }
        builder
    }
}
