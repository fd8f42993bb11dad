// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::Add;

use tracing::dispatcher::DefaultGuard;
use tracing_core::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::try_create_layers;

/// Default log file used when only a level is given.
pub const DEFAULT_LOG_FILE_NAME: &str = "log.txt";

/// Configure the tracing logging to suit your needs. You can display the logs to:
/// 1. a file,
/// 2. stdout or stderr,
/// 3. both.
///
/// Many types convert into this one, and `+` merges two configs, so call sites stay
/// short:
///
/// ```no_run
/// use termal_tui::{DisplayPreference, TracingConfig, WriterConfig,
///                  try_initialize_logging_global};
///
/// let level: TracingConfig = tracing::Level::DEBUG.into();
/// let display: TracingConfig = DisplayPreference::Stderr.into();
/// let file: TracingConfig = WriterConfig::File("demo.log".to_string()).into();
///
/// try_initialize_logging_global(level + display + file).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

/// Where log lines go. The `String` is a log file path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference),
    File(String),
    DisplayAndFile(DisplayPreference, String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

impl TracingConfig {
    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }

    /// Installs these layers as the process-wide subscriber. This can only succeed
    /// once per process.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file can't be created or a global subscriber is
    /// already set.
    pub fn install_global(self) -> miette::Result<()> {
        let layers = try_create_layers(self)?;
        tracing_subscriber::registry()
            .with(layers)
            .try_init()
            .map_err(|error| {
                miette::miette!("failed to install global tracing subscriber: {error}")
            })
    }

    /// Installs these layers for the current thread until the returned guard drops.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file can't be created.
    pub fn install_thread_local(self) -> miette::Result<DefaultGuard> {
        let layers = try_create_layers(self)?;
        let subscriber = tracing_subscriber::registry().with(layers);
        Ok(tracing::subscriber::set_default(subscriber))
    }
}

impl From<tracing::Level> for TracingConfig {
    fn from(level: tracing::Level) -> Self {
        Self {
            level_filter: level.into(),
            writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
        }
    }
}

impl From<LevelFilter> for TracingConfig {
    fn from(level_filter: LevelFilter) -> Self {
        Self {
            level_filter,
            writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
        }
    }
}

impl From<DisplayPreference> for TracingConfig {
    fn from(preferred_display: DisplayPreference) -> Self {
        Self {
            level_filter: LevelFilter::DEBUG,
            writer_config: WriterConfig::Display(preferred_display),
        }
    }
}

impl From<WriterConfig> for TracingConfig {
    fn from(writer_config: WriterConfig) -> Self {
        Self {
            level_filter: LevelFilter::DEBUG,
            writer_config,
        }
    }
}

/// Merge two [`TracingConfig`]s. The more verbose level wins, writers merge as in
/// [`WriterConfig`]'s `Add`.
impl Add<TracingConfig> for TracingConfig {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            level_filter: self.level_filter.max(rhs.level_filter),
            writer_config: self.writer_config + rhs.writer_config,
        }
    }
}

/// Merge two [`WriterConfig`]s. Display and file settings combine; when both sides
/// set the same thing, `rhs` wins.
///
/// - `{a: "foo"} + {a: "bar"} = {a: "bar"}`.
/// - `{a: None } + {a: "bar"} = {a: "bar"}`.
/// - `{a: "foo"} + {a: None } = {a: "foo"}`.
impl Add<WriterConfig> for WriterConfig {
    type Output = Self;

    fn add(self, rhs: WriterConfig) -> Self::Output {
        use WriterConfig::{Display, DisplayAndFile, File, None};

        match (self, rhs) {
            // No collision merge.
            (None, rhs) => rhs,
            (lhs, None) => lhs,
            (Display(display), File(file)) | (File(file), Display(display)) => {
                DisplayAndFile(display, file)
            }

            // Collision (rhs has higher specificity).
            (_, DisplayAndFile(display, file)) => DisplayAndFile(display, file),
            (Display(_), Display(display)) => Display(display),
            (File(_), File(file)) => File(file),
            (DisplayAndFile(_, file), Display(display))
            | (DisplayAndFile(display, _), File(file)) => DisplayAndFile(display, file),
        }
    }
}
