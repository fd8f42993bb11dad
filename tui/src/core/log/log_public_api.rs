// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing::dispatcher;

use crate::TracingConfig;

/// Global default subscriber, which once set, can't be unset or changed.
/// - This is great for apps.
/// - Docs for [Global default tracing
///   subscriber](https://docs.rs/tracing/latest/tracing/subscriber/fn.set_global_default.html)
///
/// Logging is **DISABLED** by **default**. Pass a level filter other than
/// [`tracing_core::LevelFilter::OFF`] to turn it on. Until then the [`tracing::debug!`]
/// etc. calls in this crate are no-ops.
///
/// A full screen app draws on stdout, so send logs to a file:
///
/// ```no_run
/// use termal_tui::{TracingConfig, WriterConfig, try_initialize_logging_global};
///
/// try_initialize_logging_global(TracingConfig {
///     writer_config: WriterConfig::File("demo.log".into()),
///     level_filter: tracing_core::LevelFilter::TRACE,
/// })
/// .unwrap();
/// ```
///
/// # Errors
///
/// Returns an error if the log file can't be created or a global subscriber is
/// already installed.
pub fn try_initialize_logging_global(
    options: impl Into<TracingConfig>,
) -> miette::Result<()> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(it.get_level_filter(), tracing_core::LevelFilter::OFF) {
        return Ok(());
    }

    it.install_global()
}

/// Thread local subscriber, which is thread local, and you can assign different ones
/// to different threads.
/// - This is great for tests.
/// - Docs for [Thread local tracing
///   subscriber](https://docs.rs/tracing/latest/tracing/subscriber/fn.set_default.html)
///
/// Logging is **DISABLED** by **default**, and `Ok(None)` is returned for
/// [`tracing_core::LevelFilter::OFF`]. Logging stops when the returned guard drops.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> miette::Result<Option<dispatcher::DefaultGuard>> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(it.get_level_filter(), tracing_core::LevelFilter::OFF) {
        return Ok(None);
    }

    it.install_thread_local().map(Some)
}

#[cfg(test)]
mod tests_log_public_api {
    use serial_test::serial;
    use tracing_core::LevelFilter;

    use super::*;
    use crate::{WriterConfig, core::log::fixtures::temp_log_path};

    #[test]
    #[serial]
    fn off_installs_nothing() {
        let guard = try_initialize_logging_thread_local(LevelFilter::OFF).unwrap();
        assert!(guard.is_none());
        try_initialize_logging_global(LevelFilter::OFF).unwrap();
    }

    #[test]
    #[serial]
    fn thread_local_file_logging_respects_level() {
        let path = temp_log_path("thread_local");
        let config = TracingConfig {
            writer_config: WriterConfig::File(path.clone()),
            level_filter: LevelFilter::DEBUG,
        };

        let guard = try_initialize_logging_thread_local(config).unwrap();
        assert!(guard.is_some());
        tracing::debug!("decoder ready");
        tracing::trace!("too chatty");
        drop(guard);

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("decoder ready"));
        assert!(!contents.contains("too chatty"));
        drop(std::fs::remove_file(&path));
    }
}
