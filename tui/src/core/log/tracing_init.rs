// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, registry::LookupSpan};

use crate::{DisplayPreference, TracingConfig, WriterConfig,
            core::log::rolling_file_appender_impl};

/// Builds the `fmt` layer shared by the display and file writers: compact lines with
/// the target, and no thread or source location noise.
#[macro_export]
macro_rules! create_fmt {
    () => {
        tracing_subscriber::fmt::layer()
            .compact()
            .with_target(true)
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_file(false)
            .with_line_number(false)
    };
}

/// A type erased layer, so display and file layers fit in one `Vec`.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Builds every layer `tracing_config` asks for, starting with its level filter.
/// Nothing is installed, see [`TracingConfig::install_global`] and
/// [`TracingConfig::install_thread_local`] for that.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_create_layers(
    tracing_config: TracingConfig,
) -> miette::Result<Vec<Box<DynLayer<tracing_subscriber::Registry>>>> {
    let level_filter = tracing_config.get_level_filter();
    let writer_config = tracing_config.get_writer_config();

    // The level filter goes first, so layers added later without their own filter
    // are still bounded by it.
    let mut layers: Vec<Box<DynLayer<tracing_subscriber::Registry>>> = vec![];
    layers.push(Box::new(level_filter));
    layers.extend(try_create_display_layer(level_filter, writer_config.clone())?);
    layers.extend(try_create_file_layer(level_filter, writer_config)?);

    Ok(layers)
}

/// Layer that writes to stdout or stderr, if `writer_config` has a display.
///
/// # Errors
///
/// Never fails today, the signature matches [`try_create_file_layer`].
#[allow(clippy::unnecessary_wraps)]
pub fn try_create_display_layer<S>(
    level_filter: LevelFilter,
    writer_config: WriterConfig,
) -> miette::Result<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let display_pref = match writer_config {
        WriterConfig::Display(it) | WriterConfig::DisplayAndFile(it, _) => it,
        WriterConfig::None | WriterConfig::File(_) => return Ok(None),
    };

    let layer: Box<DynLayer<S>> = match display_pref {
        DisplayPreference::Stdout => Box::new(
            create_fmt!()
                .with_writer(std::io::stdout)
                .with_filter(level_filter),
        ),
        DisplayPreference::Stderr => Box::new(
            create_fmt!()
                .with_writer(std::io::stderr)
                .with_filter(level_filter),
        ),
    };
    Ok(Some(layer))
}

/// Layer that appends plain text (no ANSI colors) to the log file, if
/// `writer_config` has one. The file is created right away.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_create_file_layer<S>(
    level_filter: LevelFilter,
    writer_config: WriterConfig,
) -> miette::Result<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let log_file_path = match writer_config {
        WriterConfig::File(it) | WriterConfig::DisplayAndFile(_, it) => it,
        WriterConfig::None | WriterConfig::Display(_) => return Ok(None),
    };

    let file = rolling_file_appender_impl::try_create(&log_file_path)?;
    Ok(Some(Box::new(
        create_fmt!()
            .with_ansi(false)
            .with_writer(file)
            .with_filter(level_filter),
    )))
}
