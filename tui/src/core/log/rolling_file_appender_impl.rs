// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

use tracing_appender::rolling::{RollingFileAppender, Rotation};

/// Creates a file appender that never rotates, writing to exactly `path_str`.
///
/// Note that if you wrap this up in a non blocking writer, it doesn't work. Here's an
/// example of this:
/// `tracing_appender::non_blocking(try_create("foo")?)`
///
/// # Errors
///
/// Returns an error if:
/// - The path has no file name
/// - The file can't be created (missing folder, insufficient permissions)
pub fn try_create(path_str: &str) -> miette::Result<RollingFileAppender> {
    let path = PathBuf::from(&path_str);

    let parent = path.parent().ok_or_else(|| {
        miette::miette!(
            "Can't access current folder {}. It might not exist, or don't have required permissions.",
            path.display()
        )
    })?;

    let file_name = path.file_name().ok_or_else(|| {
        miette::miette!(
            "Can't access file name {}. It might not exist, or don't have required permissions.",
            path.display()
        )
    })?;

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy().into_owned())
        .build(parent)
        .map_err(|error| {
            miette::miette!("Can't create log file {}: {error}", path.display())
        })
}

#[cfg(test)]
mod tests_rolling_file_appender {
    use super::*;
    use crate::core::log::fixtures::temp_log_path;

    #[test]
    fn creates_the_file_eagerly() {
        let path = temp_log_path("appender");
        let _appender = try_create(&path).unwrap();
        assert!(std::path::Path::new(&path).exists());
        drop(std::fs::remove_file(&path));
    }

    #[test]
    fn rejects_a_path_without_file_name() {
        assert!(try_create("/").is_err());
    }
}
