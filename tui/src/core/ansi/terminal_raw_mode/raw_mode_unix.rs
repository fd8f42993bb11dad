// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words termios VMIN VTIME tcgetattr tcsetattr isatty

//! Unix raw mode using `rustix` termios calls.

use std::{fs::File,
          io::{self, Read},
          sync::{LazyLock, Mutex}};

use rustix::{fd::{AsFd, BorrowedFd},
             termios::{self, OptionalActions, SpecialCodeIndex, Termios}};

use crate::{RawModeConfig, TerminalIoError};

/// Settings in effect before raw mode was first enabled.
static ORIGINAL_TERMIOS: LazyLock<Mutex<Option<Termios>>> =
    LazyLock::new(|| Mutex::new(None));

/// Stdin when it is a terminal, else the controlling terminal. Raw mode is set on
/// this fd, and [`crate::StdinByteSource`] reads from it.
#[derive(Debug)]
pub(crate) enum TerminalFd {
    Stdin(io::Stdin),
    DevTty(File),
}

impl Read for TerminalFd {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            TerminalFd::Stdin(stdin) => stdin.lock().read(buf),
            TerminalFd::DevTty(file) => file.read(buf),
        }
    }
}

impl AsFd for TerminalFd {
    fn as_fd(&self) -> BorrowedFd<'_> {
        match self {
            TerminalFd::Stdin(stdin) => stdin.as_fd(),
            TerminalFd::DevTty(file) => file.as_fd(),
        }
    }
}

pub(crate) fn get_terminal_fd() -> Result<TerminalFd, TerminalIoError> {
    let stdin = io::stdin();
    let stdin_is_terminal = termios::isatty(&stdin);
    select_terminal_fd(stdin, stdin_is_terminal, || {
        File::options().read(true).write(true).open("/dev/tty")
    })
}

fn select_terminal_fd(
    stdin: io::Stdin,
    stdin_is_terminal: bool,
    open_dev_tty: impl FnOnce() -> io::Result<File>,
) -> Result<TerminalFd, TerminalIoError> {
    if stdin_is_terminal {
        return Ok(TerminalFd::Stdin(stdin));
    }
    open_dev_tty()
        .map(TerminalFd::DevTty)
        .map_err(|source| TerminalIoError::NoTerminal { source })
}

fn attributes_error(
    operation: &'static str,
) -> impl FnOnce(rustix::io::Errno) -> TerminalIoError {
    move |errno| TerminalIoError::Attributes {
        operation,
        source: errno.into(),
    }
}

pub fn enable_raw_mode(config: RawModeConfig) -> Result<(), TerminalIoError> {
    let fd = get_terminal_fd()?;

    let mut termios = termios::tcgetattr(&fd).map_err(attributes_error("read"))?;

    {
        let mut original = ORIGINAL_TERMIOS
            .lock()
            .map_err(|_| TerminalIoError::SettingsLockPoisoned)?;
        if original.is_none() {
            *original = Some(termios.clone());
        }
    }

    termios.make_raw();

    let (vmin, vtime) = config.read_timeout.as_vmin_vtime();
    termios.special_codes[SpecialCodeIndex::VMIN] = vmin;
    termios.special_codes[SpecialCodeIndex::VTIME] = vtime;

    termios::tcsetattr(&fd, OptionalActions::Flush, &termios)
        .map_err(attributes_error("write"))?;

    tracing::debug!(vmin, vtime, "raw mode enabled");
    Ok(())
}

pub fn disable_raw_mode() -> Result<(), TerminalIoError> {
    let original = ORIGINAL_TERMIOS
        .lock()
        .map_err(|_| TerminalIoError::SettingsLockPoisoned)?;

    if let Some(ref termios) = *original {
        let fd = get_terminal_fd()?;
        termios::tcsetattr(&fd, OptionalActions::Flush, termios)
            .map_err(attributes_error("restore"))?;
        tracing::debug!("raw mode disabled");
    }

    Ok(())
}

#[cfg(test)]
mod tests_terminal_fd {
    use super::*;

    const MANIFEST: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml");

    #[test]
    fn terminal_stdin_is_used_as_is() {
        let fd = select_terminal_fd(io::stdin(), true, || {
            panic!("/dev/tty must not be opened when stdin is a terminal")
        })
        .unwrap();
        assert!(matches!(fd, TerminalFd::Stdin(_)));
    }

    #[test]
    fn redirected_stdin_falls_back_to_dev_tty_and_reads_from_it() {
        let mut fd = select_terminal_fd(io::stdin(), false, || File::open(MANIFEST)).unwrap();
        assert!(matches!(fd, TerminalFd::DevTty(_)));

        let mut buf = [0_u8; 8];
        let count = fd.read(&mut buf).unwrap();
        let expected = std::fs::read(MANIFEST).unwrap();
        assert_eq!(buf[..count], expected[..count]);
    }

    #[test]
    fn no_terminal_at_all_is_an_error() {
        let error = select_terminal_fd(io::stdin(), false, || {
            Err(io::Error::from(io::ErrorKind::NotFound))
        })
        .unwrap_err();
        assert!(matches!(error, TerminalIoError::NoTerminal { .. }));
    }
}
