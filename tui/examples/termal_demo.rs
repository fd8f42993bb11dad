// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Full screen demo. Shows the last decoded event in a text panel, stamps a box
//! wherever the left mouse button is pressed, and quits on Ctrl-Q.
//!
//! ```text
//! cargo run --example termal_demo -- --mouse all --log-level debug
//! tail -f termal_demo.log
//! ```

use std::{collections::VecDeque, fmt::Write as _};

use clap::{Parser, ValueEnum};
use termal_tui::{EventDecoder, InputEvent, MouseAction, MouseButton, MouseEvent,
                 MouseTracking, OutputDevice, ReadTimeout, SPACE_CELL, Size,
                 StdinByteSource, TRANSPARENT_CELL, TerminalSession, TextBuffer,
                 TextPanel, TracingConfig, View, WrapMode, WriterConfig, ctrl_key,
                 get_size, paint, try_initialize_logging_global};
use tracing_core::LevelFilter;

const MAX_STAMPS: usize = 16;
const STAMP_CELL: u32 = '#' as u32;
const TEXT_CAPACITY: usize = 1024;

/// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
#[derive(Debug, Parser)]
#[command(bin_name = "termal_demo")]
#[command(about = "Decode keyboard and mouse input, and draw views on the terminal")]
#[command(version)]
#[command(next_line_help = true)]
pub struct CliArgs {
    #[arg(
        long,
        default_value_t = 1,
        help = "How long a read waits for input, in tenths of a second. 0 polls without waiting."
    )]
    pub timeout_tenths: u8,

    #[arg(long, value_enum, default_value_t = MouseArg::Buttons, help = "Which mouse events to report.")]
    pub mouse: MouseArg,

    #[arg(
        long,
        default_value = "off",
        help = "Log level: off, error, warn, info, debug, or trace."
    )]
    pub log_level: LevelFilter,

    #[arg(long, default_value = "termal_demo.log", help = "Log file path.")]
    pub log_file: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MouseArg {
    Buttons,
    All,
    Off,
}

impl From<MouseArg> for MouseTracking {
    fn from(it: MouseArg) -> Self {
        match it {
            MouseArg::Buttons => MouseTracking::ButtonEvents,
            MouseArg::All => MouseTracking::AllEvents,
            MouseArg::Off => MouseTracking::Off,
        }
    }
}

impl CliArgs {
    fn read_timeout(&self) -> ReadTimeout {
        match self.timeout_tenths {
            0 => ReadTimeout::NonBlocking,
            tenths => ReadTimeout::Tenths(tenths),
        }
    }
}

fn main() -> miette::Result<()> {
    let cli_args = CliArgs::parse();

    try_initialize_logging_global(TracingConfig {
        writer_config: WriterConfig::File(cli_args.log_file.clone()),
        level_filter: cli_args.log_level,
    })?;

    let window_size = get_size()?;
    tracing::info!(%window_size, ?cli_args, "starting");

    let mut session = TerminalSession::begin(
        cli_args.read_timeout(),
        cli_args.mouse.into(),
        OutputDevice::new_stdout(),
    )?;

    // Restore the terminal even if the loop failed.
    let result = run_event_loop(&mut session, window_size);
    session.end()?;
    result
}

#[derive(Debug)]
struct DemoState {
    root: View,
    panel: TextPanel,
    text: TextBuffer,
    stamps: VecDeque<View>,
    scratch: Vec<u8>,
}

impl DemoState {
    fn new(window_size: Size) -> Self {
        let panel_width = (window_size.col_width / 2).max(1);
        let panel_height = (window_size.row_height / 2).max(1);
        Self {
            root: View::new(window_size.col_width, window_size.row_height),
            panel: TextPanel::new(panel_width, panel_height, 2, 1)
                .with_wrap(WrapMode::Wrap),
            text: TextBuffer::new(TEXT_CAPACITY),
            stamps: VecDeque::with_capacity(MAX_STAMPS),
            scratch: Vec::new(),
        }
    }

    fn describe(&mut self, event: InputEvent) {
        self.text.clear();
        if write!(
            self.text,
            "termal demo, press Ctrl-Q to quit\n\nlast event:\n{event:?}\n\nboxes: {}",
            self.stamps.len()
        )
        .is_err()
        {
            tracing::warn!("event description truncated");
        }
    }

    /// A 3 x 3 box with a transparent middle, centered on the click.
    fn stamp(&mut self, mouse_event: MouseEvent) {
        let mut stamp = View::new(3, 3);
        stamp.fill(STAMP_CELL);
        stamp.set_cell(1, 1, TRANSPARENT_CELL);
        // Mouse coordinates are 1-based, and the box is centered.
        stamp.set_origin((mouse_event.x as isize) - 2, (mouse_event.y as isize) - 2);

        if self.stamps.len() == MAX_STAMPS {
            self.stamps.pop_front();
        }
        self.stamps.push_back(stamp);
    }

    fn render(&mut self, output_device: &mut OutputDevice) -> miette::Result<()> {
        self.root.fill(SPACE_CELL);
        for stamp in &self.stamps {
            stamp.composite_into(&mut self.root);
        }
        self.panel.render_into(&self.text, &mut self.root);
        paint(&self.root, output_device, &mut self.scratch)?;
        Ok(())
    }
}

fn run_event_loop(session: &mut TerminalSession, window_size: Size) -> miette::Result<()> {
    let mut decoder = EventDecoder::<100>::new();
    let mut stdin = StdinByteSource::new();
    let mut state = DemoState::new(window_size);

    state.describe(InputEvent::NoKey);
    state.render(session.output_device())?;

    loop {
        let event = decoder.decode(&mut stdin)?;
        match event {
            InputEvent::NoKey => continue,
            InputEvent::PlainKey(key) if key == ctrl_key(b'q') => break,
            InputEvent::Mouse(
                mouse_event @ MouseEvent {
                    button: MouseButton::Button1,
                    action: MouseAction::Pressed,
                    motion: false,
                    ..
                },
            ) => state.stamp(mouse_event),
            _ => {}
        }

        tracing::debug!(?event, pending = decoder.pending_len(), "decoded");
        state.describe(event);
        state.render(session.output_device())?;
    }

    tracing::info!("quit");
    Ok(())
}
