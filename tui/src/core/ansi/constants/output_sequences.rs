// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Pieces of the sequences sent to the terminal.

/// `ESC [`
pub const CSI_START: &str = "\x1b[";

/// `ESC`
pub const ESC_START: &str = "\x1b";

// ==================== DEC private modes (`CSI ? n h/l`) ====================

/// Prefix of a DEC private mode parameter.
pub const DEC_PRIVATE_MODE_PREFIX: char = '?';

/// Suffix that sets (enables) a mode.
pub const DEC_MODE_SET: char = 'h';

/// Suffix that resets (disables) a mode.
pub const DEC_MODE_RESET: char = 'l';

/// Text cursor enable mode (DECTCEM).
pub const DECTCEM_SHOW_CURSOR: u16 = 25;

/// Alternate Screen Buffer Mode - DEC mode 1049
///
/// Full screen applications switch to the alternate buffer so the shell's screen
/// comes back untouched when they exit.
pub const ALT_SCREEN_BUFFER: u16 = 1049;

/// Report button presses, releases, and drags.
pub const BUTTON_EVENT_MOUSE_TRACKING: u16 = 1002;

/// Report all motion, even without a button held.
pub const APPLICATION_MOUSE_TRACKING: u16 = 1003;

/// Encode mouse reports in the SGR format (`CSI < props ; x ; y M/m`).
pub const SGR_MOUSE_MODE: u16 = 1006;

// ==================== ESC sequences ====================

/// `ESC 7`: save cursor (DECSC).
pub const DECSC_SAVE_CURSOR: char = '7';

/// `ESC 8`: restore cursor (DECRC).
pub const DECRC_RESTORE_CURSOR: char = '8';

// ==================== CSI final bytes ====================

/// Cursor position (CUP): `CSI row ; col H`.
pub const CUP_CURSOR_POSITION: char = 'H';

/// Erase in display (ED).
pub const ED_ERASE_DISPLAY: char = 'J';

/// Erase in line (EL).
pub const EL_ERASE_LINE: char = 'K';

/// ED / EL parameter: erase everything.
pub const ERASE_ALL: u16 = 2;

/// Fill rectangular area (DECFRA): `CSI ch ; top ; left ; bottom ; right $ x`.
pub const DECFRA_FILL_RECT: &str = "$x";
