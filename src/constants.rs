//! Application-wide constants.

/// Application name shown in titles and messages
pub const APP_NAME: &str = "steelcore";

/// Binary name used in help and error messages
pub const APP_BINARY_NAME: &str = "steelcore";

/// Cadence between scripted boot-log lines
pub const TICKER_INTERVAL_MS: u64 = 320;

/// Delay between echoing a record's command and leaving the deck,
/// long enough for the echoed line to be visible
pub const NAV_DELAY_MS: u64 = 480;

/// How long a glitch flash stays on screen
pub const GLITCH_FLASH_MS: u64 = 260;

/// How long scrambled monolith glyphs stay before reverting
pub const SCRAMBLE_REVERT_MS: u64 = 550;

/// Symbols substituted into the monolith while scrambling
pub const SCRAMBLE_ALPHABET: &[char] = &['/', '\\', '|', '_', '-', '=', '+', '*', '#', '@'];

/// Maximum number of lines kept in the terminal stream scrollback
pub const LOG_SCROLLBACK: usize = 200;

/// ASCII identity monolith rendered in the left column
pub const MONOLITH: &str = r"
 ____ _____ ____ ____ _
/ ___|_   _| ___| ___| |
\___ \ | | |  _||  _|| |
 ___) || | | |__| |__| |___
|____/ |_| |____|____|_____|
  ____ ___  ____  ____
 / ___/ _ \|  _ \| ___|
| |  | | | | |_) |  _|
| |__| |_| |  _ <| |___
 \____\___/|_| \_\_____|
";
