//! Application-wide constants

/// Title set on the terminal window at startup
pub const WINDOW_TITLE: &str = "A text-based visualization experiment";

/// How long the event loop waits for input before re-checking the running flag
pub const POLL_INTERVAL_MS: u64 = 250;

/// Columns a tab character expands to when drawn
pub const TAB_WIDTH: usize = 4;

/// Filter applied to log output when a log file is given
pub const LOG_FILTER: &str = "stardust=debug";
