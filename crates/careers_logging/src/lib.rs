#![deny(missing_docs)]
//! Shared logging utilities for the careers grid workspace.
//!
//! This crate provides the `careers_*` logging macros used across the codebase,
//! a per-thread frame counter the host loop stamps onto log lines, and a
//! minimal test initializer for the global logger.

use std::cell::Cell;

thread_local! {
    /// Animation frame the host loop is currently processing on this thread.
    static FRAME: Cell<u64> = const { Cell::new(0) };
}

/// Records the animation frame the host is processing on the current thread.
///
/// The host calls this once per delivered frame so scroll and reveal logs can
/// be lined up with the frame that produced them.
pub fn set_frame(frame: u64) {
    FRAME.with(|v| v.set(frame));
}

/// Returns the frame last recorded with [`set_frame`], or 0 before the first frame.
pub fn current_frame() -> u64 {
    FRAME.with(|v| v.get())
}

/// Logs a trace-level message prefixed with the current frame.
#[macro_export]
macro_rules! careers_trace {
    ($($arg:tt)*) => {{
        log::trace!("[frame {}] {}", $crate::current_frame(), format_args!($($arg)*));
    }};
}

/// Logs a debug-level message prefixed with the current frame.
#[macro_export]
macro_rules! careers_debug {
    ($($arg:tt)*) => {{
        log::debug!("[frame {}] {}", $crate::current_frame(), format_args!($($arg)*));
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! careers_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! careers_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! careers_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Initializes a simple terminal logger for use in tests.
///
/// Safe to call from every test: it no-ops once a logger is installed.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Another test may have won the race to install the logger.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
