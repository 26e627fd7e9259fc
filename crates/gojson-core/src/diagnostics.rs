//! Diagnostic side-channel for generator notes
//!
//! The generator never logs directly. It reports through a [`Diagnostics`]
//! implementation handed to it by the caller, so it can run without any
//! logging backend installed.

use std::fmt;

/// Severity of a diagnostic note
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl LogLevel {
    /// Map a `-v` repeat count to the most verbose level to show
    pub fn from_verbosity(count: u8) -> Self {
        match count {
            0 => LogLevel::Warn,
            1 => LogLevel::Info,
            2 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    }

    /// Lowercase name, usable as a tracing filter directive
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

/// Sink for generator notes (skipped messages, progress).
///
/// Implementations must be shareable across threads; a single sink may receive
/// notes from concurrent generation runs.
pub trait Diagnostics: Send + Sync {
    /// Record a note at the given severity
    fn note(&self, level: LogLevel, message: &str);
}

impl<D: Diagnostics + ?Sized> Diagnostics for &D {
    fn note(&self, level: LogLevel, message: &str) {
        (**self).note(level, message);
    }
}

/// Discards every note
#[derive(Debug, Default, Clone, Copy)]
pub struct NullDiagnostics;

impl Diagnostics for NullDiagnostics {
    fn note(&self, _level: LogLevel, _message: &str) {}
}

/// Forwards notes to `tracing` events at the matching level
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn note(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Trace => tracing::trace!(target: "gojson", "{message}"),
            LogLevel::Debug => tracing::debug!(target: "gojson", "{message}"),
            LogLevel::Info => tracing::info!(target: "gojson", "{message}"),
            LogLevel::Warn => tracing::warn!(target: "gojson", "{message}"),
            LogLevel::Error => tracing::error!(target: "gojson", "{message}"),
        }
    }
}
