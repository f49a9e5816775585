//! Severity-ranked diagnostic log.
//!
//! Every stage of a DDS load reports what it noticed through a
//! [`Diagnostics`] log rather than failing outright. Only [`Severity::Fatal`]
//! stops processing; warnings mean "continue with best effort".

use std::fmt;

use crate::{Error, Result};

/// Severity of a single diagnostic, ordered from least to most severe.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Nothing was reported.
    #[default]
    None,
    /// Purely informational.
    Info,
    /// Recoverable anomaly; processing continued.
    Warning,
    /// Processing stopped; derived data must not be trusted.
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::None => "none",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Fatal => "fatal",
        };
        f.write_str(name)
    }
}

/// A single severity-tagged message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity, self.message)
    }
}

/// Append-only log of diagnostics.
///
/// The overall severity is the maximum over all entries. A fatal entry also
/// keeps the [`Error`] that caused it so callers can recover it with
/// [`Diagnostics::into_result`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
    fatal: Option<Error>,
}

impl Diagnostics {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an informational message.
    pub fn info(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(%message, "dds info");
        self.entries.push(Diagnostic {
            severity: Severity::Info,
            message,
        });
    }

    /// Record a recoverable anomaly.
    pub fn warn(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(%message, "dds warning");
        self.entries.push(Diagnostic {
            severity: Severity::Warning,
            message,
        });
    }

    /// Record a fatal condition. Only the first fatal error is retained.
    pub fn fatal(&mut self, error: Error) {
        let message = error.to_string();
        tracing::error!(%message, "dds fatal");
        self.entries.push(Diagnostic {
            severity: Severity::Fatal,
            message,
        });
        if self.fatal.is_none() {
            self.fatal = Some(error);
        }
    }

    /// Append every entry of `other` to this log.
    pub fn merge(&mut self, other: Diagnostics) {
        self.entries.extend(other.entries);
        if self.fatal.is_none() {
            self.fatal = other.fatal;
        }
    }

    /// Highest severity recorded so far.
    pub fn severity(&self) -> Severity {
        self.entries
            .iter()
            .map(|d| d.severity)
            .max()
            .unwrap_or(Severity::None)
    }

    /// Whether a fatal condition was recorded.
    pub fn is_fatal(&self) -> bool {
        self.fatal.is_some()
    }

    /// The fatal error, if any.
    pub fn error(&self) -> Option<&Error> {
        self.fatal.as_ref()
    }

    /// All entries in the order they were recorded.
    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    /// Entries of exactly the given severity.
    pub fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter().filter(move |d| d.severity == severity)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Convert into a `Result`, failing with the recorded fatal error.
    pub fn into_result(self) -> Result<Diagnostics> {
        match self.fatal {
            Some(error) => Err(error),
            None => Ok(self),
        }
    }
}

/// A stage result paired with the diagnostics produced while computing it.
#[derive(Debug, Clone)]
pub struct Diagnosed<T> {
    pub value: T,
    pub diagnostics: Diagnostics,
}

impl<T> Diagnosed<T> {
    pub fn new(value: T, diagnostics: Diagnostics) -> Self {
        Self { value, diagnostics }
    }

    /// Move the diagnostics into `log` and return the value.
    pub fn unpack(self, log: &mut Diagnostics) -> T {
        log.merge(self.diagnostics);
        self.value
    }
}
