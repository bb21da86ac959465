//! Side-channel collector for notes and warnings raised while mapping objects.
//!
//! Mapping never aborts a batch. Instead each degraded result is recorded here
//! and mirrored to `tracing` so the caller can inspect the list afterwards and
//! logs show the same events as they happen.

use std::fmt;

use serde::Serialize;
use tracing::{error, info, warn};

/// How serious a diagnostic is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Severity {
    /// Informational; nothing went wrong.
    Note,
    /// Recoverable degradation; the operation continued.
    Warning,
    /// The operation was aborted.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Note => "note",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        f.write_str(label)
    }
}

/// A single recorded event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Severity of the event.
    pub severity: Severity,
    /// Human-readable description.
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}

/// Ordered list of diagnostics.
///
/// # Examples
/// ```
/// use sapx::{Diagnostics, Severity};
///
/// let mut diagnostics = Diagnostics::new();
/// diagnostics.warning("material 'S355' not found");
/// assert_eq!(diagnostics.count(Severity::Warning), 1);
/// assert!(diagnostics.contains("S355"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Diagnostics {
    /// Entries in recording order.
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Create an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an event with the given severity.
    pub fn record(&mut self, severity: Severity, message: impl Into<String>) {
        let message = message.into();
        match severity {
            Severity::Note => info!(target: "sapx::diagnostics", "{message}"),
            Severity::Warning => warn!(target: "sapx::diagnostics", "{message}"),
            Severity::Error => error!(target: "sapx::diagnostics", "{message}"),
        }
        self.entries.push(Diagnostic { severity, message });
    }

    /// Record an informational note.
    pub fn note(&mut self, message: impl Into<String>) {
        self.record(Severity::Note, message);
    }

    /// Record a recoverable degradation.
    pub fn warning(&mut self, message: impl Into<String>) {
        self.record(Severity::Warning, message);
    }

    /// Record an aborted operation.
    pub fn error(&mut self, message: impl Into<String>) {
        self.record(Severity::Error, message);
    }

    /// All recorded events in order.
    #[must_use]
    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    /// Iterate over the events of one severity.
    pub fn of(&self, severity: Severity) -> impl Iterator<Item = &Diagnostic> {
        self.entries
            .iter()
            .filter(move |entry| entry.severity == severity)
    }

    /// Number of events of one severity.
    #[must_use]
    pub fn count(&self, severity: Severity) -> usize {
        self.of(severity).count()
    }

    /// Whether any event's message contains `needle`.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.entries.iter().any(|entry| entry.message.contains(needle))
    }

    /// Whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Remove and return every recorded event.
    pub fn drain(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.entries)
    }
}
