//! Diagnostic log: the newest lines first, capped, each mirrored to tracing.

use std::collections::VecDeque;

use chrono::Local;
use ui::EventSink;

/// Append-only, bounded, newest-first text log.
#[derive(Debug, Clone)]
pub struct DiagnosticLog {
    lines: VecDeque<String>,
    capacity: usize,
}

impl DiagnosticLog {
    /// Empty log keeping at most `capacity` lines.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Prefix `text` with the wall-clock time and prepend it.
    pub fn push(&mut self, text: &str) {
        tracing::info!(target: "diagnostics", "{text}");
        let line = format!("[{}] {text}", Local::now().format("%H:%M:%S"));
        self.lines.push_front(line);
        self.lines.truncate(self.capacity);
    }

    /// Lines, newest first.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// Most recent line.
    pub fn latest(&self) -> Option<&str> {
        self.lines.front().map(String::as_str)
    }

    /// Whether any line ends with `text` (ignoring the timestamp).
    pub fn contains(&self, text: &str) -> bool {
        self.lines().any(|l| l.ends_with(text))
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl EventSink for DiagnosticLog {
    fn record(&mut self, line: &str) {
        self.push(line);
    }
}
