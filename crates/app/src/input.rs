//! Raw input events as JSON lines.

use platform::{InputSource, RawEvent};
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader, Lines};

/// Reads one JSON [`RawEvent`] per line. Blank lines are skipped, malformed
/// lines are logged and skipped.
pub struct JsonLinesSource<R> {
    lines: Lines<BufReader<R>>,
    skipped: u64,
}

impl JsonLinesSource<tokio::io::Stdin> {
    /// Events from the process's standard input.
    pub fn stdin() -> Self {
        Self::new(tokio::io::stdin())
    }
}

impl<R: AsyncRead + Unpin> JsonLinesSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: BufReader::new(reader).lines(),
            skipped: 0,
        }
    }

    /// Malformed lines seen so far.
    pub fn skipped(&self) -> u64 {
        self.skipped
    }
}

impl<R: AsyncRead + Unpin> InputSource for JsonLinesSource<R> {
    async fn next_event(&mut self) -> Option<RawEvent> {
        loop {
            let line = match self.lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => return None,
                Err(e) => {
                    tracing::warn!(error = %e, "input stream failed");
                    return None;
                }
            };

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            match serde_json::from_str::<RawEvent>(trimmed) {
                Ok(event) => return Some(event),
                Err(e) => {
                    self.skipped = self.skipped.saturating_add(1);
                    tracing::warn!(error = %e, line = trimmed, "skipping malformed input event");
                }
            }
        }
    }
}
