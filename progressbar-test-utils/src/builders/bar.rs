//! Fluent construction of bars against a mock terminal

use progressbar_core::{BarFormat, ProgressBar};

use crate::mocks::{FrameLog, MockTerminal};

/// Builder for a [`ProgressBar`] rendering into a [`MockTerminal`].
///
/// Defaults: label `"Loading"`, 10 steps, the `|=|` format, 80 columns.
pub struct TestBarBuilder {
    label: String,
    max: u64,
    format: BarFormat,
    columns: usize,
}

impl TestBarBuilder {
    /// Create a builder with defaults
    pub fn new() -> Self {
        Self {
            label: String::from("Loading"),
            max: 10,
            format: BarFormat::default(),
            columns: 80,
        }
    }

    /// Set the bar label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the number of steps
    pub fn max(mut self, max: u64) -> Self {
        self.max = max;
        self
    }

    /// Set the border and fill characters
    pub fn format(mut self, format: BarFormat) -> Self {
        self.format = format;
        self
    }

    /// Fix the column count the mock terminal reports
    pub fn columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    /// Build the bar and hand back the frame capture.
    ///
    /// Construction renders the initial frame, so the log starts with one
    /// entry.
    pub fn build(self) -> (ProgressBar, FrameLog) {
        let terminal = MockTerminal::new(self.columns);
        let log = terminal.log();
        let bar = ProgressBar::with_terminal(self.label, self.max, self.format, Box::new(terminal));
        (bar, log)
    }
}

impl Default for TestBarBuilder {
    fn default() -> Self {
        Self::new()
    }
}
