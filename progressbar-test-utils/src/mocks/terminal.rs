//! Mock terminal with a fixed width and shared frame capture
//!
//! The bar takes ownership of its terminal, so the capture lives behind a
//! shared handle: keep the [`FrameLog`] from [`MockTerminal::log`] (or from
//! the builder) and inspect it after driving the bar.

use std::sync::{Arc, Mutex};

use progressbar_core::renderer::CLEAR_LINE;
use progressbar_core::terminal::Terminal;

/// Shared view of everything a [`MockTerminal`] was asked to write
#[derive(Debug, Clone, Default)]
pub struct FrameLog {
    writes: Arc<Mutex<Vec<String>>>,
}

impl FrameLog {
    /// Every write, verbatim, control sequences included
    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }

    /// All writes concatenated, exactly as a terminal would receive them
    pub fn raw(&self) -> String {
        self.writes.lock().unwrap().concat()
    }

    /// The visible content of each rendered frame, in order, with the
    /// leading clear sequence and trailing carriage return stripped
    pub fn frames(&self) -> Vec<String> {
        self.writes
            .lock()
            .unwrap()
            .iter()
            .filter_map(|write| {
                let frame = write.strip_prefix(CLEAR_LINE)?;
                Some(frame.strip_suffix('\r').unwrap_or(frame).to_string())
            })
            .collect()
    }

    /// Visible content of the most recent frame, if any
    pub fn last_frame(&self) -> Option<String> {
        self.frames().pop()
    }

    /// Number of frames rendered so far
    pub fn render_count(&self) -> usize {
        self.frames().len()
    }

    fn push(&self, text: &str) {
        self.writes.lock().unwrap().push(text.to_string());
    }
}

/// Terminal that reports a fixed column count and captures writes
pub struct MockTerminal {
    columns: usize,
    log: FrameLog,
}

impl MockTerminal {
    /// Create a mock terminal reporting the given column count
    pub fn new(columns: usize) -> Self {
        Self {
            columns,
            log: FrameLog::default(),
        }
    }

    /// Handle to the capture, safe to keep after the bar takes the terminal
    pub fn log(&self) -> FrameLog {
        self.log.clone()
    }
}

impl Terminal for MockTerminal {
    fn columns(&self) -> usize {
        self.columns
    }

    fn write(&mut self, text: &str) {
        self.log.push(text);
    }
}
