//! Progress bar state and lifecycle
//!
//! A [`ProgressBar`] owns its counters, label and style, and renders one
//! frame inline on construction and on every mutation (`update`, `inc`).
//! Render-on-mutate is the contract, not an implementation detail: there is
//! no deferred or buffered redraw, and each mutating call writes a full
//! frame to the terminal before it returns. `set_label` is the one
//! exception; it only takes effect at the next render (call [`draw`] to
//! show it immediately).
//!
//! [`draw`]: ProgressBar::draw

use std::str::FromStr;
use std::time::Instant;

use crate::error::Result;
use crate::format::BarFormat;
use crate::renderer::{self, CLEAR_LINE};
use crate::terminal::{StderrTerminal, Terminal};

/// A single-line, self-refreshing progress indicator.
///
/// `max` is the number of steps the bar tracks and must be at least 1; with
/// `max == 0` every render treats the bar as already complete. A `value`
/// past `max` is not clamped and renders as complete.
///
/// The bar assumes exclusive ownership by one caller: all mutation goes
/// through `&mut self`, and [`finish`](Self::finish) consumes the bar so a
/// finished handle cannot be touched again.
pub struct ProgressBar {
    max: u64,
    value: u64,
    start: Instant,
    label: String,
    format: BarFormat,
    terminal: Box<dyn Terminal>,
}

impl std::fmt::Debug for ProgressBar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressBar")
            .field("max", &self.max)
            .field("value", &self.value)
            .field("start", &self.start)
            .field("label", &self.label)
            .field("format", &self.format)
            .finish_non_exhaustive()
    }
}

impl ProgressBar {
    /// Create a bar with the default `|=|` format and render the initial
    /// (empty) frame.
    pub fn new(label: impl Into<String>, max: u64) -> Self {
        Self::with_terminal(label, max, BarFormat::default(), Box::new(StderrTerminal::new()))
    }

    /// Create a bar from a three-character format string, e.g. `"<->"`.
    ///
    /// Fails with [`Error::InvalidFormat`](crate::Error::InvalidFormat) if
    /// the string is not exactly three characters; this is a contract
    /// violation caught at creation, not a recoverable runtime condition.
    pub fn with_format(label: impl Into<String>, max: u64, format: &str) -> Result<Self> {
        let format = BarFormat::from_str(format)?;
        Ok(Self::with_terminal(label, max, format, Box::new(StderrTerminal::new())))
    }

    /// Create a bar rendering to an explicit [`Terminal`].
    ///
    /// This is the seam tests and embedders use to capture frames or fix
    /// the column count.
    pub fn with_terminal(
        label: impl Into<String>,
        max: u64,
        format: BarFormat,
        terminal: Box<dyn Terminal>,
    ) -> Self {
        let label = label.into();
        log::debug!("progress bar created: label={label:?} max={max}");
        let mut bar = Self {
            max,
            value: 0,
            start: Instant::now(),
            label,
            format,
            terminal,
        };
        bar.draw();
        bar
    }

    /// Replace the label without rendering.
    ///
    /// The new label shows up with the next render, whether from a mutation
    /// or an explicit [`draw`](Self::draw).
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Set the current value and render one frame.
    ///
    /// The value is not clamped to `max`; anything at or past `max` renders
    /// as complete.
    pub fn update(&mut self, value: u64) {
        self.value = value;
        self.draw();
    }

    /// Advance the bar by a single step and render one frame.
    pub fn inc(&mut self) {
        self.update(self.value + 1);
    }

    /// Render the current state, overwriting the previous frame.
    pub fn draw(&mut self) {
        let columns = self.terminal.columns();
        let elapsed_secs = self.start.elapsed().as_secs_f64();
        let frame = renderer::render_frame(
            &self.label,
            self.format,
            self.value,
            self.max,
            columns,
            elapsed_secs,
        );
        self.terminal.write(&format!("{CLEAR_LINE}{frame}\r"));
    }

    /// Render one last frame, terminate the line, and consume the bar.
    ///
    /// The trailing newline keeps later diagnostic output off the bar's
    /// line. Taking `self` by value makes use-after-finish a compile error.
    pub fn finish(mut self) {
        self.draw();
        self.terminal.write("\n");
        log::debug!(
            "progress bar finished: label={:?} value={} max={}",
            self.label,
            self.value,
            self.max
        );
    }

    /// Current step count
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Total number of steps
    pub fn max(&self) -> u64 {
        self.max
    }

    /// Current label text
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Border and fill characters
    pub fn format(&self) -> BarFormat {
        self.format
    }
}
