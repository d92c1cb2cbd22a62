//! Frame composition
//!
//! Builds the single line a render writes: truncated label, bordered bar,
//! ETA field. Composition is a pure function of the bar state, the column
//! count and the elapsed time, so frames can be asserted bit-exactly in
//! tests; the actual write (and the line-clearing control sequence) is the
//! caller's concern.

use crate::eta;
use crate::format::BarFormat;
use crate::layout::{self, BAR_BORDER_WIDTH, ETA_WIDTH};

/// Clear the current line and return the cursor to column 0.
///
/// Every frame starts with this sequence and ends with a bare carriage
/// return, so the next render overwrites the line in place.
pub const CLEAR_LINE: &str = "\x1b[2K\r";

/// Compose one frame of the bar.
///
/// Label and bar widths come from the [`layout`] engine for the given
/// `columns`. When the layout leaves no room for the label at all, the
/// separator column the label would have used goes to the bar instead, so
/// the bar draws one column wider.
///
/// A `value` at or past `max` renders a completely filled bar and the ETA
/// field switches from projected remaining time to total elapsed time.
pub fn render_frame(
    label: &str,
    format: BarFormat,
    value: u64,
    max: u64,
    columns: usize,
    elapsed_secs: f64,
) -> String {
    let label_len = label.chars().count();
    let mut bar_width = layout::bar_width(columns, label_len);
    let label_width = layout::label_width(columns, label_len, bar_width);

    let mut line = String::with_capacity(columns + ETA_WIDTH);
    if label_width == 0 {
        // No label: the bar takes over the separator column.
        bar_width += 1;
    } else {
        line.extend(label.chars().take(label_width));
        line.push(' ');
    }

    let piece_count = bar_width - BAR_BORDER_WIDTH;
    let completed = value >= max;
    let filled = if completed {
        piece_count
    } else {
        (piece_count as f64 * (value as f64 / max as f64)) as usize
    };

    line.push(format.begin);
    line.extend(std::iter::repeat_n(format.fill, filled));
    line.extend(std::iter::repeat_n(' ', piece_count - filled));
    line.push(format.end);

    line.push(' ');
    line.push_str(&eta::estimate(elapsed_secs, value, max).to_string());
    line
}
