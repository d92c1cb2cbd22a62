//! Horizontal space budgeting between label, bar and ETA
//!
//! The bar and the ETA field have priority over the label: the bar width is
//! computed first against a floor of [`MIN_BAR_WIDTH`] columns and then held
//! fixed, and the label absorbs all remaining overflow, down to zero
//! characters. On a too-narrow terminal the composed line may extend past
//! the last column; the bar never shrinks below its floor.
//!
//! All arithmetic saturates, so no combination of terminal width and label
//! length can produce a negative width.

/// How wide we assume the screen is if the terminal width query fails
pub const DEFAULT_SCREEN_WIDTH: usize = 80;

/// The smallest the bar can ever be, including its borders
pub const MIN_BAR_WIDTH: usize = 10;

/// Width of the rendered ETA field, `ETA:HHhMMmSSs`
pub const ETA_WIDTH: usize = 13;

/// Screen width taken up by the separators between label, bar and ETA
pub const WHITESPACE_WIDTH: usize = 2;

/// Width taken up by the begin/end border characters of the bar
pub const BAR_BORDER_WIDTH: usize = 2;

/// Width of the bar component for the given screen width and label length.
///
/// Never less than [`MIN_BAR_WIDTH`], even if that forces the line past the
/// edge of the screen. There is no upper clamp.
pub fn bar_width(screen_width: usize, label_len: usize) -> usize {
    MIN_BAR_WIDTH.max(screen_width.saturating_sub(label_len + ETA_WIDTH + WHITESPACE_WIDTH))
}

/// Width of the label for the given screen width, label length and the
/// already-fixed bar width.
///
/// If label, separators, bar and ETA do not all fit, the label is truncated
/// to whatever remains after the bar and ETA take their share, down to zero.
pub fn label_width(screen_width: usize, label_len: usize, bar_width: usize) -> usize {
    if label_len + 1 + bar_width + 1 + ETA_WIDTH > screen_width {
        screen_width.saturating_sub(bar_width + ETA_WIDTH + WHITESPACE_WIDTH)
    } else {
        label_len
    }
}
