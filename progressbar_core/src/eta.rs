//! Remaining-time estimation and duration decomposition
//!
//! The estimate is a linear extrapolation from observed throughput: with
//! `value` steps done in `elapsed` seconds, the remaining `max - value`
//! steps are assumed to take `elapsed / value` seconds each. Fractional
//! seconds are discarded, not rounded. Once the bar is complete the ETA
//! field is repurposed to show total elapsed time instead.

use std::fmt;

/// A duration broken into hour/minute/second components.
///
/// `minutes` and `seconds` are always below 60; `hours` is unbounded, so a
/// run past 99 hours simply renders wider than the nominal field width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeComponents {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl TimeComponents {
    /// Decompose a whole number of seconds into components
    pub fn from_seconds(total_seconds: u64) -> Self {
        Self {
            hours: total_seconds / 3600,
            minutes: (total_seconds % 3600) / 60,
            seconds: total_seconds % 60,
        }
    }
}

impl fmt::Display for TimeComponents {
    /// The ETA field text: `ETA:HHhMMmSSs`, hours space-padded to at least
    /// two columns, minutes and seconds zero-padded to exactly two digits
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ETA:{:2}h{:02}m{:02}s",
            self.hours, self.minutes, self.seconds
        )
    }
}

/// Projected seconds until `value` reaches `max`, truncated to whole
/// seconds. Zero until at least one step and a nonzero amount of time have
/// been observed.
pub fn remaining_seconds(elapsed_secs: f64, value: u64, max: u64) -> u64 {
    if value > 0 && elapsed_secs > 0.0 {
        // Saturating keeps the public function total for value > max; the
        // render path never gets here in that state (completed branch).
        ((elapsed_secs / value as f64) * max.saturating_sub(value) as f64) as u64
    } else {
        0
    }
}

/// Components for the ETA field of one frame: projected remaining time
/// while in progress, total elapsed time once complete.
pub fn estimate(elapsed_secs: f64, value: u64, max: u64) -> TimeComponents {
    if value >= max {
        TimeComponents::from_seconds(elapsed_secs as u64)
    } else {
        TimeComponents::from_seconds(remaining_seconds(elapsed_secs, value, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decompose_round_trip() {
        let components = TimeComponents::from_seconds(3661);
        assert_eq!(
            components,
            TimeComponents {
                hours: 1,
                minutes: 1,
                seconds: 1
            }
        );
    }

    #[test]
    fn test_decompose_zero() {
        let components = TimeComponents::from_seconds(0);
        assert_eq!(components.hours, 0);
        assert_eq!(components.minutes, 0);
        assert_eq!(components.seconds, 0);
    }

    #[test]
    fn test_decompose_bounds() {
        for total in [0, 59, 60, 3599, 3600, 86399, 360000] {
            let c = TimeComponents::from_seconds(total);
            assert!(c.minutes < 60);
            assert!(c.seconds < 60);
            assert_eq!(c.hours * 3600 + c.minutes * 60 + c.seconds, total);
        }
    }

    #[test]
    fn test_display_zero_padding() {
        assert_eq!(TimeComponents::from_seconds(0).to_string(), "ETA: 0h00m00s");
        assert_eq!(TimeComponents::from_seconds(3661).to_string(), "ETA: 1h01m01s");
        assert_eq!(TimeComponents::from_seconds(45296).to_string(), "ETA:12h34m56s");
    }

    #[test]
    fn test_display_hours_unbounded() {
        // Beyond 99 hours the field just grows, it is not special-cased
        let text = TimeComponents::from_seconds(100 * 3600).to_string();
        assert_eq!(text, "ETA:100h00m00s");
    }

    #[test]
    fn test_remaining_extrapolates_linearly() {
        // 10 of 40 steps in 5 seconds: 0.5 s/step, 30 steps left
        assert_eq!(remaining_seconds(5.0, 10, 40), 15);
    }

    #[test]
    fn test_remaining_truncates_fraction() {
        // 3 of 5 steps in 4 seconds: (4/3) * 2 = 2.66.. -> 2
        assert_eq!(remaining_seconds(4.0, 3, 5), 2);
    }

    #[test]
    fn test_remaining_zero_before_first_step() {
        assert_eq!(remaining_seconds(10.0, 0, 100), 0);
    }

    #[test]
    fn test_remaining_zero_without_elapsed_time() {
        assert_eq!(remaining_seconds(0.0, 5, 100), 0);
    }

    #[test]
    fn test_estimate_complete_reports_elapsed() {
        // Complete: the field shows total time taken, not a projection
        let components = estimate(125.9, 10, 10);
        assert_eq!(components, TimeComponents::from_seconds(125));
    }

    #[test]
    fn test_estimate_overfill_reports_elapsed() {
        let components = estimate(60.0, 15, 10);
        assert_eq!(components, TimeComponents::from_seconds(60));
    }

    #[test]
    fn test_estimate_in_progress_reports_remaining() {
        let components = estimate(5.0, 10, 40);
        assert_eq!(components, TimeComponents::from_seconds(15));
    }
}
