//! The launch countdown: a seconds-remaining counter and its
//! `HH:MM:SS` rendering.

/// The countdown starts at a nominal 24 hours before "launch".
pub const LAUNCH_COUNTDOWN_SECS: u32 = 24 * 60 * 60;

/// A monotonically decreasing seconds counter, clamped at zero.
///
/// Once the counter reaches zero it stays there: further ticks are
/// no-ops and nothing is emitted. The counter never restarts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
}

impl Countdown {
    pub fn new(remaining_secs: u32) -> Self {
        Self {
            remaining: remaining_secs,
        }
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining
    }

    pub fn is_finished(&self) -> bool {
        self.remaining == 0
    }

    /// Advances the countdown by one second. Saturates at zero.
    pub fn tick(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    /// The formatted display string for the current remaining time.
    pub fn display(&self) -> String {
        format_hms(self.remaining)
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(LAUNCH_COUNTDOWN_SECS)
    }
}

/// Formats a seconds count as `HH:MM:SS`, each field zero-padded to
/// width 2. The hours field is deliberately unbounded: a duration over
/// 100 hours would simply widen it.
pub fn format_hms(total_secs: u32) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_24_hours() {
        let countdown = Countdown::default();
        assert_eq!(countdown.remaining_secs(), 86_400);
        assert_eq!(countdown.display(), "24:00:00");
    }

    #[test]
    fn tick_decrements_by_one_second() {
        let mut countdown = Countdown::default();
        countdown.tick();
        assert_eq!(countdown.remaining_secs(), 86_399);
        assert_eq!(countdown.display(), "23:59:59");
    }

    #[test]
    fn display_after_3661_ticks() {
        let mut countdown = Countdown::default();
        for _ in 0..3661 {
            countdown.tick();
        }
        // 86400 - 3661 = 82739 seconds
        assert_eq!(countdown.remaining_secs(), 82_739);
        assert_eq!(countdown.display(), "22:58:59");
    }

    #[test]
    fn clamps_at_zero_and_never_goes_negative() {
        let mut countdown = Countdown::new(2);
        for _ in 0..10 {
            countdown.tick();
        }
        assert!(countdown.is_finished());
        assert_eq!(countdown.remaining_secs(), 0);
        assert_eq!(countdown.display(), "00:00:00");
    }

    #[test]
    fn format_matches_field_formulas_over_full_range() {
        // Spot-check the formula at every minute boundary of the full
        // 24h range rather than all 86401 values.
        for secs in (0..=86_400).step_by(60) {
            let expected = format!(
                "{:02}:{:02}:{:02}",
                secs / 3600,
                (secs % 3600) / 60,
                secs % 60
            );
            assert_eq!(format_hms(secs), expected);
        }
    }

    #[test]
    fn hours_field_widens_past_100_hours() {
        assert_eq!(format_hms(360_000), "100:00:00");
    }
}
