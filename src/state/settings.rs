//! Duration and cycle constants supplied by the host

/// Configuration constants the engine reads but never changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerSettings {
    pub work_seconds: u64,
    pub short_break_seconds: u64,
    pub long_break_seconds: u64,
    /// Number of completed work phases per long break
    pub cycle_length: u64,
}

impl TimerSettings {
    /// Build settings from minute values; zeroes are raised to the smallest legal value
    pub fn from_minutes(work: u64, short_break: u64, long_break: u64, cycle_length: u64) -> Self {
        Self {
            work_seconds: work.max(1).saturating_mul(60),
            short_break_seconds: short_break.max(1).saturating_mul(60),
            long_break_seconds: long_break.max(1).saturating_mul(60),
            cycle_length: cycle_length.max(1),
        }
    }
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self::from_minutes(25, 5, 15, 4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_minutes_are_raised() {
        let settings = TimerSettings::from_minutes(0, 0, 0, 0);
        assert_eq!(settings.work_seconds, 60);
        assert_eq!(settings.short_break_seconds, 60);
        assert_eq!(settings.long_break_seconds, 60);
        assert_eq!(settings.cycle_length, 1);
    }

    #[test]
    fn huge_minutes_saturate() {
        let settings = TimerSettings::from_minutes(u64::MAX, u64::MAX, u64::MAX, u64::MAX);
        assert_eq!(settings.work_seconds, u64::MAX);
        assert_eq!(settings.short_break_seconds, u64::MAX);
        assert_eq!(settings.long_break_seconds, u64::MAX);
    }
}
