//! Relative-time formatting for the status panel's "last updated" label.

/// How the timestamp of the most recent successful fetch should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LastUpdated {
    /// No fetch has succeeded yet.
    Never,
    /// Under a minute old.
    JustNow,
    /// Under an hour old.
    MinutesAgo(u64),
    /// An hour or older; the caller renders a localized clock time.
    ClockTime,
}

/// Classifies the last successful fetch timestamp against `now` (both Unix
/// seconds).
pub fn classify_last_updated(last_success: Option<u64>, now: u64) -> LastUpdated {
    let Some(timestamp) = last_success else {
        return LastUpdated::Never;
    };
    let elapsed = now.saturating_sub(timestamp);
    match elapsed {
        0..=59 => LastUpdated::JustNow,
        60..=3599 => LastUpdated::MinutesAgo(elapsed / 60),
        _ => LastUpdated::ClockTime,
    }
}

/// Current Unix time in seconds. `instant` makes this safe on WASM, where
/// `std::time::SystemTime` panics.
pub fn unix_now() -> u64 {
    instant::SystemTime::now()
        .duration_since(instant::SystemTime::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_without_a_successful_fetch() {
        assert_eq!(classify_last_updated(None, 1_000), LastUpdated::Never);
    }

    #[test]
    fn just_now_under_a_minute() {
        assert_eq!(classify_last_updated(Some(1_000), 1_000), LastUpdated::JustNow);
        assert_eq!(classify_last_updated(Some(1_000), 1_059), LastUpdated::JustNow);
    }

    #[test]
    fn minutes_under_an_hour() {
        assert_eq!(
            classify_last_updated(Some(1_000), 1_060),
            LastUpdated::MinutesAgo(1)
        );
        assert_eq!(
            classify_last_updated(Some(1_000), 1_000 + 3_599),
            LastUpdated::MinutesAgo(59)
        );
    }

    #[test]
    fn clock_time_from_an_hour_up() {
        assert_eq!(
            classify_last_updated(Some(1_000), 1_000 + 3_600),
            LastUpdated::ClockTime
        );
    }

    #[test]
    fn clock_skew_counts_as_just_now() {
        // A timestamp "from the future" must not underflow.
        assert_eq!(classify_last_updated(Some(2_000), 1_000), LastUpdated::JustNow);
    }
}
