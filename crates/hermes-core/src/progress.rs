//! The simulated upload-progress rule.
//!
//! The progress bar is purely cosmetic: a fixed-period ticker eases the
//! value toward (but never onto) a ceiling while a request is in flight,
//! and completion forces it to 100 regardless of how far it got. The value
//! must never be read as real transfer progress; the service reports none.

/// Milliseconds between ticks while a request is in flight.
pub const TICK_MILLIS: u32 = 500;

/// Asymptotic ceiling while in flight.
pub const CEILING: f64 = 90.0;

/// Value forced when the request resolves, success or failure.
pub const COMPLETE: f64 = 100.0;

/// How long the completed bar stays visible before resetting to zero.
pub const RESET_HOLD_MILLIS: u32 = 1_000;

/// One ticker step: ease a tenth of the remaining distance to the ceiling.
pub fn advance(progress: f64) -> f64 {
    if progress >= CEILING {
        CEILING
    } else {
        progress + (CEILING - progress) / 10.0
    }
}
