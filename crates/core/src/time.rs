use std::fmt;
use std::ops::Add;
use std::sync::OnceLock;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Monotonic timestamp in milliseconds since the page was started.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millis(u64);

impl Millis {
    pub const ZERO: Self = Self(0);

    #[must_use]
    pub const fn new(ms: u64) -> Self {
        Self(ms)
    }

    /// Returns the underlying millisecond count.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Time elapsed since `earlier`, saturating at zero.
    #[must_use]
    pub fn since(self, earlier: Millis) -> Duration {
        Duration::from_millis(self.0.saturating_sub(earlier.0))
    }
}

impl Add<Duration> for Millis {
    type Output = Millis;

    fn add(self, rhs: Duration) -> Millis {
        let delta = u64::try_from(rhs.as_millis()).unwrap_or(u64::MAX);
        Millis(self.0.saturating_add(delta))
    }
}

impl fmt::Debug for Millis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

/// Converts a floating-point millisecond amount into a `Duration`.
///
/// Negative, NaN and infinite inputs map to `Duration::ZERO`.
#[must_use]
pub fn duration_from_ms(ms: f64) -> Duration {
    if ms.is_finite() && ms > 0.0 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let micros = (ms * 1000.0).round() as u64;
        Duration::from_micros(micros)
    } else {
        Duration::ZERO
    }
}

fn process_epoch() -> Instant {
    static EPOCH: OnceLock<Instant> = OnceLock::new();
    *EPOCH.get_or_init(Instant::now)
}

/// A simple clock abstraction for deterministic time in controllers and tests.
#[derive(Debug, Clone, Copy, Default)]
pub enum Clock {
    #[default]
    Default,
    Fixed(Millis),
}

impl Clock {
    /// Returns a clock that follows the system monotonic clock.
    #[must_use]
    pub fn default_clock() -> Self {
        process_epoch();
        Self::Default
    }

    /// Returns a clock fixed at the given timestamp.
    #[must_use]
    pub fn fixed(at: Millis) -> Self {
        Self::Fixed(at)
    }

    /// Returns the current time according to the clock.
    #[must_use]
    pub fn now(&self) -> Millis {
        match self {
            Clock::Default => {
                let elapsed = process_epoch().elapsed();
                Millis(u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX))
            }
            Clock::Fixed(t) => *t,
        }
    }

    /// If this is a fixed clock, advance it by the given duration.
    ///
    /// Has no effect on `Clock::Default`.
    pub fn advance(&mut self, delta: Duration) {
        if let Clock::Fixed(t) = self {
            *t = *t + delta;
        }
    }

    /// Returns true if this clock represents real time.
    #[must_use]
    pub fn is_default(&self) -> bool {
        matches!(self, Clock::Default)
    }

    /// Returns true if this clock is fixed.
    #[must_use]
    pub fn is_fixed(&self) -> bool {
        matches!(self, Clock::Fixed(_))
    }
}

/// Returns a `Clock` fixed at page start, for tests and doc examples.
#[must_use]
pub fn fixed_clock() -> Clock {
    Clock::fixed(Millis::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_advances_only_when_asked() {
        let mut clock = fixed_clock();
        assert_eq!(clock.now(), Millis::ZERO);
        clock.advance(Duration::from_millis(250));
        assert_eq!(clock.now(), Millis::new(250));
        assert!(clock.is_fixed());
    }

    #[test]
    fn since_saturates_for_earlier_timestamps() {
        let early = Millis::new(10);
        let late = Millis::new(40);
        assert_eq!(late.since(early), Duration::from_millis(30));
        assert_eq!(early.since(late), Duration::ZERO);
    }

    #[test]
    fn duration_from_ms_rejects_garbage() {
        assert_eq!(duration_from_ms(-5.0), Duration::ZERO);
        assert_eq!(duration_from_ms(f64::NAN), Duration::ZERO);
        assert_eq!(duration_from_ms(1500.0), Duration::from_millis(1500));
    }
}
