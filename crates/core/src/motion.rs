use std::time::Duration;

use crate::time::{Millis, duration_from_ms};

/// Cubic ease-in-out on `t` in `[0, 1]`.
#[must_use]
pub fn ease_in_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Cubic ease-out on `t` in `[0, 1]`.
#[must_use]
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    InOutCubic,
    OutCubic,
}

impl Easing {
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Easing::InOutCubic => ease_in_out_cubic(t),
            Easing::OutCubic => ease_out_cubic(t),
        }
    }
}

/// One sampled frame of a scroll animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollFrame {
    pub offset: f64,
    pub finished: bool,
}

/// A vertical scroll from one offset to another, sampled once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAnimation {
    from: f64,
    to: f64,
    duration: Duration,
    started_at: Millis,
    easing: Easing,
}

impl ScrollAnimation {
    #[must_use]
    pub fn new(from: f64, to: f64, duration: Duration, started_at: Millis, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            started_at,
            easing,
        }
    }

    /// Scroll to an in-page section.
    ///
    /// Runs for half a millisecond per pixel of distance, capped at `max`.
    #[must_use]
    pub fn to_section(from: f64, to: f64, started_at: Millis, max: Duration) -> Self {
        let duration = duration_from_ms((to - from).abs() / 2.0).min(max);
        Self::new(from, to, duration, started_at, Easing::InOutCubic)
    }

    /// Scroll back to the page origin.
    ///
    /// Runs for a third of a millisecond per pixel of offset, capped at `max`.
    #[must_use]
    pub fn to_top(from: f64, started_at: Millis, max: Duration) -> Self {
        let duration = duration_from_ms(from / 3.0).min(max);
        Self::new(from, 0.0, duration, started_at, Easing::OutCubic)
    }

    #[must_use]
    pub fn from(&self) -> f64 {
        self.from
    }

    #[must_use]
    pub fn target(&self) -> f64 {
        self.to
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Progress in `[0, 1]` at `now`.
    #[must_use]
    pub fn progress(&self, now: Millis) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.since(self.started_at).as_secs_f64();
        (elapsed / self.duration.as_secs_f64()).min(1.0)
    }

    #[must_use]
    pub fn sample(&self, now: Millis) -> ScrollFrame {
        let progress = self.progress(now);
        if progress >= 1.0 {
            return ScrollFrame {
                offset: self.to,
                finished: true,
            };
        }
        ScrollFrame {
            offset: self.from + (self.to - self.from) * self.easing.apply(progress),
            finished: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn easing_curves_hit_endpoints_and_midpoint() {
        assert!(close(ease_in_out_cubic(0.0), 0.0));
        assert!(close(ease_in_out_cubic(0.5), 0.5));
        assert!(close(ease_in_out_cubic(1.0), 1.0));
        assert!(close(ease_out_cubic(0.0), 0.0));
        assert!(close(ease_out_cubic(1.0), 1.0));
        assert!(ease_out_cubic(0.5) > 0.5);
        assert!(close(ease_out_cubic(2.0), 1.0));
    }

    #[test]
    fn section_scroll_duration_is_half_the_distance_capped() {
        let max = Duration::from_millis(1000);
        let short = ScrollAnimation::to_section(0.0, 600.0, Millis::ZERO, max);
        assert_eq!(short.duration(), Duration::from_millis(300));

        let upward = ScrollAnimation::to_section(900.0, 300.0, Millis::ZERO, max);
        assert_eq!(upward.duration(), Duration::from_millis(300));

        let long = ScrollAnimation::to_section(0.0, 5000.0, Millis::ZERO, max);
        assert_eq!(long.duration(), max);
    }

    #[test]
    fn top_scroll_duration_is_a_third_of_offset_capped() {
        let max = Duration::from_millis(500);
        let anim = ScrollAnimation::to_top(900.0, Millis::ZERO, max);
        assert_eq!(anim.duration(), Duration::from_millis(300));
        assert_eq!(anim.target(), 0.0);
        assert_eq!(anim.easing(), Easing::OutCubic);

        let far = ScrollAnimation::to_top(6000.0, Millis::ZERO, max);
        assert_eq!(far.duration(), max);
    }

    #[test]
    fn sampling_is_monotonic_and_ends_exactly_on_target() {
        let start = Millis::new(1000);
        let anim = ScrollAnimation::to_section(100.0, 900.0, start, Duration::from_millis(1000));
        let mut last = anim.from();
        let mut now = start;
        loop {
            let frame = anim.sample(now);
            assert!(frame.offset >= last);
            last = frame.offset;
            if frame.finished {
                break;
            }
            now = now + Duration::from_millis(16);
        }
        assert!(close(last, 900.0));
    }

    #[test]
    fn zero_distance_finishes_immediately() {
        let anim = ScrollAnimation::to_top(0.0, Millis::ZERO, Duration::from_millis(500));
        let frame = anim.sample(Millis::ZERO);
        assert!(frame.finished);
        assert!(close(frame.offset, 0.0));
    }
}
