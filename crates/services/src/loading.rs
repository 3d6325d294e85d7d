use std::ops::{Range, RangeInclusive};
use std::time::Duration;

use rand::Rng;

use lingo_core::model::SiteSettings;

/// Where the loading screen is in its one-shot sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingPhase {
    /// Percent is climbing toward 100.
    Progressing,
    /// Reached 100; holding the full bar briefly.
    Settling,
    /// The loading surface is fading out.
    FadingOut,
    /// The loading surface is hidden and the page is ready.
    Done,
}

/// Outcome of a single tick.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadingStep {
    pub phase: LoadingPhase,
    pub percent: f64,
    /// New status phrase, only when it differs from the one on screen.
    pub status: Option<String>,
    /// Delay before the next tick; `None` once the sequence has finished.
    pub next_tick: Option<Duration>,
    /// True on exactly one step: the one that hides the loader.
    pub became_ready: bool,
}

/// Simulated loading progress shown once per page load.
#[derive(Debug, Clone)]
pub struct LoadingSequencer {
    percent: f64,
    status_index: usize,
    phase: LoadingPhase,
    phrases: Vec<String>,
    tick_ms: RangeInclusive<u64>,
    step: Range<f64>,
    settle: Duration,
    fade: Duration,
}

impl LoadingSequencer {
    #[must_use]
    pub fn new(settings: &SiteSettings) -> Self {
        Self {
            percent: 0.0,
            status_index: 0,
            phase: LoadingPhase::Progressing,
            phrases: settings.loading_phrases.clone(),
            tick_ms: settings.loading_tick_min_ms..=settings.loading_tick_max_ms,
            step: settings.loading_step_min..settings.loading_step_max,
            settle: settings.loading_settle(),
            fade: settings.loading_fade(),
        }
    }

    #[must_use]
    pub fn percent(&self) -> f64 {
        self.percent
    }

    #[must_use]
    pub fn phase(&self) -> LoadingPhase {
        self.phase
    }

    /// The phrase currently on screen.
    #[must_use]
    pub fn status(&self) -> &str {
        self.phrases
            .get(self.status_index)
            .map_or("", String::as_str)
    }

    /// Delay before the first tick.
    pub fn first_delay<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        Duration::from_millis(rng.random_range(self.tick_ms.clone()))
    }

    /// Advances the sequence by one step.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> LoadingStep {
        let mut status = None;
        let mut became_ready = false;

        let next_tick = match self.phase {
            LoadingPhase::Progressing => {
                let increment = rng.random_range(self.step.clone());
                self.percent = (self.percent + increment).min(100.0);
                status = self.refresh_status();

                if self.percent >= 100.0 {
                    self.percent = 100.0;
                    self.phase = LoadingPhase::Settling;
                    Some(self.settle)
                } else {
                    Some(self.first_delay(rng))
                }
            }
            LoadingPhase::Settling => {
                self.phase = LoadingPhase::FadingOut;
                Some(self.fade)
            }
            LoadingPhase::FadingOut => {
                self.phase = LoadingPhase::Done;
                became_ready = true;
                None
            }
            LoadingPhase::Done => None,
        };

        LoadingStep {
            phase: self.phase,
            percent: self.percent,
            status,
            next_tick,
            became_ready,
        }
    }

    fn refresh_status(&mut self) -> Option<String> {
        let last = self.phrases.len().saturating_sub(1);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let index = ((self.percent / 100.0 * self.phrases.len() as f64).floor() as usize).min(last);
        if index == self.status_index {
            return None;
        }
        self.status_index = index;
        self.phrases.get(index).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn run_to_completion(seed: u64) -> Vec<LoadingStep> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut sequencer = LoadingSequencer::new(&SiteSettings::default());
        let mut steps = Vec::new();
        loop {
            let step = sequencer.tick(&mut rng);
            let done = step.next_tick.is_none();
            steps.push(step);
            if done {
                break;
            }
            assert!(steps.len() < 100, "sequence did not terminate");
        }
        steps
    }

    #[test]
    fn percent_is_monotonic_and_ends_at_exactly_100() {
        for seed in 0..20 {
            let steps = run_to_completion(seed);
            let mut last = 0.0;
            for step in &steps {
                assert!(step.percent >= last);
                last = step.percent;
            }
            assert_eq!(last, 100.0);
        }
    }

    #[test]
    fn ready_fires_exactly_once_after_settle_and_fade() {
        let steps = run_to_completion(7);
        assert_eq!(steps.iter().filter(|s| s.became_ready).count(), 1);

        let tail: Vec<_> = steps.iter().rev().take(3).rev().collect();
        assert_eq!(tail[0].phase, LoadingPhase::Settling);
        assert_eq!(tail[0].next_tick, Some(Duration::from_millis(200)));
        assert_eq!(tail[1].phase, LoadingPhase::FadingOut);
        assert_eq!(tail[1].next_tick, Some(Duration::from_millis(300)));
        assert_eq!(tail[2].phase, LoadingPhase::Done);
        assert!(tail[2].became_ready);
    }

    #[test]
    fn ticking_after_done_is_a_no_op() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut sequencer = LoadingSequencer::new(&SiteSettings::default());
        while sequencer.tick(&mut rng).next_tick.is_some() {}
        let extra = sequencer.tick(&mut rng);
        assert!(!extra.became_ready);
        assert_eq!(extra.next_tick, None);
        assert_eq!(extra.phase, LoadingPhase::Done);
    }

    #[test]
    fn progress_ticks_are_spaced_within_range() {
        let mut rng = StdRng::seed_from_u64(3);
        let sequencer = LoadingSequencer::new(&SiteSettings::default());
        for _ in 0..50 {
            let delay = sequencer.first_delay(&mut rng);
            assert!(delay >= Duration::from_millis(150) && delay <= Duration::from_millis(250));
        }
    }

    #[test]
    fn status_changes_are_reported_once_per_phrase() {
        let steps = run_to_completion(11);
        let changes: Vec<_> = steps.iter().filter_map(|s| s.status.clone()).collect();
        let mut deduped = changes.clone();
        deduped.dedup();
        assert_eq!(changes, deduped);
        assert_eq!(changes.last().map(String::as_str), Some("Almost ready..."));
    }
}
