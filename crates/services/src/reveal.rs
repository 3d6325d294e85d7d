use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    /// Transparent and offset downward, waiting to scroll into view.
    Hidden,
    Revealed,
}

/// One-shot fade/slide-in for elements as they scroll into view.
///
/// Once revealed an element stays revealed: pausing and resuming observation
/// (for example while the tab is hidden) only re-arms elements that have not
/// been seen yet.
#[derive(Debug, Clone)]
pub struct RevealController {
    states: Vec<RevealState>,
    stagger: Duration,
    observing: bool,
}

impl RevealController {
    /// All `count` elements start hidden and observed.
    #[must_use]
    pub fn new(count: usize, stagger: Duration) -> Self {
        Self {
            states: vec![RevealState::Hidden; count],
            stagger,
            observing: true,
        }
    }

    /// Transition delay for the element at `index`, proportional to its position.
    #[must_use]
    pub fn delay(&self, index: usize) -> Duration {
        self.stagger * u32::try_from(index).unwrap_or(u32::MAX)
    }

    #[must_use]
    pub fn state(&self, index: usize) -> Option<RevealState> {
        self.states.get(index).copied()
    }

    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.state(index) == Some(RevealState::Revealed)
    }

    /// Records that the element at `index` crossed the visibility threshold.
    ///
    /// Returns `true` only the first time, when the transition should run and the
    /// element should no longer be observed.
    pub fn on_visible(&mut self, index: usize) -> bool {
        if !self.observing {
            return false;
        }
        match self.states.get_mut(index) {
            Some(state) if *state == RevealState::Hidden => {
                *state = RevealState::Revealed;
                true
            }
            _ => false,
        }
    }

    /// Elements still waiting to be revealed.
    #[must_use]
    pub fn pending(&self) -> Vec<usize> {
        self.states
            .iter()
            .enumerate()
            .filter(|(_, state)| **state == RevealState::Hidden)
            .map(|(idx, _)| idx)
            .collect()
    }

    #[must_use]
    pub fn is_observing(&self) -> bool {
        self.observing
    }

    /// Stops observing. Returns whether observation was active.
    pub fn pause(&mut self) -> bool {
        std::mem::replace(&mut self.observing, false)
    }

    /// Restarts observation, returning the elements to observe again.
    ///
    /// Returns `None` if observation was already running.
    pub fn resume(&mut self) -> Option<Vec<usize>> {
        if self.observing {
            return None;
        }
        self.observing = true;
        Some(self.pending())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
