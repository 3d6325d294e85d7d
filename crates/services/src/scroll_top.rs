use lingo_core::Millis;
use lingo_core::model::SiteSettings;
use lingo_core::motion::ScrollAnimation;

/// The floating "back to top" control.
#[derive(Debug, Clone)]
pub struct ScrollTopControl {
    threshold: f64,
    max_duration: std::time::Duration,
    visible: bool,
}

impl ScrollTopControl {
    /// Starts hidden.
    #[must_use]
    pub fn new(settings: &SiteSettings) -> Self {
        Self {
            threshold: settings.scroll_top_after_px,
            max_duration: settings.scroll_top_max(),
            visible: false,
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// New visibility for `offset`, or `None` when it already matches.
    pub fn on_scroll(&mut self, offset: f64) -> Option<bool> {
        let desired = offset > self.threshold;
        if desired == self.visible {
            return None;
        }
        self.visible = desired;
        Some(desired)
    }

    /// Eased scroll from `offset` back to the page origin.
    #[must_use]
    pub fn animation(&self, offset: f64, now: Millis) -> ScrollAnimation {
        ScrollAnimation::to_top(offset, now, self.max_duration)
    }
}
