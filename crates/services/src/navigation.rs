use lingo_core::Millis;
use lingo_core::model::SiteSettings;
use lingo_core::motion::ScrollAnimation;

/// Open/closed state of the mobile navigation menu.
///
/// The hamburger control and the menu share this one flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Flips the menu and returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Returns whether the menu was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }
}

/// Absolute scroll offset that lands a section just below the fixed navbar.
#[must_use]
pub fn section_scroll_target(rect_top: f64, scroll_offset: f64, navbar_offset: f64) -> f64 {
    rect_top + scroll_offset - navbar_offset
}

/// Builds the eased animation that brings a section into view.
#[must_use]
pub fn scroll_to_section(
    settings: &SiteSettings,
    rect_top: f64,
    scroll_offset: f64,
    now: Millis,
) -> ScrollAnimation {
    let target = section_scroll_target(rect_top, scroll_offset, settings.navbar_offset_px);
    ScrollAnimation::to_section(scroll_offset, target, now, settings.nav_scroll_max())
}

/// Scroll-dependent navbar background.
///
/// Only reports a value when it differs from the one already applied.
#[derive(Debug, Clone)]
pub struct NavbarBackdrop {
    threshold: f64,
    normal: String,
    solid: String,
    applied: Option<bool>,
}

impl NavbarBackdrop {
    #[must_use]
    pub fn new(settings: &SiteSettings) -> Self {
        Self {
            threshold: settings.navbar_solid_after_px,
            normal: settings.navbar_background.clone(),
            solid: settings.navbar_background_solid.clone(),
            applied: None,
        }
    }

    /// Background to write for `offset`, or `None` when nothing changes.
    pub fn on_scroll(&mut self, offset: f64) -> Option<&str> {
        let solid = offset > self.threshold;
        if self.applied == Some(solid) {
            return None;
        }
        self.applied = Some(solid);
        Some(self.background())
    }

    /// Background currently applied.
    #[must_use]
    pub fn background(&self) -> &str {
        if self.applied == Some(true) {
            &self.solid
        } else {
            &self.normal
        }
    }
}
