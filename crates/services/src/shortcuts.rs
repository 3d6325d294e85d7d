/// A key press, independent of the UI toolkit's event type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyInput<'a> {
    pub key: &'a str,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
    pub shift: bool,
}

impl<'a> KeyInput<'a> {
    #[must_use]
    pub fn key(key: &'a str) -> Self {
        Self {
            key,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    fn has_command_modifier(&self) -> bool {
        self.ctrl || self.alt || self.meta
    }
}

/// Page-wide keyboard shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// `Escape`: close both modals.
    CloseModals,
    /// `m` / `M` on narrow viewports: toggle the mobile menu.
    ToggleMenu,
    /// `Ctrl+Home`: scroll to the top.
    ScrollToTop,
}

impl Shortcut {
    #[must_use]
    pub fn resolve(input: &KeyInput<'_>, viewport_width: f64, breakpoint: f64) -> Option<Self> {
        match input.key {
            "Escape" => Some(Shortcut::CloseModals),
            "Home" if input.ctrl => Some(Shortcut::ScrollToTop),
            "m" | "M" if !input.has_command_modifier() && viewport_width <= breakpoint => {
                Some(Shortcut::ToggleMenu)
            }
            _ => None,
        }
    }
}
