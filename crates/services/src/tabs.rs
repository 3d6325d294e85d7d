use lingo_core::model::TabId;

/// Result of activating a tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSelection {
    pub button: TabId,
    /// `None` when no pane carries the button's target id.
    pub pane: Option<TabId>,
}

/// Keeps exactly one tab button active and at most one pane visible.
#[derive(Debug, Clone, Default)]
pub struct TabSwitcher {
    buttons: Vec<TabId>,
    panes: Vec<TabId>,
    active: Option<TabSelection>,
}

impl TabSwitcher {
    /// The first button starts active.
    #[must_use]
    pub fn new(buttons: Vec<TabId>, panes: Vec<TabId>) -> Self {
        let mut switcher = Self {
            buttons,
            panes,
            active: None,
        };
        if let Some(first) = switcher.buttons.first().cloned() {
            switcher.activate(first.as_str());
        }
        switcher
    }

    /// Deactivates everything, then activates `target` and its pane.
    ///
    /// Returns `None` if `target` is not a known tab button.
    pub fn activate(&mut self, target: &str) -> Option<TabSelection> {
        let button = self.buttons.iter().find(|id| id.as_str() == target)?.clone();
        let pane = self.panes.iter().find(|id| id.as_str() == target).cloned();
        let selection = TabSelection { button, pane };
        self.active = Some(selection.clone());
        Some(selection)
    }

    #[must_use]
    pub fn is_active(&self, button: &TabId) -> bool {
        self.active.as_ref().is_some_and(|sel| &sel.button == button)
    }

    #[must_use]
    pub fn is_visible(&self, pane: &TabId) -> bool {
        self.active
            .as_ref()
            .is_some_and(|sel| sel.pane.as_ref() == Some(pane))
    }

    #[must_use]
    pub fn active(&self) -> Option<&TabSelection> {
        self.active.as_ref()
    }

    #[must_use]
    pub fn buttons(&self) -> &[TabId] {
        &self.buttons
    }
}
