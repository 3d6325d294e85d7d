//! Delegated click routing.
//!
//! One listener on a container reports the element a click started on; the
//! router maps it to an action with an ordered list of rules.

use std::collections::BTreeMap;

use serde::Deserialize;

/// The element a delegated click originated from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClickTarget {
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub data: BTreeMap<String, String>,
}

impl ClickTarget {
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    #[must_use]
    pub fn has_id(&self, id: &str) -> bool {
        self.id.as_deref() == Some(id)
    }

    #[must_use]
    pub fn data(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }
}

type Rule<A> = Box<dyn Fn(&ClickTarget) -> Option<A>>;

/// Ordered predicate → action rules; the first rule that produces an action wins.
pub struct ClickRouter<A> {
    rules: Vec<Rule<A>>,
}

impl<A> Default for ClickRouter<A> {
    fn default() -> Self {
        Self { rules: Vec::new() }
    }
}

impl<A> ClickRouter<A> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule: when `matches` holds, `build` produces the action.
    #[must_use]
    pub fn on(
        mut self,
        matches: impl Fn(&ClickTarget) -> bool + 'static,
        build: impl Fn(&ClickTarget) -> Option<A> + 'static,
    ) -> Self {
        self.rules
            .push(Box::new(move |target| if matches(target) { build(target) } else { None }));
        self
    }

    #[must_use]
    pub fn dispatch(&self, target: &ClickTarget) -> Option<A> {
        self.rules.iter().find_map(|rule| rule(target))
    }
}

pub const TAB_BUTTON_CLASS: &str = "tab-btn";
pub const TAB_TARGET_DATA: &str = "tab";
pub const LESSON_MODAL_ID: &str = "lesson-modal";
pub const QUIZ_MODAL_ID: &str = "quiz-modal";

/// Actions reachable through the page-level delegated click listener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteClick {
    SelectTab(String),
    CloseLesson,
    CloseQuiz,
}

/// Router for the site: tab buttons, and clicks on a modal's backdrop.
///
/// A backdrop click is one whose target is the overlay itself, not its content.
#[must_use]
pub fn site_router() -> ClickRouter<SiteClick> {
    ClickRouter::new()
        .on(
            |target| target.has_class(TAB_BUTTON_CLASS),
            |target| {
                target
                    .data(TAB_TARGET_DATA)
                    .map(|tab| SiteClick::SelectTab(tab.to_owned()))
            },
        )
        .on(
            |target| target.has_id(LESSON_MODAL_ID),
            |_| Some(SiteClick::CloseLesson),
        )
        .on(
            |target| target.has_id(QUIZ_MODAL_ID),
            |_| Some(SiteClick::CloseQuiz),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tab_button(tab: Option<&str>) -> ClickTarget {
        ClickTarget {
            id: None,
            classes: vec!["tab-btn".into(), "active".into()],
            data: tab
                .map(|t| BTreeMap::from([("tab".to_string(), t.to_string())]))
                .unwrap_or_default(),
        }
    }

    #[test]
    fn tab_buttons_route_to_their_target() {
        let router = site_router();
        assert_eq!(
            router.dispatch(&tab_button(Some("speaking"))),
            Some(SiteClick::SelectTab("speaking".into()))
        );
    }

    #[test]
    fn tab_button_without_target_does_nothing() {
        assert_eq!(site_router().dispatch(&tab_button(None)), None);
    }

    #[test]
    fn only_the_backdrop_closes_a_modal() {
        let router = site_router();
        let backdrop = ClickTarget {
            id: Some("quiz-modal".into()),
            ..ClickTarget::default()
        };
        assert_eq!(router.dispatch(&backdrop), Some(SiteClick::CloseQuiz));

        let content = ClickTarget {
            id: Some("quiz-body".into()),
            classes: vec!["modal-content".into()],
            ..ClickTarget::default()
        };
        assert_eq!(router.dispatch(&content), None);
    }

    #[test]
    fn first_matching_rule_wins() {
        let router = ClickRouter::new()
            .on(|_| true, |_| Some(1))
            .on(|_| true, |_| Some(2));
        assert_eq!(router.dispatch(&ClickTarget::default()), Some(1));
    }

    #[test]
    fn click_targets_deserialize_from_bridge_json() {
        let json = r#"{"id": null, "classes": ["tab-btn"], "data": {"tab": "grammar"}}"#;
        let target: ClickTarget = serde_json::from_str(json).unwrap();
        assert!(target.has_class("tab-btn"));
        assert_eq!(target.data("tab"), Some("grammar"));
    }
}
