use dioxus::prelude::*;

use crate::context::AppContext;

use super::actions::{SiteActions, use_site_actions};
use super::components::{
    AboutSection, HeroSection, LessonModalView, LessonsSection, Loader, Navbar, QuizModalView,
    QuizzesSection, ScrollTopButton, SiteFooter,
};
use super::startup::use_startup;
use super::state::use_site_state;

/// The whole single-page site with its controllers wired.
#[component]
pub fn SiteView() -> Element {
    let actions = use_site_context();
    use_startup(actions);
    rsx! { SitePage {} }
}

/// Creates the page state and provides `SiteActions` to every descendant.
pub fn use_site_context() -> SiteActions {
    let ctx = use_context::<AppContext>();
    let state = use_site_state(&ctx);
    let actions = use_site_actions(&ctx, state);
    use_context_provider(|| actions)
}

/// Page markup only; expects `SiteActions` in context.
#[component]
pub fn SitePage() -> Element {
    rsx! {
        Loader {}
        Navbar {}
        main { class: "page",
            HeroSection {}
            LessonsSection {}
            QuizzesSection {}
            AboutSection {}
        }
        SiteFooter {}
        LessonModalView {}
        QuizModalView {}
        ScrollTopButton {}
    }
}
