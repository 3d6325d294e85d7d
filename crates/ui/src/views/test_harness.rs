use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use lingo_content::{ContentRepository, EmbeddedContent, SiteContent};
use lingo_core::model::SiteSettings;
use lingo_core::time::fixed_clock;
use lingo_services::Clock;

use crate::context::{SiteApp, build_app_context};

use super::{SiteActions, SitePage, use_site_context};

/// Seeds page state before the first render, standing in for user interaction.
pub type Prepare = fn(&SiteActions);

struct TestApp {
    content: SiteContent,
    settings: Arc<SiteSettings>,
}

impl SiteApp for TestApp {
    fn content(&self) -> SiteContent {
        self.content.clone()
    }

    fn settings(&self) -> Arc<SiteSettings> {
        Arc::clone(&self.settings)
    }

    fn clock(&self) -> Clock {
        fixed_clock()
    }
}

#[derive(Props, Clone)]
struct HarnessProps {
    app: Arc<TestApp>,
    prepare: Prepare,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn Harness(props: HarnessProps) -> Element {
    let app: Arc<dyn SiteApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { Seeded { prepare: props.prepare } }
}

#[derive(Props, Clone)]
struct SeededProps {
    prepare: Prepare,
}

impl PartialEq for SeededProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn Seeded(props: SeededProps) -> Element {
    let actions = use_site_context();
    use_hook(|| (props.prepare)(&actions));
    rsx! { SitePage {} }
}

pub struct SiteHarness {
    pub dom: VirtualDom,
    pub content: SiteContent,
}

impl SiteHarness {
    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_site(prepare: Prepare) -> SiteHarness {
    let content = EmbeddedContent.load().expect("embedded content");
    let app = Arc::new(TestApp {
        content: content.clone(),
        settings: Arc::new(SiteSettings::default()),
    });

    let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { app, prepare });
    dom.rebuild_in_place();
    drive_dom(&mut dom);
    SiteHarness { dom, content }
}

pub fn untouched(_actions: &SiteActions) {}
