use dioxus::document::eval;
use dioxus::prelude::*;
use lingo_services::{ClickTarget, KeyInput, ScriptFault};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::actions::SiteActions;
use super::scripts;

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
enum ViewportEventKind {
    Init,
    Scroll,
    Resize,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
struct ViewportEvent {
    kind: ViewportEventKind,
    y: f64,
    width: f64,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
struct KeyEvent {
    key: String,
    #[serde(default)]
    ctrl: bool,
    #[serde(default)]
    alt: bool,
    #[serde(default)]
    meta: bool,
    #[serde(default)]
    shift: bool,
}

impl KeyEvent {
    fn input(&self) -> KeyInput<'_> {
        KeyInput {
            key: &self.key,
            ctrl: self.ctrl,
            alt: self.alt,
            meta: self.meta,
            shift: self.shift,
        }
    }
}

/// Runs `script` and feeds every message it sends to `handle` until the channel closes.
fn listen<T, F>(bridge: &'static str, script: String, mut handle: F)
where
    T: DeserializeOwned + 'static,
    F: FnMut(T) + 'static,
{
    spawn(async move {
        let mut channel = eval(&script);
        loop {
            match channel.recv::<T>().await {
                Ok(message) => handle(message),
                Err(err) => {
                    tracing::debug!(bridge, ?err, "bridge closed");
                    break;
                }
            }
        }
    });
}

pub(super) fn viewport(actions: SiteActions) {
    listen(
        "viewport",
        scripts::VIEWPORT_BRIDGE_SCRIPT.to_string(),
        move |event: ViewportEvent| match event.kind {
            ViewportEventKind::Init => actions.init_viewport(event.y, event.width),
            ViewportEventKind::Scroll => actions.on_scroll(event.y),
            ViewportEventKind::Resize => actions.on_resize(event.width),
        },
    );
}

pub(super) fn clicks(actions: SiteActions) {
    listen(
        "clicks",
        scripts::CLICK_BRIDGE_SCRIPT.to_string(),
        move |target: ClickTarget| actions.handle_click(&target),
    );
}

pub(super) fn keys(actions: SiteActions) {
    listen(
        "keys",
        scripts::KEY_BRIDGE_SCRIPT.to_string(),
        move |event: KeyEvent| actions.handle_key(&event.input()),
    );
}

pub(super) fn reveal(actions: SiteActions) {
    let settings = actions.context().settings();
    let pending = actions.state().reveal.peek().pending();
    let script = scripts::reveal_bridge_script(
        settings.reveal_threshold,
        &settings.reveal_root_margin,
        &pending,
    );
    listen("reveal", script, move |index: usize| actions.on_reveal(index));
}

pub(super) fn visibility(actions: SiteActions) {
    listen(
        "visibility",
        scripts::VISIBILITY_BRIDGE_SCRIPT.to_string(),
        move |hidden: bool| actions.on_visibility_change(hidden),
    );
}

pub(super) fn faults(actions: SiteActions) {
    listen(
        "faults",
        scripts::FAULT_BRIDGE_SCRIPT.to_string(),
        move |fault: ScriptFault| actions.on_fault(&fault),
    );
}

pub(super) fn frames(actions: SiteActions) {
    listen(
        "frames",
        scripts::FRAME_BRIDGE_SCRIPT.to_string(),
        move |count: u64| actions.on_frames(count),
    );
}
