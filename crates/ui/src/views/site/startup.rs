use dioxus::prelude::*;

use super::actions::SiteActions;
use super::bridges;
use super::frame::next_frame;

/// Wires every controller once the first frame has mounted.
///
/// Order: registry, loading, navigation, tabs, scroll-top, modal delegation,
/// keyboard, reveal, diagnostics.
pub fn use_startup(actions: SiteActions) {
    use_effect(move || {
        let actions = actions.clone();
        spawn(async move {
            next_frame().await;
            start(actions);
        });
    });
}

fn start(actions: SiteActions) {
    actions.init_registry();

    spawn(actions.clone().run_loading());
    tracing::info!(step = "loading", "startup");

    bridges::viewport(actions.clone());
    tracing::info!(step = "navigation", "startup");

    let tabs = actions.state().tabs.peek().buttons().len();
    tracing::info!(step = "tabs", tabs, "startup");

    let scroll_top_visible = actions.state().scroll_top.peek().is_visible();
    tracing::info!(step = "scroll-top", visible = scroll_top_visible, "startup");

    bridges::clicks(actions.clone());
    tracing::info!(step = "modal delegation", "startup");

    bridges::keys(actions.clone());
    tracing::info!(step = "keyboard", "startup");

    let revealable = actions.state().reveal.peek().len();
    bridges::reveal(actions.clone());
    tracing::info!(step = "reveal", revealable, "startup");

    bridges::visibility(actions.clone());
    bridges::faults(actions.clone());
    bridges::frames(actions);
    tracing::info!(step = "diagnostics", "startup");
}
