use dioxus::prelude::*;
use lingo_services::Region;

use super::super::actions::SiteActions;

/// In-page anchors of the navigation menu: `(section id, label)`.
pub const NAV_LINKS: [(&str, &str); 4] = [
    ("home", "Home"),
    ("lessons", "Lessons"),
    ("quizzes", "Quizzes"),
    ("about", "About"),
];

#[component]
pub fn Navbar() -> Element {
    let actions = use_context::<SiteActions>();
    let state = actions.state();
    let background = (state.navbar_background)();
    let open = state.menu.read().is_open();

    let menu_class = if open { "nav-menu active" } else { "nav-menu" };
    let hamburger_class = if open { "hamburger active" } else { "hamburger" };
    let actions_for_logo = actions.clone();
    let actions_for_toggle = actions.clone();

    rsx! {
        nav {
            id: "navbar",
            class: "navbar",
            style: "background: {background}",
            onmounted: actions.on_mounted(Region::Navbar),
            div { class: "nav-container",
                a {
                    class: "nav-logo",
                    href: "#home",
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        actions_for_logo.scroll_to_section("home");
                    },
                    "Lingo"
                }
                ul {
                    id: "nav-menu",
                    class: "{menu_class}",
                    onmounted: actions.on_mounted(Region::NavMenu),
                    for (section, label) in NAV_LINKS {
                        li { key: "{section}", class: "nav-item",
                            a {
                                class: "nav-link",
                                href: "#{section}",
                                onclick: {
                                    let actions = actions.clone();
                                    move |evt: MouseEvent| {
                                        evt.prevent_default();
                                        actions.scroll_to_section(section);
                                    }
                                },
                                "{label}"
                            }
                        }
                    }
                }
                button {
                    id: "hamburger",
                    class: "{hamburger_class}",
                    r#type: "button",
                    aria_label: "Toggle navigation",
                    aria_expanded: "{open}",
                    onmounted: actions.on_mounted(Region::Hamburger),
                    onclick: move |_| actions_for_toggle.toggle_menu(),
                    span { class: "bar" }
                    span { class: "bar" }
                    span { class: "bar" }
                }
            }
        }
    }
}
