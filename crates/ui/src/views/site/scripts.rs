use dioxus::document::eval;
use dioxus::prelude::*;
use lingo_services::NavigationTiming;

//
// ─── LISTENER BRIDGES ──────────────────────────────────────────────────────────
//
// Each bridge installs page listeners that forward raw events to Rust through
// `dioxus.send`. The trailing never-settling promise keeps the channel open.

pub(super) const VIEWPORT_BRIDGE_SCRIPT: &str = r#"
    const report = (kind) => dioxus.send({
        kind,
        y: window.scrollY,
        width: window.innerWidth,
    });
    window.addEventListener("scroll", () => report("scroll"), { passive: true });
    window.addEventListener("resize", () => report("resize"));
    report("init");
    await new Promise(() => {});
"#;

pub(super) const CLICK_BRIDGE_SCRIPT: &str = r#"
    document.addEventListener("click", (event) => {
        if (!(event.target instanceof Element)) return;
        const el = event.target.closest(".tab-btn") || event.target;
        dioxus.send({
            id: el.id || null,
            classes: Array.from(el.classList),
            data: Object.assign({}, el.dataset),
        });
    });
    await new Promise(() => {});
"#;

pub(super) const KEY_BRIDGE_SCRIPT: &str = r#"
    document.addEventListener("keydown", (event) => {
        if (event.ctrlKey && event.key === "Home") event.preventDefault();
        dioxus.send({
            key: event.key,
            ctrl: event.ctrlKey,
            alt: event.altKey,
            meta: event.metaKey,
            shift: event.shiftKey,
        });
    });
    await new Promise(() => {});
"#;

pub(super) const VISIBILITY_BRIDGE_SCRIPT: &str = r#"
    document.addEventListener("visibilitychange", () => dioxus.send(document.hidden));
    await new Promise(() => {});
"#;

pub(super) const FAULT_BRIDGE_SCRIPT: &str = r#"
    window.addEventListener("error", (event) => dioxus.send({
        kind: "error",
        message: String(event.message || "unknown error"),
        source: event.filename || null,
        line: event.lineno || null,
    }));
    window.addEventListener("unhandledrejection", (event) => dioxus.send({
        kind: "rejection",
        message: String(event.reason),
        source: null,
        line: null,
    }));
    await new Promise(() => {});
"#;

/// Counts painted frames and reports the count roughly four times a second.
pub(super) const FRAME_BRIDGE_SCRIPT: &str = r#"
    let frames = 0;
    let windowStart = performance.now();
    const tick = (now) => {
        frames += 1;
        if (now - windowStart >= 250) {
            dioxus.send(frames);
            frames = 0;
            windowStart = now;
        }
        requestAnimationFrame(tick);
    };
    requestAnimationFrame(tick);
    await new Promise(() => {});
"#;

pub(super) fn reveal_bridge_script(threshold: f64, root_margin: &str, indices: &[usize]) -> String {
    let indices = index_list(indices);
    format!(
        r#"
        const observer = new IntersectionObserver((entries) => {{
            for (const entry of entries) {{
                if (!entry.isIntersecting) continue;
                observer.unobserve(entry.target);
                dioxus.send(Number(entry.target.dataset.revealIndex));
            }}
        }}, {{ threshold: {threshold}, rootMargin: {root_margin:?} }});
        const observe = (indices) => {{
            for (const index of indices) {{
                const el = document.querySelector(`[data-reveal-index="${{index}}"]`);
                if (el) observer.observe(el);
            }}
        }};
        window.__lingoReveal = {{
            observe,
            pause: () => observer.disconnect(),
        }};
        observe([{indices}]);
        await new Promise(() => {{}});
    "#
    )
}

pub(super) const PAUSE_REVEAL_SCRIPT: &str =
    "if (window.__lingoReveal) window.__lingoReveal.pause();";

pub(super) fn resume_reveal_script(indices: &[usize]) -> String {
    let indices = index_list(indices);
    format!("if (window.__lingoReveal) window.__lingoReveal.observe([{indices}]);")
}

fn index_list(indices: &[usize]) -> String {
    indices
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

//
// ─── ONE-SHOT SCRIPTS ──────────────────────────────────────────────────────────
//

pub(super) fn scroll_window_script(offset: f64) -> String {
    format!("window.scrollTo(0, {offset});")
}

pub(super) fn body_scroll_lock_script(locked: bool) -> String {
    let overflow = if locked { "hidden" } else { "auto" };
    format!("document.body.style.overflow = {overflow:?};")
}

const PAGE_LOADED_SCRIPT: &str = r#"document.body.classList.add("loaded");"#;

const NAVIGATION_TIMING_SCRIPT: &str = r#"
    const [entry] = performance.getEntriesByType("navigation");
    if (!entry) return null;
    return {
        dnsMs: entry.domainLookupEnd - entry.domainLookupStart,
        connectMs: entry.connectEnd - entry.connectStart,
        responseMs: entry.responseEnd - entry.responseStart,
        domProcessingMs: entry.domComplete - entry.domInteractive,
        loadEventMs: entry.loadEventEnd - entry.loadEventStart,
    };
"#;

/// Fires `script` without waiting for it.
pub(super) fn run_script(script: String) {
    spawn(async move {
        let _ = eval(&script).await;
    });
}

pub(super) async fn scroll_window(offset: f64) {
    let _ = eval(&scroll_window_script(offset)).await;
}

pub(super) async fn read_scroll_offset() -> Option<f64> {
    eval("return window.scrollY;").join::<f64>().await.ok()
}

pub(super) fn mark_page_loaded() {
    run_script(PAGE_LOADED_SCRIPT.to_string());
}

pub(super) async fn read_navigation_timing() -> Option<NavigationTiming> {
    eval(NAVIGATION_TIMING_SCRIPT)
        .join::<Option<NavigationTiming>>()
        .await
        .ok()
        .flatten()
}
