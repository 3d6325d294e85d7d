use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;
use lingo_core::model::SiteSettings;
use lingo_core::motion::ScrollAnimation;
use lingo_core::schedule::Throttle;
use lingo_services::navigation;
use lingo_services::{
    ClickRouter, ClickTarget, ElementRegistry, KeyInput, LoadReport, Overlay, QuizStep, Region,
    ScriptFault, Shortcut, SiteClick, site_router,
};

use crate::context::AppContext;

use super::frame::{UiTask, next_frame};
use super::scripts;
use super::state::{SiteState, Viewport};

/// Margin added to timer sleeps so the wake lands at or past the deadline.
const WAKE_SLACK: Duration = Duration::from_millis(1);

/// Every user-facing operation of the page.
///
/// Handlers in the views call these methods; nothing else mutates `SiteState`.
#[derive(Clone)]
pub struct SiteActions {
    ctx: AppContext,
    state: SiteState,
    router: Rc<ClickRouter<SiteClick>>,
}

pub fn use_site_actions(ctx: &AppContext, state: SiteState) -> SiteActions {
    use_hook(|| SiteActions {
        ctx: ctx.clone(),
        state,
        router: Rc::new(site_router()),
    })
}

impl SiteActions {
    #[must_use]
    pub fn state(&self) -> SiteState {
        self.state
    }

    #[must_use]
    pub fn context(&self) -> &AppContext {
        &self.ctx
    }

    fn settings(&self) -> &SiteSettings {
        self.ctx.settings()
    }

    /// Handler that records the element mounted for `region`.
    pub fn on_mounted(&self, region: Region) -> impl FnMut(MountedEvent) + 'static {
        let mut mounts = self.state.mounts;
        move |evt: MountedEvent| {
            mounts.write().insert(region.clone(), evt.data());
        }
    }

    fn has(&self, region: &Region) -> bool {
        self.state.registry.peek().contains(region)
    }

    // ─── REGISTRY ─────────────────────────────────────────────────────────────

    /// Resolves every region once from what has mounted so far.
    pub fn init_registry(&self) {
        let mounts = self.state.mounts.peek().clone();
        let mut registry = ElementRegistry::init(|region| mounts.get(region).cloned());
        for (region, handle) in &mounts {
            if matches!(region, Region::Section(_)) {
                registry.register(region.clone(), Rc::clone(handle));
            }
        }

        let missing = registry.missing();
        if !missing.is_empty() {
            tracing::debug!(?missing, "regions unavailable; their features stay inert");
        }
        tracing::info!(registered = registry.len(), "element registry ready");
        let mut slot = self.state.registry;
        slot.set(registry);
    }

    // ─── FRAMES ───────────────────────────────────────────────────────────────

    /// Queues `task`; the first request of a frame arms the flush.
    pub fn request_frame(&self, task: UiTask) {
        let mut frames = self.state.frames;
        if frames.write().request(task) {
            let actions = self.clone();
            spawn(async move {
                next_frame().await;
                actions.flush_frame();
            });
        }
    }

    fn flush_frame(&self) {
        let mut frames = self.state.frames;
        let tasks = frames.write().drain();
        for task in tasks {
            self.apply(task);
        }
    }

    fn apply(&self, task: UiTask) {
        let mut state = self.state;
        match task {
            UiTask::ShowOverlay(Overlay::Lesson, visible) => state.lesson_visible.set(visible),
            UiTask::ShowOverlay(Overlay::Quiz, visible) => state.quiz_visible.set(visible),
            UiTask::LockScroll(locked) => {
                scripts::run_script(scripts::body_scroll_lock_script(locked));
            }
            UiTask::Focus(region) => {
                let handle = state.registry.peek().with(&region, Rc::clone);
                if let Some(handle) = handle {
                    spawn(async move {
                        if let Err(err) = handle.set_focus(true).await {
                            tracing::debug!(?err, "focus failed");
                        }
                    });
                }
            }
            UiTask::ActivateTab(target) => match state.tabs.write().activate(&target) {
                Some(selection) => tracing::debug!(
                    tab = %selection.button,
                    pane = selection.pane.is_some(),
                    "tab activated"
                ),
                None => tracing::debug!(tab = %target, "unknown tab; ignoring"),
            },
            UiTask::NavbarBackground(background) => state.navbar_background.set(background),
        }
    }

    // ─── SCROLLING ────────────────────────────────────────────────────────────

    /// Drives `animation` frame by frame. Starting another animation cancels this one.
    async fn animate_scroll(&self, animation: ScrollAnimation) {
        let mut generation = self.state.scroll_generation;
        let ticket = {
            let mut current = generation.write();
            *current += 1;
            *current
        };

        loop {
            let frame = animation.sample(self.ctx.clock().now());
            scripts::scroll_window(frame.offset).await;
            if frame.finished {
                break;
            }
            next_frame().await;
            if *generation.peek() != ticket {
                tracing::trace!("scroll animation superseded");
                break;
            }
        }
    }

    /// Smoothly scrolls so `section` sits just below the fixed navbar.
    pub fn scroll_to_section(&self, section: &str) {
        self.close_menu();
        let Some(handle) = self
            .state
            .registry
            .peek()
            .with(&Region::section(section), Rc::clone)
        else {
            return;
        };

        let actions = self.clone();
        spawn(async move {
            let Ok(rect) = handle.get_client_rect().await else {
                tracing::debug!("section rect unavailable");
                return;
            };
            let offset = scripts::read_scroll_offset().await.unwrap_or_default();
            let now = actions.ctx.clock().now();
            let animation =
                navigation::scroll_to_section(actions.settings(), rect.origin.y, offset, now);
            actions.animate_scroll(animation).await;
        });
    }

    /// Eases the page back to the top.
    pub fn scroll_to_top(&self) {
        if !self.has(&Region::ScrollTopButton) {
            return;
        }
        let actions = self.clone();
        spawn(async move {
            let offset = scripts::read_scroll_offset().await.unwrap_or_default();
            let animation = actions
                .state
                .scroll_top
                .peek()
                .animation(offset, actions.ctx.clock().now());
            actions.animate_scroll(animation).await;
        });
    }

    // ─── NAVIGATION ───────────────────────────────────────────────────────────

    pub fn toggle_menu(&self) {
        if !self.has(&Region::Hamburger) || !self.has(&Region::NavMenu) {
            return;
        }
        let mut menu = self.state.menu;
        let open = menu.write().toggle();
        tracing::debug!(open, "mobile menu toggled");
    }

    pub fn close_menu(&self) {
        let mut menu = self.state.menu;
        if menu.peek().is_open() {
            menu.write().close();
        }
    }

    // ─── VIEWPORT ─────────────────────────────────────────────────────────────

    pub fn init_viewport(&self, scroll_y: f64, width: f64) {
        let mut viewport = self.state.viewport;
        viewport.set(Viewport { scroll_y, width });
        self.apply_navbar_offset(scroll_y);
        self.apply_scroll_top_offset(scroll_y);
    }

    pub fn on_scroll(&self, scroll_y: f64) {
        let mut viewport = self.state.viewport;
        viewport.write().scroll_y = scroll_y;
        self.throttled(self.state.navbar_throttle, scroll_y, Self::apply_navbar_offset);
        self.throttled(self.state.scroll_top_throttle, scroll_y, Self::apply_scroll_top_offset);
    }

    /// Width changes are adopted once resizing has been quiet for the debounce period.
    pub fn on_resize(&self, width: f64) {
        let clock = self.ctx.clock();
        let mut debounce = self.state.resize;
        let mut viewport = self.state.viewport;
        if let Some(width) = debounce.write().call(clock.now(), width) {
            // Only a leading-edge debounce hands the value back here.
            viewport.write().width = width;
            return;
        }
        let Some(deadline) = debounce.peek().deadline() else {
            return;
        };

        spawn(async move {
            tokio::time::sleep(deadline.since(clock.now()) + WAKE_SLACK).await;
            let settled = debounce.write().poll(clock.now());
            if let Some(width) = settled {
                viewport.write().width = width;
                tracing::debug!(width, "viewport width adopted");
            }
        });
    }

    /// Runs `apply` through `throttle`, arming one wake per cooldown for the trailing call.
    fn throttled(&self, mut throttle: Signal<Throttle<f64>>, value: f64, apply: fn(&Self, f64)) {
        let clock = self.ctx.clock();
        let already_armed = throttle.peek().has_trailing();
        let ready = throttle.write().call(clock.now(), value);
        if let Some(value) = ready {
            apply(self, value);
            return;
        }
        if already_armed {
            return;
        }
        let Some(deadline) = throttle.peek().deadline() else {
            return;
        };

        let actions = self.clone();
        spawn(async move {
            tokio::time::sleep(deadline.since(clock.now()) + WAKE_SLACK).await;
            let trailing = throttle.write().poll(clock.now());
            if let Some(value) = trailing {
                apply(&actions, value);
            }
        });
    }

    fn apply_navbar_offset(&self, scroll_y: f64) {
        if !self.has(&Region::Navbar) {
            return;
        }
        let mut backdrop = self.state.backdrop;
        let background = backdrop.write().on_scroll(scroll_y).map(str::to_owned);
        if let Some(background) = background {
            self.request_frame(UiTask::NavbarBackground(background));
        }
    }

    fn apply_scroll_top_offset(&self, scroll_y: f64) {
        if !self.has(&Region::ScrollTopButton) {
            return;
        }
        let mut control = self.state.scroll_top;
        if let Some(visible) = control.write().on_scroll(scroll_y) {
            tracing::trace!(visible, "scroll-top control toggled");
        }
    }

    // ─── TABS AND DELEGATED CLICKS ────────────────────────────────────────────

    pub fn select_tab(&self, target: &str) {
        if !self.has(&Region::TabContainer) {
            return;
        }
        self.request_frame(UiTask::ActivateTab(target.to_owned()));
    }

    /// Entry point of the page-level click listener.
    pub fn handle_click(&self, target: &ClickTarget) {
        match self.router.dispatch(target) {
            Some(SiteClick::SelectTab(tab)) => self.select_tab(&tab),
            Some(SiteClick::CloseLesson) => self.close_lesson_modal(),
            Some(SiteClick::CloseQuiz) => self.close_quiz_modal(),
            None => {}
        }
    }

    // ─── OVERLAYS ─────────────────────────────────────────────────────────────

    fn show_overlay(&self, overlay: Overlay, close_control: Region) {
        self.request_frame(UiTask::ShowOverlay(overlay, true));
        let mut lock = self.state.scroll_lock;
        if lock.write().acquire(overlay) {
            self.request_frame(UiTask::LockScroll(true));
        }
        self.request_frame(UiTask::Focus(close_control));
    }

    fn hide_overlay(&self, overlay: Overlay) {
        self.request_frame(UiTask::ShowOverlay(overlay, false));
        let mut lock = self.state.scroll_lock;
        if lock.write().release(overlay) {
            self.request_frame(UiTask::LockScroll(false));
        }
    }

    pub fn open_lesson_modal(&self, lesson_id: &str) {
        if !self.has(&Region::LessonModalClose) {
            tracing::debug!(lesson = lesson_id, "lesson modal unavailable");
            return;
        }
        let mut modal = self.state.lesson;
        let opened = modal
            .write()
            .open(self.ctx.content().lessons(), lesson_id)
            .map(|lesson| lesson.title().to_owned());
        match opened {
            Ok(title) => {
                tracing::info!(lesson = lesson_id, %title, "lesson opened");
                self.show_overlay(Overlay::Lesson, Region::LessonModalClose);
            }
            Err(err) => tracing::debug!(%err, "lesson modal left closed"),
        }
    }

    pub fn close_lesson_modal(&self) {
        let mut modal = self.state.lesson;
        if modal.write().close() {
            self.hide_overlay(Overlay::Lesson);
        }
    }

    // ─── QUIZ ─────────────────────────────────────────────────────────────────

    pub fn start_quiz(&self, category: &str) {
        if !self.has(&Region::QuizModalClose) {
            tracing::debug!(category, "quiz modal unavailable");
            return;
        }
        let mut quiz = self.state.quiz;
        let started = quiz
            .write()
            .start(self.ctx.content().quizzes(), category)
            .map(|bank| bank.len());
        match started {
            Ok(total) => {
                tracing::info!(category, total, "quiz started");
                self.show_overlay(Overlay::Quiz, Region::QuizModalClose);
            }
            Err(err) => tracing::debug!(%err, "quiz not started"),
        }
    }

    pub fn close_quiz_modal(&self) {
        let mut quiz = self.state.quiz;
        if quiz.write().close() {
            self.hide_overlay(Overlay::Quiz);
        }
    }

    pub fn select_answer(&self, option: usize) {
        let mut quiz = self.state.quiz;
        if let Err(err) = quiz.write().select_answer(option) {
            tracing::debug!(%err, option, "answer ignored");
        }
    }

    pub fn next_question(&self) {
        let mut quiz = self.state.quiz;
        let step = quiz.write().next();
        match step {
            Ok(QuizStep::Advanced { cursor }) => tracing::trace!(cursor, "next question"),
            Ok(QuizStep::Finished(results)) => tracing::info!(
                quiz = %results.title,
                score = results.score,
                total = results.total,
                percentage = results.percentage,
                "quiz finished"
            ),
            Err(err) => tracing::debug!(%err, "next ignored"),
        }
    }

    pub fn previous_question(&self) {
        let mut quiz = self.state.quiz;
        if !quiz.write().previous() {
            tracing::trace!("already at the first question");
        }
    }

    pub fn restart_quiz(&self) {
        let mut quiz = self.state.quiz;
        if quiz.write().restart() {
            tracing::debug!("quiz restarted");
        }
    }

    // ─── KEYBOARD ─────────────────────────────────────────────────────────────

    pub fn handle_key(&self, input: &KeyInput<'_>) {
        let width = self.state.viewport.peek().width;
        match Shortcut::resolve(input, width, self.settings().mobile_breakpoint_px) {
            Some(Shortcut::CloseModals) => {
                self.close_lesson_modal();
                self.close_quiz_modal();
            }
            Some(Shortcut::ToggleMenu) => self.toggle_menu(),
            Some(Shortcut::ScrollToTop) => self.scroll_to_top(),
            None => {}
        }
    }

    // ─── LOADING ──────────────────────────────────────────────────────────────

    /// Plays the loading sequence, then marks the page ready.
    pub async fn run_loading(self) {
        if !self.has(&Region::Loader) {
            tracing::debug!("no loader; page ready immediately");
            self.page_ready();
            return;
        }

        let mut loading = self.state.loading;
        let mut delay = loading.peek().first_delay(&mut rand::rng());
        loop {
            tokio::time::sleep(delay).await;
            let step = loading.write().tick(&mut rand::rng());
            if let Some(status) = &step.status {
                tracing::debug!(percent = step.percent, status = %status, "loading");
            }
            if step.became_ready {
                self.page_ready();
            }
            match step.next_tick {
                Some(next) => delay = next,
                None => break,
            }
        }
    }

    fn page_ready(&self) {
        scripts::mark_page_loaded();
        let started_at = self.state.started_at;
        let ready_at = self.ctx.clock().now();
        spawn(async move {
            let navigation = scripts::read_navigation_timing().await;
            LoadReport::new(started_at, ready_at)
                .with_navigation(navigation)
                .log();
        });
    }

    // ─── REVEAL AND DIAGNOSTICS ───────────────────────────────────────────────

    pub fn on_reveal(&self, index: usize) {
        let mut reveal = self.state.reveal;
        if reveal.write().on_visible(index) {
            tracing::trace!(index, "element revealed");
        }
    }

    pub fn on_visibility_change(&self, hidden: bool) {
        let mut reveal = self.state.reveal;
        if hidden {
            if reveal.write().pause() {
                scripts::run_script(scripts::PAUSE_REVEAL_SCRIPT.to_string());
                tracing::debug!("page hidden; reveal observer paused");
            }
            return;
        }
        let resumed = reveal.write().resume();
        if let Some(pending) = resumed {
            tracing::debug!(pending = pending.len(), "page visible; reveal observer resumed");
            scripts::run_script(scripts::resume_reveal_script(&pending));
        }
    }

    pub fn on_frames(&self, frames: u64) {
        let mut meter = self.state.frame_rate;
        let sample = meter.write().record(self.ctx.clock().now(), frames);
        if let Some(sample) = sample {
            sample.log();
        }
    }

    pub fn on_fault(&self, fault: &ScriptFault) {
        fault.log();
    }
}
