use std::collections::HashMap;
use std::rc::Rc;

use dioxus::prelude::*;
use lingo_core::Millis;
use lingo_core::schedule::{Debounce, FrameQueue, Throttle};
use lingo_services::{
    ElementRegistry, FrameRateMeter, LessonModal, LoadingSequencer, MobileMenu, NavbarBackdrop,
    QuizSession, Region, RevealController, ScrollLock, ScrollTopControl, TabSwitcher,
};

use crate::context::AppContext;

use super::frame::UiTask;

/// Latest known scroll offset and adopted viewport width.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub scroll_y: f64,
    pub width: f64,
}

/// Page elements reported by `onmounted`, keyed by the region they fill.
pub type MountTable = HashMap<Region, Rc<MountedData>>;

#[derive(Clone, Copy)]
pub struct SiteState {
    pub started_at: Millis,
    pub mounts: Signal<MountTable>,
    pub registry: Signal<ElementRegistry<Rc<MountedData>>>,
    pub frames: Signal<FrameQueue<UiTask>>,
    pub loading: Signal<LoadingSequencer>,
    pub menu: Signal<MobileMenu>,
    pub backdrop: Signal<NavbarBackdrop>,
    pub navbar_background: Signal<String>,
    pub navbar_throttle: Signal<Throttle<f64>>,
    pub tabs: Signal<TabSwitcher>,
    pub lesson: Signal<LessonModal>,
    pub lesson_visible: Signal<bool>,
    pub quiz: Signal<QuizSession>,
    pub quiz_visible: Signal<bool>,
    pub scroll_lock: Signal<ScrollLock>,
    pub scroll_top: Signal<ScrollTopControl>,
    pub scroll_top_throttle: Signal<Throttle<f64>>,
    pub scroll_generation: Signal<u64>,
    pub viewport: Signal<Viewport>,
    pub resize: Signal<Debounce<f64>>,
    pub reveal: Signal<RevealController>,
    pub frame_rate: Signal<FrameRateMeter>,
}

/// Number of feature cards in the about section; they follow lessons and quizzes
/// in reveal order.
pub const FEATURE_COUNT: usize = 3;

pub fn use_site_state(ctx: &AppContext) -> SiteState {
    let settings = ctx.settings();
    let content = ctx.content();

    let started_at = use_hook(|| ctx.clock().now());
    let mounts = use_signal(MountTable::new);
    let registry = use_signal(ElementRegistry::default);
    let frames = use_signal(FrameQueue::new);
    let loading = use_signal(|| LoadingSequencer::new(settings));
    let menu = use_signal(MobileMenu::default);
    let backdrop = use_signal(|| NavbarBackdrop::new(settings));
    let navbar_background = use_signal(|| settings.navbar_background.clone());
    let navbar_throttle = use_signal(|| Throttle::new(settings.navbar_throttle()));
    let tabs = use_signal(|| {
        let ids: Vec<_> = content
            .lessons()
            .tabs()
            .iter()
            .map(|tab| tab.id.clone())
            .collect();
        TabSwitcher::new(ids.clone(), ids)
    });
    let lesson = use_signal(LessonModal::default);
    let lesson_visible = use_signal(|| false);
    let quiz = use_signal(QuizSession::new);
    let quiz_visible = use_signal(|| false);
    let scroll_lock = use_signal(ScrollLock::default);
    let scroll_top = use_signal(|| ScrollTopControl::new(settings));
    let scroll_top_throttle = use_signal(|| Throttle::new(settings.scroll_top_throttle()));
    let scroll_generation = use_signal(|| 0_u64);
    let viewport = use_signal(Viewport::default);
    let resize = use_signal(|| Debounce::new(settings.resize_debounce()));
    let reveal = use_signal(|| {
        let count = content.lessons().len() + content.quizzes().banks().len() + FEATURE_COUNT;
        RevealController::new(count, settings.reveal_stagger())
    });
    let frame_rate = use_signal(|| FrameRateMeter::new(settings.low_fps_threshold));

    SiteState {
        started_at,
        mounts,
        registry,
        frames,
        loading,
        menu,
        backdrop,
        navbar_background,
        navbar_throttle,
        tabs,
        lesson,
        lesson_visible,
        quiz,
        quiz_visible,
        scroll_lock,
        scroll_top,
        scroll_top_throttle,
        scroll_generation,
        viewport,
        resize,
        reveal,
        frame_rate,
    }
}
