use std::time::Duration;

use lingo_core::schedule::FrameTask;
use lingo_services::{Overlay, Region};

/// Pace of the host frame loop.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Resolves at the next frame boundary.
pub async fn next_frame() {
    tokio::time::sleep(FRAME_INTERVAL).await;
}

/// A visual write deferred to the next frame.
#[derive(Debug, Clone, PartialEq)]
pub enum UiTask {
    ShowOverlay(Overlay, bool),
    LockScroll(bool),
    Focus(Region),
    ActivateTab(String),
    NavbarBackground(String),
}

/// What a task writes to. A later task for the same slot replaces the earlier one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiSlot {
    Overlay(Overlay),
    ScrollLock,
    Focus,
    Tabs,
    Navbar,
}

impl FrameTask for UiTask {
    type Key = UiSlot;

    fn key(&self) -> UiSlot {
        match self {
            UiTask::ShowOverlay(overlay, _) => UiSlot::Overlay(*overlay),
            UiTask::LockScroll(_) => UiSlot::ScrollLock,
            UiTask::Focus(_) => UiSlot::Focus,
            UiTask::ActivateTab(_) => UiSlot::Tabs,
            UiTask::NavbarBackground(_) => UiSlot::Navbar,
        }
    }
}
