#![forbid(unsafe_code)]

pub mod delegate;
pub mod diagnostics;
pub mod error;
pub mod lesson_modal;
pub mod loading;
pub mod navigation;
pub mod quiz;
pub mod registry;
pub mod reveal;
pub mod scroll_top;
pub mod shortcuts;
pub mod tabs;

pub use lingo_core::{Clock, Millis};

pub use delegate::{ClickRouter, ClickTarget, SiteClick, site_router};
pub use diagnostics::{FrameRateMeter, LoadReport, NavigationTiming, ScriptFault};
pub use error::{LessonError, QuizError};
pub use lesson_modal::{LessonModal, Overlay, ScrollLock};
pub use loading::{LoadingPhase, LoadingSequencer, LoadingStep};
pub use navigation::{MobileMenu, NavbarBackdrop};
pub use quiz::{FeedbackTier, QuestionReview, QuizPhase, QuizResults, QuizSession, QuizStep};
pub use registry::{ElementRegistry, Region};
pub use reveal::{RevealController, RevealState};
pub use scroll_top::ScrollTopControl;
pub use shortcuts::{KeyInput, Shortcut};
pub use tabs::{TabSelection, TabSwitcher};
