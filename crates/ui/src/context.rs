use std::sync::Arc;

use lingo_content::SiteContent;
use lingo_core::model::SiteSettings;
use lingo_services::Clock;

/// What the composition root hands to the UI.
pub trait SiteApp: Send + Sync {
    fn content(&self) -> SiteContent;
    fn settings(&self) -> Arc<SiteSettings>;
    fn clock(&self) -> Clock;
}

#[derive(Clone)]
pub struct AppContext {
    content: SiteContent,
    settings: Arc<SiteSettings>,
    clock: Clock,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn SiteApp>) -> Self {
        Self {
            content: app.content(),
            settings: app.settings(),
            clock: app.clock(),
        }
    }

    #[must_use]
    pub fn content(&self) -> &SiteContent {
        &self.content
    }

    #[must_use]
    pub fn settings(&self) -> &SiteSettings {
        &self.settings
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn SiteApp>) -> AppContext {
    AppContext::new(app)
}
