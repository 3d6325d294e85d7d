use std::collections::HashMap;

/// Interactive regions of the page that controllers act on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Region {
    Loader,
    Navbar,
    Hamburger,
    NavMenu,
    TabContainer,
    LessonModalClose,
    QuizModalClose,
    ScrollTopButton,
    /// An in-page anchor target, by section id.
    Section(String),
}

impl Region {
    /// Regions every page is expected to provide. Sections are registered as they mount.
    pub const FIXED: [Region; 8] = [
        Region::Loader,
        Region::Navbar,
        Region::Hamburger,
        Region::NavMenu,
        Region::TabContainer,
        Region::LessonModalClose,
        Region::QuizModalClose,
        Region::ScrollTopButton,
    ];

    #[must_use]
    pub fn section(id: impl Into<String>) -> Self {
        Region::Section(id.into())
    }
}

/// Cache of element handles, consulted instead of re-querying the page.
///
/// Every entry is optional: a missing handle means the feature is unavailable
/// and callers skip it silently.
#[derive(Debug, Clone)]
pub struct ElementRegistry<H> {
    handles: HashMap<Region, H>,
}

impl<H> Default for ElementRegistry<H> {
    fn default() -> Self {
        Self {
            handles: HashMap::new(),
        }
    }
}

impl<H> ElementRegistry<H> {
    /// Performs one lookup per fixed region and keeps whatever was found.
    pub fn init(mut lookup: impl FnMut(&Region) -> Option<H>) -> Self {
        let handles = Region::FIXED
            .iter()
            .filter_map(|region| lookup(region).map(|handle| (region.clone(), handle)))
            .collect();
        Self { handles }
    }

    /// Adds or replaces the handle for a region outside the fixed set.
    pub fn register(&mut self, region: Region, handle: H) {
        self.handles.insert(region, handle);
    }

    pub fn unregister(&mut self, region: &Region) -> Option<H> {
        self.handles.remove(region)
    }

    #[must_use]
    pub fn get(&self, region: &Region) -> Option<&H> {
        self.handles.get(region)
    }

    #[must_use]
    pub fn contains(&self, region: &Region) -> bool {
        self.handles.contains_key(region)
    }

    /// Runs `f` with the handle, or does nothing when the region is absent.
    pub fn with<R>(&self, region: &Region, f: impl FnOnce(&H) -> R) -> Option<R> {
        match self.handles.get(region) {
            Some(handle) => Some(f(handle)),
            None => {
                tracing::debug!(?region, "element not registered; skipping");
                None
            }
        }
    }

    /// Fixed regions that never registered a handle.
    #[must_use]
    pub fn missing(&self) -> Vec<Region> {
        Region::FIXED
            .iter()
            .filter(|region| !self.handles.contains_key(*region))
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_looks_up_each_fixed_region_once() {
        let mut calls = Vec::new();
        let registry = ElementRegistry::init(|region| {
            calls.push(region.clone());
            matches!(region, Region::Navbar | Region::Hamburger).then_some("handle")
        });

        assert_eq!(calls.len(), Region::FIXED.len());
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get(&Region::Navbar), Some(&"handle"));
        assert!(!registry.contains(&Region::NavMenu));
    }

    #[test]
    fn missing_lists_unregistered_fixed_regions() {
        let mut registry = ElementRegistry::default();
        registry.register(Region::Navbar, "nav");
        registry.register(Region::Hamburger, "burger");
        registry.register(Region::section("about"), "about");

        let missing = registry.missing();
        assert_eq!(missing.len(), Region::FIXED.len() - 2);
        assert!(missing.contains(&Region::NavMenu));
        assert!(!missing.contains(&Region::Navbar));
        assert_eq!(registry.get(&Region::Navbar), Some(&"nav"));
    }

    #[test]
    fn missing_regions_are_a_silent_no_op() {
        let registry: ElementRegistry<u32> = ElementRegistry::default();
        let mut touched = false;
        let result = registry.with(&Region::QuizModalClose, |_| touched = true);
        assert!(result.is_none());
        assert!(!touched);
    }

    #[test]
    fn sections_register_late() {
        let mut registry = ElementRegistry::<u8>::default();
        registry.register(Region::section("lessons"), 3);
        assert_eq!(registry.with(&Region::section("lessons"), |h| *h + 1), Some(4));
        assert_eq!(registry.unregister(&Region::section("lessons")), Some(3));
    }
}
