mod site;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use site::{
    FRAME_INTERVAL, SiteActions, SitePage, SiteState, SiteView, UiSlot, UiTask, Viewport,
    use_site_context,
};
