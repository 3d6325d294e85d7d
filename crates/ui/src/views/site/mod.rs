mod actions;
mod bridges;
mod components;
mod frame;
mod scripts;
mod startup;
mod state;
mod view;

pub use actions::SiteActions;
pub use frame::{FRAME_INTERVAL, UiSlot, UiTask};
pub use state::{SiteState, Viewport};
pub use view::{SitePage, SiteView, use_site_context};
