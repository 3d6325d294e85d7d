pub mod app;
pub mod context;
pub mod vm;
pub mod views;

pub use app::App;
pub use context::{AppContext, SiteApp, build_app_context};
