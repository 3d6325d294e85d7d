#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod motion;
pub mod schedule;
pub mod time;

pub use error::Error;
pub use time::{Clock, Millis};
