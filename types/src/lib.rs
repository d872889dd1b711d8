//! Shared types for the wisp tracker.
//!
//! Everything in here is plain data: the tracked [`Category`] enumeration and
//! the serde-backed [`WispSettings`] that both the tracking core and the
//! overlay renderer read.

mod category;
pub mod settings;

pub use category::Category;
pub use settings::{Color, MarkerStyle, MarkerStyles, WispSettings, colors};
