//! Reusable marker widgets
//!
//! Each widget renders to any [`Canvas`](crate::canvas::Canvas).
//!
//! # Available Widgets
//!
//! - [`LabelBox`] - Text on a padded background box, centered on a point
//! - [`MarkerSquare`] - Filled square centered on a point

mod label_box;
mod marker_square;

pub use label_box::{LABEL_BACKGROUND, LABEL_PADDING, LabelBox};
pub use marker_square::MarkerSquare;
