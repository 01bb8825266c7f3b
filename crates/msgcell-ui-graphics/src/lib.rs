//! Pure math/data for message cell geometry.
//!
//! This crate contains geometry primitives, pixel alignment, directional
//! corner sets, colors and pixel units shared by every msgcell crate.

mod color;
mod corners;
mod geometry;
mod unit;

pub use color::*;
pub use corners::*;
pub use geometry::*;
pub use unit::*;

pub mod prelude {
    pub use crate::color::Color;
    pub use crate::corners::{CornerRadii, DirectionalCorners};
    pub use crate::geometry::{EdgeInsets, GraphicsLayer, Point, Rect, Size};
    pub use crate::unit::PixelScale;
}
