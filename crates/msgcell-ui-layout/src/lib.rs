//! Stack layout contracts & measurement for msgcell

mod axis;
pub mod collections;
mod direction;
mod measurement;
mod stack;

pub use axis::*;
pub use direction::*;
pub use measurement::*;
pub use stack::*;

pub mod prelude {
    pub use crate::axis::Axis;
    pub use crate::direction::LayoutDirection;
    pub use crate::measurement::{CellMeasurement, MeasurementCache, MeasurementKey};
    pub use crate::stack::{StackAlignment, StackConfig, StackMeasurement};
}
