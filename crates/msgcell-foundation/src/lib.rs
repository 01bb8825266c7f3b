//! Gesture input and the message swipe state machine for msgcell

mod error;
mod gesture;
pub mod gesture_constants;
pub mod swipe;
mod velocity_tracker;

pub use error::*;
pub use gesture::*;
pub use velocity_tracker::*;

pub mod prelude {
    pub use crate::error::SwipeError;
    pub use crate::gesture::{DragSample, GesturePhase};
    pub use crate::swipe::{
        ActiveDirection, InteractionId, InteractiveTransition, SwipeConfig, SwipeDelegate,
        SwipeGestureController, SwipeProgress, SwipeProgressStore, SwipeTarget, SwipeViewHost,
    };
    pub use crate::velocity_tracker::VelocityTracker1D;
}
