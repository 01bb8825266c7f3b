//! Swipe-to-reply (right) and swipe-to-detail (left) on a message cell.
//!
//! The pure pieces ([`ActiveDirection`], [`elastic_clamp`],
//! [`SwipeTransforms`]) are separated from [`SwipeGestureController`], which
//! drives them from drag samples and pushes the results to a
//! [`SwipeViewHost`].

mod controller;
mod direction;
mod host;
mod progress;
mod transforms;

pub use controller::*;
pub use direction::*;
pub use host::*;
pub use progress::*;
pub use transforms::*;
