//! Shared gesture constants for message swipe actions.
//!
//! All distances are in layout units (density-independent), velocities in
//! layout units per second.

/// Horizontal distance a swipe has to travel before an action becomes
/// active, in either direction.
pub const SWIPE_ACTION_OFFSET_THRESHOLD: f32 = 55.0;

/// Past the threshold, a right swipe only moves the content by
/// `overflow / RIGHT_OVERSCROLL_RESISTANCE`.
pub const RIGHT_OVERSCROLL_RESISTANCE: f32 = 4.0;

/// When swiping right, the avatar and reply icon move at
/// `1 / SWIPE_REVEAL_PARALLAX_DIVISOR` of the content's speed.
pub const SWIPE_REVEAL_PARALLAX_DIVISOR: f32 = 8.0;

/// Scale applied to the reply icon while swipe-to-reply is armed.
pub const REPLY_ICON_ACTIVE_SCALE: f32 = 1.16;

/// Maximum drag velocity reported by the velocity tracker.
pub const MAX_DRAG_VELOCITY: f32 = 8_000.0;

/// Duration of the tween used while tracking the finger.
pub const SWIPE_TRACKING_ANIMATION_MILLIS: u64 = 100;

/// Duration of the tween that returns displaced views to rest.
pub const SWIPE_RESET_ANIMATION_MILLIS: u64 = 200;

/// Reply icon bounce when the armed state changes.
pub const REPLY_ICON_SPRING_MILLIS: u64 = 200;
pub const REPLY_ICON_SPRING_DAMPING: f32 = 0.06;
pub const REPLY_ICON_SPRING_VELOCITY: f32 = 0.8;
