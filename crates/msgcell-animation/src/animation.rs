//! Tween and spring parameters attached to view transform commands.

/// Where `value` sits between `start` and `end`, as an unclamped fraction.
/// A degenerate range yields 1.
pub fn inverse_lerp(value: f32, start: f32, end: f32) -> f32 {
    let range = end - start;
    if range.abs() < f32::EPSILON {
        1.0
    } else {
        (value - start) / range
    }
}

/// Timing curve of a tween.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    LinearEasing,
    EaseInOut,
}

/// Tween: duration and easing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    pub duration_millis: u64,
    pub easing: Easing,
    /// Start from the currently presented value instead of the last target,
    /// so that a stream of retargeted tweens never jumps.
    pub begin_from_current_state: bool,
}

impl AnimationSpec {
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
            begin_from_current_state: false,
        }
    }

    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::LinearEasing)
    }

    pub fn beginning_from_current_state(mut self) -> Self {
        self.begin_from_current_state = true;
        self
    }
}

/// Duration-based spring: settles within `duration_millis`, oscillating
/// according to `damping_ratio` (1.0 = critically damped, < 1.0 = bouncy).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    pub duration_millis: u64,
    pub damping_ratio: f32,
    /// Initial velocity, in target distances per second.
    pub initial_velocity: f32,
}

impl SpringSpec {
    pub fn new(duration_millis: u64, damping_ratio: f32, initial_velocity: f32) -> Self {
        Self {
            duration_millis,
            damping_ratio,
            initial_velocity,
        }
    }
}

/// How the host should animate one change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationType {
    Tween(AnimationSpec),
    Spring(SpringSpec),
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
