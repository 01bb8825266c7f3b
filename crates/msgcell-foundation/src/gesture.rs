//! Platform-neutral drag input delivered by the host's pan recognizer.

use msgcell_ui_graphics::Point;

/// Lifecycle phase of a pan gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GesturePhase {
    Possible,
    Began,
    Changed,
    Ended,
    Cancelled,
    Failed,
}

impl GesturePhase {
    /// Ended, cancelled and failed gestures never deliver further samples.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            GesturePhase::Ended | GesturePhase::Cancelled | GesturePhase::Failed
        )
    }

    pub fn has_failed(self) -> bool {
        self == GesturePhase::Failed
    }
}

/// One sample of a horizontal drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSample {
    pub phase: GesturePhase,
    /// Translation since the gesture began, in the cell's coordinate space.
    pub translation: Point,
    /// Horizontal translation in the host container's coordinate space.
    pub host_translation_x: f32,
    /// Velocity reported by the recognizer, if it tracks one.
    pub velocity: Option<Point>,
    pub uptime_millis: i64,
}

impl DragSample {
    pub fn new(phase: GesturePhase, translation_x: f32) -> Self {
        Self {
            phase,
            translation: Point::new(translation_x, 0.0),
            host_translation_x: translation_x,
            velocity: None,
            uptime_millis: 0,
        }
    }

    pub fn with_velocity(mut self, velocity_x: f32) -> Self {
        self.velocity = Some(Point::new(velocity_x, 0.0));
        self
    }

    pub fn with_host_translation(mut self, host_translation_x: f32) -> Self {
        self.host_translation_x = host_translation_x;
        self
    }

    pub fn at(mut self, uptime_millis: i64) -> Self {
        self.uptime_millis = uptime_millis;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_phases() {
        assert!(!GesturePhase::Began.is_terminal());
        assert!(!GesturePhase::Changed.is_terminal());
        assert!(GesturePhase::Ended.is_terminal());
        assert!(GesturePhase::Cancelled.is_terminal());
        assert!(GesturePhase::Failed.is_terminal());
        assert!(GesturePhase::Failed.has_failed());
        assert!(!GesturePhase::Cancelled.has_failed());
    }

    #[test]
    fn sample_builder_sets_fields() {
        let sample = DragSample::new(GesturePhase::Changed, 12.0)
            .with_velocity(-3.0)
            .with_host_translation(20.0)
            .at(16);
        assert_eq!(sample.translation, Point::new(12.0, 0.0));
        assert_eq!(sample.host_translation_x, 20.0);
        assert_eq!(sample.velocity, Some(Point::new(-3.0, 0.0)));
        assert_eq!(sample.uptime_millis, 16);
    }
}
