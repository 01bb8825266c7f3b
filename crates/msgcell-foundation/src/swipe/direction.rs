use crate::gesture_constants::SWIPE_ACTION_OFFSET_THRESHOLD;

/// Discrete classification of a swipe offset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ActiveDirection {
    #[default]
    None,
    /// Swipe-to-detail.
    Left,
    /// Swipe-to-reply.
    Right,
}

impl ActiveDirection {
    /// Classifies a leading-relative offset. `reply_allowed` is only consulted
    /// once the offset has crossed the threshold to the right.
    pub fn classify(x_offset: f32, reply_allowed: impl FnOnce() -> bool) -> Self {
        if x_offset >= SWIPE_ACTION_OFFSET_THRESHOLD {
            if reply_allowed() {
                ActiveDirection::Right
            } else {
                ActiveDirection::None
            }
        } else if x_offset <= -SWIPE_ACTION_OFFSET_THRESHOLD {
            ActiveDirection::Left
        } else {
            ActiveDirection::None
        }
    }

    pub fn is_active(self) -> bool {
        self != ActiveDirection::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_threshold_is_none() {
        assert_eq!(ActiveDirection::classify(0.0, || true), ActiveDirection::None);
        assert_eq!(ActiveDirection::classify(54.9, || true), ActiveDirection::None);
        assert_eq!(ActiveDirection::classify(-54.9, || true), ActiveDirection::None);
    }

    #[test]
    fn right_requires_reply_eligibility() {
        assert_eq!(ActiveDirection::classify(55.0, || true), ActiveDirection::Right);
        assert_eq!(ActiveDirection::classify(55.0, || false), ActiveDirection::None);
        assert_eq!(ActiveDirection::classify(300.0, || false), ActiveDirection::None);
    }

    #[test]
    fn left_ignores_reply_eligibility() {
        let mut asked = false;
        let direction = ActiveDirection::classify(-55.0, || {
            asked = true;
            false
        });
        assert_eq!(direction, ActiveDirection::Left);
        assert!(!asked);
    }
}
