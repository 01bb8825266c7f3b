use msgcell_animation::inverse_lerp;
use msgcell_ui_graphics::Color;
use msgcell_ui_layout::LayoutDirection;

use crate::gesture_constants::{
    REPLY_ICON_ACTIVE_SCALE, RIGHT_OVERSCROLL_RESISTANCE, SWIPE_ACTION_OFFSET_THRESHOLD,
    SWIPE_REVEAL_PARALLAX_DIVISOR,
};

/// Compresses a leading-relative offset: a left swipe stops at the
/// threshold, a right swipe keeps moving at a quarter speed past it.
pub fn elastic_clamp(x_offset: f32) -> f32 {
    if x_offset < -SWIPE_ACTION_OFFSET_THRESHOLD {
        -SWIPE_ACTION_OFFSET_THRESHOLD
    } else if x_offset > SWIPE_ACTION_OFFSET_THRESHOLD {
        let overflow = x_offset - SWIPE_ACTION_OFFSET_THRESHOLD;
        SWIPE_ACTION_OFFSET_THRESHOLD + overflow / RIGHT_OVERSCROLL_RESISTANCE
    } else {
        x_offset
    }
}

/// Horizontal displacements (physical, already RTL-corrected) applied to the
/// swipe-tracked views for one offset.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SwipeTransforms {
    pub content_dx: f32,
    pub avatar_dx: f32,
    pub reply_icon_dx: f32,
    pub reactions_dx: f32,
    pub reply_icon_alpha: f32,
}

impl SwipeTransforms {
    pub fn compute(x_offset: f32, layout_direction: LayoutDirection, is_borderless: bool) -> Self {
        let clamped = elastic_clamp(x_offset);
        let is_swiping_left = clamped < 0.0;
        let position = layout_direction.correct(clamped);

        // Swiping right, the avatar and icon reveal themselves from under
        // the bubble at a fraction of its speed.
        let slow_position = if is_swiping_left {
            position
        } else {
            position / SWIPE_REVEAL_PARALLAX_DIVISOR
        };

        let reply_icon_alpha = if is_borderless {
            inverse_lerp(clamped, 0.0, SWIPE_ACTION_OFFSET_THRESHOLD).clamp(0.0, 1.0)
        } else if clamped != 0.0 {
            1.0
        } else {
            0.0
        };

        Self {
            content_dx: position,
            avatar_dx: slow_position,
            reply_icon_dx: slow_position,
            reactions_dx: position,
            reply_icon_alpha,
        }
    }
}

/// Scale and tint of the reply icon.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReplyIconStyle {
    pub scale: f32,
    pub tint: Color,
}

impl ReplyIconStyle {
    pub fn armed(is_dark_theme: bool) -> Self {
        Self {
            scale: REPLY_ICON_ACTIVE_SCALE,
            tint: if is_dark_theme {
                Color::GRAY_25
            } else {
                Color::GRAY_75
            },
        }
    }

    pub fn resting() -> Self {
        Self {
            scale: 1.0,
            tint: Color::GRAY_45,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elastic_clamp_resists_right_and_stops_left() {
        assert_eq!(elastic_clamp(30.0), 30.0);
        assert_eq!(elastic_clamp(55.0), 55.0);
        assert_eq!(elastic_clamp(95.0), 65.0);
        assert_eq!(elastic_clamp(-30.0), -30.0);
        assert_eq!(elastic_clamp(-200.0), -55.0);
    }

    #[test]
    fn right_swipe_reveals_with_parallax() {
        let transforms = SwipeTransforms::compute(95.0, LayoutDirection::Ltr, false);
        assert_eq!(transforms.content_dx, 65.0);
        assert_eq!(transforms.reactions_dx, 65.0);
        assert_eq!(transforms.avatar_dx, 65.0 / 8.0);
        assert_eq!(transforms.reply_icon_dx, 65.0 / 8.0);
        assert_eq!(transforms.reply_icon_alpha, 1.0);
    }

    #[test]
    fn left_swipe_moves_everything_together() {
        let transforms = SwipeTransforms::compute(-80.0, LayoutDirection::Ltr, false);
        assert_eq!(transforms.content_dx, -55.0);
        assert_eq!(transforms.avatar_dx, -55.0);
        assert_eq!(transforms.reply_icon_dx, -55.0);
    }

    #[test]
    fn rtl_flips_physical_displacement() {
        let transforms = SwipeTransforms::compute(40.0, LayoutDirection::Rtl, false);
        assert_eq!(transforms.content_dx, -40.0);
        assert_eq!(transforms.avatar_dx, -5.0);
    }

    #[test]
    fn borderless_icon_fades_in_over_threshold() {
        let halfway = SwipeTransforms::compute(27.5, LayoutDirection::Ltr, true);
        assert!((halfway.reply_icon_alpha - 0.5).abs() < 1e-6);
        assert_eq!(SwipeTransforms::compute(-20.0, LayoutDirection::Ltr, true).reply_icon_alpha, 0.0);
        assert_eq!(SwipeTransforms::compute(200.0, LayoutDirection::Ltr, true).reply_icon_alpha, 1.0);
        assert_eq!(SwipeTransforms::compute(0.0, LayoutDirection::Ltr, false).reply_icon_alpha, 0.0);
    }

    #[test]
    fn armed_icon_tint_follows_theme() {
        assert_eq!(ReplyIconStyle::armed(true).tint, Color::GRAY_25);
        assert_eq!(ReplyIconStyle::armed(false).tint, Color::GRAY_75);
        assert_eq!(ReplyIconStyle::armed(false).scale, REPLY_ICON_ACTIVE_SCALE);
        assert_eq!(ReplyIconStyle::resting().scale, 1.0);
    }
}
