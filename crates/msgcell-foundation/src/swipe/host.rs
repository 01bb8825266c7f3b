use msgcell_animation::{AnimationSpec, SpringSpec};
use msgcell_ui_graphics::Point;

use super::{InteractionId, ReplyIconStyle};

/// Views the swipe displaces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SwipeTarget {
    /// The bubble, or the bare content stack for bubble-less messages.
    Content,
    Avatar,
    ReplyIcon,
    Reactions,
}

/// Percent-driven presentation of the message detail screen.
pub trait InteractiveTransition {
    fn update(&mut self, percent_complete: f32);
    fn finish(&mut self);
    fn cancel(&mut self);
}

/// Callbacks into the conversation screen.
pub trait SwipeDelegate {
    fn should_allow_reply(&self, interaction_id: &InteractionId) -> bool;

    fn did_request_reply(&mut self, interaction_id: &InteractionId);

    /// Starts presenting the detail screen, driven by the returned transition.
    fn did_request_detail(
        &mut self,
        interaction_id: &InteractionId,
    ) -> Option<Box<dyn InteractiveTransition>>;

    fn prepare_detail_for_interactive_presentation(&mut self, interaction_id: &InteractionId);

    /// Width of the hosting screen, for transition progress.
    fn host_view_width(&self) -> f32;

    /// Light haptic when a swipe arms or disarms.
    fn light_impact(&mut self) {}
}

/// The rendered cell, as far as the swipe is concerned.
///
/// Centers are in the cell's coordinate space. `animation` is `None` for an
/// immediate change.
pub trait SwipeViewHost {
    /// False until the cell has a non-zero frame.
    fn is_laid_out(&self) -> bool;

    fn has_content_view(&self) -> bool;

    /// `None` when the cell has no such view.
    fn center(&self, target: SwipeTarget) -> Option<Point>;

    fn set_center(&mut self, target: SwipeTarget, center: Point, animation: Option<AnimationSpec>);

    fn set_reply_icon_alpha(&mut self, alpha: f32, animation: Option<AnimationSpec>);

    fn set_reply_icon_style(&mut self, style: ReplyIconStyle, spring: Option<SpringSpec>);

    /// Drops in-flight swipe animations so that the next change is immediate.
    fn remove_swipe_animations(&mut self);
}
