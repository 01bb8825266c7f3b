use msgcell_animation::{inverse_lerp, AnimationSpec, Easing, SpringSpec};
use msgcell_ui_graphics::Point;
use msgcell_ui_layout::LayoutDirection;

use super::{
    ActiveDirection, InteractionId, InteractiveTransition, ReplyIconStyle, SwipeDelegate,
    SwipeProgress, SwipeProgressStore, SwipeTarget, SwipeTransforms, SwipeViewHost,
};
use crate::gesture_constants::{
    MAX_DRAG_VELOCITY, REPLY_ICON_SPRING_DAMPING, REPLY_ICON_SPRING_MILLIS,
    REPLY_ICON_SPRING_VELOCITY, SWIPE_ACTION_OFFSET_THRESHOLD, SWIPE_RESET_ANIMATION_MILLIS,
    SWIPE_TRACKING_ANIMATION_MILLIS,
};
use crate::{DragSample, GesturePhase, SwipeError, VelocityTracker1D};

/// Resting centers of the swipe-tracked views, captured once per gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeReference {
    pub content_center: Point,
    pub avatar_center: Option<Point>,
    pub reply_icon_center: Option<Point>,
    pub reactions_center: Option<Point>,
}

/// Per-cell inputs that shape the swipe visuals.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SwipeConfig {
    pub layout_direction: LayoutDirection,
    /// Borderless messages fade the reply icon in instead of showing it.
    pub is_borderless: bool,
    pub is_dark_theme: bool,
}

/// Swipe state machine of one message cell.
///
/// Owns the per-gesture state (reference centers, active direction, the
/// detail transition); the offset itself round-trips through the shared
/// [`SwipeProgressStore`] so a recycled cell resumes where it left off.
pub struct SwipeGestureController {
    interaction_id: InteractionId,
    config: SwipeConfig,
    reference: Option<SwipeReference>,
    progress: Option<SwipeProgress>,
    active_direction: ActiveDirection,
    transition: Option<Box<dyn InteractiveTransition>>,
    velocity_tracker: VelocityTracker1D,
    violations: Vec<SwipeError>,
}

impl std::fmt::Debug for SwipeGestureController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwipeGestureController")
            .field("interaction_id", &self.interaction_id)
            .field("reference", &self.reference)
            .field("progress", &self.progress)
            .field("active_direction", &self.active_direction)
            .field("has_transition", &self.transition.is_some())
            .finish()
    }
}

impl SwipeGestureController {
    /// Controller for a freshly configured cell. Picks up any offset the
    /// store still holds for `interaction_id`.
    pub fn new(
        interaction_id: InteractionId,
        config: SwipeConfig,
        store: &SwipeProgressStore,
    ) -> Self {
        let progress = store.progress(&interaction_id);
        Self {
            interaction_id,
            config,
            reference: None,
            progress,
            active_direction: ActiveDirection::None,
            transition: None,
            velocity_tracker: VelocityTracker1D::new(),
            violations: Vec::new(),
        }
    }

    pub fn interaction_id(&self) -> &InteractionId {
        &self.interaction_id
    }

    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    pub fn active_direction(&self) -> ActiveDirection {
        self.active_direction
    }

    pub fn reference(&self) -> Option<&SwipeReference> {
        self.reference.as_ref()
    }

    pub fn progress(&self) -> Option<SwipeProgress> {
        self.progress
    }

    pub fn has_transition(&self) -> bool {
        self.transition.is_some()
    }

    pub fn violations(&self) -> &[SwipeError] {
        &self.violations
    }

    pub fn take_violations(&mut self) -> Vec<SwipeError> {
        std::mem::take(&mut self.violations)
    }

    fn record(&mut self, violation: SwipeError) {
        log::error!("{violation}");
        self.violations.push(violation);
    }

    /// Snapshots resting centers unless a reference is already held.
    /// Returns whether a reference is available afterwards.
    pub fn capture_reference(&mut self, host: &dyn SwipeViewHost) -> bool {
        if self.reference.is_some() {
            return true;
        }
        if !host.has_content_view() {
            self.record(SwipeError::MissingContentView {
                interaction_id: self.interaction_id.clone(),
            });
            return false;
        }
        let content_center = host.center(SwipeTarget::Content);
        let Some(content_center) = content_center.filter(|_| host.is_laid_out()) else {
            log::trace!(
                "swipe reference for {} deferred: cell not laid out",
                self.interaction_id
            );
            return false;
        };
        self.reference = Some(SwipeReference {
            content_center,
            avatar_center: host.center(SwipeTarget::Avatar),
            reply_icon_center: host.center(SwipeTarget::ReplyIcon),
            reactions_center: host.center(SwipeTarget::Reactions),
        });
        true
    }

    /// Whether a swipe pan may start: a reference must be capturable.
    pub fn can_begin(&mut self, host: &dyn SwipeViewHost) -> bool {
        if self.capture_reference(host) {
            return true;
        }
        self.record(SwipeError::MissingReference {
            interaction_id: self.interaction_id.clone(),
        });
        false
    }

    /// First sample of a swipe pan.
    pub fn begin(
        &mut self,
        sample: &DragSample,
        store: &mut SwipeProgressStore,
        delegate: &mut dyn SwipeDelegate,
        host: &mut dyn SwipeViewHost,
    ) {
        self.active_direction = ActiveDirection::None;
        self.velocity_tracker.reset();
        if let Some(mut stale) = self.transition.take() {
            stale.cancel();
        }
        self.capture_reference(host);
        self.update(sample, store, delegate, host);
        self.apply(host, false);
    }

    /// Every subsequent sample: tracks, releases, or abandons the swipe.
    pub fn handle(
        &mut self,
        sample: &DragSample,
        store: &mut SwipeProgressStore,
        delegate: &mut dyn SwipeDelegate,
        host: &mut dyn SwipeViewHost,
    ) {
        match sample.phase {
            GesturePhase::Changed => {
                self.update(sample, store, delegate, host);
                self.apply(host, true);
            }
            GesturePhase::Ended => {
                self.update(sample, store, delegate, host);
                self.apply(host, true);
                self.clear(store, host, true);
            }
            _ => self.clear(store, host, false),
        }
    }

    /// Stores the sample's offset and advances the direction state machine.
    pub fn update(
        &mut self,
        sample: &DragSample,
        store: &mut SwipeProgressStore,
        delegate: &mut dyn SwipeDelegate,
        host: &mut dyn SwipeViewHost,
    ) {
        let direction = self.config.layout_direction;
        self.velocity_tracker
            .add_sample(sample.uptime_millis, sample.translation.x);
        let x_offset = direction.correct(sample.translation.x);
        let x_velocity = direction.correct(sample.velocity.map_or_else(
            || self.velocity_tracker.velocity_with_max(MAX_DRAG_VELOCITY),
            |velocity| velocity.x,
        ));

        let has_finished = sample.phase == GesturePhase::Ended;
        let has_failed = matches!(sample.phase, GesturePhase::Failed | GesturePhase::Cancelled);
        let progress = if has_failed || has_finished {
            SwipeProgress::ZERO
        } else {
            SwipeProgress::new(x_offset)
        };
        store.set_progress(&self.interaction_id, progress);
        self.progress = Some(progress);

        let previous_direction = self.active_direction;
        let interaction_id = &self.interaction_id;
        let active_direction =
            ActiveDirection::classify(x_offset, || delegate.should_allow_reply(interaction_id));
        let did_change_direction = previous_direction != active_direction;
        self.active_direction = active_direction;

        if did_change_direction {
            log::debug!(
                "swipe {} direction {:?} -> {:?}",
                self.interaction_id,
                previous_direction,
                active_direction
            );
            match active_direction {
                ActiveDirection::Left => {
                    delegate.light_impact();
                    if let Some(mut stale) = self.transition.take() {
                        stale.cancel();
                    }
                    self.transition = delegate.did_request_detail(&self.interaction_id);
                }
                ActiveDirection::Right => {
                    delegate.light_impact();
                    self.cancel_transition();
                }
                ActiveDirection::None => self.cancel_transition(),
            }
        }

        let is_starting = sample.phase == GesturePhase::Began;
        if is_starting {
            delegate.prepare_detail_for_interactive_presentation(&self.interaction_id);
        }
        if is_starting || did_change_direction {
            let style = if active_direction == ActiveDirection::Right {
                ReplyIconStyle::armed(self.config.is_dark_theme)
            } else {
                ReplyIconStyle::resting()
            };
            let spring = did_change_direction.then(|| {
                SpringSpec::new(
                    REPLY_ICON_SPRING_MILLIS,
                    REPLY_ICON_SPRING_DAMPING,
                    REPLY_ICON_SPRING_VELOCITY,
                )
            });
            host.set_reply_icon_style(style, spring);
        }

        if has_finished {
            match active_direction {
                ActiveDirection::Left => match self.transition.take() {
                    // Only a drag still moving in the swipe direction commits.
                    Some(mut transition) if x_velocity <= 0.0 => transition.finish(),
                    Some(mut transition) => transition.cancel(),
                    None => self.record(SwipeError::MissingInteractiveTransition {
                        interaction_id: self.interaction_id.clone(),
                    }),
                },
                ActiveDirection::Right => delegate.did_request_reply(&self.interaction_id),
                ActiveDirection::None => {}
            }
            log::debug!("swipe {} released {:?}", self.interaction_id, active_direction);
        } else if active_direction == ActiveDirection::Left {
            let percent_complete = transition_progress(
                sample.host_translation_x,
                delegate.host_view_width(),
            );
            match self.transition.as_mut() {
                Some(transition) => transition.update(percent_complete),
                None => self.record(SwipeError::MissingInteractiveTransition {
                    interaction_id: self.interaction_id.clone(),
                }),
            }
        }
    }

    /// Moves the tracked views to match the current progress.
    pub fn apply(&mut self, host: &mut dyn SwipeViewHost, animated: bool) {
        if !host.has_content_view() {
            self.record(SwipeError::MissingContentView {
                interaction_id: self.interaction_id.clone(),
            });
            return;
        }
        let (Some(reference), Some(progress)) = (self.reference, self.progress) else {
            return;
        };
        let transforms = SwipeTransforms::compute(
            progress.x_offset,
            self.config.layout_direction,
            self.config.is_borderless,
        );

        let animation = if animated {
            Some(AnimationSpec::linear(SWIPE_TRACKING_ANIMATION_MILLIS).beginning_from_current_state())
        } else {
            host.remove_swipe_animations();
            None
        };

        host.set_reply_icon_alpha(transforms.reply_icon_alpha, animation);
        host.set_center(
            SwipeTarget::Content,
            reference.content_center.plus_x(transforms.content_dx),
            animation,
        );
        if let Some(center) = reference.avatar_center {
            host.set_center(SwipeTarget::Avatar, center.plus_x(transforms.avatar_dx), animation);
        }
        if let Some(center) = reference.reply_icon_center {
            host.set_center(
                SwipeTarget::ReplyIcon,
                center.plus_x(transforms.reply_icon_dx),
                animation,
            );
        }
        if let Some(center) = reference.reactions_center {
            host.set_center(
                SwipeTarget::Reactions,
                center.plus_x(transforms.reactions_dx),
                animation,
            );
        }
    }

    /// Ends the gesture: forgets the stored offset and returns every
    /// displaced view to its resting center.
    pub fn clear(&mut self, store: &mut SwipeProgressStore, host: &mut dyn SwipeViewHost, animated: bool) {
        store.reset_progress(&self.interaction_id);
        self.progress = None;
        self.active_direction = ActiveDirection::None;
        self.cancel_transition();

        if !host.has_content_view() {
            self.record(SwipeError::MissingContentView {
                interaction_id: self.interaction_id.clone(),
            });
            return;
        }
        let Some(reference) = self.reference.take() else {
            return;
        };

        let animation = if animated {
            Some(AnimationSpec::tween(SWIPE_RESET_ANIMATION_MILLIS, Easing::EaseInOut))
        } else {
            host.remove_swipe_animations();
            None
        };
        host.set_center(SwipeTarget::Content, reference.content_center, animation);
        if let Some(center) = reference.avatar_center {
            host.set_center(SwipeTarget::Avatar, center, animation);
        }
        if let Some(center) = reference.reply_icon_center {
            host.set_center(SwipeTarget::ReplyIcon, center, animation);
        }
        host.set_reply_icon_alpha(0.0, animation);
        if let Some(center) = reference.reactions_center {
            host.set_center(SwipeTarget::Reactions, center, animation);
        }
        log::debug!("swipe {} cleared", self.interaction_id);
    }

    /// Layout pass or visibility change: retries the reference capture and
    /// re-applies whatever offset is in flight.
    pub fn refresh(&mut self, host: &mut dyn SwipeViewHost) {
        self.capture_reference(host);
        self.apply(host, false);
    }

    /// The same message was configured again with a fresh layout. Centers
    /// captured from the old layout no longer hold; the offset is picked
    /// back up from `store` and re-applied once the reference is retaken.
    pub fn relayout(&mut self, config: SwipeConfig, store: &SwipeProgressStore) {
        self.config = config;
        self.reference = None;
        self.progress = store.progress(&self.interaction_id);
    }

    /// The cell is being reused; nothing of this gesture may leak.
    pub fn reset(&mut self) {
        self.cancel_transition();
        self.reference = None;
        self.progress = None;
        self.active_direction = ActiveDirection::None;
        self.velocity_tracker.reset();
    }

    fn cancel_transition(&mut self) {
        if let Some(mut transition) = self.transition.take() {
            transition.cancel();
        }
    }
}

/// Percent complete of the detail transition for a drag of
/// `host_translation_x` across a screen `host_width` wide.
pub fn transition_progress(host_translation_x: f32, host_width: f32) -> f32 {
    if host_width <= SWIPE_ACTION_OFFSET_THRESHOLD {
        return 1.0;
    }
    inverse_lerp(
        host_translation_x.abs(),
        SWIPE_ACTION_OFFSET_THRESHOLD,
        host_width,
    )
    .clamp(0.0, 1.0)
}

#[cfg(test)]
#[path = "../tests/swipe_controller_tests.rs"]
mod tests;
