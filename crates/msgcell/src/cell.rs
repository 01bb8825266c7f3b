//! The root message cell: configures the view arena from a measured
//! composition and routes taps, long presses and pans.

use msgcell_foundation::swipe::{
    InteractionId, SwipeConfig, SwipeDelegate, SwipeGestureController, SwipeProgressStore,
};
use msgcell_foundation::{DragSample, GesturePhase};
use msgcell_ui_graphics::{Point, Rect};
use msgcell_ui_layout::CellMeasurement;

use crate::accessibility::{AccessibilityLabelBuilder, Localizer};
use crate::composer::{CellComposer, Composition};
use crate::error::{report, ContractViolation};
use crate::measure::MeasurementEngine;
use crate::placement::CellPlacement;
use crate::renderer::RendererFactory;
use crate::state::OutgoingStatus;
use crate::view::{MessageView, SwipeContent, ViewNode};
use crate::{ComponentKind, ConversationStyle, MessageState};

/// Callbacks from a message cell to the conversation hosting it.
pub trait CellDelegate: SwipeDelegate {
    fn is_message_selected(&self, interaction_id: &InteractionId) -> bool;

    fn did_select(&mut self, interaction_id: &InteractionId);

    fn did_deselect(&mut self, interaction_id: &InteractionId);

    /// Tap to retry a failed send.
    fn did_tap_failed_outgoing_message(&mut self, interaction_id: &InteractionId);

    fn did_tap_sender_avatar(&mut self, interaction_id: &InteractionId);

    fn did_tap_failed_or_pending_downloads(&mut self, interaction_id: &InteractionId);
}

/// What a long press at some location refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LongPressLocation {
    Sticker,
    Media,
    QuotedReply,
    Default,
}

/// Who owns a pan that started on the cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanHandler {
    /// Forwarded to the audio attachment.
    ScrubAudio,
    MessageSwipeAction,
}

/// A composed and measured message, ready to be rendered into a cell.
#[derive(Debug)]
pub struct RenderItem {
    pub composition: Composition,
    pub measurement: CellMeasurement,
    pub available_width: f32,
}

impl RenderItem {
    pub fn new(composition: Composition, measurement: CellMeasurement, available_width: f32) -> Self {
        Self {
            composition,
            measurement,
            available_width,
        }
    }

    /// Composes and measures `state` for a list `available_width` wide.
    pub fn build(
        state: &MessageState,
        style: &ConversationStyle,
        factory: &dyn RendererFactory,
        is_showing_selection_ui: bool,
        available_width: f32,
    ) -> Self {
        let composition = CellComposer::new(style, factory).compose(state, is_showing_selection_ui);
        let measurement = MeasurementEngine::new(style).measure(&composition, available_width);
        Self::new(composition, measurement, available_width)
    }

    pub fn interaction_id(&self) -> &InteractionId {
        &self.composition.state().interaction_id
    }
}

/// One reusable message cell.
#[derive(Debug)]
pub struct MessageCell {
    style: ConversationStyle,
    item: Option<RenderItem>,
    placement: CellPlacement,
    view: MessageView,
    swipe: Option<SwipeGestureController>,
    active_pan: Option<PanHandler>,
    violations: Vec<ContractViolation>,
}

impl MessageCell {
    pub fn new(style: ConversationStyle) -> Self {
        Self {
            style,
            item: None,
            placement: CellPlacement::default(),
            view: MessageView::new(),
            swipe: None,
            active_pan: None,
            violations: Vec::new(),
        }
    }

    pub fn style(&self) -> &ConversationStyle {
        &self.style
    }

    pub fn item(&self) -> Option<&RenderItem> {
        self.item.as_ref()
    }

    pub fn composition(&self) -> Option<&Composition> {
        self.item.as_ref().map(|item| &item.composition)
    }

    pub fn placement(&self) -> &CellPlacement {
        &self.placement
    }

    pub fn view(&self) -> &MessageView {
        &self.view
    }

    pub fn swipe(&self) -> Option<&SwipeGestureController> {
        self.swipe.as_ref()
    }

    pub fn active_pan(&self) -> Option<PanHandler> {
        self.active_pan
    }

    /// Violations from the current composition and everything the cell hit
    /// since it was configured.
    pub fn violations(&self) -> &[ContractViolation] {
        &self.violations
    }

    pub fn accessibility_label(&self) -> Option<&str> {
        self.view.accessibility_label.as_deref()
    }

    /// Renders `item` into the view arena.
    ///
    /// Reconfiguring with the same interaction keeps an in-flight swipe but
    /// retakes its resting centers on the next layout pass; another
    /// interaction drops it. Either way the offset comes from `store`.
    pub fn configure<D: CellDelegate>(
        &mut self,
        item: RenderItem,
        store: &SwipeProgressStore,
        delegate: &D,
        localizer: &dyn Localizer,
    ) {
        let interaction_id = item.interaction_id().clone();
        let composition = &item.composition;
        let state = composition.state();
        self.violations = composition.violations().to_vec();

        let config = SwipeConfig {
            layout_direction: self.style.layout_direction,
            is_borderless: state.is_borderless,
            is_dark_theme: self.style.is_dark_theme,
        };
        let keeps_swipe = self
            .swipe
            .as_ref()
            .is_some_and(|swipe| swipe.interaction_id() == &interaction_id);
        if keeps_swipe {
            if let Some(swipe) = self.swipe.as_mut() {
                swipe.relayout(config, store);
            }
        } else {
            if let Some(mut stale) = self.swipe.take() {
                stale.reset();
            }
            self.active_pan = None;
            self.swipe = Some(SwipeGestureController::new(interaction_id.clone(), config, store));
        }

        let placement =
            CellPlacement::place(composition, &item.measurement, &self.style, item.available_width);

        let view = &mut self.view;
        view.root.frame = Rect::new(
            0.0,
            0.0,
            item.available_width,
            item.measurement.cell_size.height,
        );
        view.selection = match placement.selection {
            Some(frame) => ViewNode {
                frame,
                ..ViewNode::default()
            },
            None => ViewNode {
                is_hidden: true,
                ..ViewNode::default()
            },
        };
        view.is_selected =
            placement.selection.is_some() && delegate.is_message_selected(&interaction_id);

        view.avatar = ViewNode {
            frame: placement.avatar.unwrap_or(Rect::ZERO),
            is_hidden: !composition.has_sender_avatar(),
            ..ViewNode::default()
        };
        view.avatar_image = if composition.has_sender_avatar() {
            state.sender_avatar.as_ref().map(|avatar| avatar.image_id.clone())
        } else {
            None
        };

        view.content_stack.frame = placement.content;
        if composition.bubble().is_some() {
            view.bubble.frame = placement.content;
            view.bubble.is_hidden = false;
            view.set_swipe_content(SwipeContent::Bubble, composition.has_sender_avatar_layout());
        } else {
            view.bubble = ViewNode {
                is_hidden: true,
                ..ViewNode::default()
            };
            view.set_swipe_content(SwipeContent::ContentStack, composition.has_sender_avatar_layout());
        }

        view.send_failure_badge = placement.send_failure_badge.map(|frame| ViewNode {
            frame,
            ..ViewNode::default()
        });
        view.reply_icon.frame = placement.reply_icon;

        self.configure_subcomponents(composition, &item.measurement, &placement);

        let label = AccessibilityLabelBuilder::new(localizer).build(composition.registry(), state);
        self.violations.extend(label.violations);
        self.view.accessibility_label = Some(label.text);

        self.placement = placement;
        self.item = Some(item);
    }

    fn configure_subcomponents(
        &mut self,
        composition: &Composition,
        measurement: &CellMeasurement,
        placement: &CellPlacement,
    ) {
        let interaction_id = &composition.state().interaction_id;
        let registry = composition.registry();
        for kind in ComponentKind::ALL {
            if !kind.is_message_subcomponent() {
                continue;
            }
            let existing = match self.view.subcomponent_view_mut(kind) {
                Ok(Some(view)) if view.kind() == kind => true,
                Ok(_) => false,
                Err(violation) => {
                    report(&mut self.violations, interaction_id, violation);
                    continue;
                }
            };
            let Some(renderer) = registry.get(kind) else {
                // The body text view is kept around for the next message.
                if kind != ComponentKind::BodyText {
                    if let Err(violation) = self.view.set_subcomponent_view(kind, None) {
                        report(&mut self.violations, interaction_id, violation);
                    }
                }
                continue;
            };
            if !existing {
                if let Err(violation) = self.view.set_subcomponent_view(kind, Some(renderer.build_view())) {
                    report(&mut self.violations, interaction_id, violation);
                    continue;
                }
            }
            let frame = placement.frame(kind);
            match self.view.subcomponent_view_mut(kind) {
                Ok(Some(view)) => {
                    // Members of an overlaid footer live inside the media
                    // view; every active kind otherwise has a frame.
                    view.set_frame(frame.unwrap_or(Rect::ZERO), None);
                    renderer.configure_for_rendering(view, measurement);
                }
                Ok(None) => report(
                    &mut self.violations,
                    interaction_id,
                    ContractViolation::MissingSubcomponentView { kind },
                ),
                Err(violation) => report(&mut self.violations, interaction_id, violation),
            }
        }
    }

    fn interaction_id(&self) -> Option<&InteractionId> {
        self.item.as_ref().map(RenderItem::interaction_id)
    }

    fn collect_swipe_violations(&mut self) {
        if let Some(swipe) = self.swipe.as_mut() {
            // Already logged by the controller.
            self.violations
                .extend(swipe.take_violations().into_iter().map(ContractViolation::from));
        }
    }

    /// Routes a tap at `location` (cell coordinates). Returns whether the
    /// tap was handled.
    pub fn handle_tap<D: CellDelegate>(&mut self, location: Point, delegate: &mut D) -> bool {
        let Some(item) = self.item.as_ref() else {
            return false;
        };
        let composition = &item.composition;
        let state = composition.state();
        let interaction_id = &state.interaction_id;

        if composition.is_showing_selection_ui() {
            if delegate.is_message_selected(interaction_id) {
                self.view.is_selected = false;
                delegate.did_deselect(interaction_id);
            } else {
                self.view.is_selected = true;
                delegate.did_select(interaction_id);
            }
            // Selection mode swallows every other tap.
            return true;
        }

        match state.outgoing_status() {
            Some(OutgoingStatus::Failed) => {
                delegate.did_tap_failed_outgoing_message(interaction_id);
                return true;
            }
            Some(OutgoingStatus::Sending) => return true,
            _ => {}
        }

        if composition.has_sender_avatar() && self.view.avatar.contains(location) {
            delegate.did_tap_sender_avatar(interaction_id);
            return true;
        }

        for (kind, renderer) in composition.registry().iter() {
            match self.view.subcomponent_view(kind) {
                Ok(Some(view)) if view.contains(location) => {
                    log::trace!("tap on {kind} of message {interaction_id}");
                    if renderer.handle_tap(location, view, delegate) {
                        return true;
                    }
                    break;
                }
                Ok(Some(_)) => {}
                Ok(None) => report(
                    &mut self.violations,
                    interaction_id,
                    ContractViolation::MissingSubcomponentView { kind },
                ),
                Err(violation) => report(&mut self.violations, interaction_id, violation),
            }
        }

        if state.has_failed_or_pending_downloads {
            delegate.did_tap_failed_or_pending_downloads(interaction_id);
            return true;
        }
        false
    }

    pub fn find_long_press_location(&self, location: Point) -> LongPressLocation {
        let hit = |kind: ComponentKind| {
            matches!(self.view.subcomponent_view(kind), Ok(Some(view)) if view.contains(location))
                && self
                    .composition()
                    .is_some_and(|composition| composition.registry().contains(kind))
        };
        if hit(ComponentKind::Sticker) {
            LongPressLocation::Sticker
        } else if hit(ComponentKind::BodyMedia)
            || hit(ComponentKind::AudioAttachment)
            || hit(ComponentKind::GenericAttachment)
        {
            LongPressLocation::Media
        } else if hit(ComponentKind::QuotedReply) {
            LongPressLocation::QuotedReply
        } else {
            LongPressLocation::Default
        }
    }

    /// Decides who owns a pan starting at `location`, or `None` if no one
    /// can take it.
    pub fn find_pan_handler(&mut self, location: Point) -> Option<PanHandler> {
        let composition = self.item.as_ref().map(|item| &item.composition)?;

        if let Some(audio) = composition.registry().get(ComponentKind::AudioAttachment) {
            if let Ok(Some(view)) = self.view.subcomponent_view(ComponentKind::AudioAttachment) {
                if view.contains(location) && audio.accepts_pan(location, view) {
                    return Some(PanHandler::ScrubAudio);
                }
            }
        }

        let swipe = self.swipe.as_mut()?;
        let handler = swipe
            .can_begin(&self.view)
            .then_some(PanHandler::MessageSwipeAction);
        self.collect_swipe_violations();
        handler
    }

    pub fn start_pan<D: CellDelegate>(
        &mut self,
        handler: PanHandler,
        sample: &DragSample,
        store: &mut SwipeProgressStore,
        delegate: &mut D,
    ) {
        debug_assert_eq!(sample.phase, GesturePhase::Began);
        self.active_pan = Some(handler);
        match handler {
            PanHandler::ScrubAudio => self.forward_audio_pan(sample, true),
            PanHandler::MessageSwipeAction => {
                if let Some(swipe) = self.swipe.as_mut() {
                    swipe.begin(sample, store, delegate, &mut self.view);
                }
                self.collect_swipe_violations();
            }
        }
    }

    pub fn handle_pan<D: CellDelegate>(
        &mut self,
        sample: &DragSample,
        store: &mut SwipeProgressStore,
        delegate: &mut D,
    ) {
        let Some(handler) = self.active_pan else {
            log::trace!("pan sample without an active pan");
            return;
        };
        match handler {
            PanHandler::ScrubAudio => self.forward_audio_pan(sample, false),
            PanHandler::MessageSwipeAction => {
                if let Some(swipe) = self.swipe.as_mut() {
                    swipe.handle(sample, store, delegate, &mut self.view);
                }
                self.collect_swipe_violations();
            }
        }
        if sample.phase.is_terminal() {
            self.active_pan = None;
        }
    }

    fn forward_audio_pan(&mut self, sample: &DragSample, is_start: bool) {
        let Some(item) = self.item.as_ref() else {
            return;
        };
        let interaction_id = &item.composition.state().interaction_id;
        let renderer = item.composition.registry().get(ComponentKind::AudioAttachment);
        match (renderer, self.view.subcomponent_view_mut(ComponentKind::AudioAttachment)) {
            (Some(renderer), Ok(Some(view))) => {
                if is_start {
                    renderer.start_pan(sample, view);
                } else {
                    renderer.handle_pan(sample, view);
                }
            }
            _ => report(
                &mut self.violations,
                interaction_id,
                ContractViolation::MissingSubcomponentView {
                    kind: ComponentKind::AudioAttachment,
                },
            ),
        }
    }

    /// Retries reference capture and re-applies the stored offset without
    /// animation.
    pub fn cell_did_layout_subviews(&mut self) {
        if let Some(swipe) = self.swipe.as_mut() {
            swipe.refresh(&mut self.view);
        }
        self.collect_swipe_violations();
    }

    pub fn cell_did_become_visible(&mut self) {
        self.view.set_is_cell_visible(true);
        self.cell_did_layout_subviews();
    }

    pub fn cell_did_end_displaying(&mut self) {
        self.view.set_is_cell_visible(false);
    }

    /// Returns the cell to a blank state before it shows another message.
    /// Any in-flight swipe is abandoned and its transition cancelled.
    pub fn prepare_for_reuse(&mut self) {
        if let Some(interaction_id) = self.interaction_id() {
            log::trace!("reusing cell of message {interaction_id}");
        }
        if let Some(mut swipe) = self.swipe.take() {
            swipe.reset();
        }
        self.active_pan = None;
        self.view.reset();
        self.item = None;
        self.placement = CellPlacement::default();
        self.violations.clear();
    }
}
