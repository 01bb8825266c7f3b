use std::cell::RefCell;
use std::rc::Rc;

use msgcell::CellDelegate;
use msgcell_foundation::swipe::{InteractionId, InteractiveTransition, SwipeDelegate};

#[derive(Debug, Default, PartialEq)]
pub struct TransitionLog {
    pub updates: Vec<f32>,
    pub finished: usize,
    pub cancelled: usize,
}

impl TransitionLog {
    pub fn last_update(&self) -> Option<f32> {
        self.updates.last().copied()
    }
}

/// Interactive transition that records what it was told.
pub struct FakeTransition {
    log: Rc<RefCell<TransitionLog>>,
}

impl FakeTransition {
    pub fn new(log: Rc<RefCell<TransitionLog>>) -> Self {
        Self { log }
    }
}

impl InteractiveTransition for FakeTransition {
    fn update(&mut self, percent_complete: f32) {
        self.log.borrow_mut().updates.push(percent_complete);
    }

    fn finish(&mut self) {
        self.log.borrow_mut().finished += 1;
    }

    fn cancel(&mut self) {
        self.log.borrow_mut().cancelled += 1;
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DelegateEvent {
    Reply(InteractionId),
    Detail(InteractionId),
    PrepareDetail(InteractionId),
    LightImpact,
    Select(InteractionId),
    Deselect(InteractionId),
    RetryFailedSend(InteractionId),
    TapSenderAvatar(InteractionId),
    RetryDownloads(InteractionId),
}

/// Cell delegate that records every callback.
pub struct RecordingCellDelegate {
    pub allow_reply: bool,
    pub is_selected: bool,
    /// Whether detail requests hand back a transition.
    pub provide_transition: bool,
    pub host_width: f32,
    pub events: Vec<DelegateEvent>,
    pub transitions: Vec<Rc<RefCell<TransitionLog>>>,
}

impl Default for RecordingCellDelegate {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingCellDelegate {
    pub fn new() -> Self {
        Self {
            allow_reply: true,
            is_selected: false,
            provide_transition: true,
            host_width: 375.0,
            events: Vec::new(),
            transitions: Vec::new(),
        }
    }

    pub fn with_reply_allowed(mut self, allow_reply: bool) -> Self {
        self.allow_reply = allow_reply;
        self
    }

    pub fn selected(mut self, is_selected: bool) -> Self {
        self.is_selected = is_selected;
        self
    }

    pub fn count(&self, matches: impl Fn(&DelegateEvent) -> bool) -> usize {
        self.events.iter().filter(|event| matches(event)).count()
    }

    pub fn replies(&self) -> usize {
        self.count(|event| matches!(event, DelegateEvent::Reply(_)))
    }

    pub fn last_transition(&self) -> Option<Rc<RefCell<TransitionLog>>> {
        self.transitions.last().cloned()
    }
}

impl SwipeDelegate for RecordingCellDelegate {
    fn should_allow_reply(&self, _interaction_id: &InteractionId) -> bool {
        self.allow_reply
    }

    fn did_request_reply(&mut self, interaction_id: &InteractionId) {
        self.events.push(DelegateEvent::Reply(interaction_id.clone()));
    }

    fn did_request_detail(&mut self, interaction_id: &InteractionId) -> Option<Box<dyn InteractiveTransition>> {
        self.events.push(DelegateEvent::Detail(interaction_id.clone()));
        if !self.provide_transition {
            return None;
        }
        let log = Rc::new(RefCell::new(TransitionLog::default()));
        self.transitions.push(log.clone());
        Some(Box::new(FakeTransition::new(log)))
    }

    fn prepare_detail_for_interactive_presentation(&mut self, interaction_id: &InteractionId) {
        self.events
            .push(DelegateEvent::PrepareDetail(interaction_id.clone()));
    }

    fn host_view_width(&self) -> f32 {
        self.host_width
    }

    fn light_impact(&mut self) {
        self.events.push(DelegateEvent::LightImpact);
    }
}

impl CellDelegate for RecordingCellDelegate {
    fn is_message_selected(&self, _interaction_id: &InteractionId) -> bool {
        self.is_selected
    }

    fn did_select(&mut self, interaction_id: &InteractionId) {
        self.is_selected = true;
        self.events.push(DelegateEvent::Select(interaction_id.clone()));
    }

    fn did_deselect(&mut self, interaction_id: &InteractionId) {
        self.is_selected = false;
        self.events.push(DelegateEvent::Deselect(interaction_id.clone()));
    }

    fn did_tap_failed_outgoing_message(&mut self, interaction_id: &InteractionId) {
        self.events
            .push(DelegateEvent::RetryFailedSend(interaction_id.clone()));
    }

    fn did_tap_sender_avatar(&mut self, interaction_id: &InteractionId) {
        self.events
            .push(DelegateEvent::TapSenderAvatar(interaction_id.clone()));
    }

    fn did_tap_failed_or_pending_downloads(&mut self, interaction_id: &InteractionId) {
        self.events
            .push(DelegateEvent::RetryDownloads(interaction_id.clone()));
    }
}
