use super::*;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Default)]
struct TransitionLog {
    updates: Vec<f32>,
    finished: usize,
    cancelled: usize,
}

struct SharedTransition(Rc<RefCell<TransitionLog>>);

impl InteractiveTransition for SharedTransition {
    fn update(&mut self, percent_complete: f32) {
        self.0.borrow_mut().updates.push(percent_complete);
    }

    fn finish(&mut self) {
        self.0.borrow_mut().finished += 1;
    }

    fn cancel(&mut self) {
        self.0.borrow_mut().cancelled += 1;
    }
}

struct Delegate {
    allow_reply: bool,
    provide_transition: bool,
    replies: usize,
    detail_requests: usize,
    prepared: usize,
    impacts: usize,
    transitions: Rc<RefCell<TransitionLog>>,
}

impl Delegate {
    fn new(allow_reply: bool) -> Self {
        Self {
            allow_reply,
            provide_transition: true,
            replies: 0,
            detail_requests: 0,
            prepared: 0,
            impacts: 0,
            transitions: Rc::default(),
        }
    }
}

impl SwipeDelegate for Delegate {
    fn should_allow_reply(&self, _: &InteractionId) -> bool {
        self.allow_reply
    }

    fn did_request_reply(&mut self, _: &InteractionId) {
        self.replies += 1;
    }

    fn did_request_detail(&mut self, _: &InteractionId) -> Option<Box<dyn InteractiveTransition>> {
        self.detail_requests += 1;
        self.provide_transition
            .then(|| Box::new(SharedTransition(self.transitions.clone())) as Box<dyn InteractiveTransition>)
    }

    fn prepare_detail_for_interactive_presentation(&mut self, _: &InteractionId) {
        self.prepared += 1;
    }

    fn host_view_width(&self) -> f32 {
        375.0
    }

    fn light_impact(&mut self) {
        self.impacts += 1;
    }
}

struct Host {
    laid_out: bool,
    content: Option<Point>,
    avatar: Option<Point>,
    icon: Option<Point>,
    reactions: Option<Point>,
    icon_alpha: f32,
    icon_style: Option<ReplyIconStyle>,
    animations_removed: usize,
}

impl Host {
    fn laid_out() -> Self {
        Self {
            laid_out: true,
            content: Some(Point::new(200.0, 40.0)),
            avatar: Some(Point::new(20.0, 60.0)),
            icon: Some(Point::new(60.0, 40.0)),
            reactions: Some(Point::new(90.0, 82.0)),
            icon_alpha: 0.0,
            icon_style: None,
            animations_removed: 0,
        }
    }

    fn slot(&mut self, target: SwipeTarget) -> &mut Option<Point> {
        match target {
            SwipeTarget::Content => &mut self.content,
            SwipeTarget::Avatar => &mut self.avatar,
            SwipeTarget::ReplyIcon => &mut self.icon,
            SwipeTarget::Reactions => &mut self.reactions,
        }
    }
}

impl SwipeViewHost for Host {
    fn is_laid_out(&self) -> bool {
        self.laid_out
    }

    fn has_content_view(&self) -> bool {
        self.content.is_some()
    }

    fn center(&self, target: SwipeTarget) -> Option<Point> {
        match target {
            SwipeTarget::Content => self.content,
            SwipeTarget::Avatar => self.avatar,
            SwipeTarget::ReplyIcon => self.icon,
            SwipeTarget::Reactions => self.reactions,
        }
    }

    fn set_center(&mut self, target: SwipeTarget, center: Point, _: Option<AnimationSpec>) {
        *self.slot(target) = Some(center);
    }

    fn set_reply_icon_alpha(&mut self, alpha: f32, _: Option<AnimationSpec>) {
        self.icon_alpha = alpha;
    }

    fn set_reply_icon_style(&mut self, style: ReplyIconStyle, _: Option<SpringSpec>) {
        self.icon_style = Some(style);
    }

    fn remove_swipe_animations(&mut self) {
        self.animations_removed += 1;
    }
}

fn id() -> InteractionId {
    InteractionId::from("message-1")
}

fn controller(store: &SwipeProgressStore) -> SwipeGestureController {
    SwipeGestureController::new(id(), SwipeConfig::default(), store)
}

fn drive(
    controller: &mut SwipeGestureController,
    offsets: &[f32],
    store: &mut SwipeProgressStore,
    delegate: &mut Delegate,
    host: &mut Host,
) {
    controller.begin(&DragSample::new(GesturePhase::Began, 0.0), store, delegate, host);
    for (step, offset) in offsets.iter().enumerate() {
        let sample = DragSample::new(GesturePhase::Changed, *offset).at(step as i64 * 16);
        controller.handle(&sample, store, delegate, host);
    }
}

#[test]
fn starts_inactive_and_prepares_detail() {
    let mut store = SwipeProgressStore::new();
    let mut delegate = Delegate::new(true);
    let mut host = Host::laid_out();
    let mut controller = controller(&store);

    controller.begin(&DragSample::new(GesturePhase::Began, 0.0), &mut store, &mut delegate, &mut host);

    assert_eq!(controller.active_direction(), ActiveDirection::None);
    assert_eq!(delegate.prepared, 1);
    assert_eq!(host.icon_style, Some(ReplyIconStyle::resting()));
    assert!(controller.reference().is_some());
}

#[test]
fn right_swipe_arms_only_when_reply_allowed() {
    for (allow_reply, expected) in [(true, ActiveDirection::Right), (false, ActiveDirection::None)] {
        let mut store = SwipeProgressStore::new();
        let mut delegate = Delegate::new(allow_reply);
        let mut host = Host::laid_out();
        let mut controller = controller(&store);

        drive(&mut controller, &[20.0, 55.0], &mut store, &mut delegate, &mut host);

        assert_eq!(controller.active_direction(), expected);
        assert_eq!(store.offset(&id()), 55.0);
    }
}

#[test]
fn left_swipe_arms_regardless_of_reply_eligibility() {
    let mut store = SwipeProgressStore::new();
    let mut delegate = Delegate::new(false);
    let mut host = Host::laid_out();
    let mut controller = controller(&store);

    drive(&mut controller, &[-55.0], &mut store, &mut delegate, &mut host);

    assert_eq!(controller.active_direction(), ActiveDirection::Left);
    assert_eq!(delegate.detail_requests, 1);
    assert_eq!(delegate.impacts, 1);
    assert!(controller.has_transition());
}

#[test]
fn releasing_right_requests_exactly_one_reply() {
    let mut store = SwipeProgressStore::new();
    let mut delegate = Delegate::new(true);
    let mut host = Host::laid_out();
    let mut controller = controller(&store);

    drive(&mut controller, &[30.0, 60.0, 90.0], &mut store, &mut delegate, &mut host);
    assert_eq!(host.icon_style, Some(ReplyIconStyle::armed(false)));
    controller.handle(
        &DragSample::new(GesturePhase::Ended, 90.0).with_velocity(200.0),
        &mut store,
        &mut delegate,
        &mut host,
    );

    assert_eq!(delegate.replies, 1);
    assert_eq!(delegate.detail_requests, 0);
}

#[test]
fn releasing_left_finishes_only_with_committed_velocity() {
    for (velocity, finished, cancelled) in [(-150.0, 1, 0), (0.0, 1, 0), (150.0, 0, 1)] {
        let mut store = SwipeProgressStore::new();
        let mut delegate = Delegate::new(true);
        let mut host = Host::laid_out();
        let mut controller = controller(&store);

        drive(&mut controller, &[-30.0, -70.0], &mut store, &mut delegate, &mut host);
        controller.handle(
            &DragSample::new(GesturePhase::Ended, -70.0).with_velocity(velocity),
            &mut store,
            &mut delegate,
            &mut host,
        );

        let log = delegate.transitions.borrow();
        assert_eq!(log.finished, finished, "velocity {velocity}");
        assert_eq!(log.cancelled, cancelled, "velocity {velocity}");
        assert_eq!(delegate.replies, 0);
    }
}

#[test]
fn leaving_left_cancels_the_transition() {
    let mut store = SwipeProgressStore::new();
    let mut delegate = Delegate::new(true);
    let mut host = Host::laid_out();
    let mut controller = controller(&store);

    drive(&mut controller, &[-60.0, -10.0], &mut store, &mut delegate, &mut host);

    assert_eq!(controller.active_direction(), ActiveDirection::None);
    assert!(!controller.has_transition());
    assert_eq!(delegate.transitions.borrow().cancelled, 1);
    assert_eq!(delegate.impacts, 1);
}

#[test]
fn left_swipe_drives_transition_progress() {
    let mut store = SwipeProgressStore::new();
    let mut delegate = Delegate::new(true);
    let mut host = Host::laid_out();
    let mut controller = controller(&store);

    controller.begin(&DragSample::new(GesturePhase::Began, 0.0), &mut store, &mut delegate, &mut host);
    let sample = DragSample::new(GesturePhase::Changed, -100.0).with_host_translation(-215.0);
    controller.handle(&sample, &mut store, &mut delegate, &mut host);

    let updates = delegate.transitions.borrow().updates.clone();
    assert_eq!(updates.len(), 1);
    assert!((updates[0] - 0.5).abs() < 1e-6, "got {}", updates[0]);
}

#[test]
fn missing_transition_is_recorded_not_fatal() {
    let mut store = SwipeProgressStore::new();
    let mut delegate = Delegate::new(true);
    delegate.provide_transition = false;
    let mut host = Host::laid_out();
    let mut controller = controller(&store);

    drive(&mut controller, &[-80.0], &mut store, &mut delegate, &mut host);
    controller.handle(&DragSample::new(GesturePhase::Ended, -80.0), &mut store, &mut delegate, &mut host);

    assert!(controller
        .violations()
        .iter()
        .all(|violation| matches!(violation, SwipeError::MissingInteractiveTransition { .. })));
    assert_eq!(controller.violations().len(), 2);
}

#[test]
fn terminal_states_restore_reference_and_zero_progress() {
    for phase in [GesturePhase::Ended, GesturePhase::Cancelled, GesturePhase::Failed] {
        let mut store = SwipeProgressStore::new();
        let mut delegate = Delegate::new(true);
        let mut host = Host::laid_out();
        let resting = (host.content, host.avatar, host.icon, host.reactions);
        let mut controller = controller(&store);

        drive(&mut controller, &[40.0, 120.0], &mut store, &mut delegate, &mut host);
        assert_ne!(host.content, resting.0);
        assert_ne!(host.reactions, resting.3);

        controller.handle(&DragSample::new(phase, 120.0), &mut store, &mut delegate, &mut host);

        assert_eq!(store.offset(&id()), 0.0, "{phase:?}");
        assert_eq!((host.content, host.avatar, host.icon, host.reactions), resting, "{phase:?}");
        assert_eq!(host.icon_alpha, 0.0);
        assert!(controller.reference().is_none());
        assert_eq!(controller.active_direction(), ActiveDirection::None);
    }
}

#[test]
fn apply_moves_views_relative_to_reference() {
    let mut store = SwipeProgressStore::new();
    let mut delegate = Delegate::new(true);
    let mut host = Host::laid_out();
    let mut controller = controller(&store);

    drive(&mut controller, &[95.0], &mut store, &mut delegate, &mut host);

    assert_eq!(host.content, Some(Point::new(265.0, 40.0)));
    assert_eq!(host.avatar, Some(Point::new(20.0 + 65.0 / 8.0, 60.0)));
    assert_eq!(host.icon, Some(Point::new(60.0 + 65.0 / 8.0, 40.0)));
    assert_eq!(host.reactions, Some(Point::new(155.0, 82.0)));
    assert_eq!(host.icon_alpha, 1.0);
}

#[test]
fn rtl_swipe_toward_leading_edge_is_reply() {
    let mut store = SwipeProgressStore::new();
    let mut delegate = Delegate::new(true);
    let mut host = Host::laid_out();
    let config = SwipeConfig {
        layout_direction: LayoutDirection::Rtl,
        ..SwipeConfig::default()
    };
    let mut controller = SwipeGestureController::new(id(), config, &store);

    drive(&mut controller, &[-70.0], &mut store, &mut delegate, &mut host);

    assert_eq!(controller.active_direction(), ActiveDirection::Right);
    assert_eq!(store.offset(&id()), 70.0);
    assert!(host.content.is_some_and(|center| center.x < 200.0));
}

#[test]
fn reference_waits_for_layout() {
    let store = SwipeProgressStore::new();
    let mut host = Host::laid_out();
    host.laid_out = false;
    let mut controller = controller(&store);

    assert!(!controller.capture_reference(&host));
    assert!(controller.violations().is_empty());
    assert!(!controller.can_begin(&host));
    assert!(matches!(
        controller.violations(),
        [SwipeError::MissingReference { .. }]
    ));

    host.laid_out = true;
    assert!(controller.capture_reference(&host));
}

#[test]
fn recycled_cell_resumes_stored_offset() {
    let mut store = SwipeProgressStore::new();
    let mut delegate = Delegate::new(true);
    let mut host = Host::laid_out();
    let mut first = controller(&store);
    drive(&mut first, &[30.0], &mut store, &mut delegate, &mut host);

    let mut recycled_host = Host::laid_out();
    let mut second = controller(&store);
    assert_eq!(second.progress(), Some(SwipeProgress::new(30.0)));
    second.refresh(&mut recycled_host);

    assert_eq!(recycled_host.content, Some(Point::new(230.0, 40.0)));
    assert_eq!(recycled_host.animations_removed, 1);
}

#[test]
fn relayout_retakes_reference_from_the_new_layout() {
    let mut store = SwipeProgressStore::new();
    let mut delegate = Delegate::new(true);
    let mut host = Host::laid_out();
    let mut controller = controller(&store);
    drive(&mut controller, &[30.0], &mut store, &mut delegate, &mut host);
    assert_eq!(host.content, Some(Point::new(230.0, 40.0)));

    let borderless = SwipeConfig {
        is_borderless: true,
        ..SwipeConfig::default()
    };
    controller.relayout(borderless, &store);
    assert!(controller.reference().is_none());
    assert_eq!(controller.progress(), Some(SwipeProgress::new(30.0)));
    assert!(controller.config().is_borderless);

    let mut grown = Host::laid_out();
    grown.content = Some(Point::new(250.0, 40.0));
    grown.reactions = Some(Point::new(120.0, 90.0));
    controller.refresh(&mut grown);

    assert_eq!(grown.content, Some(Point::new(280.0, 40.0)));
    assert_eq!(grown.reactions, Some(Point::new(150.0, 90.0)));
    assert_eq!(
        controller.reference().map(|reference| reference.content_center),
        Some(Point::new(250.0, 40.0))
    );
}

#[test]
fn reset_cancels_in_flight_transition() {
    let mut store = SwipeProgressStore::new();
    let mut delegate = Delegate::new(true);
    let mut host = Host::laid_out();
    let mut controller = controller(&store);

    drive(&mut controller, &[-90.0], &mut store, &mut delegate, &mut host);
    controller.reset();

    assert_eq!(delegate.transitions.borrow().cancelled, 1);
    assert!(controller.reference().is_none());
    assert!(controller.progress().is_none());
}

#[test]
fn transition_progress_is_clamped() {
    assert_eq!(transition_progress(10.0, 375.0), 0.0);
    assert_eq!(transition_progress(-375.0, 375.0), 1.0);
    assert_eq!(transition_progress(500.0, 40.0), 1.0);
}
