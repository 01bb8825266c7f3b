//! Fixed-size sub-renderers and their views.

use std::cell::RefCell;
use std::rc::Rc;

use msgcell::state::{
    AudioAttachmentState, BodyMediaState, BodyTextState, BottomButtonsState, ContactShareState,
    FooterState, GenericAttachmentState, LinkPreviewState, QuotedReplyState, ReactionsState,
    SenderNameState, StickerState, ViewOnceState,
};
use msgcell::{
    ActiveSet, BodyTextSource, CellDelegate, ComponentKind, ComponentView, FooterPlacement,
    RendererFactory, SubRenderer,
};
use msgcell_animation::AnimationSpec;
use msgcell_foundation::{DragSample, GesturePhase};
use msgcell_ui_graphics::{DirectionalCorners, Point, Rect, Size};
use msgcell_ui_layout::collections::map::HashMap;
use msgcell_ui_layout::CellMeasurement;

/// What the fake renderers were asked to do.
#[derive(Debug, Default)]
pub struct RendererLog {
    pub built_views: Vec<ComponentKind>,
    pub configured: Vec<ComponentKind>,
    pub taps: Vec<ComponentKind>,
    pub pans: Vec<(ComponentKind, GesturePhase)>,
    pub footer_placements: Vec<FooterPlacement>,
    /// Whether the body media was built with a footer overlay.
    pub media_footer_overlay: Option<bool>,
    pub quoted_reply_corners: Option<DirectionalCorners>,
    pub remotely_deleted_body: bool,
}

pub type SharedRendererLog = Rc<RefCell<RendererLog>>;

/// Size the fakes report for `kind` unless overridden.
pub fn default_size(kind: ComponentKind) -> Size {
    match kind {
        ComponentKind::SenderName => Size::new(120.0, 20.0),
        ComponentKind::BodyText => Size::new(200.0, 40.0),
        ComponentKind::BodyMedia => Size::new(240.0, 180.0),
        ComponentKind::Footer => Size::new(80.0, 16.0),
        ComponentKind::Sticker => Size::new(160.0, 160.0),
        ComponentKind::ViewOnce => Size::new(150.0, 40.0),
        ComponentKind::QuotedReply => Size::new(220.0, 56.0),
        ComponentKind::LinkPreview => Size::new(240.0, 80.0),
        ComponentKind::Reactions => Size::new(60.0, 24.0),
        ComponentKind::AudioAttachment => Size::new(220.0, 50.0),
        ComponentKind::GenericAttachment => Size::new(220.0, 60.0),
        ComponentKind::ContactShare => Size::new(220.0, 70.0),
        ComponentKind::BottomButtons => Size::new(240.0, 44.0),
        _ => Size::ZERO,
    }
}

pub struct FakeRenderer {
    kind: ComponentKind,
    size: Size,
    description: Option<String>,
    handles_taps: bool,
    accepts_pans: bool,
    log: SharedRendererLog,
}

impl FakeRenderer {
    pub fn new(kind: ComponentKind, size: Size, log: SharedRendererLog) -> Self {
        Self {
            kind,
            size,
            description: None,
            handles_taps: false,
            accepts_pans: false,
            log,
        }
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn handling_taps(mut self, handles_taps: bool) -> Self {
        self.handles_taps = handles_taps;
        self
    }

    pub fn accepting_pans(mut self, accepts_pans: bool) -> Self {
        self.accepts_pans = accepts_pans;
        self
    }
}

impl SubRenderer for FakeRenderer {
    fn kind(&self) -> ComponentKind {
        self.kind
    }

    /// Fixed size, narrowed to `max_width`.
    fn measure(&self, max_width: f32) -> Size {
        Size::new(self.size.width.min(max_width.max(0.0)), self.size.height)
    }

    fn build_view(&self) -> Box<dyn ComponentView> {
        self.log.borrow_mut().built_views.push(self.kind);
        Box::new(FakeComponentView::new(self.kind))
    }

    fn configure_for_rendering(&self, view: &mut dyn ComponentView, _measurement: &CellMeasurement) {
        assert_eq!(view.kind(), self.kind);
        self.log.borrow_mut().configured.push(self.kind);
    }

    fn handle_tap(&self, _location: Point, _view: &dyn ComponentView, _delegate: &mut dyn CellDelegate) -> bool {
        self.log.borrow_mut().taps.push(self.kind);
        self.handles_taps
    }

    fn accessibility_description(&self) -> Option<String> {
        self.description.clone()
    }

    fn accepts_pan(&self, _location: Point, _view: &dyn ComponentView) -> bool {
        self.accepts_pans
    }

    fn start_pan(&self, sample: &DragSample, _view: &mut dyn ComponentView) {
        self.log.borrow_mut().pans.push((self.kind, sample.phase));
    }

    fn handle_pan(&self, sample: &DragSample, _view: &mut dyn ComponentView) {
        self.log.borrow_mut().pans.push((self.kind, sample.phase));
    }
}

#[derive(Debug)]
pub struct FakeComponentView {
    kind: ComponentKind,
    frame: Rect,
    pub animation: Option<AnimationSpec>,
    pub is_cell_visible: bool,
    pub reset_count: usize,
}

impl FakeComponentView {
    pub fn new(kind: ComponentKind) -> Self {
        Self {
            kind,
            frame: Rect::ZERO,
            animation: None,
            is_cell_visible: false,
            reset_count: 0,
        }
    }
}

impl ComponentView for FakeComponentView {
    fn kind(&self) -> ComponentKind {
        self.kind
    }

    fn frame(&self) -> Rect {
        self.frame
    }

    fn set_frame(&mut self, frame: Rect, animation: Option<AnimationSpec>) {
        self.frame = frame;
        self.animation = animation;
    }

    fn reset(&mut self) {
        self.frame = Rect::ZERO;
        self.animation = None;
        self.reset_count += 1;
    }

    fn set_is_cell_visible(&mut self, is_visible: bool) {
        self.is_cell_visible = is_visible;
    }

    fn remove_animations(&mut self) {
        self.animation = None;
    }
}

/// Builds [`FakeRenderer`]s with per-kind sizes and behaviors.
pub struct FakeRendererFactory {
    sizes: HashMap<ComponentKind, Size>,
    without_description: ActiveSet,
    tap_handlers: ActiveSet,
    pan_acceptors: ActiveSet,
    /// `(asked, reported)`: renderers built for `asked` claim to be `reported`.
    misreported: Option<(ComponentKind, ComponentKind)>,
    log: SharedRendererLog,
}

impl Default for FakeRendererFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeRendererFactory {
    pub fn new() -> Self {
        Self {
            sizes: HashMap::default(),
            without_description: ActiveSet::EMPTY,
            tap_handlers: ActiveSet::EMPTY,
            pan_acceptors: ActiveSet::EMPTY,
            misreported: None,
            log: SharedRendererLog::default(),
        }
    }

    pub fn with_size(mut self, kind: ComponentKind, size: Size) -> Self {
        self.sizes.insert(kind, size);
        self
    }

    pub fn without_description(mut self, kind: ComponentKind) -> Self {
        self.without_description.insert(kind);
        self
    }

    pub fn handling_taps(mut self, kind: ComponentKind) -> Self {
        self.tap_handlers.insert(kind);
        self
    }

    pub fn accepting_pans(mut self, kind: ComponentKind) -> Self {
        self.pan_acceptors.insert(kind);
        self
    }

    pub fn misreporting(mut self, asked: ComponentKind, reported: ComponentKind) -> Self {
        self.misreported = Some((asked, reported));
        self
    }

    pub fn log(&self) -> SharedRendererLog {
        self.log.clone()
    }

    pub fn size(&self, kind: ComponentKind) -> Size {
        self.sizes
            .get(&kind)
            .copied()
            .unwrap_or_else(|| default_size(kind))
    }

    fn renderer(&self, kind: ComponentKind, description: Option<String>) -> Box<dyn SubRenderer> {
        let reported = match self.misreported {
            Some((asked, reported)) if asked == kind => reported,
            _ => kind,
        };
        let description = description.filter(|_| !self.without_description.contains(kind));
        Box::new(
            FakeRenderer::new(reported, self.size(kind), self.log.clone())
                .with_description(description)
                .handling_taps(self.tap_handlers.contains(kind))
                .accepting_pans(self.pan_acceptors.contains(kind)),
        )
    }
}

impl RendererFactory for FakeRendererFactory {
    fn sender_name(&self, _state: &SenderNameState) -> Box<dyn SubRenderer> {
        self.renderer(ComponentKind::SenderName, None)
    }

    fn body_text(&self, source: BodyTextSource<'_>) -> Box<dyn SubRenderer> {
        let description = match source {
            BodyTextSource::Text(BodyTextState { text }) => text.clone(),
            BodyTextSource::RemotelyDeleted => {
                self.log.borrow_mut().remotely_deleted_body = true;
                "This message was deleted.".to_string()
            }
        };
        self.renderer(ComponentKind::BodyText, Some(description))
    }

    fn body_media(
        &self,
        state: &BodyMediaState,
        footer_overlay: Option<Box<dyn SubRenderer>>,
    ) -> Box<dyn SubRenderer> {
        self.log.borrow_mut().media_footer_overlay = Some(footer_overlay.is_some());
        let description = if state.item_count > 1 {
            format!("{} pictures", state.item_count)
        } else {
            "a picture".to_string()
        };
        self.renderer(ComponentKind::BodyMedia, Some(description))
    }

    fn footer(&self, _state: &FooterState, placement: FooterPlacement) -> Box<dyn SubRenderer> {
        self.log.borrow_mut().footer_placements.push(placement);
        self.renderer(ComponentKind::Footer, None)
    }

    fn sticker(&self, _state: &StickerState) -> Box<dyn SubRenderer> {
        self.renderer(ComponentKind::Sticker, Some("a sticker".to_string()))
    }

    fn view_once(&self, _state: &ViewOnceState) -> Box<dyn SubRenderer> {
        self.renderer(ComponentKind::ViewOnce, Some("view-once media".to_string()))
    }

    fn quoted_reply(&self, _state: &QuotedReplyState, sharp_corners: DirectionalCorners) -> Box<dyn SubRenderer> {
        self.log.borrow_mut().quoted_reply_corners = Some(sharp_corners);
        self.renderer(ComponentKind::QuotedReply, None)
    }

    fn link_preview(&self, _state: &LinkPreviewState) -> Box<dyn SubRenderer> {
        self.renderer(ComponentKind::LinkPreview, None)
    }

    fn reactions(&self, _state: &ReactionsState) -> Box<dyn SubRenderer> {
        self.renderer(ComponentKind::Reactions, None)
    }

    fn audio_attachment(&self, _state: &AudioAttachmentState) -> Box<dyn SubRenderer> {
        self.renderer(ComponentKind::AudioAttachment, Some("a voice message".to_string()))
    }

    fn generic_attachment(&self, state: &GenericAttachmentState) -> Box<dyn SubRenderer> {
        self.renderer(ComponentKind::GenericAttachment, Some(state.file_name.clone()))
    }

    fn contact_share(&self, state: &ContactShareState) -> Box<dyn SubRenderer> {
        self.renderer(ComponentKind::ContactShare, Some(state.display_name.clone()))
    }

    fn bottom_buttons(&self, _state: &BottomButtonsState) -> Box<dyn SubRenderer> {
        self.renderer(ComponentKind::BottomButtons, None)
    }
}
