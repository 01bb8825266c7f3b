//! Seams to the per-part renderers, which live outside this crate.

use msgcell_foundation::DragSample;
use msgcell_ui_graphics::{DirectionalCorners, Point, Size};
use msgcell_ui_layout::CellMeasurement;

use crate::state::{
    AudioAttachmentState, BodyMediaState, BodyTextState, BottomButtonsState, ContactShareState,
    FooterState, GenericAttachmentState, LinkPreviewState, QuotedReplyState, ReactionsState,
    SenderNameState, StickerState, ViewOnceState,
};
use crate::{CellDelegate, ComponentKind, ComponentView};

/// Renders one message part. One instance per active kind per cell.
///
/// Renderers only report sizes and configure their own views; where the
/// view ends up is decided by the cell.
pub trait SubRenderer {
    fn kind(&self) -> ComponentKind;

    /// Size needed when at most `max_width` wide. Must be pure.
    fn measure(&self, max_width: f32) -> Size;

    fn build_view(&self) -> Box<dyn ComponentView>;

    fn configure_for_rendering(&self, view: &mut dyn ComponentView, measurement: &CellMeasurement);

    /// `location` is in cell coordinates. Returns whether the tap was handled.
    fn handle_tap(
        &self,
        _location: Point,
        _view: &dyn ComponentView,
        _delegate: &mut dyn CellDelegate,
    ) -> bool {
        false
    }

    /// Spoken summary of this part, for kinds that are read out.
    fn accessibility_description(&self) -> Option<String> {
        None
    }

    /// Whether this part wants to own a pan that starts at `location`
    /// (audio scrubbing).
    fn accepts_pan(&self, _location: Point, _view: &dyn ComponentView) -> bool {
        false
    }

    fn start_pan(&self, _sample: &DragSample, _view: &mut dyn ComponentView) {}

    fn handle_pan(&self, _sample: &DragSample, _view: &mut dyn ComponentView) {}
}

/// How a footer renderer is placed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FooterPlacement {
    /// Drawn as a badge inside the body media.
    pub is_overlaying_media: bool,
    /// Drawn below a transparent bubble rather than inside it.
    pub is_outside_bubble: bool,
}

/// What the body text renderer shows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BodyTextSource<'a> {
    Text(&'a BodyTextState),
    /// The "this message was deleted" tombstone.
    RemotelyDeleted,
}

/// Builds sub-renderers from message state.
pub trait RendererFactory {
    fn sender_name(&self, state: &SenderNameState) -> Box<dyn SubRenderer>;

    fn body_text(&self, source: BodyTextSource<'_>) -> Box<dyn SubRenderer>;

    /// `footer_overlay` is drawn inside the media when present.
    fn body_media(
        &self,
        state: &BodyMediaState,
        footer_overlay: Option<Box<dyn SubRenderer>>,
    ) -> Box<dyn SubRenderer>;

    fn footer(&self, state: &FooterState, placement: FooterPlacement) -> Box<dyn SubRenderer>;

    fn sticker(&self, state: &StickerState) -> Box<dyn SubRenderer>;

    fn view_once(&self, state: &ViewOnceState) -> Box<dyn SubRenderer>;

    fn quoted_reply(
        &self,
        state: &QuotedReplyState,
        sharp_corners: DirectionalCorners,
    ) -> Box<dyn SubRenderer>;

    fn link_preview(&self, state: &LinkPreviewState) -> Box<dyn SubRenderer>;

    fn reactions(&self, state: &ReactionsState) -> Box<dyn SubRenderer>;

    fn audio_attachment(&self, state: &AudioAttachmentState) -> Box<dyn SubRenderer>;

    fn generic_attachment(&self, state: &GenericAttachmentState) -> Box<dyn SubRenderer>;

    fn contact_share(&self, state: &ContactShareState) -> Box<dyn SubRenderer>;

    fn bottom_buttons(&self, state: &BottomButtonsState) -> Box<dyn SubRenderer>;
}
