//! Chat message cell composition, measurement and interaction routing.
//!
//! Lists measure with [`MeasurementEngine::measure`]. When a message is
//! measured ahead of display, keep a `MeasurementCache` next to its
//! composition and go through [`MeasurementEngine::measure_with_cache`] so
//! the render-time pass reuses the prefetched stacks.

mod accessibility;
mod cell;
pub mod composer;
mod error;
mod kind;
pub mod measure;
mod placement;
mod registry;
mod renderer;
pub mod state;
mod style;
mod view;

pub use accessibility::*;
pub use cell::*;
pub use composer::{
    footer_overlays_media, sharp_corners, sharp_corners_for_quoted_reply, BubbleFill, BubbleStroke,
    BubbleStyle, CellComposer, Composition, LayoutGroupId, LayoutGroupSpec,
};
pub use error::ContractViolation;
pub use kind::*;
pub use measure::{MeasurementEngine, ReservedSpace};
pub use placement::*;
pub use registry::*;
pub use renderer::*;
pub use state::MessageState;
pub use style::*;
pub use view::*;

pub use msgcell_foundation::swipe::{InteractionId, SwipeProgressStore};
pub use msgcell_foundation::{DragSample, GesturePhase};

pub mod prelude {
    pub use crate::accessibility::{AccessibilityLabelBuilder, Localizer};
    pub use crate::cell::{CellDelegate, LongPressLocation, MessageCell, PanHandler, RenderItem};
    pub use crate::composer::{CellComposer, Composition, LayoutGroupId};
    pub use crate::error::ContractViolation;
    pub use crate::kind::{ActiveSet, ComponentKind};
    pub use crate::measure::MeasurementEngine;
    pub use crate::placement::CellPlacement;
    pub use crate::renderer::{RendererFactory, SubRenderer};
    pub use crate::state::MessageState;
    pub use crate::style::ConversationStyle;
    pub use crate::view::{ComponentView, MessageView};
    pub use msgcell_foundation::prelude::*;
}
