//! Fakes and fixtures for testing msgcell

mod delegate;
mod localizer;
mod renderers;
mod state_builder;

pub use delegate::*;
pub use localizer::*;
pub use renderers::*;
pub use state_builder::*;

pub mod prelude {
    pub use crate::delegate::{DelegateEvent, FakeTransition, RecordingCellDelegate, TransitionLog};
    pub use crate::localizer::FakeLocalizer;
    pub use crate::renderers::{
        default_size, FakeComponentView, FakeRenderer, FakeRendererFactory, RendererLog,
    };
    pub use crate::state_builder::{MessageStateBuilder, TEN_FOURTEEN_MILLIS};
}
