//! Animation parameters for msgcell.
//!
//! msgcell never runs animations itself; it hands these specs to the host's
//! animation engine alongside each transform command.

mod animation;

pub use animation::*;
