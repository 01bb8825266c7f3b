use crate::swipe::InteractionId;

/// Non-fatal contract violations raised by the swipe controller.
///
/// The controller logs and records these, then degrades to a no-op.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SwipeError {
    /// The cell has no view for the swipe to move.
    MissingContentView { interaction_id: InteractionId },
    /// A swipe pan was requested before resting positions could be captured.
    MissingReference { interaction_id: InteractionId },
    /// The left swipe is active but the delegate produced no detail transition.
    MissingInteractiveTransition { interaction_id: InteractionId },
}

impl SwipeError {
    pub fn interaction_id(&self) -> &InteractionId {
        match self {
            SwipeError::MissingContentView { interaction_id }
            | SwipeError::MissingReference { interaction_id }
            | SwipeError::MissingInteractiveTransition { interaction_id } => interaction_id,
        }
    }
}

impl std::fmt::Display for SwipeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SwipeError::MissingContentView { interaction_id } => {
                write!(f, "missing swipe content view for {interaction_id}")
            }
            SwipeError::MissingReference { interaction_id } => {
                write!(f, "missing swipe reference for {interaction_id}")
            }
            SwipeError::MissingInteractiveTransition { interaction_id } => {
                write!(f, "missing interactive transition for {interaction_id}")
            }
        }
    }
}

impl std::error::Error for SwipeError {}
