use msgcell_foundation::swipe::InteractionId;
use msgcell_foundation::SwipeError;

use crate::ComponentKind;

/// A programming-contract violation inside one cell.
///
/// Never fatal: the offending piece is skipped and the violation is logged
/// and kept on the composition or cell for diagnostics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContractViolation {
    /// A footer was scheduled but the message carries no footer state.
    MissingFooterState,
    /// An active kind that should be spoken offered no description.
    MissingAccessibilityDescription { kind: ComponentKind },
    MissingAccessibilityAuthorName,
    /// An active kind has no view in the cell's arena.
    MissingSubcomponentView { kind: ComponentKind },
    /// A kind that is not a message subcomponent was used as one.
    InvalidComponentKind { kind: ComponentKind },
    /// A view reports a different kind than the slot it was put in.
    UnexpectedComponentView {
        expected: ComponentKind,
        actual: ComponentKind,
    },
    InvalidViewOnceStatus,
    MissingSwipeContentView,
    MissingSwipeReference,
    MissingInteractiveTransition,
}

impl std::fmt::Display for ContractViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContractViolation::MissingFooterState => write!(f, "missing footer state"),
            ContractViolation::MissingAccessibilityDescription { kind } => {
                write!(f, "{kind} has no accessibility description")
            }
            ContractViolation::MissingAccessibilityAuthorName => {
                write!(f, "missing accessibility author name")
            }
            ContractViolation::MissingSubcomponentView { kind } => {
                write!(f, "missing subcomponent view for {kind}")
            }
            ContractViolation::InvalidComponentKind { kind } => {
                write!(f, "{kind} is not a message subcomponent")
            }
            ContractViolation::UnexpectedComponentView { expected, actual } => {
                write!(f, "unexpected {actual} view in {expected} slot")
            }
            ContractViolation::InvalidViewOnceStatus => write!(f, "invalid view-once status"),
            ContractViolation::MissingSwipeContentView => write!(f, "missing swipe content view"),
            ContractViolation::MissingSwipeReference => write!(f, "missing swipe reference"),
            ContractViolation::MissingInteractiveTransition => {
                write!(f, "missing interactive transition")
            }
        }
    }
}

impl std::error::Error for ContractViolation {}

impl From<SwipeError> for ContractViolation {
    fn from(error: SwipeError) -> Self {
        match error {
            SwipeError::MissingContentView { .. } => ContractViolation::MissingSwipeContentView,
            SwipeError::MissingReference { .. } => ContractViolation::MissingSwipeReference,
            SwipeError::MissingInteractiveTransition { .. } => {
                ContractViolation::MissingInteractiveTransition
            }
        }
    }
}

/// Logs `violation` against `interaction_id` and keeps it.
pub(crate) fn report(
    violations: &mut Vec<ContractViolation>,
    interaction_id: &InteractionId,
    violation: ContractViolation,
) {
    log::error!("message {interaction_id}: {violation}");
    violations.push(violation);
}
