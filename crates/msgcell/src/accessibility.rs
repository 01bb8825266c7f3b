//! Spoken summary of a whole message.

use crate::error::{report, ContractViolation};
use crate::{ComponentKind, MessageState, SubcomponentRegistry};

/// Kinds read out, in reading order: media before the text that captions it.
///
/// Footer status, the sender avatar, quotes, link previews, reactions,
/// buttons and the failure badge are left out to keep the summary short.
pub const ACCESSIBILITY_ORDER: [ComponentKind; 7] = [
    ComponentKind::BodyMedia,
    ComponentKind::BodyText,
    ComponentKind::Sticker,
    ComponentKind::ViewOnce,
    ComponentKind::AudioAttachment,
    ComponentKind::GenericAttachment,
    ComponentKind::ContactShare,
];

/// Localized phrases the label is assembled from.
pub trait Localizer {
    /// "Lilia sent:"
    fn sender_sent(&self, author_name: &str) -> String;

    /// "You sent:"
    fn local_user_sent(&self) -> String;

    /// Long-form time of day.
    fn long_timestamp(&self, timestamp_millis: i64) -> String;
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccessibilityLabel {
    pub text: String,
    pub violations: Vec<ContractViolation>,
}

pub struct AccessibilityLabelBuilder<'a> {
    localizer: &'a dyn Localizer,
}

impl<'a> AccessibilityLabelBuilder<'a> {
    pub fn new(localizer: &'a dyn Localizer) -> Self {
        Self { localizer }
    }

    /// `"<attribution> <part>, <part>, <timestamp>"`, e.g.
    /// `"Lilia sent: a picture, check out my selfie, 10:14 AM"`.
    pub fn build(&self, registry: &SubcomponentRegistry, state: &MessageState) -> AccessibilityLabel {
        let id = &state.interaction_id;
        let mut violations = Vec::new();
        let mut elements: Vec<String> = Vec::with_capacity(2);

        if state.is_incoming() {
            match &state.accessibility_author_name {
                Some(name) => elements.push(self.localizer.sender_sent(name)),
                None => report(&mut violations, id, ContractViolation::MissingAccessibilityAuthorName),
            }
        } else {
            elements.push(self.localizer.local_user_sent());
        }

        let mut contents: Vec<String> = Vec::with_capacity(ACCESSIBILITY_ORDER.len() + 1);
        for (kind, renderer) in registry.subcomponents(&ACCESSIBILITY_ORDER) {
            match renderer.accessibility_description() {
                Some(description) => contents.push(description),
                None => report(
                    &mut violations,
                    id,
                    ContractViolation::MissingAccessibilityDescription { kind },
                ),
            }
        }
        contents.push(self.localizer.long_timestamp(state.timestamp_millis));
        elements.push(contents.join(", "));

        AccessibilityLabel {
            text: elements.join(" "),
            violations,
        }
    }
}
