//! Closed kind → value lookup used for both sub-renderers and their views.

use smallvec::SmallVec;

use crate::error::ContractViolation;
use crate::{ActiveSet, ComponentKind, SubRenderer};

/// One named slot per message subcomponent kind.
///
/// Lookups match exhaustively over [`ComponentKind`], so adding a kind
/// forces every slot user to decide where it lives.
#[derive(Debug)]
pub struct SubcomponentSlots<T> {
    sender_name: Option<T>,
    body_text: Option<T>,
    body_media: Option<T>,
    footer: Option<T>,
    sticker: Option<T>,
    view_once: Option<T>,
    quoted_reply: Option<T>,
    link_preview: Option<T>,
    reactions: Option<T>,
    audio_attachment: Option<T>,
    generic_attachment: Option<T>,
    contact_share: Option<T>,
    bottom_buttons: Option<T>,
}

impl<T> Default for SubcomponentSlots<T> {
    fn default() -> Self {
        Self {
            sender_name: None,
            body_text: None,
            body_media: None,
            footer: None,
            sticker: None,
            view_once: None,
            quoted_reply: None,
            link_preview: None,
            reactions: None,
            audio_attachment: None,
            generic_attachment: None,
            contact_share: None,
            bottom_buttons: None,
        }
    }
}

impl<T> SubcomponentSlots<T> {
    /// The slot for `kind`, or `None` for kinds a message cell never holds.
    pub fn slot(&self, kind: ComponentKind) -> Option<&Option<T>> {
        match kind {
            ComponentKind::SenderName => Some(&self.sender_name),
            ComponentKind::BodyText => Some(&self.body_text),
            ComponentKind::BodyMedia => Some(&self.body_media),
            ComponentKind::Footer => Some(&self.footer),
            ComponentKind::Sticker => Some(&self.sticker),
            ComponentKind::ViewOnce => Some(&self.view_once),
            ComponentKind::QuotedReply => Some(&self.quoted_reply),
            ComponentKind::LinkPreview => Some(&self.link_preview),
            ComponentKind::Reactions => Some(&self.reactions),
            ComponentKind::AudioAttachment => Some(&self.audio_attachment),
            ComponentKind::GenericAttachment => Some(&self.generic_attachment),
            ComponentKind::ContactShare => Some(&self.contact_share),
            ComponentKind::BottomButtons => Some(&self.bottom_buttons),
            ComponentKind::SenderAvatar
            | ComponentKind::SystemMessage
            | ComponentKind::DateHeader
            | ComponentKind::UnreadIndicator
            | ComponentKind::TypingIndicator
            | ComponentKind::ThreadDetails
            | ComponentKind::FailedOrPendingDownloads
            | ComponentKind::SendFailureBadge => None,
        }
    }

    pub fn slot_mut(&mut self, kind: ComponentKind) -> Option<&mut Option<T>> {
        match kind {
            ComponentKind::SenderName => Some(&mut self.sender_name),
            ComponentKind::BodyText => Some(&mut self.body_text),
            ComponentKind::BodyMedia => Some(&mut self.body_media),
            ComponentKind::Footer => Some(&mut self.footer),
            ComponentKind::Sticker => Some(&mut self.sticker),
            ComponentKind::ViewOnce => Some(&mut self.view_once),
            ComponentKind::QuotedReply => Some(&mut self.quoted_reply),
            ComponentKind::LinkPreview => Some(&mut self.link_preview),
            ComponentKind::Reactions => Some(&mut self.reactions),
            ComponentKind::AudioAttachment => Some(&mut self.audio_attachment),
            ComponentKind::GenericAttachment => Some(&mut self.generic_attachment),
            ComponentKind::ContactShare => Some(&mut self.contact_share),
            ComponentKind::BottomButtons => Some(&mut self.bottom_buttons),
            ComponentKind::SenderAvatar
            | ComponentKind::SystemMessage
            | ComponentKind::DateHeader
            | ComponentKind::UnreadIndicator
            | ComponentKind::TypingIndicator
            | ComponentKind::ThreadDetails
            | ComponentKind::FailedOrPendingDownloads
            | ComponentKind::SendFailureBadge => None,
        }
    }

    pub fn get(&self, kind: ComponentKind) -> Option<&T> {
        self.slot(kind).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, kind: ComponentKind) -> Option<&mut T> {
        self.slot_mut(kind).and_then(Option::as_mut)
    }

    pub fn contains(&self, kind: ComponentKind) -> bool {
        self.get(kind).is_some()
    }

    /// Fills (or clears) the slot for `kind`; kinds without a slot are a
    /// contract violation and leave the slots untouched.
    pub fn set(&mut self, kind: ComponentKind, value: Option<T>) -> Result<Option<T>, ContractViolation> {
        match self.slot_mut(kind) {
            Some(slot) => Ok(std::mem::replace(slot, value)),
            None => Err(ContractViolation::InvalidComponentKind { kind }),
        }
    }

    pub fn take(&mut self, kind: ComponentKind) -> Option<T> {
        self.slot_mut(kind).and_then(Option::take)
    }

    /// Occupied slots in [`ComponentKind::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (ComponentKind, &T)> + '_ {
        ComponentKind::ALL
            .into_iter()
            .filter_map(move |kind| self.get(kind).map(|value| (kind, value)))
    }

    pub fn kinds(&self) -> ActiveSet {
        self.iter().map(|(kind, _)| kind).collect()
    }
}

/// The active sub-renderers of one message.
///
/// Built once per composition and owned exclusively by it; a new message
/// state means a new registry.
#[derive(Default)]
pub struct SubcomponentRegistry {
    renderers: SubcomponentSlots<Box<dyn SubRenderer>>,
}

impl std::fmt::Debug for SubcomponentRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SubcomponentRegistry")
            .field(&self.active_set())
            .finish()
    }
}

impl SubcomponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: ComponentKind) -> Option<&dyn SubRenderer> {
        self.renderers.get(kind).map(|renderer| renderer.as_ref())
    }

    pub fn contains(&self, kind: ComponentKind) -> bool {
        self.renderers.contains(kind)
    }

    pub fn insert(&mut self, kind: ComponentKind, renderer: Box<dyn SubRenderer>) -> Result<(), ContractViolation> {
        if renderer.kind() != kind {
            return Err(ContractViolation::InvalidComponentKind {
                kind: renderer.kind(),
            });
        }
        self.renderers.set(kind, Some(renderer)).map(|_| ())
    }

    pub fn active_set(&self) -> ActiveSet {
        self.renderers.kinds()
    }

    /// Active renderers among `kinds`, in the order given.
    pub fn subcomponents(&self, kinds: &[ComponentKind]) -> SmallVec<[(ComponentKind, &dyn SubRenderer); 8]> {
        kinds
            .iter()
            .filter_map(|kind| self.get(*kind).map(|renderer| (*kind, renderer)))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ComponentKind, &dyn SubRenderer)> + '_ {
        self.renderers
            .iter()
            .map(|(kind, renderer)| (kind, renderer.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_subcomponent_kinds_have_no_slot() {
        let mut slots = SubcomponentSlots::<u32>::default();
        assert_eq!(
            slots.set(ComponentKind::SenderAvatar, Some(1)),
            Err(ContractViolation::InvalidComponentKind {
                kind: ComponentKind::SenderAvatar
            })
        );
        assert!(slots.get(ComponentKind::DateHeader).is_none());
        assert!(slots.kinds().is_empty());
    }

    #[test]
    fn slots_replace_and_iterate_in_kind_order() {
        let mut slots = SubcomponentSlots::default();
        assert_eq!(slots.set(ComponentKind::Footer, Some("footer")), Ok(None));
        assert_eq!(slots.set(ComponentKind::BodyText, Some("text")), Ok(None));
        assert_eq!(
            slots.set(ComponentKind::Footer, Some("footer 2")),
            Ok(Some("footer"))
        );

        let kinds: Vec<_> = slots.iter().map(|(kind, value)| (kind, *value)).collect();
        assert_eq!(
            kinds,
            vec![
                (ComponentKind::BodyText, "text"),
                (ComponentKind::Footer, "footer 2")
            ]
        );
        assert_eq!(slots.take(ComponentKind::BodyText), Some("text"));
        assert!(!slots.contains(ComponentKind::BodyText));
    }
}
