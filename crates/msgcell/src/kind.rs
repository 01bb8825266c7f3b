//! The closed set of message parts and sets over it.

use std::fmt;

/// One visual part a conversation item may consist of.
///
/// Only the subset for which [`ComponentKind::is_message_subcomponent`] holds
/// is rendered by a message cell through a sub-renderer; the rest are
/// rendered by sibling cell types or drawn directly by the cell's chrome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ComponentKind {
    SenderName,
    BodyText,
    BodyMedia,
    Footer,
    Sticker,
    ViewOnce,
    QuotedReply,
    LinkPreview,
    Reactions,
    AudioAttachment,
    GenericAttachment,
    ContactShare,
    BottomButtons,
    SenderAvatar,
    SystemMessage,
    DateHeader,
    UnreadIndicator,
    TypingIndicator,
    ThreadDetails,
    FailedOrPendingDownloads,
    SendFailureBadge,
}

impl ComponentKind {
    pub const COUNT: usize = 21;

    pub const ALL: [ComponentKind; Self::COUNT] = [
        ComponentKind::SenderName,
        ComponentKind::BodyText,
        ComponentKind::BodyMedia,
        ComponentKind::Footer,
        ComponentKind::Sticker,
        ComponentKind::ViewOnce,
        ComponentKind::QuotedReply,
        ComponentKind::LinkPreview,
        ComponentKind::Reactions,
        ComponentKind::AudioAttachment,
        ComponentKind::GenericAttachment,
        ComponentKind::ContactShare,
        ComponentKind::BottomButtons,
        ComponentKind::SenderAvatar,
        ComponentKind::SystemMessage,
        ComponentKind::DateHeader,
        ComponentKind::UnreadIndicator,
        ComponentKind::TypingIndicator,
        ComponentKind::ThreadDetails,
        ComponentKind::FailedOrPendingDownloads,
        ComponentKind::SendFailureBadge,
    ];

    /// Position in [`ComponentKind::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            ComponentKind::SenderName => "senderName",
            ComponentKind::BodyText => "bodyText",
            ComponentKind::BodyMedia => "bodyMedia",
            ComponentKind::Footer => "footer",
            ComponentKind::Sticker => "sticker",
            ComponentKind::ViewOnce => "viewOnce",
            ComponentKind::QuotedReply => "quotedReply",
            ComponentKind::LinkPreview => "linkPreview",
            ComponentKind::Reactions => "reactions",
            ComponentKind::AudioAttachment => "audioAttachment",
            ComponentKind::GenericAttachment => "genericAttachment",
            ComponentKind::ContactShare => "contactShare",
            ComponentKind::BottomButtons => "bottomButtons",
            ComponentKind::SenderAvatar => "senderAvatar",
            ComponentKind::SystemMessage => "systemMessage",
            ComponentKind::DateHeader => "dateHeader",
            ComponentKind::UnreadIndicator => "unreadIndicator",
            ComponentKind::TypingIndicator => "typingIndicator",
            ComponentKind::ThreadDetails => "threadDetails",
            ComponentKind::FailedOrPendingDownloads => "failedOrPendingDownloads",
            ComponentKind::SendFailureBadge => "sendFailureBadge",
        }
    }

    /// Whether a message cell renders this kind with a sub-renderer.
    pub fn is_message_subcomponent(self) -> bool {
        match self {
            ComponentKind::SenderName
            | ComponentKind::BodyText
            | ComponentKind::BodyMedia
            | ComponentKind::Footer
            | ComponentKind::Sticker
            | ComponentKind::ViewOnce
            | ComponentKind::QuotedReply
            | ComponentKind::LinkPreview
            | ComponentKind::Reactions
            | ComponentKind::AudioAttachment
            | ComponentKind::GenericAttachment
            | ComponentKind::ContactShare
            | ComponentKind::BottomButtons => true,
            // Drawn by the cell's chrome.
            ComponentKind::SenderAvatar | ComponentKind::SendFailureBadge => false,
            ComponentKind::SystemMessage
            | ComponentKind::DateHeader
            | ComponentKind::UnreadIndicator
            | ComponentKind::TypingIndicator
            | ComponentKind::ThreadDetails
            | ComponentKind::FailedOrPendingDownloads => false,
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Set of component kinds, iterated in [`ComponentKind::ALL`] order.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ActiveSet(u32);

impl ActiveSet {
    pub const EMPTY: ActiveSet = ActiveSet(0);

    pub fn insert(&mut self, kind: ComponentKind) {
        self.0 |= 1 << kind.index();
    }

    pub fn remove(&mut self, kind: ComponentKind) {
        self.0 &= !(1 << kind.index());
    }

    pub fn with(mut self, kind: ComponentKind) -> Self {
        self.insert(kind);
        self
    }

    pub fn contains(&self, kind: ComponentKind) -> bool {
        self.0 & (1 << kind.index()) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = ComponentKind> + '_ {
        ComponentKind::ALL
            .into_iter()
            .filter(move |kind| self.contains(*kind))
    }
}

impl FromIterator<ComponentKind> for ActiveSet {
    fn from_iter<I: IntoIterator<Item = ComponentKind>>(iter: I) -> Self {
        let mut set = ActiveSet::EMPTY;
        for kind in iter {
            set.insert(kind);
        }
        set
    }
}

impl fmt::Debug for ActiveSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_in_declaration_order() {
        for (index, kind) in ComponentKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), index);
        }
    }

    #[test]
    fn chrome_and_sibling_kinds_are_not_subcomponents() {
        let subcomponents = ComponentKind::ALL
            .iter()
            .filter(|kind| kind.is_message_subcomponent())
            .count();
        assert_eq!(subcomponents, 13);
        assert!(!ComponentKind::SenderAvatar.is_message_subcomponent());
        assert!(!ComponentKind::DateHeader.is_message_subcomponent());
    }

    #[test]
    fn active_set_iterates_in_kind_order() {
        let set: ActiveSet = [
            ComponentKind::Footer,
            ComponentKind::BodyText,
            ComponentKind::SenderName,
        ]
        .into_iter()
        .collect();

        assert_eq!(set.len(), 3);
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec![
                ComponentKind::SenderName,
                ComponentKind::BodyText,
                ComponentKind::Footer
            ]
        );

        let mut set = set;
        set.remove(ComponentKind::BodyText);
        assert!(!set.contains(ComponentKind::BodyText));
        assert!(ActiveSet::EMPTY.is_empty());
    }
}
