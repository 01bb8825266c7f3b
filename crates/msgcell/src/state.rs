//! Immutable per-message snapshot supplied by the data layer.
//!
//! Every optional part is either absent or a value object sufficient to
//! build that part's sub-renderer. Nothing here is mutated by the cell.

use msgcell_foundation::swipe::InteractionId;

use crate::ConversationStyle;
use crate::ConversationStyleKind;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OutgoingStatus {
    Sending,
    #[default]
    Sent,
    Delivered,
    Read,
    Failed,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MessageDirection {
    #[default]
    Incoming,
    Outgoing(OutgoingStatus),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SenderNameState {
    pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SenderAvatarState {
    /// Opaque handle of the avatar image.
    pub image_id: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BodyTextState {
    pub text: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BodyMediaState {
    pub item_count: usize,
    /// Width over height of the first item.
    pub aspect_ratio: f32,
}

impl Default for BodyMediaState {
    fn default() -> Self {
        Self {
            item_count: 1,
            aspect_ratio: 1.0,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StickerState {
    pub sticker_id: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ViewOnceStatus {
    #[default]
    Unknown,
    IncomingAvailable,
    IncomingDownloading,
    IncomingFailed,
    IncomingExpired,
    IncomingInvalidContent,
    OutgoingSending,
    OutgoingFailed,
    OutgoingSentExpired,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewOnceState {
    pub status: ViewOnceStatus,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct QuotedReplyState {
    pub author_name: String,
    pub snippet: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LinkPreviewState {
    pub url: String,
    pub title: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReactionsState {
    /// Emoji and how many people reacted with it, most popular first.
    pub counts: Vec<(String, u32)>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AudioAttachmentState {
    pub duration_millis: u64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GenericAttachmentState {
    pub file_name: String,
    pub byte_count: u64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactShareState {
    pub display_name: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BottomButtonsState {
    pub titles: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FooterState {
    pub timestamp_text: String,
    /// Body text is truncated and offers a "read more" affordance.
    pub has_tap_for_more: bool,
}

/// Everything a message cell needs to know about one message.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MessageState {
    pub interaction_id: InteractionId,
    pub direction: MessageDirection,
    pub timestamp_millis: i64,

    pub sender_name: Option<SenderNameState>,
    pub sender_avatar: Option<SenderAvatarState>,
    pub body_text: Option<BodyTextState>,
    pub body_media: Option<BodyMediaState>,
    pub sticker: Option<StickerState>,
    pub view_once: Option<ViewOnceState>,
    pub quoted_reply: Option<QuotedReplyState>,
    pub link_preview: Option<LinkPreviewState>,
    pub reactions: Option<ReactionsState>,
    pub audio_attachment: Option<AudioAttachmentState>,
    pub generic_attachment: Option<GenericAttachmentState>,
    pub contact_share: Option<ContactShareState>,
    pub bottom_buttons: Option<BottomButtonsState>,
    pub footer: Option<FooterState>,

    pub has_send_failure_badge: bool,
    pub has_failed_or_pending_downloads: bool,
    pub was_remotely_deleted: bool,
    pub is_borderless: bool,
    pub should_hide_footer: bool,
    pub should_show_sender_avatar: bool,
    pub is_first_in_cluster: bool,
    pub is_last_in_cluster: bool,
    pub is_group_thread: bool,
    pub accessibility_author_name: Option<String>,
}

impl MessageState {
    pub fn is_incoming(&self) -> bool {
        matches!(self.direction, MessageDirection::Incoming)
    }

    pub fn is_outgoing(&self) -> bool {
        !self.is_incoming()
    }

    pub fn outgoing_status(&self) -> Option<OutgoingStatus> {
        match self.direction {
            MessageDirection::Incoming => None,
            MessageDirection::Outgoing(status) => Some(status),
        }
    }

    /// Remotely deleted messages render their tombstone as body text.
    pub fn has_body_text(&self) -> bool {
        self.was_remotely_deleted || self.body_text.is_some()
    }

    pub fn is_sticker(&self) -> bool {
        self.sticker.is_some()
    }

    /// View-once messages that can no longer be opened render without a
    /// bubble fill. An unknown status is treated the same way.
    pub fn is_borderless_view_once(&self) -> bool {
        self.view_once.as_ref().is_some_and(|view_once| {
            matches!(
                view_once.status,
                ViewOnceStatus::Unknown
                    | ViewOnceStatus::IncomingExpired
                    | ViewOnceStatus::IncomingInvalidContent
            )
        })
    }

    pub fn is_bubble_transparent(&self) -> bool {
        if self.was_remotely_deleted {
            false
        } else if self.is_sticker() {
            true
        } else if self.is_borderless_view_once() {
            false
        } else {
            self.is_borderless
        }
    }

    /// Whether the layout reserves an avatar slot. The avatar itself may be
    /// de-duplicated away within a cluster.
    pub fn has_sender_avatar_layout(&self, style: &ConversationStyle) -> bool {
        self.is_incoming()
            && self.is_group_thread
            && self.sender_avatar.is_some()
            && style.kind != ConversationStyleKind::MessageDetails
    }

    pub fn has_sender_avatar(&self, style: &ConversationStyle) -> bool {
        self.has_sender_avatar_layout(style) && self.should_show_sender_avatar
    }

    pub fn has_send_failure_badge_layout(&self) -> bool {
        self.is_outgoing() && self.has_send_failure_badge
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remotely_deleted_counts_as_body_text_and_is_opaque() {
        let state = MessageState {
            was_remotely_deleted: true,
            is_borderless: true,
            ..MessageState::default()
        };
        assert!(state.has_body_text());
        assert!(!state.is_bubble_transparent());
    }

    #[test]
    fn bubble_transparency_rules() {
        let sticker = MessageState {
            sticker: Some(StickerState::default()),
            ..MessageState::default()
        };
        assert!(sticker.is_bubble_transparent());

        let expired_view_once = MessageState {
            is_borderless: true,
            view_once: Some(ViewOnceState {
                status: ViewOnceStatus::IncomingExpired,
            }),
            ..MessageState::default()
        };
        assert!(expired_view_once.is_borderless_view_once());
        assert!(!expired_view_once.is_bubble_transparent());

        let available_view_once = MessageState {
            view_once: Some(ViewOnceState {
                status: ViewOnceStatus::IncomingAvailable,
            }),
            ..MessageState::default()
        };
        assert!(!available_view_once.is_borderless_view_once());

        let borderless = MessageState {
            is_borderless: true,
            ..MessageState::default()
        };
        assert!(borderless.is_bubble_transparent());
    }

    #[test]
    fn avatar_slot_is_reserved_even_when_hidden() {
        let style = ConversationStyle::default();
        let state = MessageState {
            is_group_thread: true,
            sender_avatar: Some(SenderAvatarState::default()),
            should_show_sender_avatar: false,
            ..MessageState::default()
        };
        assert!(state.has_sender_avatar_layout(&style));
        assert!(!state.has_sender_avatar(&style));

        let details = style.with_kind(ConversationStyleKind::MessageDetails);
        assert!(!state.has_sender_avatar_layout(&details));

        let outgoing = MessageState {
            direction: MessageDirection::Outgoing(OutgoingStatus::Sent),
            ..state
        };
        assert!(!outgoing.has_sender_avatar_layout(&style));
    }
}
