use msgcell::state::{
    AudioAttachmentState, BodyMediaState, BodyTextState, BottomButtonsState, ContactShareState,
    FooterState, GenericAttachmentState, LinkPreviewState, MessageDirection, OutgoingStatus,
    QuotedReplyState, ReactionsState, SenderAvatarState, SenderNameState, StickerState,
    ViewOnceState, ViewOnceStatus,
};
use msgcell::MessageState;
use msgcell_foundation::swipe::InteractionId;

/// 10:14 on the epoch day.
pub const TEN_FOURTEEN_MILLIS: i64 = (10 * 60 + 14) * 60_000;

/// Builds [`MessageState`]s for tests.
///
/// Starts as an incoming, standalone (first and last in its cluster)
/// message with a footer and nothing else.
#[derive(Clone, Debug)]
pub struct MessageStateBuilder {
    state: MessageState,
}

impl MessageStateBuilder {
    pub fn new(interaction_id: &str) -> Self {
        Self {
            state: MessageState {
                interaction_id: InteractionId::new(interaction_id),
                timestamp_millis: TEN_FOURTEEN_MILLIS,
                footer: Some(FooterState {
                    timestamp_text: "10:14".to_string(),
                    has_tap_for_more: false,
                }),
                is_first_in_cluster: true,
                is_last_in_cluster: true,
                should_show_sender_avatar: true,
                ..MessageState::default()
            },
        }
    }

    pub fn incoming(mut self) -> Self {
        self.state.direction = MessageDirection::Incoming;
        self
    }

    pub fn outgoing(mut self, status: OutgoingStatus) -> Self {
        self.state.direction = MessageDirection::Outgoing(status);
        self
    }

    /// Incoming group message from `name`, with an avatar.
    pub fn from_group_member(mut self, name: &str) -> Self {
        self.state.is_group_thread = true;
        self.state.sender_avatar = Some(SenderAvatarState {
            image_id: format!("avatar:{name}"),
        });
        self.sender_name(name)
    }

    /// Sets both the visible sender name and the spoken author name.
    pub fn sender_name(mut self, name: &str) -> Self {
        self.state.sender_name = Some(SenderNameState {
            name: name.to_string(),
        });
        self.author(name)
    }

    pub fn author(mut self, name: &str) -> Self {
        self.state.accessibility_author_name = Some(name.to_string());
        self
    }

    pub fn show_avatar(mut self, should_show_sender_avatar: bool) -> Self {
        self.state.should_show_sender_avatar = should_show_sender_avatar;
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.state.body_text = Some(BodyTextState {
            text: text.to_string(),
        });
        self
    }

    pub fn media(mut self) -> Self {
        self.state.body_media = Some(BodyMediaState::default());
        self
    }

    pub fn sticker(mut self) -> Self {
        self.state.sticker = Some(StickerState {
            sticker_id: "sticker:1".to_string(),
        });
        self
    }

    pub fn view_once(mut self, status: ViewOnceStatus) -> Self {
        self.state.view_once = Some(ViewOnceState { status });
        self
    }

    pub fn quote(mut self) -> Self {
        self.state.quoted_reply = Some(QuotedReplyState {
            author_name: "Ada".to_string(),
            snippet: "see you there".to_string(),
        });
        self
    }

    pub fn link_preview(mut self) -> Self {
        self.state.link_preview = Some(LinkPreviewState {
            url: "https://example.org".to_string(),
            title: Some("Example".to_string()),
        });
        self
    }

    pub fn reactions(mut self) -> Self {
        self.state.reactions = Some(ReactionsState {
            counts: vec![("👍".to_string(), 2)],
        });
        self
    }

    pub fn audio(mut self) -> Self {
        self.state.audio_attachment = Some(AudioAttachmentState {
            duration_millis: 12_000,
        });
        self
    }

    pub fn attachment(mut self, file_name: &str) -> Self {
        self.state.generic_attachment = Some(GenericAttachmentState {
            file_name: file_name.to_string(),
            byte_count: 2048,
        });
        self
    }

    pub fn contact(mut self, display_name: &str) -> Self {
        self.state.contact_share = Some(ContactShareState {
            display_name: display_name.to_string(),
        });
        self
    }

    pub fn buttons(mut self, titles: &[&str]) -> Self {
        self.state.bottom_buttons = Some(BottomButtonsState {
            titles: titles.iter().map(|title| title.to_string()).collect(),
        });
        self
    }

    pub fn no_footer(mut self) -> Self {
        self.state.footer = None;
        self
    }

    pub fn hide_footer(mut self) -> Self {
        self.state.should_hide_footer = true;
        self
    }

    pub fn tap_for_more(mut self) -> Self {
        if let Some(footer) = self.state.footer.as_mut() {
            footer.has_tap_for_more = true;
        }
        self
    }

    pub fn borderless(mut self) -> Self {
        self.state.is_borderless = true;
        self
    }

    pub fn remotely_deleted(mut self) -> Self {
        self.state.was_remotely_deleted = true;
        self
    }

    pub fn failed_downloads(mut self) -> Self {
        self.state.has_failed_or_pending_downloads = true;
        self
    }

    pub fn send_failure_badge(mut self) -> Self {
        self.state.has_send_failure_badge = true;
        self
    }

    pub fn cluster(mut self, is_first: bool, is_last: bool) -> Self {
        self.state.is_first_in_cluster = is_first;
        self.state.is_last_in_cluster = is_last;
        self
    }

    pub fn build(self) -> MessageState {
        self.state
    }
}
