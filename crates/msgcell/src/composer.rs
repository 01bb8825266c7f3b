//! Decides, from message state alone, which parts a cell shows and how they
//! are grouped.

use msgcell_ui_graphics::{CornerRadii, DirectionalCorners, EdgeInsets};
use msgcell_ui_layout::{MeasurementKey, StackConfig};
use smallvec::SmallVec;

use crate::error::{report, ContractViolation};
use crate::renderer::{BodyTextSource, FooterPlacement, RendererFactory, SubRenderer};
use crate::state::ViewOnceStatus;
use crate::{ActiveSet, ComponentKind, ConversationStyle, MessageState, SubcomponentRegistry};

pub const CONTENT_STACK_KEY: MeasurementKey = MeasurementKey("message.content_stack");
pub const H_INNER_STACK_KEY: MeasurementKey = MeasurementKey("message.h_inner_stack");
pub const REACTIONS_KEY: MeasurementKey = MeasurementKey("message.reactions");

const STICKER_MEMBERS: [ComponentKind; 3] = [
    ComponentKind::SenderName,
    ComponentKind::Sticker,
    ComponentKind::Footer,
];
const TOP_FULL_WIDTH_MEMBERS: [ComponentKind; 1] = [ComponentKind::LinkPreview];
const TOP_NESTED_MEMBERS: [ComponentKind; 1] = [ComponentKind::SenderName];
const BOTTOM_FULL_WIDTH_MEMBERS: [ComponentKind; 2] =
    [ComponentKind::QuotedReply, ComponentKind::BodyMedia];
const BOTTOM_NESTED_MEMBERS: [ComponentKind; 6] = [
    ComponentKind::ViewOnce,
    ComponentKind::AudioAttachment,
    ComponentKind::GenericAttachment,
    ComponentKind::ContactShare,
    ComponentKind::BodyText,
    ComponentKind::Footer,
];

/// Identity of a layout group inside the content stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LayoutGroupId {
    TopFullWidth,
    TopNested,
    BottomFullWidth,
    BottomNested,
    /// Trailing standalone row, always full width.
    BottomButtons,
    /// The single borderless group of a sticker message.
    Sticker,
}

impl LayoutGroupId {
    pub fn measurement_key(self) -> MeasurementKey {
        match self {
            LayoutGroupId::TopFullWidth => MeasurementKey("message.top_full_width_stack"),
            LayoutGroupId::TopNested => MeasurementKey("message.top_nested_stack"),
            LayoutGroupId::BottomFullWidth => MeasurementKey("message.bottom_full_width_stack"),
            LayoutGroupId::BottomNested => MeasurementKey("message.bottom_nested_stack"),
            LayoutGroupId::BottomButtons => MeasurementKey("message.bottom_buttons"),
            LayoutGroupId::Sticker => MeasurementKey("message.sticker_stack"),
        }
    }
}

/// One emitted group: its stack configuration and its active members in
/// display order. Never empty.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutGroupSpec {
    pub id: LayoutGroupId,
    pub config: StackConfig,
    pub members: SmallVec<[ComponentKind; 6]>,
}

impl LayoutGroupSpec {
    pub fn key(&self) -> MeasurementKey {
        self.id.measurement_key()
    }

    pub fn contains(&self, kind: ComponentKind) -> bool {
        self.members.contains(&kind)
    }
}

/// Color role of the bubble fill; hosts map roles to theme colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BubbleFill {
    ThemeBackground,
    Transparent,
    Incoming,
    Outgoing,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BubbleStroke {
    pub width: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BubbleStyle {
    pub fill: BubbleFill,
    /// Outline role; drawn for tombstones and spent view-once messages.
    pub stroke: Option<BubbleStroke>,
    pub sharp_corners: DirectionalCorners,
}

impl BubbleStyle {
    pub fn corner_radii(&self, style: &ConversationStyle) -> CornerRadii {
        self.sharp_corners.radii(
            ConversationStyle::BUBBLE_CORNER_RADIUS_LARGE,
            ConversationStyle::BUBBLE_CORNER_RADIUS_SMALL,
            style.layout_direction.is_rtl(),
        )
    }
}

/// Result of composing one message: the active sub-renderers and the
/// ordered groups they are laid out in.
#[derive(Debug)]
pub struct Composition {
    state: MessageState,
    registry: SubcomponentRegistry,
    groups: SmallVec<[LayoutGroupSpec; 5]>,
    content_stack: StackConfig,
    bubble: Option<BubbleStyle>,
    sharp_corners: DirectionalCorners,
    footer_overlays_media: bool,
    is_showing_selection_ui: bool,
    has_sender_avatar_layout: bool,
    has_sender_avatar: bool,
    has_send_failure_badge: bool,
    violations: Vec<ContractViolation>,
}

impl Composition {
    pub fn state(&self) -> &MessageState {
        &self.state
    }

    pub fn registry(&self) -> &SubcomponentRegistry {
        &self.registry
    }

    pub fn groups(&self) -> &[LayoutGroupSpec] {
        &self.groups
    }

    pub fn group(&self, id: LayoutGroupId) -> Option<&LayoutGroupSpec> {
        self.groups.iter().find(|group| group.id == id)
    }

    pub fn content_stack(&self) -> &StackConfig {
        &self.content_stack
    }

    /// `None` for sticker messages, which have no bubble.
    pub fn bubble(&self) -> Option<&BubbleStyle> {
        self.bubble.as_ref()
    }

    pub fn is_sticker_layout(&self) -> bool {
        self.registry.contains(ComponentKind::Sticker)
    }

    pub fn sharp_corners(&self) -> DirectionalCorners {
        self.sharp_corners
    }

    pub fn footer_overlays_media(&self) -> bool {
        self.footer_overlays_media
    }

    pub fn is_showing_selection_ui(&self) -> bool {
        self.is_showing_selection_ui
    }

    pub fn has_sender_avatar_layout(&self) -> bool {
        self.has_sender_avatar_layout
    }

    pub fn has_sender_avatar(&self) -> bool {
        self.has_sender_avatar
    }

    pub fn has_send_failure_badge(&self) -> bool {
        self.has_send_failure_badge
    }

    pub fn has_reactions(&self) -> bool {
        self.registry.contains(ComponentKind::Reactions)
    }

    /// Active sub-renderers plus the chrome kinds the cell draws itself.
    pub fn active_set(&self) -> ActiveSet {
        let mut active = self.registry.active_set();
        if self.has_sender_avatar {
            active.insert(ComponentKind::SenderAvatar);
        }
        if self.has_send_failure_badge {
            active.insert(ComponentKind::SendFailureBadge);
        }
        if self.state.has_failed_or_pending_downloads {
            active.insert(ComponentKind::FailedOrPendingDownloads);
        }
        active
    }

    pub fn violations(&self) -> &[ContractViolation] {
        &self.violations
    }
}

/// Whether the footer is drawn as a badge inside the body media instead of
/// as its own row.
pub fn footer_overlays_media(
    has_body_media: bool,
    has_body_text: bool,
    is_borderless: bool,
    should_hide_footer: bool,
    has_tap_for_more: bool,
) -> bool {
    has_body_media && !has_body_text && !is_borderless && !should_hide_footer && !has_tap_for_more
}

/// Bubble corners that touch a clustered neighbor, on the sender's side.
pub fn sharp_corners(
    is_incoming: bool,
    is_first_in_cluster: bool,
    is_last_in_cluster: bool,
) -> DirectionalCorners {
    let mut corners = DirectionalCorners::NONE;
    if !is_first_in_cluster {
        corners.insert(if is_incoming {
            DirectionalCorners::TOP_LEADING
        } else {
            DirectionalCorners::TOP_TRAILING
        });
    }
    if !is_last_in_cluster {
        corners.insert(if is_incoming {
            DirectionalCorners::BOTTOM_LEADING
        } else {
            DirectionalCorners::BOTTOM_TRAILING
        });
    }
    corners
}

/// A quote under a sender name touches the label, so all of its corners are
/// sharp; otherwise it keeps the bubble's sharp corners plus both bottom ones.
pub fn sharp_corners_for_quoted_reply(
    has_sender_name: bool,
    bubble_sharp_corners: DirectionalCorners,
) -> DirectionalCorners {
    if has_sender_name {
        DirectionalCorners::ALL
    } else {
        bubble_sharp_corners
            | DirectionalCorners::BOTTOM_LEADING
            | DirectionalCorners::BOTTOM_TRAILING
    }
}

/// Text-inset margins, tightened to the text spacing toward any neighbor.
pub fn nested_group_config(
    style: &ConversationStyle,
    has_neighbors_above: bool,
    has_neighbors_below: bool,
) -> StackConfig {
    let mut margins = style.text_insets;
    if has_neighbors_above {
        margins.top = ConversationStyle::TEXT_VIEW_VSPACING;
    }
    if has_neighbors_below {
        margins.bottom = ConversationStyle::TEXT_VIEW_VSPACING;
    }
    StackConfig::vertical(ConversationStyle::TEXT_VIEW_VSPACING, margins)
}

pub fn full_width_group_config(style: &ConversationStyle, include_top_margin: bool) -> StackConfig {
    let mut margins = EdgeInsets::ZERO;
    if include_top_margin {
        margins.top = style.text_insets.top;
    }
    StackConfig::vertical(ConversationStyle::TEXT_VIEW_VSPACING, margins)
}

pub fn no_margins_config() -> StackConfig {
    StackConfig::vertical(ConversationStyle::TEXT_VIEW_VSPACING, EdgeInsets::ZERO)
}

/// Builds a [`Composition`] from message state.
pub struct CellComposer<'a> {
    style: &'a ConversationStyle,
    factory: &'a dyn RendererFactory,
}

impl<'a> CellComposer<'a> {
    pub fn new(style: &'a ConversationStyle, factory: &'a dyn RendererFactory) -> Self {
        Self { style, factory }
    }

    pub fn compose(&self, state: &MessageState, is_showing_selection_ui: bool) -> Composition {
        let factory = self.factory;
        let id = &state.interaction_id;
        let mut violations = Vec::new();
        let mut registry = SubcomponentRegistry::new();
        let insert = |registry: &mut SubcomponentRegistry,
                          violations: &mut Vec<ContractViolation>,
                          kind: ComponentKind,
                          renderer: Box<dyn SubRenderer>| {
            if let Err(violation) = registry.insert(kind, renderer) {
                report(violations, id, violation);
            }
        };

        let is_bubble_transparent = state.is_bubble_transparent();
        let bubble_sharp_corners = sharp_corners(
            state.is_incoming(),
            state.is_first_in_cluster,
            state.is_last_in_cluster,
        );

        if let Some(sender_name) = &state.sender_name {
            let renderer = factory.sender_name(sender_name);
            insert(&mut registry, &mut violations, ComponentKind::SenderName, renderer);
        }
        if let Some(sticker) = &state.sticker {
            let renderer = factory.sticker(sticker);
            insert(&mut registry, &mut violations, ComponentKind::Sticker, renderer);
        }
        if let Some(view_once) = &state.view_once {
            if view_once.status == ViewOnceStatus::Unknown {
                report(&mut violations, id, ContractViolation::InvalidViewOnceStatus);
            }
            let renderer = factory.view_once(view_once);
            insert(&mut registry, &mut violations, ComponentKind::ViewOnce, renderer);
        }
        if let Some(audio) = &state.audio_attachment {
            let renderer = factory.audio_attachment(audio);
            insert(&mut registry, &mut violations, ComponentKind::AudioAttachment, renderer);
        }
        if let Some(attachment) = &state.generic_attachment {
            let renderer = factory.generic_attachment(attachment);
            insert(&mut registry, &mut violations, ComponentKind::GenericAttachment, renderer);
        }
        let body_text_source = if state.was_remotely_deleted {
            Some(BodyTextSource::RemotelyDeleted)
        } else {
            state.body_text.as_ref().map(BodyTextSource::Text)
        };
        if let Some(source) = body_text_source {
            let renderer = factory.body_text(source);
            insert(&mut registry, &mut violations, ComponentKind::BodyText, renderer);
        }
        if let Some(contact) = &state.contact_share {
            let renderer = factory.contact_share(contact);
            insert(&mut registry, &mut violations, ComponentKind::ContactShare, renderer);
        }
        if let Some(buttons) = &state.bottom_buttons {
            let renderer = factory.bottom_buttons(buttons);
            insert(&mut registry, &mut violations, ComponentKind::BottomButtons, renderer);
        }

        let has_tap_for_more = state
            .footer
            .as_ref()
            .is_some_and(|footer| footer.has_tap_for_more);
        let overlay_scheduled = footer_overlays_media(
            state.body_media.is_some(),
            registry.contains(ComponentKind::BodyText),
            state.is_borderless,
            state.should_hide_footer,
            has_tap_for_more,
        );
        let mut footer_overlays = false;
        if let Some(media) = &state.body_media {
            let overlay = if overlay_scheduled {
                match &state.footer {
                    Some(footer) => Some(factory.footer(
                        footer,
                        FooterPlacement {
                            is_overlaying_media: true,
                            is_outside_bubble: false,
                        },
                    )),
                    None => {
                        report(&mut violations, id, ContractViolation::MissingFooterState);
                        None
                    }
                }
            } else {
                None
            };
            footer_overlays = overlay.is_some();
            let renderer = factory.body_media(media, overlay);
            insert(&mut registry, &mut violations, ComponentKind::BodyMedia, renderer);
        }
        if !overlay_scheduled && !state.should_hide_footer {
            match &state.footer {
                Some(footer) => {
                    let renderer = factory.footer(
                        footer,
                        FooterPlacement {
                            is_overlaying_media: false,
                            is_outside_bubble: is_bubble_transparent,
                        },
                    );
                    insert(&mut registry, &mut violations, ComponentKind::Footer, renderer);
                }
                None => report(&mut violations, id, ContractViolation::MissingFooterState),
            }
        }

        if let Some(quoted_reply) = &state.quoted_reply {
            let corners =
                sharp_corners_for_quoted_reply(state.sender_name.is_some(), bubble_sharp_corners);
            let renderer = factory.quoted_reply(quoted_reply, corners);
            insert(&mut registry, &mut violations, ComponentKind::QuotedReply, renderer);
        }
        if let Some(link_preview) = &state.link_preview {
            let renderer = factory.link_preview(link_preview);
            insert(&mut registry, &mut violations, ComponentKind::LinkPreview, renderer);
        }
        if let Some(reactions) = &state.reactions {
            let renderer = factory.reactions(reactions);
            insert(&mut registry, &mut violations, ComponentKind::Reactions, renderer);
        }

        let groups = self.build_groups(&registry);
        let bubble = if registry.contains(ComponentKind::Sticker) {
            None
        } else {
            Some(self.bubble_style(state, bubble_sharp_corners))
        };

        Composition {
            state: state.clone(),
            groups,
            content_stack: no_margins_config(),
            bubble,
            sharp_corners: bubble_sharp_corners,
            footer_overlays_media: footer_overlays,
            is_showing_selection_ui,
            has_sender_avatar_layout: state.has_sender_avatar_layout(self.style),
            has_sender_avatar: state.has_sender_avatar(self.style),
            has_send_failure_badge: state.has_send_failure_badge_layout(),
            violations,
            registry,
        }
    }

    fn build_groups(&self, registry: &SubcomponentRegistry) -> SmallVec<[LayoutGroupSpec; 5]> {
        let members = |kinds: &[ComponentKind]| -> SmallVec<[ComponentKind; 6]> {
            kinds
                .iter()
                .copied()
                .filter(|kind| registry.contains(*kind))
                .collect()
        };
        let mut groups = SmallVec::new();

        if registry.contains(ComponentKind::Sticker) {
            groups.push(LayoutGroupSpec {
                id: LayoutGroupId::Sticker,
                config: no_margins_config(),
                members: members(&STICKER_MEMBERS),
            });
            return groups;
        }

        let top_full_width = members(&TOP_FULL_WIDTH_MEMBERS);
        let top_nested = members(&TOP_NESTED_MEMBERS);
        let bottom_full_width = members(&BOTTOM_FULL_WIDTH_MEMBERS);
        let bottom_nested = members(&BOTTOM_NESTED_MEMBERS);
        let has_bottom_buttons = registry.contains(ComponentKind::BottomButtons);

        let has_top_full_width = !top_full_width.is_empty();
        let has_top_nested = !top_nested.is_empty();
        let has_bottom_full_width = !bottom_full_width.is_empty();
        let has_bottom_nested = !bottom_nested.is_empty();

        if has_top_full_width {
            groups.push(LayoutGroupSpec {
                id: LayoutGroupId::TopFullWidth,
                config: full_width_group_config(self.style, false),
                members: top_full_width,
            });
        }
        if has_top_nested {
            groups.push(LayoutGroupSpec {
                id: LayoutGroupId::TopNested,
                config: nested_group_config(
                    self.style,
                    has_top_full_width,
                    has_bottom_full_width || has_bottom_nested || has_bottom_buttons,
                ),
                members: top_nested,
            });
        }
        if has_bottom_full_width {
            // A quote at the very top is kept off the bubble edge.
            let include_top_margin = !has_top_full_width
                && !has_top_nested
                && registry.contains(ComponentKind::QuotedReply);
            groups.push(LayoutGroupSpec {
                id: LayoutGroupId::BottomFullWidth,
                config: full_width_group_config(self.style, include_top_margin),
                members: bottom_full_width,
            });
        }
        if has_bottom_nested {
            groups.push(LayoutGroupSpec {
                id: LayoutGroupId::BottomNested,
                config: nested_group_config(
                    self.style,
                    has_top_full_width || has_top_nested || has_bottom_full_width,
                    has_bottom_buttons,
                ),
                members: bottom_nested,
            });
        }
        if has_bottom_buttons {
            let mut members = SmallVec::new();
            members.push(ComponentKind::BottomButtons);
            groups.push(LayoutGroupSpec {
                id: LayoutGroupId::BottomButtons,
                config: no_margins_config(),
                members,
            });
        }
        groups
    }

    fn bubble_style(&self, state: &MessageState, sharp_corners: DirectionalCorners) -> BubbleStyle {
        let is_tombstone_like = state.was_remotely_deleted || state.is_borderless_view_once();
        let fill = if !self.style.has_wallpaper && is_tombstone_like {
            BubbleFill::ThemeBackground
        } else if state.is_bubble_transparent() {
            BubbleFill::Transparent
        } else if state.is_incoming() {
            BubbleFill::Incoming
        } else {
            BubbleFill::Outgoing
        };
        let stroke = (!self.style.has_wallpaper && is_tombstone_like).then_some(BubbleStroke { width: 1.0 });
        BubbleStyle {
            fill,
            stroke,
            sharp_corners,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_overlay_needs_media_alone_and_unsuppressed() {
        assert!(footer_overlays_media(true, false, false, false, false));
        assert!(!footer_overlays_media(false, false, false, false, false));
        assert!(!footer_overlays_media(true, true, false, false, false));
        assert!(!footer_overlays_media(true, false, true, false, false));
        assert!(!footer_overlays_media(true, false, false, true, false));
        assert!(!footer_overlays_media(true, false, false, false, true));
    }

    #[test]
    fn sharp_corners_follow_cluster_and_direction() {
        assert_eq!(sharp_corners(true, true, true), DirectionalCorners::NONE);
        assert_eq!(
            sharp_corners(true, false, false),
            DirectionalCorners::TOP_LEADING | DirectionalCorners::BOTTOM_LEADING
        );
        assert_eq!(
            sharp_corners(false, false, true),
            DirectionalCorners::TOP_TRAILING
        );
        assert_eq!(
            sharp_corners(false, true, false),
            DirectionalCorners::BOTTOM_TRAILING
        );
    }

    #[test]
    fn quoted_reply_corners() {
        assert_eq!(
            sharp_corners_for_quoted_reply(true, DirectionalCorners::NONE),
            DirectionalCorners::ALL
        );
        assert_eq!(
            sharp_corners_for_quoted_reply(false, DirectionalCorners::TOP_LEADING),
            DirectionalCorners::TOP_LEADING
                | DirectionalCorners::BOTTOM_LEADING
                | DirectionalCorners::BOTTOM_TRAILING
        );
    }

    #[test]
    fn nested_margins_tighten_toward_neighbors() {
        let style = ConversationStyle::default();
        let alone = nested_group_config(&style, false, false);
        assert_eq!(alone.margins, style.text_insets);

        let between = nested_group_config(&style, true, true);
        assert_eq!(between.margins.top, ConversationStyle::TEXT_VIEW_VSPACING);
        assert_eq!(between.margins.bottom, ConversationStyle::TEXT_VIEW_VSPACING);
        assert_eq!(between.margins.left, style.text_insets.left);
    }

    #[test]
    fn full_width_top_margin() {
        let style = ConversationStyle::default();
        assert_eq!(full_width_group_config(&style, false).margins, EdgeInsets::ZERO);
        assert_eq!(
            full_width_group_config(&style, true).margins.top,
            style.text_insets.top
        );
    }
}
