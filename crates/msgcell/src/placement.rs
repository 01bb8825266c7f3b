//! Render-time frames for a measured message.
//!
//! Placement re-walks the group structure the composer produced, using the
//! stack measurements recorded during measurement. Frames are in cell
//! coordinates with the origin on the leading edge; hosts mirror them for
//! right-to-left layouts.

use msgcell_ui_graphics::{Point, Rect, Size};
use msgcell_ui_layout::{arrange_stack, CellMeasurement};
use smallvec::SmallVec;

use crate::composer::{Composition, LayoutGroupId, CONTENT_STACK_KEY, H_INNER_STACK_KEY, REACTIONS_KEY};
use crate::measure::{h_inner_stack_config, stack_size};
use crate::{ComponentKind, ConversationStyle};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CellPlacement {
    /// The avatar-and-content row.
    pub root: Rect,
    pub selection: Option<Rect>,
    pub avatar: Option<Rect>,
    /// The bubble, or the bare content stack of a sticker message.
    pub content: Rect,
    pub groups: SmallVec<[(LayoutGroupId, Rect); 5]>,
    pub subcomponents: SmallVec<[(ComponentKind, Rect); 8]>,
    pub send_failure_badge: Option<Rect>,
    pub reply_icon: Rect,
    pub reactions: Option<Rect>,
}

impl CellPlacement {
    pub fn place(
        composition: &Composition,
        measurement: &CellMeasurement,
        style: &ConversationStyle,
        available_width: f32,
    ) -> Self {
        let mut placement = CellPlacement::default();
        let cell_height = measurement.cell_size.height;
        let content_size = stack_size(measurement, CONTENT_STACK_KEY).unwrap_or(Size::ZERO);
        let mut leading = style.full_width_gutter_leading;

        if composition.is_showing_selection_ui() {
            placement.selection = Some(Rect::new(
                leading,
                0.0,
                ConversationStyle::SELECTION_VIEW_WIDTH,
                cell_height,
            ));
            leading += ConversationStyle::SELECTION_VIEW_WIDTH + ConversationStyle::MESSAGE_STACK_SPACING;
        }

        if composition.state().is_incoming() {
            let row = measurement.stack(H_INNER_STACK_KEY);
            let row_size = row.map(|row| row.measured_size).unwrap_or(content_size);
            placement.root = Rect::new(leading, 0.0, row_size.width, row_size.height);
            let frames = row
                .map(|row| arrange_stack(&h_inner_stack_config(), row, row_size))
                .unwrap_or_default();
            let origin = placement.root.origin();
            let mut frames = frames.iter().map(|frame| offset(*frame, origin));
            if composition.has_sender_avatar_layout() {
                placement.avatar = frames.next();
            }
            placement.content = frames
                .next()
                .unwrap_or_else(|| Rect::from_origin_size(origin, content_size));
        } else {
            let mut trailing = available_width - style.full_width_gutter_trailing;
            let badge_size = style.send_failure_badge_size();
            if composition.has_send_failure_badge() {
                trailing -= badge_size + ConversationStyle::MESSAGE_STACK_SPACING;
            }
            placement.content = Rect::new(
                trailing - content_size.width,
                0.0,
                content_size.width,
                content_size.height,
            );
            placement.root = placement.content;
            if composition.has_send_failure_badge() {
                let bottom = if style.has_wallpaper {
                    placement.content.max_y()
                } else {
                    placement.content.max_y()
                        - style
                            .pixel_scale
                            .round(style.last_text_line_axis - badge_size / 2.0)
                };
                placement.send_failure_badge = Some(Rect::new(
                    trailing + ConversationStyle::MESSAGE_STACK_SPACING,
                    bottom - badge_size,
                    badge_size,
                    badge_size,
                ));
            }
        }

        placement.place_groups(composition, measurement);

        let icon_size = style.reply_icon_size();
        placement.reply_icon = Rect::new(
            placement.content.x + ConversationStyle::REPLY_ICON_LEADING_OFFSET,
            placement.content.center().y - icon_size / 2.0,
            icon_size,
            icon_size,
        );

        // The anchored edge wins; wide reactions overflow toward the middle
        // of the screen and are never clamped to the cell.
        if let Some(size) = stack_size(measurement, REACTIONS_KEY) {
            let top = placement.content.max_y() - ConversationStyle::REACTIONS_VOVERLAP;
            let x = if composition.state().is_incoming() {
                placement.content.x + ConversationStyle::REACTIONS_HINSET
            } else {
                placement.content.max_x() - ConversationStyle::REACTIONS_HINSET - size.width
            };
            placement.reactions = Some(Rect::new(x, top, size.width, size.height));
        }

        placement
    }

    fn place_groups(&mut self, composition: &Composition, measurement: &CellMeasurement) {
        let Some(content_stack) = measurement.stack(CONTENT_STACK_KEY) else {
            return;
        };
        let content_origin = self.content.origin();
        let group_frames = arrange_stack(composition.content_stack(), content_stack, self.content.size());
        for (group, frame) in composition.groups().iter().zip(group_frames) {
            let frame = offset(frame, content_origin);
            self.groups.push((group.id, frame));
            let Some(group_measurement) = measurement.stack(group.key()) else {
                continue;
            };
            let member_frames = arrange_stack(&group.config, group_measurement, frame.size());
            for (kind, member_frame) in group.members.iter().zip(member_frames) {
                self.subcomponents.push((*kind, offset(member_frame, frame.origin())));
            }
        }
    }

    /// Frame of an active sub-renderer's view.
    pub fn frame(&self, kind: ComponentKind) -> Option<Rect> {
        if kind == ComponentKind::Reactions {
            return self.reactions;
        }
        self.subcomponents
            .iter()
            .find(|(candidate, _)| *candidate == kind)
            .map(|(_, frame)| *frame)
    }

    pub fn group_frame(&self, id: LayoutGroupId) -> Option<Rect> {
        self.groups
            .iter()
            .find(|(candidate, _)| *candidate == id)
            .map(|(_, frame)| *frame)
    }
}

fn offset(frame: Rect, origin: Point) -> Rect {
    frame.translate(origin.x, origin.y)
}
