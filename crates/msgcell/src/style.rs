//! Conversation-wide layout configuration.

use msgcell_ui_graphics::{EdgeInsets, PixelScale};
use msgcell_ui_layout::LayoutDirection;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ConversationStyleKind {
    #[default]
    Standard,
    /// The message detail screen: no avatars, no selection.
    MessageDetails,
}

/// Metrics and appearance shared by every cell of one conversation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConversationStyle {
    /// Padding between the bubble edge and nested (text-like) content.
    pub text_insets: EdgeInsets,
    pub max_message_width: f32,
    pub full_width_gutter_leading: f32,
    pub full_width_gutter_trailing: f32,
    pub has_wallpaper: bool,
    pub kind: ConversationStyleKind,
    pub layout_direction: LayoutDirection,
    pub pixel_scale: PixelScale,
    /// Distance from the bubble bottom to the axis of the last text line.
    pub last_text_line_axis: f32,
    pub is_dark_theme: bool,
}

impl ConversationStyle {
    pub const MESSAGE_STACK_SPACING: f32 = 8.0;
    pub const MESSAGE_DIRECTION_SPACING: f32 = 12.0;
    pub const SELECTION_VIEW_WIDTH: f32 = 24.0;
    pub const GROUP_MESSAGE_AVATAR_DIAMETER: f32 = 28.0;
    pub const BUBBLE_CORNER_RADIUS_LARGE: f32 = 18.0;
    pub const BUBBLE_CORNER_RADIUS_SMALL: f32 = 4.0;
    pub const TEXT_VIEW_VSPACING: f32 = 2.0;
    pub const REACTIONS_HEIGHT: f32 = 24.0;
    pub const REACTIONS_VOVERLAP: f32 = 4.0;
    pub const REACTIONS_HINSET: f32 = 6.0;
    pub const REPLY_ICON_LEADING_OFFSET: f32 = 8.0;

    pub fn with_text_insets(mut self, text_insets: EdgeInsets) -> Self {
        self.text_insets = text_insets;
        self
    }

    pub fn with_max_message_width(mut self, max_message_width: f32) -> Self {
        self.max_message_width = max_message_width;
        self
    }

    pub fn with_gutters(mut self, leading: f32, trailing: f32) -> Self {
        self.full_width_gutter_leading = leading;
        self.full_width_gutter_trailing = trailing;
        self
    }

    pub fn with_wallpaper(mut self, has_wallpaper: bool) -> Self {
        self.has_wallpaper = has_wallpaper;
        self
    }

    pub fn with_kind(mut self, kind: ConversationStyleKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_layout_direction(mut self, layout_direction: LayoutDirection) -> Self {
        self.layout_direction = layout_direction;
        self
    }

    pub fn with_pixel_scale(mut self, pixel_scale: PixelScale) -> Self {
        self.pixel_scale = pixel_scale;
        self
    }

    pub fn with_dark_theme(mut self, is_dark_theme: bool) -> Self {
        self.is_dark_theme = is_dark_theme;
        self
    }

    pub fn gutters_width(&self) -> f32 {
        self.full_width_gutter_leading + self.full_width_gutter_trailing
    }

    pub fn send_failure_badge_size(&self) -> f32 {
        if self.has_wallpaper {
            40.0
        } else {
            24.0
        }
    }

    pub fn reply_icon_size(&self) -> f32 {
        if self.has_wallpaper {
            34.0
        } else {
            24.0
        }
    }

    /// How far reactions hang below the bubble.
    pub fn reactions_protrusion(&self) -> f32 {
        (Self::REACTIONS_HEIGHT - Self::REACTIONS_VOVERLAP).max(0.0)
    }

    /// Narrower bubbles would be smaller than their own corner curvature.
    pub fn min_bubble_width(&self) -> f32 {
        Self::BUBBLE_CORNER_RADIUS_LARGE * 2.0
    }
}

impl Default for ConversationStyle {
    fn default() -> Self {
        Self {
            text_insets: EdgeInsets::from_components(12.0, 7.0, 12.0, 7.0),
            max_message_width: 294.0,
            full_width_gutter_leading: 16.0,
            full_width_gutter_trailing: 16.0,
            has_wallpaper: false,
            kind: ConversationStyleKind::Standard,
            layout_direction: LayoutDirection::Ltr,
            pixel_scale: PixelScale::default(),
            last_text_line_axis: 16.0,
            is_dark_theme: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wallpaper_enlarges_badge_and_reply_icon() {
        let plain = ConversationStyle::default();
        let wallpaper = plain.with_wallpaper(true);
        assert_eq!(plain.send_failure_badge_size(), 24.0);
        assert_eq!(wallpaper.send_failure_badge_size(), 40.0);
        assert_eq!(plain.reply_icon_size(), 24.0);
        assert_eq!(wallpaper.reply_icon_size(), 34.0);
    }

    #[test]
    fn derived_metrics() {
        let style = ConversationStyle::default().with_gutters(10.0, 6.0);
        assert_eq!(style.gutters_width(), 16.0);
        assert_eq!(style.reactions_protrusion(), 20.0);
        assert_eq!(style.min_bubble_width(), 36.0);
    }
}
