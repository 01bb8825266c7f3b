//! The reusable view arena of one message cell.

use msgcell_animation::{AnimationSpec, AnimationType, SpringSpec};
use msgcell_foundation::swipe::{ReplyIconStyle, SwipeTarget, SwipeViewHost};
use msgcell_ui_graphics::{Color, GraphicsLayer, Point, Rect};

use crate::error::ContractViolation;
use crate::registry::SubcomponentSlots;
use crate::ComponentKind;

/// A host view built by a sub-renderer.
pub trait ComponentView {
    fn kind(&self) -> ComponentKind;

    /// Frame in cell coordinates.
    fn frame(&self) -> Rect;

    fn set_frame(&mut self, frame: Rect, animation: Option<AnimationSpec>);

    /// Returns the view to a blank state before it is configured for
    /// another message.
    fn reset(&mut self);

    fn set_is_cell_visible(&mut self, _is_visible: bool) {}

    fn remove_animations(&mut self) {}

    fn contains(&self, location: Point) -> bool {
        self.frame().contains_point(location)
    }
}

/// A chrome view owned by the cell itself.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewNode {
    pub frame: Rect,
    pub layer: GraphicsLayer,
    pub is_hidden: bool,
    /// Animation of the last change, until removed.
    pub animation: Option<AnimationType>,
}

impl ViewNode {
    pub fn center(&self) -> Point {
        self.frame.center()
    }

    pub fn set_center(&mut self, center: Point, animation: Option<AnimationSpec>) {
        self.frame = self.frame.with_center(center);
        self.animation = animation.map(AnimationType::Tween);
    }

    pub fn contains(&self, location: Point) -> bool {
        !self.is_hidden && self.frame.contains_point(location)
    }

    pub fn remove_animations(&mut self) {
        self.animation = None;
    }
}

/// Which chrome view the swipe moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeContent {
    Bubble,
    /// Bubble-less (sticker) messages move the bare content stack.
    ContentStack,
}

/// Arena of every view a message cell may show: one slot per subcomponent
/// kind plus the cell's own chrome.
///
/// Slots are explicitly cleared on [`MessageView::reset`] and refilled by
/// the next configuration.
pub struct MessageView {
    pub root: ViewNode,
    pub avatar: ViewNode,
    pub avatar_image: Option<String>,
    pub bubble: ViewNode,
    pub content_stack: ViewNode,
    pub selection: ViewNode,
    pub is_selected: bool,
    pub send_failure_badge: Option<ViewNode>,
    pub reply_icon: ViewNode,
    pub reply_icon_tint: Color,
    pub accessibility_label: Option<String>,
    swipe_content: Option<SwipeContent>,
    has_avatar_layout: bool,
    subcomponents: SubcomponentSlots<Box<dyn ComponentView>>,
}

impl Default for MessageView {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MessageView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageView")
            .field("root", &self.root)
            .field("swipe_content", &self.swipe_content)
            .field("subcomponents", &self.subcomponents.kinds())
            .finish_non_exhaustive()
    }
}

impl MessageView {
    pub fn new() -> Self {
        Self {
            root: ViewNode::default(),
            avatar: ViewNode::default(),
            avatar_image: None,
            bubble: ViewNode::default(),
            content_stack: ViewNode::default(),
            selection: ViewNode {
                is_hidden: true,
                ..ViewNode::default()
            },
            is_selected: false,
            send_failure_badge: None,
            reply_icon: hidden_reply_icon(),
            reply_icon_tint: Color::GRAY_45,
            accessibility_label: None,
            swipe_content: None,
            has_avatar_layout: false,
            subcomponents: SubcomponentSlots::default(),
        }
    }

    pub fn subcomponent_view(&self, kind: ComponentKind) -> Result<Option<&dyn ComponentView>, ContractViolation> {
        match self.subcomponents.slot(kind) {
            Some(slot) => Ok(slot.as_deref()),
            None => Err(ContractViolation::InvalidComponentKind { kind }),
        }
    }

    pub fn subcomponent_view_mut(
        &mut self,
        kind: ComponentKind,
    ) -> Result<Option<&mut (dyn ComponentView + 'static)>, ContractViolation> {
        match self.subcomponents.slot_mut(kind) {
            Some(slot) => Ok(slot.as_deref_mut()),
            None => Err(ContractViolation::InvalidComponentKind { kind }),
        }
    }

    pub fn set_subcomponent_view(
        &mut self,
        kind: ComponentKind,
        view: Option<Box<dyn ComponentView>>,
    ) -> Result<(), ContractViolation> {
        if let Some(actual) = view.as_ref().map(|view| view.kind()) {
            if actual != kind {
                return Err(ContractViolation::UnexpectedComponentView {
                    expected: kind,
                    actual,
                });
            }
        }
        self.subcomponents.set(kind, view).map(|_| ())
    }

    /// Kinds that currently have a view.
    pub fn subcomponent_kinds(&self) -> crate::ActiveSet {
        self.subcomponents.kinds()
    }

    pub fn swipe_content(&self) -> Option<SwipeContent> {
        self.swipe_content
    }

    pub(crate) fn set_swipe_content(&mut self, content: SwipeContent, has_avatar_layout: bool) {
        self.swipe_content = Some(content);
        self.has_avatar_layout = has_avatar_layout;
    }

    fn swipe_content_node(&self) -> Option<&ViewNode> {
        match self.swipe_content? {
            SwipeContent::Bubble => Some(&self.bubble),
            SwipeContent::ContentStack => Some(&self.content_stack),
        }
    }

    fn swipe_content_node_mut(&mut self) -> Option<&mut ViewNode> {
        match self.swipe_content? {
            SwipeContent::Bubble => Some(&mut self.bubble),
            SwipeContent::ContentStack => Some(&mut self.content_stack),
        }
    }

    pub fn set_is_cell_visible(&mut self, is_visible: bool) {
        for kind in ComponentKind::ALL {
            if let Some(view) = self.subcomponents.get_mut(kind) {
                view.set_is_cell_visible(is_visible);
            }
        }
    }

    /// Prepares the arena for another message.
    ///
    /// The body text view survives: it is the most expensive to rebuild and
    /// nearly every message has one.
    pub fn reset(&mut self) {
        self.remove_swipe_animations();

        self.avatar = ViewNode::default();
        self.avatar_image = None;
        self.bubble = ViewNode::default();
        self.content_stack = ViewNode::default();
        self.selection = ViewNode {
            is_hidden: true,
            ..ViewNode::default()
        };
        self.is_selected = false;
        self.send_failure_badge = None;
        self.reply_icon = hidden_reply_icon();
        self.reply_icon_tint = Color::GRAY_45;
        self.accessibility_label = None;
        self.swipe_content = None;
        self.has_avatar_layout = false;

        // A zero root frame marks the cell as not laid out.
        self.root.frame = Rect::ZERO;

        for kind in ComponentKind::ALL {
            if let Some(view) = self.subcomponents.get_mut(kind) {
                view.reset();
            }
        }
        for kind in ComponentKind::ALL {
            if kind != ComponentKind::BodyText {
                self.subcomponents.take(kind);
            }
        }
    }
}

fn hidden_reply_icon() -> ViewNode {
    ViewNode {
        layer: GraphicsLayer {
            alpha: 0.0,
            ..GraphicsLayer::IDENTITY
        },
        ..ViewNode::default()
    }
}

impl SwipeViewHost for MessageView {
    fn is_laid_out(&self) -> bool {
        !self.root.frame.is_zero()
    }

    fn has_content_view(&self) -> bool {
        self.swipe_content.is_some()
    }

    fn center(&self, target: SwipeTarget) -> Option<Point> {
        match target {
            SwipeTarget::Content => self.swipe_content_node().map(ViewNode::center),
            SwipeTarget::Avatar => self.has_avatar_layout.then(|| self.avatar.center()),
            SwipeTarget::ReplyIcon => Some(self.reply_icon.center()),
            SwipeTarget::Reactions => self
                .subcomponents
                .get(ComponentKind::Reactions)
                .map(|view| view.frame().center()),
        }
    }

    fn set_center(&mut self, target: SwipeTarget, center: Point, animation: Option<AnimationSpec>) {
        match target {
            SwipeTarget::Content => {
                if let Some(node) = self.swipe_content_node_mut() {
                    node.set_center(center, animation);
                }
            }
            SwipeTarget::Avatar => self.avatar.set_center(center, animation),
            SwipeTarget::ReplyIcon => self.reply_icon.set_center(center, animation),
            SwipeTarget::Reactions => {
                if let Some(view) = self.subcomponents.get_mut(ComponentKind::Reactions) {
                    let frame = view.frame().with_center(center);
                    view.set_frame(frame, animation);
                }
            }
        }
    }

    fn set_reply_icon_alpha(&mut self, alpha: f32, animation: Option<AnimationSpec>) {
        self.reply_icon.layer.alpha = alpha;
        if animation.is_some() {
            self.reply_icon.animation = animation.map(AnimationType::Tween);
        }
    }

    fn set_reply_icon_style(&mut self, style: ReplyIconStyle, spring: Option<SpringSpec>) {
        self.reply_icon.animation = spring.map(AnimationType::Spring);
        self.reply_icon.layer.scale = style.scale;
        self.reply_icon_tint = style.tint;
    }

    fn remove_swipe_animations(&mut self) {
        if let Some(node) = self.swipe_content_node_mut() {
            node.remove_animations();
        }
        self.avatar.remove_animations();
        self.reply_icon.remove_animations();
        if let Some(view) = self.subcomponents.get_mut(ComponentKind::Reactions) {
            view.remove_animations();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_subcomponent_slots_are_rejected() {
        let mut view = MessageView::new();
        assert!(matches!(
            view.subcomponent_view(ComponentKind::SenderAvatar),
            Err(ContractViolation::InvalidComponentKind {
                kind: ComponentKind::SenderAvatar
            })
        ));
        assert_eq!(
            view.set_subcomponent_view(ComponentKind::DateHeader, None),
            Err(ContractViolation::InvalidComponentKind {
                kind: ComponentKind::DateHeader
            })
        );
        assert!(matches!(
            view.subcomponent_view(ComponentKind::BodyText),
            Ok(None)
        ));
    }

    #[test]
    fn swipe_host_requires_content_and_layout() {
        let mut view = MessageView::new();
        assert!(!view.has_content_view());
        assert!(!view.is_laid_out());
        assert_eq!(view.center(SwipeTarget::Content), None);

        view.set_swipe_content(SwipeContent::Bubble, false);
        view.bubble.frame = Rect::new(10.0, 0.0, 100.0, 40.0);
        view.root.frame = Rect::new(0.0, 0.0, 200.0, 40.0);
        assert!(view.is_laid_out());
        assert_eq!(view.center(SwipeTarget::Content), Some(Point::new(60.0, 20.0)));
        assert_eq!(view.center(SwipeTarget::Avatar), None);

        view.set_center(SwipeTarget::Content, Point::new(80.0, 20.0), None);
        assert_eq!(view.bubble.frame, Rect::new(30.0, 0.0, 100.0, 40.0));
    }

    #[test]
    fn reply_icon_style_and_alpha() {
        let mut view = MessageView::new();
        assert_eq!(view.reply_icon.layer.alpha, 0.0);

        view.set_reply_icon_style(ReplyIconStyle::armed(true), Some(SpringSpec::new(200, 0.06, 0.8)));
        assert_eq!(view.reply_icon.layer.scale, ReplyIconStyle::armed(true).scale);
        assert_eq!(view.reply_icon_tint, Color::GRAY_25);
        assert!(matches!(view.reply_icon.animation, Some(AnimationType::Spring(_))));

        view.set_reply_icon_alpha(1.0, None);
        view.remove_swipe_animations();
        assert_eq!(view.reply_icon.layer.alpha, 1.0);
        assert_eq!(view.reply_icon.animation, None);
    }
}
