//! Pure size computation for a composed message.

use msgcell_ui_graphics::{EdgeInsets, Size};
use msgcell_ui_layout::{
    measure_stack, CellMeasurement, MeasurementCache, MeasurementKey, SmallSizeVec, StackAlignment,
    StackConfig, StackMeasurement,
};
use std::time::Duration;
use web_time::Instant;

use crate::composer::{no_margins_config, Composition, CONTENT_STACK_KEY, H_INNER_STACK_KEY, REACTIONS_KEY};
use crate::{ComponentKind, ConversationStyle};

/// Time budget for measuring one cell.
const MEASURE_TIME_BUDGET: Duration = Duration::from_millis(16);

/// Horizontal space taken up around the bubble, derived from the
/// composition.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ReservedSpace {
    /// Avatar, selection and failure badge slots, each with its spacing.
    pub width: f32,
    /// The avatar's diameter when an avatar slot is reserved.
    pub min_height: f32,
}

impl ReservedSpace {
    pub fn of(composition: &Composition, style: &ConversationStyle) -> Self {
        let mut reserved = ReservedSpace::default();
        if composition.has_sender_avatar_layout() {
            reserved.width +=
                ConversationStyle::GROUP_MESSAGE_AVATAR_DIAMETER + ConversationStyle::MESSAGE_STACK_SPACING;
            reserved.min_height = ConversationStyle::GROUP_MESSAGE_AVATAR_DIAMETER;
        }
        if composition.is_showing_selection_ui() {
            reserved.width +=
                ConversationStyle::SELECTION_VIEW_WIDTH + ConversationStyle::MESSAGE_STACK_SPACING;
        }
        if composition.has_send_failure_badge() {
            reserved.width += style.send_failure_badge_size() + ConversationStyle::MESSAGE_STACK_SPACING;
        }
        reserved
    }
}

/// Horizontal stack of the avatar slot and the content.
pub fn h_inner_stack_config() -> StackConfig {
    StackConfig::horizontal(ConversationStyle::MESSAGE_STACK_SPACING, EdgeInsets::ZERO)
        .with_alignment(StackAlignment::End)
}

/// Measures composed messages.
///
/// Measurement never touches views, so it can run ahead of rendering (for
/// prefetch sizing) as often as needed with the same result.
pub struct MeasurementEngine<'a> {
    style: &'a ConversationStyle,
}

impl<'a> MeasurementEngine<'a> {
    pub fn new(style: &'a ConversationStyle) -> Self {
        Self { style }
    }

    /// Width available to the content stack for a cell `max_width` wide.
    pub fn content_max_width(&self, composition: &Composition, max_width: f32) -> f32 {
        let outer_max = (max_width - self.style.gutters_width()).max(0.0);
        let reserved = ReservedSpace::of(composition, self.style);
        (outer_max - (reserved.width + ConversationStyle::MESSAGE_DIRECTION_SPACING))
            .min(self.style.max_message_width)
            .max(0.0)
    }

    /// Measures every stack of `composition` once.
    pub fn measure(&self, composition: &Composition, max_width: f32) -> CellMeasurement {
        self.measure_pass(composition, max_width, None)
    }

    /// Like [`MeasurementEngine::measure`], sharing stack measurements with
    /// earlier calls for the *same* composition through `cache`. Each stack
    /// is measured once per pass, so a cold cache never hits; this pays off
    /// when a prefetched composition is measured again at render time.
    pub fn measure_with_cache(
        &self,
        composition: &Composition,
        max_width: f32,
        cache: &mut MeasurementCache,
    ) -> CellMeasurement {
        self.measure_pass(composition, max_width, Some(cache))
    }

    fn measure_pass(
        &self,
        composition: &Composition,
        max_width: f32,
        mut cache: Option<&mut MeasurementCache>,
    ) -> CellMeasurement {
        let start_time = Instant::now();
        let scale = self.style.pixel_scale;
        let registry = composition.registry();
        let reserved = ReservedSpace::of(composition, self.style);
        let content_max_width = self.content_max_width(composition, max_width);

        let mut builder = CellMeasurement::builder();
        let mut group_sizes = SmallSizeVec::new();
        for group in composition.groups() {
            let measurement = cached(cache.as_deref_mut(), group.key(), content_max_width, || {
                let member_max_width = group.config.inner_max_width(content_max_width);
                let sizes: SmallSizeVec = group
                    .members
                    .iter()
                    .filter_map(|kind| registry.get(*kind))
                    .map(|renderer| scale.ceil_size(renderer.measure(member_max_width)))
                    .collect();
                measure_stack(&group.config, &sizes)
            });
            group_sizes.push(scale.ceil_size(measurement.measured_size));
            builder.record(group.key(), measurement);
        }

        let content = cached(cache.as_deref_mut(), CONTENT_STACK_KEY, content_max_width, || {
            measure_stack(composition.content_stack(), &group_sizes)
        });
        let content_size = scale.ceil_size(content.measured_size);
        builder.record(CONTENT_STACK_KEY, content);

        let mut inner_sizes = SmallSizeVec::new();
        if composition.has_sender_avatar_layout() {
            inner_sizes.push(Size::square(ConversationStyle::GROUP_MESSAGE_AVATAR_DIAMETER));
        }
        inner_sizes.push(content_size);
        builder.record(H_INNER_STACK_KEY, measure_stack(&h_inner_stack_config(), &inner_sizes));

        if let Some(reactions) = registry.get(ComponentKind::Reactions) {
            let size = scale.ceil_size(reactions.measure(content_max_width));
            builder.record(REACTIONS_KEY, measure_stack(&no_margins_config(), &[size]));
        }

        let mut cell_size = Size::new(
            (reserved.width + content_size.width).max(self.style.min_bubble_width()),
            reserved.min_height.max(content_size.height),
        );
        if composition.has_reactions() {
            cell_size.height += self.style.reactions_protrusion();
        }
        let cell_size = scale.ceil_size(cell_size);

        if start_time.elapsed() > MEASURE_TIME_BUDGET {
            log::warn!(
                "measuring message {} took {:?} ({} groups)",
                composition.state().interaction_id,
                start_time.elapsed(),
                composition.groups().len()
            );
        }
        builder.build(cell_size)
    }
}

fn cached(
    cache: Option<&mut MeasurementCache>,
    key: MeasurementKey,
    max_width: f32,
    measure: impl FnOnce() -> StackMeasurement,
) -> StackMeasurement {
    match cache {
        Some(cache) => cache.get_or_measure(key, max_width, measure),
        None => measure(),
    }
}

/// Size of one recorded stack, if it was measured.
pub fn stack_size(measurement: &CellMeasurement, key: MeasurementKey) -> Option<Size> {
    measurement.stack(key).map(|stack| stack.measured_size)
}
