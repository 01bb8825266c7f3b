//! Manual stack layout: measurement and arrangement of pre-measured children.
//!
//! A stack never asks its children to measure themselves. Callers measure
//! each child first and hand the sizes in, which keeps stack math pure and
//! lets the same sizes be re-used when the stack is placed at render time.

use msgcell_ui_graphics::{EdgeInsets, Point, Rect, Size};
use smallvec::SmallVec;

use crate::Axis;

/// Inline capacity for per-child data. Message stacks rarely exceed six
/// members, so eight avoids heap allocation in practice.
pub type SmallSizeVec = SmallVec<[Size; 8]>;
pub type SmallRectVec = SmallVec<[Rect; 8]>;

/// Cross-axis alignment of stack children.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StackAlignment {
    /// Children are stretched to the stack's inner cross extent.
    Fill,
    /// Align children to the leading (or top) edge.
    Start,
    /// Align children to the center.
    Center,
    /// Align children to the trailing (or bottom) edge.
    End,
}

impl StackAlignment {
    /// Computes the cross-axis offset for a child of extent `child` inside
    /// `available`.
    pub fn align(&self, available: f32, child: f32) -> f32 {
        match self {
            StackAlignment::Fill | StackAlignment::Start => 0.0,
            StackAlignment::Center => ((available - child) / 2.0).max(0.0),
            StackAlignment::End => (available - child).max(0.0),
        }
    }
}

/// Configuration of one stack: axis, alignment, spacing and margins.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StackConfig {
    pub axis: Axis,
    pub alignment: StackAlignment,
    /// Fixed gap inserted between adjacent children only.
    pub spacing: f32,
    pub margins: EdgeInsets,
}

impl StackConfig {
    pub fn vertical(spacing: f32, margins: EdgeInsets) -> Self {
        Self {
            axis: Axis::Vertical,
            alignment: StackAlignment::Fill,
            spacing,
            margins,
        }
    }

    pub fn horizontal(spacing: f32, margins: EdgeInsets) -> Self {
        Self {
            axis: Axis::Horizontal,
            alignment: StackAlignment::Start,
            spacing,
            margins,
        }
    }

    pub fn with_alignment(mut self, alignment: StackAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Width left for children once horizontal margins are taken out of
    /// `max_width`.
    pub fn inner_max_width(&self, max_width: f32) -> f32 {
        (max_width - self.margins.horizontal_sum()).max(0.0)
    }
}

/// Result of measuring a stack: its total size plus the child sizes it was
/// computed from, kept for arrangement.
#[derive(Clone, Debug, PartialEq)]
pub struct StackMeasurement {
    pub measured_size: Size,
    pub subview_sizes: SmallSizeVec,
}

impl StackMeasurement {
    pub fn is_empty(&self) -> bool {
        self.subview_sizes.is_empty()
    }
}

/// Measures a stack from its children's sizes.
///
/// Children are summed along the main axis with `spacing` between present
/// children, the cross extent is the largest child, and margins are added on
/// both axes.
pub fn measure_stack(config: &StackConfig, subview_sizes: &[Size]) -> StackMeasurement {
    let axis = config.axis;
    let mut main = 0.0f32;
    let mut cross = 0.0f32;
    for (index, size) in subview_sizes.iter().enumerate() {
        main += axis.main(*size);
        if index + 1 < subview_sizes.len() {
            main += config.spacing;
        }
        cross = cross.max(axis.cross(*size));
    }
    let content = axis.size(main, cross);
    let margins = config.margins;
    StackMeasurement {
        measured_size: Size::new(
            content.width + margins.horizontal_sum(),
            content.height + margins.vertical_sum(),
        ),
        subview_sizes: subview_sizes.iter().copied().collect(),
    }
}

fn fill_positions(start: f32, gap: f32, sizes: &[f32], out_positions: &mut [f32]) {
    debug_assert_eq!(sizes.len(), out_positions.len());
    let mut cursor = start;
    for (index, (size, position)) in sizes.iter().zip(out_positions.iter_mut()).enumerate() {
        *position = cursor;
        cursor += size;
        if index + 1 < sizes.len() {
            cursor += gap;
        }
    }
}

/// Places the children of a measured stack inside a container of
/// `container_size`, returning one frame per child in the container's
/// coordinate space (origin at the container's top-left).
pub fn arrange_stack(
    config: &StackConfig,
    measurement: &StackMeasurement,
    container_size: Size,
) -> SmallRectVec {
    let axis = config.axis;
    let margins = config.margins;
    let inner = Size::new(
        (container_size.width - margins.horizontal_sum()).max(0.0),
        (container_size.height - margins.vertical_sum()).max(0.0),
    );
    let inner_origin = Point::new(margins.left, margins.top);

    let main_sizes: SmallVec<[f32; 8]> = measurement
        .subview_sizes
        .iter()
        .map(|size| axis.main(*size))
        .collect();
    let mut positions: SmallVec<[f32; 8]> = SmallVec::from_elem(0.0, main_sizes.len());
    fill_positions(0.0, config.spacing, &main_sizes, &mut positions);

    let available_cross = axis.cross(inner);
    measurement
        .subview_sizes
        .iter()
        .zip(positions.iter())
        .map(|(size, main_position)| {
            let child_cross = match config.alignment {
                StackAlignment::Fill => available_cross,
                _ => axis.cross(*size),
            };
            let cross_position = config.alignment.align(available_cross, child_cross);
            let child_size = axis.size(axis.main(*size), child_cross);
            let offset = match axis {
                Axis::Horizontal => Point::new(*main_position, cross_position),
                Axis::Vertical => Point::new(cross_position, *main_position),
            };
            Rect::from_origin_size(inner_origin + offset, child_size)
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/stack_tests.rs"]
mod tests;
