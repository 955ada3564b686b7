// Copyright 2025 the Planegrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Handing finished geometry to a renderer.

use alloc::vec::Vec;

use planegrid_text::TextMeasurer;

use crate::axis::Orientation;
use crate::geometry::{GridSegment, generate};
use crate::labels::{LabelPlacement, place};
use crate::layout::GridLayout;

/// A renderer that draws grid primitives.
///
/// A frame is submitted as one `clear_grid` call followed by every stroke and
/// then every label. The sink owns anything it draws until the next clear.
pub trait GridSink {
    /// Removes the primitives of the previous frame.
    fn clear_grid(&mut self);
    /// Strokes one segment.
    fn stroke(&mut self, segment: &GridSegment);
    /// Draws one label.
    fn text(&mut self, label: &LabelPlacement);
}

/// Everything drawn for one layout.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GridFrame {
    /// Segments of both axes: x axis first, each in paint order.
    pub segments: Vec<GridSegment>,
    /// Labels of both axes, x axis first.
    pub labels: Vec<LabelPlacement>,
}

impl GridFrame {
    /// Generates geometry and places labels for both axes of `layout`.
    pub fn build(layout: &GridLayout, measurer: &dyn TextMeasurer) -> Self {
        let mut frame = Self::default();
        for axis in [Orientation::X, Orientation::Y] {
            let geometry = generate(layout, axis);
            frame
                .labels
                .extend(place(layout, axis, &geometry, measurer));
            frame.segments.extend(geometry.segments);
        }
        frame
    }

    /// Replaces whatever `sink` shows with this frame.
    pub fn submit(&self, sink: &mut dyn GridSink) {
        sink.clear_grid();
        for segment in &self.segments {
            sink.stroke(segment);
        }
        for label in &self.labels {
            sink.text(label);
        }
    }

    /// Returns `true` if the frame draws nothing.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty() && self.labels.is_empty()
    }
}
