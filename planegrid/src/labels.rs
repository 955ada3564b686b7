// Copyright 2025 the Planegrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label placement.
//!
//! Labels sit next to the tick of their stop. Text on the vertical axis is
//! kept inside the surface horizontally and text on the horizontal axis is
//! kept inside it vertically, so labels stay readable when the axis line is
//! panned to an edge.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Point;
use peniko::Color;
use planegrid_text::{TextMeasurer, TextStyle};

use crate::axis::{Orientation, clamp_or_lower};
use crate::geometry::{AxisGeometry, approx_eq};
use crate::layout::GridLayout;

/// Final position of one label.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelPlacement {
    /// Label text.
    pub text: String,
    /// Top-left corner of the text box in device pixels.
    pub position: Point,
    /// The axis the label belongs to.
    pub orientation: Orientation,
    /// Fill color.
    pub color: Color,
    /// Font used for measurement (and for drawing).
    pub style: TextStyle,
    /// Measured advance width.
    pub width: f64,
}

/// Places the labels of `axis` using the anchors from [`generate`](crate::generate).
pub fn place(
    layout: &GridLayout,
    axis: Orientation,
    geometry: &AxisGeometry,
    measurer: &dyn TextMeasurer,
) -> Vec<LabelPlacement> {
    let state = layout.state(axis);
    let opposite = layout.opposite(axis);
    let mut out = Vec::new();
    let Some(color) = state.label_color else {
        return out;
    };
    if geometry.label_anchors.is_empty() {
        return out;
    }

    let width = state.surface.width();
    let height = state.surface.height();
    let usable = state.usable_size();
    let pad = state.padding;
    let text_height = state.text_style.font_size;
    let indent = state.axis_width + 1.5;
    let text_offset = if state.tick_align < 0.5 {
        -text_height - state.axis_width * 2.0
    } else {
        state.axis_width * 2.0
    };
    let skip_crossing = axis == Orientation::Y && opposite.enabled;

    for (i, label) in state.labels.iter().enumerate() {
        let Some(text) = label else {
            continue;
        };
        let Some(anchor) = geometry.label_anchors.get(i) else {
            continue;
        };
        if !anchor.is_finite() {
            continue;
        }
        let Some(value) = state.lines.get(i) else {
            continue;
        };
        if skip_crossing && approx_eq(*value, opposite.axis_origin) {
            continue;
        }

        let text_width = measurer.measure(text, &state.text_style).advance_width;
        let mut left = anchor.x * usable.width + indent + pad.x0;
        if axis == Orientation::Y {
            left = clamp_or_lower(left, indent, width - text_width - 1.0 - state.axis_width);
        }
        let mut top = anchor.y * usable.height + text_offset + pad.y0;
        if axis == Orientation::X {
            top = clamp_or_lower(top, 0.0, height - text_height - text_offset);
        }

        out.push(LabelPlacement {
            text: text.clone(),
            position: Point::new(left, top),
            orientation: axis,
            color,
            style: state.text_style.clone(),
            width: text_width,
        });
    }
    out
}
