// Copyright 2025 the Planegrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coordinate resolution.
//!
//! [`resolve`] turns an [`AxisDefinition`] and the current [`Surface`] into a
//! [`LayoutState`]: numeric range/offset/zoom, resolved padding and style, and
//! the parallel `lines` / `line_colors` / `ticks` / `labels` arrays. The state
//! is rebuilt from scratch on every update and never patched in place.
//!
//! Resolution never fails. Malformed style input resolves to "not drawn" and
//! degenerate surfaces resolve to an empty line set.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use kurbo::{Insets, Point, Size};
use log::{trace, warn};
use peniko::Color;
use planegrid_text::TextStyle;

use crate::axis::{AxisDefinition, AxisStrategy, Orientation, clamp_or_lower};
use crate::color::{ColorService, Paint};
use crate::policy::{Labels, LineColors, Lines, Padding, Ticks};
use crate::stops;
use crate::surface::Surface;

/// Renderer-ready snapshot of one axis for one update cycle.
///
/// `lines`, `line_colors`, `ticks` and `labels` always have the same length;
/// entry `i` of each describes stop `lines[i]`. A `None` color is never drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutState {
    /// Which axis this state belongs to.
    pub orientation: Orientation,
    /// The surface the state was resolved for.
    pub surface: Surface,
    /// Visible span in value units.
    pub range: f64,
    /// Value at the start of the visible window.
    pub offset: f64,
    /// Zoom the state was resolved with.
    pub zoom: f64,
    /// Padding in device pixels (`x0` left, `y0` top, `x1` right, `y1` bottom).
    pub padding: Insets,
    /// Axis line and tick color.
    pub axis_color: Option<Color>,
    /// Axis line and tick width in device pixels.
    pub axis_width: f64,
    /// Gridline width in device pixels.
    pub line_width: f64,
    /// Tick split across the axis line.
    pub tick_align: f64,
    /// Label color.
    pub label_color: Option<Color>,
    /// Label font, sized in device pixels.
    pub text_style: TextStyle,
    /// Stop values.
    pub lines: Vec<f64>,
    /// Gridline color per stop.
    pub line_colors: Vec<Option<Color>>,
    /// Tick length per stop in device pixels; `0` means no tick.
    pub ticks: Vec<f64>,
    /// Label text per stop.
    pub labels: Vec<Option<String>>,
    /// Value on the opposite axis where this axis' line sits.
    pub axis_origin: f64,
    /// Whether the axis line is requested.
    pub show_axis: bool,
    /// Whether the axis produces any output.
    pub enabled: bool,
}

impl LayoutState {
    /// The orientation strategy for this axis.
    pub fn strategy(&self) -> &'static dyn AxisStrategy {
        self.orientation.strategy()
    }

    /// Normalized position of `value` along this axis.
    pub fn ratio(&self, value: f64) -> f64 {
        self.strategy().ratio(value, self.offset, self.range)
    }

    /// Value at the normalized position `ratio`.
    pub fn value_at(&self, ratio: f64) -> f64 {
        self.strategy().value(ratio, self.offset, self.range)
    }

    /// The visible window `(offset, offset + range)`.
    pub fn window(&self) -> (f64, f64) {
        (self.offset, self.offset + self.range)
    }

    /// Surface size minus padding.
    pub fn usable_size(&self) -> Size {
        let Size { width, height } = self.surface.size;
        Size::new(
            width - self.padding.x0 - self.padding.x1,
            height - self.padding.y0 - self.padding.y1,
        )
    }

    /// Maps a normalized point to device pixels.
    pub fn to_device(&self, p: Point) -> Point {
        let usable = self.usable_size();
        Point::new(
            self.padding.x0 + p.x * usable.width,
            self.padding.y0 + p.y * usable.height,
        )
    }

    /// Maps a device pixel back to normalized space.
    pub fn from_device(&self, p: Point) -> Point {
        let usable = self.usable_size();
        Point::new(
            (p.x - self.padding.x0) / usable.width,
            (p.y - self.padding.y0) / usable.height,
        )
    }

    /// Usable length along this axis in device pixels.
    fn extent(&self) -> f64 {
        let usable = self.usable_size();
        match self.orientation {
            Orientation::X => usable.width,
            Orientation::Y => usable.height,
        }
    }
}

/// Clamps the visible window `[offset, offset + range]` into `[min, max]`.
///
/// `origin` is the fraction of the window at which `offset` sits. When the
/// window is wider than the domain the clamp interval inverts and the lower
/// bound wins.
pub fn clamp_offset(offset: f64, range: f64, origin: f64, min: f64, max: f64) -> f64 {
    let origin = if origin.is_nan() {
        0.5
    } else {
        origin.clamp(0.0, 1.0)
    };
    let lo = min.max(-f64::MAX);
    let hi = max.min(f64::MAX) - range;
    clamp_or_lower(offset - range * origin, lo, hi)
}

/// Resolves one axis definition against the surface.
pub fn resolve(
    axis: &AxisDefinition,
    surface: &Surface,
    colors: &dyn ColorService,
) -> LayoutState {
    let scale = surface.scale();
    let zoom = axis.zoom();
    let range = axis.orientation().strategy().range(zoom, surface.size);
    let offset = clamp_offset(axis.offset, range, axis.origin, axis.min, axis.max);

    let line_width = axis.line_width * scale;
    let axis_width = scale
        * if axis.axis_width > 0.0 {
            axis.axis_width
        } else {
            axis.line_width
        };

    let mut state = LayoutState {
        orientation: axis.orientation(),
        surface: *surface,
        range,
        offset,
        zoom,
        padding: Insets::ZERO,
        axis_color: axis.axis_color.resolve(axis.color, colors),
        axis_width,
        line_width,
        tick_align: axis.tick_align,
        label_color: axis.label_color.resolve(axis.color, colors),
        text_style: TextStyle::new(axis.font_size.to_px() * scale)
            .with_family(axis.font_family.clone()),
        lines: Vec::new(),
        line_colors: Vec::new(),
        ticks: Vec::new(),
        labels: Vec::new(),
        axis_origin: axis.axis_origin,
        show_axis: axis.axis,
        enabled: axis.enabled,
    };

    state.padding = match &axis.padding {
        Padding::Uniform(p) => Insets::uniform(*p),
        Padding::Sides(insets) => *insets,
        Padding::Generator(g) => g.call(&state),
    };

    if !(range > 0.0 && range.is_finite()) {
        trace!("{:?} axis: degenerate range {range}, no lines", axis.orientation());
        return state;
    }

    state.lines = match &axis.lines {
        Lines::Auto => {
            let extent = state.extent();
            let min_step = range * axis.distance * scale / extent;
            stops::stepped(offset, range, min_step)
        }
        Lines::Disabled => Vec::new(),
        Lines::Values(values) => values.clone(),
        Lines::Generator(g) => g.call(&state),
    };
    let n = state.lines.len();

    state.line_colors = match &axis.line_color {
        LineColors::Uniform(paint) => vec![paint.resolve(axis.color, colors); n],
        LineColors::PerLine(paints) => resolve_paints(paints, axis.color, colors),
        LineColors::Generator(g) => resolve_paints(&g.call(&state), axis.color, colors),
    };
    state.line_colors.resize(n, None);

    state.ticks = match &axis.ticks {
        Ticks::None | Ticks::Sparse(_) => vec![0.0; n],
        Ticks::Enabled => vec![axis_width * 2.0; n],
        Ticks::Length(length) => vec![*length * scale; n],
        Ticks::PerLine(lengths) => lengths.iter().map(|t| *t * scale).collect(),
        Ticks::Generator(g) => g.call(&state).into_iter().map(|t| t * scale).collect(),
    };
    state.ticks.resize(n, 0.0);

    state.labels = match &axis.labels {
        Labels::None | Labels::Sparse(_) => vec![None; n],
        Labels::Stops => state
            .lines
            .iter()
            .map(|v| Some(axis.format_stop(*v)))
            .collect(),
        Labels::PerLine(labels) => labels.clone(),
        Labels::Generator(g) => g.call(&state),
    };
    state.labels.resize(n, None);

    if let Ticks::Sparse(entries) = &axis.ticks {
        for (value, tick) in entries {
            if !value.is_finite() {
                warn!("{:?} axis: skipping sparse tick at {value}", axis.orientation());
                continue;
            }
            state.push_stop(*value, *tick * scale, None);
        }
    }
    if let Labels::Sparse(entries) = &axis.labels {
        for (value, label) in entries {
            if !value.is_finite() {
                warn!("{:?} axis: skipping sparse label at {value}", axis.orientation());
                continue;
            }
            state.push_stop(*value, 0.0, Some(label.clone()));
        }
    }

    trace!(
        "{:?} axis: range={range} offset={offset} zoom={zoom} stops={}",
        axis.orientation(),
        state.lines.len()
    );
    state
}

impl LayoutState {
    /// Appends a one-off stop that has no gridline of its own.
    fn push_stop(&mut self, value: f64, tick: f64, label: Option<String>) {
        self.lines.push(value);
        self.line_colors.push(None);
        self.ticks.push(tick);
        self.labels.push(label);
    }
}

fn resolve_paints(paints: &[Paint], base: Color, colors: &dyn ColorService) -> Vec<Option<Color>> {
    paints.iter().map(|p| p.resolve(base, colors)).collect()
}
