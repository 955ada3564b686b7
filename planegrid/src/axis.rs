// Copyright 2025 the Planegrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis definitions.
//!
//! An [`AxisDefinition`] is the declarative description of one grid dimension:
//! its value domain, the current pan/zoom state, and the policies that decide
//! where lines, ticks and labels go. The orientation-specific math lives in the
//! [`AxisStrategy`] implementations, selected once by [`Orientation`].

use alloc::string::String;
use alloc::sync::Arc;

use kurbo::{Line, Point, Size};
use peniko::Color;
use peniko::color::palette::css;
use planegrid_text::{FontFamily, FontSize};

use crate::color::Paint;
use crate::policy::{Labels, LineColors, Lines, Padding, Ticks};

/// Which way an axis runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Horizontal axis; its gridlines are vertical.
    X,
    /// Vertical axis; its gridlines are horizontal.
    Y,
}

impl Orientation {
    /// Returns the orientation of the orthogonal axis.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }

    /// Returns the strategy implementing this orientation's math.
    #[must_use]
    pub fn strategy(self) -> &'static dyn AxisStrategy {
        match self {
            Self::X => &HorizontalAxis,
            Self::Y => &VerticalAxis,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
        }
    }
}

/// Orientation-specific mapping between values and normalized axis space.
///
/// Normalized space is the unit square of the padded drawing area with its
/// origin in the top-left corner.
pub trait AxisStrategy: core::fmt::Debug {
    /// Visible span in value units for the given zoom and surface size.
    fn range(&self, zoom: f64, surface: Size) -> f64;

    /// Maps `value` to its `0..1` position along the axis.
    fn ratio(&self, value: f64, offset: f64, range: f64) -> f64;

    /// Inverse of [`AxisStrategy::ratio`].
    fn value(&self, ratio: f64, offset: f64, range: f64) -> f64;

    /// The normalized gridline through `ratio`, spanning the full
    /// perpendicular extent.
    fn segment(&self, ratio: f64) -> Line;
}

/// Strategy for [`Orientation::X`].
#[derive(Clone, Copy, Debug, Default)]
pub struct HorizontalAxis;

impl AxisStrategy for HorizontalAxis {
    fn range(&self, zoom: f64, surface: Size) -> f64 {
        surface.width * zoom
    }

    fn ratio(&self, value: f64, offset: f64, range: f64) -> f64 {
        (value - offset) / range
    }

    fn value(&self, ratio: f64, offset: f64, range: f64) -> f64 {
        offset + ratio * range
    }

    fn segment(&self, ratio: f64) -> Line {
        Line::new(Point::new(ratio, 0.0), Point::new(ratio, 1.0))
    }
}

/// Strategy for [`Orientation::Y`].
///
/// Values grow upwards, so the ratio is flipped against the top-left origin.
#[derive(Clone, Copy, Debug, Default)]
pub struct VerticalAxis;

impl AxisStrategy for VerticalAxis {
    fn range(&self, zoom: f64, surface: Size) -> f64 {
        surface.height * zoom
    }

    fn ratio(&self, value: f64, offset: f64, range: f64) -> f64 {
        1.0 - (value - offset) / range
    }

    fn value(&self, ratio: f64, offset: f64, range: f64) -> f64 {
        offset + (1.0 - ratio) * range
    }

    fn segment(&self, ratio: f64) -> Line {
        Line::new(Point::new(0.0, ratio), Point::new(1.0, ratio))
    }
}

/// Formats a stop value into label text.
pub type Formatter = Arc<dyn Fn(f64) -> String>;

/// Declarative description of one grid axis.
///
/// Created once from defaults plus user configuration; pan/zoom updates only
/// touch [`AxisDefinition::offset`] and the zoom.
#[derive(Clone)]
pub struct AxisDefinition {
    orientation: Orientation,
    zoom: f64,
    min_zoom: f64,
    max_zoom: f64,
    /// Lower bound of the value domain.
    pub min: f64,
    /// Upper bound of the value domain.
    pub max: f64,
    /// Pan position in value units, anchored at [`AxisDefinition::origin`].
    pub offset: f64,
    /// Fraction of the visible window at which `offset` sits (`0.5` centers it).
    pub origin: f64,
    /// Value on the opposite axis at which this axis' line is drawn.
    pub axis_origin: f64,
    /// Padding around the drawing area, in device pixels.
    pub padding: Padding,
    /// Line stop policy.
    pub lines: Lines,
    /// Per-line gridline colors.
    pub line_color: LineColors,
    /// Tick length policy, in CSS pixels.
    pub ticks: Ticks,
    /// How a tick is split across the axis line (`0..1`).
    pub tick_align: f64,
    /// Label text policy.
    pub labels: Labels,
    /// Label color.
    pub label_color: Paint,
    /// Label font size.
    pub font_size: FontSize,
    /// Label font family.
    pub font_family: FontFamily,
    /// Base color that [`Paint::Opacity`] values apply to.
    pub color: Color,
    /// Whether to draw the axis line.
    pub axis: bool,
    /// Axis line and tick width in CSS pixels; `0` falls back to `line_width`.
    pub axis_width: f64,
    /// Axis line and tick color.
    pub axis_color: Paint,
    /// Gridline width in CSS pixels.
    pub line_width: f64,
    /// A disabled axis produces no geometry or labels.
    pub enabled: bool,
    /// Whether pan gestures may move `offset`.
    pub pan_enabled: bool,
    /// Whether zoom gestures may change the zoom.
    pub zoom_enabled: bool,
    /// Minimum spacing between [`Lines::Auto`] stops, in CSS pixels.
    pub distance: f64,
    /// Label formatter used by [`Labels::Stops`].
    pub formatter: Option<Formatter>,
}

impl core::fmt::Debug for AxisDefinition {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AxisDefinition")
            .field("orientation", &self.orientation)
            .field("zoom", &self.zoom)
            .field("min_zoom", &self.min_zoom)
            .field("max_zoom", &self.max_zoom)
            .field("min", &self.min)
            .field("max", &self.max)
            .field("offset", &self.offset)
            .field("origin", &self.origin)
            .field("axis_origin", &self.axis_origin)
            .field("padding", &self.padding)
            .field("lines", &self.lines)
            .field("line_color", &self.line_color)
            .field("ticks", &self.ticks)
            .field("tick_align", &self.tick_align)
            .field("labels", &self.labels)
            .field("label_color", &self.label_color)
            .field("font_size", &self.font_size)
            .field("font_family", &self.font_family)
            .field("color", &self.color)
            .field("axis", &self.axis)
            .field("axis_width", &self.axis_width)
            .field("axis_color", &self.axis_color)
            .field("line_width", &self.line_width)
            .field("enabled", &self.enabled)
            .field("pan_enabled", &self.pan_enabled)
            .field("zoom_enabled", &self.zoom_enabled)
            .field("distance", &self.distance)
            .field("formatter", &self.formatter.is_some())
            .finish()
    }
}

impl AxisDefinition {
    /// Creates an axis definition with the default grid policy.
    ///
    /// The returned axis has:
    /// - an unbounded domain, `offset = 0`, `zoom = 1` (zoom bounds `0..inf`),
    /// - `origin = 0.5` and `axis_origin = 0`,
    /// - automatic line stops at least 13px apart, drawn at 40% opacity,
    /// - labels on every stop, no ticks,
    /// - an axis line 1.5px wide at 80% opacity, and an 11pt sans-serif font.
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            zoom: 1.0,
            min_zoom: 0.0,
            max_zoom: f64::INFINITY,
            min: f64::NEG_INFINITY,
            max: f64::INFINITY,
            offset: 0.0,
            origin: 0.5,
            axis_origin: 0.0,
            padding: Padding::Uniform(0.0),
            lines: Lines::Auto,
            line_color: LineColors::Uniform(Paint::Opacity(0.4)),
            ticks: Ticks::None,
            tick_align: 0.5,
            labels: Labels::Stops,
            label_color: Paint::Opacity(1.0),
            font_size: FontSize::default(),
            font_family: FontFamily::SansSerif,
            color: css::BLACK,
            axis: true,
            axis_width: 1.5,
            axis_color: Paint::Opacity(0.8),
            line_width: 1.0,
            enabled: true,
            pan_enabled: true,
            zoom_enabled: true,
            distance: 13.0,
            formatter: None,
        }
    }

    /// Convenience constructor for the horizontal axis.
    pub fn x() -> Self {
        Self::new(Orientation::X)
    }

    /// Convenience constructor for the vertical axis.
    pub fn y() -> Self {
        Self::new(Orientation::Y)
    }

    /// Returns the axis orientation.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns the current zoom, always within the zoom bounds.
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Returns the `(min_zoom, max_zoom)` bounds.
    pub fn zoom_bounds(&self) -> (f64, f64) {
        (self.min_zoom, self.max_zoom)
    }

    /// Sets the zoom, clamped to the zoom bounds. NaN is ignored.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom.is_nan() {
            return;
        }
        self.zoom = clamp_or_lower(zoom, self.min_zoom, self.max_zoom);
    }

    /// Sets the zoom bounds and re-clamps the current zoom.
    ///
    /// Negative or NaN bounds are raised to `0`; if `min > max` the bounds
    /// collapse onto `min`.
    pub fn set_zoom_bounds(&mut self, min_zoom: f64, max_zoom: f64) {
        let min_zoom = if min_zoom > 0.0 { min_zoom } else { 0.0 };
        let max_zoom = if max_zoom >= min_zoom {
            max_zoom
        } else {
            min_zoom
        };
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self.zoom = clamp_or_lower(self.zoom, min_zoom, max_zoom);
    }

    /// Set the value domain.
    pub fn with_domain(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Set the pan offset.
    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Set the zoom (clamped to the zoom bounds).
    pub fn with_zoom(mut self, zoom: f64) -> Self {
        self.set_zoom(zoom);
        self
    }

    /// Set the zoom bounds.
    pub fn with_zoom_bounds(mut self, min_zoom: f64, max_zoom: f64) -> Self {
        self.set_zoom_bounds(min_zoom, max_zoom);
        self
    }

    /// Set the fractional anchor of `offset` within the visible window.
    pub fn with_origin(mut self, origin: f64) -> Self {
        self.origin = origin;
        self
    }

    /// Set the value at which this axis' line crosses the opposite axis.
    pub fn with_axis_origin(mut self, axis_origin: f64) -> Self {
        self.axis_origin = axis_origin;
        self
    }

    /// Set the padding policy.
    pub fn with_padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = padding.into();
        self
    }

    /// Set the line stop policy.
    pub fn with_lines(mut self, lines: impl Into<Lines>) -> Self {
        self.lines = lines.into();
        self
    }

    /// Set the gridline color policy.
    pub fn with_line_color(mut self, line_color: impl Into<LineColors>) -> Self {
        self.line_color = line_color.into();
        self
    }

    /// Set the tick policy.
    pub fn with_ticks(mut self, ticks: impl Into<Ticks>) -> Self {
        self.ticks = ticks.into();
        self
    }

    /// Set the tick alignment.
    pub fn with_tick_align(mut self, tick_align: f64) -> Self {
        self.tick_align = tick_align;
        self
    }

    /// Set the label policy.
    pub fn with_labels(mut self, labels: impl Into<Labels>) -> Self {
        self.labels = labels.into();
        self
    }

    /// Set the label color.
    pub fn with_label_color(mut self, label_color: impl Into<Paint>) -> Self {
        self.label_color = label_color.into();
        self
    }

    /// Set the label font size.
    pub fn with_font_size(mut self, font_size: impl Into<FontSize>) -> Self {
        self.font_size = font_size.into();
        self
    }

    /// Set the label font family.
    pub fn with_font_family(mut self, font_family: impl Into<FontFamily>) -> Self {
        self.font_family = font_family.into();
        self
    }

    /// Set the base color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Enable or disable the axis line.
    pub fn with_axis(mut self, axis: bool) -> Self {
        self.axis = axis;
        self
    }

    /// Set the axis line width.
    pub fn with_axis_width(mut self, axis_width: f64) -> Self {
        self.axis_width = axis_width;
        self
    }

    /// Set the axis line color.
    pub fn with_axis_color(mut self, axis_color: impl Into<Paint>) -> Self {
        self.axis_color = axis_color.into();
        self
    }

    /// Set the gridline width.
    pub fn with_line_width(mut self, line_width: f64) -> Self {
        self.line_width = line_width;
        self
    }

    /// Enable or disable the whole axis.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set the minimum spacing for automatic line stops.
    pub fn with_distance(mut self, distance: f64) -> Self {
        self.distance = distance;
        self
    }

    /// Set a custom label formatter.
    pub fn with_formatter(mut self, f: impl Fn(f64) -> String + 'static) -> Self {
        self.formatter = Some(Arc::new(f));
        self
    }

    pub(crate) fn format_stop(&self, value: f64) -> String {
        match &self.formatter {
            Some(f) => f(value),
            None => format_stop(value),
        }
    }
}

/// Default label text: the shortest round-tripping decimal, without `-0`.
pub(crate) fn format_stop(value: f64) -> String {
    if value == 0.0 {
        return String::from("0");
    }
    alloc::format!("{value}")
}

/// `value.clamp(lo, hi)` that resolves an inverted interval to `lo`.
pub(crate) fn clamp_or_lower(value: f64, lo: f64, hi: f64) -> f64 {
    if lo > hi { lo } else { value.max(lo).min(hi) }
}
