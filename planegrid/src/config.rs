// Copyright 2025 the Planegrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Partial configuration merged into axis definitions on each update.
//!
//! Every option is optional; unset options leave the definition untouched, so
//! a host can send only what changed.

use alloc::string::String;
use alloc::sync::Arc;

use peniko::Color;
use planegrid_text::{FontFamily, FontSize};

use crate::axis::{AxisDefinition, Formatter};
use crate::color::Paint;
use crate::policy::{Labels, LineColors, Lines, Padding, Ticks};

/// Options for one axis; `None` keeps the current value.
#[derive(Clone, Default)]
pub struct AxisConfig {
    /// Lower bound of the value domain.
    pub min: Option<f64>,
    /// Upper bound of the value domain.
    pub max: Option<f64>,
    /// Pan position.
    pub offset: Option<f64>,
    /// Zoom, clamped to the zoom bounds.
    pub zoom: Option<f64>,
    /// Lower zoom bound.
    pub min_zoom: Option<f64>,
    /// Upper zoom bound.
    pub max_zoom: Option<f64>,
    /// Where `offset` sits in the visible window.
    pub origin: Option<f64>,
    /// Axis line position on the opposite axis.
    pub axis_origin: Option<f64>,
    /// Padding policy.
    pub padding: Option<Padding>,
    /// Line stop policy.
    pub lines: Option<Lines>,
    /// Gridline colors.
    pub line_color: Option<LineColors>,
    /// Tick policy.
    pub ticks: Option<Ticks>,
    /// Tick alignment.
    pub tick_align: Option<f64>,
    /// Label policy.
    pub labels: Option<Labels>,
    /// Label color.
    pub label_color: Option<Paint>,
    /// Label font size.
    pub font_size: Option<FontSize>,
    /// Label font family.
    pub font_family: Option<FontFamily>,
    /// Base color.
    pub color: Option<Color>,
    /// Whether to draw the axis line.
    pub axis: Option<bool>,
    /// Axis line width.
    pub axis_width: Option<f64>,
    /// Axis line color.
    pub axis_color: Option<Paint>,
    /// Gridline width.
    pub line_width: Option<f64>,
    /// Whether the axis is drawn at all.
    pub enabled: Option<bool>,
    /// Whether center updates may pan.
    pub pan_enabled: Option<bool>,
    /// Whether center updates may zoom.
    pub zoom_enabled: Option<bool>,
    /// Minimum spacing of automatic stops.
    pub distance: Option<f64>,
    /// Label formatter.
    pub formatter: Option<Formatter>,
}

impl core::fmt::Debug for AxisConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AxisConfig")
            .field("min", &self.min)
            .field("max", &self.max)
            .field("offset", &self.offset)
            .field("zoom", &self.zoom)
            .field("min_zoom", &self.min_zoom)
            .field("max_zoom", &self.max_zoom)
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

impl AxisConfig {
    /// An empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value domain.
    pub fn with_domain(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    /// Set the zoom bounds.
    pub fn with_zoom_bounds(mut self, min_zoom: f64, max_zoom: f64) -> Self {
        self.min_zoom = Some(min_zoom);
        self.max_zoom = Some(max_zoom);
        self
    }

    /// Set the pan position.
    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Set the zoom.
    pub fn with_zoom(mut self, zoom: f64) -> Self {
        self.zoom = Some(zoom);
        self
    }

    /// Set where `offset` sits in the visible window.
    pub fn with_origin(mut self, origin: f64) -> Self {
        self.origin = Some(origin);
        self
    }

    /// Set the axis line position on the opposite axis.
    pub fn with_axis_origin(mut self, axis_origin: f64) -> Self {
        self.axis_origin = Some(axis_origin);
        self
    }

    /// Set the padding.
    pub fn with_padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = Some(padding.into());
        self
    }

    /// Set the line stop policy.
    pub fn with_lines(mut self, lines: impl Into<Lines>) -> Self {
        self.lines = Some(lines.into());
        self
    }

    /// Set the gridline colors.
    pub fn with_line_color(mut self, line_color: impl Into<LineColors>) -> Self {
        self.line_color = Some(line_color.into());
        self
    }

    /// Set the tick policy.
    pub fn with_ticks(mut self, ticks: impl Into<Ticks>) -> Self {
        self.ticks = Some(ticks.into());
        self
    }

    /// Set the tick alignment.
    pub fn with_tick_align(mut self, tick_align: f64) -> Self {
        self.tick_align = Some(tick_align);
        self
    }

    /// Set the label policy.
    pub fn with_labels(mut self, labels: impl Into<Labels>) -> Self {
        self.labels = Some(labels.into());
        self
    }

    /// Set the label color.
    pub fn with_label_color(mut self, label_color: impl Into<Paint>) -> Self {
        self.label_color = Some(label_color.into());
        self
    }

    /// Set the label font size.
    pub fn with_font_size(mut self, font_size: impl Into<FontSize>) -> Self {
        self.font_size = Some(font_size.into());
        self
    }

    /// Set the label font family.
    pub fn with_font_family(mut self, font_family: impl Into<FontFamily>) -> Self {
        self.font_family = Some(font_family.into());
        self
    }

    /// Set the base color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Show or hide the axis line.
    pub fn with_axis(mut self, axis: bool) -> Self {
        self.axis = Some(axis);
        self
    }

    /// Set the axis line width.
    pub fn with_axis_width(mut self, axis_width: f64) -> Self {
        self.axis_width = Some(axis_width);
        self
    }

    /// Set the axis line color.
    pub fn with_axis_color(mut self, axis_color: impl Into<Paint>) -> Self {
        self.axis_color = Some(axis_color.into());
        self
    }

    /// Set the gridline width.
    pub fn with_line_width(mut self, line_width: f64) -> Self {
        self.line_width = Some(line_width);
        self
    }

    /// Enable or disable the axis.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    /// Allow or forbid panning.
    pub fn with_pan_enabled(mut self, pan_enabled: bool) -> Self {
        self.pan_enabled = Some(pan_enabled);
        self
    }

    /// Allow or forbid zooming.
    pub fn with_zoom_enabled(mut self, zoom_enabled: bool) -> Self {
        self.zoom_enabled = Some(zoom_enabled);
        self
    }

    /// Set the minimum spacing of automatic line stops.
    pub fn with_distance(mut self, distance: f64) -> Self {
        self.distance = Some(distance);
        self
    }

    /// Set the label formatter.
    pub fn with_formatter(mut self, f: impl Fn(f64) -> String + 'static) -> Self {
        self.formatter = Some(Arc::new(f));
        self
    }

    /// Merges every set option into `axis`.
    ///
    /// Zoom bounds are applied before the zoom so the new zoom is clamped to
    /// the new bounds.
    pub fn apply_to(&self, axis: &mut AxisDefinition) {
        if self.min_zoom.is_some() || self.max_zoom.is_some() {
            let (min_zoom, max_zoom) = axis.zoom_bounds();
            axis.set_zoom_bounds(
                self.min_zoom.unwrap_or(min_zoom),
                self.max_zoom.unwrap_or(max_zoom),
            );
        }
        if let Some(zoom) = self.zoom {
            axis.set_zoom(zoom);
        }

        merge(&mut axis.min, self.min);
        merge(&mut axis.max, self.max);
        merge(&mut axis.offset, self.offset);
        merge(&mut axis.origin, self.origin);
        merge(&mut axis.axis_origin, self.axis_origin);
        merge(&mut axis.tick_align, self.tick_align);
        merge(&mut axis.label_color, self.label_color);
        merge(&mut axis.color, self.color);
        merge(&mut axis.axis, self.axis);
        merge(&mut axis.axis_width, self.axis_width);
        merge(&mut axis.axis_color, self.axis_color);
        merge(&mut axis.line_width, self.line_width);
        merge(&mut axis.enabled, self.enabled);
        merge(&mut axis.pan_enabled, self.pan_enabled);
        merge(&mut axis.zoom_enabled, self.zoom_enabled);
        merge(&mut axis.distance, self.distance);
        merge(&mut axis.font_size, self.font_size);

        merge(&mut axis.padding, self.padding.clone());
        merge(&mut axis.lines, self.lines.clone());
        merge(&mut axis.line_color, self.line_color.clone());
        merge(&mut axis.ticks, self.ticks.clone());
        merge(&mut axis.labels, self.labels.clone());
        merge(&mut axis.font_family, self.font_family.clone());
        if let Some(formatter) = &self.formatter {
            axis.formatter = Some(Arc::clone(formatter));
        }
    }
}

fn merge<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

impl AxisDefinition {
    /// Returns the definition with `config` merged in.
    pub fn with_config(mut self, config: &AxisConfig) -> Self {
        config.apply_to(&mut self);
        self
    }
}

/// Configuration for both axes of a grid.
#[derive(Clone, Debug, Default)]
pub struct GridConfig {
    /// Horizontal axis options.
    pub x: AxisConfig,
    /// Vertical axis options.
    pub y: AxisConfig,
}

impl GridConfig {
    /// An empty configuration; updating with it only re-resolves.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies the same options to both axes.
    pub fn both(config: AxisConfig) -> Self {
        Self {
            x: config.clone(),
            y: config,
        }
    }

    /// Set the horizontal axis options.
    pub fn with_x(mut self, x: AxisConfig) -> Self {
        self.x = x;
        self
    }

    /// Set the vertical axis options.
    pub fn with_y(mut self, y: AxisConfig) -> Self {
        self.y = y;
        self
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;

    use peniko::color::palette::css;

    use super::*;

    #[test]
    fn unset_options_keep_current_values() {
        let axis = AxisDefinition::x()
            .with_offset(12.0)
            .with_config(&AxisConfig::new().with_line_width(3.0));
        assert_eq!(axis.offset, 12.0);
        assert_eq!(axis.line_width, 3.0);
        assert_eq!(axis.axis_width, 1.5);
    }

    #[test]
    fn zoom_is_clamped_to_new_bounds() {
        let axis = AxisDefinition::y().with_config(
            &AxisConfig::new()
                .with_zoom(50.0)
                .with_zoom_bounds(0.5, 4.0),
        );
        assert_eq!(axis.zoom(), 4.0);
        assert_eq!(axis.zoom_bounds(), (0.5, 4.0));
    }

    #[test]
    fn only_one_zoom_bound_keeps_the_other() {
        let mut axis = AxisDefinition::x().with_zoom_bounds(0.5, 8.0);
        AxisConfig {
            max_zoom: Some(2.0),
            ..AxisConfig::default()
        }
        .apply_to(&mut axis);
        assert_eq!(axis.zoom_bounds(), (0.5, 2.0));
    }

    #[test]
    fn both_configures_each_axis() {
        let config = GridConfig::both(
            AxisConfig::new()
                .with_color(css::NAVY)
                .with_formatter(|v| alloc::format!("{v}u")),
        );
        let x = AxisDefinition::x().with_config(&config.x);
        let y = AxisDefinition::y().with_config(&config.y);
        assert_eq!(x.color, css::NAVY);
        assert_eq!(y.color, css::NAVY);
        assert_eq!(y.format_stop(2.0), "2u".to_string());
    }
}
