// Copyright 2025 the Planegrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry generation.
//!
//! [`generate`] turns one axis of a [`GridLayout`] into device-pixel segments:
//! a gridline per drawn stop, a tick per stop where the stop's line crosses
//! the axis line, and the axis line itself. It also records the normalized
//! crossing point of every stop so labels can be placed next to its tick.

use alloc::vec::Vec;

use kurbo::{Line, Point, Vec2};
use log::debug;
use peniko::Color;

use crate::axis::Orientation;
use crate::layout::GridLayout;

/// What a [`GridSegment`] draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SegmentRole {
    /// A gridline across the drawing area.
    Gridline,
    /// A tick mark at the axis line crossing.
    Tick,
    /// The axis line.
    AxisLine,
}

/// A stroked line segment in device pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridSegment {
    /// Endpoints in device pixels.
    pub line: Line,
    /// Stroke color.
    pub color: Color,
    /// Stroke width in device pixels.
    pub width: f64,
    /// What the segment draws.
    pub role: SegmentRole,
    /// The axis that produced the segment.
    pub axis: Orientation,
}

/// Geometry for one axis.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AxisGeometry {
    /// Segments in paint order: gridlines, then ticks, then the axis line.
    pub segments: Vec<GridSegment>,
    /// Normalized crossing point of each stop with the axis line, indexed
    /// like [`LayoutState::lines`](crate::LayoutState::lines).
    pub label_anchors: Vec<Point>,
}

impl AxisGeometry {
    /// Iterates over the segments with the given role.
    pub fn with_role(&self, role: SegmentRole) -> impl Iterator<Item = &GridSegment> + '_ {
        self.segments.iter().filter(move |s| s.role == role)
    }
}

/// Approximate equality used to find stops sitting on the crossing axis.
pub(crate) fn approx_eq(a: f64, b: f64) -> bool {
    const EPSILON: f64 = 1.0e-9;
    (a - b).abs() <= EPSILON * 1.0_f64.max(a.abs()).max(b.abs())
}

fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

fn is_finite(line: Line) -> bool {
    line.p0.is_finite() && line.p1.is_finite()
}

/// Generates the segments and label anchors of `axis`.
///
/// Disabled axes and surfaces without a drawable area produce nothing.
pub fn generate(layout: &GridLayout, axis: Orientation) -> AxisGeometry {
    let state = layout.state(axis);
    let opposite = layout.opposite(axis);
    let mut out = AxisGeometry::default();

    if !state.enabled {
        return out;
    }
    let usable = state.usable_size();
    if !(usable.width > 0.0 && usable.height > 0.0) {
        debug!("{axis:?} axis: no drawable area ({usable:?}), skipping geometry");
        return out;
    }

    // Where along this axis' gridlines the axis line sits.
    let axis_ratio = clamp_unit(opposite.ratio(state.axis_origin));
    let strategy = state.strategy();
    let normalized: Vec<Line> = state
        .lines
        .iter()
        .map(|v| strategy.segment(state.ratio(*v)))
        .collect();

    for (line, color) in normalized.iter().zip(&state.line_colors) {
        let Some(color) = *color else {
            continue;
        };
        if !is_finite(*line) {
            continue;
        }
        out.segments.push(GridSegment {
            line: Line::new(state.to_device(line.p0), state.to_device(line.p1)),
            color,
            width: state.line_width,
            role: SegmentRole::Gridline,
            axis,
        });
    }

    let align = state.tick_align;
    for (i, (line, value)) in normalized.iter().zip(&state.lines).enumerate() {
        let delta = line.p1 - line.p0;
        let dir = delta / delta.hypot();
        let along = delta * axis_ratio;
        let p0 = line.p0.to_vec2();
        out.label_anchors.push(Point::new(
            dir.x * along.x + p0.x,
            dir.y * along.y + p0.y,
        ));

        let Some(color) = state.axis_color else {
            continue;
        };
        let length = state.ticks.get(i).copied().unwrap_or(0.0);
        if !(length > 0.0 && length.is_finite()) {
            continue;
        }
        if approx_eq(*value, opposite.axis_origin) {
            continue;
        }
        let tick = Vec2::new(
            dir.x * length / usable.width,
            dir.y * length / usable.height,
        );
        let start = Point::new(
            dir.x * (along.x + tick.x * align) + p0.x,
            dir.y * (along.y + tick.y * align) + p0.y,
        );
        let end = Point::new(
            dir.x * (along.x - tick.x * (1.0 - align)) + p0.x,
            dir.y * (along.y - tick.y * (1.0 - align)) + p0.y,
        );
        let tick_line = Line::new(state.to_device(start), state.to_device(end));
        if !is_finite(tick_line) {
            continue;
        }
        out.segments.push(GridSegment {
            line: tick_line,
            color,
            width: state.axis_width,
            role: SegmentRole::Tick,
            axis,
        });
    }

    if state.show_axis
        && let Some(color) = state.axis_color
    {
        let crossing = opposite
            .strategy()
            .segment(opposite.ratio(state.axis_origin));
        let clamp = |p: Point| Point::new(clamp_unit(p.x), clamp_unit(p.y));
        out.segments.push(GridSegment {
            line: Line::new(
                state.to_device(clamp(crossing.p0)),
                state.to_device(clamp(crossing.p1)),
            ),
            color,
            width: state.axis_width,
            role: SegmentRole::AxisLine,
            axis,
        });
    }

    out
}

#[cfg(test)]
mod tests {
    extern crate std;

    use peniko::color::palette::css;

    use super::*;
    use crate::axis::AxisDefinition;
    use crate::color::{AlphaColorService, Paint};
    use crate::policy::{Lines, Ticks};
    use crate::resolve::resolve;
    use crate::surface::Surface;

    fn layout(x: &AxisDefinition, y: &AxisDefinition, surface: Surface) -> GridLayout {
        GridLayout::new(
            resolve(x, &surface, &AlphaColorService),
            resolve(y, &surface, &AlphaColorService),
        )
        .expect("one axis of each orientation")
    }

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn vertical_gridlines_span_full_height() {
        let x = AxisDefinition::x()
            .with_domain(-100.0, 100.0)
            .with_zoom(0.25)
            .with_lines([-50.0, 0.0, 50.0])
            .with_line_color(css::BLACK);
        let y = AxisDefinition::y().with_lines(Lines::Disabled);
        let layout = layout(&x, &y, Surface::new(800.0, 600.0));
        let geometry = generate(&layout, Orientation::X);

        let grid: Vec<_> = geometry.with_role(SegmentRole::Gridline).collect();
        assert_eq!(grid.len(), 3);
        for (seg, value) in grid.iter().zip([-50.0, 0.0, 50.0]) {
            let x = (value + 100.0) / 200.0 * 800.0;
            assert_close(seg.line.p0.x, x);
            assert_close(seg.line.p1.x, x);
            assert_close(seg.line.p0.y, 0.0);
            assert_close(seg.line.p1.y, 600.0);
        }
    }

    #[test]
    fn padding_shrinks_drawing_area() {
        let x = AxisDefinition::x()
            .with_lines([0.0])
            .with_padding(kurbo::Insets::new(10.0, 20.0, 30.0, 40.0));
        let y = AxisDefinition::y().with_lines(Lines::Disabled);
        let layout = layout(&x, &y, Surface::new(800.0, 600.0));
        let geometry = generate(&layout, Orientation::X);
        let seg = geometry
            .with_role(SegmentRole::Gridline)
            .next()
            .expect("one gridline");
        assert_close(seg.line.p0.x, 10.0 + 0.5 * (800.0 - 40.0));
        assert_close(seg.line.p0.y, 20.0);
        assert_close(seg.line.p1.y, 600.0 - 40.0);
    }

    #[test]
    fn unpainted_lines_emit_no_gridline() {
        let x = AxisDefinition::x()
            .with_lines([1.0, 2.0])
            .with_line_color(alloc::vec![Paint::None, Paint::Opacity(0.5)]);
        let y = AxisDefinition::y().with_lines(Lines::Disabled);
        let layout = layout(&x, &y, Surface::new(100.0, 100.0));
        let geometry = generate(&layout, Orientation::X);
        assert_eq!(geometry.with_role(SegmentRole::Gridline).count(), 1);
        assert_eq!(geometry.label_anchors.len(), 2);
    }

    #[test]
    fn ticks_cross_the_axis_line() {
        // The x axis line sits at y = 0, which is mid-height.
        let x = AxisDefinition::x().with_lines([100.0]).with_ticks(10.0);
        let y = AxisDefinition::y().with_lines(Lines::Disabled);
        let layout = layout(&x, &y, Surface::new(800.0, 600.0));
        let geometry = generate(&layout, Orientation::X);
        let tick = geometry.with_role(SegmentRole::Tick).next().expect("one tick");
        assert_close(tick.line.p0.x, 500.0);
        assert_close(tick.line.p1.x, 500.0);
        assert_close(tick.line.p0.y, 305.0);
        assert_close(tick.line.p1.y, 295.0);
        assert_close(geometry.label_anchors[0].y, 0.5);
    }

    #[test]
    fn tick_align_moves_tick_to_one_side() {
        let x = AxisDefinition::x()
            .with_lines([100.0])
            .with_ticks(10.0)
            .with_tick_align(1.0);
        let y = AxisDefinition::y().with_lines(Lines::Disabled);
        let layout = layout(&x, &y, Surface::new(800.0, 600.0));
        let geometry = generate(&layout, Orientation::X);
        let tick = geometry.with_role(SegmentRole::Tick).next().expect("one tick");
        assert_close(tick.line.p0.y, 310.0);
        assert_close(tick.line.p1.y, 300.0);
    }

    #[test]
    fn no_tick_on_the_crossing_axis() {
        for axis in [Orientation::X, Orientation::Y] {
            let x = AxisDefinition::x()
                .with_lines([-1.0e-12, 50.0])
                .with_ticks(Ticks::Enabled);
            let y = AxisDefinition::y()
                .with_lines([0.0, 50.0])
                .with_ticks(Ticks::Enabled);
            let layout = layout(&x, &y, Surface::new(400.0, 400.0));
            let geometry = generate(&layout, axis);
            let ticks: Vec<_> = geometry.with_role(SegmentRole::Tick).collect();
            assert_eq!(ticks.len(), 1, "{axis:?}");
        }
    }

    #[test]
    fn axis_line_is_clamped_into_view() {
        // The x axis line wants to sit at y = 1000, far above the window.
        let x = AxisDefinition::x().with_axis_origin(1000.0).with_lines(Lines::Disabled);
        let y = AxisDefinition::y().with_lines(Lines::Disabled);
        let layout = layout(&x, &y, Surface::new(800.0, 600.0));
        let geometry = generate(&layout, Orientation::X);
        let axis_line = geometry
            .with_role(SegmentRole::AxisLine)
            .next()
            .expect("axis line");
        assert_close(axis_line.line.p0.y, 0.0);
        assert_close(axis_line.line.p0.x, 0.0);
        assert_close(axis_line.line.p1.x, 800.0);
    }

    #[test]
    fn unpainted_axis_draws_no_axis_line_or_ticks() {
        let x = AxisDefinition::x()
            .with_lines([5.0])
            .with_ticks(4.0)
            .with_axis_color(Paint::None);
        let y = AxisDefinition::y().with_lines(Lines::Disabled);
        let layout = layout(&x, &y, Surface::new(800.0, 600.0));
        let geometry = generate(&layout, Orientation::X);
        assert_eq!(geometry.with_role(SegmentRole::AxisLine).count(), 0);
        assert_eq!(geometry.with_role(SegmentRole::Tick).count(), 0);
    }

    #[test]
    fn zero_width_surface_emits_nothing() {
        let x = AxisDefinition::x().with_lines([1.0]);
        let y = AxisDefinition::y().with_lines([1.0]);
        let layout = layout(&x, &y, Surface::new(0.0, 600.0));
        assert!(generate(&layout, Orientation::X).segments.is_empty());
        assert!(generate(&layout, Orientation::Y).segments.is_empty());
    }

    #[test]
    fn disabled_axis_emits_nothing() {
        let x = AxisDefinition::x().with_enabled(false);
        let y = AxisDefinition::y();
        let layout = layout(&x, &y, Surface::new(800.0, 600.0));
        assert_eq!(generate(&layout, Orientation::X), AxisGeometry::default());
        assert!(!generate(&layout, Orientation::Y).segments.is_empty());
    }

    #[test]
    fn approx_eq_is_relative_for_large_values() {
        assert!(approx_eq(0.0, 1.0e-12));
        assert!(!approx_eq(0.0, 1.0e-6));
        assert!(approx_eq(1.0e12, 1.0e12 + 1.0));
    }

    #[test]
    fn short_parallel_arrays_do_not_panic() {
        let surface = Surface::new(400.0, 400.0);
        let mut x = resolve(
            &AxisDefinition::x().with_lines([-50.0, 10.0, 50.0]).with_ticks(6.0),
            &surface,
            &AlphaColorService,
        );
        x.ticks.truncate(1);
        x.line_colors.truncate(2);
        let y = resolve(
            &AxisDefinition::y().with_lines(Lines::Disabled),
            &surface,
            &AlphaColorService,
        );
        let layout = GridLayout::new(x, y).expect("one axis of each orientation");
        let geometry = generate(&layout, Orientation::X);
        assert_eq!(geometry.with_role(SegmentRole::Gridline).count(), 2);
        assert_eq!(geometry.with_role(SegmentRole::Tick).count(), 1);
        assert_eq!(geometry.label_anchors.len(), 3);
    }
}
