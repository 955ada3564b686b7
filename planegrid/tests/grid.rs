// Copyright 2025 the Planegrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end behavior of the grid controller.

use std::cell::Cell;
use std::rc::Rc;

use kurbo::Point;
use planegrid::{
    AxisConfig, AxisDefinition, Center, Grid, GridConfig, GridError, GridSegment, GridSink,
    HeuristicTextMeasurer, LabelPlacement, Lines, Orientation, SegmentRole, Surface, Ticks,
    clamp_offset,
};

fn grid() -> Grid {
    Grid::new(AxisDefinition::x(), AxisDefinition::y()).expect("matching slots")
}

fn layout_lines(grid: &Grid, axis: Orientation) -> usize {
    grid.layout().map_or(0, |layout| layout.state(axis).lines.len())
}

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "{a} != {b}");
}

#[derive(Default)]
struct Recorder {
    clears: usize,
    strokes: Vec<GridSegment>,
    labels: Vec<LabelPlacement>,
}

impl GridSink for Recorder {
    fn clear_grid(&mut self) {
        self.clears += 1;
        self.strokes.clear();
        self.labels.clear();
    }

    fn stroke(&mut self, segment: &GridSegment) {
        assert!(self.clears > 0, "stroke before clear");
        self.strokes.push(*segment);
    }

    fn text(&mut self, label: &LabelPlacement) {
        self.labels.push(label.clone());
    }
}

#[test_log::test]
fn explicit_lines_on_bounded_domain() {
    let mut grid = grid();
    let config = GridConfig::new()
        .with_x(
            AxisConfig::new()
                .with_domain(-100.0, 100.0)
                .with_zoom(1.0)
                .with_lines([-50.0, 0.0, 50.0]),
        )
        .with_y(AxisConfig::new().with_lines(Lines::Disabled));
    let layout = grid
        .update(Surface::new(800.0, 600.0), &config)
        .expect("valid surface");

    // The 800px window is wider than the 200-unit domain, so it starts at min.
    assert_eq!(layout.x().range, 800.0);
    assert_eq!(layout.x().offset, -100.0);

    let mut sink = Recorder::default();
    grid.draw(&mut sink, &HeuristicTextMeasurer);
    let xs: Vec<_> = sink
        .strokes
        .iter()
        .filter(|s| s.axis == Orientation::X && s.role == SegmentRole::Gridline)
        .collect();
    assert_eq!(xs.len(), 3);
    for (segment, x) in xs.iter().zip([50.0, 100.0, 150.0]) {
        assert_close(segment.line.p0.x, x);
        assert_close(segment.line.p1.x, x);
        assert_close(segment.line.p0.y, 0.0);
        assert_close(segment.line.p1.y, 600.0);
    }
    let texts: Vec<_> = sink
        .labels
        .iter()
        .filter(|l| l.orientation == Orientation::X)
        .map(|l| l.text.as_str())
        .collect();
    assert_eq!(texts, ["-50", "0", "50"]);
}

#[test_log::test]
fn zero_width_surface_draws_nothing() {
    let mut grid = grid();
    let config = GridConfig::both(AxisConfig::new().with_lines([1.0, 2.0]));
    let layout = grid
        .update(Surface::new(0.0, 600.0), &config)
        .expect("empty surfaces are valid");
    assert!(layout.x().lines.is_empty());

    let mut sink = Recorder::default();
    grid.draw(&mut sink, &HeuristicTextMeasurer);
    assert_eq!(sink.clears, 1);
    // The y axis still has lines, but there is no width to draw them in.
    assert_eq!(layout_lines(&grid, Orientation::Y), 2);
    assert!(sink.strokes.is_empty());
    assert!(sink.labels.is_empty());
}

#[test_log::test]
fn negative_or_nan_surface_is_rejected() {
    let mut grid = grid();
    for surface in [Surface::new(-1.0, 10.0), Surface::new(10.0, f64::NAN)] {
        let err = grid
            .update(surface, &GridConfig::new())
            .expect_err("invalid surface");
        assert!(matches!(err, GridError::InvalidSurface { .. }));
    }
    assert!(grid.layout().is_none());
}

#[test_log::test]
fn panning_stays_inside_domain() {
    let mut grid = grid();
    let surface = Surface::new(400.0, 300.0);
    let config = GridConfig::both(
        AxisConfig::new()
            .with_domain(-1000.0, 1000.0)
            .with_zoom_bounds(0.1, 2.0),
    );
    grid.update(surface, &config).expect("valid surface");

    for center in [
        Center::new(5000.0, -5000.0, 1.0),
        Center::new(-999.0, 999.0, 0.05),
        Center::new(0.0, 0.0, 100.0),
    ] {
        let layout = grid
            .update_by_center(surface, center)
            .expect("valid surface");
        for state in [layout.x(), layout.y()] {
            let (lo, hi) = state.window();
            assert!(lo >= -1000.0 - 1e-9, "{center:?}: {lo}");
            assert!(hi <= 1000.0 + 1e-9, "{center:?}: {hi}");
            assert!((0.1..=2.0).contains(&state.zoom));
        }
    }
}

#[test_log::test]
fn ratio_and_device_mapping_round_trip() {
    let mut grid = grid();
    let config = GridConfig::both(AxisConfig::new().with_padding(12.0).with_offset(33.0));
    let layout = grid
        .update(Surface::new(640.0, 480.0), &config)
        .expect("valid surface");
    for state in [layout.x(), layout.y()] {
        for value in [-250.0, -1.0, 0.0, 33.0, 190.5] {
            assert_close(state.value_at(state.ratio(value)), value);
        }
        let p = Point::new(0.3, 0.8);
        let back = state.from_device(state.to_device(p));
        assert_close(back.x, p.x);
        assert_close(back.y, p.y);
    }
    // The vertical axis grows upwards.
    assert!(layout.y().ratio(10.0) < layout.y().ratio(0.0));
}

#[test_log::test]
fn offset_clamp_formula() {
    assert_eq!(clamp_offset(0.0, 100.0, 0.5, -10.0, 1000.0), -10.0);
    assert_eq!(clamp_offset(2000.0, 100.0, 0.5, -10.0, 1000.0), 900.0);
    assert_eq!(clamp_offset(500.0, 100.0, 0.0, -10.0, 1000.0), 500.0);
    assert_eq!(clamp_offset(500.0, 100.0, 1.0, -10.0, 1000.0), 400.0);
    // A window wider than the domain starts at the lower bound.
    assert_eq!(clamp_offset(50.0, 500.0, 0.5, 0.0, 100.0), 0.0);
}

#[test_log::test]
fn ticks_skip_the_crossing_on_both_axes() {
    let mut grid = grid();
    let config = GridConfig::both(
        AxisConfig::new()
            .with_lines([-10.0, 0.0, 10.0])
            .with_ticks(Ticks::Enabled),
    );
    grid.update(Surface::new(300.0, 300.0), &config)
        .expect("valid surface");
    let frame = grid.frame(&HeuristicTextMeasurer);
    for axis in [Orientation::X, Orientation::Y] {
        let ticks = frame
            .segments
            .iter()
            .filter(|s| s.axis == axis && s.role == SegmentRole::Tick)
            .count();
        assert_eq!(ticks, 2, "{axis:?}");
    }
}

#[test_log::test]
fn subscribers_are_notified_synchronously() {
    let mut grid = grid();
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let id = grid.subscribe(move |_, _| counter.set(counter.get() + 1));
    let surface = Surface::new(100.0, 100.0);

    grid.update(surface, &GridConfig::new()).expect("valid surface");
    assert_eq!(calls.get(), 1);
    let _ = grid.update(Surface::new(-5.0, 1.0), &GridConfig::new());
    assert_eq!(calls.get(), 1, "failed updates do not notify");
    grid.update_by_center(surface, Center::new(1.0, 1.0, 1.0))
        .expect("valid surface");
    assert_eq!(calls.get(), 2);

    assert!(grid.unsubscribe(id));
    grid.update(surface, &GridConfig::new()).expect("valid surface");
    assert_eq!(calls.get(), 2);
}

#[test_log::test]
fn redraw_replaces_previous_frame() {
    let mut grid = grid();
    let surface = Surface::new(200.0, 200.0);
    grid.update(surface, &GridConfig::both(AxisConfig::new().with_lines([0.0, 5.0])))
        .expect("valid surface");
    let mut sink = Recorder::default();
    grid.draw(&mut sink, &HeuristicTextMeasurer);
    let first = sink.strokes.len();

    grid.update(surface, &GridConfig::both(AxisConfig::new().with_lines([5.0])))
        .expect("valid surface");
    grid.draw(&mut sink, &HeuristicTextMeasurer);
    assert_eq!(sink.clears, 2);
    assert_eq!(sink.strokes.len(), first - 2);
}

#[test_log::test]
fn far_pan_on_unbounded_axis_stays_bounded() {
    let mut grid = grid();
    let layout = grid
        .update_by_center(Surface::new(800.0, 600.0), Center::new(1.0e18, 0.0, 1.0))
        .expect("valid surface");
    let lines = &layout.x().lines;
    assert!(!lines.is_empty());
    assert!(lines.len() <= 49);
    assert!(lines.windows(2).all(|w| w[0] < w[1]));
}
