// Copyright 2025 the Planegrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan/zoom grid demo for `planegrid`.
//!
//! Drives a grid through a short gesture sequence and writes each frame as an
//! SVG file. Run with `RUST_LOG=debug` to see the update cycles.

mod svg;

use std::error::Error;
use std::path::Path;

use kurbo::Insets;
use log::info;
use peniko::color::palette::css;
use planegrid::{
    AxisConfig, AxisDefinition, Center, FontFamily, Grid, GridConfig, HeuristicTextMeasurer,
    Labels, Paint, Surface, Ticks,
};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let out_dir = Path::new("planegrid_demo_out");
    std::fs::create_dir_all(out_dir)?;

    pan_zoom_demo(out_dir)?;
    styled_demo(out_dir)?;
    Ok(())
}

/// A bounded plane panned towards a corner, then zoomed in and out.
fn pan_zoom_demo(out_dir: &Path) -> Result<(), Box<dyn Error>> {
    let surface = Surface::new(800.0, 600.0);
    let mut grid = Grid::new(AxisDefinition::x(), AxisDefinition::y())?;
    grid.subscribe(|layout, cause| {
        let (x0, x1) = layout.x().window();
        let (y0, y1) = layout.y().window();
        info!("{cause:?}: x [{x0}, {x1}] y [{y0}, {y1}]");
    });

    let config = GridConfig::both(
        AxisConfig::new()
            .with_domain(-2000.0, 2000.0)
            .with_zoom_bounds(0.25, 4.0)
            .with_ticks(Ticks::Enabled)
            .with_padding(Insets::uniform(16.0)),
    );
    grid.update(surface, &config)?;
    write_frame(&grid, surface, out_dir, "pan_zoom_0")?;

    let gestures = [
        Center::new(250.0, 100.0, 1.0),
        Center::new(1800.0, 1800.0, 1.0),
        Center::new(1800.0, 1800.0, 0.25),
        Center::new(0.0, 0.0, 4.0),
    ];
    for (i, center) in gestures.into_iter().enumerate() {
        grid.update_by_center(surface, center)?;
        write_frame(&grid, surface, out_dir, &format!("pan_zoom_{}", i + 1))?;
    }
    Ok(())
}

/// Custom colors, sparse labels and a formatter on a high-density surface.
fn styled_demo(out_dir: &Path) -> Result<(), Box<dyn Error>> {
    let surface = Surface::new(640.0, 400.0).with_pixel_ratio(2.0);
    let x = AxisDefinition::x()
        .with_color(css::NAVY)
        .with_formatter(|v| format!("{v} m"))
        .with_font_family(FontFamily::Monospace);
    let y = AxisDefinition::y()
        .with_color(css::DARK_GREEN)
        .with_ticks(Ticks::sparse([(-75.0, 8.0), (75.0, 8.0)]))
        .with_labels(Labels::sparse([(-75.0, "low"), (75.0, "high")]))
        .with_tick_align(0.0);
    let mut grid = Grid::new(x, y)?;

    let config = GridConfig::new()
        .with_x(AxisConfig::new().with_distance(40.0).with_axis_origin(-50.0))
        .with_y(AxisConfig::new().with_line_color(Paint::Opacity(0.15)));
    grid.update(surface, &config)?;
    write_frame(&grid, surface, out_dir, "styled")?;
    Ok(())
}

fn write_frame(
    grid: &Grid,
    surface: Surface,
    out_dir: &Path,
    name: &str,
) -> Result<(), Box<dyn Error>> {
    let mut sink = svg::SvgSink::new(surface.size, css::WHITE);
    grid.draw(&mut sink, &HeuristicTextMeasurer);
    let path = out_dir.join(format!("{name}.svg"));
    std::fs::write(&path, sink.to_svg_string())?;
    println!("wrote {}", path.display());
    Ok(())
}
