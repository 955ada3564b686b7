// Copyright 2025 the Planegrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout engine for two-axis Cartesian grid overlays.
//!
//! A [`Grid`] holds one horizontal and one vertical [`AxisDefinition`]. On
//! every configuration change or pan/zoom gesture it:
//! - **resolves** both axes against the [`Surface`] into [`LayoutState`]s
//!   (visible window, padding, styles, and the parallel line/color/tick/label
//!   arrays), linked as a [`GridLayout`],
//! - **generates** device-pixel [`GridSegment`]s for gridlines, ticks and axis
//!   lines,
//! - **places** labels next to their ticks, clamped to stay on screen.
//!
//! Rendering is left to a [`GridSink`]; text measurement to a
//! [`TextMeasurer`]; color blending to a [`ColorService`].
//!
//! ```
//! use planegrid::{AxisConfig, AxisDefinition, Grid, GridConfig, Surface};
//!
//! let mut grid = Grid::new(AxisDefinition::x(), AxisDefinition::y()).unwrap();
//! let config = GridConfig::both(AxisConfig::new().with_domain(-100.0, 100.0));
//! let layout = grid.update(Surface::new(800.0, 600.0), &config).unwrap();
//! assert_eq!(layout.x().offset, -100.0);
//! ```

#![no_std]

extern crate alloc;

mod axis;
mod color;
mod config;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod geometry;
mod grid;
mod labels;
mod layout;
mod policy;
mod resolve;
mod sink;
mod stops;
mod surface;

pub use axis::{AxisDefinition, AxisStrategy, Formatter, HorizontalAxis, Orientation, VerticalAxis};
pub use color::{AlphaColorService, ColorService, Paint};
pub use config::{AxisConfig, GridConfig};
pub use error::GridError;
pub use geometry::{AxisGeometry, GridSegment, SegmentRole, generate};
pub use grid::{Center, Grid, SubscriptionId, UpdateCause};
pub use labels::{LabelPlacement, place};
pub use layout::GridLayout;
pub use policy::{Generator, Labels, LineColors, Lines, Padding, Ticks};
pub use resolve::{LayoutState, clamp_offset, resolve};
pub use sink::{GridFrame, GridSink};
pub use surface::Surface;

pub use planegrid_text::{
    FontFamily, FontSize, FontSizeError, HeuristicTextMeasurer, TextMeasurer, TextMetrics,
    TextStyle,
};
