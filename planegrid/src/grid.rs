// Copyright 2025 the Planegrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The grid controller.
//!
//! A [`Grid`] owns both axis definitions and the current [`GridLayout`]. Each
//! update merges configuration (or a pan/zoom center), resolves both axes
//! against the surface, replaces the layout wholesale and then notifies
//! subscribers synchronously.

use alloc::boxed::Box;

use hashbrown::HashMap;
use log::debug;
use planegrid_text::TextMeasurer;

use crate::axis::{AxisDefinition, Orientation};
use crate::color::{AlphaColorService, ColorService};
use crate::config::GridConfig;
use crate::error::GridError;
use crate::layout::GridLayout;
use crate::resolve::resolve;
use crate::sink::{GridFrame, GridSink};
use crate::surface::Surface;

/// A pan/zoom position reported by gesture handling.
///
/// Values are absolute: `x` and `y` become the axes' offsets and `zoom`
/// becomes both axes' zoom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Center {
    /// Horizontal offset in value units.
    pub x: f64,
    /// Vertical offset in value units.
    pub y: f64,
    /// Zoom applied to both axes.
    pub zoom: f64,
}

impl Center {
    /// Creates a center.
    pub fn new(x: f64, y: f64, zoom: f64) -> Self {
        Self { x, y, zoom }
    }
}

impl Default for Center {
    fn default() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }
}

/// What triggered a layout update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateCause {
    /// [`Grid::update`].
    Config,
    /// [`Grid::update_by_center`].
    Center,
}

/// Handle returned by [`Grid::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&GridLayout, UpdateCause)>;

/// Two linked axes and their current layout.
pub struct Grid {
    axes: [AxisDefinition; 2],
    layout: Option<GridLayout>,
    center: Center,
    colors: Box<dyn ColorService>,
    subscribers: HashMap<SubscriptionId, Subscriber>,
    next_id: u64,
}

impl core::fmt::Debug for Grid {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Grid")
            .field("axes", &self.axes)
            .field("layout", &self.layout)
            .field("center", &self.center)
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}

impl Grid {
    /// Creates a grid from a horizontal and a vertical axis definition.
    pub fn new(x: AxisDefinition, y: AxisDefinition) -> Result<Self, GridError> {
        for (slot, axis) in [(Orientation::X, &x), (Orientation::Y, &y)] {
            if axis.orientation() != slot {
                return Err(GridError::OrientationMismatch {
                    slot,
                    found: axis.orientation(),
                });
            }
        }
        let center = Center::new(x.offset, y.offset, x.zoom());
        Ok(Self {
            axes: [x, y],
            layout: None,
            center,
            colors: Box::new(AlphaColorService),
            subscribers: HashMap::new(),
            next_id: 0,
        })
    }

    /// Uses `colors` to resolve opacity paints from the next update on.
    pub fn with_color_service(mut self, colors: Box<dyn ColorService>) -> Self {
        self.colors = colors;
        self
    }

    /// Merges `config` into both axes and recomputes the layout.
    pub fn update(
        &mut self,
        surface: Surface,
        config: &GridConfig,
    ) -> Result<&GridLayout, GridError> {
        surface.validate()?;
        config.x.apply_to(&mut self.axes[Orientation::X.index()]);
        config.y.apply_to(&mut self.axes[Orientation::Y.index()]);
        Ok(self.refresh(surface, UpdateCause::Config))
    }

    /// Pans and zooms both axes to `center` and recomputes the layout.
    ///
    /// Axes with panning disabled keep their offset and axes with zooming
    /// disabled keep their zoom. The zoom is clamped to each axis' bounds.
    pub fn update_by_center(
        &mut self,
        surface: Surface,
        center: Center,
    ) -> Result<&GridLayout, GridError> {
        surface.validate()?;
        for (axis, offset) in self.axes.iter_mut().zip([center.x, center.y]) {
            if axis.pan_enabled && !offset.is_nan() {
                axis.offset = offset;
            }
            if axis.zoom_enabled {
                axis.set_zoom(center.zoom);
            }
        }
        Ok(self.refresh(surface, UpdateCause::Center))
    }

    fn refresh(&mut self, surface: Surface, cause: UpdateCause) -> &GridLayout {
        let [x, y] = &self.axes;
        let x_state = resolve(x, &surface, self.colors.as_ref());
        let y_state = resolve(y, &surface, self.colors.as_ref());
        let layout = GridLayout::linked(x_state, y_state);
        self.center = Center::new(x.offset, y.offset, x.zoom());
        debug!(
            "grid update ({cause:?}): {}x{} @{}, x {} stops, y {} stops",
            surface.width(),
            surface.height(),
            surface.pixel_ratio,
            layout.x().lines.len(),
            layout.y().lines.len()
        );
        for subscriber in self.subscribers.values_mut() {
            subscriber(&layout, cause);
        }
        self.layout.insert(layout)
    }

    /// Registers a callback invoked after every successful update.
    pub fn subscribe(
        &mut self,
        callback: impl FnMut(&GridLayout, UpdateCause) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.insert(id, Box::new(callback));
        id
    }

    /// Removes a callback; returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(&id).is_some()
    }

    /// The layout of the last successful update.
    pub fn layout(&self) -> Option<&GridLayout> {
        self.layout.as_ref()
    }

    /// The definition of one axis.
    pub fn axis(&self, axis: Orientation) -> &AxisDefinition {
        &self.axes[axis.index()]
    }

    /// The current pan/zoom position.
    pub fn center(&self) -> Center {
        self.center
    }

    /// Builds the frame for the current layout; empty before the first update.
    pub fn frame(&self, measurer: &dyn TextMeasurer) -> GridFrame {
        self.layout
            .as_ref()
            .map(|layout| GridFrame::build(layout, measurer))
            .unwrap_or_default()
    }

    /// Replaces what `sink` shows with the current layout.
    pub fn draw(&self, sink: &mut dyn GridSink, measurer: &dyn TextMeasurer) {
        self.frame(measurer).submit(sink);
    }
}
