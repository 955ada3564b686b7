// Copyright 2025 the Planegrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line, tick, label and padding policies.
//!
//! Each policy is either a constant, an explicit per-line array, a generator
//! called with the partially resolved [`LayoutState`], or (for ticks and
//! labels) a sparse value → property mapping. The resolver normalizes all of
//! them into parallel arrays indexed like [`LayoutState::lines`].

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use kurbo::Insets;
use peniko::Color;

use crate::color::Paint;
use crate::resolve::LayoutState;

/// A function of the partially resolved layout state.
pub struct Generator<T>(Arc<dyn Fn(&LayoutState) -> T>);

impl<T> Generator<T> {
    /// Wraps a closure.
    pub fn new(f: impl Fn(&LayoutState) -> T + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub(crate) fn call(&self, state: &LayoutState) -> T {
        (self.0)(state)
    }
}

impl<T> Clone for Generator<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> core::fmt::Debug for Generator<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Generator(..)")
    }
}

/// Padding around the drawing area, in device pixels.
#[derive(Clone, Debug)]
pub enum Padding {
    /// The same padding on all four sides.
    Uniform(f64),
    /// Explicit sides (`x0` = left, `y0` = top, `x1` = right, `y1` = bottom).
    Sides(Insets),
    /// Computed from the layout state (range, offset, zoom and style are set).
    Generator(Generator<Insets>),
}

impl Padding {
    /// Padding computed from the layout state.
    pub fn generator(f: impl Fn(&LayoutState) -> Insets + 'static) -> Self {
        Self::Generator(Generator::new(f))
    }
}

impl From<f64> for Padding {
    fn from(value: f64) -> Self {
        Self::Uniform(value)
    }
}

impl From<Insets> for Padding {
    fn from(value: Insets) -> Self {
        Self::Sides(value)
    }
}

/// Where gridlines are placed.
#[derive(Clone, Debug, Default)]
pub enum Lines {
    /// Evenly stepped "nice" values covering the visible window.
    #[default]
    Auto,
    /// No lines.
    Disabled,
    /// Explicit stop values.
    Values(Vec<f64>),
    /// Stops computed from the layout state.
    Generator(Generator<Vec<f64>>),
}

impl Lines {
    /// Stops computed from the layout state.
    pub fn generator(f: impl Fn(&LayoutState) -> Vec<f64> + 'static) -> Self {
        Self::Generator(Generator::new(f))
    }
}

impl From<bool> for Lines {
    fn from(value: bool) -> Self {
        if value { Self::Auto } else { Self::Disabled }
    }
}

impl From<Vec<f64>> for Lines {
    fn from(value: Vec<f64>) -> Self {
        Self::Values(value)
    }
}

impl<const N: usize> From<[f64; N]> for Lines {
    fn from(value: [f64; N]) -> Self {
        Self::Values(value.to_vec())
    }
}

/// Gridline colors, one per line.
#[derive(Clone, Debug)]
pub enum LineColors {
    /// The same paint for every line.
    Uniform(Paint),
    /// One paint per line; missing entries are not drawn.
    PerLine(Vec<Paint>),
    /// Paints computed from the layout state (lines are set).
    Generator(Generator<Vec<Paint>>),
}

impl LineColors {
    /// Paints computed from the layout state.
    pub fn generator(f: impl Fn(&LayoutState) -> Vec<Paint> + 'static) -> Self {
        Self::Generator(Generator::new(f))
    }
}

impl From<Paint> for LineColors {
    fn from(value: Paint) -> Self {
        Self::Uniform(value)
    }
}

impl From<Color> for LineColors {
    fn from(value: Color) -> Self {
        Self::Uniform(Paint::Color(value))
    }
}

impl From<f32> for LineColors {
    fn from(value: f32) -> Self {
        Self::Uniform(Paint::Opacity(value))
    }
}

impl From<Vec<Paint>> for LineColors {
    fn from(value: Vec<Paint>) -> Self {
        Self::PerLine(value)
    }
}

/// Tick lengths in CSS pixels; `0` means no tick.
#[derive(Clone, Debug, Default)]
pub enum Ticks {
    /// No ticks.
    #[default]
    None,
    /// Ticks twice the axis width long.
    Enabled,
    /// The same length for every line.
    Length(f64),
    /// One length per line.
    PerLine(Vec<f64>),
    /// Lengths computed from the layout state (lines are set).
    Generator(Generator<Vec<f64>>),
    /// Extra ticks at arbitrary values, appended after the main lines.
    Sparse(Vec<(f64, f64)>),
}

impl Ticks {
    /// Lengths computed from the layout state.
    pub fn generator(f: impl Fn(&LayoutState) -> Vec<f64> + 'static) -> Self {
        Self::Generator(Generator::new(f))
    }

    /// Extra ticks at the given `(value, length)` pairs.
    pub fn sparse(entries: impl IntoIterator<Item = (f64, f64)>) -> Self {
        Self::Sparse(entries.into_iter().collect())
    }
}

impl From<bool> for Ticks {
    fn from(value: bool) -> Self {
        if value { Self::Enabled } else { Self::None }
    }
}

impl From<f64> for Ticks {
    fn from(value: f64) -> Self {
        Self::Length(value)
    }
}

impl From<Vec<f64>> for Ticks {
    fn from(value: Vec<f64>) -> Self {
        Self::PerLine(value)
    }
}

/// Label text, one per line.
#[derive(Clone, Debug, Default)]
pub enum Labels {
    /// No labels.
    None,
    /// Label every line with its formatted stop value.
    #[default]
    Stops,
    /// One optional label per line.
    PerLine(Vec<Option<String>>),
    /// Labels computed from the layout state (lines and ticks are set).
    Generator(Generator<Vec<Option<String>>>),
    /// Extra labels at arbitrary values, appended after the main lines and
    /// any sparse ticks.
    Sparse(Vec<(f64, String)>),
}

impl Labels {
    /// Labels computed from the layout state.
    pub fn generator(f: impl Fn(&LayoutState) -> Vec<Option<String>> + 'static) -> Self {
        Self::Generator(Generator::new(f))
    }

    /// Extra labels at the given `(value, text)` pairs.
    pub fn sparse<S: Into<String>>(entries: impl IntoIterator<Item = (f64, S)>) -> Self {
        Self::Sparse(entries.into_iter().map(|(v, s)| (v, s.into())).collect())
    }
}

impl From<bool> for Labels {
    fn from(value: bool) -> Self {
        if value { Self::Stops } else { Self::None }
    }
}

impl From<Vec<Option<String>>> for Labels {
    fn from(value: Vec<Option<String>>) -> Self {
        Self::PerLine(value)
    }
}
