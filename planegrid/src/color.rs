// Copyright 2025 the Planegrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paint policies and the color service that resolves them.
//!
//! Grid colors are usually written as an opacity against the axis' base color
//! (`0.4` for gridlines, `0.8` for the axis line). Blending is delegated to a
//! [`ColorService`] so hosts can match whatever their renderer does.

use peniko::Color;

/// Maps a base color and an opacity to the final stroke color.
pub trait ColorService {
    /// Returns `base` with the given opacity applied.
    fn resolve(&self, base: Color, opacity: f32) -> Color;
}

/// Replaces the base color's alpha with the opacity (clamped to `0..1`).
#[derive(Clone, Copy, Debug, Default)]
pub struct AlphaColorService;

impl ColorService for AlphaColorService {
    fn resolve(&self, base: Color, opacity: f32) -> Color {
        base.with_alpha(opacity.clamp(0.0, 1.0))
    }
}

/// A scalar color policy.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Paint {
    /// Not drawn.
    #[default]
    None,
    /// An opacity applied to the axis' base color.
    Opacity(f32),
    /// A color used as-is.
    Color(Color),
}

impl Paint {
    /// Resolves the paint against `base`; `None` means "not drawn".
    ///
    /// A NaN opacity is treated as malformed and is not drawn either.
    pub fn resolve(self, base: Color, colors: &dyn ColorService) -> Option<Color> {
        match self {
            Self::None => None,
            Self::Opacity(opacity) if opacity.is_nan() => None,
            Self::Opacity(opacity) => Some(colors.resolve(base, opacity)),
            Self::Color(color) => Some(color),
        }
    }
}

impl From<Color> for Paint {
    fn from(value: Color) -> Self {
        Self::Color(value)
    }
}

impl From<f32> for Paint {
    fn from(value: f32) -> Self {
        Self::Opacity(value)
    }
}

impl From<Option<Color>> for Paint {
    fn from(value: Option<Color>) -> Self {
        value.map_or(Self::None, Self::Color)
    }
}
