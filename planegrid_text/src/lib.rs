// Copyright 2025 the Planegrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement hooks for grid labels.
//!
//! `planegrid` places axis labels so that they never overflow the drawable
//! surface. That needs text widths, but shaping and font loading belong to
//! whatever renders the grid, so the layout engine only depends on the tiny
//! [`TextMeasurer`] interface defined here.
//!
//! The crate also owns font sizes as they are written in configuration
//! (`11pt`, `14px`, or a bare pixel count) and their conversion to pixels.

#![no_std]

extern crate alloc;

use alloc::sync::Arc;
use core::fmt;
use core::str::FromStr;

/// A minimal text measurement interface used by the label placer.
///
/// Implementations can be heuristic, backed by a shaping engine, or backed by
/// a web canvas `measureText` call.
pub trait TextMeasurer {
    /// Measure a single line of text.
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics;
}

/// Text styling inputs relevant to measurement.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in device pixels.
    pub font_size: f64,
    /// The preferred font family.
    pub font_family: FontFamily,
}

impl TextStyle {
    /// Creates a sans-serif `TextStyle` with the given pixel `font_size`.
    #[must_use]
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            font_family: FontFamily::SansSerif,
        }
    }

    /// Sets the font family.
    #[must_use]
    pub fn with_family(mut self, font_family: FontFamily) -> Self {
        self.font_family = font_family;
        self
    }

    /// Returns a CSS `font` shorthand, e.g. `14.5px sans-serif`.
    #[must_use]
    pub fn css_font(&self) -> alloc::string::String {
        alloc::format!("{}px {}", self.font_size, self.font_family.as_css_family())
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(FontSize::default().to_px())
    }
}

/// Font family selection for measurement.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// A generic serif family (CSS `serif`).
    Serif,
    /// A generic sans-serif family (CSS `sans-serif`).
    #[default]
    SansSerif,
    /// A generic monospace family (CSS `monospace`).
    Monospace,
    /// A named family (e.g. `"Inter"`).
    Named(Arc<str>),
}

impl FontFamily {
    /// Returns the font family string for CSS-style font declarations.
    #[must_use]
    pub fn as_css_family(&self) -> &str {
        match self {
            Self::Serif => "serif",
            Self::SansSerif => "sans-serif",
            Self::Monospace => "monospace",
            Self::Named(name) => name,
        }
    }
}

impl From<&str> for FontFamily {
    fn from(value: &str) -> Self {
        match value.trim() {
            "" | "sans-serif" => Self::SansSerif,
            "serif" => Self::Serif,
            "monospace" => Self::Monospace,
            name => Self::Named(Arc::from(name)),
        }
    }
}

/// Pixels per typographic point.
pub const PX_PER_PT: f64 = 4.0 / 3.0;

/// A font size as written in configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FontSize {
    /// CSS pixels.
    Px(f64),
    /// Typographic points (1pt = 4/3 px).
    Pt(f64),
}

impl FontSize {
    /// Converts the size to pixels.
    #[must_use]
    pub fn to_px(self) -> f64 {
        match self {
            Self::Px(px) => px,
            Self::Pt(pt) => pt * PX_PER_PT,
        }
    }
}

impl Default for FontSize {
    fn default() -> Self {
        Self::Pt(11.0)
    }
}

impl From<f64> for FontSize {
    fn from(px: f64) -> Self {
        Self::Px(px)
    }
}

/// Error returned when a font size string cannot be parsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FontSizeError {
    /// The numeric part is missing or not a finite number.
    InvalidNumber,
    /// The unit suffix is not `px` or `pt`.
    UnsupportedUnit(Arc<str>),
}

impl fmt::Display for FontSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidNumber => f.write_str("font size is not a finite number"),
            Self::UnsupportedUnit(unit) => {
                write!(f, "unsupported font size unit `{unit}` (expected px or pt)")
            }
        }
    }
}

impl core::error::Error for FontSizeError {}

impl FromStr for FontSize {
    type Err = FontSizeError;

    /// Parses `"11pt"`, `"14px"` or a bare number (pixels).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let split = s
            .find(|c: char| c.is_ascii_alphabetic() || c == '%')
            .unwrap_or(s.len());
        let (number, unit) = s.split_at(split);
        let value: f64 = number
            .trim()
            .parse()
            .map_err(|_| FontSizeError::InvalidNumber)?;
        if !value.is_finite() {
            return Err(FontSizeError::InvalidNumber);
        }
        match unit.trim() {
            "" | "px" => Ok(Self::Px(value)),
            "pt" => Ok(Self::Pt(value)),
            other => Err(FontSizeError::UnsupportedUnit(Arc::from(other))),
        }
    }
}

/// Measured metrics for a single line of text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextMetrics {
    /// The advance width.
    pub advance_width: f64,
    /// Distance from baseline to the top of typical glyphs.
    pub ascent: f64,
    /// Distance from baseline to the bottom of typical glyphs.
    pub descent: f64,
}

impl TextMetrics {
    /// Returns `ascent + descent`.
    #[must_use]
    pub fn line_height(&self) -> f64 {
        self.ascent + self.descent
    }
}

/// A tiny heuristic text measurer suitable for demos and tests.
///
/// It assumes an average glyph width of ~0.6em and a baseline at ~0.8em.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        let advance_width = 0.6 * style.font_size * text.chars().count() as f64;
        TextMetrics {
            advance_width,
            ascent: 0.8 * style.font_size,
            descent: 0.2 * style.font_size,
        }
    }
}
