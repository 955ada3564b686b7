// Copyright 2025 the Planegrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawable surface a grid is laid out on.

use kurbo::Size;

use crate::error::GridError;

/// Size of the drawable surface in device pixels, plus its pixel ratio.
///
/// The pixel ratio scales style lengths written in CSS pixels (line widths,
/// tick lengths, font sizes, automatic line spacing). Padding is already in
/// device pixels and is not scaled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Surface {
    /// Width and height in device pixels.
    pub size: Size,
    /// Device pixels per CSS pixel.
    pub pixel_ratio: f64,
}

impl Surface {
    /// Creates a surface with a pixel ratio of `1`.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: Size::new(width, height),
            pixel_ratio: 1.0,
        }
    }

    /// Set the pixel ratio.
    pub fn with_pixel_ratio(mut self, pixel_ratio: f64) -> Self {
        self.pixel_ratio = pixel_ratio;
        self
    }

    /// Surface width in device pixels.
    pub fn width(&self) -> f64 {
        self.size.width
    }

    /// Surface height in device pixels.
    pub fn height(&self) -> f64 {
        self.size.height
    }

    /// The pixel ratio, or `1` when it is not a positive finite number.
    pub fn scale(&self) -> f64 {
        if self.pixel_ratio.is_finite() && self.pixel_ratio > 0.0 {
            self.pixel_ratio
        } else {
            1.0
        }
    }

    /// Whether nothing can be drawn on this surface.
    pub fn is_empty(&self) -> bool {
        !(self.size.width > 0.0 && self.size.height > 0.0)
    }

    /// Rejects negative or non-finite dimensions.
    ///
    /// Zero-sized surfaces are valid; they lay out to empty geometry.
    pub fn validate(&self) -> Result<(), GridError> {
        let Size { width, height } = self.size;
        let ok = |v: f64| v.is_finite() && v >= 0.0;
        if ok(width) && ok(height) {
            Ok(())
        } else {
            Err(GridError::InvalidSurface { width, height })
        }
    }
}

impl From<Size> for Surface {
    fn from(size: Size) -> Self {
        Self {
            size,
            pixel_ratio: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn zero_sized_surfaces_are_valid_but_empty() {
        let s = Surface::new(0.0, 600.0);
        assert_eq!(s.validate(), Ok(()));
        assert!(s.is_empty());
    }

    #[test]
    fn negative_dimensions_are_rejected() {
        let s = Surface::new(800.0, -1.0);
        assert_eq!(
            s.validate(),
            Err(GridError::InvalidSurface {
                width: 800.0,
                height: -1.0
            })
        );
        assert!(Surface::new(f64::NAN, 1.0).validate().is_err());
    }

    #[test]
    fn bogus_pixel_ratio_falls_back_to_one() {
        assert_eq!(Surface::new(1.0, 1.0).with_pixel_ratio(0.0).scale(), 1.0);
        assert_eq!(Surface::new(1.0, 1.0).with_pixel_ratio(2.0).scale(), 2.0);
    }
}
