// Copyright 2025 the Planegrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors surfaced to callers.
//!
//! Almost everything in a grid layout degrades instead of failing: malformed
//! styles are simply not drawn and out-of-range pan/zoom values are clamped.
//! Only programming errors and unusable input reach this type.

use core::fmt;

use crate::axis::Orientation;

/// Errors returned by [`Grid`](crate::Grid).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GridError {
    /// An axis definition was placed in the slot of the other orientation.
    OrientationMismatch {
        /// The slot being filled.
        slot: Orientation,
        /// The orientation of the definition given for it.
        found: Orientation,
    },
    /// The surface has a negative or non-finite dimension.
    InvalidSurface {
        /// Reported width.
        width: f64,
        /// Reported height.
        height: f64,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OrientationMismatch { slot, found } => write!(
                f,
                "axis definition with orientation {found:?} given for the {slot:?} axis"
            ),
            Self::InvalidSurface { width, height } => {
                write!(f, "invalid surface size {width}x{height}")
            }
        }
    }
}

impl core::error::Error for GridError {}
