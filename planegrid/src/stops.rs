// Copyright 2025 the Planegrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Default line stops: evenly stepped "nice" values over the visible window.

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Upper bound on generated stops, guarding against absurd zoom levels.
const MAX_STOPS: f64 = 10_000.0;

/// Returns multiples of a 1/2/5 × 10ⁿ step covering `[start, start + span]`.
///
/// The step is the smallest nice step not below `min_step`, so neighboring
/// stops are never closer than requested.
pub(crate) fn stepped(start: f64, span: f64, min_step: f64) -> Vec<f64> {
    if !(span > 0.0 && span.is_finite() && start.is_finite()) {
        return Vec::new();
    }
    let Some((mantissa, power)) = nice_step(min_step) else {
        return Vec::new();
    };
    let step = scaled(1.0, mantissa, power);
    let end = start + span;
    let first = (start / step).ceil();
    let last = (end / step).floor();
    let count = last - first + 1.0;
    if !(count.is_finite() && count > 0.0) || count > MAX_STOPS {
        return Vec::new();
    }
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "count is finite, positive and capped at MAX_STOPS"
    )]
    let n = count as u32;
    let mut out: Vec<f64> = Vec::with_capacity(n as usize);
    for i in 0..n {
        let v = scaled(first + f64::from(i), mantissa, power);
        let v = if v == 0.0 { 0.0 } else { v };
        // Far from zero neighboring multiples round to the same value.
        if out.last().is_some_and(|prev| v <= *prev) {
            continue;
        }
        out.push(v);
    }
    out
}

/// `k * mantissa * 10^power`, dividing for negative powers so decimal steps
/// stay as close as possible to their decimal values.
fn scaled(k: f64, mantissa: f64, power: i32) -> f64 {
    if power < 0 {
        k * mantissa / 10_f64.powi(-power)
    } else {
        k * mantissa * 10_f64.powi(power)
    }
}

/// Smallest `(m, p)` with `m ∈ {1, 2, 5}` and `m * 10^p >= step`.
fn nice_step(step: f64) -> Option<(f64, i32)> {
    if !step.is_finite() || step <= 0.0 {
        return None;
    }
    let exponent = step.log10().floor();
    if !(-300.0..=300.0).contains(&exponent) {
        return None;
    }
    #[allow(
        clippy::cast_possible_truncation,
        reason = "exponent is an integral value within ±300"
    )]
    let mut power = exponent as i32;
    let error = step / scaled(1.0, 1.0, power);
    let mantissa = if error <= 1.0 {
        1.0
    } else if error <= 2.0 {
        2.0
    } else if error <= 5.0 {
        5.0
    } else {
        power += 1;
        1.0
    };
    Some((mantissa, power))
}
