// Copyright 2025 the Barchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Number formatting shared by bar keys, value labels and axis ticks.

extern crate alloc;

use alloc::format;
use alloc::string::String;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Largest magnitude formatted through the integer path.
const INTEGRAL_LIMIT: f64 = 1e15;

/// Formats a number the way it reads in a key or label.
///
/// Integral values drop the fractional part (`3`, not `3.0`), `-0` prints as `0`, and everything
/// else uses the shortest round-trip representation (`2.5`, `0.1`).
pub fn format_number(v: f64) -> String {
    if v.is_finite() && v == v.trunc() && v.abs() < INTEGRAL_LIMIT {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "integral and bounded by INTEGRAL_LIMIT"
        )]
        let i = v as i64;
        return format!("{i}");
    }
    format!("{v}")
}

/// Formats an axis tick value with just enough decimals for the tick `step`.
pub fn format_tick(v: f64, step: f64) -> String {
    let v = if v == 0.0 { 0.0 } else { v };
    if !step.is_finite() || step <= 0.0 {
        return format_number(v);
    }
    let decimals = (-step.log10()).ceil().clamp(0.0, 12.0);
    #[allow(clippy::cast_possible_truncation, reason = "clamped to [0, 12]")]
    let decimals = decimals as usize;
    if decimals == 0 {
        return format_number(v.round());
    }
    format!("{v:.decimals$}")
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn integral_values_have_no_fraction() {
        assert_eq!(format_number(3.0), "3");
        assert_eq!(format_number(-12.0), "-12");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn fractional_values_use_shortest_form() {
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(0.1), "0.1");
    }

    #[test]
    fn ticks_follow_step_precision() {
        assert_eq!(format_tick(0.30000000000000004, 0.1), "0.3");
        assert_eq!(format_tick(20.0, 5.0), "20");
        assert_eq!(format_tick(-0.0, 0.5), "0.0");
        assert_eq!(format_tick(0.25, 0.05), "0.25");
    }
}
