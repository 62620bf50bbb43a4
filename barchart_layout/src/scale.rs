// Copyright 2025 the Barchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Band and linear scales.
//!
//! The band scale places categories along x; the linear scale maps values along y. Both are
//! plain values built per layout call and handed to the rendering layer for axes and grids.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::data::Category;
use crate::error::ConfigError;

/// A discrete band scale for categorical charts.
///
/// `count` categories split the range into equal slots that exactly partition it. The bar region
/// inside each slot is the slot shrunk by `padding` (a fraction of the slot), split evenly on
/// both sides.
#[derive(Clone, Debug)]
pub struct BandScale {
    domain: Vec<Category>,
    index: HashMap<String, usize>,
    range: (f64, f64),
    padding: f64,
}

impl BandScale {
    /// Returns the number of bands.
    pub fn count(&self) -> usize {
        self.domain.len()
    }

    /// Returns the categories in band order.
    pub fn domain(&self) -> &[Category] {
        &self.domain
    }

    /// Returns the pixel range covered by the scale.
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Returns the padding fraction.
    pub fn padding(&self) -> f64 {
        self.padding
    }

    /// Returns the band index of `category`, if it is in the domain.
    pub fn index_of(&self, category: &Category) -> Option<usize> {
        self.index.get(category.label().as_ref()).copied()
    }

    /// Returns the width of one full slot.
    pub fn step(&self) -> f64 {
        let n = self.domain.len();
        if n == 0 {
            return 0.0;
        }
        (self.range.1 - self.range.0).abs() / n as f64
    }

    /// Returns the usable bar width within one band (slot width minus padding).
    pub fn band_width(&self) -> f64 {
        self.step() * (1.0 - self.padding)
    }

    /// Returns the full slot `[start, end)` for the band at `index`.
    pub fn slot(&self, index: usize) -> (f64, f64) {
        let step = self.step();
        let start = self.start() + step * index as f64;
        (start, start + step)
    }

    /// Returns the start of the usable bar region for the band at `index`.
    pub fn x(&self, index: usize) -> f64 {
        let step = self.step();
        self.slot(index).0 + step * self.padding * 0.5
    }

    /// Returns the center of the band at `index`.
    pub fn center(&self, index: usize) -> f64 {
        let (s0, s1) = self.slot(index);
        (s0 + s1) * 0.5
    }

    /// Returns the usable bar interval `[start, end)` for `category`.
    pub fn band(&self, category: &Category) -> Option<(f64, f64)> {
        let i = self.index_of(category)?;
        let x = self.x(i);
        Some((x, x + self.band_width()))
    }

    fn start(&self) -> f64 {
        let (r0, r1) = self.range;
        if r1 >= r0 { r0 } else { r1 }
    }

    /// A scale with no bands, used for layouts over empty data.
    pub(crate) fn empty(size: f64, padding: f64) -> Self {
        Self {
            domain: Vec::new(),
            index: HashMap::new(),
            range: (0.0, size),
            padding,
        }
    }
}

/// Builds a band scale over `categories` spanning `[0, size]`.
///
/// Fails if `categories` is empty or has duplicate labels, if `padding` is outside `[0, 1)`, or if
/// `size` is not a positive finite number.
pub fn build_band_scale(
    categories: &[Category],
    size: f64,
    padding: f64,
) -> Result<BandScale, ConfigError> {
    check_size("size", size)?;
    check_padding(padding)?;
    if categories.is_empty() {
        return Err(ConfigError::EmptyCategories);
    }
    let mut index = HashMap::with_capacity(categories.len());
    for (i, c) in categories.iter().enumerate() {
        let label = c.label().into_owned();
        if index.contains_key(&label) {
            return Err(ConfigError::DuplicateCategory(label));
        }
        index.insert(label, i);
    }
    Ok(BandScale {
        domain: categories.to_vec(),
        index,
        range: (0.0, size),
        padding,
    })
}

/// A linear mapping from a continuous domain to a pixel range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps a value from domain space into range space.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return r0;
        }
        let t = (x - d0) / denom;
        r0 + t * (r1 - r0)
    }

    /// Maps a pixel coordinate back into domain space.
    pub fn invert(&self, px: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = r1 - r0;
        if denom == 0.0 {
            return d0;
        }
        let t = (px - r0) / denom;
        d0 + t * (d1 - d0)
    }

    /// Returns the domain.
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Returns the range.
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Returns “nice-ish” tick values for the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        nice_ticks(self.domain.0, self.domain.1, count)
    }

    /// Returns a copy whose domain is extended outward to tick boundaries.
    pub fn nice(&self, count: usize) -> Self {
        let ticks = self.ticks(count);
        match (ticks.first(), ticks.last()) {
            (Some(&lo), Some(&hi)) if ticks.len() >= 2 => Self::new((lo, hi), self.range),
            _ => *self,
        }
    }
}

/// Builds a linear scale over `values` spanning `size` pixels.
///
/// The domain always includes `0`: it is `[min(0, min), max(0, max)]` over the finite values.
/// With `invert`, the domain minimum maps to `size` and the maximum to `0` (a y-axis whose origin
/// is at the top).
pub fn build_linear_scale(
    values: impl IntoIterator<Item = f64>,
    size: f64,
    invert: bool,
) -> Result<LinearScale, ConfigError> {
    check_size("size", size)?;
    let (lo, hi) = extent(values).unwrap_or((0.0, 0.0));
    let domain = (lo.min(0.0), hi.max(0.0));
    let range = if invert { (size, 0.0) } else { (0.0, size) };
    Ok(LinearScale::new(domain, range))
}

/// Returns `(min, max)` over the finite values, or `None` if there are none.
fn extent(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        if !v.is_finite() {
            continue;
        }
        min = min.min(v);
        max = max.max(v);
    }
    if min.is_finite() && max.is_finite() {
        Some((min, max))
    } else {
        None
    }
}

pub(crate) fn check_size(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositiveDimension { name, value })
    }
}

pub(crate) fn check_padding(padding: f64) -> Result<(), ConfigError> {
    if (0.0..1.0).contains(&padding) {
        Ok(())
    } else {
        Err(ConfigError::InvalidPadding(padding))
    }
}

fn nice_ticks(mut min: f64, mut max: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    if min == max {
        return alloc::vec![min];
    }
    if min > max {
        core::mem::swap(&mut min, &mut max);
    }
    let span = max - min;
    let step0 = span / count.max(1) as f64;
    let step = nice_step(step0);
    if step == 0.0 {
        return alloc::vec![min, max];
    }

    let start = (min / step).floor() * step;
    let stop = (max / step).ceil() * step;

    let n_f = ((stop - start) / step).round();
    let n = if n_f.is_finite() && n_f >= 0.0 {
        let n_f = n_f.min(10_000.0);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "guarded by finite/non-negative checks and capped at 10k"
        )]
        {
            n_f as u64
        }
    } else {
        0
    };
    (0..=n).map(|i| start + step * i as f64).collect()
}

/// Returns the spacing between consecutive `ticks`, or `0` if there are fewer than two.
pub(crate) fn tick_step(ticks: &[f64]) -> f64 {
    match ticks {
        [a, b, ..] => (b - a).abs(),
        _ => 0.0,
    }
}

fn nice_step(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let power = step.log10().floor();
    #[allow(clippy::cast_possible_truncation, reason = "log10 of a finite f64 fits in i32")]
    let base = 10_f64.powi(power as i32);
    let error = step / base;
    let nice = if error >= 7.5 {
        10.0
    } else if error >= 3.5 {
        5.0
    } else if error >= 1.5 {
        2.0
    } else {
        1.0
    };
    nice * base
}
