// Copyright 2025 the Barchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bar geometry: the output contract consumed by renderers.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect};
use peniko::Color;

use crate::data::Category;
use crate::scale::{BandScale, LinearScale};

/// Returns the stable key for the bar of `series_id` in `category`.
///
/// The key depends only on the pair, never on the value, so renderers can match bars across
/// layouts.
pub fn bar_key(series_id: &str, category: &Category) -> String {
    format!("{series_id}.{}", category.label())
}

/// One positioned bar.
///
/// Coordinates are in plot space: `x` grows to the right, `y` grows downward, and `(x, y)` is the
/// top-left corner.
#[derive(Clone, Debug)]
pub struct BarGeometry {
    /// Stable identity, `"{series_id}.{category}"`.
    pub key: String,
    /// Series the bar belongs to.
    pub series_id: String,
    /// Category the bar belongs to.
    pub category: Category,
    /// Data value.
    pub value: f64,
    /// Data-space start of the bar; the bar covers `[base, base + value)`.
    ///
    /// Always `0` for grouped bars, the running stack offset for stacked bars.
    pub base: f64,
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width (never negative).
    pub width: f64,
    /// Height (never negative).
    pub height: f64,
    /// Fill color.
    pub color: Color,
}

impl BarGeometry {
    /// Returns the bar rectangle.
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    /// Returns the bar center, where value labels are anchored.
    pub fn center(&self) -> Point {
        self.rect().center()
    }

    /// Returns the data-space end of the bar (`base + value`).
    pub fn end(&self) -> f64 {
        self.base + self.value
    }
}

/// Output of a layout generator.
#[derive(Clone, Debug)]
pub struct BarLayout {
    /// Bars ordered by category, then by series declaration order.
    pub bars: Vec<BarGeometry>,
    /// Category scale along x.
    pub x_scale: BandScale,
    /// Value scale along y (inverted: larger values are higher up).
    pub y_scale: LinearScale,
}

/// Vertical extent of the data-space span `[from, to]` under `y_scale`, as `(top, height)`.
pub(crate) fn vertical_span(y_scale: &LinearScale, from: f64, to: f64) -> (f64, f64) {
    let a = y_scale.map(from);
    let b = y_scale.map(to);
    (a.min(b), (a - b).abs())
}
