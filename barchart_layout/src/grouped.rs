// Copyright 2025 the Barchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grouped (side-by-side) bar layout.

extern crate alloc;

use alloc::vec::Vec;

use peniko::Color;

use crate::data::Series;
use crate::error::LayoutError;
use crate::geometry::{BarGeometry, BarLayout, bar_key, vertical_span};
use crate::prepare::{LayoutOptions, Prepared, prepare};
use crate::scale::build_linear_scale;

/// Lays out `series` as grouped bars in a `width` × `height` plot.
///
/// Each category band is split evenly between the series that have a point for that category;
/// a series without a point contributes no bar. The y scale covers every value (and `0`), and
/// every bar spans from `0` to its value.
///
/// Bars are ordered by category, then by series declaration order.
pub fn generate_grouped(
    series: &[Series],
    width: f64,
    height: f64,
    palette: &[Color],
    options: &LayoutOptions,
) -> Result<BarLayout, LayoutError> {
    let Prepared {
        table,
        x_scale,
        colors,
    } = prepare(series, width, height, palette, options)?;

    let y_scale = build_linear_scale(table.values(), height, true)?;
    let band_width = x_scale.band_width();

    let mut bars = Vec::new();
    for (ci, category) in table.categories().iter().enumerate() {
        let cells = table.cells(ci);
        let sub_width = band_width / cells.len() as f64;
        let x0 = x_scale.x(ci);
        for (slot, cell) in cells.iter().enumerate() {
            let series_id = table.series_ids()[cell.series];
            let (y, h) = vertical_span(&y_scale, 0.0, cell.value);
            let bar = BarGeometry {
                key: bar_key(series_id, category),
                series_id: series_id.into(),
                category: category.clone(),
                value: cell.value,
                base: 0.0,
                x: x0 + sub_width * slot as f64,
                y,
                width: sub_width,
                height: h,
                color: colors.color_at(cell.series),
            };
            tracing::trace!(key = %bar.key, x = bar.x, y = bar.y, width = bar.width, height = bar.height, "grouped bar");
            bars.push(bar);
        }
    }

    tracing::debug!(
        categories = x_scale.count(),
        series = table.series_ids().len(),
        bars = bars.len(),
        "grouped bar layout"
    );

    Ok(BarLayout {
        bars,
        x_scale,
        y_scale,
    })
}
