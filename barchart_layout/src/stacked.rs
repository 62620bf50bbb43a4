// Copyright 2025 the Barchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stacked bar layout.

extern crate alloc;

use alloc::vec::Vec;

use peniko::Color;

use crate::data::{Cell, Series};
use crate::error::{DataError, LayoutError};
use crate::geometry::{BarGeometry, BarLayout, bar_key, vertical_span};
use crate::prepare::{LayoutOptions, Prepared, prepare};
use crate::scale::build_linear_scale;

/// One stacked segment before it is mapped to pixels.
#[derive(Clone, Copy, Debug)]
struct Segment {
    category: usize,
    cell: Cell,
    base: f64,
}

/// Lays out `series` as stacked bars in a `width` × `height` plot.
///
/// Within each category a running offset starts at `0`; each series with a point (in declaration
/// order) covers `[offset, offset + value)` and advances the offset by `value`. Negative values
/// move the offset down, so the next segment starts below the previous one.
///
/// A stack whose running total leaves the finite range fails with [`DataError::StackOverflow`]
/// before any bar is produced.
///
/// The y scale spans `0` and every stack end, which for non-negative data is
/// `[0, max category sum]`. Bars are ordered by category, then by series declaration order.
pub fn generate_stacked(
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

    let mut segments = Vec::new();
    for ci in 0..table.categories().len() {
        let mut offset = 0.0;
        for &cell in table.cells(ci) {
            let end = offset + cell.value;
            if !end.is_finite() {
                return Err(DataError::StackOverflow {
                    category: table.categories()[ci].label().into_owned(),
                    series: table.series_ids()[cell.series].into(),
                }
                .into());
            }
            segments.push(Segment {
                category: ci,
                cell,
                base: offset,
            });
            offset = end;
        }
    }

    let y_scale = build_linear_scale(
        segments.iter().map(|s| s.base + s.cell.value),
        height,
        true,
    )?;
    let band_width = x_scale.band_width();

    let bars: Vec<BarGeometry> = segments
        .into_iter()
        .map(|Segment { category, cell, base }| {
            let series_id = table.series_ids()[cell.series];
            let category_key = &table.categories()[category];
            let (y, h) = vertical_span(&y_scale, base, base + cell.value);
            let bar = BarGeometry {
                key: bar_key(series_id, category_key),
                series_id: series_id.into(),
                category: category_key.clone(),
                value: cell.value,
                base,
                x: x_scale.x(category),
                y,
                width: band_width,
                height: h,
                color: colors.color_at(cell.series),
            };
            tracing::trace!(key = %bar.key, base, y = bar.y, height = bar.height, "stacked bar");
            bar
        })
        .collect();

    tracing::debug!(
        categories = x_scale.count(),
        series = table.series_ids().len(),
        bars = bars.len(),
        "stacked bar layout"
    );

    Ok(BarLayout {
        bars,
        x_scale,
        y_scale,
    })
}
