// Copyright 2025 the Barchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Validation and setup shared by the grouped and stacked generators.

use peniko::Color;

use crate::color::{SeriesColors, assign};
use crate::data::{Series, SeriesTable, normalize};
use crate::error::{ConfigError, LayoutError};
use crate::scale::{BandScale, build_band_scale, check_padding, check_size};

/// Per-call layout options.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutOptions {
    /// Fraction of each category slot left empty around its bars, in `[0, 1)`.
    pub x_padding: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self { x_padding: 0.1 }
    }
}

impl LayoutOptions {
    /// Sets the category padding fraction.
    pub fn with_x_padding(mut self, x_padding: f64) -> Self {
        self.x_padding = x_padding;
        self
    }
}

pub(crate) struct Prepared<'a> {
    pub(crate) table: SeriesTable<'a>,
    pub(crate) x_scale: BandScale,
    pub(crate) colors: SeriesColors,
}

/// Checks configuration, then data, then builds the band scale and colors.
///
/// Empty data is not an error here: it yields a band scale with no bands.
pub(crate) fn prepare<'a>(
    series: &'a [Series],
    width: f64,
    height: f64,
    palette: &[Color],
    options: &LayoutOptions,
) -> Result<Prepared<'a>, LayoutError> {
    check_size("width", width)?;
    check_size("height", height)?;
    check_padding(options.x_padding)?;
    if palette.is_empty() {
        return Err(ConfigError::EmptyPalette.into());
    }

    let table = normalize(series)?;
    let x_scale = if table.is_empty() {
        BandScale::empty(width, options.x_padding)
    } else {
        build_band_scale(table.categories(), width, options.x_padding)?
    };
    let colors = assign(table.series_ids(), palette)?;

    Ok(Prepared {
        table,
        x_scale,
        colors,
    })
}
