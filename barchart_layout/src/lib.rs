// Copyright 2025 the Barchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grouped and stacked bar chart layout.
//!
//! This crate turns a list of data series into renderer-agnostic bar geometry:
//! - **Scales** place categories along x ([`BandScale`]) and values along y ([`LinearScale`]).
//! - **Colors** are assigned to series cyclically from a palette ([`assign`]).
//! - **Generators** produce one [`BarGeometry`] per `(series, category)` point, either side by
//!   side ([`generate_grouped`]) or stacked ([`generate_stacked`]).
//!
//! Every bar carries a stable key `"{series_id}.{category}"`, so successive layouts can be
//! paired for animation ([`diff_bars`]). Drawing goes through the [`BarSurface`] trait; the crate
//! itself never renders.
//!
//! ```
//! use barchart_layout::{BarChartSpec, BarMode, Point, Series};
//!
//! let series = [
//!     Series::new("s1", [Point::new("a", 3), Point::new("b", 5)]),
//!     Series::new("s2", [Point::new("a", 2), Point::new("b", 1)]),
//! ];
//! let chart = BarChartSpec::new(100.0, 100.0)
//!     .with_mode(BarMode::Grouped)
//!     .with_x_padding(0.0)
//!     .layout(&series)
//!     .unwrap();
//! assert_eq!(chart.bars.bars[1].key, "s2.a");
//! assert_eq!(chart.bars.bars[1].x, 25.0);
//! ```
//!
//! All functions are pure: identical inputs give identical output, and layouts may be computed
//! concurrently.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod chart;
mod color;
mod data;
mod diff;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod geometry;
mod grouped;
#[cfg(test)]
mod layout_tests;
mod prepare;
mod scale;
mod stacked;
mod surface;

pub use chart::{BarChartSpec, BarMode, ChartLayout, Margin, Size};
pub use color::{DEFAULT_PALETTE, SeriesColors, assign};
pub use data::{Category, Cell, Point, Series, SeriesTable, Value, normalize};
pub use diff::{BarDiff, diff_bars};
pub use error::{ConfigError, DataError, LayoutError};
pub use format::{format_number, format_tick};
pub use geometry::{BarGeometry, BarLayout, bar_key};
pub use grouped::generate_grouped;
pub use prepare::LayoutOptions;
pub use scale::{BandScale, LinearScale, build_band_scale, build_linear_scale};
pub use stacked::generate_stacked;
pub use surface::{
    AxisOrient, AxisSpec, AxisTicks, BarSurface, GridAxis, GridLines, PaintOptions, Tick,
    band_axis, band_grid, linear_axis, linear_grid, paint,
};
