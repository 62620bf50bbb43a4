// Copyright 2025 the Barchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rendering capability interface.
//!
//! Layout output is drawn through [`BarSurface`], implemented once per target (SVG, canvas,
//! terminal). [`paint`] walks a [`BarLayout`] and issues the calls; everything target-specific
//! stays in the implementation.

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use kurbo::{Point, Rect};
use peniko::Color;

use crate::format::{format_number, format_tick};
use crate::geometry::BarLayout;
use crate::scale::{BandScale, LinearScale, tick_step};

/// Axis placement relative to the plot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisOrient {
    /// Horizontal axis above the plot.
    Top,
    /// Horizontal axis below the plot.
    Bottom,
    /// Vertical axis left of the plot.
    Left,
    /// Vertical axis right of the plot.
    Right,
}

impl AxisOrient {
    /// Returns `true` for `Top` and `Bottom`.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }
}

/// Per-axis drawing options.
#[derive(Clone)]
pub struct AxisSpec {
    /// Placement.
    pub orient: AxisOrient,
    /// Length of tick marks, pointing away from the plot.
    pub tick_size: f64,
    /// Gap between a tick mark and its label.
    pub tick_padding: f64,
    /// Optional label formatter for value axes.
    ///
    /// Called with the tick value and the tick step. Category axes always use the category
    /// label.
    pub tick_formatter: Option<Arc<dyn Fn(f64, f64) -> String>>,
}

impl core::fmt::Debug for AxisSpec {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AxisSpec")
            .field("orient", &self.orient)
            .field("tick_size", &self.tick_size)
            .field("tick_padding", &self.tick_padding)
            .field("tick_formatter", &self.tick_formatter.is_some())
            .finish()
    }
}

impl AxisSpec {
    /// Creates an axis with `tick_size = 5`, `tick_padding = 5` and default tick labels.
    pub fn new(orient: AxisOrient) -> Self {
        Self {
            orient,
            tick_size: 5.0,
            tick_padding: 5.0,
            tick_formatter: None,
        }
    }

    /// Sets the tick mark length.
    pub fn with_tick_size(mut self, tick_size: f64) -> Self {
        self.tick_size = tick_size;
        self
    }

    /// Sets the gap between tick marks and labels.
    pub fn with_tick_padding(mut self, tick_padding: f64) -> Self {
        self.tick_padding = tick_padding;
        self
    }

    /// Sets a value-axis label formatter, called with `(value, step)`.
    pub fn with_tick_formatter(mut self, f: impl Fn(f64, f64) -> String + 'static) -> Self {
        self.tick_formatter = Some(Arc::new(f));
        self
    }
}

impl From<AxisOrient> for AxisSpec {
    fn from(orient: AxisOrient) -> Self {
        Self::new(orient)
    }
}

/// One labeled tick.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// Position along the axis, in plot coordinates.
    pub position: f64,
    /// Tick label.
    pub label: String,
}

/// Everything a surface needs to draw one axis.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisTicks {
    /// Placement.
    pub orient: AxisOrient,
    /// Coordinate of the axis line across the axis direction (`y` for horizontal axes, `x` for
    /// vertical ones).
    pub cross: f64,
    /// Start and end of the axis line along its direction.
    pub extent: (f64, f64),
    /// Length of tick marks.
    pub tick_size: f64,
    /// Gap between tick marks and labels.
    pub tick_padding: f64,
    /// Ticks in axis order.
    pub ticks: Vec<Tick>,
}

/// Ticks for a band scale: one per category, at the band center.
pub fn band_axis(scale: &BandScale, axis: &AxisSpec, cross: f64) -> AxisTicks {
    let ticks = scale
        .domain()
        .iter()
        .enumerate()
        .map(|(i, c)| Tick {
            position: scale.center(i),
            label: c.label().into_owned(),
        })
        .collect();
    AxisTicks {
        orient: axis.orient,
        cross,
        extent: scale.range(),
        tick_size: axis.tick_size,
        tick_padding: axis.tick_padding,
        ticks,
    }
}

/// Ticks for a linear scale: “nice” values inside the domain, labeled to the tick step unless the
/// axis has its own formatter.
pub fn linear_axis(scale: &LinearScale, axis: &AxisSpec, cross: f64, count: usize) -> AxisTicks {
    let values = value_ticks(scale, count);
    let step = tick_step(&values);
    let ticks = values
        .into_iter()
        .map(|v| Tick {
            position: scale.map(v),
            label: match &axis.tick_formatter {
                Some(f) => f(v, step),
                None => format_tick(v, step),
            },
        })
        .collect();
    AxisTicks {
        orient: axis.orient,
        cross,
        extent: scale.range(),
        tick_size: axis.tick_size,
        tick_padding: axis.tick_padding,
        ticks,
    }
}

/// Which scale a set of grid lines follows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GridAxis {
    /// Vertical lines at category band centers.
    X,
    /// Horizontal lines at value ticks.
    Y,
}

/// Grid lines across the plot.
#[derive(Clone, Debug, PartialEq)]
pub struct GridLines {
    /// Direction.
    pub axis: GridAxis,
    /// Line positions along the scale, in plot coordinates.
    pub positions: Vec<f64>,
    /// Start and end of every line across the plot.
    pub extent: (f64, f64),
}

/// Vertical grid lines at the band centers of `scale`, spanning `[0, height]`.
pub fn band_grid(scale: &BandScale, height: f64) -> GridLines {
    GridLines {
        axis: GridAxis::X,
        positions: (0..scale.count()).map(|i| scale.center(i)).collect(),
        extent: (0.0, height),
    }
}

/// Horizontal grid lines at the value ticks of `scale`, spanning `[0, width]`.
///
/// Uses the same ticks as [`linear_axis`] with the same `count`, so lines meet the axis ticks.
pub fn linear_grid(scale: &LinearScale, width: f64, count: usize) -> GridLines {
    GridLines {
        axis: GridAxis::Y,
        positions: value_ticks(scale, count)
            .into_iter()
            .map(|v| scale.map(v))
            .collect(),
        extent: (0.0, width),
    }
}

/// Tick values clamped to the domain; niced ticks may overshoot it.
fn value_ticks(scale: &LinearScale, count: usize) -> Vec<f64> {
    let (d0, d1) = scale.domain();
    let (lo, hi) = if d0 <= d1 { (d0, d1) } else { (d1, d0) };
    let eps = (hi - lo).abs() * 1e-9;
    let mut values = scale.ticks(count);
    values.retain(|v| *v >= lo - eps && *v <= hi + eps);
    values
}

/// A drawing target for bar layouts.
pub trait BarSurface {
    /// Fills an axis-aligned rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draws a text label centered on `anchor`.
    fn draw_label(&mut self, anchor: Point, text: &str);

    /// Draws an axis line with its ticks and tick labels.
    fn draw_axis(&mut self, axis: &AxisTicks);

    /// Draws grid lines behind the bars.
    fn draw_grid(&mut self, grid: &GridLines);
}

/// Options for [`paint`].
#[derive(Clone, Debug)]
pub struct PaintOptions {
    /// Draw each bar's value at its center.
    pub labels: bool,
    /// Axes to draw, in order.
    pub axes: Vec<AxisSpec>,
    /// Approximate tick count for value axes and value grid lines.
    pub tick_count: usize,
    /// Draw vertical grid lines at category centers.
    pub grid_x: bool,
    /// Draw horizontal grid lines at value ticks.
    pub grid_y: bool,
}

impl Default for PaintOptions {
    fn default() -> Self {
        Self {
            labels: true,
            axes: alloc::vec![
                AxisSpec::new(AxisOrient::Bottom),
                AxisSpec::new(AxisOrient::Left),
            ],
            tick_count: 5,
            grid_x: false,
            grid_y: true,
        }
    }
}

impl PaintOptions {
    /// Enables or disables value labels.
    pub fn with_labels(mut self, labels: bool) -> Self {
        self.labels = labels;
        self
    }

    /// Sets the axes to draw.
    pub fn with_axes<A: Into<AxisSpec>>(mut self, axes: impl IntoIterator<Item = A>) -> Self {
        self.axes = axes.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the approximate tick count for value axes.
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    /// Enables or disables vertical grid lines.
    pub fn with_grid_x(mut self, grid_x: bool) -> Self {
        self.grid_x = grid_x;
        self
    }

    /// Enables or disables horizontal grid lines.
    pub fn with_grid_y(mut self, grid_y: bool) -> Self {
        self.grid_y = grid_y;
        self
    }
}

/// Draws `layout` onto `surface`: grid lines, then bars in layout order, then value labels, then
/// axes.
///
/// Coordinates are plot-relative; surfaces that draw into a larger view translate by the plot
/// origin themselves.
pub fn paint(layout: &BarLayout, surface: &mut impl BarSurface, options: &PaintOptions) {
    let width = layout.x_scale.range().1;
    let (y0, y1) = layout.y_scale.range();
    let height = y0.max(y1);

    if options.grid_x {
        surface.draw_grid(&band_grid(&layout.x_scale, height));
    }
    if options.grid_y {
        surface.draw_grid(&linear_grid(&layout.y_scale, width, options.tick_count));
    }

    for bar in &layout.bars {
        surface.fill_rect(bar.rect(), bar.color);
    }
    if options.labels {
        for bar in &layout.bars {
            surface.draw_label(bar.center(), &format_number(bar.value));
        }
    }

    for axis in &options.axes {
        let ticks = match axis.orient {
            AxisOrient::Bottom => band_axis(&layout.x_scale, axis, height),
            AxisOrient::Top => band_axis(&layout.x_scale, axis, 0.0),
            AxisOrient::Left => linear_axis(&layout.y_scale, axis, 0.0, options.tick_count),
            AxisOrient::Right => linear_axis(&layout.y_scale, axis, width, options.tick_count),
        };
        surface.draw_axis(&ticks);
    }
}
