// Copyright 2025 the Barchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart-level configuration: outer size, margins, mode and palette.
//!
//! A [`BarChartSpec`] is an immutable value passed per call. It carves the plot rectangle out of
//! the view using the margins, then runs the grouped or stacked generator over the plot size.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Rect;
use peniko::Color;

use crate::color::DEFAULT_PALETTE;
use crate::data::Series;
use crate::error::{ConfigError, LayoutError};
use crate::geometry::BarLayout;
use crate::grouped::generate_grouped;
use crate::prepare::LayoutOptions;
use crate::scale::check_size;
use crate::stacked::generate_stacked;

/// How bars sharing a category are arranged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BarMode {
    /// Side by side within the category band.
    Grouped,
    /// On top of each other at cumulative offsets.
    #[default]
    Stacked,
}

impl BarMode {
    /// Runs the generator for this mode.
    pub fn generate(
        self,
        series: &[Series],
        width: f64,
        height: f64,
        palette: &[Color],
        options: &LayoutOptions,
    ) -> Result<BarLayout, LayoutError> {
        match self {
            Self::Grouped => generate_grouped(series, width, height, palette, options),
            Self::Stacked => generate_stacked(series, width, height, palette, options),
        }
    }
}

/// A width/height pair used by chart layout.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Size {
    /// Creates a size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Space reserved around the plot (for axes, labels, legends drawn by the caller).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Margin {
    /// Top margin.
    pub top: f64,
    /// Right margin.
    pub right: f64,
    /// Bottom margin.
    pub bottom: f64,
    /// Left margin.
    pub left: f64,
}

impl Margin {
    /// The same margin on all sides.
    pub fn uniform(m: f64) -> Self {
        Self {
            top: m,
            right: m,
            bottom: m,
            left: m,
        }
    }

    fn check(&self) -> Result<(), ConfigError> {
        for (side, value) in [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidMargin { side, value });
            }
        }
        Ok(())
    }
}

/// Output of [`BarChartSpec::layout`].
#[derive(Clone, Debug)]
pub struct ChartLayout {
    /// Outer chart bounds.
    pub view: Rect,
    /// The plot rectangle (view inset by the margins).
    pub plot: Rect,
    /// Bars and scales, in plot-relative coordinates.
    pub bars: BarLayout,
}

/// Immutable bar chart configuration.
#[derive(Clone, Debug)]
pub struct BarChartSpec {
    /// Grouped or stacked arrangement.
    pub mode: BarMode,
    /// Outer size, margins included.
    pub size: Size,
    /// Margins around the plot.
    pub margin: Margin,
    /// Generator options.
    pub options: LayoutOptions,
    /// Series palette, assigned cyclically.
    pub palette: Vec<Color>,
}

impl BarChartSpec {
    /// Creates a stacked chart spec with no margins, `x_padding = 0.1` and the default palette.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            mode: BarMode::default(),
            size: Size::new(width, height),
            margin: Margin::default(),
            options: LayoutOptions::default(),
            palette: DEFAULT_PALETTE.to_vec(),
        }
    }

    /// Sets the bar mode.
    pub fn with_mode(mut self, mode: BarMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the margins.
    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    /// Sets the category padding fraction.
    pub fn with_x_padding(mut self, x_padding: f64) -> Self {
        self.options = self.options.with_x_padding(x_padding);
        self
    }

    /// Sets the palette.
    pub fn with_palette(mut self, palette: impl Into<Vec<Color>>) -> Self {
        self.palette = palette.into();
        self
    }

    /// Computes the view and plot rectangles.
    pub fn arrange(&self) -> Result<(Rect, Rect), ConfigError> {
        check_size("width", self.size.width)?;
        check_size("height", self.size.height)?;
        self.margin.check()?;

        let m = self.margin;
        let plot_w = self.size.width - m.left - m.right;
        let plot_h = self.size.height - m.top - m.bottom;
        check_size("plot width", plot_w)?;
        check_size("plot height", plot_h)?;

        let view = Rect::new(0.0, 0.0, self.size.width, self.size.height);
        let plot = Rect::new(m.left, m.top, m.left + plot_w, m.top + plot_h);
        Ok((view, plot))
    }

    /// Lays out `series` in the plot rectangle.
    pub fn layout(&self, series: &[Series]) -> Result<ChartLayout, LayoutError> {
        let (view, plot) = self.arrange()?;
        let bars = self.mode.generate(
            series,
            plot.width(),
            plot.height(),
            &self.palette,
            &self.options,
        )?;
        Ok(ChartLayout { view, plot, bars })
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use peniko::color::palette::css;

    use super::*;
    use crate::data::Point;

    fn sample() -> Vec<Series> {
        vec![
            Series::new("s1", [Point::new("a", 3), Point::new("b", 5)]),
            Series::new("s2", [Point::new("a", 2), Point::new("b", 1)]),
        ]
    }

    #[test]
    fn margins_carve_the_plot_out_of_the_view() {
        let spec = BarChartSpec::new(300.0, 200.0).with_margin(Margin {
            top: 10.0,
            right: 20.0,
            bottom: 30.0,
            left: 40.0,
        });
        let (view, plot) = spec.arrange().unwrap();
        assert_eq!(view, Rect::new(0.0, 0.0, 300.0, 200.0));
        assert_eq!(plot, Rect::new(40.0, 10.0, 280.0, 170.0));

        let chart = spec.layout(&sample()).unwrap();
        assert_eq!(chart.bars.x_scale.range(), (0.0, 240.0));
        assert_eq!(chart.bars.y_scale.range(), (160.0, 0.0));
    }

    #[test]
    fn mode_selects_the_generator() {
        let grouped = BarChartSpec::new(100.0, 100.0)
            .with_mode(BarMode::Grouped)
            .with_x_padding(0.0)
            .layout(&sample())
            .unwrap();
        assert!((grouped.bars.bars[0].width - 25.0).abs() < 1e-9);

        let stacked = BarChartSpec::new(100.0, 100.0)
            .with_x_padding(0.0)
            .layout(&sample())
            .unwrap();
        assert!((stacked.bars.bars[0].width - 50.0).abs() < 1e-9);
        assert_eq!(stacked.bars.y_scale.domain(), (0.0, 6.0));
    }

    #[test]
    fn defaults_match_a_stacked_chart_with_light_padding() {
        let spec = BarChartSpec::new(10.0, 10.0);
        assert_eq!(spec.mode, BarMode::Stacked);
        assert_eq!(spec.options.x_padding, 0.1);
        assert_eq!(spec.margin, Margin::default());
        assert_eq!(spec.palette.len(), DEFAULT_PALETTE.len());
    }

    #[test]
    fn oversized_margins_are_rejected() {
        let spec = BarChartSpec::new(100.0, 100.0).with_margin(Margin::uniform(50.0));
        assert!(matches!(
            spec.layout(&sample()),
            Err(LayoutError::Config(ConfigError::NonPositiveDimension {
                name: "plot width",
                ..
            }))
        ));

        let spec = BarChartSpec::new(100.0, 100.0).with_margin(Margin {
            left: -1.0,
            ..Margin::default()
        });
        assert_eq!(
            spec.arrange().unwrap_err(),
            ConfigError::InvalidMargin {
                side: "left",
                value: -1.0
            }
        );
    }

    #[test]
    fn custom_palette_is_used() {
        let chart = BarChartSpec::new(100.0, 100.0)
            .with_palette([css::RED, css::BLUE])
            .layout(&sample())
            .unwrap();
        assert_eq!(chart.bars.bars[1].color.to_rgba8(), css::BLUE.to_rgba8());
    }
}
