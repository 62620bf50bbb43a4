// Copyright 2025 the Barchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG output for `barchart_demo`.

use std::fmt::Write as _;

use barchart_layout::{AxisOrient, AxisTicks, BarSurface, GridAxis, GridLines};
use kurbo::{Point, Rect, Vec2};
use peniko::Color;
use peniko::color::palette::css;

const FONT_SIZE: f64 = 11.0;

/// A [`BarSurface`] that accumulates SVG elements.
///
/// Layout coordinates are plot-relative; everything is shifted by the plot origin so margins
/// stay free for the axes.
#[derive(Debug)]
pub(crate) struct SvgSurface {
    view: Rect,
    origin: Vec2,
    body: String,
}

impl SvgSurface {
    pub(crate) fn new(view: Rect, plot: Rect) -> Self {
        Self {
            view,
            origin: plot.origin().to_vec2(),
            body: String::new(),
        }
    }

    pub(crate) fn to_svg_string(&self) -> String {
        let mut out = String::new();
        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        let _ = write!(
            out,
            r#"viewBox="{} {} {} {}" width="{}" height="{}" font-family="sans-serif" font-size="{}">"#,
            self.view.x0,
            self.view.y0,
            self.view.width(),
            self.view.height(),
            self.view.width(),
            self.view.height(),
            FONT_SIZE,
        );
        out.push('\n');
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }

    fn line(&mut self, a: Point, b: Point, stroke: Color) {
        let _ = write!(
            self.body,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}""#,
            a.x, a.y, b.x, b.y
        );
        write_paint_attr(&mut self.body, "stroke", stroke);
        self.body.push_str("/>\n");
    }

    fn text(&mut self, pos: Point, anchor: &str, baseline: &str, text: &str) {
        let _ = write!(
            self.body,
            r#"<text x="{}" y="{}" text-anchor="{anchor}" dominant-baseline="{baseline}""#,
            pos.x, pos.y
        );
        write_paint_attr(&mut self.body, "fill", css::BLACK);
        self.body.push('>');
        self.body.push_str(&escape_xml(text));
        self.body.push_str("</text>\n");
    }
}

impl BarSurface for SvgSurface {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let r = rect + self.origin;
        let _ = write!(
            self.body,
            r#"<rect x="{}" y="{}" width="{}" height="{}""#,
            r.x0,
            r.y0,
            r.width(),
            r.height()
        );
        write_paint_attr(&mut self.body, "fill", color);
        self.body.push_str("/>\n");
    }

    fn draw_label(&mut self, anchor: Point, text: &str) {
        self.text(anchor + self.origin, "middle", "middle", text);
    }

    fn draw_axis(&mut self, axis: &AxisTicks) {
        let (e0, e1) = axis.extent;
        let (size, padding) = (axis.tick_size, axis.tick_padding);
        let o = self.origin;
        if axis.orient.is_horizontal() {
            let y = axis.cross + o.y;
            let dir = if axis.orient == AxisOrient::Top { -1.0 } else { 1.0 };
            let baseline = if dir < 0.0 { "alphabetic" } else { "hanging" };
            self.line(Point::new(o.x + e0, y), Point::new(o.x + e1, y), css::DIM_GRAY);
            for tick in &axis.ticks {
                let x = o.x + tick.position;
                self.line(Point::new(x, y), Point::new(x, y + dir * size), css::DIM_GRAY);
                let label_at = Point::new(x, y + dir * (size + padding));
                self.text(label_at, "middle", baseline, &tick.label);
            }
        } else {
            let x = axis.cross + o.x;
            let dir = if axis.orient == AxisOrient::Left { -1.0 } else { 1.0 };
            let anchor = if dir < 0.0 { "end" } else { "start" };
            self.line(Point::new(x, o.y + e0), Point::new(x, o.y + e1), css::DIM_GRAY);
            for tick in &axis.ticks {
                let y = o.y + tick.position;
                self.line(Point::new(x, y), Point::new(x + dir * size, y), css::DIM_GRAY);
                let label_at = Point::new(x + dir * (size + padding), y);
                self.text(label_at, anchor, "middle", &tick.label);
            }
        }
    }

    fn draw_grid(&mut self, grid: &GridLines) {
        let (e0, e1) = grid.extent;
        let o = self.origin;
        for &p in &grid.positions {
            let (a, b) = match grid.axis {
                GridAxis::X => (Point::new(o.x + p, o.y + e0), Point::new(o.x + p, o.y + e1)),
                GridAxis::Y => (Point::new(o.x + e0, o.y + p), Point::new(o.x + e1, o.y + p)),
            };
            self.line(a, b, css::GAINSBORO);
        }
    }
}

fn svg_paint(color: Color) -> (String, Option<f64>) {
    let rgba = color.to_rgba8();
    let fill = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
    let opacity = if rgba.a == 255 {
        None
    } else {
        Some(f64::from(rgba.a) / 255.0)
    };
    (fill, opacity)
}

fn write_paint_attr(out: &mut String, name: &str, color: Color) {
    let (value, opacity) = svg_paint(color);
    let _ = write!(out, r#" {name}="{value}""#);
    if let Some(o) = opacity {
        let _ = write!(out, r#" {name}-opacity="{o}""#);
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use barchart_layout::{BarChartSpec, Margin, PaintOptions, Point as Datum, Series, paint};

    use super::*;

    #[test]
    fn bars_are_shifted_by_the_plot_origin() {
        let series = [Series::new("s", [Datum::new("a", 1)])];
        let chart = BarChartSpec::new(120.0, 120.0)
            .with_margin(Margin::uniform(10.0))
            .with_x_padding(0.0)
            .with_palette([css::RED])
            .layout(&series)
            .unwrap();
        let mut svg = SvgSurface::new(chart.view, chart.plot);
        paint(
            &chart.bars,
            &mut svg,
            &PaintOptions::default()
                .with_axes(Vec::<AxisOrient>::new())
                .with_grid_y(false),
        );
        let out = svg.to_svg_string();
        assert!(out.contains(r##"<rect x="10" y="10" width="100" height="100" fill="#ff0000"/>"##));
        assert!(out.contains(">1</text>"));
        assert!(!out.contains("<line"));
    }

    #[test]
    fn grid_lines_span_the_plot() {
        let mut svg = SvgSurface::new(
            Rect::new(0.0, 0.0, 120.0, 120.0),
            Rect::new(10.0, 20.0, 110.0, 100.0),
        );
        svg.draw_grid(&GridLines {
            axis: GridAxis::Y,
            positions: vec![0.0, 40.0],
            extent: (0.0, 100.0),
        });
        let out = svg.to_svg_string();
        assert!(out.contains(r##"<line x1="10" y1="60" x2="110" y2="60" stroke="#dcdcdc"/>"##));
        assert_eq!(out.matches("<line").count(), 2);
    }

    #[test]
    fn labels_are_escaped() {
        assert_eq!(escape_xml("a<b & 'c'"), "a&lt;b &amp; &apos;c&apos;");
    }

    #[test]
    fn translucent_colors_get_an_opacity() {
        let (fill, opacity) = svg_paint(css::RED.with_alpha(0.5));
        assert_eq!(fill, "#ff0000");
        assert!(opacity.is_some_and(|o| (o - 0.5).abs() < 0.01));
    }
}
