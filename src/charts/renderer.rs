//! Static Chart Renderer
//! Draws a `Figure` with plotters and exports it as PNG and SVG.
//!
//! Layout:
//! 1. Header: title at top-left
//! 2. Legend: colored swatches + trace names, placed in plot paper coordinates
//!    (a horizontal legend anchored at y > 1 sits in the header above the plot)
//! 3. Plot: categorical x axis, bars grouped or stacked per category,
//!    horizontal grid at every y tick

use crate::charts::figure::{AxisRange, BarMode, Figure, LegendOrientation, XAnchor, YAnchor};
use crate::config::RenderSettings;
use image::{ImageFormat, RgbImage};
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

pub const PNG_FILE_NAME: &str = "os_architecture_comparison.png";
pub const SVG_FILE_NAME: &str = "os_architecture_comparison.svg";

const FONT: &str = "sans-serif";

// Layout sizes (px)
const MARGIN: i32 = 12;
const HEADER_HEIGHT: i32 = 72;
const X_LABEL_AREA: i32 = 56;
const Y_LABEL_AREA: i32 = 64;
const SWATCH: i32 = 12;
const SWATCH_GAP: i32 = 6;
const LEGEND_ITEM_GAP: i32 = 18;

/// Fraction of a category slot left empty between neighbouring groups.
const BAR_GAP: f64 = 0.2;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Drawing failed: {0}")]
    Drawing(String),
    #[error("Invalid color: {0}")]
    InvalidColor(String),
    #[error("Pixel buffer does not match {width}x{height}")]
    BufferSize { width: u32, height: u32 },
    #[error("Failed to encode image: {0}")]
    Image(#[from] image::ImageError),
    #[error("Failed to write chart: {0}")]
    Io(#[from] std::io::Error),
}

fn drawing_error<E: std::error::Error + Send + Sync>(err: DrawingAreaErrorKind<E>) -> RenderError {
    RenderError::Drawing(err.to_string())
}

/// Paths written by `StaticChartRenderer::export`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFiles {
    pub png: PathBuf,
    pub svg: PathBuf,
}

/// One bar in data coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarRect {
    pub trace: usize,
    pub x0: f64,
    pub x1: f64,
    pub y0: f64,
    pub y1: f64,
}

/// Parse `#RRGGBB` (leading `#` optional).
pub fn parse_hex_color(hex: &str) -> Result<RGBColor, RenderError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(RenderError::InvalidColor(hex.to_string()));
    }

    let channel = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16)
            .map_err(|_| RenderError::InvalidColor(hex.to_string()))
    };
    Ok(RGBColor(channel(0)?, channel(2)?, channel(4)?))
}

/// Label for an x tick: the category centred at `value`, empty between categories.
fn category_label(categories: &[String], value: f64) -> String {
    let rounded = value.round();
    if (value - rounded).abs() > 1e-6 || rounded < 0.0 {
        return String::new();
    }
    categories
        .get(rounded as usize)
        .cloned()
        .unwrap_or_default()
}

fn format_tick(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}

/// Fraction of the legend box lying left of / above its anchor point.
fn anchor_fractions(x_anchor: XAnchor, y_anchor: YAnchor) -> (f64, f64) {
    let fx = match x_anchor {
        XAnchor::Left => 0.0,
        XAnchor::Center => 0.5,
        XAnchor::Right => 1.0,
    };
    let fy = match y_anchor {
        YAnchor::Top => 0.0,
        YAnchor::Middle => 0.5,
        YAnchor::Bottom => 1.0,
    };
    (fx, fy)
}

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Bar rectangles for every trace value, in trace order.
    ///
    /// Category `i` is centred at x = `i`; bars of one category share
    /// `1 - BAR_GAP` of the slot.
    pub fn bar_geometry(fig: &Figure, categories: &[String], y_range: AxisRange) -> Vec<BarRect> {
        let group_width = 1.0 - BAR_GAP;
        let trace_count = fig.traces.len().max(1) as f64;
        let slot = group_width / trace_count;

        let mut positive_base = vec![0.0; categories.len()];
        let mut negative_base = vec![0.0; categories.len()];
        let mut bars = Vec::new();

        for (trace_idx, trace) in fig.traces.iter().enumerate() {
            for (x, &value) in trace.x.iter().zip(trace.y.iter()) {
                let Some(cat_idx) = categories.iter().position(|c| c == x) else {
                    continue;
                };
                let center = cat_idx as f64;
                let left = center - group_width / 2.0;

                let (x0, x1, mut y0, mut y1) = match fig.layout.bar_mode {
                    BarMode::Group => {
                        let x0 = left + trace_idx as f64 * slot;
                        (x0, x0 + slot, 0.0, value)
                    }
                    BarMode::Stack => {
                        let base = if value >= 0.0 {
                            &mut positive_base[cat_idx]
                        } else {
                            &mut negative_base[cat_idx]
                        };
                        let y0 = *base;
                        *base += value;
                        (left, left + group_width, y0, *base)
                    }
                };

                if trace.clip_on_axis {
                    y0 = y0.clamp(y_range.min, y_range.max);
                    y1 = y1.clamp(y_range.min, y_range.max);
                }

                bars.push(BarRect {
                    trace: trace_idx,
                    x0,
                    x1,
                    y0,
                    y1,
                });
            }
        }

        bars
    }

    /// Draw the complete figure on any plotters backend.
    pub fn draw<DB: DrawingBackend>(
        fig: &Figure,
        root: &DrawingArea<DB, Shift>,
    ) -> Result<(), RenderError> {
        let colors = fig
            .traces
            .iter()
            .map(|t| parse_hex_color(&t.marker_color))
            .collect::<Result<Vec<_>, _>>()?;

        Self::draw_figure(fig, &colors, root).map_err(drawing_error)
    }

    fn draw_figure<DB: DrawingBackend>(
        fig: &Figure,
        colors: &[RGBColor],
        root: &DrawingArea<DB, Shift>,
    ) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
        root.fill(&WHITE)?;

        let (header, body) = root.split_vertically(HEADER_HEIGHT);

        // Title
        if let Some(title) = &fig.layout.title {
            let title_style = (FONT, 22)
                .into_font()
                .color(&BLACK)
                .pos(Pos::new(HPos::Left, VPos::Top));
            header.draw_text(title, &title_style, (MARGIN, MARGIN))?;
        }

        let categories = fig.categories();
        let y_range = fig.y_range();
        let ticks = y_range.ticks();
        let x_max = categories.len().max(1) as f64 - 0.5;

        let mut chart = ChartBuilder::on(&body)
            .margin_top(MARGIN)
            .margin_left(MARGIN)
            .margin_right(MARGIN * 2)
            .margin_bottom(MARGIN)
            .x_label_area_size(X_LABEL_AREA)
            .y_label_area_size(Y_LABEL_AREA)
            .build_cartesian_2d(-0.5f64..x_max, y_range.min..y_range.max)?;

        let x_formatter = |v: &f64| category_label(&categories, *v);
        let y_formatter = |v: &f64| format_tick(*v);

        let mut mesh = chart.configure_mesh();
        mesh.disable_x_mesh()
            .max_light_lines(0)
            .x_labels(categories.len())
            .y_labels(ticks.len())
            .x_label_formatter(&x_formatter)
            .y_label_formatter(&y_formatter)
            .bold_line_style(BLACK.mix(0.12).stroke_width(1))
            .label_style((FONT, 14))
            .axis_desc_style((FONT, 15));
        if let Some(title) = &fig.layout.x_axis.title {
            mesh.x_desc(title.as_str());
        }
        if let Some(title) = &fig.layout.y_axis.title {
            mesh.y_desc(title.as_str());
        }
        mesh.draw()?;

        let bars = Self::bar_geometry(fig, &categories, y_range);
        debug!(
            bars = bars.len(),
            categories = categories.len(),
            y_min = y_range.min,
            y_max = y_range.max,
            "Drawing bars"
        );

        chart.draw_series(bars.iter().map(|bar| {
            Rectangle::new(
                [(bar.x0, bar.y0), (bar.x1, bar.y1)],
                colors[bar.trace].filled(),
            )
        }))?;

        let plot_area = chart.plotting_area().get_pixel_range();
        Self::draw_legend(fig, colors, root, plot_area)
    }

    /// Legend boxes laid out in a row or a column and anchored in paper
    /// coordinates of the plot area.
    fn draw_legend<DB: DrawingBackend>(
        fig: &Figure,
        colors: &[RGBColor],
        root: &DrawingArea<DB, Shift>,
        plot_area: (std::ops::Range<i32>, std::ops::Range<i32>),
    ) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
        if fig.traces.is_empty() {
            return Ok(());
        }

        let legend = &fig.layout.legend;
        let text_style = (FONT, 14)
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Left, VPos::Center));

        let mut items = Vec::with_capacity(fig.traces.len());
        for trace in &fig.traces {
            let (text_w, text_h) = root.estimate_text_size(&trace.name, &text_style)?;
            let item_w = SWATCH + SWATCH_GAP + text_w as i32;
            let item_h = SWATCH.max(text_h as i32);
            items.push((item_w, item_h));
        }

        let horizontal = legend.orientation == LegendOrientation::Horizontal;
        let (box_w, box_h) = if horizontal {
            let w: i32 = items.iter().map(|(w, _)| w).sum::<i32>()
                + LEGEND_ITEM_GAP * (items.len() as i32 - 1);
            let h = items.iter().map(|(_, h)| *h).max().unwrap_or(SWATCH);
            (w, h)
        } else {
            let w = items.iter().map(|(w, _)| *w).max().unwrap_or(0);
            let h: i32 = items.iter().map(|(_, h)| h).sum::<i32>()
                + SWATCH_GAP * (items.len() as i32 - 1);
            (w, h)
        };

        let (x_px, y_px) = plot_area;
        let plot_w = f64::from(x_px.end - x_px.start);
        let plot_h = f64::from(y_px.end - y_px.start);
        let anchor_x = f64::from(x_px.start) + legend.x * plot_w;
        let anchor_y = f64::from(y_px.end) - legend.y * plot_h;
        let (fx, fy) = anchor_fractions(legend.x_anchor, legend.y_anchor);

        let (root_w, root_h) = root.dim_in_pixel();
        let left = (anchor_x - fx * f64::from(box_w)).round() as i32;
        let top = (anchor_y - fy * f64::from(box_h)).round() as i32;
        let left = left.clamp(0, (root_w as i32 - box_w).max(0));
        let top = top.clamp(0, (root_h as i32 - box_h).max(0));

        debug!(left, top, box_w, box_h, horizontal, "Placing legend");

        let (mut x, mut y) = (left, top);
        for ((trace, color), (item_w, item_h)) in
            fig.traces.iter().zip(colors.iter()).zip(items.iter())
        {
            let row_mid = if horizontal { top + box_h / 2 } else { y + item_h / 2 };
            root.draw(&Rectangle::new(
                [(x, row_mid - SWATCH / 2), (x + SWATCH, row_mid + SWATCH / 2)],
                color.filled(),
            ))?;
            root.draw_text(&trace.name, &text_style, (x + SWATCH + SWATCH_GAP, row_mid))?;

            if horizontal {
                x += item_w + LEGEND_ITEM_GAP;
            } else {
                y += item_h + SWATCH_GAP;
            }
        }

        Ok(())
    }

    /// Render to an SVG document held in memory.
    pub fn render_svg(fig: &Figure, size: (u32, u32)) -> Result<String, RenderError> {
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
            Self::draw(fig, &root)?;
            root.present().map_err(drawing_error)?;
        }
        Ok(svg)
    }

    /// Render to an in-memory RGB raster.
    pub fn render_rgb(fig: &Figure, size: (u32, u32)) -> Result<RgbImage, RenderError> {
        let (width, height) = size;
        let mut buffer = vec![0u8; width as usize * height as usize * 3];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, size).into_drawing_area();
            Self::draw(fig, &root)?;
            root.present().map_err(drawing_error)?;
        }
        RgbImage::from_raw(width, height, buffer).ok_or(RenderError::BufferSize { width, height })
    }

    /// Write the PNG and SVG files for `fig` into the configured output directory.
    pub fn export(fig: &Figure, settings: &RenderSettings) -> Result<ExportedFiles, RenderError> {
        fs::create_dir_all(&settings.output_dir)?;
        let size = (settings.width, settings.height);

        let png = settings.output_dir.join(PNG_FILE_NAME);
        Self::render_rgb(fig, size)?.save_with_format(&png, ImageFormat::Png)?;
        info!(path = %png.display(), "Wrote raster chart");

        let svg = settings.output_dir.join(SVG_FILE_NAME);
        fs::write(&svg, Self::render_svg(fig, size)?)?;
        info!(path = %svg.display(), "Wrote vector chart");

        Ok(ExportedFiles { png, svg })
    }

    /// Open a rendered chart with the system viewer. Best effort.
    pub fn show(path: &Path) {
        match open::that(path) {
            Ok(()) => info!(path = %path.display(), "Opened chart viewer"),
            Err(e) => warn!(path = %path.display(), error = %e, "Could not open chart viewer"),
        }
    }
}
