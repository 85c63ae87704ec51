// File: crates/chart-render-skia/src/lib.rs
// Summary: Skia CPU raster backend for the chart `Renderer` contract, with PNG output helpers.

use anyhow::{Context, Result};
use purchase_chart_core::render::{Renderer, TextStyle};
use purchase_chart_core::types::AXIS_STROKE;
use purchase_chart_core::{Color, LineChart, PieChart, PointF, RectF};
use skia_safe as skia;

pub mod text;

pub use text::TextShaper;

pub struct RenderOptions {
    pub background: skia::Color,
    pub axis_color: skia::Color,
    pub axis_stroke: f32,
    /// Text output depends on installed fonts; snapshot tests turn it off.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            background: skia::Color::WHITE,
            axis_color: skia::Color::BLACK,
            axis_stroke: AXIS_STROKE,
            draw_labels: true,
        }
    }
}

#[inline]
fn to_skia(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

#[inline]
fn to_rect(r: RectF) -> skia::Rect {
    skia::Rect::from_ltrb(r.left, r.top, r.right, r.bottom)
}

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

/// `Renderer` that draws onto a borrowed Skia canvas.
pub struct SkiaRenderer<'a> {
    canvas: &'a skia::Canvas,
    opts: &'a RenderOptions,
    text: Option<TextShaper>,
}

impl<'a> SkiaRenderer<'a> {
    pub fn new(canvas: &'a skia::Canvas, opts: &'a RenderOptions) -> Self {
        let text = opts.draw_labels.then(TextShaper::new);
        Self { canvas, opts, text }
    }
}

impl Renderer for SkiaRenderer<'_> {
    fn draw_arc(&mut self, rect: RectF, start_angle: f32, sweep_angle: f32, color: Color, stroke_width: f32) {
        let paint = stroke_paint(to_skia(color), stroke_width);
        self.canvas.draw_arc(to_rect(rect), start_angle, sweep_angle, false, &paint);
    }

    fn draw_line_segment(&mut self, from: PointF, to: PointF, color: Color, stroke_width: f32) {
        let paint = stroke_paint(to_skia(color), stroke_width);
        self.canvas.draw_line((from.x, from.y), (to.x, to.y), &paint);
    }

    fn draw_point(&mut self, at: PointF, radius: f32, color: Color) {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);
        paint.set_color(to_skia(color));
        self.canvas.draw_circle((at.x, at.y), radius, &paint);
    }

    fn draw_text(&mut self, text: &str, at: PointF, style: &TextStyle) {
        if let Some(shaper) = &self.text {
            shaper.draw_left(self.canvas, text, at.x, at.y, style.size, to_skia(style.color));
        }
    }

    fn draw_axis_line(&mut self, from: PointF, to: PointF) {
        let paint = stroke_paint(self.opts.axis_color, self.opts.axis_stroke);
        self.canvas.draw_line((from.x, from.y), (to.x, to.y), &paint);
    }
}

/// Render onto a fresh `width` x `height` raster surface and encode it as PNG.
pub fn render_png_bytes(
    width: i32,
    height: i32,
    opts: &RenderOptions,
    draw: impl FnOnce(&mut dyn Renderer),
) -> Result<Vec<u8>> {
    let mut surface = skia::surfaces::raster_n32_premul((width, height))
        .ok_or_else(|| anyhow::anyhow!("failed to create {width}x{height} raster surface"))?;
    {
        let canvas = surface.canvas();
        canvas.clear(opts.background);
        let mut renderer = SkiaRenderer::new(canvas, opts);
        let r: &mut dyn Renderer = &mut renderer;
        draw(r);
    }
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

fn write_png(bytes: &[u8], path: &std::path::Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "wrote png");
    Ok(())
}

/// Draw the pie into a `size` x `size` PNG. Retains the chart's angle table for hit-testing.
pub fn render_pie_png_bytes(chart: &mut PieChart, size: i32, opts: &RenderOptions) -> Result<Vec<u8>> {
    render_png_bytes(size, size, opts, |r| chart.draw(r, size as f32))
}

pub fn render_pie_to_png(
    chart: &mut PieChart,
    size: i32,
    opts: &RenderOptions,
    output_png_path: impl AsRef<std::path::Path>,
) -> Result<()> {
    let bytes = render_pie_png_bytes(chart, size, opts)?;
    write_png(&bytes, output_png_path.as_ref())
}

pub fn render_line_png_bytes(chart: &LineChart, width: i32, height: i32, opts: &RenderOptions) -> Result<Vec<u8>> {
    render_png_bytes(width, height, opts, |r| chart.draw(r, width as f32, height as f32))
}

pub fn render_line_to_png(
    chart: &LineChart,
    width: i32,
    height: i32,
    opts: &RenderOptions,
    output_png_path: impl AsRef<std::path::Path>,
) -> Result<()> {
    let bytes = render_line_png_bytes(chart, width, height, opts)?;
    write_png(&bytes, output_png_path.as_ref())
}
