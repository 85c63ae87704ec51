// File: crates/chart-core/src/layout.rs
// Summary: Map aggregated sums onto pixel geometry: pie slice angles and line-series points.
// Notes:
// - Angles are degrees, 0 at 3 o'clock, increasing clockwise in screen space (y down).
//   `hit::pointer_angle_deg` uses the same convention.

use crate::aggregate::{CategoryBucket, DailyBucket};
use crate::geometry::{PointF, RectF};
use crate::scale::{AmountScale, DayScale};

/// Angular extent of one category on the pie.
#[derive(Clone, Debug, PartialEq)]
pub struct SliceAngleEntry {
    pub category: String,
    pub start_angle_deg: f64,
    pub end_angle_deg: f64,
}

impl SliceAngleEntry {
    pub fn sweep_deg(&self) -> f64 { self.end_angle_deg - self.start_angle_deg }
    pub fn mid_angle_deg(&self) -> f64 { (self.start_angle_deg + self.end_angle_deg) * 0.5 }
}

/// Compute one slice per bucket, in bucket order.
///
/// Each boundary is `prefix_sum / total * 360`, so there is no accumulated rounding drift
/// and the last slice ends at exactly 360. A non-positive `total_sum` yields no slices.
pub fn compute_pie_slices(buckets: &[CategoryBucket], total_sum: i64) -> Vec<SliceAngleEntry> {
    if total_sum <= 0 {
        return Vec::new();
    }
    let total = total_sum as f64;
    let mut prefix = 0i64;
    let mut out = Vec::with_capacity(buckets.len());
    for (i, b) in buckets.iter().enumerate() {
        let start = prefix as f64 / total * 360.0;
        prefix = prefix.saturating_add(b.total_amount);
        let end = if i + 1 == buckets.len() { 360.0 } else { (prefix as f64 / total * 360.0).min(360.0) };
        out.push(SliceAngleEntry { category: b.category.clone(), start_angle_deg: start, end_angle_deg: end });
    }
    out
}

/// Ring geometry of the pie for a square view of side `size`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PieRing {
    /// Rect the arcs are stroked on (view inset by half the ring width).
    pub arc_rect: RectF,
    pub center: PointF,
    pub outer_radius: f32,
    pub ring_width: f32,
}

impl PieRing {
    pub fn for_size(size: f32, ring_width: f32) -> Self {
        let half = ring_width * 0.5;
        Self {
            arc_rect: RectF::from_ltrb(half, half, size - half, size - half),
            center: PointF::new(size * 0.5, size * 0.5),
            outer_radius: size * 0.5,
            ring_width,
        }
    }

    pub fn inner_radius(&self) -> f32 { (self.outer_radius - self.ring_width).max(0.0) }
}

/// A plotted day total.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeriesPoint {
    pub day: u32,
    pub x: f32,
    pub y: f32,
}

impl SeriesPoint {
    pub fn pos(&self) -> PointF { PointF::new(self.x, self.y) }
}

/// Points of one category, ascending by day. Absent days have no point.
#[derive(Clone, Debug, PartialEq)]
pub struct CategorySeries {
    pub category: String,
    pub points: Vec<SeriesPoint>,
}

impl CategorySeries {
    /// Segments between consecutive present points.
    pub fn segments(&self) -> impl Iterator<Item = (PointF, PointF)> + '_ {
        self.points.windows(2).map(|w| (w[0].pos(), w[1].pos()))
    }
}

/// Largest single-day total over all categories and days.
pub fn max_category_day_sum(buckets: &[DailyBucket]) -> i64 {
    buckets.iter().map(DailyBucket::max_day_total).max().unwrap_or(0)
}

/// Compute per-category point lists inside `draw_rect` over the shared `day_domain`.
///
/// Returns an empty Vec when no amount scale is computable (max day total is 0) or the
/// rect is not drawable.
pub fn compute_series_points(
    buckets: &[DailyBucket],
    draw_rect: RectF,
    day_domain: (u32, u32),
) -> Vec<CategorySeries> {
    if !draw_rect.is_drawable() {
        return Vec::new();
    }
    let Some(y_scale) = AmountScale::new(draw_rect, max_category_day_sum(buckets)) else {
        return Vec::new();
    };
    series_points(buckets, &DayScale::new(draw_rect, day_domain), &y_scale)
}

/// Map every bucket through already-built scales. Callers that also need the scales for
/// axis labels use this so both share one set of guards.
pub fn series_points(buckets: &[DailyBucket], x_scale: &DayScale, y_scale: &AmountScale) -> Vec<CategorySeries> {
    buckets
        .iter()
        .map(|b| CategorySeries {
            category: b.category.clone(),
            points: b
                .daily_totals
                .iter()
                .map(|(&day, &sum)| SeriesPoint { day, x: x_scale.to_px(day), y: y_scale.to_px(sum) })
                .collect(),
        })
        .collect()
}
