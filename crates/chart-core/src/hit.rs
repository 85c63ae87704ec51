// File: crates/chart-core/src/hit.rs
// Summary: Resolve a pointer coordinate to the pie category drawn under it.

use crate::geometry::PointF;
use crate::layout::SliceAngleEntry;

/// Angle of `pointer` around `center` in degrees within `[0, 360)`.
///
/// 0 is at 3 o'clock and angles grow clockwise on screen (y grows downward), matching
/// the arc convention used by `layout::compute_pie_slices` and the renderers.
pub fn pointer_angle_deg(pointer: PointF, center: PointF) -> f64 {
    let dx = (pointer.x - center.x) as f64;
    let dy = (pointer.y - center.y) as f64;
    let deg = dy.atan2(dx).to_degrees();
    // atan2 is in (-180, 180]; fold negatives up and clamp the 360 that -0.0 rounding can produce
    let wrapped = if deg < 0.0 { deg + 360.0 } else { deg };
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// True when `pointer` lies on the ring band `[outer_radius - ring_width, outer_radius]`.
pub fn in_ring(pointer: PointF, center: PointF, outer_radius: f32, ring_width: f32) -> bool {
    let d = pointer.distance_to(center);
    let outer = outer_radius as f64;
    let inner = (outer_radius - ring_width) as f64;
    d >= inner && d <= outer
}

/// Category whose slice contains `pointer`, or `None`.
///
/// Bounds are inclusive on both ends; when a pointer sits exactly on a shared boundary the
/// first-listed slice wins. Zero-sweep slices are never matched.
pub fn resolve_category_at<'a>(
    pointer: PointF,
    center: PointF,
    outer_radius: f32,
    ring_width: f32,
    table: &'a [SliceAngleEntry],
) -> Option<&'a str> {
    if table.is_empty() || !in_ring(pointer, center, outer_radius, ring_width) {
        return None;
    }
    let angle = pointer_angle_deg(pointer, center);
    table
        .iter()
        .filter(|e| e.end_angle_deg > e.start_angle_deg)
        .find(|e| angle >= e.start_angle_deg && angle <= e.end_angle_deg)
        .map(|e| e.category.as_str())
}
