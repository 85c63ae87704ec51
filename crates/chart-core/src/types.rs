// File: crates/chart-core/src/types.rs
// Summary: Shared constants (default view sizes, ring width, offsets, stroke widths).

/// Default pie ring (stroke) width in pixels.
pub const DEFAULT_RING_WIDTH: f32 = 80.0;
/// Minimum side of the square pie view in pixels.
pub const PIE_MIN_SIZE: u32 = 300;

/// Minimum line chart view width in pixels.
pub const LINE_MIN_WIDTH: u32 = 600;
/// Minimum line chart view height in pixels.
pub const LINE_MIN_HEIGHT: u32 = 400;
/// Margin around the line chart plot area in pixels.
pub const LINE_OFFSET: f32 = 40.0;

pub const AXIS_STROKE: f32 = 5.0;
pub const SERIES_STROKE: f32 = 3.0;
pub const POINT_RADIUS: f32 = 5.0;
pub const LABEL_SIZE: f32 = 30.0;
