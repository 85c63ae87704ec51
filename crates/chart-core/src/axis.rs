// File: crates/chart-core/src/axis.rs
// Summary: Axis lines and tick labels for the line chart.

use crate::geometry::{PointF, RectF};
use crate::scale::{AmountScale, DayScale};

/// Number of amount intervals on the Y axis (labels = count + 1, including zero).
pub const Y_LABEL_COUNT: i64 = 5;

/// A text label anchored at its baseline-left point.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisLabel {
    pub text: String,
    pub at: PointF,
}

/// Both axis lines of a plot rect: X along the bottom edge, Y along the left edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisLines {
    pub x: (PointF, PointF),
    pub y: (PointF, PointF),
}

impl AxisLines {
    pub fn for_rect(rect: RectF) -> Self {
        Self {
            x: (PointF::new(rect.left, rect.bottom), PointF::new(rect.right, rect.bottom)),
            y: (PointF::new(rect.left, rect.top), PointF::new(rect.left, rect.bottom)),
        }
    }
}

/// One label per distinct day, placed `below_px` under the X axis.
pub fn day_labels(days: impl IntoIterator<Item = u32>, scale: &DayScale, axis_y: f32, below_px: f32) -> Vec<AxisLabel> {
    let mut days: Vec<u32> = days.into_iter().collect();
    days.sort_unstable();
    days.dedup();
    days.into_iter()
        .map(|d| AxisLabel { text: d.to_string(), at: PointF::new(scale.to_px(d), axis_y + below_px) })
        .collect()
}

/// Amount labels `0, step, 2*step, ...` with `step = max_amount / Y_LABEL_COUNT` (integer
/// division), placed `left_px` to the left of the Y axis.
pub fn amount_labels(max_amount: i64, scale: &AmountScale, axis_x: f32, left_px: f32) -> Vec<AxisLabel> {
    let step = max_amount / Y_LABEL_COUNT;
    (0..=Y_LABEL_COUNT)
        .map(|i| {
            let v = i * step;
            AxisLabel { text: v.to_string(), at: PointF::new(axis_x - left_px, scale.to_px(v)) }
        })
        .collect()
}
