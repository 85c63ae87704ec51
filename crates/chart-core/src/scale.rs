// File: crates/chart-core/src/scale.rs
// Summary: Day (X) and amount (Y) scale transforms for the line chart.

use crate::geometry::RectF;

/// Horizontal day scale. Every category shares the same `[min_day, max_day]` domain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DayScale {
    pub left_px: f32,
    pub width_px: f32,
    pub min_day: u32,
    pub max_day: u32,
}

impl DayScale {
    pub fn new(rect: RectF, (min_day, max_day): (u32, u32)) -> Self {
        Self { left_px: rect.left, width_px: rect.width(), min_day, max_day: max_day.max(min_day) }
    }

    /// Pixels per day; `None` when the domain is a single day.
    #[inline]
    pub fn step(&self) -> Option<f32> {
        let range = self.max_day - self.min_day;
        if range == 0 { None } else { Some(self.width_px / range as f32) }
    }

    /// Map a day to an x pixel. A single-day domain sits at the horizontal center.
    #[inline]
    pub fn to_px(&self, day: u32) -> f32 {
        match self.step() {
            Some(step) => self.left_px + (day as f32 - self.min_day as f32) * step,
            None => self.left_px + self.width_px * 0.5,
        }
    }
}

/// Vertical amount scale: 0 sits on the bottom edge, `max_amount` on the top edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmountScale {
    pub bottom_px: f32,
    pub px_per_unit: f32,
}

impl AmountScale {
    /// `None` when `max_amount` is not positive (no scale is computable).
    pub fn new(rect: RectF, max_amount: i64) -> Option<Self> {
        if max_amount <= 0 {
            return None;
        }
        Some(Self { bottom_px: rect.bottom, px_per_unit: rect.height() / max_amount as f32 })
    }

    #[inline]
    pub fn to_px(&self, amount: i64) -> f32 {
        self.bottom_px - amount as f32 * self.px_per_unit
    }
}
