// File: crates/chart-core/src/pie_chart.rs
// Summary: Ring-shaped pie chart: data, palette, retained angle table, and click dispatch.
// Notes:
// - `set_data` recomputes buckets and slice angles immediately.
// - `draw` publishes the angle table; pointer handling only reads what was last drawn.
// - Single-threaded: draw and pointer handling both go through `&mut self` on the UI loop.

use crate::aggregate::{aggregate_by_category, CategoryBucket};
use crate::error::Result;
use crate::geometry::PointF;
use crate::hit::resolve_category_at;
use crate::layout::{compute_pie_slices, PieRing, SliceAngleEntry};
use crate::palette::Palette;
use crate::purchase::PurchaseRecord;
use crate::render::Renderer;
use crate::state::ChartState;
use crate::types::{DEFAULT_RING_WIDTH, PIE_MIN_SIZE};

/// Callback fired with the category under a pointer press.
pub type CategoryListener = Box<dyn FnMut(&str)>;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PieOptions {
    /// Ring (stroke) width in pixels.
    pub ring_width: f32,
    /// Minimum side of the square view in pixels.
    pub min_size: u32,
}

impl Default for PieOptions {
    fn default() -> Self {
        Self { ring_width: DEFAULT_RING_WIDTH, min_size: PIE_MIN_SIZE }
    }
}

impl PieOptions {
    /// Side of the square view for an available `width` x `height`.
    pub fn side_for(&self, width: u32, height: u32) -> u32 {
        width.max(self.min_size).min(height.max(self.min_size))
    }
}

/// Geometry of the most recent draw.
#[derive(Clone, Debug)]
struct DrawnPie {
    ring: PieRing,
    table: Vec<SliceAngleEntry>,
}

pub struct PieChart {
    palette: Palette,
    options: PieOptions,
    purchases: Vec<PurchaseRecord>,
    buckets: Vec<CategoryBucket>,
    slices: Vec<SliceAngleEntry>,
    drawn: Option<DrawnPie>,
    listener: Option<CategoryListener>,
}

impl PieChart {
    pub fn new(palette: Palette, options: PieOptions) -> Self {
        Self {
            palette,
            options,
            purchases: Vec::new(),
            buckets: Vec::new(),
            slices: Vec::new(),
            drawn: None,
            listener: None,
        }
    }

    pub fn options(&self) -> &PieOptions { &self.options }
    pub fn palette(&self) -> &Palette { &self.palette }
    pub fn purchases(&self) -> &[PurchaseRecord] { &self.purchases }
    pub fn buckets(&self) -> &[CategoryBucket] { &self.buckets }

    /// Slices computed from the current data (not necessarily drawn yet).
    pub fn slices(&self) -> &[SliceAngleEntry] { &self.slices }

    /// Angle table of the most recent draw; empty before the first draw.
    pub fn angle_table(&self) -> &[SliceAngleEntry] {
        self.drawn.as_ref().map(|d| d.table.as_slice()).unwrap_or(&[])
    }

    /// Replace the dataset. On error the previous data stays in place.
    pub fn set_data(&mut self, purchases: Vec<PurchaseRecord>) -> Result<()> {
        let buckets = aggregate_by_category(&purchases)?;
        let total = buckets.iter().fold(0i64, |acc, b| acc.saturating_add(b.total_amount));
        self.slices = compute_pie_slices(&buckets, total);
        self.buckets = buckets;
        self.purchases = purchases;
        tracing::debug!(purchases = self.purchases.len(), slices = self.slices.len(), total, "pie data set");
        Ok(())
    }

    pub fn set_click_listener(&mut self, listener: impl FnMut(&str) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Draw the ring into a square of side `size` and retain its angle table.
    pub fn draw(&mut self, renderer: &mut dyn Renderer, size: f32) {
        let ring = PieRing::for_size(size, self.options.ring_width);
        for (i, s) in self.slices.iter().enumerate() {
            let sweep = s.sweep_deg();
            if sweep <= 0.0 {
                continue;
            }
            renderer.draw_arc(
                ring.arc_rect,
                s.start_angle_deg as f32,
                sweep as f32,
                self.palette.color_for(i),
                ring.ring_width,
            );
        }
        tracing::debug!(size, slices = self.slices.len(), "pie drawn");
        self.drawn = Some(DrawnPie { ring, table: self.slices.clone() });
    }

    /// Category drawn under `pointer`, without firing the listener.
    pub fn category_at(&self, pointer: PointF) -> Option<&str> {
        let drawn = self.drawn.as_ref()?;
        let ring = &drawn.ring;
        resolve_category_at(pointer, ring.center, ring.outer_radius, ring.ring_width, &drawn.table)
    }

    /// Handle a pointer press: resolve the category and notify the listener on a match.
    pub fn on_pointer_down(&mut self, pointer: PointF) -> Option<String> {
        let hit = self.category_at(pointer)?.to_string();
        tracing::debug!(category = %hit, x = pointer.x, y = pointer.y, "pie category selected");
        if let Some(listener) = self.listener.as_mut() {
            listener(&hit);
        }
        Some(hit)
    }

    pub fn export_state(&self) -> ChartState {
        ChartState::new(self.purchases.clone())
    }

    /// Restore data from `state`. The angle table is cleared until the next draw.
    pub fn import_state(&mut self, state: ChartState) -> Result<()> {
        self.set_data(state.purchases)?;
        self.drawn = None;
        Ok(())
    }
}

impl Default for PieChart {
    fn default() -> Self { Self::new(Palette::default(), PieOptions::default()) }
}
