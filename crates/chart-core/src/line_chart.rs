// File: crates/chart-core/src/line_chart.rs
// Summary: Per-category daily spending line chart: layout of axes, series, labels, and drawing.

use crate::aggregate::{aggregate_by_category_and_day, day_domain, DailyBucket};
use crate::axis::{amount_labels, day_labels, AxisLabel, AxisLines};
use crate::error::Result;
use crate::geometry::RectF;
use crate::layout::{max_category_day_sum, series_points, CategorySeries};
use crate::palette::{Color, Palette};
use crate::purchase::PurchaseRecord;
use crate::render::{Renderer, TextStyle};
use crate::scale::{AmountScale, DayScale};
use crate::state::ChartState;
use crate::types::{LABEL_SIZE, LINE_MIN_HEIGHT, LINE_MIN_WIDTH, LINE_OFFSET, POINT_RADIUS, SERIES_STROKE};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineOptions {
    /// Margin around the plot; the Y axis sits at `2 * offset` to leave room for labels.
    pub offset: f32,
    pub min_width: u32,
    pub min_height: u32,
    pub line_stroke: f32,
    pub point_radius: f32,
    pub label_style: TextStyle,
    /// Distance from the X axis down to the day label baseline.
    pub day_label_gap: f32,
    /// Distance from the Y axis left to the amount labels. The default puts the labels
    /// 35px into the view's left margin, leaving the whole `offset` band clear of the axis.
    pub amount_label_gap: f32,
}

impl Default for LineOptions {
    fn default() -> Self {
        Self {
            offset: LINE_OFFSET,
            min_width: LINE_MIN_WIDTH,
            min_height: LINE_MIN_HEIGHT,
            line_stroke: SERIES_STROKE,
            point_radius: POINT_RADIUS,
            label_style: TextStyle { size: LABEL_SIZE, color: Color::BLACK },
            day_label_gap: 30.0,
            amount_label_gap: LINE_OFFSET + 35.0,
        }
    }
}

impl LineOptions {
    /// View size for an available `width` x `height`, clamped to the minimums.
    pub fn size_for(&self, width: u32, height: u32) -> (u32, u32) {
        (width.max(self.min_width), height.max(self.min_height))
    }

    /// Plot area inside a `width` x `height` view.
    pub fn plot_rect(&self, width: f32, height: f32) -> RectF {
        let o = self.offset;
        RectF::from_ltrb(2.0 * o, o, width - o, height - o)
    }
}

/// Full pixel geometry of one line chart frame.
#[derive(Clone, Debug, PartialEq)]
pub struct LineLayout {
    pub plot: RectF,
    pub axes: AxisLines,
    pub series: Vec<CategorySeries>,
    pub day_labels: Vec<AxisLabel>,
    pub amount_labels: Vec<AxisLabel>,
}

#[derive(Clone, Debug)]
pub struct LineChart {
    palette: Palette,
    options: LineOptions,
    purchases: Vec<PurchaseRecord>,
    buckets: Vec<DailyBucket>,
    domain: Option<(u32, u32)>,
}

impl LineChart {
    pub fn new(palette: Palette, options: LineOptions) -> Self {
        Self { palette, options, purchases: Vec::new(), buckets: Vec::new(), domain: None }
    }

    pub fn options(&self) -> &LineOptions { &self.options }
    pub fn purchases(&self) -> &[PurchaseRecord] { &self.purchases }
    pub fn buckets(&self) -> &[DailyBucket] { &self.buckets }
    pub fn day_domain(&self) -> Option<(u32, u32)> { self.domain }

    /// Replace the dataset. On error the previous data stays in place.
    pub fn set_data(&mut self, purchases: Vec<PurchaseRecord>) -> Result<()> {
        let buckets = aggregate_by_category_and_day(&purchases)?;
        self.domain = if buckets.is_empty() { None } else { day_domain(&purchases) };
        self.buckets = buckets;
        self.purchases = purchases;
        tracing::debug!(purchases = self.purchases.len(), categories = self.buckets.len(), domain = ?self.domain, "line data set");
        Ok(())
    }

    /// Compute the geometry for a `width` x `height` view. Axes are always present;
    /// series and labels are empty when there is nothing to scale.
    pub fn layout(&self, width: f32, height: f32) -> LineLayout {
        let plot = self.options.plot_rect(width, height);
        let axes = AxisLines::for_rect(plot);
        let empty = LineLayout { plot, axes, series: Vec::new(), day_labels: Vec::new(), amount_labels: Vec::new() };

        let Some(domain) = self.domain else { return empty };
        if !plot.is_drawable() {
            return empty;
        }
        let max_sum = max_category_day_sum(&self.buckets);
        let Some(y_scale) = AmountScale::new(plot, max_sum) else { return empty };
        let x_scale = DayScale::new(plot, domain);
        let o = &self.options;
        LineLayout {
            plot,
            axes,
            series: series_points(&self.buckets, &x_scale, &y_scale),
            day_labels: day_labels(self.purchases.iter().map(|p| p.day_of_month()), &x_scale, plot.bottom, o.day_label_gap),
            amount_labels: amount_labels(max_sum, &y_scale, plot.left, o.amount_label_gap),
        }
    }

    pub fn draw(&self, renderer: &mut dyn Renderer, width: f32, height: f32) {
        let layout = self.layout(width, height);
        renderer.draw_axis_line(layout.axes.x.0, layout.axes.x.1);
        renderer.draw_axis_line(layout.axes.y.0, layout.axes.y.1);

        let o = &self.options;
        for (i, s) in layout.series.iter().enumerate() {
            let color = self.palette.color_for(i);
            let mut previous = None;
            for p in &s.points {
                if let Some(prev) = previous {
                    renderer.draw_line_segment(prev, p.pos(), color, o.line_stroke);
                }
                renderer.draw_point(p.pos(), o.point_radius, color);
                previous = Some(p.pos());
            }
        }
        for label in layout.day_labels.iter().chain(&layout.amount_labels) {
            renderer.draw_text(&label.text, label.at, &o.label_style);
        }
        tracing::debug!(width, height, series = layout.series.len(), "line chart drawn");
    }

    pub fn export_state(&self) -> ChartState {
        ChartState::new(self.purchases.clone())
    }

    pub fn import_state(&mut self, state: ChartState) -> Result<()> {
        self.set_data(state.purchases)
    }
}

impl Default for LineChart {
    fn default() -> Self { Self::new(Palette::default(), LineOptions::default()) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::PointF;
    use crate::render::{DrawCommand, RecordingRenderer};

    fn rec(id: i64, cat: &str, amount: i64, day: u32) -> PurchaseRecord {
        PurchaseRecord::new(id, format!("p{id}"), amount, cat, day)
    }

    #[test]
    fn plot_rect_and_size() {
        let o = LineOptions::default();
        assert_eq!(o.plot_rect(600.0, 400.0), RectF::from_ltrb(80.0, 40.0, 560.0, 360.0));
        assert_eq!(o.size_for(300, 900), (600, 900));
    }

    #[test]
    fn empty_data_draws_axes_only() {
        let chart = LineChart::default();
        let mut r = RecordingRenderer::new();
        chart.draw(&mut r, 600.0, 400.0);
        assert_eq!(r.commands.len(), 2);
        assert!(r.commands.iter().all(|c| matches!(c, DrawCommand::AxisLine { .. })));
    }

    #[test]
    fn gap_day_is_not_plotted() {
        let mut chart = LineChart::default();
        chart.set_data(vec![rec(1, "food", 50, 1), rec(2, "food", 150, 3)]).unwrap();
        let layout = chart.layout(600.0, 400.0);
        let pts = &layout.series[0].points;
        assert_eq!(pts.len(), 2);
        assert_eq!(pts[0].x, layout.plot.left);
        assert_eq!(pts[1].x, layout.plot.right);

        let mut r = RecordingRenderer::new();
        chart.draw(&mut r, 600.0, 400.0);
        assert_eq!(r.segments().count(), 1);
        assert_eq!(r.points().count(), 2);
        let texts: Vec<&str> = r.texts().collect();
        assert_eq!(texts, ["1", "3", "0", "30", "60", "90", "120", "150"]);
    }

    #[test]
    fn categories_share_domain_and_colors_cycle() {
        let palette = Palette::new("two", vec![Color::from_argb(255, 1, 0, 0), Color::from_argb(255, 2, 0, 0)]);
        let mut chart = LineChart::new(palette.clone(), LineOptions::default());
        chart
            .set_data(vec![rec(1, "a", 10, 5), rec(2, "b", 10, 10), rec(3, "c", 10, 15), rec(4, "a", 20, 15)])
            .unwrap();
        assert_eq!(chart.day_domain(), Some((5, 15)));
        let mut r = RecordingRenderer::new();
        chart.draw(&mut r, 600.0, 400.0);
        let colors: Vec<Color> = r
            .points()
            .map(|c| match c {
                DrawCommand::Point { color, .. } => *color,
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(colors, [palette.color_for(0), palette.color_for(0), palette.color_for(1), palette.color_for(0)]);
        let layout = chart.layout(600.0, 400.0);
        assert_eq!(layout.series[2].points[0].x, layout.series[0].points[1].x);
    }

    #[test]
    fn point_on_plot_origin_still_connects() {
        // first point lands exactly on the plot's left edge and the max-value top edge
        let mut chart = LineChart::new(Palette::default(), LineOptions { offset: 0.0, ..LineOptions::default() });
        chart.set_data(vec![rec(1, "a", 100, 1), rec(2, "a", 50, 2)]).unwrap();
        let mut r = RecordingRenderer::new();
        chart.draw(&mut r, 600.0, 400.0);
        let first = r.segments().next().cloned();
        assert!(matches!(first, Some(DrawCommand::LineSegment { from, .. }) if from == PointF::new(0.0, 0.0)));
    }

    #[test]
    fn single_day_is_centered_without_nan() {
        let mut chart = LineChart::default();
        chart.set_data(vec![rec(1, "a", 10, 9), rec(2, "b", 30, 9)]).unwrap();
        let layout = chart.layout(600.0, 400.0);
        let center = layout.plot.center().x;
        for s in &layout.series {
            assert_eq!(s.points[0].x, center);
            assert!(s.points[0].y.is_finite());
        }
        assert_eq!(layout.day_labels.len(), 1);
    }

    #[test]
    fn zero_totals_produce_no_series() {
        let mut chart = LineChart::default();
        chart.set_data(vec![rec(1, "a", 0, 1)]).unwrap();
        let layout = chart.layout(600.0, 400.0);
        assert!(layout.series.is_empty());
        assert!(layout.amount_labels.is_empty());
    }

    #[test]
    fn amount_labels_sit_in_left_margin_clear_of_axis() {
        let mut chart = LineChart::default();
        chart.set_data(vec![rec(1, "a", 1200, 1), rec(2, "b", 300, 2)]).unwrap();
        let layout = chart.layout(600.0, 400.0);
        let axis_x = layout.axes.y.0.x;
        assert_eq!(axis_x, 80.0);
        assert_eq!(layout.amount_labels.len(), 6);
        for label in &layout.amount_labels {
            assert_eq!(label.at.x, 5.0);
        }
        // a four-digit label at the default size is roughly 0.6 * 30 * 4 = 72px wide
        let widest = layout.amount_labels.iter().map(|l| l.text.len()).max().unwrap() as f32;
        assert!(layout.amount_labels[0].at.x + 0.6 * LABEL_SIZE * widest < axis_x);
    }

    #[test]
    fn layout_series_match_free_function() {
        let mut chart = LineChart::default();
        chart.set_data(vec![rec(1, "a", 10, 3), rec(2, "b", 40, 7), rec(3, "a", 25, 7)]).unwrap();
        let layout = chart.layout(640.0, 480.0);
        let expected = crate::layout::compute_series_points(chart.buckets(), layout.plot, (3, 7));
        assert_eq!(layout.series, expected);
    }

    #[test]
    fn state_round_trip() {
        let mut chart = LineChart::default();
        chart.set_data(vec![rec(1, "a", 10, 2), rec(2, "", 4, 3)]).unwrap();
        let state = ChartState::from_json(&chart.export_state().to_json().unwrap()).unwrap();
        let mut restored = LineChart::default();
        restored.import_state(state).unwrap();
        assert_eq!(restored.purchases(), chart.purchases());
        assert_eq!(restored.layout(640.0, 480.0), chart.layout(640.0, 480.0));
    }
}
