// File: crates/chart-core/tests/properties.rs
// Purpose: End-to-end properties over the public API: aggregation -> layout -> hit-testing.

use purchase_chart_core::{
    aggregate_by_category, compute_pie_slices, resolve_category_at, PieChart, PieRing, PointF,
    PurchaseRecord, RecordingRenderer,
};

/// Small deterministic generator so the property checks cover many shapes of input.
fn lcg(seed: &mut u64) -> u64 {
    *seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    *seed >> 33
}

fn random_records(seed: &mut u64, n: usize) -> Vec<PurchaseRecord> {
    let cats = ["food", "transport", "fun", "health", "rent", "gifts", "travel"];
    (0..n)
        .map(|i| {
            let cat = cats[(lcg(seed) % cats.len() as u64) as usize];
            let amount = (lcg(seed) % 5_000) as i64 + 1;
            let day = (lcg(seed) % 31) as u32 + 1;
            PurchaseRecord::new(i as i64, format!("p{i}"), amount, cat, day)
        })
        .collect()
}

fn point_at(ring: &PieRing, angle_deg: f64, radius: f64) -> PointF {
    let a = angle_deg.to_radians();
    PointF::new(ring.center.x + (radius * a.cos()) as f32, ring.center.y + (radius * a.sin()) as f32)
}

#[test]
fn sweep_sum_is_full_circle_for_random_inputs() {
    let mut seed = 7u64;
    for n in 1..60 {
        let records = random_records(&mut seed, n);
        let buckets = aggregate_by_category(&records).expect("aggregate");
        let total = buckets.iter().map(|b| b.total_amount).sum();
        let slices = compute_pie_slices(&buckets, total);
        let sum: f64 = slices.iter().map(|s| s.sweep_deg()).sum();
        assert!((sum - 360.0).abs() < 1e-3, "n={n} sum={sum}");
    }
}

#[test]
fn midpoints_resolve_to_their_slice() {
    let mut seed = 42u64;
    for n in [3usize, 10, 40, 200] {
        let mut chart = PieChart::default();
        chart.set_data(random_records(&mut seed, n)).expect("set data");
        chart.draw(&mut RecordingRenderer::new(), 400.0);
        let ring = PieRing::for_size(400.0, chart.options().ring_width);
        let mid_radius = (ring.outer_radius - ring.ring_width * 0.5) as f64;
        for s in chart.angle_table() {
            let p = point_at(&ring, s.mid_angle_deg(), mid_radius);
            assert_eq!(chart.category_at(p), Some(s.category.as_str()), "slice {s:?}");
        }
    }
}

#[test]
fn ring_edges_match_and_outside_does_not() {
    let records = vec![PurchaseRecord::new(1, "only", 10, "solo", 1)];
    let buckets = aggregate_by_category(&records).unwrap();
    let slices = compute_pie_slices(&buckets, 10);
    let c = PointF::new(0.0, 0.0);
    assert_eq!(resolve_category_at(PointF::new(100.0, 0.0), c, 100.0, 20.0, &slices), Some("solo"));
    assert_eq!(resolve_category_at(PointF::new(80.0, 0.0), c, 100.0, 20.0, &slices), Some("solo"));
    assert_eq!(resolve_category_at(PointF::new(100.01, 0.0), c, 100.0, 20.0, &slices), None);
    assert_eq!(resolve_category_at(PointF::new(79.99, 0.0), c, 100.0, 20.0, &slices), None);
    assert_eq!(resolve_category_at(PointF::new(-100.0, 0.0), c, 100.0, 20.0, &slices), Some("solo"));
    assert_eq!(resolve_category_at(PointF::new(0.0, -90.0), c, 100.0, 20.0, &slices), Some("solo"));
}

#[test]
fn empty_dataset_never_matches_anywhere() {
    let mut chart = PieChart::default();
    chart.set_data(Vec::new()).unwrap();
    chart.draw(&mut RecordingRenderer::new(), 300.0);
    for y in (0..300).step_by(15) {
        for x in (0..300).step_by(15) {
            assert_eq!(chart.category_at(PointF::new(x as f32, y as f32)), None);
        }
    }
}
