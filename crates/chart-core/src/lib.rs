// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; purchase aggregation, chart geometry, hit-testing, and chart components.

pub mod aggregate;
pub mod axis;
pub mod error;
pub mod geometry;
pub mod hit;
pub mod layout;
pub mod line_chart;
pub mod palette;
pub mod pie_chart;
pub mod purchase;
pub mod render;
pub mod scale;
pub mod state;
pub mod types;

pub use aggregate::{aggregate_by_category, aggregate_by_category_and_day, day_domain, CategoryBucket, DailyBucket};
pub use error::ChartError;
pub use geometry::{PointF, RectF};
pub use hit::resolve_category_at;
pub use layout::{compute_pie_slices, compute_series_points, CategorySeries, PieRing, SeriesPoint, SliceAngleEntry};
pub use line_chart::{LineChart, LineLayout, LineOptions};
pub use palette::{Color, Palette};
pub use pie_chart::{PieChart, PieOptions};
pub use purchase::{PurchaseRecord, UNKNOWN_CATEGORY};
pub use render::{DrawCommand, RecordingRenderer, Renderer, TextStyle};
pub use state::ChartState;
