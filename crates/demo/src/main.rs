// File: crates/demo/src/main.rs
// Summary: Host shell demo. Loads a purchase payload (JSON or CSV), renders the pie and line
// charts to PNGs, simulates taps on the pie, and round-trips the chart state through JSON.

use anyhow::{Context, Result};
use purchase_chart_core::{palette, ChartState, LineChart, LineOptions, PieChart, PieOptions, PointF, PurchaseRecord};
use purchase_chart_render_skia::{render_line_to_png, render_pie_to_png, RenderOptions};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// One payload row as produced by the data source; `time` is unix seconds.
#[derive(Debug, Deserialize)]
struct PayloadRow {
    #[serde(default)]
    id: i64,
    #[serde(default)]
    name: String,
    #[serde(default)]
    amount: i64,
    #[serde(default)]
    category: String,
    #[serde(default)]
    time: i64,
}

struct Args {
    payload: PathBuf,
    out_dir: PathBuf,
    palette: String,
    size: u32,
}

fn parse_args() -> Result<Args> {
    let mut args = Args {
        payload: Path::new(env!("CARGO_MANIFEST_DIR")).join("payload.json"),
        out_dir: PathBuf::from("target/out"),
        palette: "rainbow".to_string(),
        size: 600,
    };
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--out" => args.out_dir = it.next().context("--out needs a directory")?.into(),
            "--palette" => args.palette = it.next().context("--palette needs a name")?,
            "--size" => {
                let v = it.next().context("--size needs a pixel value")?;
                args.size = v.parse().with_context(|| format!("invalid --size '{v}'"))?;
            }
            other if other.starts_with("--") => anyhow::bail!("unknown flag {other}"),
            path => args.payload = PathBuf::from(path),
        }
    }
    Ok(args)
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = parse_args()?;
    if !args.payload.exists() {
        anyhow::bail!("file not found: {}", args.payload.display());
    }
    tracing::info!(path = %args.payload.display(), "using payload");

    let purchases = load_payload(&args.payload)
        .with_context(|| format!("failed to load payload '{}'", args.payload.display()))?;
    tracing::info!(count = purchases.len(), "loaded purchases");

    let palette = palette::find(&args.palette);
    std::fs::create_dir_all(&args.out_dir).with_context(|| format!("creating {}", args.out_dir.display()))?;
    let opts = RenderOptions::default();

    // Pie chart
    let pie_options = PieOptions::default();
    let side = pixels(pie_options.side_for(args.size, args.size))?;
    let mut pie = PieChart::new(palette.clone(), pie_options);
    pie.set_click_listener(|category| tracing::info!(category, "clicked on category"));
    pie.set_data(purchases.clone())?;
    render_pie_to_png(&mut pie, side, &opts, args.out_dir.join("pie.png"))?;
    simulate_taps(&mut pie, side as f32);

    // Line chart
    let line_options = LineOptions::default();
    let (w, h) = line_options.size_for(line_width_for(args.size)?, args.size);
    let (w, h) = (pixels(w)?, pixels(h)?);
    let mut line = LineChart::new(palette, line_options);
    line.set_data(purchases)?;
    render_line_to_png(&line, w, h, &opts, args.out_dir.join("line.png"))?;

    // Suspend/resume: persist state, restore into fresh charts, redraw
    let state_path = args.out_dir.join("state.json");
    let json = pie.export_state().to_json()?;
    std::fs::write(&state_path, &json).with_context(|| format!("writing {}", state_path.display()))?;
    let restored = ChartState::from_json(&std::fs::read_to_string(&state_path)?)?;

    let mut pie2 = PieChart::new(pie.palette().clone(), *pie.options());
    pie2.import_state(restored.clone())?;
    render_pie_to_png(&mut pie2, side, &opts, args.out_dir.join("pie_restored.png"))?;
    let mut line2 = LineChart::new(palette::find(&args.palette), *line.options());
    line2.import_state(restored)?;
    render_line_to_png(&line2, w, h, &opts, args.out_dir.join("line_restored.png"))?;

    if pie2.angle_table() != pie.angle_table() {
        anyhow::bail!("restored pie geometry differs from the original");
    }
    tracing::info!(path = %state_path.display(), "state round-trip ok");
    Ok(())
}

/// Line chart width for a `--size` of `size`: a 16:10 landscape view.
fn line_width_for(size: u32) -> Result<u32> {
    size.checked_mul(16).map(|v| v / 10).with_context(|| format!("--size {size} is too large"))
}

/// Surface dimension as the raster backend expects it.
fn pixels(v: u32) -> Result<i32> {
    i32::try_from(v).with_context(|| format!("{v}px exceeds the surface size limit"))
}

/// Tap the middle of every drawn slice, then the center hole.
fn simulate_taps(pie: &mut PieChart, side: f32) {
    let center = side * 0.5;
    let radius = (center - pie.options().ring_width * 0.5) as f64;
    let angles: Vec<f64> = pie.angle_table().iter().map(|s| s.mid_angle_deg()).collect();
    for a in angles {
        let r = a.to_radians();
        let p = PointF::new(center + (radius * r.cos()) as f32, center + (radius * r.sin()) as f32);
        if pie.on_pointer_down(p).is_none() {
            tracing::warn!(angle = a, "tap at slice midpoint did not resolve");
        }
    }
    if let Some(c) = pie.on_pointer_down(PointF::new(center, center)) {
        tracing::warn!(category = %c, "tap in the center hole resolved unexpectedly");
    }
}

fn load_payload(path: &Path) -> Result<Vec<PurchaseRecord>> {
    let ext = path.extension().map(|e| e.to_string_lossy().to_lowercase()).unwrap_or_default();
    let rows: Vec<PayloadRow> = match ext.as_str() {
        "csv" => load_csv(path)?,
        _ => {
            let text = std::fs::read_to_string(path).with_context(|| format!("opening {}", path.display()))?;
            serde_json::from_str(&text).context("parsing JSON payload")?
        }
    };
    let mut out = Vec::with_capacity(rows.len());
    for row in rows {
        match PurchaseRecord::from_unix_time(row.id, row.name, row.amount, row.category, row.time, &chrono::Local) {
            Some(p) => out.push(p),
            None => tracing::warn!(id = row.id, time = row.time, "skipping purchase with out-of-range time"),
        }
    }
    Ok(out)
}

/// CSV with headers `id,name,amount,category,time`.
fn load_csv(path: &Path) -> Result<Vec<PayloadRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let mut rows = Vec::new();
    for rec in rdr.deserialize() {
        rows.push(rec?);
    }
    Ok(rows)
}
