// File: crates/demo/src/main.rs
// Summary: Demo loads a daily K-line CSV (or synthesizes one) and dumps the assembled options tree.

use anyhow::{Context, Result};
use kline_component::{ChartProps, InertResizeSource, RenderEngine, StockChart};
use kline_core::dataset_from_rows;
use kline_core::PriceRecord;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Stand-in for a real drawing engine: each applied options tree is written
/// out as pretty JSON so the payload can be inspected or fed to a renderer.
struct JsonFileEngine {
    out: PathBuf,
}

impl RenderEngine for JsonFileEngine {
    fn apply(&mut self, options: &Value) {
        if let Ok(body) = serde_json::to_string_pretty(options) {
            std::fs::write(&self.out, body).ok();
        }
    }

    fn resize(&mut self) {}
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let csv_arg = args.next();
    let overrides_arg = args.next();

    let (records, stem) = match csv_arg {
        Some(raw) => {
            let path = PathBuf::from(&raw);
            let records = load_daily_csv(&path)
                .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("chart")
                .to_string();
            (records, stem)
        }
        None => {
            println!("No input file given; using a synthetic dataset.");
            (synthetic_dataset(120), "synthetic".to_string())
        }
    };
    println!("Loaded {} records", records.len());

    let overrides = match overrides_arg {
        Some(p) => {
            let body = std::fs::read_to_string(&p)
                .with_context(|| format!("reading overrides '{}'", p))?;
            serde_json::from_str(&body).with_context(|| format!("parsing overrides '{}'", p))?
        }
        None => serde_json::json!({}),
    };

    let mut props = ChartProps::new(records, "Kline Demo Index");
    props.overrides = overrides;

    let out_dir = PathBuf::from("target/out");
    std::fs::create_dir_all(&out_dir)?;
    let out = out_dir.join(format!("{stem}_options.json"));

    let last = props.dataset.len().saturating_sub(1);
    let mut chart = StockChart::new(props);
    chart.attach(Box::new(JsonFileEngine { out: out.clone() }), &InertResizeSource)?;
    println!("Wrote {}", out.display());

    if let Some(block) = chart.tooltip(last) {
        println!("--- tooltip at index {last} ---");
        println!("{block}");
    }

    chart.dispose();
    Ok(())
}

/// Load a daily K-line CSV with the positional column layout
/// date, open, close, change amount, change percent, low, high, volume.
fn load_daily_csv(path: &Path) -> Result<Vec<PriceRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let mut rows = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        rows.push(
            rec.iter()
                .map(|field| Value::String(field.to_string()))
                .collect::<Vec<_>>(),
        );
    }
    Ok(dataset_from_rows(&rows)?)
}

/// Deterministic sine-walk dataset for running without an input file.
fn synthetic_dataset(n: usize) -> Vec<PriceRecord> {
    let mut out = Vec::with_capacity(n);
    let mut prev_close = 100.0f64;
    for i in 0..n {
        let close = 100.0 + (i as f64 / 20.0).sin() * 10.0;
        let open = prev_close;
        let high = open.max(close) + 1.5;
        let low = open.min(close) - 1.5;
        let change = close - open;
        let volume = 120_000_000.0 + 35_000_000.0 * (i as f64 / 7.0).cos();
        out.push(PriceRecord {
            date: format!("2024-{:02}-{:02}", i / 28 + 1, i % 28 + 1),
            open,
            close,
            low,
            high,
            change_amount: change,
            change_percent: format!("{:+.2}%", change / open * 100.0),
            volume,
        });
        prev_close = close;
    }
    out
}
