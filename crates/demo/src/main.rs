// File: crates/demo/src/main.rs
// Summary: Demo loads a radar table CSV (or built-in sample data) and renders
// a full-table chart plus a single-row highlight chart to PNGs.

use anyhow::{Context, Result};
use radar_core::{Figure, LegendAnchor, RadarChart, RadarChartOptions, RadarRow, Theme};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    // Accept a CSV path from the CLI or fall back to the built-in sample.
    let (stem, variables, rows) = match std::env::args().nth(1) {
        Some(raw) => {
            let path = PathBuf::from(&raw);
            if !path.exists() {
                anyhow::bail!("file not found: {}", path.display());
            }
            println!("Using input file: {}", path.display());
            let (variables, rows) = load_radar_csv(&path)
                .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("radar")
                .to_string();
            (stem, variables, rows)
        }
        None => {
            println!("No input given; using built-in sample data.");
            let (variables, rows) = sample_table();
            ("sample".to_string(), variables, rows)
        }
    };

    if rows.is_empty() {
        anyhow::bail!("no rows loaded — check headers/delimiter.");
    }
    println!("Loaded {} rows across {} variables", rows.len(), variables.len());

    let ranges = derive_ranges(&variables, &rows);
    for (name, (lo, hi)) in variables.iter().zip(&ranges) {
        println!("  {name}: [{lo:.2}, {hi:.2}]");
    }

    let var_refs: Vec<&str> = variables.iter().map(String::as_str).collect();

    // 1) All rows, palette colors, legend row below the chart.
    let mut fig_table = Figure::new(900, 900, Theme::light().background)?;
    {
        let mut chart = RadarChart::new(&mut fig_table, &var_refs, &ranges)?;
        chart.set_title(&stem, 28.0);
        chart.plot_table(&rows, None, None)?;
    }
    let out_table = out_name_with(&stem, "table");
    fig_table.save_png(&out_table)?;
    println!("Wrote {}", out_table.display());

    // 2) First row alone in the highlight color, wider stroke, corner legend.
    let theme = Theme::light();
    let mut fig_one = Figure::new(900, 900, theme.background)?;
    {
        let opts = RadarChartOptions { theme, ..Default::default() };
        let mut chart = RadarChart::with_options(&mut fig_one, &var_refs, &ranges, opts)?;
        let first = &rows[0];
        chart.set_title(&first.name, 28.0);
        chart.plot(&first.values, theme.highlight, Some(&first.name))?;
        chart.fill(&first.values, theme.highlight, 0.2)?;
        chart.add_legend(LegendAnchor::UpperRight, 1);
    }
    let out_one = out_name_with(&stem, "highlight");
    fig_one.save_png(&out_one)?;
    println!("Wrote {}", out_one.display());

    Ok(())
}

/// Produce output file name like target/out/radar_<stem>_<suffix>.png
fn out_name_with(stem: &str, suffix: &str) -> PathBuf {
    let short = stem.split_whitespace().take(3).collect::<Vec<_>>().join("_");
    let mut out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    if short.is_empty() {
        out.push(format!("radar_{suffix}.png"));
    } else {
        out.push(format!("radar_{short}_{suffix}.png"));
    }
    out
}

/// Load a radar table CSV: first column is the row name, every remaining
/// header is a variable, cells are numeric.
fn load_radar_csv(path: &Path) -> Result<(Vec<String>, Vec<RadarRow>)> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect::<Vec<_>>();
    println!("Headers: {:?}", headers);
    if headers.len() < 2 {
        anyhow::bail!("need a name column plus at least one variable column");
    }
    let variables = headers[1..].to_vec();

    let mut rows = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let name = rec.get(0).unwrap_or("").trim().to_string();
        if name.is_empty() {
            continue;
        }
        let values: Option<Vec<f64>> = (1..headers.len())
            .map(|i| rec.get(i).and_then(|s| s.trim().parse::<f64>().ok()))
            .collect();
        match values {
            Some(values) => rows.push(RadarRow::new(name, values)),
            None => println!("Warning: skipping row '{name}' with non-numeric cells."),
        }
    }
    Ok((variables, rows))
}

/// Per-variable (min, max) from the data, padded 5% on each side so no
/// polygon vertex sits exactly on the center or the boundary circle.
fn derive_ranges(variables: &[String], rows: &[RadarRow]) -> Vec<(f64, f64)> {
    (0..variables.len())
        .map(|i| {
            let mut lo = f64::INFINITY;
            let mut hi = f64::NEG_INFINITY;
            for row in rows {
                if let Some(&v) = row.values.get(i) {
                    lo = lo.min(v);
                    hi = hi.max(v);
                }
            }
            if !lo.is_finite() || !hi.is_finite() {
                return (0.0, 1.0);
            }
            let pad = ((hi - lo) * 0.05).max(1e-6);
            (lo - pad, hi + pad)
        })
        .collect()
}

/// Classic nutrition-style sample so the demo runs with no input file.
fn sample_table() -> (Vec<String>, Vec<RadarRow>) {
    let variables = ["Protein", "Fiber", "Vitamin C", "Iron", "Energy density"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let rows = vec![
        RadarRow::new("lentils", vec![9.0, 7.9, 1.5, 3.3, 116.0]),
        RadarRow::new("spinach", vec![2.9, 2.2, 28.1, 2.7, 23.0]),
        RadarRow::new("almonds", vec![21.2, 12.5, 0.0, 3.7, 579.0]),
        RadarRow::new("oranges", vec![0.9, 2.4, 53.2, 0.1, 47.0]),
    ];
    (variables, rows)
}
