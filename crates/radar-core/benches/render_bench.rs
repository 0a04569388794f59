// File: crates/radar-core/benches/render_bench.rs
// Summary: Criterion benchmark for full radar render to PNG bytes.

use anyhow::Result;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use radar_core::{palette, Figure, RadarChart, RadarRow, Theme};

fn build_rows(variables: usize, series: usize) -> (Vec<String>, Vec<(f64, f64)>, Vec<RadarRow>) {
    let names: Vec<String> = (0..variables).map(|i| format!("var {i}")).collect();
    let ranges: Vec<(f64, f64)> = (0..variables)
        .map(|i| (0.0, 10.0 * (i + 1) as f64))
        .collect();
    let rows = (0..series)
        .map(|s| {
            let values = (0..variables)
                .map(|i| {
                    let span = 10.0 * (i + 1) as f64;
                    span * 0.5 * (1.0 + ((s * variables + i) as f64 * 0.37).sin())
                })
                .collect();
            RadarRow::new(format!("series {s}"), values)
        })
        .collect();
    (names, ranges, rows)
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[6usize, 12usize] {
        group.bench_function(format!("vars_{n}_series_8"), |b| {
            let (names, ranges, rows) = build_rows(n, 8);
            let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();
            b.iter(|| -> Result<()> {
                let mut fig = Figure::new(600, 600, Theme::light().background)?;
                {
                    let mut chart = RadarChart::new(&mut fig, &name_refs, &ranges)?;
                    chart.plot_table(&rows, None, None)?;
                }
                let bytes = fig.png_bytes()?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
