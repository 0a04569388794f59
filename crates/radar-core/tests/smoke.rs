// File: crates/radar-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use radar_core::{Figure, RadarChart, RadarRow, Theme};

#[test]
fn render_smoke_png() {
    let mut fig = Figure::new(480, 480, Theme::light().background).expect("figure");
    {
        let mut chart = RadarChart::new(
            &mut fig,
            &["Speed", "Range", "Comfort", "Price", "Cargo"],
            &[(0.0, 250.0), (0.0, 800.0), (0.0, 10.0), (60.0, 15.0), (0.0, 500.0)],
        )
        .expect("chart");
        chart.set_title("Vehicle comparison", 16.0);
        let rows = vec![
            RadarRow::new("hatchback", vec![180.0, 520.0, 6.5, 22.0, 380.0]),
            RadarRow::new("roadster", vec![250.0, 400.0, 5.0, 58.0, 120.0]),
        ];
        chart.plot_table(&rows, None, None).expect("plot table");
        assert_eq!(chart.series_count(), 2);
    }

    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();
    fig.save_png(&out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = fig.png_bytes().expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}
