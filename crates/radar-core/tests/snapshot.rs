// File: crates/radar-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic small radar chart to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use radar_core::{palette, Figure, RadarChart, RadarChartOptions, Theme};

fn render_bytes() -> Vec<u8> {
    let mut fig = Figure::new(360, 360, Theme::light().background).expect("figure");
    {
        // Empty variable names plus hidden scales keep the render free of
        // text, which varies across platform font stacks.
        let opts = RadarChartOptions { show_scales: false, ..Default::default() };
        let mut chart = RadarChart::with_options(
            &mut fig,
            &["", "", "", ""],
            &[(0.0, 1.0), (0.0, 10.0), (0.0, 100.0), (5.0, 0.0)],
            opts,
        )
        .expect("chart");
        let colors = palette();
        chart.plot(&[0.8, 6.0, 25.0, 1.0], colors[0], None).unwrap();
        chart.fill(&[0.8, 6.0, 25.0, 1.0], colors[0], 0.2).unwrap();
        chart.plot(&[0.3, 9.0, 75.0, 4.0], colors[2], None).unwrap();
    }
    fig.png_bytes().expect("render bytes")
}

#[test]
fn golden_basic_radar() {
    let bytes = render_bytes();
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("basic_radar.png");

    let update = std::env::var("UPDATE_SNAPSHOTS")
        .ok()
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), bytes.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read(&snap_path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(&bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(
            got_img.as_raw(),
            want_img.as_raw(),
            "rendered pixels differ from golden snapshot: {}",
            snap_path.display()
        );
    } else {
        eprintln!(
            "[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.",
            snap_path.display()
        );
        // Skip without failing on first run
    }
}
