// File: crates/radar-examples/src/bin/basic.rs
// Summary: Minimal example that renders a simple radar chart to PNG.

use radar_core::{palette, Figure, LegendAnchor, RadarChart, Theme};

fn main() {
    let variables = ["Speed", "Handling", "Acceleration", "Braking", "Efficiency"];
    let ranges = [
        (0.0, 300.0),
        (0.0, 10.0),
        (10.0, 2.0), // seconds to 100 km/h; lower is better
        (60.0, 30.0), // braking distance in m; lower is better
        (0.0, 25.0),
    ];

    let mut fig = Figure::new(720, 720, Theme::light().background).expect("create figure");
    {
        let mut chart = RadarChart::new(&mut fig, &variables, &ranges).expect("create chart");
        let colors = palette();

        chart
            .plot(&[250.0, 8.5, 4.2, 34.0, 12.0], colors[0], Some("coupe"))
            .expect("plot coupe");
        chart
            .fill(&[250.0, 8.5, 4.2, 34.0, 12.0], colors[0], 0.2)
            .expect("fill coupe");

        chart
            .plot(&[180.0, 6.0, 8.8, 42.0, 22.0], colors[2], Some("compact"))
            .expect("plot compact");
        chart
            .fill(&[180.0, 6.0, 8.8, 42.0, 22.0], colors[2], 0.2)
            .expect("fill compact");

        chart.set_title("Track day shortlist", 20.0);
        chart.add_legend(LegendAnchor::UpperRight, 1);
    }

    let out = std::path::PathBuf::from("target/out/example_radar.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();
    fig.save_png(&out).expect("render to png");
    println!("Wrote {}", out.display());
}
