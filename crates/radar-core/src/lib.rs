// File: crates/radar-core/src/lib.rs
// Summary: Core library entry point; exports the radar chart API.

pub mod axis;
pub mod chart;
pub mod error;
pub mod figure;
pub mod geometry;
pub mod grid;
pub mod scale;
pub mod text;
pub mod theme;
pub mod types;

pub use axis::PolarAxis;
pub use chart::{LegendAnchor, RadarChart, RadarChartOptions, RadarRow};
pub use error::RadarError;
pub use figure::Figure;
pub use scale::{rescale_row, RadialScale};
pub use text::{wrap, TextShaper};
pub use theme::{palette, Theme};
