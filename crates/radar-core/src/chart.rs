// File: crates/radar-core/src/chart.rs
// Summary: RadarChart: stacked polar axes with independent scales, series
// drawing (line/fill), legend, title, and the table convenience driver.

use skia_safe as skia;

use crate::axis::PolarAxis;
use crate::error::RadarError;
use crate::figure::Figure;
use crate::geometry::{deg_to_rad, polar_to_screen};
use crate::scale::{rescale_row, RadialScale};
use crate::text::{wrap, HAlign, TextShaper, VAlign};
use crate::theme::{palette, Theme};
use crate::types::Insets;

const TICK_LABEL_SIZE: f32 = 12.0;
const VAR_LABEL_SIZE: f32 = 16.0;
const TITLE_SIZE: f32 = 22.0;
const LEGEND_SIZE: f32 = 14.0;
/// Variable names wrap at this many characters per line.
const WRAP_WIDTH: usize = 15;
/// Gap between the outer circle and the variable labels, px.
const VAR_LABEL_PAD: f32 = 18.0;
const SERIES_STROKE: f32 = 2.0;
const HIGHLIGHT_STROKE: f32 = 3.0;
/// Legend swatches use a widened stroke so colors stay readable.
const LEGEND_SWATCH_STROKE: f32 = 6.0;
const LEGEND_SWATCH_LEN: f32 = 26.0;
const FILL_ALPHA_TABLE: f32 = 0.2;

pub struct RadarChartOptions {
    /// Number of ring levels drawn per axis.
    pub ring_levels: usize,
    /// Whether per-variable scale labels are rendered.
    pub show_scales: bool,
    pub theme: Theme,
    pub insets: Insets,
}

impl Default for RadarChartOptions {
    fn default() -> Self {
        Self {
            ring_levels: 5,
            show_scales: true,
            theme: Theme::light(),
            insets: Insets::default(),
        }
    }
}

/// One named table row consumed by [`RadarChart::plot_table`].
#[derive(Clone, Debug)]
pub struct RadarRow {
    pub name: String,
    pub values: Vec<f64>,
}

impl RadarRow {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self { name: name.into(), values }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegendAnchor {
    /// Stacked inside the figure's top-right corner.
    UpperRight,
    /// Row(s) below the chart, starting at its left edge.
    LowerLeft,
}

/// A radar chart drawn onto a borrowed [`Figure`].
///
/// Construction fixes the visual setup (angles, rings, spokes, labels) and
/// draws it immediately; `plot`/`fill` add series on the overlay axis,
/// `add_legend`/`set_title` add decorations. There is no removal or update.
pub struct RadarChart<'a> {
    figure: &'a mut Figure,
    theme: Theme,
    /// Spoke angles in radians, clockwise from the top; length N+1 with the
    /// first angle repeated at the end so series polygons close.
    angles: Vec<f64>,
    /// Per-variable scales, index-aligned with `variables`; entry 0 is the
    /// shared target scale everything is rescaled onto.
    scales: Vec<RadialScale>,
    /// N+1 stacked axes; see [`PolarAxis`] for the role of each index.
    axes: Vec<PolarAxis>,
    center: (f32, f32),
    radius: f32,
    plot_counter: usize,
    legend_entries: Vec<(String, skia::Color)>,
    shaper: TextShaper,
}

// Manual `Debug` (the `figure` field wraps a non-`Debug` skia `Surface`).
impl std::fmt::Debug for RadarChart<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RadarChart")
            .field("theme", &self.theme)
            .field("angles", &self.angles)
            .field("scales", &self.scales)
            .field("axes", &self.axes)
            .field("center", &self.center)
            .field("radius", &self.radius)
            .field("plot_counter", &self.plot_counter)
            .field("legend_entries", &self.legend_entries)
            .finish()
    }
}

impl<'a> RadarChart<'a> {
    pub fn new(
        figure: &'a mut Figure,
        variables: &[&str],
        ranges: &[(f64, f64)],
    ) -> Result<Self, RadarError> {
        Self::with_options(figure, variables, ranges, RadarChartOptions::default())
    }

    pub fn with_options(
        figure: &'a mut Figure,
        variables: &[&str],
        ranges: &[(f64, f64)],
        opts: RadarChartOptions,
    ) -> Result<Self, RadarError> {
        let n = variables.len();
        if n == 0 {
            return Err(RadarError::NoVariables);
        }
        if ranges.len() != n {
            return Err(RadarError::RangesMismatch { variables: n, ranges: ranges.len() });
        }

        let step = 360.0 / n as f64;
        let angles_deg: Vec<f64> = (0..n).map(|i| step * i as f64).collect();
        let scales: Vec<RadialScale> = ranges.iter().map(|&r| RadialScale::from(r)).collect();

        // Axis i carries variable j's scale; axes 0 and 1 both carry
        // variable 0 so the overlay lines up with the shell.
        let mut axes = Vec::with_capacity(n + 1);
        for i in 0..=n {
            let j = if i <= 1 { 0 } else { i - 1 };
            axes.push(PolarAxis::new(scales[j], angles_deg[j], opts.ring_levels));
        }

        let mut angles: Vec<f64> = angles_deg.iter().map(|&d| deg_to_rad(d)).collect();
        angles.push(angles[0]);

        // Square-ish plot box inside the insets; the circle leaves headroom
        // for the wrapped variable labels outside it.
        let insets = opts.insets;
        let (w, h) = (figure.width() as f32, figure.height() as f32);
        let box_w = (w - insets.hsum() as f32).max(1.0);
        let box_h = (h - insets.vsum() as f32).max(1.0);
        let center = (
            insets.left as f32 + box_w * 0.5,
            insets.top as f32 + box_h * 0.5,
        );
        let radius = box_w.min(box_h) * 0.5 * 0.86;

        let mut chart = Self {
            figure,
            theme: opts.theme,
            angles,
            scales,
            axes,
            center,
            radius,
            plot_counter: 0,
            legend_entries: Vec::new(),
            shaper: TextShaper::new(),
        };
        chart.draw_shell(variables, opts.show_scales);
        Ok(chart)
    }

    /// The shell axis (index 0), whose rings and labels are the visible grid.
    pub fn shell_axis(&self) -> &PolarAxis { &self.axes[0] }
    /// The overlay axis (index 1) all series polygons are drawn on.
    pub fn overlay_axis(&self) -> &PolarAxis { &self.axes[1] }
    /// Number of series plotted so far (sizes the `plot_table` legend).
    pub fn series_count(&self) -> usize { self.plot_counter }

    /// Map one series onto the axis-0 scale. Value 0 passes through
    /// untouched; every value must lie within its variable's range in
    /// either orientation.
    pub fn rescale(&self, values: &[f64]) -> Result<Vec<f64>, RadarError> {
        rescale_row(values, &self.scales)
    }

    /// Draw a line series across all spokes on the overlay axis. The
    /// theme's highlight color gets a wider stroke. Labelled series are
    /// listed by `add_legend`.
    pub fn plot(
        &mut self,
        values: &[f64],
        color: skia::Color,
        label: Option<&str>,
    ) -> Result<(), RadarError> {
        let sdata = self.rescale(values)?;
        let width = if color == self.theme.highlight { HIGHLIGHT_STROKE } else { SERIES_STROKE };
        let path = self.series_path(&sdata);
        let paint = stroke_paint(color, width);
        self.figure.canvas().draw_path(&path, &paint);
        if let Some(label) = label {
            self.legend_entries.push((label.to_string(), color));
        }
        self.plot_counter += 1;
        Ok(())
    }

    /// Draw a filled area series on the overlay axis. Does not count
    /// toward the legend sizing; pair it with `plot` for an outlined area.
    pub fn fill(
        &mut self,
        values: &[f64],
        color: skia::Color,
        alpha: f32,
    ) -> Result<(), RadarError> {
        let sdata = self.rescale(values)?;
        let path = self.series_path(&sdata);
        let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        let paint = fill_paint(skia::Color::from_argb(a, color.r(), color.g(), color.b()));
        self.figure.canvas().draw_path(&path, &paint);
        Ok(())
    }

    /// Render the legend of every labelled series, laid out in `columns`
    /// columns at the given anchor.
    pub fn add_legend(&mut self, anchor: LegendAnchor, columns: usize) {
        if self.legend_entries.is_empty() {
            return;
        }
        let columns = columns.max(1);
        let text_w = self
            .legend_entries
            .iter()
            .map(|(label, _)| self.shaper.measure_width(label, LEGEND_SIZE, false))
            .fold(0.0f32, f32::max);
        let cell_w = LEGEND_SWATCH_LEN + 8.0 + text_w + 24.0;
        let row_h = TextShaper::line_height(LEGEND_SIZE) + 6.0;

        let (origin_x, origin_y) = match anchor {
            LegendAnchor::UpperRight => (
                self.figure.width() as f32 - cell_w * columns as f32 - 12.0,
                12.0,
            ),
            LegendAnchor::LowerLeft => (
                self.center.0 - self.radius,
                self.center.1 + self.radius + 44.0,
            ),
        };

        let theme = self.theme;
        let canvas = self.figure.canvas();
        for (idx, (label, color)) in self.legend_entries.iter().enumerate() {
            let col = idx % columns;
            let row = idx / columns;
            let x = origin_x + col as f32 * cell_w;
            let cy = origin_y + row as f32 * row_h + row_h * 0.5;
            let swatch = stroke_paint(*color, LEGEND_SWATCH_STROKE);
            canvas.draw_line((x, cy), (x + LEGEND_SWATCH_LEN, cy), &swatch);
            self.shaper.draw_left(
                canvas,
                label,
                x + LEGEND_SWATCH_LEN + 8.0,
                cy + LEGEND_SIZE * 0.2,
                LEGEND_SIZE,
                theme.legend_text,
                false,
            );
        }
    }

    /// Draw the chart title centered `pad` pixels above the variable-label
    /// band at the top of the circle.
    pub fn set_title(&mut self, title: &str, pad: f32) {
        let lines = vec![title.to_string()];
        let theme = self.theme;
        let (cx, cy) = self.center;
        let label_band = VAR_LABEL_PAD + TextShaper::line_height(VAR_LABEL_SIZE);
        let y = cy - self.radius - label_band - pad;
        let canvas = self.figure.canvas();
        self.shaper.draw_lines(
            canvas,
            &lines,
            cx,
            y,
            TITLE_SIZE,
            theme.title,
            false,
            HAlign::Center,
            VAlign::Bottom,
        );
    }

    /// Convenience driver: plot-and-fill each selected row with a cyclic
    /// palette, then place one legend row below the chart sized to the
    /// number of series plotted. `names` selects and orders rows; `None`
    /// takes the whole table. `colors` overrides the built-in palette.
    pub fn plot_table(
        &mut self,
        rows: &[RadarRow],
        names: Option<&[&str]>,
        colors: Option<&[skia::Color]>,
    ) -> Result<(), RadarError> {
        let cycle: Vec<skia::Color> = match colors {
            Some(c) => c.to_vec(),
            None => palette(),
        };
        let selected: Vec<&RadarRow> = match names {
            Some(names) => names
                .iter()
                .map(|&name| {
                    rows.iter()
                        .find(|r| r.name == name)
                        .ok_or_else(|| RadarError::UnknownRow(name.to_string()))
                })
                .collect::<Result<_, _>>()?,
            None => rows.iter().collect(),
        };

        for (row, color) in selected.iter().zip(cycle.iter().cycle()) {
            self.plot(&row.values, *color, Some(&row.name))?;
            self.fill(&row.values, *color, FILL_ALPHA_TABLE)?;
        }
        self.add_legend(LegendAnchor::LowerLeft, self.plot_counter.max(1));
        Ok(())
    }

    // ---- helpers ----------------------------------------------------------------

    /// Closed polygon over all N+1 angle points; the first rescaled value
    /// repeats at the end.
    fn series_path(&self, sdata: &[f64]) -> skia::Path {
        let overlay = &self.axes[1];
        let mut path = skia::PathBuilder::new();
        for (k, &angle) in self.angles.iter().enumerate() {
            let value = sdata[k % sdata.len()];
            let frac = overlay.radius_fraction(value) as f32;
            let (x, y) = polar_to_screen(self.center, frac * self.radius, angle);
            if k == 0 {
                path.move_to((x, y));
            } else {
                path.line_to((x, y));
            }
        }
        path.close();
        path.detach()
    }

    /// Draw the fixed visual setup: rings, spokes, outer circle, per-axis
    /// scale labels and the wrapped variable names.
    fn draw_shell(&mut self, variables: &[&str], show_scales: bool) {
        let n = variables.len();
        let theme = self.theme;
        let center = self.center;
        let radius = self.radius;
        let grid = stroke_paint(theme.grid, 1.0);
        let outer = stroke_paint(theme.outer, 1.5);
        let canvas = self.figure.canvas();

        // Ring circles come from the shell axis only; the other axes'
        // rings would all overlap at different values anyway.
        for &tick in &self.axes[0].ticks {
            let frac = self.axes[0].radius_fraction(tick) as f32;
            if frac <= 0.0 {
                continue;
            }
            canvas.draw_circle(center, frac * radius, &grid);
        }

        // Spokes, then the outer boundary circle.
        for &angle in &self.angles[..n] {
            let tip = polar_to_screen(center, radius, angle);
            canvas.draw_line(center, tip, &grid);
        }
        canvas.draw_circle(center, radius, &outer);

        // Scale labels for every axis at its own spoke angle. Axis 1
        // mirrors the shell scale; painting its labels would double-paint
        // axis 0's.
        if show_scales {
            for (i, axis) in self.axes.iter().enumerate() {
                if i == 1 {
                    continue;
                }
                let angle = deg_to_rad(axis.angle_deg);
                for (&tick, label) in axis.ticks.iter().zip(&axis.tick_labels) {
                    if label.is_empty() {
                        continue;
                    }
                    let frac = axis.radius_fraction(tick) as f32;
                    let (x, y) = polar_to_screen(center, frac * radius, angle);
                    self.shaper.draw_left(
                        canvas,
                        label,
                        x + 4.0,
                        y - 2.0,
                        TICK_LABEL_SIZE,
                        theme.tick_label,
                        false,
                    );
                }
            }
        }

        // Variable names outside the circle, wrapped and bold, aligned so
        // they read outward instead of overlapping the chart.
        for (i, name) in variables.iter().enumerate() {
            let deg = 360.0 / n as f64 * i as f64;
            let angle = self.angles[i];
            let (x, y) = polar_to_screen(center, radius + VAR_LABEL_PAD, angle);
            let halign = if deg == 0.0 || deg == 180.0 {
                HAlign::Center
            } else if deg < 180.0 {
                HAlign::Left
            } else {
                HAlign::Right
            };
            let valign = if deg == 0.0 {
                VAlign::Bottom
            } else if deg == 180.0 {
                VAlign::Top
            } else {
                VAlign::Center
            };
            let lines = wrap(name, WRAP_WIDTH);
            self.shaper.draw_lines(
                canvas,
                &lines,
                x,
                y,
                VAR_LABEL_SIZE,
                theme.var_label,
                true,
                halign,
                valign,
            );
        }
    }
}

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}
