// File: crates/radar-core/src/theme.rs
// Summary: Light/Dark theming for radar chart rendering colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    /// Ring circles and spokes of the shell axis.
    pub grid: skia::Color,
    /// Outer boundary circle.
    pub outer: skia::Color,
    pub tick_label: skia::Color,
    pub var_label: skia::Color,
    pub title: skia::Color,
    pub legend_text: skia::Color,
    /// Series drawn in exactly this color get the wider highlight stroke.
    pub highlight: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            grid: skia::Color::from_argb(255, 205, 205, 212),
            outer: skia::Color::from_argb(255, 120, 120, 130),
            tick_label: skia::Color::from_argb(255, 100, 100, 110),
            var_label: skia::Color::from_argb(255, 20, 20, 30),
            title: skia::Color::from_argb(255, 20, 20, 30),
            legend_text: skia::Color::from_argb(255, 20, 20, 30),
            highlight: skia::Color::from_argb(255, 0xee, 0x82, 0xee), // violet
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 60, 60, 68),
            outer: skia::Color::from_argb(255, 150, 150, 160),
            tick_label: skia::Color::from_argb(255, 150, 150, 160),
            var_label: skia::Color::from_argb(255, 235, 235, 245),
            title: skia::Color::from_argb(255, 235, 235, 245),
            legend_text: skia::Color::from_argb(255, 235, 235, 245),
            highlight: skia::Color::from_argb(255, 0xee, 0x82, 0xee),
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::light()
}

/// Default cyclic series palette used by `plot_table` when the caller
/// supplies no colors: firebrick, yellow, purple and sky blue lead, then
/// two rounds of the tab cycle (22 entries total).
pub fn palette() -> Vec<skia::Color> {
    let tab_cycle = [
        (0xff, 0x7f, 0x0e), // orange
        (0x2c, 0xa0, 0x2c), // green
        (0x8c, 0x56, 0x4b), // brown
        (0xe3, 0x77, 0xc2), // pink
        (0x7f, 0x7f, 0x7f), // gray
        (0xbc, 0xbd, 0x22), // olive
        (0x17, 0xbe, 0xcf), // cyan
        (0xd6, 0x27, 0x28), // red
        (0x1f, 0x77, 0xb4), // blue
    ];
    let mut out = vec![
        skia::Color::from_argb(255, 0xb2, 0x22, 0x22), // firebrick
        skia::Color::from_argb(255, 0xff, 0xff, 0x00), // yellow
        skia::Color::from_argb(255, 0x94, 0x67, 0xbd), // purple
        skia::Color::from_argb(255, 0x87, 0xce, 0xeb), // sky blue
    ];
    for _ in 0..2 {
        out.extend(tab_cycle.iter().map(|&(r, g, b)| skia::Color::from_argb(255, r, g, b)));
    }
    out
}
