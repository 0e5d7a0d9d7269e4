// File: crates/elo-chart-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors.

use crate::color::Rgba;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    pub grid: Rgba,
    pub axis_line: Rgba,
    pub axis_label: Rgba,
    pub tick: Rgba,
    pub title: Rgba,
    pub callout: Rgba,
    pub era_marker: Rgba,
    pub event_marker: Rgba,
    pub empty_cell: Rgba,
    pub legend_background: Rgba,
    /// Series colours, cycled by entity index.
    pub palette: [Rgba; 6],
}

/// Matplotlib "tab10" head, the colours the original chart used.
const TAB_PALETTE: [Rgba; 6] = [
    Rgba::rgb(0x1f, 0x77, 0xb4),
    Rgba::rgb(0xff, 0x7f, 0x0e),
    Rgba::rgb(0x2c, 0xa0, 0x2c),
    Rgba::rgb(0xd6, 0x27, 0x28),
    Rgba::rgb(0x94, 0x67, 0xbd),
    Rgba::rgb(0x8c, 0x56, 0x4b),
];

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::rgb(255, 255, 255),
            grid: Rgba::new(176, 176, 176, 179),
            axis_line: Rgba::rgb(60, 60, 70),
            axis_label: Rgba::rgb(20, 20, 30),
            tick: Rgba::rgb(100, 100, 110),
            title: Rgba::rgb(10, 10, 20),
            callout: Rgba::rgb(30, 30, 40),
            era_marker: Rgba::rgb(0xd4, 0xaf, 0x37),
            event_marker: Rgba::rgb(0xe6, 0x3c, 0x1e),
            empty_cell: Rgba::rgb(0xeb, 0xed, 0xf0),
            legend_background: Rgba::new(255, 255, 255, 220),
            palette: TAB_PALETTE,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::rgb(18, 18, 20),
            grid: Rgba::rgb(40, 40, 45),
            axis_line: Rgba::rgb(180, 180, 190),
            axis_label: Rgba::rgb(235, 235, 245),
            tick: Rgba::rgb(150, 150, 160),
            title: Rgba::rgb(245, 245, 250),
            callout: Rgba::rgb(220, 220, 230),
            era_marker: Rgba::rgb(255, 215, 0),
            event_marker: Rgba::rgb(255, 230, 70),
            empty_cell: Rgba::rgb(0x16, 0x1b, 0x22),
            legend_background: Rgba::new(30, 30, 34, 220),
            palette: TAB_PALETTE,
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: Rgba::rgb(0x00, 0x00, 0x00),
            grid: Rgba::rgb(0x22, 0x22, 0x22),
            axis_line: Rgba::rgb(0xff, 0xff, 0xff),
            axis_label: Rgba::rgb(0xff, 0xff, 0xff),
            tick: Rgba::rgb(0xcc, 0xcc, 0xcc),
            title: Rgba::rgb(0xff, 0xff, 0xff),
            callout: Rgba::rgb(0xff, 0xff, 0xff),
            era_marker: Rgba::rgb(0xff, 0xff, 0x00),
            event_marker: Rgba::rgb(0xff, 0x40, 0x40),
            empty_cell: Rgba::rgb(0x11, 0x11, 0x11),
            legend_background: Rgba::rgb(0x00, 0x00, 0x00),
            palette: [
                Rgba::rgb(0x00, 0xff, 0xff),
                Rgba::rgb(0xff, 0xa5, 0x00),
                Rgba::rgb(0x00, 0xff, 0x00),
                Rgba::rgb(0xff, 0x00, 0xff),
                Rgba::rgb(0xff, 0xff, 0x00),
                Rgba::rgb(0xff, 0xff, 0xff),
            ],
        }
    }

    pub fn series_color(&self, index: usize) -> Rgba {
        self.palette[index % self.palette.len()]
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark(), Theme::high_contrast_dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    tracing::debug!(name, "unknown theme, using light");
    Theme::light()
}
