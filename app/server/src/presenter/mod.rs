//! FILENAME: app/server/src/presenter/mod.rs
// PURPOSE: Renders pipeline output for the display surface.
// CONTEXT: `table` and `page` produce HTML, `chart` produces SVG via plotters,
//          `vega` produces a Vega-Lite description of the same chart.

pub mod chart;
pub mod page;
pub mod table;
pub mod vega;

pub use chart::{render_chart_svg, ChartOptions};
pub use page::render_page;
pub use table::render_table;
pub use vega::vega_lite_spec;

pub const PAGE_TITLE: &str = "Movies Dataset";
pub const PAGE_ICON: &str = "🎥";
pub const X_TITLE: &str = "Year";
pub const Y_TITLE: &str = "Gross Earnings ($)";
pub const LEGEND_TITLE: &str = "Genre";

/// Vega's default categorical palette (tableau10), as RGB.
pub const PALETTE: [(u8, u8, u8); 10] = [
    (0x4c, 0x78, 0xa8),
    (0xf5, 0x85, 0x18),
    (0xe4, 0x57, 0x56),
    (0x72, 0xb7, 0xb2),
    (0x54, 0xa2, 0x4b),
    (0xee, 0xca, 0x3b),
    (0xb2, 0x79, 0xa2),
    (0xff, 0x9d, 0xa6),
    (0x9d, 0x75, 0x5d),
    (0xba, 0xb0, 0xac),
];

/// Color for the n-th series; wraps after ten.
pub fn series_color(index: usize) -> (u8, u8, u8) {
    PALETTE[index % PALETTE.len()]
}

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
