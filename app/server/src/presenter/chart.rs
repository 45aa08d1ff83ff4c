//! FILENAME: app/server/src/presenter/chart.rs
// PURPOSE: Multi-series line chart of long-form rows, rendered to SVG.
// CONTEXT: x is the year as a categorical axis (ascending), y is gross, one
//          colored line per genre.

use std::panic;

use anyhow::Result;
use engine::format_compact;
use pivot_engine::{group_series, LongRow, Series};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::{FontDesc, FontFamily, FontStyle};

use super::{series_color, X_TITLE, Y_TITLE};

/// Pixel size of the rendered chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartOptions {
    pub width: u32,
    pub height: u32,
}

impl Default for ChartOptions {
    fn default() -> Self {
        ChartOptions {
            width: 960,
            height: 320,
        }
    }
}

/// Renders the chart to an SVG document. Empty input renders an empty frame.
pub fn render_chart_svg(rows: &[LongRow], opts: ChartOptions) -> Result<String, String> {
    let series = group_series(rows);
    let mut years: Vec<i32> = rows.iter().map(|r| r.year).collect();
    years.sort_unstable();
    years.dedup();

    let render = || -> Result<String, String> {
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (opts.width, opts.height))
                .into_drawing_area();
            draw_chart(root, &years, &series).map_err(|e| format!("plotting error: {}", e))?;
        }
        Ok(svg)
    };

    panic::catch_unwind(panic::AssertUnwindSafe(render))
        .map_err(|_| "plotting backend panicked".to_string())?
}

fn draw_chart<DB>(
    root: DrawingArea<DB, Shift>,
    years: &[i32],
    series: &[Series],
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let slots = years.len().max(1) as i32;
    let y_peak = series
        .iter()
        .flat_map(|s| s.points.iter().map(|(_, v)| *v))
        .fold(0.0_f64, f64::max);
    let y_max = if y_peak.is_finite() && y_peak > 0.0 { y_peak * 1.05 } else { 1.0 };

    let mut chart = ChartBuilder::on(&root)
        .margin(12)
        .set_label_area_size(LabelAreaPosition::Left, 64)
        .set_label_area_size(LabelAreaPosition::Bottom, 44)
        .build_cartesian_2d((0..slots).into_segmented(), 0.0..y_max)?;

    let year_label = |v: &SegmentValue<i32>| match v {
        SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => usize::try_from(*i)
            .ok()
            .and_then(|i| years.get(i))
            .map(|y| y.to_string())
            .unwrap_or_default(),
        SegmentValue::Last => String::new(),
    };

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(years.len().max(1))
        .x_label_formatter(&year_label)
        .y_label_formatter(&|v| format_compact(*v))
        .x_desc(X_TITLE)
        .y_desc(Y_TITLE)
        .label_style(FontDesc::new(FontFamily::SansSerif, 12.0, FontStyle::Normal))
        .draw()?;

    for (idx, s) in series.iter().enumerate() {
        let (r, g, b) = series_color(idx);
        let color = RGBColor(r, g, b);
        let points: Vec<(SegmentValue<i32>, f64)> = s
            .points
            .iter()
            .filter_map(|(year, gross)| {
                years
                    .iter()
                    .position(|y| y == year)
                    .map(|slot| (SegmentValue::CenterOf(slot as i32), *gross))
            })
            .collect();

        chart
            .draw_series(LineSeries::new(points, color.stroke_width(2)))?
            .label(s.genre.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
    }

    if !series.is_empty() {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK.mix(0.3))
            .label_font(FontDesc::new(FontFamily::SansSerif, 12.0, FontStyle::Normal))
            .draw()?;
    }

    root.present()?;
    Ok(())
}
