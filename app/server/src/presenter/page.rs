//! FILENAME: app/server/src/presenter/page.rs
// PURPOSE: The full single-page dashboard: title, widgets, table, chart.
// CONTEXT: Plain HTML form, no client-side script. Every widget change is a
//          GET that reruns the pipeline on the server.

use pivot_engine::SortOrder;

use super::{html_escape, render_table, PAGE_ICON, PAGE_TITLE};
use crate::api_types::{DashboardQuery, WidgetOptions};
use crate::pipeline::DashboardView;

const TMDB_URL: &str = "https://www.kaggle.com/datasets/tmdb/tmdb-movie-metadata";

/// Inputs for one page render.
pub struct PageContext<'a> {
    pub options: &'a WidgetOptions,
    pub view: &'a DashboardView,
    pub sort_order: SortOrder,
    /// Pre-rendered chart markup
    pub chart_svg: &'a str,
}

pub fn render_page(ctx: &PageContext<'_>) -> String {
    let query = DashboardQuery::encode(&ctx.view.filter, ctx.sort_order);
    let flipped = match ctx.sort_order {
        SortOrder::Ascending => SortOrder::Descending,
        SortOrder::Descending => SortOrder::Ascending,
    };
    let sort_href = format!("/?{}", DashboardQuery::encode(&ctx.view.filter, flipped));

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{css}</style>
</head>
<body>
    <main class="container">
        <h1>{icon} {title}</h1>
        <p>This app visualizes data from <a href="{tmdb}">The Movie Database (TMDB)</a>.
        It shows which movie genre performed best at the box office over the years.
        Use the widgets below to explore!</p>
        {widgets}
        <section class="table">
            {table}
            <p class="downloads">Download: <a href="/api/export.csv?{query}">CSV</a> &middot; <a href="/api/export.xlsx?{query}">XLSX</a> &middot; <a href="/api/chart.vl.json?{query}">Vega-Lite</a></p>
        </section>
        <section class="chart">
            {chart}
        </section>
    </main>
</body>
</html>
"#,
        title = PAGE_TITLE,
        icon = PAGE_ICON,
        css = inline_css(),
        tmdb = TMDB_URL,
        widgets = render_widgets(ctx),
        table = render_table(&ctx.view.matrix, Some(sort_href.as_str())),
        query = html_escape(&query),
        chart = ctx.chart_svg,
    )
}

fn render_widgets(ctx: &PageContext<'_>) -> String {
    let filter = &ctx.view.filter;
    let bounds = ctx.options.year_bounds;

    let mut options = String::new();
    for genre in &ctx.options.genres {
        let selected = if filter.genres.iter().any(|g| g == genre) {
            " selected"
        } else {
            ""
        };
        options.push_str(&format!(
            r#"<option value="{v}"{s}>{v}</option>"#,
            v = html_escape(genre),
            s = selected
        ));
    }

    format!(
        r#"<form method="get" action="/" class="widgets">
            <input type="hidden" name="genres" value="">
            <input type="hidden" name="order" value="{order}">
            <label for="genres">Select Genres:</label>
            <select id="genres" name="genres" multiple size="{size}">{options}</select>
            <fieldset>
                <legend>Select Year Range:</legend>
                <input type="number" name="from" min="{min}" max="{max}" value="{from}">
                <span>to</span>
                <input type="number" name="to" min="{min}" max="{max}" value="{to}">
            </fieldset>
            <button type="submit">Apply</button>
        </form>"#,
        order = crate::api_types::order_param(ctx.sort_order),
        size = ctx.options.genres.len().clamp(1, 10),
        options = options,
        min = bounds.low,
        max = bounds.high,
        from = filter.years.low,
        to = filter.years.high,
    )
}

fn inline_css() -> &'static str {
    r#"
body { font-family: "Source Sans Pro", sans-serif; color: #31333f; margin: 0; }
.container { max-width: 960px; margin: 0 auto; padding: 2rem 1rem; }
h1 { font-size: 2.4rem; margin-bottom: 0.5rem; }
.widgets { display: grid; gap: 0.5rem; margin: 1.5rem 0; }
.widgets select { min-width: 16rem; }
.widgets fieldset { border: none; padding: 0; }
table.pivot { width: 100%; border-collapse: collapse; font-size: 0.9rem; }
table.pivot th, table.pivot td { border-bottom: 1px solid #e6e9ef; padding: 0.3rem 0.6rem; }
table.pivot th.num, table.pivot td.num { text-align: right; }
table.pivot th.year, table.pivot td.year { text-align: left; }
.empty { color: #808495; }
.downloads { font-size: 0.85rem; }
.chart svg { width: 100%; height: auto; }
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardConfig;
    use crate::pipeline::run_pipeline;
    use engine::{Dataset, Filter, Record, YearRange};

    #[test]
    fn test_page_reflects_widget_state() {
        let dataset = Dataset::new(vec![
            Record::new(2010, "Drama", 100.0),
            Record::new(2011, "Comedy", 30.0),
            Record::new(2011, "Horror", 5.0),
        ]);
        let options = WidgetOptions::from_config(&DashboardConfig::default(), &dataset);
        let view = run_pipeline(
            &dataset,
            Filter::new(["Drama"], YearRange::new(2005, 2012)),
            SortOrder::Descending,
        );
        let html = render_page(&PageContext {
            options: &options,
            view: &view,
            sort_order: SortOrder::Descending,
            chart_svg: "<svg></svg>",
        });

        assert!(html.contains("<title>Movies Dataset</title>"));
        assert!(html.contains(r#"<option value="Drama" selected>Drama</option>"#));
        assert!(html.contains(r#"<option value="Comedy">Comedy</option>"#));
        assert!(html.contains(r#"name="from" min="1986" max="2016" value="2005""#));
        assert!(html.contains(r#"name="to" min="1986" max="2016" value="2012""#));
        assert!(html.contains("/api/export.csv?genres=&amp;genres=Drama&amp;from=2005&amp;to=2012&amp;order=desc"));
        assert!(html.contains("order=asc"));
        assert!(html.contains("<svg></svg>"));
    }
}
