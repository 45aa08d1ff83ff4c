//! FILENAME: app/server/src/presenter/table.rs
// PURPOSE: HTML rendering of the year x genre pivot table.

use engine::{format_gross, format_year};
use pivot_engine::PivotMatrix;

use super::{html_escape, X_TITLE};

/// Renders the matrix as an HTML table. The year column is labeled as text;
/// when `year_sort_href` is given, the Year header links to it (the page
/// passes the opposite row order there).
pub fn render_table(matrix: &PivotMatrix, year_sort_href: Option<&str>) -> String {
    let mut html = String::from(r#"<table class="pivot" id="pivot-table"><thead><tr>"#);

    match year_sort_href {
        Some(href) => html.push_str(&format!(
            r#"<th class="year sortable"><a href="{}">{}</a></th>"#,
            html_escape(href),
            X_TITLE
        )),
        None => html.push_str(&format!(r#"<th class="year">{}</th>"#, X_TITLE)),
    }
    for genre in matrix.columns() {
        html.push_str(&format!(r#"<th class="num">{}</th>"#, html_escape(genre)));
    }
    html.push_str("</tr></thead><tbody>");

    for row in matrix.rows() {
        html.push_str(&format!(r#"<tr><td class="year">{}</td>"#, format_year(row.year)));
        for value in &row.values {
            html.push_str(&format!(r#"<td class="num">{}</td>"#, format_gross(*value)));
        }
        html.push_str("</tr>");
    }

    html.push_str("</tbody></table>");

    if matrix.is_empty() {
        html.push_str(r#"<p class="empty">No rows match the current selection.</p>"#);
    }
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::Record;
    use pivot_engine::{calculate_pivot, PivotDefinition};

    #[test]
    fn test_table_layout() {
        let records = vec![
            Record::new(2010, "Drama", 1_500_000.0),
            Record::new(2011, "Comedy", 30.0),
        ];
        let m = calculate_pivot(&PivotDefinition::new(["Drama", "Comedy"]), &records);
        let html = render_table(&m, None);

        assert!(html.contains(r#"<th class="year">Year</th><th class="num">Drama</th><th class="num">Comedy</th>"#));
        assert!(html.contains(r#"<td class="year">2010</td><td class="num">1,500,000</td><td class="num">0</td>"#));
        let first = html.find("2011").unwrap();
        let second = html.find("2010").unwrap();
        assert!(first < second);
        assert!(!html.contains("No rows"));
    }

    #[test]
    fn test_empty_table_keeps_header() {
        let m = calculate_pivot::<Record>(&PivotDefinition::new(["Drama"]), &[]);
        let html = render_table(&m, Some("/?order=asc&x=1"));

        assert!(html.contains(r#"<a href="/?order=asc&amp;x=1">Year</a>"#));
        assert!(html.contains("Drama"));
        assert!(html.contains("No rows match"));
    }
}
