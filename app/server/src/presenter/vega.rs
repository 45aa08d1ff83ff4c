//! FILENAME: app/server/src/presenter/vega.rs
// PURPOSE: Vega-Lite description of the gross-by-genre line chart.
// CONTEXT: Lets any Vega-Lite renderer draw the same chart as the SVG,
//          with the long-form rows inlined as data.

use pivot_engine::LongRow;
use serde_json::{json, Value};

use super::{LEGEND_TITLE, X_TITLE, Y_TITLE};

pub const VEGA_LITE_SCHEMA: &str = "https://vega.github.io/schema/vega-lite/v5.json";

pub fn vega_lite_spec(rows: &[LongRow], height: u32) -> Value {
    json!({
        "$schema": VEGA_LITE_SCHEMA,
        "data": { "values": rows },
        "mark": "line",
        "encoding": {
            "x": { "field": "year", "type": "nominal", "title": X_TITLE },
            "y": { "field": "gross", "type": "quantitative", "title": Y_TITLE },
            "color": { "field": "genre", "type": "nominal", "title": LEGEND_TITLE }
        },
        "height": height,
        "width": "container"
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_encodings() {
        let rows = vec![LongRow { year: 2010, genre: "Drama".to_string(), gross: 150.0 }];
        let spec = vega_lite_spec(&rows, 320);

        assert_eq!(spec["mark"], "line");
        assert_eq!(spec["encoding"]["x"]["type"], "nominal");
        assert_eq!(spec["encoding"]["y"]["title"], "Gross Earnings ($)");
        assert_eq!(spec["encoding"]["color"]["field"], "genre");
        assert_eq!(spec["height"], 320);
        assert_eq!(spec["data"]["values"][0]["gross"], 150.0);
    }

    #[test]
    fn test_empty_rows_give_empty_values() {
        let spec = vega_lite_spec(&[], 320);
        assert_eq!(spec["data"]["values"], json!([]));
    }
}
